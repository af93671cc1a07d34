use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use movie_catalog_core::CategoryPageState;
use movie_catalog_models::Category;
use std::io::IsTerminal;
use std::time::Duration;

/// One spinner per category, each finishing as soon as its category settles
pub struct CategoryProgress {
    _multi: MultiProgress,
    spinners: Vec<(Category, ProgressBar)>,
    interactive: bool,
}

impl CategoryProgress {
    pub fn new(categories: &[Category], enabled: bool) -> Self {
        let interactive = enabled && is_interactive();
        let multi = MultiProgress::new();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ");

        let spinners = categories
            .iter()
            .map(|category| {
                let spinner = if interactive {
                    multi.add(ProgressBar::new_spinner())
                } else {
                    ProgressBar::hidden()
                };
                spinner.set_style(style.clone());
                spinner.set_message(format!("Loading {}...", category.name));
                if interactive {
                    spinner.enable_steady_tick(Duration::from_millis(100));
                }
                (*category, spinner)
            })
            .collect();

        if !interactive {
            tracing::debug!(operation = "ui_init", mode = "non_interactive", "Category spinners disabled");
        }

        Self {
            _multi: multi,
            spinners,
            interactive,
        }
    }

    /// Finish the spinners of every category that has settled
    pub fn update(&self, state: &CategoryPageState) {
        for (category, spinner) in &self.spinners {
            if spinner.is_finished() {
                continue;
            }
            let Some(load) = state.get(category.id) else {
                continue;
            };
            if !load.is_settled() {
                continue;
            }

            let message = match &load.error {
                Some(error) => format!("✗ {}: {}", category.name, error),
                None => format!("✓ {} ({})", category.name, load.movies.len()),
            };
            if self.interactive {
                spinner.finish_with_message(message);
            } else {
                spinner.finish();
                tracing::info!(operation = "category_loaded", category = category.id, "{}", message);
            }
        }
    }

    pub fn clear(&self) {
        for (_, spinner) in &self.spinners {
            spinner.finish_and_clear();
        }
    }
}

pub fn is_interactive() -> bool {
    std::io::stdout().is_terminal() && std::io::stderr().is_terminal()
}
