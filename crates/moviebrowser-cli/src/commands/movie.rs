use super::{new_table, print_header, AppContext};
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::Cell;
use movie_catalog_client::ImageResolver;
use movie_catalog_core::display::{
    format_currency, format_rating, format_runtime, group_thousands, release_year_label,
};
use movie_catalog_core::DetailLoader;
use movie_catalog_models::{Category, MovieDetails};
use owo_colors::OwoColorize;
use serde_json::json;
use std::time::Duration;

const RECOVERY_HINT: &str = "Run 'moviebrowser home' to browse movies";

pub async fn run_movie(
    raw_id: &str,
    category_id: Option<&str>,
    toggle_wishlist: bool,
    output: &Output,
) -> Result<()> {
    let ctx = AppContext::load()?;
    let client = ctx.catalog_client()?;
    let mut wishlist = ctx.open_wishlist()?;
    let category = Category::find_or_default(category_id);
    let images = client.images().clone();

    let loader = DetailLoader::new(client);

    let spinner = indicatif::ProgressBar::new_spinner();
    if output.is_human() {
        spinner.set_style(
            indicatif::ProgressStyle::default_spinner()
                .template("{spinner:.blue} {msg}")
                .unwrap_or_else(|_| indicatif::ProgressStyle::default_spinner()),
        );
        spinner.set_message("Loading movie details...");
        spinner.enable_steady_tick(Duration::from_millis(100));
    } else {
        spinner.set_draw_target(indicatif::ProgressDrawTarget::hidden());
    }

    let state = loader.load_route(Some(raw_id)).await;
    spinner.finish_and_clear();

    let details = match (state.data, state.error) {
        (Some(details), None) => details,
        (_, error) => {
            let message = error.unwrap_or_else(|| "Movie not found".to_string());
            report_failure(&message, output);
            return Err(eyre!("Could not show movie '{}'", raw_id));
        }
    };

    if toggle_wishlist {
        if wishlist.toggle(details.summary(), category.id) {
            output.success(format!("Added \"{}\" to wishlist", details.title()));
        } else {
            output.success(format!("Removed \"{}\" from wishlist", details.title()));
        }
    }

    let in_wishlist = wishlist.contains(details.id());

    if output.is_human() {
        print_header(wishlist.count(), output);
        print_details(&details, category, in_wishlist, &images);
    } else {
        output.json(&json!({
            "category": category.id,
            "in_wishlist": in_wishlist,
            "poster_url": images.poster_url(details.movie.poster_path.as_deref()),
            "backdrop_url": images.resolve_backdrop_url(details.backdrop_path.as_deref()),
            "details": details,
        }));
    }

    Ok(())
}

/// Error state of the detail view, with a way back to browsing
fn report_failure(message: &str, output: &Output) {
    if output.is_human() {
        output.error(message);
        output.info(format!("{} {}", "→".bright_blue(), RECOVERY_HINT));
    } else if output.is_json() {
        output.json(&failure_json(message));
    } else {
        output.error(message);
    }
}

fn failure_json(message: &str) -> serde_json::Value {
    json!({
        "type": "error",
        "message": message,
        "hint": RECOVERY_HINT,
    })
}

fn print_details(details: &MovieDetails, category: &Category, in_wishlist: bool, images: &ImageResolver) {
    println!(
        "{} / {} / {}",
        "Home".dimmed(),
        category.name.dimmed(),
        details.title()
    );
    println!();

    println!(
        "{} {}",
        details.title().bright_white().bold(),
        format!("({})", release_year_label(&details.movie)).dimmed()
    );
    if let Some(tagline) = details.tagline() {
        println!("{}", format!("\"{}\"", tagline).italic());
    }

    let mut facts = Vec::new();
    if let Some(minutes) = details.runtime_minutes.filter(|m| *m > 0) {
        facts.push(format_runtime(minutes));
    }
    facts.push(format!("⭐ {}", format_rating(details.movie.vote_average)));
    facts.push(format!("({} votes)", group_thousands(details.vote_count)));
    println!("{}", facts.join("  "));

    if !details.genres.is_empty() {
        let genres: Vec<_> = details.genres.iter().map(|g| g.name.as_str()).collect();
        println!("{}", genres.join(" · ").yellow());
    }
    println!();

    if !details.movie.overview.is_empty() {
        println!("{}", "Overview".bright_cyan().bold());
        println!("{}", details.movie.overview);
        println!();
    }

    if details.budget > 0 {
        let mut table = new_table(&["Details", ""]);
        table.add_row(vec![Cell::new("Budget"), Cell::new(format_currency(details.budget))]);
        if details.revenue > 0 {
            table.add_row(vec![Cell::new("Revenue"), Cell::new(format_currency(details.revenue))]);
        }
        table.add_row(vec![Cell::new("Status"), Cell::new(&details.status)]);
        if !details.production_companies.is_empty() {
            let companies: Vec<_> = details
                .production_companies
                .iter()
                .map(|c| c.name.as_str())
                .collect();
            table.add_row(vec![Cell::new("Production"), Cell::new(companies.join(", "))]);
        }
        println!("{}", table);
        println!();
    }

    println!("{} {}", "Poster:".dimmed(), images.poster_url(details.movie.poster_path.as_deref()));

    if in_wishlist {
        println!("{}", "♥ In your wishlist".red());
    } else {
        println!(
            "{}",
            "♡ Not in your wishlist (use --toggle-wishlist to add)".dimmed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_json_carries_recovery_hint() {
        let payload = failure_json("Invalid movie ID: abc");
        assert_eq!(payload["type"], "error");
        assert_eq!(payload["message"], "Invalid movie ID: abc");
        assert_eq!(payload["hint"], "Run 'moviebrowser home' to browse movies");
    }
}
