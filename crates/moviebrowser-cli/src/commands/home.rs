use super::home_ui::CategoryProgress;
use super::{new_table, print_header, AppContext};
use crate::output::Output;
use color_eyre::Result;
use comfy_table::Cell;
use movie_catalog_core::display::{format_rating, release_year_label};
use movie_catalog_core::{CategoryLoader, CategoryPageState, FileStorage, WishlistStore};
use movie_catalog_models::{Category, MOVIE_CATEGORIES};
use owo_colors::OwoColorize;
use serde_json::json;

pub async fn run_home(output: &Output) -> Result<()> {
    let ctx = AppContext::load()?;
    let client = ctx.catalog_client()?;
    let wishlist = ctx.open_wishlist()?;

    print_header(wishlist.count(), output);

    let loader = CategoryLoader::new(client, &MOVIE_CATEGORIES);
    let progress = CategoryProgress::new(loader.categories(), output.is_human());
    let mut updates = loader.subscribe();

    let watch_progress = async {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            progress.update(&state);
            if state.generation() > 0 && state.is_settled() {
                break;
            }
        }
    };

    let (state, ()) = tokio::join!(loader.activate(), watch_progress);
    progress.clear();

    if output.is_human() {
        for category in loader.categories() {
            print_category(category, &state, &wishlist);
        }
    } else {
        output.json(&home_json(loader.categories(), &state, &wishlist));
    }

    Ok(())
}

fn print_category(category: &Category, state: &CategoryPageState, wishlist: &WishlistStore<FileStorage>) {
    println!("{}", category.name.bright_cyan().bold());

    let Some(load) = state.get(category.id) else {
        return;
    };

    if let Some(error) = &load.error {
        println!(
            "{} Failed to load {}: {}\n",
            "✗".red(),
            category.name.to_lowercase(),
            error
        );
        return;
    }

    if load.movies.is_empty() {
        println!("{}\n", "No movies found".dimmed());
        return;
    }

    let mut table = new_table(&["ID", "Title", "Year", "Rating", ""]);
    for movie in &load.movies {
        let marker = if wishlist.contains(movie.id) { "♥" } else { "" };
        table.add_row(vec![
            Cell::new(movie.id),
            Cell::new(&movie.title),
            Cell::new(release_year_label(movie)),
            Cell::new(format!("⭐ {}", format_rating(movie.vote_average))),
            Cell::new(marker),
        ]);
    }
    println!("{}\n", table);
}

fn home_json(
    categories: &[Category],
    state: &CategoryPageState,
    wishlist: &WishlistStore<FileStorage>,
) -> serde_json::Value {
    let categories: Vec<_> = categories
        .iter()
        .map(|category| {
            let load = state.get(category.id);
            json!({
                "id": category.id,
                "name": category.name,
                "movies": load.map(|l| l.movies.as_slice()).unwrap_or_default(),
                "error": load.and_then(|l| l.error.as_deref()),
            })
        })
        .collect();

    json!({
        "wishlist_count": wishlist.count(),
        "categories": categories,
    })
}
