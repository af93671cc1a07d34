use super::{new_table, print_header, prompts, AppContext};
use crate::output::Output;
use crate::WishlistCommands;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::Cell;
use movie_catalog_client::CatalogSource;
use movie_catalog_core::display::{
    format_added_date, format_rating, movie_count_label, release_year_label, truncate_overview,
    OVERVIEW_PREVIEW_CHARS,
};
use movie_catalog_core::{FileStorage, WishlistStore};
use movie_catalog_models::{Category, MovieId};
use owo_colors::OwoColorize;
use serde_json::json;

pub async fn run_wishlist(cmd: WishlistCommands, output: &Output) -> Result<()> {
    let ctx = AppContext::load()?;
    let mut wishlist = ctx.open_wishlist()?;

    match cmd {
        WishlistCommands::List => list(&wishlist, output),
        WishlistCommands::Add { id, category } => add(&ctx, &mut wishlist, id, &category, output).await,
        WishlistCommands::Remove { id } => remove(&mut wishlist, id, output),
        WishlistCommands::Clear { yes } => clear(&mut wishlist, yes, output),
        WishlistCommands::Count => {
            if output.is_human() {
                println!("{}", wishlist.count());
            } else {
                output.json(&json!({ "count": wishlist.count() }));
            }
            Ok(())
        }
    }
}

fn list(wishlist: &WishlistStore<FileStorage>, output: &Output) -> Result<()> {
    if !output.is_human() {
        let groups: Vec<_> = wishlist
            .grouped_by_category()
            .iter()
            .map(|group| {
                json!({
                    "category": group.category_id,
                    "name": group.display_name(),
                    "items": group.entries,
                })
            })
            .collect();
        output.json(&json!({ "count": wishlist.count(), "groups": groups }));
        return Ok(());
    }

    print_header(wishlist.count(), output);
    println!(
        "{} {}",
        "My Wishlist".bright_white().bold(),
        format!("({})", movie_count_label(wishlist.count())).dimmed()
    );
    println!();

    if wishlist.is_empty() {
        output.info("Your wishlist is empty. Browse movies and use 'moviebrowser movie <id> --toggle-wishlist' to add one.");
        return Ok(());
    }

    for group in wishlist.grouped_by_category() {
        println!(
            "{} {}",
            group.display_name().bright_cyan().bold(),
            format!("({})", movie_count_label(group.entries.len())).dimmed()
        );

        let mut table = new_table(&["ID", "Title", "Year", "Rating", "Added", "Overview"]);
        for entry in &group.entries {
            table.add_row(vec![
                Cell::new(entry.movie.id),
                Cell::new(&entry.movie.title),
                Cell::new(release_year_label(&entry.movie)),
                Cell::new(format!("⭐ {}", format_rating(entry.movie.vote_average))),
                Cell::new(format_added_date(&entry.added_at)),
                Cell::new(truncate_overview(&entry.movie.overview, OVERVIEW_PREVIEW_CHARS)),
            ]);
        }
        println!("{}\n", table);
    }

    Ok(())
}

async fn add(
    ctx: &AppContext,
    wishlist: &mut WishlistStore<FileStorage>,
    movie_id: MovieId,
    category_id: &str,
    output: &Output,
) -> Result<()> {
    let category = Category::find(category_id).ok_or_else(|| {
        eyre!(
            "Unknown category '{}'. Expected one of: {}",
            category_id,
            Category::ids().join(", ")
        )
    })?;

    if let Some(entry) = wishlist.get(movie_id) {
        output.info(format!(
            "\"{}\" is already in your wishlist under {}",
            entry.movie.title, entry.category
        ));
        return Ok(());
    }

    let client = ctx.catalog_client()?;
    let details = client
        .fetch_details(movie_id)
        .await
        .map_err(|e| eyre!("Failed to load movie {}: {}", movie_id, e))?;

    wishlist.add(details.summary(), category.id);
    output.success(format!("Added \"{}\" to {}", details.title(), category.name));
    Ok(())
}

fn remove(wishlist: &mut WishlistStore<FileStorage>, movie_id: MovieId, output: &Output) -> Result<()> {
    let title = wishlist.get(movie_id).map(|e| e.movie.title.clone());
    match title {
        Some(title) if wishlist.remove(movie_id) => {
            output.success(format!("Removed \"{}\" from wishlist", title));
        }
        _ => output.warn(format!("Movie {} is not in your wishlist", movie_id)),
    }
    Ok(())
}

fn clear(wishlist: &mut WishlistStore<FileStorage>, yes: bool, output: &Output) -> Result<()> {
    if wishlist.is_empty() {
        output.info("Wishlist is already empty");
        return Ok(());
    }

    let count = wishlist.count();
    if !yes {
        let prompt = format!("Remove all {} from your wishlist?", movie_count_label(count));
        if !prompts::prompt_yes_no(&prompt, false)? {
            output.info("Nothing removed");
            return Ok(());
        }
    }

    wishlist.clear();
    output.success(format!("Cleared {} from wishlist", movie_count_label(count)));
    Ok(())
}
