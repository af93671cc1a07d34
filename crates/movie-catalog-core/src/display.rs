//! Presentation helpers shared by the views

use chrono::{DateTime, Local, Utc};
use movie_catalog_models::Movie;

/// Overview length shown on wishlist entries before truncating
pub const OVERVIEW_PREVIEW_CHARS: usize = 200;

/// `142` -> `2h 22m`
pub fn format_runtime(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Whole US dollars with thousands separators, e.g. `$63,000,000`
pub fn format_currency(amount: u64) -> String {
    format!("${}", group_thousands(amount))
}

/// Count with thousands separators, e.g. `26,280`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn release_year_label(movie: &Movie) -> String {
    movie
        .release_year()
        .map(|year| year.to_string())
        .unwrap_or_else(|| "TBA".to_string())
}

pub fn format_rating(vote_average: f64) -> String {
    format!("{:.1}", vote_average)
}

/// Cut `text` to `limit` characters, appending `...` when anything was dropped
pub fn truncate_overview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Date a wishlist entry was added, in local time
pub fn format_added_date(added_at: &DateTime<Utc>) -> String {
    added_at.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

pub fn movie_count_label(count: usize) -> String {
    if count == 1 {
        "1 movie".to_string()
    } else {
        format!("{} movies", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::create_movie;

    #[test]
    fn test_format_runtime() {
        assert_eq!(format_runtime(142), "2h 22m");
        assert_eq!(format_runtime(60), "1h 0m");
        assert_eq!(format_runtime(45), "0h 45m");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(63_000_000), "$63,000,000");
        assert_eq!(format_currency(100_853_753), "$100,853,753");
        assert_eq!(format_currency(999), "$999");
        assert_eq!(format_currency(1_000), "$1,000");
        assert_eq!(format_currency(0), "$0");
    }

    #[test]
    fn test_release_year_label() {
        let mut movie = create_movie(1, "Dated");
        assert_eq!(release_year_label(&movie), "2020");

        movie.release_date = Some(String::new());
        assert_eq!(release_year_label(&movie), "TBA");

        movie.release_date = None;
        assert_eq!(release_year_label(&movie), "TBA");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(8.433), "8.4");
        assert_eq!(format_rating(7.0), "7.0");
        assert_eq!(format_rating(0.0), "0.0");
    }

    #[test]
    fn test_truncate_overview() {
        assert_eq!(truncate_overview("short", OVERVIEW_PREVIEW_CHARS), "short");

        let long = "a".repeat(250);
        let cut = truncate_overview(&long, OVERVIEW_PREVIEW_CHARS);
        assert_eq!(cut.len(), 203);
        assert!(cut.ends_with("..."));

        let exact = "b".repeat(200);
        assert_eq!(truncate_overview(&exact, OVERVIEW_PREVIEW_CHARS), exact);

        // Multi-byte characters are counted, not bytes
        assert_eq!(truncate_overview("éééé", 2), "éé...");
    }

    #[test]
    fn test_movie_count_label() {
        assert_eq!(movie_count_label(0), "0 movies");
        assert_eq!(movie_count_label(1), "1 movie");
        assert_eq!(movie_count_label(12), "12 movies");
    }

    #[test]
    fn test_format_added_date_is_a_calendar_date() {
        let added = Utc::now();
        let label = format_added_date(&added);
        assert_eq!(label.len(), 10);
        assert_eq!(label, added.with_timezone(&Local).format("%Y-%m-%d").to_string());
    }
}
