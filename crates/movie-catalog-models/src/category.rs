use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Remote listing a category is backed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryEndpoint {
    Popular,
    TopRated,
    Upcoming,
}

impl CategoryEndpoint {
    /// Endpoint name as used in the catalog path (`/movie/<name>`)
    pub fn name(&self) -> &'static str {
        match self {
            CategoryEndpoint::Popular => "popular",
            CategoryEndpoint::TopRated => "top_rated",
            CategoryEndpoint::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for CategoryEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CategoryEndpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popular" => Ok(CategoryEndpoint::Popular),
            "top_rated" => Ok(CategoryEndpoint::TopRated),
            "upcoming" => Ok(CategoryEndpoint::Upcoming),
            _ => Err(format!("Unknown category endpoint: {}", s)),
        }
    }
}

/// Presentational button variant attached to a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Accent,
}

/// Static listing configuration
///
/// The font family and button style are display hints only; the core never
/// interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub endpoint: CategoryEndpoint,
    pub font_family: &'static str,
    pub button_style: ButtonStyle,
}

pub const MOVIE_CATEGORIES: [Category; 3] = [
    Category {
        id: "popular",
        name: "Popular Movies",
        endpoint: CategoryEndpoint::Popular,
        font_family: "Arial, sans-serif",
        button_style: ButtonStyle::Primary,
    },
    Category {
        id: "top-rated",
        name: "Top Rated Movies",
        endpoint: CategoryEndpoint::TopRated,
        font_family: "Georgia, serif",
        button_style: ButtonStyle::Secondary,
    },
    Category {
        id: "upcoming",
        name: "Upcoming Movies",
        endpoint: CategoryEndpoint::Upcoming,
        font_family: "Courier New, monospace",
        button_style: ButtonStyle::Accent,
    },
];

impl Category {
    /// Look up a category by its stable id
    pub fn find(id: &str) -> Option<&'static Category> {
        MOVIE_CATEGORIES.iter().find(|c| c.id == id)
    }

    /// Look up a category, falling back to the first one for unknown or missing ids
    pub fn find_or_default(id: Option<&str>) -> &'static Category {
        id.and_then(Category::find).unwrap_or(&MOVIE_CATEGORIES[0])
    }

    /// All category ids, in display order
    pub fn ids() -> Vec<&'static str> {
        MOVIE_CATEGORIES.iter().map(|c| c.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_ids_are_unique() {
        let mut ids = Category::ids();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), MOVIE_CATEGORIES.len());
    }

    #[test]
    fn test_find_or_default() {
        assert_eq!(Category::find_or_default(Some("upcoming")).name, "Upcoming Movies");
        assert_eq!(Category::find_or_default(Some("nonsense")).id, "popular");
        assert_eq!(Category::find_or_default(None).id, "popular");
    }

    #[test]
    fn test_endpoint_names_round_trip() {
        for category in MOVIE_CATEGORIES.iter() {
            let parsed: CategoryEndpoint = category.endpoint.name().parse().unwrap();
            assert_eq!(parsed, category.endpoint);
        }
        assert!("now_playing".parse::<CategoryEndpoint>().is_err());
    }
}
