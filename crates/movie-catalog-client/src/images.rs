use movie_catalog_config::DEFAULT_IMAGE_BASE_URL;

pub const POSTER_PLACEHOLDER_URL: &str = "https://via.placeholder.com/500x750/333333/ffffff?text=No+Image";
pub const BACKDROP_PLACEHOLDER_URL: &str = "https://via.placeholder.com/1280x720/333333/ffffff?text=No+Backdrop";

/// Image width tokens understood by the image CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSize {
    Small,
    #[default]
    Medium,
    Large,
    Original,
}

impl ImageSize {
    pub fn token(&self) -> &'static str {
        match self {
            ImageSize::Small => "w185",
            ImageSize::Medium => "w500",
            ImageSize::Large => "w1280",
            ImageSize::Original => "original",
        }
    }
}

/// Turns relative image paths from the catalog into absolute URLs
///
/// Pure string assembly; never touches the network.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    base_url: String,
}

impl ImageResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn resolve_image_url(&self, path: Option<&str>, size: ImageSize) -> String {
        match path.filter(|p| !p.is_empty()) {
            Some(path) => format!("{}/{}{}", self.base_url, size.token(), path),
            None => POSTER_PLACEHOLDER_URL.to_string(),
        }
    }

    /// Poster URL at the default size
    pub fn poster_url(&self, path: Option<&str>) -> String {
        self.resolve_image_url(path, ImageSize::default())
    }

    pub fn resolve_backdrop_url(&self, path: Option<&str>) -> String {
        match path.filter(|p| !p.is_empty()) {
            Some(path) => format!("{}/{}{}", self.base_url, ImageSize::Large.token(), path),
            None => BACKDROP_PLACEHOLDER_URL.to_string(),
        }
    }
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_for_missing_paths() {
        let resolver = ImageResolver::default();
        assert_eq!(resolver.resolve_image_url(None, ImageSize::Medium), POSTER_PLACEHOLDER_URL);
        assert_eq!(resolver.resolve_image_url(Some(""), ImageSize::Small), POSTER_PLACEHOLDER_URL);
        assert_eq!(resolver.resolve_backdrop_url(None), BACKDROP_PLACEHOLDER_URL);
        assert_eq!(resolver.resolve_backdrop_url(Some("")), BACKDROP_PLACEHOLDER_URL);
    }

    #[test]
    fn test_resolves_relative_paths() {
        let resolver = ImageResolver::default();
        assert_eq!(
            resolver.poster_url(Some("/abc.jpg")),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(
            resolver.resolve_image_url(Some("/abc.jpg"), ImageSize::Original),
            "https://image.tmdb.org/t/p/original/abc.jpg"
        );
        assert_eq!(
            resolver.resolve_backdrop_url(Some("/wide.jpg")),
            "https://image.tmdb.org/t/p/w1280/wide.jpg"
        );
    }

    #[test]
    fn test_custom_base_trailing_slash() {
        let resolver = ImageResolver::new("http://cdn.local/img/");
        assert_eq!(
            resolver.resolve_image_url(Some("/p.png"), ImageSize::Small),
            "http://cdn.local/img/w185/p.png"
        );
    }
}
