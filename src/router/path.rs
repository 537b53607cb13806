use crate::models::{Language, Route, Section};

/// Parse a URL path into a [`Route`].
///
/// Total: unknown sections fall back to home and a missing slug is simply
/// absent. Segments past the slug are ignored.
pub fn parse_route(path: &str) -> Route {
    let mut segments = path.split('/').filter(|segment| !segment.is_empty()).peekable();

    let language = match segments.peek() {
        Some(&"en") => {
            segments.next();
            Language::En
        }
        _ => Language::Ko,
    };

    let section = segments.next().and_then(Section::from_segment);

    let portfolio_slug = match section {
        Some(Section::Portfolio) => segments.next().map(str::to_string),
        _ => None,
    };

    Route::new(section, language, portfolio_slug)
}

/// Build the canonical path for a route's components.
///
/// A slug is only meaningful for [`Section::Portfolio`] and is dropped
/// for any other section.
pub fn build_path(section: Option<Section>, language: Language, portfolio_slug: Option<&str>) -> String {
    let prefix = match language {
        Language::En => "/en",
        Language::Ko => "",
    };

    let Some(section) = section else {
        return format!("{}/", prefix);
    };

    match (section, portfolio_slug.filter(|slug| !slug.is_empty())) {
        (Section::Portfolio, Some(slug)) => format!("{}/{}/{}", prefix, section, slug),
        (_, Some(slug)) => {
            tracing::warn!(%section, slug, "Ignoring portfolio slug outside the portfolio section");
            format!("{}/{}", prefix, section)
        }
        (_, None) => format!("{}/{}", prefix, section),
    }
}
