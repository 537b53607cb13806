use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four top-level content areas. `None` wherever a
/// `Option<Section>` appears means the home (landing) view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    About,
    Services,
    Portfolio,
    Clients,
}

impl Section {
    /// Every section, in quadrant order.
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Services,
        Section::Portfolio,
        Section::Clients,
    ];

    /// The URL segment for this section.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Services => "services",
            Section::Portfolio => "portfolio",
            Section::Clients => "clients",
        }
    }

    /// Match a URL segment against the known sections.
    ///
    /// The match is exact: `About` or `about/` are not sections.
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == segment)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Site language. Korean is the default and carries no URL prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ko,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ko" => Some(Language::Ko),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// The other language.
    pub fn toggled(&self) -> Self {
        match self {
            Language::Ko => Language::En,
            Language::En => Language::Ko,
        }
    }

    /// Whether a browser language tag (`ko`, `ko-KR`, `en-US`, ...) is Korean.
    pub fn is_korean_tag(tag: &str) -> bool {
        tag.trim().to_ascii_lowercase().starts_with("ko")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A route derived from a URL path.
///
/// A portfolio slug only ever accompanies [`Section::Portfolio`]; the
/// constructors drop it otherwise, and so does deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RouteRepr", rename_all = "camelCase")]
pub struct Route {
    section: Option<Section>,
    language: Language,
    portfolio_slug: Option<String>,
}

impl Route {
    pub fn new(section: Option<Section>, language: Language, portfolio_slug: Option<String>) -> Self {
        let portfolio_slug = match section {
            Some(Section::Portfolio) => portfolio_slug.filter(|slug| !slug.is_empty()),
            _ => None,
        };
        Self {
            section,
            language,
            portfolio_slug,
        }
    }

    pub fn home(language: Language) -> Self {
        Self::new(None, language, None)
    }

    pub fn section(section: Section, language: Language) -> Self {
        Self::new(Some(section), language, None)
    }

    pub fn portfolio_item(language: Language, slug: impl Into<String>) -> Self {
        Self::new(Some(Section::Portfolio), language, Some(slug.into()))
    }

    pub fn current_section(&self) -> Option<Section> {
        self.section
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn portfolio_slug(&self) -> Option<&str> {
        self.portfolio_slug.as_deref()
    }

    pub fn is_home(&self) -> bool {
        self.section.is_none()
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        crate::router::build_path(self.section, self.language, self.portfolio_slug())
    }

    /// Same section and slug in another language.
    pub fn with_language(&self, language: Language) -> Self {
        Self {
            language,
            ..self.clone()
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RouteRepr {
    #[serde(default)]
    section: Option<Section>,
    #[serde(default)]
    language: Language,
    #[serde(default)]
    portfolio_slug: Option<String>,
}

impl From<RouteRepr> for Route {
    fn from(repr: RouteRepr) -> Self {
        Route::new(repr.section, repr.language, repr.portfolio_slug)
    }
}
