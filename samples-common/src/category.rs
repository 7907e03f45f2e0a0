/// One filterable dimension of the sample gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterCategory {
    Language,
    Domain,
    Level,
    ContentType,
}

const LANGUAGE_OPTIONS: &[&str] = &["Motoko", "Rust", "Javascript"];
const DOMAIN_OPTIONS: &[&str] = &["Global", "Gaming", "DeFi", "Website", "NFT"];
const LEVEL_OPTIONS: &[&str] = &["Beginner", "Intermediate", "Advanced"];
const CONTENT_TYPE_OPTIONS: &[&str] = &["Code Samples", "Videos", "Documentation", "Live Demos"];

impl FilterCategory {
    /// All categories in display order
    pub const ALL: [FilterCategory; 4] = [
        FilterCategory::Language,
        FilterCategory::Domain,
        FilterCategory::Level,
        FilterCategory::ContentType,
    ];

    /// Stable key used for element IDs and URL state
    pub fn key(self) -> &'static str {
        match self {
            FilterCategory::Language => "language",
            FilterCategory::Domain => "domain",
            FilterCategory::Level => "level",
            FilterCategory::ContentType => "contentType",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterCategory::Language => "Language",
            FilterCategory::Domain => "Domain",
            FilterCategory::Level => "Level",
            FilterCategory::ContentType => "Content Type",
        }
    }

    /// Static option list, in display order
    pub fn options(self) -> &'static [&'static str] {
        match self {
            FilterCategory::Language => LANGUAGE_OPTIONS,
            FilterCategory::Domain => DOMAIN_OPTIONS,
            FilterCategory::Level => LEVEL_OPTIONS,
            FilterCategory::ContentType => CONTENT_TYPE_OPTIONS,
        }
    }

    /// Resolve a value to the canonical static option, if it belongs to this category.
    pub fn option(self, value: &str) -> Option<&'static str> {
        self.options().iter().copied().find(|o| *o == value)
    }

    pub fn from_key(key: &str) -> Option<FilterCategory> {
        FilterCategory::ALL.into_iter().find(|c| c.key() == key)
    }
}
