use crate::category::FilterCategory;

/// A gallery entry as seen by the filters.
///
/// Languages and domains are lists because a sample can target several;
/// level and content type are single-valued.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub languages: Vec<&'static str>,
    pub domains: Vec<&'static str>,
    pub level: &'static str,
    pub content_type: &'static str,
    pub url: Option<String>,
}

impl SampleItem {
    /// Values this item carries for a category
    pub fn values(&self, category: FilterCategory) -> Vec<&'static str> {
        match category {
            FilterCategory::Language => self.languages.clone(),
            FilterCategory::Domain => self.domains.clone(),
            FilterCategory::Level => vec![self.level],
            FilterCategory::ContentType => vec![self.content_type],
        }
    }
}
