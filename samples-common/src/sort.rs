use crate::sample::SampleItem;

/// Ordering applied to the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOption {
    Relevance,
    AToZ,
    ZToA,
}

#[allow(clippy::derivable_impls)]
impl Default for SortOption {
    fn default() -> Self {
        SortOption::Relevance
    }
}

impl SortOption {
    pub const ALL: [SortOption; 3] = [SortOption::Relevance, SortOption::AToZ, SortOption::ZToA];

    pub fn label(self) -> &'static str {
        match self {
            SortOption::Relevance => "Relevance",
            SortOption::AToZ => "A to Z",
            SortOption::ZToA => "Z to A",
        }
    }

    pub fn from_label(label: &str) -> Option<SortOption> {
        SortOption::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Sort items in place. Relevance keeps the incoming order.
    pub fn sort(self, items: &mut [SampleItem]) {
        match self {
            SortOption::Relevance => {}
            SortOption::AToZ => items.sort_by_key(|item| item.title.to_lowercase()),
            SortOption::ZToA => {
                items.sort_by_key(|item| std::cmp::Reverse(item.title.to_lowercase()))
            }
        }
    }
}
