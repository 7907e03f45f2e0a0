use std::collections::BTreeSet;

use crate::category::FilterCategory;
use crate::sample::SampleItem;
use crate::sort::SortOption;

/// Checked options within one category.
///
/// Values are always borrowed from the category's static option list.
pub type SelectionSet = BTreeSet<&'static str>;

/// Filter and sort choices for the gallery, owned by the page hosting the filter bar
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub languages: SelectionSet,
    pub domains: SelectionSet,
    pub levels: SelectionSet,
    pub content_types: SelectionSet,
    pub sort_by: SortOption,
}

impl FilterSelection {
    pub fn get(&self, category: FilterCategory) -> &SelectionSet {
        match category {
            FilterCategory::Language => &self.languages,
            FilterCategory::Domain => &self.domains,
            FilterCategory::Level => &self.levels,
            FilterCategory::ContentType => &self.content_types,
        }
    }

    fn get_mut(&mut self, category: FilterCategory) -> &mut SelectionSet {
        match category {
            FilterCategory::Language => &mut self.languages,
            FilterCategory::Domain => &mut self.domains,
            FilterCategory::Level => &mut self.levels,
            FilterCategory::ContentType => &mut self.content_types,
        }
    }

    /// Replace a category's set. Values outside the category's options are dropped.
    pub fn set(&mut self, category: FilterCategory, values: SelectionSet) {
        *self.get_mut(category) = values
            .into_iter()
            .filter_map(|v| category.option(v))
            .collect();
    }

    /// The set that results from clicking `value` in `category`.
    ///
    /// Adds the value when absent, removes it when present. Unknown values
    /// leave the set unchanged.
    pub fn toggled(&self, category: FilterCategory, value: &str) -> SelectionSet {
        let mut next = self.get(category).clone();
        if let Some(option) = category.option(value) {
            if !next.remove(option) {
                next.insert(option);
            }
        }
        next
    }

    pub fn toggle(&mut self, category: FilterCategory, value: &str) {
        let next = self.toggled(category, value);
        *self.get_mut(category) = next;
    }

    pub fn has_active_filters(&self) -> bool {
        FilterCategory::ALL
            .iter()
            .any(|category| !self.get(*category).is_empty())
    }

    /// Total number of checked options across all categories
    pub fn active_count(&self) -> usize {
        FilterCategory::ALL
            .iter()
            .map(|category| self.get(*category).len())
            .sum()
    }

    pub fn cleared() -> Self {
        Self::default()
    }

    /// Empty every category and reset the sort to Relevance.
    pub fn clear(&mut self) {
        *self = Self::cleared();
    }

    /// An item matches when every non-empty category shares at least one value with it.
    pub fn matches(&self, item: &SampleItem) -> bool {
        FilterCategory::ALL.iter().all(|category| {
            let selected = self.get(*category);
            selected.is_empty()
                || item
                    .values(*category)
                    .iter()
                    .any(|value| selected.contains(value))
        })
    }

    /// Items that pass the filters, in the chosen sort order
    pub fn apply(&self, items: &[SampleItem]) -> Vec<SampleItem> {
        let mut visible: Vec<SampleItem> = items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect();
        self.sort_by.sort(&mut visible);
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, languages: Vec<&'static str>, level: &'static str) -> SampleItem {
        SampleItem {
            id: id.to_string(),
            title: id.to_string(),
            languages,
            domains: vec!["Global"],
            level,
            content_type: "Code Samples",
            ..Default::default()
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = FilterSelection::default();
        selection.toggle(FilterCategory::Language, "Rust");
        assert!(selection.languages.contains("Rust"));

        selection.toggle(FilterCategory::Language, "Rust");
        assert!(selection.languages.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_original_set() {
        let mut selection = FilterSelection::default();
        selection.toggle(FilterCategory::Domain, "DeFi");
        selection.toggle(FilterCategory::Domain, "NFT");
        let before = selection.clone();

        selection.toggle(FilterCategory::Domain, "Gaming");
        selection.toggle(FilterCategory::Domain, "Gaming");
        assert_eq!(selection, before);

        selection.toggle(FilterCategory::Domain, "DeFi");
        selection.toggle(FilterCategory::Domain, "DeFi");
        assert_eq!(selection, before);
    }

    #[test]
    fn test_toggled_is_pure() {
        let selection = FilterSelection::default();
        let next = selection.toggled(FilterCategory::Level, "Advanced");
        assert_eq!(next.len(), 1);
        assert!(selection.levels.is_empty());
    }

    #[test]
    fn test_toggle_unknown_value_is_noop() {
        let mut selection = FilterSelection::default();
        selection.toggle(FilterCategory::Language, "Haskell");
        selection.toggle(FilterCategory::Level, "Rust");
        assert!(!selection.has_active_filters());
    }

    #[test]
    fn test_set_drops_foreign_values() {
        let mut selection = FilterSelection::default();
        selection.set(
            FilterCategory::Language,
            SelectionSet::from(["Rust", "Gaming"]),
        );
        assert_eq!(selection.languages, SelectionSet::from(["Rust"]));
    }

    #[test]
    fn test_has_active_filters_tracks_any_category() {
        let mut selection = FilterSelection::default();
        assert!(!selection.has_active_filters());

        for category in FilterCategory::ALL {
            let option = category.options()[0];
            selection.toggle(category, option);
            assert!(selection.has_active_filters());
            selection.toggle(category, option);
            assert!(!selection.has_active_filters());
        }
    }

    #[test]
    fn test_sort_does_not_count_as_active_filter() {
        let selection = FilterSelection {
            sort_by: SortOption::ZToA,
            ..Default::default()
        };
        assert!(!selection.has_active_filters());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut selection = FilterSelection::default();
        selection.toggle(FilterCategory::Language, "Motoko");
        selection.toggle(FilterCategory::Domain, "Website");
        selection.toggle(FilterCategory::Level, "Beginner");
        selection.toggle(FilterCategory::ContentType, "Videos");
        selection.sort_by = SortOption::AToZ;
        assert_eq!(selection.active_count(), 4);

        selection.clear();
        for category in FilterCategory::ALL {
            assert!(selection.get(category).is_empty());
        }
        assert_eq!(selection.sort_by, SortOption::Relevance);
    }

    #[test]
    fn test_empty_selection_matches_everything() {
        let selection = FilterSelection::default();
        assert!(selection.matches(&sample("a", vec!["Rust"], "Beginner")));
        assert!(selection.matches(&sample("b", vec![], "Advanced")));
    }

    #[test]
    fn test_matches_within_category_is_any() {
        let mut selection = FilterSelection::default();
        selection.toggle(FilterCategory::Language, "Rust");
        selection.toggle(FilterCategory::Language, "Motoko");

        assert!(selection.matches(&sample("a", vec!["Rust"], "Beginner")));
        assert!(selection.matches(&sample("b", vec!["Motoko", "Javascript"], "Beginner")));
        assert!(!selection.matches(&sample("c", vec!["Javascript"], "Beginner")));
    }

    #[test]
    fn test_matches_across_categories_is_all() {
        let mut selection = FilterSelection::default();
        selection.toggle(FilterCategory::Language, "Rust");
        selection.toggle(FilterCategory::Level, "Advanced");

        assert!(selection.matches(&sample("a", vec!["Rust"], "Advanced")));
        assert!(!selection.matches(&sample("b", vec!["Rust"], "Beginner")));
    }

    #[test]
    fn test_apply_filters_and_sorts() {
        let items = vec![
            sample("zeta", vec!["Rust"], "Beginner"),
            sample("alpha", vec!["Motoko"], "Beginner"),
            sample("beta", vec!["Rust"], "Advanced"),
        ];
        let mut selection = FilterSelection::default();
        selection.toggle(FilterCategory::Language, "Rust");
        selection.sort_by = SortOption::AToZ;

        let visible: Vec<String> = selection.apply(&items).into_iter().map(|i| i.id).collect();
        assert_eq!(visible, vec!["beta", "zeta"]);
    }
}
