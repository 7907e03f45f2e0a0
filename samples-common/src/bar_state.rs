use crate::category::FilterCategory;
use crate::selection::FilterSelection;
use crate::sort::SortOption;

/// Duration of the drawer slide animation, in both directions
pub const DRAWER_ANIMATION_MS: u64 = 200;

/// Lifecycle of the mobile filter drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerPhase {
    /// Not rendered
    #[default]
    Closed,
    /// Rendered, sliding in or fully shown
    Open,
    /// Rendered, sliding out; unmounted once the animation ends
    Closing,
}

/// What a drawer action asks the selection owner to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerOutcome {
    /// Keep the current selection
    Keep,
    /// Reset every category and the sort
    Reset,
}

impl DrawerOutcome {
    pub fn apply_to(self, selection: &mut FilterSelection) {
        if self == DrawerOutcome::Reset {
            selection.clear();
        }
    }
}

/// UI-local state of the filter bar.
///
/// At most one desktop dropdown is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterBarState {
    current_selection: Option<FilterCategory>,
    drawer: DrawerPhase,
}

impl FilterBarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The open dropdown, if any
    pub fn current_selection(&self) -> Option<FilterCategory> {
        self.current_selection
    }

    pub fn is_open(&self, category: FilterCategory) -> bool {
        self.current_selection == Some(category)
    }

    /// Header click: close the dropdown if it is open, otherwise open it in place of any other.
    pub fn toggle_dropdown(&mut self, category: FilterCategory) {
        self.current_selection = if self.is_open(category) {
            None
        } else {
            Some(category)
        };
    }

    pub fn close_dropdown(&mut self) {
        self.current_selection = None;
    }

    /// Picking a sort closes the dropdown. Returns the sort for the caller to store.
    pub fn select_sort(&mut self, sort: SortOption) -> SortOption {
        self.current_selection = None;
        sort
    }

    /// Clear-all closes the dropdown; the owner resets the selection itself.
    pub fn clear_all(&mut self) {
        self.current_selection = None;
    }

    /// A click landed outside the select boxes. Returns whether a dropdown was closed.
    pub fn outside_click(&mut self) -> bool {
        self.current_selection.take().is_some()
    }

    pub fn drawer(&self) -> DrawerPhase {
        self.drawer
    }

    /// Whether the drawer is mounted (open or animating out)
    pub fn drawer_visible(&self) -> bool {
        self.drawer != DrawerPhase::Closed
    }

    pub fn open_drawer(&mut self) {
        self.drawer = DrawerPhase::Open;
    }

    /// Start the exit animation. No-op when already closed.
    pub fn close_drawer(&mut self) {
        if self.drawer == DrawerPhase::Open {
            self.drawer = DrawerPhase::Closing;
        }
    }

    /// "Apply Filters": close the drawer, keep the selection.
    pub fn apply_drawer(&mut self) -> DrawerOutcome {
        self.close_drawer();
        DrawerOutcome::Keep
    }

    /// "Clear Filters": close the drawer and any dropdown, reset the selection.
    pub fn clear_drawer(&mut self) -> DrawerOutcome {
        self.clear_all();
        self.close_drawer();
        DrawerOutcome::Reset
    }

    /// Unmount the drawer after its exit animation. Ignored if it was reopened meanwhile.
    pub fn finish_drawer_exit(&mut self) {
        if self.drawer == DrawerPhase::Closing {
            self.drawer = DrawerPhase::Closed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let state = FilterBarState::new();
        assert_eq!(state.current_selection(), None);
        assert_eq!(state.drawer(), DrawerPhase::Closed);
        assert!(!state.drawer_visible());
    }

    #[test]
    fn test_toggle_same_dropdown_closes_it() {
        let mut state = FilterBarState::new();
        state.toggle_dropdown(FilterCategory::Level);
        assert!(state.is_open(FilterCategory::Level));

        state.toggle_dropdown(FilterCategory::Level);
        assert_eq!(state.current_selection(), None);
    }

    #[test]
    fn test_opening_another_dropdown_closes_previous() {
        let mut state = FilterBarState::new();
        state.toggle_dropdown(FilterCategory::Language);
        state.toggle_dropdown(FilterCategory::Domain);

        assert!(state.is_open(FilterCategory::Domain));
        let open: Vec<_> = FilterCategory::ALL
            .into_iter()
            .filter(|c| state.is_open(*c))
            .collect();
        assert_eq!(open, vec![FilterCategory::Domain]);
    }

    #[test]
    fn test_close_and_clear_all_close_dropdown() {
        let mut state = FilterBarState::new();
        state.toggle_dropdown(FilterCategory::ContentType);
        state.close_dropdown();
        assert_eq!(state.current_selection(), None);

        state.toggle_dropdown(FilterCategory::ContentType);
        state.clear_all();
        assert_eq!(state.current_selection(), None);
    }

    #[test]
    fn test_select_sort_closes_dropdown() {
        let mut state = FilterBarState::new();
        state.toggle_dropdown(FilterCategory::Language);
        assert_eq!(state.select_sort(SortOption::ZToA), SortOption::ZToA);
        assert_eq!(state.current_selection(), None);
    }

    #[test]
    fn test_drawer_open_close_cycle() {
        let mut state = FilterBarState::new();
        state.open_drawer();
        assert_eq!(state.drawer(), DrawerPhase::Open);

        state.close_drawer();
        assert_eq!(state.drawer(), DrawerPhase::Closing);
        assert!(state.drawer_visible());

        state.finish_drawer_exit();
        assert_eq!(state.drawer(), DrawerPhase::Closed);
        assert!(!state.drawer_visible());
    }

    #[test]
    fn test_reopen_during_exit_keeps_drawer() {
        let mut state = FilterBarState::new();
        state.open_drawer();
        state.close_drawer();
        state.open_drawer();
        state.finish_drawer_exit();
        assert_eq!(state.drawer(), DrawerPhase::Open);
    }

    #[test]
    fn test_close_drawer_when_closed_is_noop() {
        let mut state = FilterBarState::new();
        state.close_drawer();
        assert_eq!(state.drawer(), DrawerPhase::Closed);
    }

    #[test]
    fn test_outside_click_closes_open_dropdown() {
        let mut state = FilterBarState::new();
        state.toggle_dropdown(FilterCategory::Domain);

        assert!(state.outside_click());
        assert_eq!(state.current_selection(), None);
        assert!(!state.outside_click());
    }

    #[test]
    fn test_outside_click_leaves_drawer_alone() {
        let mut state = FilterBarState::new();
        state.open_drawer();
        assert!(!state.outside_click());
        assert_eq!(state.drawer(), DrawerPhase::Open);
    }

    fn active_selection() -> FilterSelection {
        let mut selection = FilterSelection::default();
        selection.toggle(FilterCategory::Language, "Rust");
        selection.toggle(FilterCategory::Level, "Advanced");
        selection.sort_by = SortOption::AToZ;
        selection
    }

    #[test]
    fn test_apply_drawer_closes_and_keeps_selection() {
        let mut state = FilterBarState::new();
        state.toggle_dropdown(FilterCategory::Level);
        state.open_drawer();

        let outcome = state.apply_drawer();
        assert_eq!(outcome, DrawerOutcome::Keep);
        assert_eq!(state.drawer(), DrawerPhase::Closing);
        assert!(state.is_open(FilterCategory::Level));

        let mut selection = active_selection();
        outcome.apply_to(&mut selection);
        assert_eq!(selection, active_selection());
    }

    #[test]
    fn test_clear_drawer_closes_and_resets_selection() {
        let mut state = FilterBarState::new();
        state.toggle_dropdown(FilterCategory::Level);
        state.open_drawer();

        let outcome = state.clear_drawer();
        assert_eq!(outcome, DrawerOutcome::Reset);
        assert_eq!(state.drawer(), DrawerPhase::Closing);
        assert_eq!(state.current_selection(), None);

        let mut selection = active_selection();
        outcome.apply_to(&mut selection);
        assert!(!selection.has_active_filters());
        assert_eq!(selection.sort_by, SortOption::Relevance);
    }

    #[test]
    fn test_drawer_does_not_touch_dropdown() {
        let mut state = FilterBarState::new();
        state.toggle_dropdown(FilterCategory::Domain);
        state.open_drawer();
        state.close_drawer();
        assert!(state.is_open(FilterCategory::Domain));
    }
}
