//! Single-selection tab and toggle groups.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabOption {
    pub id: String,
    pub label: String,
}

impl TabOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Ordered options with exactly one selected.
///
/// Ids are not checked for uniqueness; lookups resolve to the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabSet {
    options: Vec<TabOption>,
    selected: usize,
}

impl TabSet {
    /// Starts on `initial` when it names an option, otherwise on the first.
    pub fn new(options: Vec<TabOption>, initial: &str) -> Self {
        let selected = options
            .iter()
            .position(|option| option.id == initial)
            .unwrap_or(0);
        Self { options, selected }
    }

    pub fn options(&self) -> &[TabOption] {
        &self.options
    }

    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.options.get(self.selected).map(|option| option.id.as_str())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.selected_id() == Some(id)
    }

    /// Selects `id` and reports it through `on_change`.
    ///
    /// Unknown ids leave the selection alone and do not call back. Picking the
    /// already-active option still calls back.
    pub fn interact(&mut self, id: &str, on_change: impl FnOnce(&str)) -> bool {
        let Some(index) = self.options.iter().position(|option| option.id == id) else {
            return false;
        };
        self.selected = index;
        on_change(&self.options[index].id);
        true
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        if index >= self.options.len() {
            return false;
        }
        self.selected = index;
        true
    }

    pub fn next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + self.options.len() - 1) % self.options.len();
        }
    }
}

/// A pair-or-more of mutually exclusive buttons. Behaves like a [`TabSet`]
/// but is drawn inline and only changes through [`ToggleGroup::interact`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleGroup {
    tabs: TabSet,
}

impl ToggleGroup {
    pub fn new(options: Vec<TabOption>, initial: &str) -> Self {
        Self {
            tabs: TabSet::new(options, initial),
        }
    }

    pub fn options(&self) -> &[TabOption] {
        self.tabs.options()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.tabs.selected_id()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.tabs.is_active(id)
    }

    pub fn interact(&mut self, id: &str, on_change: impl FnOnce(&str)) -> bool {
        self.tabs.interact(id, on_change)
    }
}

#[cfg(test)]
mod tests {
    use super::{TabOption, TabSet, ToggleGroup};

    fn phases() -> TabSet {
        TabSet::new(
            vec![
                TabOption::new("total", "All Phases"),
                TabOption::new("phase_1", "Phase 1"),
                TabOption::new("phase_2", "Phase 2"),
                TabOption::new("phase_3", "Phase 3"),
            ],
            "total",
        )
    }

    #[test]
    fn interact_selects_and_calls_back() {
        let mut tabs = phases();
        let mut seen = Vec::new();

        assert!(tabs.interact("phase_2", |id| seen.push(id.to_string())));
        assert_eq!(tabs.selected_id(), Some("phase_2"));
        assert!(tabs.is_active("phase_2"));
        assert!(!tabs.is_active("total"));
        assert_eq!(seen, ["phase_2"]);
    }

    #[test]
    fn reselecting_the_active_tab_still_calls_back() {
        let mut tabs = phases();
        let mut calls = 0;
        tabs.interact("total", |_| calls += 1);
        tabs.interact("total", |_| calls += 1);
        assert_eq!(calls, 2);
        assert_eq!(tabs.selected_index(), 0);
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut tabs = phases();
        let mut called = false;
        assert!(!tabs.interact("phase_9", |_| called = true));
        assert!(!called);
        assert_eq!(tabs.selected_id(), Some("total"));
    }

    #[test]
    fn duplicate_ids_resolve_to_the_first() {
        let mut tabs = TabSet::new(
            vec![
                TabOption::new("a", "First"),
                TabOption::new("b", "Second"),
                TabOption::new("a", "Third"),
            ],
            "b",
        );
        tabs.interact("a", |_| {});
        assert_eq!(tabs.selected_index(), 0);
    }

    #[test]
    fn next_and_previous_wrap() {
        let mut tabs = phases();
        tabs.previous();
        assert_eq!(tabs.selected_id(), Some("phase_3"));
        tabs.next();
        assert_eq!(tabs.selected_id(), Some("total"));
    }

    #[test]
    fn unknown_initial_starts_on_first_option() {
        let tabs = TabSet::new(vec![TabOption::new("x", "X")], "missing");
        assert_eq!(tabs.selected_id(), Some("x"));
        assert_eq!(TabSet::new(Vec::new(), "x").selected_id(), None);
    }

    #[test]
    fn toggle_group_ignores_unknown_options() {
        let mut toggle = ToggleGroup::new(
            vec![TabOption::new("bar", "Bar"), TabOption::new("donut", "Donut")],
            "bar",
        );
        assert!(!toggle.interact("pie", |_| {}));
        assert!(toggle.is_active("bar"));
        assert!(toggle.interact("donut", |_| {}));
        assert_eq!(toggle.selected_id(), Some("donut"));
    }
}
