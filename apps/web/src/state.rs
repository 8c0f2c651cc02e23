//! Browser dashboard state. Kept free of DOM types so it runs under `cargo test`.

use std::rc::Rc;

use radiopharma_core::choropleth::{Raster, WorldGeometry};
use radiopharma_core::datasets::{sample_document, ACCESS_TABLE, TRIAL_SHARE_BY_ISOTOPE};
use radiopharma_core::projection::{
    company_treemap, top_n_grid, CompanyDatum, GridDatum, COMPANY_TREEMAP_LIMIT,
    ISOTOPE_GRID_LIMIT, TARGET_GRID_LIMIT,
};
use radiopharma_core::tabs::{TabOption, TabSet, ToggleGroup};
use radiopharma_core::{AggregateDocument, DataError, Fallback, LoadState, Phase, Section};

use crate::animation::advance_pulse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Overview,
    Companies,
    Targets,
    Isotopes,
    Trials,
    Access,
}

impl Page {
    pub const ALL: [Self; 6] = [
        Self::Overview,
        Self::Companies,
        Self::Targets,
        Self::Isotopes,
        Self::Trials,
        Self::Access,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Companies => "Companies",
            Self::Targets => "Targets",
            Self::Isotopes => "Isotopes",
            Self::Trials => "Trials",
            Self::Access => "Access",
        }
    }

    pub const fn is_phased(self) -> bool {
        matches!(self, Self::Companies | Self::Targets | Self::Isotopes)
    }
}

pub const LEGEND_ALL: &str = "all";
pub const LEGEND_DIAGNOSTIC: &str = "diagnostic";
pub const LEGEND_THERAPY: &str = "therapy";

/// Keys the dashboard reacts to, translated from the DOM key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Tab,
    BackTab,
    Char(char),
}

/// Work the key handler cannot do without the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Refresh,
}

#[derive(Debug)]
pub struct DashboardState {
    pub document: LoadState<Rc<AggregateDocument>>,
    /// Source of the document on screen after a failed fetch.
    pub document_fallback: Option<Fallback>,
    pub geometry: LoadState<Rc<WorldGeometry>>,
    pub page: usize,
    pub phase_tabs: TabSet,
    pub legend: ToggleGroup,
    pub selected: usize,
    pub pulse: f64,
    pub map_cache: Option<((u16, u16), Raster)>,
    document_generation: u64,
    geometry_generation: u64,
    last_tick: Option<f64>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    pub fn new() -> Self {
        let phases = Phase::TABS
            .iter()
            .map(|phase| TabOption::new(phase.as_str(), phase.label()))
            .collect();
        let legend = ToggleGroup::new(
            vec![
                TabOption::new(LEGEND_ALL, "All"),
                TabOption::new(LEGEND_DIAGNOSTIC, "Diagnostic-led"),
                TabOption::new(LEGEND_THERAPY, "Therapy-led"),
            ],
            LEGEND_ALL,
        );

        Self {
            document: LoadState::Loading,
            document_fallback: None,
            geometry: LoadState::Loading,
            page: 0,
            phase_tabs: TabSet::new(phases, Phase::Total.as_str()),
            legend,
            selected: 0,
            pulse: 0.0,
            map_cache: None,
            document_generation: 0,
            geometry_generation: 0,
            last_tick: None,
        }
    }

    pub fn page(&self) -> Page {
        Page::ALL[self.page % Page::ALL.len()]
    }

    pub fn phase(&self) -> Phase {
        self.phase_tabs
            .selected_id()
            .and_then(Phase::parse)
            .unwrap_or(Phase::Total)
    }

    pub fn data(&self) -> Option<&AggregateDocument> {
        self.document.data().map(Rc::as_ref)
    }

    pub fn companies(&self) -> Vec<CompanyDatum> {
        self.data()
            .map(|document| company_treemap(document, self.phase(), COMPANY_TREEMAP_LIMIT))
            .unwrap_or_default()
    }

    pub fn grid(&self, section: Section) -> Vec<GridDatum> {
        let limit = if section == Section::Target {
            TARGET_GRID_LIMIT
        } else {
            ISOTOPE_GRID_LIMIT
        };
        self.data()
            .map(|document| top_n_grid(document, section, self.phase(), limit))
            .unwrap_or_default()
    }

    pub fn list_len(&self) -> usize {
        match self.page() {
            Page::Overview => 0,
            Page::Companies => self.companies().len(),
            Page::Targets => self.grid(Section::Target).len(),
            Page::Isotopes => self.grid(Section::Isotope).len(),
            Page::Trials => TRIAL_SHARE_BY_ISOTOPE.len(),
            Page::Access => ACCESS_TABLE.len(),
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.list_len().saturating_sub(1));
    }

    pub fn handle_key(&mut self, key: Key) -> Option<Command> {
        match key {
            Key::Up => self.switch_page(false),
            Key::Down => self.switch_page(true),
            Key::Left => {
                self.phase_tabs.previous();
                self.clamp_selection();
            }
            Key::Right => {
                self.phase_tabs.next();
                self.clamp_selection();
            }
            Key::Char(ch @ '1'..='4') => {
                let index = usize::from(ch as u8 - b'1');
                if self.phase_tabs.select_index(index) {
                    self.clamp_selection();
                }
            }
            Key::Tab => self.step_selection(true),
            Key::BackTab => self.step_selection(false),
            Key::Char('a') if self.page() == Page::Companies => {
                self.legend.interact(LEGEND_ALL, |_| {});
            }
            Key::Char('d') if self.page() == Page::Companies => {
                self.legend.interact(LEGEND_DIAGNOSTIC, |_| {});
            }
            Key::Char('t') if self.page() == Page::Companies => {
                self.legend.interact(LEGEND_THERAPY, |_| {});
            }
            Key::Char('r') => return Some(Command::Refresh),
            Key::Char(_) => {}
        }
        None
    }

    fn switch_page(&mut self, forward: bool) {
        let count = Page::ALL.len();
        self.page = if forward {
            (self.page + 1) % count
        } else {
            (self.page + count - 1) % count
        };
        self.selected = 0;
    }

    fn step_selection(&mut self, forward: bool) {
        let len = self.list_len();
        if len == 0 {
            return;
        }
        self.selected = if forward {
            (self.selected + 1) % len
        } else {
            (self.selected + len - 1) % len
        };
    }

    /// Marks the document as in flight and returns the request's generation.
    /// A previously loaded document stays visible.
    pub fn begin_document_load(&mut self) -> u64 {
        self.document_generation += 1;
        if self.document.data().is_none() {
            self.document = LoadState::Loading;
        }
        self.document_generation
    }

    /// Applies a finished document fetch. Results of superseded requests are dropped.
    pub fn finish_document(&mut self, generation: u64, result: Result<AggregateDocument, DataError>) -> bool {
        if generation != self.document_generation {
            return false;
        }
        match result {
            Ok(document) => {
                self.document = LoadState::Ready(Rc::new(document));
                self.document_fallback = None;
            }
            Err(error) => {
                let (fallback, source) =
                    Fallback::choose(self.document.data().cloned(), || Rc::new(sample_document()));
                self.document = LoadState::failed(&error, Some(fallback));
                self.document_fallback = Some(source);
            }
        }
        self.clamp_selection();
        true
    }

    pub fn begin_geometry_load(&mut self) -> u64 {
        self.geometry_generation += 1;
        self.geometry = LoadState::Loading;
        self.geometry_generation
    }

    pub fn finish_geometry(&mut self, generation: u64, result: Result<WorldGeometry, DataError>) -> bool {
        if generation != self.geometry_generation {
            return false;
        }
        self.geometry = LoadState::from_result(result.map(Rc::new), || None);
        self.map_cache = None;
        true
    }

    /// True while the first document load is in flight. A refresh keeps the
    /// previous document on screen and does not count.
    pub fn is_loading(&self) -> bool {
        self.document.is_loading()
    }

    /// Error line for the status bar, naming what is shown instead.
    pub fn document_notice(&self) -> Option<String> {
        let error = self.document.error()?;
        Some(match self.document_fallback.filter(|_| self.document.is_fallback()) {
            Some(fallback) => format!("{error} ({})", fallback.notice()),
            None => error.to_string(),
        })
    }

    /// Advances the loading pulse; `now` is in seconds.
    pub fn tick(&mut self, now: f64) {
        let (pulse, last_tick) = advance_pulse(self.pulse, self.last_tick, now, self.is_loading());
        self.pulse = pulse;
        self.last_tick = last_tick;
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, DashboardState, Key, Page, LEGEND_DIAGNOSTIC};
    use radiopharma_core::datasets::sample_document;
    use radiopharma_core::{AggregateDocument, DataError, Phase};

    fn loaded() -> DashboardState {
        let mut state = DashboardState::new();
        let generation = state.begin_document_load();
        assert!(state.finish_document(generation, Ok(sample_document())));
        state
    }

    #[test]
    fn pages_wrap_in_both_directions() {
        let mut state = loaded();
        state.handle_key(Key::Up);
        assert_eq!(state.page(), Page::Access);
        state.handle_key(Key::Down);
        assert_eq!(state.page(), Page::Overview);
    }

    #[test]
    fn digits_pick_the_phase() {
        let mut state = loaded();
        state.handle_key(Key::Char('4'));
        assert_eq!(state.phase(), Phase::Phase3);
        state.handle_key(Key::Right);
        assert_eq!(state.phase(), Phase::Total);
        state.handle_key(Key::Char('9'));
        assert_eq!(state.phase(), Phase::Total);
    }

    #[test]
    fn selection_wraps_within_the_page() {
        let mut state = loaded();
        state.handle_key(Key::Down);
        assert_eq!(state.page(), Page::Companies);
        let len = state.list_len();
        assert!(len > 1);

        state.handle_key(Key::BackTab);
        assert_eq!(state.selected, len - 1);
        state.handle_key(Key::Tab);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn legend_keys_apply_on_companies_only() {
        let mut state = loaded();
        state.handle_key(Key::Char('d'));
        assert_eq!(state.legend.selected_id(), Some("all"));

        state.handle_key(Key::Down);
        state.handle_key(Key::Char('d'));
        assert_eq!(state.legend.selected_id(), Some(LEGEND_DIAGNOSTIC));
    }

    #[test]
    fn refresh_is_delegated() {
        let mut state = loaded();
        assert_eq!(state.handle_key(Key::Char('r')), Some(Command::Refresh));
        assert_eq!(state.handle_key(Key::Char('x')), None);
    }

    #[test]
    fn stale_document_results_are_dropped() {
        let mut state = DashboardState::new();
        let first = state.begin_document_load();
        let second = state.begin_document_load();

        assert!(!state.finish_document(first, Ok(AggregateDocument::default())));
        assert!(state.is_loading());
        assert!(state.finish_document(second, Ok(sample_document())));
        assert!(state.data().is_some_and(|document| !document.is_empty()));
    }

    #[test]
    fn failed_first_load_shows_the_sample() {
        let mut state = DashboardState::new();
        let generation = state.begin_document_load();
        state.finish_document(generation, Err(DataError::Status { status: 503 }));

        assert!(state.document.is_fallback());
        assert!(state.document.error().is_some());
        assert!(state.data().is_some_and(|document| !document.is_empty()));
        assert!(state
            .document_notice()
            .is_some_and(|notice| notice.ends_with("(showing sample data)")));
    }

    #[test]
    fn failed_refresh_keeps_the_previous_document() {
        let mut state = DashboardState::new();
        let generation = state.begin_document_load();
        let previous = AggregateDocument {
            total_trials_processed: 3,
            ..AggregateDocument::default()
        };
        state.finish_document(generation, Ok(previous));

        let generation = state.begin_document_load();
        assert!(!state.is_loading());
        state.finish_document(generation, Err(DataError::Transport("offline".into())));
        assert_eq!(state.data().map(|d| d.total_trials_processed), Some(3));
        assert!(state
            .document_notice()
            .is_some_and(|notice| notice.ends_with("(showing previous data)")));

        let generation = state.begin_document_load();
        state.finish_document(generation, Ok(sample_document()));
        assert_eq!(state.document_notice(), None);
    }

    #[test]
    fn geometry_failure_has_no_fallback() {
        let mut state = DashboardState::new();
        let generation = state.begin_geometry_load();
        assert!(state.finish_geometry(generation, Err(DataError::EmptyGeometry)));
        assert!(state.geometry.data().is_none());
        assert!(state.geometry.error().is_some());
    }

    #[test]
    fn pulse_only_moves_while_loading() {
        let mut state = DashboardState::new();
        state.tick(1.0);
        state.tick(1.1);
        assert!(state.pulse > 0.0);

        let generation = state.begin_document_load();
        state.finish_document(generation, Ok(sample_document()));
        let held = state.pulse;
        state.tick(1.2);
        assert!((state.pulse - held).abs() < 1e-9);
    }
}
