use crate::config::Settings;
use crate::fetch::{DataClient, DocumentSource, Fetcher};
use chrono::{DateTime, Local};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use radiopharma_core::choropleth::{Raster, WorldGeometry};
use radiopharma_core::datasets::{
    ACCESS_TABLE, APPROVED_DRUGS, MANUFACTURING_CARDS, TRIAL_SHARE_BY_ISOTOPE,
};
use radiopharma_core::projection::{
    company_treemap, top_n_grid, CompanyDatum, GridDatum, COMPANY_TREEMAP_LIMIT,
    ISOTOPE_GRID_LIMIT, TARGET_GRID_LIMIT,
};
use radiopharma_core::tabs::{TabOption, TabSet, ToggleGroup};
use radiopharma_core::{AggregateDocument, DataError, Fallback, LoadState, Phase, Section};
use std::cell::RefCell;
use std::sync::Arc;
use std::time::Instant;
use throbber_widgets_tui::ThrobberState;

/// Dashboard sections, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Overview,
    Isotopes,
    Companies,
    Targets,
    Trials,
    Manufacturing,
    Approved,
    Access,
}

impl Screen {
    pub const ALL: [Self; 8] = [
        Self::Overview,
        Self::Isotopes,
        Self::Companies,
        Self::Targets,
        Self::Trials,
        Self::Manufacturing,
        Self::Approved,
        Self::Access,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Isotopes => "Isotopes",
            Self::Companies => "Companies",
            Self::Targets => "Targets",
            Self::Trials => "Trials",
            Self::Manufacturing => "Manufacturing",
            Self::Approved => "Approved",
            Self::Access => "Access",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::ALL.len() {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Sections whose data follows the phase tabs.
    pub const fn is_phased(self) -> bool {
        matches!(self, Self::Isotopes | Self::Companies | Self::Targets)
    }

    pub const fn is_searchable(self) -> bool {
        matches!(self, Self::Isotopes | Self::Targets)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub active: bool,
    pub query: String,
}

/// Company tile emphasis selected through the legend toggle.
pub const LEGEND_ALL: &str = "all";
pub const LEGEND_DIAGNOSTIC: &str = "diagnostic";
pub const LEGEND_THERAPY: &str = "therapy";

/// Choropleth raster for one area size.
#[derive(Debug)]
pub struct MapCache {
    pub size: (u16, u16),
    pub raster: Raster,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub settings: Settings,
    pub source: DocumentSource,
    pub screen: Screen,
    pub phase_tabs: TabSet,
    pub legend: ToggleGroup,
    pub document: LoadState<Arc<AggregateDocument>>,
    /// A refetch is in flight while the previous document stays on screen.
    pub refreshing: bool,
    /// Source of the document on screen after a failed fetch.
    pub document_fallback: Option<Fallback>,
    pub geometry: LoadState<Arc<WorldGeometry>>,
    pub fetched_at: Option<DateTime<Local>>,
    pub selections: [usize; Screen::ALL.len()],
    pub show_help: bool,
    pub show_detail: bool,
    pub search: SearchState,
    pub status_message: String,
    pub throbber: ThrobberState,
    pub map_cache: RefCell<Option<MapCache>>,
    pub(crate) fetcher: Fetcher,
    pub(crate) last_refresh: Instant,
    last_tick: Instant,
}

pub fn phase_tabs() -> TabSet {
    let options = Phase::TABS
        .iter()
        .map(|phase| TabOption::new(phase.as_str(), phase.label()))
        .collect();
    TabSet::new(options, Phase::Total.as_str())
}

fn legend_toggle() -> ToggleGroup {
    ToggleGroup::new(
        vec![
            TabOption::new(LEGEND_ALL, "All"),
            TabOption::new(LEGEND_DIAGNOSTIC, "Diagnostic-led"),
            TabOption::new(LEGEND_THERAPY, "Therapy-led"),
        ],
        LEGEND_ALL,
    )
}

impl App {
    pub fn new(settings: Settings, source: DocumentSource) -> Result<Self, DataError> {
        let client = DataClient::new(settings.timeout)?;
        Ok(Self {
            running: true,
            settings,
            source,
            screen: Screen::Overview,
            phase_tabs: phase_tabs(),
            legend: legend_toggle(),
            document: LoadState::Loading,
            refreshing: false,
            document_fallback: None,
            geometry: LoadState::Loading,
            fetched_at: None,
            selections: [0; Screen::ALL.len()],
            show_help: false,
            show_detail: false,
            search: SearchState::default(),
            status_message: String::new(),
            throbber: ThrobberState::default(),
            map_cache: RefCell::new(None),
            fetcher: Fetcher::new(client),
            last_refresh: Instant::now(),
            last_tick: Instant::now(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase_tabs
            .selected_id()
            .and_then(Phase::parse)
            .unwrap_or(Phase::Total)
    }

    pub fn data(&self) -> Option<&AggregateDocument> {
        self.document.data().map(Arc::as_ref)
    }

    pub fn is_loading(&self) -> bool {
        self.document.is_loading() || self.refreshing
    }

    pub fn selected(&self) -> usize {
        self.selections[self.screen.index()]
    }

    pub fn set_selected(&mut self, index: usize) {
        self.selections[self.screen.index()] = index;
    }

    pub fn company_data(&self) -> Vec<CompanyDatum> {
        self.data()
            .map(|document| company_treemap(document, self.phase(), COMPANY_TREEMAP_LIMIT))
            .unwrap_or_default()
    }

    pub fn target_grid(&self) -> Vec<GridDatum> {
        self.grid(Section::Target, TARGET_GRID_LIMIT)
    }

    pub fn isotope_grid(&self) -> Vec<GridDatum> {
        self.grid(Section::Isotope, ISOTOPE_GRID_LIMIT)
    }

    fn grid(&self, section: Section, limit: usize) -> Vec<GridDatum> {
        let Some(document) = self.data() else {
            return Vec::new();
        };
        let data = top_n_grid(document, section, self.phase(), limit);
        filter_grid(data, &self.search.query)
    }

    /// Number of selectable rows on `screen`.
    pub fn list_len(&self, screen: Screen) -> usize {
        match screen {
            Screen::Overview => 0,
            Screen::Isotopes => self.isotope_grid().len(),
            Screen::Companies => self.company_data().len(),
            Screen::Targets => self.target_grid().len(),
            Screen::Trials => TRIAL_SHARE_BY_ISOTOPE.len(),
            Screen::Manufacturing => MANUFACTURING_CARDS.len(),
            Screen::Approved => APPROVED_DRUGS.len(),
            Screen::Access => ACCESS_TABLE.len(),
        }
    }

    /// Keeps every selection inside its list after the data or filter changed.
    pub fn clamp_selections(&mut self) {
        for screen in Screen::ALL {
            let len = self.list_len(screen);
            let selection = &mut self.selections[screen.index()];
            *selection = (*selection).min(len.saturating_sub(1));
        }
        if self.list_len(self.screen) == 0 {
            self.show_detail = false;
        }
    }

    /// Advances the loading indicator and fires the refresh interval.
    pub fn update(&mut self) {
        let now = Instant::now();
        if now.duration_since(self.last_tick).as_millis() >= 100 {
            self.throbber.calc_next();
            self.last_tick = now;
        }

        if let Some(interval) = self.settings.refresh_interval {
            if !self.is_loading() && now.duration_since(self.last_refresh) >= interval {
                self.refresh();
            }
        }
    }
}

/// Keeps rows whose name or full name fuzzily matches `query`, in their projected order.
pub fn filter_grid(data: Vec<GridDatum>, query: &str) -> Vec<GridDatum> {
    let query = query.trim();
    if query.is_empty() {
        return data;
    }

    let matcher = SkimMatcherV2::default();
    data.into_iter()
        .filter(|datum| {
            matcher.fuzzy_match(&datum.name, query).is_some()
                || matcher.fuzzy_match(&datum.full_name, query).is_some()
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{filter_grid, App, Screen};
    use crate::config::Settings;
    use crate::fetch::DocumentSource;
    use radiopharma_core::datasets::sample_document;
    use radiopharma_core::projection::top_n_grid;
    use radiopharma_core::{DataError, LoadState, Phase, Section};
    use std::sync::Arc;

    pub(crate) fn ready_app() -> Result<App, DataError> {
        let mut app = App::new(Settings::default(), DocumentSource::Sample)?;
        app.document = LoadState::Ready(Arc::new(sample_document()));
        Ok(app)
    }

    #[test]
    fn screen_indices_round_trip() {
        for screen in Screen::ALL {
            assert_eq!(Screen::from_index(screen.index()), Some(screen));
        }
        assert_eq!(Screen::from_index(Screen::ALL.len()), None);
    }

    #[test]
    fn phase_follows_the_tab_set() -> Result<(), DataError> {
        let mut app = ready_app()?;
        assert_eq!(app.phase(), Phase::Total);
        app.phase_tabs.interact("phase_3", |_| {});
        assert_eq!(app.phase(), Phase::Phase3);
        Ok(())
    }

    #[test]
    fn search_filters_after_projection() {
        let document = sample_document();
        let data = top_n_grid(&document, Section::Target, Phase::Total, 12);
        let names: Vec<String> = data.iter().map(|d| d.name.clone()).collect();

        let filtered = filter_grid(data.clone(), "psma");
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|d| names.contains(&d.name)));
        assert_eq!(filter_grid(data.clone(), "   ").len(), data.len());
        assert!(filter_grid(data, "zzzzqqq").is_empty());
    }

    #[test]
    fn loading_app_has_no_rows() -> Result<(), DataError> {
        let app = App::new(Settings::default(), DocumentSource::Sample)?;
        assert!(app.is_loading());
        assert_eq!(app.list_len(Screen::Companies), 0);
        assert_eq!(app.list_len(Screen::Approved), radiopharma_core::datasets::APPROVED_DRUGS.len());
        Ok(())
    }

    #[test]
    fn selections_are_clamped_to_their_lists() -> Result<(), DataError> {
        let mut app = ready_app()?;
        app.selections = [usize::MAX; Screen::ALL.len()];
        app.clamp_selections();
        for screen in Screen::ALL {
            let len = app.list_len(screen);
            assert!(app.selections[screen.index()] < len.max(1));
        }
        Ok(())
    }
}
