//! Text for the detail popup opened with Enter.

use radiopharma_core::charts::shares;
use radiopharma_core::datasets::{
    approved, series, ACCESS_TABLE, COMPANY_CARDS, ISOTOPE_CARDS, MANUFACTURING_CARDS,
    TRIAL_SHARE_BY_ISOTOPE,
};
use radiopharma_core::projection::{CompanyDatum, GridDatum};
use radiopharma_core::Phase;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};

use crate::app::{App, Screen};

/// Names listed before the rest are summarised as a count.
const LIST_PREVIEW: usize = 10;

pub struct Detail {
    pub title: String,
    pub lines: Vec<TextLine<'static>>,
}

fn field(label: &str, value: impl Into<String>) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
        Span::styled(value.into(), Style::default().fg(Color::White)),
    ])
}

fn heading(text: &str) -> TextLine<'static> {
    TextLine::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))
}

fn preview(names: &[String]) -> String {
    let mut text = names
        .iter()
        .take(LIST_PREVIEW)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if names.len() > LIST_PREVIEW {
        text.push_str(&format!(" and {} more", names.len() - LIST_PREVIEW));
    }
    text
}

/// Detail for the selected row of the current screen.
pub fn selected_detail(app: &App) -> Option<Detail> {
    let selected = app.selected();
    match app.screen {
        Screen::Overview => None,
        Screen::Isotopes => {
            let grid = app.isotope_grid();
            grid.get(selected).map(|datum| isotope_detail(datum, app.phase()))
        }
        Screen::Companies => {
            let data = app.company_data();
            data.get(selected).map(|datum| company_detail(datum, app.phase()))
        }
        Screen::Targets => {
            let grid = app.target_grid();
            grid.get(selected).map(|datum| grid_detail(datum, app.phase()))
        }
        Screen::Trials => trial_share_detail(selected),
        Screen::Manufacturing => manufacturing_detail(selected),
        Screen::Approved => approved_detail(selected),
        Screen::Access => access_detail(app, selected),
    }
}

fn grid_detail(datum: &GridDatum, phase: Phase) -> Detail {
    let mut lines = Vec::new();
    if datum.full_name != datum.name {
        lines.push(field("Full name", datum.full_name.clone()));
    }
    if !datum.description.is_empty() {
        lines.push(TextLine::from(datum.description.clone()));
    }
    lines.extend([
        TextLine::from(""),
        field(&format!("{} trials", phase.label()), datum.metric(phase).to_string()),
        field("All trials", datum.clinical_trials.to_string()),
        field(
            "Phase 1 / 2 / 3",
            format!("{} / {} / {}", datum.phase1, datum.phase2, datum.phase3),
        ),
        field(
            "Diagnostic / therapy",
            format!("{} / {}", datum.diagnostic_trials, datum.therapy_trials),
        ),
        TextLine::from(""),
        heading(&format!("Diseases ({})", datum.disease_count)),
        TextLine::from(preview(&datum.diseases)),
        TextLine::from(""),
        heading(&format!("Companies ({})", datum.companies_count)),
        TextLine::from(preview(&datum.companies)),
    ]);

    Detail {
        title: datum.name.clone(),
        lines,
    }
}

fn isotope_detail(datum: &GridDatum, phase: Phase) -> Detail {
    let mut detail = grid_detail(datum, phase);
    if let Some(card) = ISOTOPE_CARDS
        .iter()
        .find(|card| card.symbol.eq_ignore_ascii_case(&datum.name))
    {
        detail.lines.extend([
            TextLine::from(""),
            heading("Physics"),
            field("Half-life", card.half_life_label()),
            field("Emission", card.emission.label()),
            field("Production", card.production),
        ]);
    }
    detail
}

fn company_detail(datum: &CompanyDatum, phase: Phase) -> Detail {
    let lead = if datum.is_diagnostic_led() {
        "Diagnostic-led"
    } else {
        "Therapy-led"
    };
    let mut lines = vec![
        field(&format!("{} trials", phase.label()), datum.value.to_string()),
        field("All trials", datum.all_trials.to_string()),
        field(
            "Diagnostic / therapy",
            format!("{} / {} ({lead})", datum.diagnostic_trials, datum.therapy_trials),
        ),
        TextLine::from(""),
        heading(&format!("Diseases ({})", datum.disease_count)),
        TextLine::from(preview(&datum.diseases)),
    ];

    if let Some(card) = COMPANY_CARDS.iter().find(|card| card.name == datum.name) {
        lines.extend([
            TextLine::from(""),
            heading("Profile"),
            field("Headquarters", card.headquarters),
            field("Focus", card.focus),
            field("Lead asset", card.lead_asset),
        ]);
    }

    Detail {
        title: datum.name.clone(),
        lines,
    }
}

fn trial_share_detail(selected: usize) -> Option<Detail> {
    let point = TRIAL_SHARE_BY_ISOTOPE.get(selected)?;
    let share = shares(&series::values(TRIAL_SHARE_BY_ISOTOPE))
        .get(selected)
        .copied()
        .unwrap_or_default();
    Some(Detail {
        title: point.label.to_string(),
        lines: vec![
            field("Trials", point.value.to_string()),
            field("Share of trials", format!("{share:.1}%")),
        ],
    })
}

fn manufacturing_detail(selected: usize) -> Option<Detail> {
    let card = MANUFACTURING_CARDS.get(selected)?;
    Some(Detail {
        title: card.method.to_string(),
        lines: vec![
            TextLine::from(card.summary),
            TextLine::from(""),
            field("Isotopes", card.isotopes.join(", ")),
            field("Strengths", card.strengths),
            field("Constraints", card.constraints),
        ],
    })
}

fn approved_detail(selected: usize) -> Option<Detail> {
    let drugs = approved::newest_first();
    let drug = drugs.get(selected)?;
    Some(Detail {
        title: drug.brand.to_string(),
        lines: vec![
            field("Approved", drug.year.to_string()),
            field("Isotope", drug.isotope),
            field("Target", drug.target),
            field("Use", drug.modality.label()),
            field("Indication", drug.indication),
            field("Company", drug.company),
        ],
    })
}

fn access_detail(app: &App, selected: usize) -> Option<Detail> {
    let entry = ACCESS_TABLE.get(selected)?;
    let mut lines = vec![field("Access level", format!("{:.0}%", entry.opacity * 100.0))];
    if !entry.aliases.is_empty() {
        lines.push(field("Also known as", entry.aliases.join(", ")));
    }
    if let Some(geometry) = app.geometry.data() {
        let on_map = if geometry.country_index(entry.country).is_some() {
            "yes"
        } else {
            "no matching shape"
        };
        lines.push(field("On map", on_map));
    }
    Some(Detail {
        title: entry.country.to_string(),
        lines,
    })
}
