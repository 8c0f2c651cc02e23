use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Cell, Row};

pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index.saturating_sub(max_visible_rows) + 1;
    }

    0
}

pub fn header_row<'a>(titles: &[&'a str]) -> Row<'a> {
    Row::new(titles.iter().map(|title| Cell::from(*title))).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn row_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .bg(Color::Rgb(0, 0, 238))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

/// Visible data rows inside a bordered table of `height` with a header line.
pub const fn visible_rows(height: u16) -> usize {
    height.saturating_sub(3) as usize
}

#[cfg(test)]
mod tests {
    use super::{scroll_offset, visible_rows};

    #[test]
    fn short_lists_never_scroll() {
        assert_eq!(scroll_offset(5, 10, 4), 0);
    }

    #[test]
    fn selection_stays_on_the_last_visible_row() {
        assert_eq!(scroll_offset(20, 5, 4), 0);
        assert_eq!(scroll_offset(20, 5, 5), 1);
        assert_eq!(scroll_offset(20, 5, 19), 15);
    }

    #[test]
    fn borders_and_header_take_three_rows() {
        assert_eq!(visible_rows(10), 7);
        assert_eq!(visible_rows(2), 0);
    }
}
