use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// The area inside a one-cell border.
pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [_, middle, _] = split_three(Direction::Vertical, percent_y, r);
    let [_, center, _] = split_three(Direction::Horizontal, percent_x, middle);
    center
}

fn split_three(direction: Direction, percent: u16, r: Rect) -> [Rect; 3] {
    let margin = (100 - percent.min(100)) / 2;
    Layout::default()
        .direction(direction)
        .constraints([
            Constraint::Percentage(margin),
            Constraint::Percentage(percent),
            Constraint::Percentage(margin),
        ])
        .areas(r)
}
