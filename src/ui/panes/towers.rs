//! Tower pane rendering
//!
//! Each peg gets its own bordered column. Disks are drawn bottom-up as solid
//! bars whose width grows with their size, with the size printed in the middle.
//! The rod extends one row above the tallest possible stack.

use crate::puzzle::{Peg, PegId};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render one tower
pub struct TowerRenderData<'a> {
    pub id: PegId,
    pub peg: &'a Peg,
    pub disk_count: u32,
    /// Keyboard cursor is on this tower
    pub is_selected: bool,
    /// The top disk of this tower has been picked up
    pub is_holding: bool,
}

/// Split `area` into three equal tower columns
pub fn tower_areas(area: Rect) -> [Rect; 3] {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);
    [columns[0], columns[1], columns[2]]
}

/// Render a single tower into `area`
pub fn render_tower_pane(frame: &mut Frame, area: Rect, data: TowerRenderData) {
    let border_style = if data.is_holding {
        Style::default()
            .fg(DEFAULT_THEME.held_disk)
            .add_modifier(Modifier::BOLD)
    } else if data.is_selected {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" {} · {} ", data.id.index() + 1, data.id))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_height = area.height.saturating_sub(2) as usize;
    let inner_width = area.width.saturating_sub(2) as usize;
    let lines = build_tower_lines(&data, inner_height, inner_width);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn build_tower_lines(data: &TowerRenderData, height: usize, width: usize) -> Vec<Line<'static>> {
    if height == 0 {
        return Vec::new();
    }

    let disks = data.peg.disks();
    let rod_height = data.disk_count as usize + 1;
    // Bottom row is the base; stack levels count up from the row above it
    let levels = height - 1;

    let mut lines = Vec::with_capacity(height);
    for row in 0..levels {
        let level = levels - 1 - row;
        let line = if let Some(&size) = disks.get(level) {
            let is_top = level + 1 == disks.len();
            disk_line(size, is_top && data.is_holding, width)
        } else if level < rod_height {
            Line::from(Span::styled("┃", Style::default().fg(DEFAULT_THEME.rod)))
        } else {
            Line::from("")
        };
        lines.push(line);
    }

    lines.push(Line::from(Span::styled(
        "━".repeat(width),
        Style::default().fg(DEFAULT_THEME.rod),
    )));
    lines
}

/// A disk bar of width `2 * size + 1`, clamped to the column
fn disk_line(size: u32, is_held: bool, max_width: usize) -> Line<'static> {
    let bar_width = (2 * size as usize + 1).min(max_width.max(1));
    let label = format!("{:^width$}", size, width = bar_width);

    let fill = if is_held {
        DEFAULT_THEME.held_disk
    } else {
        DEFAULT_THEME.disk_color(size)
    };
    let mut style = Style::default().bg(fill).fg(Color::Black);
    if is_held {
        style = style.add_modifier(Modifier::BOLD);
    }
    Line::from(Span::styled(label, style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Towers;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_disks_stack_from_bottom() {
        let towers = Towers::new(3);
        let data = TowerRenderData {
            id: PegId::Left,
            peg: towers.peg(PegId::Left),
            disk_count: 3,
            is_selected: false,
            is_holding: false,
        };
        let lines = build_tower_lines(&data, 6, 20);

        assert_eq!(lines.len(), 6);
        assert_eq!(line_text(&lines[5]), "━".repeat(20));
        assert_eq!(line_text(&lines[4]).trim(), "3");
        assert_eq!(line_text(&lines[4]).len(), 7);
        assert_eq!(line_text(&lines[2]).trim(), "1");
        assert_eq!(line_text(&lines[1]), "┃");
        assert_eq!(line_text(&lines[0]), "");
    }

    #[test]
    fn test_zero_height_renders_nothing() {
        let towers = Towers::new(2);
        let data = TowerRenderData {
            id: PegId::Middle,
            peg: towers.peg(PegId::Middle),
            disk_count: 2,
            is_selected: true,
            is_holding: false,
        };
        assert!(build_tower_lines(&data, 0, 10).is_empty());
    }
}
