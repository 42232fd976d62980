//! Game info pane: counters, clock, and notices

use crate::session::format_time;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Data needed to render the info pane
pub struct InfoRenderData<'a> {
    pub move_count: u64,
    pub min_moves: u64,
    pub elapsed_secs: u64,
    pub disk_count: u32,
    /// Disk count the next restart will use
    pub pending_disks: u32,
    pub completion_message: Option<&'a str>,
    pub notice: Option<&'a str>,
}

/// Render the info pane
pub fn render_info_pane(frame: &mut Frame, area: Rect, data: InfoRenderData) {
    let block = Block::default()
        .title(" Game ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default()
        .fg(DEFAULT_THEME.fg)
        .add_modifier(Modifier::BOLD);
    let sep = Span::styled("   ", label);

    let mut next_game = vec![
        Span::styled("Disks ", label),
        Span::styled(data.disk_count.to_string(), value),
    ];
    if data.pending_disks != data.disk_count {
        next_game.push(Span::styled(
            format!(" (next game: {})", data.pending_disks),
            Style::default().fg(DEFAULT_THEME.secondary),
        ));
    }

    let counters = Line::from(vec![
        Span::styled("Moves ", label),
        Span::styled(data.move_count.to_string(), value),
        sep.clone(),
        Span::styled("Minimum ", label),
        Span::styled(data.min_moves.to_string(), value),
        sep,
        Span::styled("Time ", label),
        Span::styled(format_time(data.elapsed_secs), value),
    ]);

    let mut lines = vec![counters, Line::from(next_game)];

    if let Some(message) = data.completion_message {
        lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        )));
    } else if let Some(notice) = data.notice {
        lines.push(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(DEFAULT_THEME.error),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
