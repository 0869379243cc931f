use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, ScrollStatus};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let (label, color) = match app.status() {
            ScrollStatus::Scrolling => ("SCROLLING", theme.success),
            ScrollStatus::Paused => ("PAUSED", theme.warning),
            ScrollStatus::ReducedMotion => ("REDUCED MOTION", theme.accent),
            ScrollStatus::Stopped => ("STOPPED", theme.grey),
        };
        let label = format!(" {} ", label);

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {} | {:.0}/s | {:>3.0}%",
                app.document.title,
                app.scroller.speed(),
                app.scroller.target().progress() * 100.0
            )
        };

        let help_hint = " s:start/stop +/-:speed m:motion ?:help q:quit ";
        let used = label.width() + status_text.width() + help_hint.width();
        let padding_len = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(
                label,
                Style::default()
                    .fg(theme.bg0)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
