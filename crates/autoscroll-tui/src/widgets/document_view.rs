use autoscroll_core::TargetKind;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::app::App;

/// Widest the panel gets before it is centered
const PANEL_MAX_WIDTH: u16 = 84;

pub struct DocumentViewWidget;

impl DocumentViewWidget {
    /// Area the document text occupies inside `area`
    ///
    /// The run loop wraps the document to this before rendering.
    pub fn text_area(area: Rect, kind: TargetKind) -> Rect {
        Self::block(kind, "").inner(Self::frame_area(area, kind))
    }

    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let kind = app.target_kind();
        let title = app.document.title.clone();
        let theme = app.theme.clone();

        frame.render_widget(
            Block::default().style(Style::default().bg(theme.bg0)),
            area,
        );

        let frame_area = Self::frame_area(area, kind);
        let block = Self::block(kind, &title)
            .border_style(Style::default().fg(theme.accent))
            .title_style(
                Style::default()
                    .fg(theme.fg1)
                    .add_modifier(Modifier::BOLD),
            )
            .style(Style::default().bg(theme.bg0));
        let inner = block.inner(frame_area);
        frame.render_widget(block, frame_area);

        let rows = app.visible_rows();
        let content: Vec<Line> = if rows.is_empty() {
            vec![Line::from(Span::styled(
                "(empty document)",
                Style::default().fg(theme.grey),
            ))]
        } else {
            rows.into_iter()
                .map(|row| Line::from(Span::styled(row, Style::default().fg(theme.fg0))))
                .collect()
        };

        frame.render_widget(Paragraph::new(content), inner);
    }

    fn frame_area(area: Rect, kind: TargetKind) -> Rect {
        match kind {
            TargetKind::Page => area,
            TargetKind::Panel => {
                let width = area.width.min(PANEL_MAX_WIDTH);
                let x = area.x + (area.width - width) / 2;
                Rect::new(x, area.y, width, area.height)
            }
        }
    }

    fn block(kind: TargetKind, title: &str) -> Block<'static> {
        match kind {
            // Full-screen page: no chrome, a little breathing room
            TargetKind::Page => Block::default().padding(Padding::horizontal(2)),
            TargetKind::Panel => Block::default()
                .title(format!(" {} ", title))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .padding(Padding::horizontal(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_text_area() {
        let area = Rect::new(0, 0, 100, 30);
        let text = DocumentViewWidget::text_area(area, TargetKind::Page);
        assert_eq!(text, Rect::new(2, 0, 96, 30));
    }

    #[test]
    fn test_panel_is_centered_and_bordered() {
        let area = Rect::new(0, 0, 100, 30);
        let text = DocumentViewWidget::text_area(area, TargetKind::Panel);
        // 84 wide panel at x=8, minus border and padding
        assert_eq!(text, Rect::new(10, 1, 80, 28));
    }

    #[test]
    fn test_narrow_panel_fills_width() {
        let area = Rect::new(0, 0, 40, 10);
        let text = DocumentViewWidget::text_area(area, TargetKind::Panel);
        assert_eq!(text.width, 36);
    }
}
