use crate::app::config::PaletteConfig;
use crate::app::state::CommandPalette;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::helpers::{centered_rect, draw_drop_shadow};

/// Screen areas of the open palette. Shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteLayout {
    pub modal: Rect,
    pub query: Rect,
    pub list: Rect,
    pub detail: Rect,
}

impl PaletteLayout {
    /// Viewport row under a screen position inside the result list.
    #[must_use]
    pub fn list_row(&self, column: u16, row: u16) -> Option<usize> {
        let l = self.list;
        if column >= l.x && column < l.x + l.width && row >= l.y && row < l.y + l.height {
            Some((row - l.y) as usize)
        } else {
            None
        }
    }

    #[must_use]
    pub fn contains(&self, column: u16, row: u16) -> bool {
        let m = self.modal;
        column >= m.x && column < m.x + m.width && row >= m.y && row < m.y + m.height
    }
}

#[must_use]
pub fn palette_layout(area: Rect, config: &PaletteConfig) -> PaletteLayout {
    let modal = centered_rect(config.width, config.height, area);
    let inner = Block::default().borders(Borders::ALL).inner(modal);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Query input
            Constraint::Length(1), // Separator
            Constraint::Min(0),    // Results + detail
        ])
        .split(inner);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[2]);

    PaletteLayout {
        modal,
        query: rows[0],
        list: body[0],
        detail: body[1],
    }
}

pub struct PaletteModal<'a> {
    pub theme: &'a Theme,
    pub palette: &'a CommandPalette,
    pub layout: PaletteLayout,
    pub title: &'a str,
}

impl Widget for PaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = self.layout;
        if layout.modal.width == 0 || layout.modal.height == 0 {
            return;
        }

        draw_drop_shadow(buf, layout.modal, area);
        Clear.render(layout.modal, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(format!(" {} ", self.title), self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);
        block.render(layout.modal, buf);

        // Query
        let count = format!(
            "{}/{} ",
            self.palette.results().len(),
            self.palette.items().len()
        );
        let query_line = Line::from(vec![
            Span::styled(" > ", self.theme.footer_segment_key),
            Span::styled(self.palette.term(), self.theme.footer_segment_val),
            Span::styled(
                "_",
                self.theme
                    .footer_segment_val
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ]);
        buf.set_line(layout.query.x, layout.query.y, &query_line, layout.query.width);
        let count_x = (layout.query.x + layout.query.width).saturating_sub(count.len() as u16);
        buf.set_string(count_x, layout.query.y, &count, self.theme.dimmed);

        // Separator
        let sep_y = layout.query.y + 1;
        let separator = "─".repeat(layout.query.width as usize);
        buf.set_string(layout.query.x, sep_y, separator, self.theme.border_focus);

        self.render_rows(buf);
        self.render_detail(buf);
    }
}

impl PaletteModal<'_> {
    fn render_rows(&self, buf: &mut Buffer) {
        let list = self.layout.list;
        if self.palette.results().is_empty() {
            let no_results = Line::from(Span::styled("  No matches.", self.theme.dimmed));
            buf.set_line(list.x, list.y, &no_results, list.width);
            return;
        }

        for (i, row) in self.palette.rows().enumerate() {
            if i as u16 >= list.height {
                break;
            }
            let (base, highlight, prefix) = if row.focused {
                (
                    self.theme.list_selected,
                    self.theme.match_highlight_selected,
                    "> ",
                )
            } else {
                (self.theme.list_item, self.theme.match_highlight, "  ")
            };

            let mut spans = vec![Span::styled(prefix, base)];
            spans.extend(row.fragments.iter().map(|f| {
                Span::styled(
                    f.text.as_str(),
                    if f.highlighted { highlight } else { base },
                )
            }));
            let line = Line::from(spans);

            let y = list.y + i as u16;
            if row.focused {
                buf.set_style(Rect::new(list.x, y, list.width, 1), base);
            }
            buf.set_line(list.x, y, &line, list.width);
        }
    }

    fn render_detail(&self, buf: &mut Buffer) {
        let detail = self.layout.detail;
        if detail.width < 3 {
            return;
        }

        let mut lines: Vec<Line> = self
            .palette
            .help()
            .unwrap_or_default()
            .lines()
            .map(|l| Line::from(Span::styled(l, self.theme.list_item)))
            .collect();

        if let Some(blueprint) = &self.palette.context().data.preview {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.extend(
                blueprint
                    .replace('\t', "    ")
                    .lines()
                    .map(|l| Line::from(Span::styled(l.to_string(), self.theme.blueprint))),
            );
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::LEFT)
                    .border_style(self.theme.border),
            )
            .render(detail, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{Context, Item, Palette};

    #[test]
    fn test_layout_hit_testing() {
        let layout = palette_layout(Rect::new(0, 0, 100, 40), &PaletteConfig::default());
        assert!(layout.contains(layout.modal.x, layout.modal.y));
        assert!(!layout.contains(0, 0));
        assert_eq!(layout.list_row(layout.list.x, layout.list.y + 2), Some(2));
        assert_eq!(layout.list_row(layout.detail.x + 1, layout.list.y), None);
        assert_eq!(layout.list.y, layout.query.y + 2);
    }

    #[test]
    fn test_renders_term_and_rows() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = palette_layout(area, &PaletteConfig::default());
        let mut palette: CommandPalette = Palette::default();
        palette.initialize();
        palette.show_with(
            vec![Item::new("a", "Alpha"), Item::new("b", "Beta")],
            "al",
            Context::default(),
        );

        let mut buf = Buffer::empty(area);
        PaletteModal {
            theme: &Theme::default(),
            palette: &palette,
            layout,
            title: "COMMANDS",
        }
        .render(area, &mut buf);

        let line = |y: u16| -> String {
            (layout.list.x..layout.list.x + layout.list.width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect()
        };
        assert!(line(layout.list.y).starts_with("> Alpha"));
        assert!(line(layout.list.y + 1).trim().is_empty());
    }
}
