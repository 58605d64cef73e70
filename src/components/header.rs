use crate::app::state::{AppState, Section};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(" BITBAR ", self.theme.header_logo),
            Span::raw(" "),
        ];

        for section in Section::ALL {
            let style = if section == self.state.playground.active {
                self.theme.header_active
            } else {
                self.theme.header_item
            };
            spans.push(Span::styled(format!(" {} ", section.label()), style));
            spans.push(Span::raw(" "));
        }

        let catalog = match &self.state.catalog {
            _ if self.state.is_loading_catalog => "catalog: loading".to_string(),
            Some(docs) => format!("{} processors", docs.len()),
            None => "catalog: not loaded".to_string(),
        };
        spans.push(Span::styled(format!(" {catalog} "), self.theme.dimmed));
        spans.push(Span::styled(
            format!(" {} ", self.state.palette_type.label()),
            self.theme.dimmed,
        ));

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
