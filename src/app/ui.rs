use crate::app::state::{AppMode, AppState, Section};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modals::{helpers::dim_area, palette_layout, ErrorModal, PaletteModal};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub sections: [Rect; 3],
    pub footer: Rect,
}

impl AppLayout {
    /// Section editor under a screen position.
    #[must_use]
    pub fn section_at(&self, column: u16, row: u16) -> Option<Section> {
        Section::ALL.into_iter().zip(self.sections).find_map(|(s, r)| {
            (column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height)
                .then_some(s)
        })
    }
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Sections
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(main[1]);

    AppLayout {
        header: main[0],
        sections: [body[0], body[1], body[2]],
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let theme = app_state.theme.clone();
    let layout = get_layout(area);

    f.render_widget(
        Header {
            state: app_state,
            theme: &theme,
        },
        layout.header,
    );

    for (section, rect) in Section::ALL.into_iter().zip(layout.sections) {
        let focused = app_state.mode == AppMode::Editing && section == app_state.playground.active;
        let editor = app_state.playground.styled_editor(section, &theme, focused);
        f.render_widget(editor, rect);
    }

    f.render_widget(
        Footer {
            state: app_state,
            theme: &theme,
        },
        layout.footer,
    );

    if app_state.mode == AppMode::Palette {
        dim_area(f.buffer_mut(), area);
        let palette_area = palette_layout(area, &app_state.palette_config);
        app_state
            .palette
            .set_viewport(palette_area.list.height as usize);
        f.render_widget(
            PaletteModal {
                theme: &theme,
                palette: &app_state.palette,
                layout: palette_area,
                title: app_state.palette_title,
            },
            area,
        );
    }

    if let Some(error) = &app_state.last_error {
        f.render_widget(
            ErrorModal {
                theme: &theme,
                error,
            },
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_hit_testing() {
        let layout = get_layout(Rect::new(0, 0, 80, 32));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.footer.y, 31);
        assert_eq!(layout.section_at(5, 2), Some(Section::Input));
        assert_eq!(layout.section_at(5, 30), Some(Section::Output));
        assert_eq!(layout.section_at(5, 0), None);
    }
}
