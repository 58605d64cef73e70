use super::input::AppTextArea;
use crate::domain::models::ProcessorKind;
use ratatui::widgets::{Block, BorderType, Borders};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Section {
    Input,
    Filter,
    Output,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Input, Section::Filter, Section::Output];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Section::Input => "Input",
            Section::Filter => "Filter",
            Section::Output => "Output",
        }
    }

    #[must_use]
    pub fn kind(&self) -> ProcessorKind {
        match self {
            Section::Input => ProcessorKind::Input,
            Section::Filter => ProcessorKind::Filter,
            Section::Output => ProcessorKind::Output,
        }
    }

    #[must_use]
    pub fn next(&self) -> Self {
        match self {
            Section::Input => Section::Filter,
            Section::Filter => Section::Output,
            Section::Output => Section::Input,
        }
    }

    #[must_use]
    pub fn prev(&self) -> Self {
        match self {
            Section::Input => Section::Output,
            Section::Filter => Section::Input,
            Section::Output => Section::Filter,
        }
    }

    fn index(self) -> usize {
        match self {
            Section::Input => 0,
            Section::Filter => 1,
            Section::Output => 2,
        }
    }
}

/// The three configuration editors of the playground.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaygroundState<'a> {
    pub active: Section,
    editors: [AppTextArea<'a>; 3],
}

impl Default for PlaygroundState<'_> {
    fn default() -> Self {
        Self {
            active: Section::Input,
            editors: Default::default(),
        }
    }
}

impl<'a> PlaygroundState<'a> {
    #[must_use]
    pub fn editor(&self, section: Section) -> &AppTextArea<'a> {
        &self.editors[section.index()]
    }

    pub fn editor_mut(&mut self, section: Section) -> &mut AppTextArea<'a> {
        &mut self.editors[section.index()]
    }

    pub fn active_editor_mut(&mut self) -> &mut AppTextArea<'a> {
        let section = self.active;
        self.editor_mut(section)
    }

    #[must_use]
    pub fn text(&self, section: Section) -> String {
        self.editor(section).lines().join("\n")
    }

    pub fn clear(&mut self, section: Section) {
        self.editors[section.index()] = AppTextArea::default();
    }

    /// Editor with a titled border reflecting focus, ready to render.
    pub fn styled_editor(
        &mut self,
        section: Section,
        theme: &crate::theme::Theme,
        focused: bool,
    ) -> &AppTextArea<'a> {
        let border = if focused {
            theme.border_focus
        } else {
            theme.border
        };
        let editor = self.editor_mut(section);
        editor.set_block(
            Block::default()
                .title(format!(" {} ", section.label()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        );
        editor.set_cursor_line_style(ratatui::style::Style::default());
        &*editor
    }
}
