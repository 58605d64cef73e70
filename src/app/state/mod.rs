use super::action::Action;
use super::config::{Config, PaletteConfig};
use super::keymap::KeyMap;
use crate::domain::models::{ProcessorDoc, ProcessorKind};
use crate::palette::{ItemId, Palette, SkimScorer};
use std::collections::VecDeque;
use std::sync::Arc;

pub mod error;
pub mod input;
pub mod palette;
pub mod playground;

// Re-exports
pub use error::{ErrorSeverity, ErrorState};
pub use input::AppTextArea;
pub use palette::{CommandPalette, PaletteContext, PaletteEffects};
pub use playground::{PlaygroundState, Section};

pub const COMMANDS_TITLE: &str = "COMMANDS";
pub const PROCESSORS_TITLE: &str = "PROCESSORS";

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Editing, // Typing into the active section
    Palette, // Command palette open
}

#[derive(Debug)]
pub struct AppState<'a> {
    // --- Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub last_error: Option<ErrorState>,
    pub status_message: Option<String>,
    pub active_tasks: Vec<String>,

    // --- Playground ---
    pub playground: PlaygroundState<'a>,

    // --- Command Palette ---
    pub palette: CommandPalette,
    pub palette_config: PaletteConfig,
    pub palette_title: &'static str,
    pub return_section: Option<Section>,

    // --- Processor Catalog ---
    pub catalog: Option<Vec<ProcessorDoc>>,
    pub is_loading_catalog: bool,
    pub pending_processor_palette: Option<Option<ProcessorKind>>,

    // --- Follow-up actions queued by the reducer ---
    pub pending_actions: VecDeque<Action>,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub palette_type: crate::theme::PaletteType,
    pub theme: crate::theme::Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &Config, history: Vec<ItemId>) -> Self {
        let mut palette = Palette::new(Box::new(SkimScorer::new(config.palette.case)));
        palette.initialize();
        palette.set_base_items(crate::app::command_palette::command_items());
        palette.context_mut().selected = Some(history);

        Self {
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            palette,
            palette_config: config.palette.clone(),
            palette_type: config.theme,
            theme: crate::theme::Theme::from_palette_type(config.theme),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn history(&self) -> &[ItemId] {
        self.palette.context().history()
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        let mut palette = CommandPalette::default();
        palette.initialize();
        palette.set_base_items(crate::app::command_palette::command_items());

        Self {
            should_quit: false,
            mode: AppMode::Editing,
            last_error: None,
            status_message: None,
            active_tasks: Vec::new(),
            playground: PlaygroundState::default(),
            palette,
            palette_config: PaletteConfig::default(),
            palette_title: COMMANDS_TITLE,
            return_section: None,
            catalog: None,
            is_loading_catalog: false,
            pending_processor_palette: None,
            pending_actions: VecDeque::new(),
            frame_count: 0,
            keymap: Arc::new(KeyMap::from_config(&Default::default())),
            palette_type: crate::theme::PaletteType::CatppuccinMocha,
            theme: crate::theme::Theme::default(),
        }
    }
}
