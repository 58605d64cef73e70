use crate::app::command::Command;
use crate::app::state::Section;
use crate::domain::models::{ProcessorDoc, ProcessorKind};
use crate::palette::PaletteInput;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Palette ---
    OpenPalette,                                // Base command set
    OpenProcessorPalette(Option<ProcessorKind>), // Processor blueprints, all kinds when None
    OpenSectionProcessors,                      // Processors matching the active section
    Palette(PaletteInput),                      // Input routed to the open palette

    // --- Playground Editor ---
    FocusSection(Section),
    NextSection,
    PrevSection,
    EditorInput(crossterm::event::KeyEvent),
    InsertSnippet(String, String), // (processor key, blueprint)
    ClearSection,

    // --- UI ---
    SwitchTheme(crate::theme::PaletteType),
    CancelMode, // Dismiss the error modal

    // --- Catalog ---
    ReloadCatalog,
    CatalogChanged,                   // Watched catalog file changed on disk
    CatalogLoaded(Vec<ProcessorDoc>), // Async load finished
    ErrorOccurred(String),
}
