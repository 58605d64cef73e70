use super::action::Action;
use super::state::{PaletteContext, PaletteEffects, Section};
use crate::domain::models::{ProcessorDoc, ProcessorKind};
use crate::palette::{Item, ItemAction};
use crate::theme::PaletteType;

#[derive(Debug, Clone)]
pub struct CommandDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub action: Action,
}

#[must_use]
pub fn get_commands() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition {
            id: "processor.insert",
            name: "Insert Processor",
            description: "Insert a processor blueprint into the current section",
            action: Action::OpenProcessorPalette(None),
        },
        CommandDefinition {
            id: "processor.insert.input",
            name: "Insert Input",
            description: "Pick among input processors",
            action: Action::OpenProcessorPalette(Some(ProcessorKind::Input)),
        },
        CommandDefinition {
            id: "processor.insert.filter",
            name: "Insert Filter",
            description: "Pick among filter processors",
            action: Action::OpenProcessorPalette(Some(ProcessorKind::Filter)),
        },
        CommandDefinition {
            id: "processor.insert.output",
            name: "Insert Output",
            description: "Pick among output processors",
            action: Action::OpenProcessorPalette(Some(ProcessorKind::Output)),
        },
        CommandDefinition {
            id: "section.input",
            name: "Go to Input",
            description: "Edit the input section",
            action: Action::FocusSection(Section::Input),
        },
        CommandDefinition {
            id: "section.filter",
            name: "Go to Filter",
            description: "Edit the filter section",
            action: Action::FocusSection(Section::Filter),
        },
        CommandDefinition {
            id: "section.output",
            name: "Go to Output",
            description: "Edit the output section",
            action: Action::FocusSection(Section::Output),
        },
        CommandDefinition {
            id: "section.clear",
            name: "Clear Section",
            description: "Empty the current section",
            action: Action::ClearSection,
        },
        CommandDefinition {
            id: "catalog.reload",
            name: "Reload Catalog",
            description: "Reload processor documentation",
            action: Action::ReloadCatalog,
        },
        CommandDefinition {
            id: "theme.catppuccin",
            name: "Theme: Catppuccin",
            description: "Switch to the Catppuccin (Mocha) theme",
            action: Action::SwitchTheme(PaletteType::CatppuccinMocha),
        },
        CommandDefinition {
            id: "theme.nord",
            name: "Theme: Nord",
            description: "Switch to the Nord theme",
            action: Action::SwitchTheme(PaletteType::Nord),
        },
        CommandDefinition {
            id: "quit",
            name: "Quit",
            description: "Quit bitbar",
            action: Action::Quit,
        },
    ]
}

/// Queues an app action for dispatch after the palette closes.
struct Dispatch(Action);

impl ItemAction<PaletteEffects> for Dispatch {
    fn on_select(&self, ctx: &mut PaletteContext, _item: &Item<PaletteEffects>) {
        ctx.data.queued.push(self.0.clone());
    }
}

/// Previews a processor blueprint on focus and inserts it on select.
struct Blueprint {
    key: String,
    text: String,
}

impl ItemAction<PaletteEffects> for Blueprint {
    fn on_focus(&self, ctx: &mut PaletteContext, _item: &Item<PaletteEffects>) {
        ctx.data.preview = Some(self.text.clone());
    }

    fn on_select(&self, ctx: &mut PaletteContext, _item: &Item<PaletteEffects>) {
        ctx.data.preview = None;
        ctx.data
            .queued
            .push(Action::InsertSnippet(self.key.clone(), self.text.clone()));
    }
}

#[must_use]
pub fn command_items() -> Vec<Item<PaletteEffects>> {
    get_commands()
        .into_iter()
        .map(|cmd| {
            Item::new(cmd.id, cmd.name)
                .help(cmd.description)
                .action(Dispatch(cmd.action))
        })
        .collect()
}

#[must_use]
pub fn processor_items(
    docs: &[ProcessorDoc],
    kind: Option<ProcessorKind>,
) -> Vec<Item<PaletteEffects>> {
    docs.iter()
        .filter(|doc| kind.is_none() || kind == Some(doc.kind))
        .map(|doc| {
            Item::new(doc.key(), format!("{} {}", doc.kind, doc.name))
                .help(doc.help())
                .action(Blueprint {
                    key: doc.key(),
                    text: doc.blueprint(),
                })
        })
        .collect()
}
