use super::action::Action;
use super::state::AppMode;
use crate::palette::PaletteInput;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// User overrides from the `[keys]` table: binding name -> key strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct KeyConfig {
    pub bindings: HashMap<String, Vec<String>>,
}

#[derive(Debug)]
pub struct KeyMap {
    // Editing mode; keys not listed here go to the active editor
    pub global: HashMap<KeyEvent, Action>,
    // Palette mode; printable characters not listed here extend the term
    pub palette: HashMap<KeyEvent, PaletteInput>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut global = HashMap::new();
        let mut palette = HashMap::new();

        // --- Editing Mode ---
        global.insert(ctrl('q'), Action::Quit);
        global.insert(ctrl('p'), Action::OpenPalette);
        global.insert(ctrl('o'), Action::OpenSectionProcessors);
        global.insert(key(KeyCode::Tab), Action::NextSection);
        global.insert(key(KeyCode::BackTab), Action::PrevSection);
        global.insert(key(KeyCode::F(5)), Action::ReloadCatalog);
        global.insert(key(KeyCode::Esc), Action::CancelMode);

        // --- Palette Mode ---
        palette.insert(key(KeyCode::Up), PaletteInput::Up);
        palette.insert(ctrl('k'), PaletteInput::Up);
        palette.insert(key(KeyCode::Down), PaletteInput::Down);
        palette.insert(ctrl('j'), PaletteInput::Down);
        palette.insert(key(KeyCode::PageUp), PaletteInput::PageUp);
        palette.insert(key(KeyCode::PageDown), PaletteInput::PageDown);
        palette.insert(key(KeyCode::Backspace), PaletteInput::Backspace);
        palette.insert(ctrl('u'), PaletteInput::ClearTerm);
        palette.insert(key(KeyCode::Tab), PaletteInput::Tab);
        palette.insert(key(KeyCode::Esc), PaletteInput::Escape);
        palette.insert(key(KeyCode::Enter), PaletteInput::Enter);

        let mut map = Self { global, palette };
        for (name, keys) in &config.bindings {
            map.bind(name, keys);
        }
        map
    }

    fn bind(&mut self, name: &str, keys: &[String]) {
        let events: Vec<KeyEvent> = keys
            .iter()
            .filter_map(|k| {
                let parsed = parse_key(k);
                if parsed.is_none() {
                    warn!(binding = name, key = %k, "unrecognised key");
                }
                parsed
            })
            .collect();

        if let Some(action) = global_binding(name) {
            self.global.retain(|_, a| *a != action);
            for event in events {
                self.global.insert(event, action.clone());
            }
        } else if let Some(input) = palette_binding(name) {
            self.palette.retain(|_, i| *i != input);
            for event in events {
                self.palette.insert(event, input);
            }
        } else {
            warn!(binding = name, "unknown key binding");
        }
    }

    pub fn get_action(&self, event: KeyEvent, mode: AppMode) -> Option<Action> {
        let event = normalize(event);
        // Quit works everywhere
        if self.global.get(&event) == Some(&Action::Quit) {
            return Some(Action::Quit);
        }
        match mode {
            AppMode::Editing => self.global.get(&event).cloned(),
            AppMode::Palette => self.palette_input(event).map(Action::Palette),
        }
    }

    pub fn palette_input(&self, event: KeyEvent) -> Option<PaletteInput> {
        let event = normalize(event);
        if let Some(input) = self.palette.get(&event) {
            return Some(*input);
        }
        match event.code {
            KeyCode::Char(c)
                if !event
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(PaletteInput::Char(c))
            }
            _ => None,
        }
    }
}

fn global_binding(name: &str) -> Option<Action> {
    Some(match name {
        "quit" => Action::Quit,
        "open_palette" => Action::OpenPalette,
        "open_processors" => Action::OpenSectionProcessors,
        "next_section" => Action::NextSection,
        "prev_section" => Action::PrevSection,
        "reload_catalog" => Action::ReloadCatalog,
        "cancel" => Action::CancelMode,
        _ => return None,
    })
}

fn palette_binding(name: &str) -> Option<PaletteInput> {
    Some(match name {
        "palette_up" => PaletteInput::Up,
        "palette_down" => PaletteInput::Down,
        "palette_page_up" => PaletteInput::PageUp,
        "palette_page_down" => PaletteInput::PageDown,
        "palette_clear" => PaletteInput::ClearTerm,
        "palette_close" => PaletteInput::Tab,
        "palette_select" => PaletteInput::Enter,
        _ => return None,
    })
}

/// Parses `"ctrl-p"`, `"alt-x"`, `"f5"`, `"pagedown"`, `":"` and friends.
#[must_use]
pub fn parse_key(spec: &str) -> Option<KeyEvent> {
    let spec = spec.trim().to_lowercase();
    let mut modifiers = KeyModifiers::empty();
    let mut rest = spec.as_str();
    loop {
        if let Some(r) = rest.strip_prefix("ctrl-") {
            modifiers |= KeyModifiers::CONTROL;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("alt-") {
            modifiers |= KeyModifiers::ALT;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("shift-") {
            modifiers |= KeyModifiers::SHIFT;
            rest = r;
        } else {
            break;
        }
    }

    let code = match rest {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" if modifiers.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "space" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
        c => {
            let mut chars = c.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };
    Some(normalize(KeyEvent::new(code, modifiers)))
}

// Terminals report SHIFT inconsistently for characters and BackTab; the
// character itself already carries the case.
fn normalize(event: KeyEvent) -> KeyEvent {
    let mut modifiers = event.modifiers;
    if matches!(event.code, KeyCode::Char(_) | KeyCode::BackTab) {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    KeyEvent::new(event.code, modifiers)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
