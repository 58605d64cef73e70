pub mod action;
pub mod command;
pub mod command_palette;
pub mod config;
pub mod features;
pub mod input;
pub mod keymap;
pub mod logging;
pub mod r#loop;
pub mod persistence;
pub mod recovery;
pub mod reducer;
pub mod state;
pub mod ui;
