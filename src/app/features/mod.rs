pub mod catalog;
pub mod editor;
pub mod handler;
pub mod palette;
pub mod ui;
