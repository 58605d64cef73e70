pub mod catalog;

pub use catalog::{BuiltinCatalog, FileCatalog};
