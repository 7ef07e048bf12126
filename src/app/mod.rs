//! Application layer: documents, tab registry, styling model, file I/O and
//! the controller gluing them to the FLTK widgets.

pub mod document;
pub mod error;
pub mod file_ops;
pub mod messages;
pub mod state;
pub mod style_map;
pub mod style_ops;
pub mod tab_registry;
