//! Named color palette module
//!
//! This module holds the reference data colors are named from: the color
//! record type, the ordered palette store, and the built-in French color table.

pub mod record;
pub mod store;
pub mod default_table;

pub use record::ColorRecord;
pub use store::PaletteStore;
pub use default_table::DEFAULT_COLORS;
