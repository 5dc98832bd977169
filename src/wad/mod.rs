//! WAD to SVG conversion module
//!
//! This module decodes the lump directory and level geometry of classic
//! WAD archives and projects decoded levels into SVG markup.

pub mod bounds;
pub mod error;
pub mod parser;
pub mod style;
pub mod svg;
pub mod types;
pub mod view;

// Re-export main public API
pub use error::{Result, WadError};
pub use parser::parse_wad;
pub use svg::level_to_svg;
pub use types::*;
pub use view::WadView;
