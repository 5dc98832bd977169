//! # wad-tools
//!
//! A Rust library for decoding classic WAD level archives and rendering
//! level geometry as SVG maps.
//!
//! ## Features
//!
//! - **WAD decoding**: Parse the lump directory of DOOM- and HEXEN-style
//!   archives and extract per-level vertex and linedef geometry
//! - **SVG rendering**: Project a level into a viewport with an
//!   aspect-preserving fit and emit one line per wall segment
//!
//! ## Example - Rendering every level in an archive
//!
//! ```rust,ignore
//! use wad_tools::wad::{level_to_svg, parse_wad};
//!
//! let buffer = std::fs::read("doom1.wad").unwrap();
//! let wad = parse_wad(&buffer).unwrap();
//! for level in &wad.levels {
//!     let svg = level_to_svg(level, 1024, 1024).unwrap();
//!     std::fs::write(format!("{}.svg", level.name), svg).unwrap();
//! }
//! ```

pub mod wad;

// Re-export commonly used items
pub use wad::{Level, Line, Point, Wad, WadError, WadFormat, level_to_svg, parse_wad};
