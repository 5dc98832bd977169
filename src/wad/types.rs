use crate::wad::bounds::Bounds;
use crate::wad::error::Result;
use crate::wad::view::WadView;

/// Sidedef reference meaning "no sector on this face"
pub const NO_SIDE: i16 = -1;

/// 2D map vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

/// Linedef record layout, selected archive-wide by the BEHAVIOR lump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WadFormat {
    Doom,
    Hexen,
}

impl WadFormat {
    /// Linedef record size in bytes
    pub fn linedef_size(self) -> usize {
        match self {
            WadFormat::Doom => 14,
            WadFormat::Hexen => 16,
        }
    }
}

/// A wall segment between two vertices of its level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// Index of the start vertex
    pub start: i16,
    /// Index of the end vertex
    pub end: i16,
    /// Front sidedef reference, [`NO_SIDE`] when absent
    pub front_side: i16,
    /// Back sidedef reference, [`NO_SIDE`] when absent
    pub back_side: i16,
}

impl Line {
    /// Decode one linedef record. Vertex indices sit at the front of the
    /// record and side references at its tail, so end-relative reads cover
    /// the 14- and 16-byte layouts alike.
    pub(crate) fn decode(record: &WadView<'_>) -> Result<Self> {
        Ok(Self {
            start: record.read_i16(0)?,
            end: record.read_i16(2)?,
            front_side: record.read_i16(-4)?,
            back_side: record.read_i16(-2)?,
        })
    }

    /// An impassable wall, missing the sector on one of its faces
    pub fn is_one_sided(&self) -> bool {
        self.front_side == NO_SIDE || self.back_side == NO_SIDE
    }
}

/// A decoded level: named geometry plus its coordinate extent
#[derive(Debug, Clone)]
pub struct Level {
    pub name: String,
    pub vertices: Vec<Point>,
    pub lines: Vec<Line>,
    pub bounds: Bounds,
}

impl Level {
    /// Translate a point into non-negative space and pad it uniformly
    pub fn normalize(&self, point: Point, padding: i32) -> (i32, i32) {
        let (shift_x, shift_y) = self.bounds.shift();
        (
            shift_x + i32::from(point.x) + padding,
            shift_y + i32::from(point.y) + padding,
        )
    }
}

/// A decoded archive
#[derive(Debug, Clone)]
pub struct Wad {
    /// Linedef layout dialect, [`WadFormat::Doom`] unless a BEHAVIOR lump
    /// was present
    pub format: WadFormat,
    /// 4-character tag from the archive header, e.g. "IWAD" or "PWAD"
    pub wad_type: String,
    /// Number of directory entries scanned, not the number of lumps kept
    pub lump_count: i32,
    /// Levels that carried both geometry lumps, in directory order
    pub levels: Vec<Level>,
}
