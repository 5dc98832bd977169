//! WAD header, directory and level geometry decoding.

use std::collections::HashMap;

use crate::wad::bounds::Bounds;
use crate::wad::error::Result;
use crate::wad::types::{Level, Line, Point, Wad, WadFormat};
use crate::wad::view::WadView;

const DIRECTORY_ENTRY_SIZE: usize = 16;
const VERTEX_SIZE: usize = 4;

const VERTEX_LUMP: &str = "VERTEXES";
const LINEDEF_LUMP: &str = "LINEDEFS";
/// Marker lump of HEXEN-dialect archives; switches the linedef layout for
/// the whole archive, not per level.
const BEHAVIOR_LUMP: &str = "BEHAVIOR";

/// Lumps grouped under one level marker, pending geometry decode.
struct LevelLumps<'a> {
    name: String,
    lumps: HashMap<String, WadView<'a>>,
}

impl<'a> LevelLumps<'a> {
    fn new(name: String) -> Self {
        Self {
            name,
            lumps: HashMap::new(),
        }
    }

    /// Both geometry lumps present; anything less is dropped wholesale.
    fn is_complete(&self) -> bool {
        self.lumps.contains_key(VERTEX_LUMP) && self.lumps.contains_key(LINEDEF_LUMP)
    }

    /// Decode vertex and linedef records into a [`Level`]. Returns `None`
    /// for a vertex lump holding no records: with no extent there is
    /// nothing to project, and the level is dropped like any other
    /// incomplete one.
    fn decode(mut self, format: WadFormat) -> Result<Option<Level>> {
        let (Some(vertex_data), Some(linedef_data)) = (
            self.lumps.remove(VERTEX_LUMP),
            self.lumps.remove(LINEDEF_LUMP),
        ) else {
            return Ok(None);
        };

        let mut vertices = Vec::new();
        let mut bounds = Bounds::empty();
        for record in vertex_data.records(VERTEX_SIZE) {
            let point = Point::new(record.read_i16(0)?, record.read_i16(2)?);
            bounds.expand(point);
            vertices.push(point);
        }
        if vertices.is_empty() {
            return Ok(None);
        }

        let mut lines = Vec::new();
        for record in linedef_data.records(format.linedef_size()) {
            lines.push(Line::decode(&record)?);
        }

        Ok(Some(Level {
            name: self.name,
            vertices,
            lines,
            bounds,
        }))
    }
}

/// Decode an archive buffer: scan the lump directory, group lumps under
/// their level markers and decode the geometry of every complete level.
///
/// Lumps before the first marker and levels missing either geometry lump
/// are dropped silently. Any read outside the buffer aborts the whole
/// parse.
pub fn parse_wad(buf: &[u8]) -> Result<Wad> {
    let file = WadView::whole(buf);
    let wad_type = file.read_ascii(0, 4)?;
    let lump_count = file.read_i32(4)?;
    let dir_offset = file.read_i32(8)?;

    let mut format = WadFormat::Doom;
    let mut pending: Vec<LevelLumps> = Vec::new();
    let mut current: Option<LevelLumps> = None;

    // A negative directory offset can never resolve; saturate it to an
    // out-of-range position and let the entry view report it.
    let dir_start = usize::try_from(dir_offset).unwrap_or(usize::MAX);

    for i in 0..lump_count.max(0) as usize {
        let entry = WadView::new(
            buf,
            dir_start.saturating_add(i * DIRECTORY_ENTRY_SIZE),
            DIRECTORY_ENTRY_SIZE,
        )?;
        let name = entry.read_ascii(8, 8)?;

        if is_level_marker(&name) {
            if let Some(level) = current.take().filter(LevelLumps::is_complete) {
                pending.push(level);
            }
            current = Some(LevelLumps::new(name));
        } else if name == BEHAVIOR_LUMP {
            format = WadFormat::Hexen;
        } else if let Some(level) = current.as_mut() {
            let filepos = entry.read_i32(0)?;
            let size = entry.read_i32(4)?;
            let data = lump_view(buf, filepos, size).map_err(|e| e.in_lump(&name))?;
            level.lumps.insert(name, data);
        }
        // entries before the first marker belong to no level and are dropped
    }

    if let Some(level) = current.take().filter(LevelLumps::is_complete) {
        pending.push(level);
    }

    let mut levels = Vec::new();
    for level in pending {
        if let Some(level) = level.decode(format)? {
            levels.push(level);
        }
    }

    Ok(Wad {
        format,
        wad_type,
        lump_count,
        levels,
    })
}

/// Resolve a directory entry's byte range. Positions and sizes are signed
/// on disk; a negative value is out of range by definition.
fn lump_view(buf: &[u8], filepos: i32, size: i32) -> Result<WadView<'_>> {
    let offset = usize::try_from(filepos).unwrap_or(usize::MAX);
    let len = usize::try_from(size).unwrap_or(usize::MAX);
    WadView::new(buf, offset, len)
}

/// Match the level marker patterns `E<digit>M<digit>` and
/// `MAP<digit><digit>` anywhere in a lump name.
fn is_level_marker(name: &str) -> bool {
    let bytes = name.as_bytes();
    let episode = bytes
        .windows(4)
        .any(|w| w[0] == b'E' && w[1].is_ascii_digit() && w[2] == b'M' && w[3].is_ascii_digit());
    let map = bytes
        .windows(5)
        .any(|w| w.starts_with(b"MAP") && w[3].is_ascii_digit() && w[4].is_ascii_digit());
    episode || map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_marker_patterns() {
        assert!(is_level_marker("E1M1"));
        assert!(is_level_marker("E9M9"));
        assert!(is_level_marker("MAP01"));
        assert!(is_level_marker("MAP32"));

        assert!(!is_level_marker("E1M"));
        assert!(!is_level_marker("MAPS"));
        assert!(!is_level_marker("MAP1"));
        assert!(!is_level_marker("VERTEXES"));
        assert!(!is_level_marker("LINEDEFS"));
        assert!(!is_level_marker(""));
    }

    #[test]
    fn test_completeness_requires_both_geometry_lumps() {
        let mut level = LevelLumps::new("E1M1".to_string());
        assert!(!level.is_complete());

        level
            .lumps
            .insert(VERTEX_LUMP.to_string(), WadView::whole(&[]));
        assert!(!level.is_complete());

        level
            .lumps
            .insert(LINEDEF_LUMP.to_string(), WadView::whole(&[]));
        assert!(level.is_complete());
    }

    #[test]
    fn test_empty_vertex_lump_drops_level() {
        let mut level = LevelLumps::new("E1M1".to_string());
        level
            .lumps
            .insert(VERTEX_LUMP.to_string(), WadView::whole(&[]));
        level
            .lumps
            .insert(LINEDEF_LUMP.to_string(), WadView::whole(&[]));

        assert!(level.decode(WadFormat::Doom).unwrap().is_none());
    }
}
