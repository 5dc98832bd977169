//! Level geometry to SVG projection.

use crate::wad::error::{Result, WadError};
use crate::wad::style::line_style;
use crate::wad::types::{Level, Point};

/// Padding added around every normalized vertex, in map units
const VERTEX_PADDING: i32 = 5;
/// Padding added past the level's far corner when sizing its extent
const EXTENT_PADDING: i32 = 10;
/// Margin kept clear inside the viewport, per edge
const VIEWPORT_MARGIN: f64 = 10.0;

/// Format a number with 6 decimal places, treating -0 as 0
fn f(n: f64) -> String {
    // Handle -0.0 case
    let n = if n == 0.0 { 0.0 } else { n };
    format!("{:.6}", n)
}

/// Project a level into a `width` x `height` viewport and emit SVG markup,
/// one `<line>` per wall segment.
///
/// The fit preserves aspect: geometry is scaled by the tighter of the two
/// axis ratios and centered along the other axis. A decoded level always
/// holds at least one vertex, so the extent is never zero.
pub fn level_to_svg(level: &Level, width: u32, height: u32) -> Result<String> {
    let (extent_x, extent_y) = level.normalize(level.bounds.max, EXTENT_PADDING);
    let usable_width = f64::from(width) - 2.0 * VIEWPORT_MARGIN;
    let usable_height = f64::from(height) - 2.0 * VIEWPORT_MARGIN;

    let width_ratio = usable_width / f64::from(extent_x);
    let height_ratio = usable_height / f64::from(extent_y);

    let (scale, x_offset, y_offset) = if width_ratio < height_ratio {
        let scale = width_ratio;
        (scale, 0.0, (usable_height - f64::from(extent_y) * scale) / 2.0)
    } else {
        let scale = height_ratio;
        (scale, (usable_width - f64::from(extent_x) * scale) / 2.0, 0.0)
    };

    let place = |(x, y): (i32, i32)| {
        (
            f64::from(x) * scale + x_offset,
            f64::from(y) * scale + y_offset,
        )
    };

    let mut elements = Vec::new();
    for (index, line) in level.lines.iter().enumerate() {
        let start = vertex_at(level, line.start, index)?;
        let end = vertex_at(level, line.end, index)?;

        let (x1, y1) = place(level.normalize(start, VERTEX_PADDING));
        let (x2, y2) = place(level.normalize(end, VERTEX_PADDING));

        elements.push(format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" style=\"{}\"/>",
            f(x1),
            f(y1),
            f(x2),
            f(y2),
            line_style(line.is_one_sided())
        ));
    }

    Ok(format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n    {}\n</svg>",
        width,
        height,
        elements.join("\n    ")
    ))
}

/// Resolve a linedef vertex reference against the level's vertex table.
/// Out-of-table references mean a corrupt archive and are surfaced, never
/// clamped.
fn vertex_at(level: &Level, index: i16, linedef: usize) -> Result<Point> {
    usize::try_from(index)
        .ok()
        .and_then(|i| level.vertices.get(i))
        .copied()
        .ok_or_else(|| WadError::VertexIndexOutOfRange {
            level: level.name.clone(),
            linedef,
            index,
            count: level.vertices.len(),
        })
}
