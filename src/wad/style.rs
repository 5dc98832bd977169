/// One-sided walls draw dark and heavy
const ONE_SIDED_STYLE: &str = "stroke:#333333;stroke-width:10";
/// Two-sided lines draw light and thin
const TWO_SIDED_STYLE: &str = "stroke:#999999;stroke-width:3";

/// Get the SVG style string for a wall segment classification
pub fn line_style(one_sided: bool) -> &'static str {
    if one_sided {
        ONE_SIDED_STYLE
    } else {
        TWO_SIDED_STYLE
    }
}
