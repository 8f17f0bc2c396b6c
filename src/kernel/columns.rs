use crate::kernel::services::ports::{BreakpointTier, Breakpoints};

/// Number of columns for a viewport `viewport_width` pixels wide.
///
/// Each breakpoint tier the viewport falls below drops one column from
/// `max_cols`; the result never goes under `min_cols`. The bands are checked
/// widest first, so overridden thresholds that are out of order still give
/// exactly one answer per width.
pub fn resolve_columns(
    viewport_width: f64,
    breakpoints: &Breakpoints,
    min_cols: u32,
    max_cols: u32,
) -> u32 {
    if viewport_width.is_nan() {
        return min_cols;
    }

    let dropped = BreakpointTier::DESCENDING
        .iter()
        .position(|tier| viewport_width >= breakpoints.threshold(*tier))
        .unwrap_or(BreakpointTier::DESCENDING.len()) as u32;

    max_cols.saturating_sub(dropped).max(min_cols)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/columns.rs"]
mod tests;
