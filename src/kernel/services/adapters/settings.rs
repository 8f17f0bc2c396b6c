use crate::kernel::services::ports::{BreakpointOverrides, GridOptions};

/// Parses grid options from a JSON object such as
/// `{"gridElementClass": "card", "maxCols": 4}`.
pub fn parse_options(data: &str) -> serde_json::Result<GridOptions> {
    serde_json::from_str(data)
}

/// Parses a partial breakpoint table. Empty input means "no overrides".
pub fn parse_breakpoints(data: &str) -> serde_json::Result<BreakpointOverrides> {
    if data.trim().is_empty() {
        return Ok(BreakpointOverrides::default());
    }
    serde_json::from_str(data)
}
