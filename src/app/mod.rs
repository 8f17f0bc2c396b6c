//! Application layer: grid sessions and the `init_grid` entry point.

pub mod session;

pub use session::{GridSession, SessionOptions};

use crate::core::Result;
use crate::kernel::services::ports::{BreakpointOverrides, GridHost, GridOptions};

/// Sets up a grid with the default resize handling (trailing edge, 250 ms).
pub fn init_grid<H: GridHost>(
    host: &mut H,
    options: &GridOptions,
    breakpoints: Option<&BreakpointOverrides>,
) -> Result<GridSession<H>> {
    GridSession::initialize(host, options, breakpoints, SessionOptions::default())
}
