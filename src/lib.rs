//! masonry_grid - responsive shortest-column card layout
//!
//! Module layout:
//! - core: geometry values and errors
//! - kernel: column resolution, packing, resize debouncing, host ports
//! - app: grid sessions tying the kernel to a host
//! - logging: tracing setup for hosts that want file logs

pub mod app;
pub mod core;
pub mod kernel;
pub mod logging;

pub use crate::app::{init_grid, GridSession, SessionOptions};
pub use crate::core::{ConfigError, GridError, MeasurementError, Position, Size};
pub use crate::kernel::services::ports::{
    BreakpointOverrides, Breakpoints, GridHost, GridOptions, MeasurementProvider, ResizeEvent,
    ResizeSignal, StyleSink,
};
pub use crate::kernel::{pack, resolve_columns, CardPlacement, Edge, GridLayout};
