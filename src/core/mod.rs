//! Shared value types and the error taxonomy.
//!
//! - geom: positions and sizes in pixels
//! - error: configuration and measurement failures

pub mod error;
pub mod geom;

pub use error::{ConfigError, GridError, MeasurementError, Result};
pub use geom::{Position, Size};
