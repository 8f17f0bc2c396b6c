//! Service ports: traits + data contracts.

pub mod config;
pub mod host;
pub mod settings;

pub use config::{BreakpointTier, Breakpoints, GridConfig};
pub use host::{
    GridHost, MeasurementProvider, ResizeEvent, ResizeSignal, ResizeSubscription, StyleSink,
    SubscriptionId,
};
pub use settings::{BreakpointOverrides, GridOptions};
