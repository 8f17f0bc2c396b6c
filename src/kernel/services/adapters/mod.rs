//! Service adapters.

pub mod headless;
pub mod settings;

pub use headless::{ElementId, HeadlessHost};
pub use settings::{parse_breakpoints, parse_options};
