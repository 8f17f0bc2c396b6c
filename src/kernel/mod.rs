//! Headless layout core.
//!
//! - columns: viewport width -> column count
//! - packing: shortest-column placement of cards
//! - scheduler: resize debouncing

pub mod columns;
pub mod packing;
pub mod scheduler;
pub mod services;

pub use columns::resolve_columns;
pub use packing::{pack, CardPlacement, GridLayout};
pub use scheduler::{Debounced, Debouncer, Edge};
