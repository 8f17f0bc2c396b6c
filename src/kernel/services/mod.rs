//! Services layer (ports + adapters).
//!
//! - `ports`: contracts the layout core is written against.
//! - `adapters`: concrete implementations (settings parsing, headless host).

pub mod adapters;
pub mod ports;
