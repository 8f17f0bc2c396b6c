/// Absolute offset of a card inside its container, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub top: f64,
    pub left: f64,
}

impl Position {
    pub const fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }
}

/// Rendered box of an element as reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/geom.rs"]
mod tests;
