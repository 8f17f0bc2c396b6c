use super::settings::{BreakpointOverrides, GridOptions};
use crate::core::ConfigError;

/// Resolved grid configuration. Fixed for the lifetime of a session.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    pub element_selector: String,
    pub min_cols: u32,
    pub max_cols: u32,
    pub gutter_width: f64,
    pub gutter_height: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            element_selector: String::new(),
            min_cols: 1,
            max_cols: 6,
            gutter_width: 20.0,
            gutter_height: 20.0,
        }
    }
}

impl GridConfig {
    /// Merges `options` over the defaults key by key and validates the result.
    pub fn from_options(options: &GridOptions) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            element_selector: options
                .grid_element_class
                .clone()
                .unwrap_or(defaults.element_selector),
            min_cols: options.min_cols.unwrap_or(defaults.min_cols),
            max_cols: options.max_cols.unwrap_or(defaults.max_cols),
            gutter_width: options.gutter_width.unwrap_or(defaults.gutter_width),
            gutter_height: options.gutter_height.unwrap_or(defaults.gutter_height),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.element_selector.trim().is_empty() {
            return Err(ConfigError::MissingSelector);
        }
        if self.min_cols == 0 || self.max_cols < self.min_cols {
            return Err(ConfigError::ColumnRange {
                min_cols: self.min_cols,
                max_cols: self.max_cols,
            });
        }
        check_gutter("gutterWidth", self.gutter_width)?;
        check_gutter("gutterHeight", self.gutter_height)?;
        Ok(())
    }
}

fn check_gutter(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidGutter { name, value })
    }
}

/// Named viewport-width thresholds, widest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BreakpointTier {
    XtraLarge,
    Large,
    Medium,
    Small,
    XtraSmall,
}

impl BreakpointTier {
    /// Tiers in evaluation order. A tier's position is the number of columns
    /// dropped from `maxCols` when it is the first one the viewport reaches.
    pub const DESCENDING: [BreakpointTier; 5] = [
        BreakpointTier::XtraLarge,
        BreakpointTier::Large,
        BreakpointTier::Medium,
        BreakpointTier::Small,
        BreakpointTier::XtraSmall,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BreakpointTier::XtraLarge => "xtraLarge",
            BreakpointTier::Large => "large",
            BreakpointTier::Medium => "medium",
            BreakpointTier::Small => "small",
            BreakpointTier::XtraSmall => "xtraSmall",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoints {
    pub xtra_large: f64,
    pub large: f64,
    pub medium: f64,
    pub small: f64,
    pub xtra_small: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            xtra_large: 1200.0,
            large: 1000.0,
            medium: 768.0,
            small: 600.0,
            xtra_small: 450.0,
        }
    }
}

impl Breakpoints {
    pub fn merged(overrides: &BreakpointOverrides) -> Self {
        let defaults = Self::default();
        Self {
            xtra_large: overrides.xtra_large.unwrap_or(defaults.xtra_large),
            large: overrides.large.unwrap_or(defaults.large),
            medium: overrides.medium.unwrap_or(defaults.medium),
            small: overrides.small.unwrap_or(defaults.small),
            xtra_small: overrides.xtra_small.unwrap_or(defaults.xtra_small),
        }
    }

    pub fn threshold(&self, tier: BreakpointTier) -> f64 {
        match tier {
            BreakpointTier::XtraLarge => self.xtra_large,
            BreakpointTier::Large => self.large,
            BreakpointTier::Medium => self.medium,
            BreakpointTier::Small => self.small,
            BreakpointTier::XtraSmall => self.xtra_small,
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/config.rs"]
mod tests;
