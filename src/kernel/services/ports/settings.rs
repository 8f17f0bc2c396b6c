//! Caller-facing grid options.
//!
//! Every field is optional so callers only spell out what they override.
//! Keys are accepted in the documented camelCase form and in snake_case.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridOptions {
    #[serde(
        default,
        rename = "gridElementClass",
        alias = "grid_element_class",
        skip_serializing_if = "Option::is_none"
    )]
    pub grid_element_class: Option<String>,
    #[serde(
        default,
        rename = "maxCols",
        alias = "max_cols",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_cols: Option<u32>,
    #[serde(
        default,
        rename = "minCols",
        alias = "min_cols",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_cols: Option<u32>,
    #[serde(
        default,
        rename = "gutterWidth",
        alias = "gutter_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub gutter_width: Option<f64>,
    #[serde(
        default,
        rename = "gutterHeight",
        alias = "gutter_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub gutter_height: Option<f64>,
}

impl GridOptions {
    pub fn new(grid_element_class: impl Into<String>) -> Self {
        Self {
            grid_element_class: Some(grid_element_class.into()),
            ..Self::default()
        }
    }

    pub fn max_cols(mut self, max_cols: u32) -> Self {
        self.max_cols = Some(max_cols);
        self
    }

    pub fn min_cols(mut self, min_cols: u32) -> Self {
        self.min_cols = Some(min_cols);
        self
    }

    pub fn gutter_width(mut self, gutter_width: f64) -> Self {
        self.gutter_width = Some(gutter_width);
        self
    }

    pub fn gutter_height(mut self, gutter_height: f64) -> Self {
        self.gutter_height = Some(gutter_height);
        self
    }
}

/// Partial override of the breakpoint tiers, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BreakpointOverrides {
    #[serde(
        default,
        rename = "xtraLarge",
        alias = "xtra_large",
        skip_serializing_if = "Option::is_none"
    )]
    pub xtra_large: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<f64>,
    #[serde(
        default,
        rename = "xtraSmall",
        alias = "xtra_small",
        skip_serializing_if = "Option::is_none"
    )]
    pub xtra_small: Option<f64>,
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
