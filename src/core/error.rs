use std::fmt;

pub type Result<T> = std::result::Result<T, GridError>;

/// Invalid or unusable grid options. Raised when a session is set up.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    MissingSelector,
    NoMatchingElements(String),
    MissingContainer(String),
    ColumnRange { min_cols: u32, max_cols: u32 },
    InvalidGutter { name: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingSelector => write!(f, "gridElementClass must be set"),
            ConfigError::NoMatchingElements(selector) => {
                write!(f, "no elements match selector: {}", selector)
            }
            ConfigError::MissingContainer(selector) => {
                write!(f, "first element matching {} has no container", selector)
            }
            ConfigError::ColumnRange { min_cols, max_cols } => write!(
                f,
                "invalid column range: minCols={} maxCols={} (need 1 <= minCols <= maxCols)",
                min_cols, max_cols
            ),
            ConfigError::InvalidGutter { name, value } => {
                write!(f, "{} must be a finite value >= 0, got {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A dimension the host could not report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeasurementError {
    ViewportUnavailable,
    ContainerUnavailable,
    ElementUnavailable(String),
}

impl fmt::Display for MeasurementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasurementError::ViewportUnavailable => write!(f, "viewport width unavailable"),
            MeasurementError::ContainerUnavailable => write!(f, "container width unavailable"),
            MeasurementError::ElementUnavailable(what) => {
                write!(f, "element size unavailable: {}", what)
            }
        }
    }
}

impl std::error::Error for MeasurementError {}

#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    Configuration(ConfigError),
    Measurement(MeasurementError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Configuration(e) => write!(f, "grid configuration error: {}", e),
            GridError::Measurement(e) => write!(f, "grid measurement error: {}", e),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GridError::Configuration(e) => Some(e),
            GridError::Measurement(e) => Some(e),
        }
    }
}

impl From<ConfigError> for GridError {
    fn from(e: ConfigError) -> Self {
        GridError::Configuration(e)
    }
}

impl From<MeasurementError> for GridError {
    fn from(e: MeasurementError) -> Self {
        GridError::Measurement(e)
    }
}
