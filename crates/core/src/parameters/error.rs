//! Parameter error types

/// Errors from parameter validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    /// Values are individually valid but inconsistent with each other
    InvalidConfig {
        /// Name of the offending parameter
        name: &'static str,
    },
}

impl core::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParameterError::InvalidConfig { name } => {
                write!(f, "invalid parameter configuration: {}", name)
            }
        }
    }
}
