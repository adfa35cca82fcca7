use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidHeaderValue { field: &'static str },
    InvalidUrl { field: &'static str, input: String },
    InvalidPhoneNumber { input: String },
    InvalidRegion { input: String },
    NegativeThreshold { actual: i64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidHeaderValue { field } => {
                write!(f, "{field} contains characters not allowed in an HTTP header")
            }
            Self::InvalidUrl { field, input } => write!(f, "invalid {field}: {input}"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidRegion { input } => {
                write!(f, "invalid region calling code: {input}")
            }
            Self::NegativeThreshold { actual } => {
                write!(
                    f,
                    "invalid failover threshold: {actual} (expected a value >= 0)"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
