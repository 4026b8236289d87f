use thiserror::Error;

#[derive(Error, Debug)]
pub enum LunarError {
    #[error("Unable to read configuration file: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    ConfigParse(String),

    #[error("Invalid UTC timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid angle format: {0}")]
    InvalidAngle(String),

    #[error("Calendar fields cannot be represented as an epoch: {0}")]
    CalendarOutOfRange(String),
}

impl From<toml::de::Error> for LunarError {
    fn from(err: toml::de::Error) -> Self {
        LunarError::ConfigParse(err.to_string())
    }
}

impl PartialEq for LunarError {
    fn eq(&self, other: &Self) -> bool {
        use LunarError::*;
        match (self, other) {
            // io::Error is not comparable: same variant is enough
            (ConfigRead(_), ConfigRead(_)) => true,

            (ConfigParse(a), ConfigParse(b)) => a == b,
            (InvalidTimestamp(a), InvalidTimestamp(b)) => a == b,
            (InvalidAngle(a), InvalidAngle(b)) => a == b,
            (CalendarOutOfRange(a), CalendarOutOfRange(b)) => a == b,

            _ => false,
        }
    }
}
