use core::fmt;

/// Errors raised while loading or validating settings and tuning.
///
/// The simulation itself never fails; everything here is about rejecting
/// configuration before a session starts.
#[derive(Debug)]
pub enum ConfigError {
    /// The JSON document could not be parsed
    Parse(serde_json::Error),
    /// A value is out of range
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::Invalid { field, reason }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid settings json: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_field() {
        let err = ConfigError::invalid("ball_radius", "must be positive");
        assert_eq!(err.to_string(), "invalid `ball_radius`: must be positive");
    }

    #[test]
    fn test_parse_error_has_source() {
        let err: ConfigError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("invalid settings json"));
    }
}
