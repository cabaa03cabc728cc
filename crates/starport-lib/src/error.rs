use thiserror::Error;

/// Convenient result alias for the starport library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Not enough of a required resource, or a room needed for the action is broken.
    #[error("insufficient resources: {reason}")]
    InsufficientResources { reason: String },

    /// A cargo hold has no free container slot.
    #[error("insufficient capacity: cargo hold already holds {capacity} containers")]
    InsufficientCapacity { capacity: usize },

    /// The target port is unknown or out of range for the requested travel mode.
    #[error("no path to \"{port}\": {reason}")]
    NoPath { port: String, reason: String },

    /// Unknown room or item name, disallowed upgrade, or an illegal call.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Raised when galaxy map data fails validation.
    #[error("invalid galaxy map data: {message}")]
    MapDataValidation { message: String },

    /// Raised when two ports in a galaxy map share a name.
    #[error("duplicate port name encountered: {name}")]
    DuplicatePortName { name: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    pub(crate) fn insufficient(reason: impl Into<String>) -> Self {
        Error::InsufficientResources {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }

    /// Build a [`Error::NoPath`] for a port name that is not on the map.
    pub(crate) fn unknown_port(name: &str, suggestions: &[String]) -> Self {
        Error::NoPath {
            port: name.to_string(),
            reason: format!("unknown port{}", format_suggestions(suggestions)),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
