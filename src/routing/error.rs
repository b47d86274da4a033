// Start of file: /src/routing/error.rs

// Routing errors for table construction, resolution and reverse lookup

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No entry matched the requested path
    #[error("no route matches path '{0}'")]
    NotFound(String),

    /// No entry carries the requested name
    #[error("reverse for '{0}' not found")]
    NoReverseMatch(String),

    #[error("reverse for '{route}' is missing parameter '{param}'")]
    MissingParameter { route: String, param: String },

    #[error("reverse for '{route}' got unexpected parameter '{param}'")]
    UnexpectedParameter { route: String, param: String },

    #[error("value '{value}' is not valid for parameter '{param}' of '{route}'")]
    InvalidParameter {
        route: String,
        param: String,
        value: String,
    },

    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("route name '{0}' is declared more than once")]
    DuplicateName(String),
}

// End of file: /src/routing/error.rs
