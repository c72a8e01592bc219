use std::fmt;

/// Result type for billed-app operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the application layer
#[derive(Debug)]
pub enum Error {
    /// Navigation target is not a registered path token. Recoverable: the
    /// prior view stays mounted.
    RouteNotFound(String),

    /// Storage layer rejection. The message reaches the error page
    /// verbatim, so Display forwards it unchanged.
    Store(billed_store::Error),

    /// Session payload exists but could not be decoded
    Session(billed_types::Error),

    /// No session stored under the "user" key
    NotLoggedIn,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RouteNotFound(token) => write!(f, "Unknown route: {}", token),
            Error::Store(err) => write!(f, "{}", err),
            Error::Session(err) => write!(f, "{}", err),
            Error::NotLoggedIn => {
                write!(f, "No session found. Run 'billed login' to sign in first.")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(err) => Some(err),
            Error::Session(err) => Some(err),
            Error::RouteNotFound(_) | Error::NotLoggedIn => None,
        }
    }
}

impl From<billed_store::Error> for Error {
    fn from(err: billed_store::Error) -> Self {
        Error::Store(err)
    }
}

impl From<billed_types::Error> for Error {
    fn from(err: billed_types::Error) -> Self {
        Error::Session(err)
    }
}
