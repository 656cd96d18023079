use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Hashing or parsing a stored credential failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Password hash error: {0}")]
    PasswordHash(String),

    /// Building a URL from the configured application URL failed.
    #[error("Failed to build URL from '{base}': {source}")]
    InvalidUrl {
        /// The base URL that failed to parse or join
        base: String,
        /// The underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// The email API answered with a non-success status.
    #[error("Email API returned {status}: {body}")]
    EmailRejected { status: u16, body: String },
}
