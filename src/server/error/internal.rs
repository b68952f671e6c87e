use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Every generated join code collided with an existing one.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to generate a unique {resource} code after {attempts} attempts")]
    CodeSpaceExhausted {
        /// The kind of resource the code was generated for
        resource: &'static str,
        /// Number of attempts made
        attempts: usize,
    },

    /// A stored song status is not one of the known values.
    #[error("Unknown song status '{0}' stored in database")]
    UnknownSongStatus(String),

    /// A playlist row exists without its configuration row.
    #[error("Playlist {0} has no configuration")]
    MissingPlaylistConfig(i32),
}
