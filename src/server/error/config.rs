use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// README for the list of required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be parsed into the expected type.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidValue {
        /// Name of the offending variable
        name: String,
        /// The raw value that failed to parse
        value: String,
    },

    /// A configured URL could not be parsed for the OAuth client.
    #[error("Invalid URL for {name}: {source}")]
    InvalidUrl {
        /// Name of the configuration entry holding the URL
        name: String,
        #[source]
        source: url::ParseError,
    },
}
