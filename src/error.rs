use reqwest::StatusCode;

/// Errors raised by the SolveBio client.
///
/// Validation failures (URN format, addressing, abstract-type misuse) are
/// raised locally at the point of detection; transport failures are wrapped
/// once and otherwise passed through unchanged, with no retries.
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    /// A textual identifier did not match the resource type's URN format.
    #[error("unrecognized URN {urn:?}; must be in the following format: \"{format}\"")]
    InvalidUrn { format: &'static str, urn: String },

    /// An instance URL was required but the object carries neither a
    /// numeric ID nor a URN.
    #[error("could not determine which URL to request: {type_name} instance has invalid ID: {id:?}")]
    AddressUnknown {
        type_name: &'static str,
        id: Option<i64>,
    },

    /// A collection operation was attempted through a non-concrete resource
    /// kind.
    #[error("{0} is an abstract resource; perform actions on a concrete resource (e.g. Depository, Dataset)")]
    AbstractResource(&'static str),

    /// No API key could be discovered.
    #[error("no API key found; set SOLVEBIO_API_KEY or add api_key to ~/.solvebio/credentials")]
    MissingCredentials,

    /// Network-level failure from the HTTP client.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("SolveBio API error ({status}): {body}")]
    Api { status: StatusCode, body: String },

    /// The response body did not match the expected wire shape.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}
