/// Alias for `Result<T, DecodeError>`.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors raised while decoding a legends document.
///
/// Decoding is all-or-nothing: any of these aborts construction and no
/// [`World`](crate::World) is produced.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The tag-based document was malformed, truncated, or not valid UTF-8.
    #[error("invalid XML document: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// The key-based document was malformed or truncated.
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
}
