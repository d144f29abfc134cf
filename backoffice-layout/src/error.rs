use thiserror::Error;

/// Errors reported when validating configured layout values.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// Breakpoint thresholds are not finite, positive and strictly increasing.
    #[error("invalid breakpoints: {message}")]
    Breakpoints { message: String },
    /// Panel widths or rail offsets cannot produce a usable layout.
    #[error("invalid layout constants: {message}")]
    Constants { message: String },
    /// The route table is malformed.
    #[error("invalid route table: {message}")]
    Routes { message: String },
}
