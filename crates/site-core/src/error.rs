use thiserror::Error;

/// Errors raised by the parsing helpers in this crate.
///
/// Page behaviors themselves never fail; these only surface when reading
/// values the browser or the markup hands us.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BehaviorError {
    /// A computed `transform` value that is neither `none` nor a 2D/3D matrix.
    #[error("unparseable transform: {0:?}")]
    ParseTransform(String),

    /// A configuration override that could not be used.
    #[error("invalid config value for {key}: {value:?}")]
    InvalidConfig { key: String, value: String },
}

pub type Result<T> = std::result::Result<T, BehaviorError>;
