//! Artwork resolution token parsing.
//!
//! The remote source reports image dimensions as a `"WxH"` token. A missing
//! or malformed token never rejects a candidate; the caller simply drops the
//! dimensions.

/// Errors that can occur while parsing a resolution token.
#[derive(Debug, thiserror::Error)]
pub enum ResolutionParseError {
    #[error("resolution token is empty")]
    Empty,

    #[error("resolution token is not in WxH form: {0}")]
    InvalidFormat(String),

    #[error("resolution dimension is not a number: {0}")]
    InvalidDimension(String),
}

/// Parses a `"WxH"` resolution token into `(width, height)`.
///
/// # Errors
///
/// Returns [`ResolutionParseError::Empty`] for an empty token,
/// [`ResolutionParseError::InvalidFormat`] when the token is not two parts
/// separated by a lowercase `x`, and
/// [`ResolutionParseError::InvalidDimension`] when a part is not a number.
pub fn parse_resolution(token: &str) -> Result<(u32, u32), ResolutionParseError> {
    if token.is_empty() {
        return Err(ResolutionParseError::Empty);
    }

    let mut parts = token.split('x');
    let (Some(width), Some(height), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ResolutionParseError::InvalidFormat(token.to_string()));
    };

    let width = width
        .parse::<u32>()
        .map_err(|_| ResolutionParseError::InvalidDimension(width.to_string()))?;
    let height = height
        .parse::<u32>()
        .map_err(|_| ResolutionParseError::InvalidDimension(height.to_string()))?;

    Ok((width, height))
}
