//! Composition error.

use std::error::Error;
use std::fmt;


/// Error that may occur during meme composition.
#[derive(Clone, Debug)]
pub enum ComposeError {
    /// Source image has degenerate dimensions.
    InvalidInput(u32, u32),
    /// Font has no glyphs for some codepoints of a caption.
    ///
    /// Carries the missing codepoints, in ascending order.
    Glyphs(Vec<u32>),
}

impl Error for ComposeError {
    fn description(&self) -> &str { "composition error" }
    fn cause(&self) -> Option<&Error> { None }
}

impl fmt::Display for ComposeError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ComposeError::InvalidInput(w, h) =>
                write!(fmt, "invalid source image dimensions: {}x{}", w, h),
            ComposeError::Glyphs(ref codepoints) =>
                write!(fmt, "font lacks glyphs for {} codepoint(s): {}",
                    codepoints.len(),
                    codepoints.iter().map(|c| format!("{:#x}", c))
                        .collect::<Vec<_>>().join(", ")),
        }
    }
}
