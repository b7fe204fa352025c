//! Module defining constants relevant to the data model.

use super::color::Color;


/// Default color of the caption text.
pub const DEFAULT_COLOR: Color = Color(0xff, 0xff, 0xff);
/// Default color of the caption outline.
/// This should be the inversion of DEFAULT_COLOR.
pub const DEFAULT_OUTLINE_COLOR: Color = Color(0x0, 0x0, 0x0);

/// Default height of the caption text, as a fraction of image height.
pub const DEFAULT_SIZE_FRACTION: f32 = 0.1;
/// Default width (in pixels) of the caption outline.
pub const DEFAULT_OUTLINE_WIDTH: f32 = 2.0;

/// Maximum length (in Unicode codepoints) of a single caption text.
pub const MAX_CAPTION_LENGTH: usize = 256;
