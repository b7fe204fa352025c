//! Module with the caption style configuration.

use model::{Color, DEFAULT_COLOR, DEFAULT_OUTLINE_COLOR,
            DEFAULT_OUTLINE_WIDTH, DEFAULT_SIZE_FRACTION};


/// Visual style that captions are drawn with.
///
/// The same style applies to both the top and the bottom caption.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptionStyle {
    /// Fill color of the caption text.
    pub color: Color,
    /// Color of the text outline, if any.
    ///
    /// Pass `None` to draw the text without an outline.
    pub outline: Option<Color>,
    /// Height of the caption text, as a fraction of source image height.
    pub size_fraction: f32,
    /// Width of the text outline, in pixels.
    pub outline_width: f32,
}

impl Default for CaptionStyle {
    /// Initialize `CaptionStyle` with the classic image macro look:
    /// white text with a black outline, sized at 10% of image height.
    fn default() -> Self {
        CaptionStyle{
            color: DEFAULT_COLOR,
            outline: Some(DEFAULT_OUTLINE_COLOR),
            size_fraction: DEFAULT_SIZE_FRACTION,
            outline_width: DEFAULT_OUTLINE_WIDTH,
        }
    }
}


#[cfg(test)]
mod tests {
    use model::Color;
    use super::CaptionStyle;

    #[test]
    fn default_is_white_on_black() {
        let style = CaptionStyle::default();
        assert_eq!(Color::white(), style.color);
        assert_eq!(Some(Color::black()), style.outline);
    }
}
