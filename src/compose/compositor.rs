//! Module which defines the meme compositor.

use model::MemeInput;
use resources::Font;
use super::error::ComposeError;
use super::output::MemeOutput;
use super::style::CaptionStyle;
use super::task::ComposeTask;


/// Meme compositor.
///
/// Turns a `MemeInput` into a flattened image with the captions drawn on.
/// The compositor retains no state between calls, so a single instance
/// can be shared freely between threads.
#[derive(Debug)]
pub struct Compositor {
    font: Font,
    style: CaptionStyle,
}

// Constructors.
impl Compositor {
    /// Create a `Compositor` drawing captions in the default style.
    #[inline]
    pub fn new(font: Font) -> Self {
        Self::with_style(font, CaptionStyle::default())
    }

    /// Create a `Compositor` drawing captions in given style.
    #[inline]
    pub fn with_style(font: Font, style: CaptionStyle) -> Self {
        Compositor{font: font, style: style}
    }
}

impl Compositor {
    /// The caption style used by this compositor.
    #[inline]
    pub fn style(&self) -> &CaptionStyle {
        &self.style
    }

    #[inline]
    pub(super) fn font(&self) -> &Font {
        &self.font
    }
}

// Meme composition.
impl Compositor {
    /// Compose a meme by drawing the captions over the source image.
    ///
    /// The input is not modified; the result is a new image
    /// with the same pixel dimensions as the source.
    ///
    /// Note that composition is a CPU-intensive process and can be
    /// relatively lengthy for large images.
    /// It is recommended to execute it outside of any interactive thread.
    #[inline]
    pub fn compose(&self, input: &MemeInput) -> Result<MemeOutput, ComposeError> {
        ComposeTask::new(input, self).perform()
    }
}


#[cfg(test)]
mod tests {
    use super::Compositor;

    #[test]
    fn thread_safe() {
        fn assert_sync<T: Sync>() {}
        fn assert_send<T: Send>() {}

        assert_sync::<Compositor>();
        assert_send::<Compositor>();
    }
}
