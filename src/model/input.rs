//! Module implementing the `MemeInput` type and its builder.

use std::error;
use std::fmt;

use image::{DynamicImage, GenericImage};

use super::constants::MAX_CAPTION_LENGTH;


/// Describes a single meme to compose. Used as an input structure.
///
/// The source image is mandatory; either caption may be empty,
/// in which case nothing is drawn for it.
#[derive(Clone)]
pub struct MemeInput {
    /// Source image that the captions are drawn over.
    pub image: DynamicImage,
    /// Caption anchored near the top edge of the image.
    pub top_text: String,
    /// Caption anchored near the bottom edge of the image.
    pub bottom_text: String,
}

impl MemeInput {
    /// Create a `MemeInput` without any captions.
    #[inline]
    pub fn new(image: DynamicImage) -> Self {
        MemeInput{image: image, top_text: String::new(), bottom_text: String::new()}
    }

    /// Create a `MemeInput` with both captions given.
    #[inline]
    pub fn with_texts<T, B>(image: DynamicImage, top_text: T, bottom_text: B) -> Self
        where T: Into<String>, B: Into<String>
    {
        MemeInput{
            image: image,
            top_text: top_text.into(),
            bottom_text: bottom_text.into(),
        }
    }
}

impl MemeInput {
    /// Whether the meme includes any text.
    #[inline]
    pub fn has_text(&self) -> bool {
        !(self.top_text.is_empty() && self.bottom_text.is_empty())
    }

    /// Pixel dimensions of the source image.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

impl fmt::Debug for MemeInput {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let (width, height) = self.dimensions();
        let mut ds = fmt.debug_struct("MemeInput");
        ds.field("image", &format_args!("{}x{}", width, height));

        macro_rules! fmt_text_field {
            ($name:ident) => (
                if !self.$name.is_empty() {
                    ds.field(stringify!($name), &self.$name);
                }
            );
        }
        fmt_text_field!(top_text);
        fmt_text_field!(bottom_text);

        ds.finish()
    }
}


/// Builder for `MemeInput`.
#[derive(Clone, Default)]
#[must_use = "unused builder which must be used"]
pub struct Builder {
    image: Option<DynamicImage>,
    top_text: String,
    bottom_text: String,
}

impl Builder {
    /// Create a new `Builder` for a `MemeInput`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Builder {
    /// Set the source image of the resulting `MemeInput`.
    #[inline]
    pub fn image(mut self, image: DynamicImage) -> Self {
        self.image = Some(image); self
    }

    /// Set the top caption of the resulting `MemeInput`.
    #[inline]
    pub fn top_text<S: Into<String>>(mut self, text: S) -> Self {
        self.top_text = text.into(); self
    }

    /// Set the bottom caption of the resulting `MemeInput`.
    #[inline]
    pub fn bottom_text<S: Into<String>>(mut self, text: S) -> Self {
        self.bottom_text = text.into(); self
    }
}

impl Builder {
    /// Build the resulting `MemeInput`.
    #[inline]
    pub fn build(self) -> Result<MemeInput, Error> {
        self.validate()?;
        Ok(MemeInput{
            image: self.image.unwrap(),
            top_text: self.top_text,
            bottom_text: self.bottom_text,
        })
    }

    #[doc(hidden)]
    fn validate(&self) -> Result<(), Error> {
        if self.image.is_none() {
            return Err(Error::NoImage);
        }
        for text in [&self.top_text, &self.bottom_text].iter() {
            let length = text.chars().count();
            if length > MAX_CAPTION_LENGTH {
                return Err(Error::CaptionTooLong(length));
            }
        }
        Ok(())
    }
}


/// Error while building a `MemeInput`.
#[derive(Clone, Debug)]
pub enum Error {
    /// No source image given.
    NoImage,
    /// Caption text too long.
    CaptionTooLong(usize),
}

impl error::Error for Error {
    fn description(&self) -> &str { "MemeInput creation error" }
    fn cause(&self) -> Option<&error::Error> { None }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::NoImage => write!(fmt, "no source image chosen"),
            Error::CaptionTooLong(l) => write!(fmt, "caption text too long: {} > {}",
                l, MAX_CAPTION_LENGTH),
        }
    }
}


#[cfg(test)]
mod tests {
    use image::{DynamicImage, ImageBuffer};
    use model::MAX_CAPTION_LENGTH;
    use super::{Builder, Error, MemeInput};

    fn image() -> DynamicImage {
        DynamicImage::ImageRgb8(ImageBuffer::new(4, 4))
    }

    #[test]
    fn with_texts() {
        let input = MemeInput::with_texts(image(), "NEEDS", "CAPTIONS");
        assert_eq!("NEEDS", input.top_text);
        assert_eq!("CAPTIONS", input.bottom_text);
        assert!(input.has_text());
    }

    #[test]
    fn no_text() {
        let input = MemeInput::new(image());
        assert!(!input.has_text());
    }

    #[test]
    fn builder() {
        let input = Builder::new()
            .image(image())
            .top_text("TOP")
            .build().unwrap();
        assert_eq!((4, 4), input.dimensions());
        assert_eq!("TOP", input.top_text);
        assert_eq!("", input.bottom_text);
    }

    #[test]
    fn builder_requires_image() {
        let error = Builder::new().top_text("TOP").build().unwrap_err();
        match error {
            Error::NoImage => {}
            e => panic!("unexpected error: {:?}", e),
        }
    }

    #[test]
    fn builder_rejects_too_long_captions() {
        let text: String = ::std::iter::repeat('A').take(MAX_CAPTION_LENGTH + 1).collect();
        let error = Builder::new().image(image()).bottom_text(text).build().unwrap_err();
        match error {
            Error::CaptionTooLong(l) => assert_eq!(MAX_CAPTION_LENGTH + 1, l),
            e => panic!("unexpected error: {:?}", e),
        }
    }
}
