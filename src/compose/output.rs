//! Defines the output of a composition operation.

use std::fmt;
use std::ops::Deref;

use image::{DynamicImage, GenericImage};


/// Output of the meme composition process.
///
/// Wraps the flattened image, which has the same pixel dimensions
/// as the source image it was composed from.
#[derive(Clone)]
#[must_use = "unused meme output which must be used"]
pub struct MemeOutput {
    image: DynamicImage,
}

impl MemeOutput {
    #[inline]
    pub(super) fn new(image: DynamicImage) -> Self {
        MemeOutput{image: image}
    }
}

impl MemeOutput {
    /// The flattened image.
    #[inline]
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Pixel dimensions of the flattened image.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Convert the output into the flattened image.
    #[inline]
    pub fn into_image(self) -> DynamicImage {
        self.image
    }
}

impl Deref for MemeOutput {
    type Target = DynamicImage;

    fn deref(&self) -> &Self::Target {
        self.image()
    }
}

impl Into<DynamicImage> for MemeOutput {
    fn into(self) -> DynamicImage {
        self.into_image()
    }
}

impl fmt::Debug for MemeOutput {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let (width, height) = self.dimensions();
        write!(fmt, "MemeOutput({}x{})", width, height)
    }
}
