//! Module implementing the actual composition task.
//! Most if not all drawing logic lives here.

use std::ops::Deref;

use image::{DynamicImage, GenericImage};
use rusttype::{point, Rect, vector};

use model::MemeInput;
use text::{self, HAlign, Style, VAlign};
use super::compositor::Compositor;
use super::error::ComposeError;
use super::output::MemeOutput;


/// Maximum size (in pixels) of the margin around caption text.
const MAX_MARGIN: f32 = 16.0;
/// Size of the margin around caption text, as a fraction of image dimension.
const MARGIN_FRACTION: f32 = 0.02;


/// Represents a single composition and contains all the relevant logic.
///
/// This is a separate struct so that the rendering state
/// can be easily carried between its methods.
///
/// The work is synchronous and runs entirely on the calling thread.
pub(super) struct ComposeTask<'c> {
    input: &'c MemeInput,
    compositor: &'c Compositor,
}

impl<'c> Deref for ComposeTask<'c> {
    type Target = MemeInput;
    fn deref(&self) -> &Self::Target {
        self.input  // makes the rendering code a little terser
    }
}

impl<'c> ComposeTask<'c> {
    #[inline]
    pub fn new(input: &'c MemeInput, compositor: &'c Compositor) -> Self {
        ComposeTask{input: input, compositor: compositor}
    }
}

impl<'c> ComposeTask<'c> {
    /// Perform the composition task.
    pub fn perform(self) -> Result<MemeOutput, ComposeError> {
        debug!("Composing {:?}", self.input);

        let (width, height) = self.input.dimensions();
        if width == 0 || height == 0 {
            return Err(ComposeError::InvalidInput(width, height));
        }

        let mut img = self.image.clone();
        if self.has_text() {
            img = self.draw_texts(img)?;
        } else {
            debug!("No captions given, returning a plain copy of the source");
        }
        Ok(MemeOutput::new(img))
    }

    /// Draw both captions on given image.
    /// Returns a new image.
    fn draw_texts(&self, img: DynamicImage) -> Result<DynamicImage, ComposeError> {
        // Rendering text requires alpha blending.
        let mut img = img;
        if img.as_rgba8().is_none() {
            trace!("Converting image to RGBA...");
            img = DynamicImage::ImageRgba8(img.to_rgba());
        }

        img = self.draw_single_caption(img, VAlign::Top, &self.top_text)?;
        img = self.draw_single_caption(img, VAlign::Bottom, &self.bottom_text)?;
        Ok(img)
    }

    /// Draw a single caption text.
    /// Returns a new image.
    fn draw_single_caption(&self, img: DynamicImage,
                           valign: VAlign, text: &str) -> Result<DynamicImage, ComposeError> {
        let mut img = img;

        if text.is_empty() {
            debug!("Empty caption text, skipping.");
            return Ok(img);
        }
        debug!("Rendering {v} text: {text:?}", text = text,
            v = format!("{:?}", valign).to_lowercase());

        let font = self.compositor.font();
        let missing = text::missing_glyphs(font, text);
        if !missing.is_empty() {
            return Err(ComposeError::Glyphs(missing));
        }

        let (width, height) = img.dimensions();
        let width = width as f32;
        let height = height as f32;

        // Make sure the vertical margin isn't too large by limiting it
        // to a small percentage of image height.
        let vmargin = MAX_MARGIN.min(height * MARGIN_FRACTION);
        trace!("Vertical text margin computed as {}", vmargin);

        // Similarly for the horizontal margin.
        let hmargin = MAX_MARGIN.min(width * MARGIN_FRACTION);
        trace!("Horizontal text margin computed as {}", hmargin);

        let margin_vector = vector(hmargin, vmargin);
        let rect: Rect<f32> = Rect{
            min: point(0.0, 0.0) + margin_vector,
            max: point(width, height) - margin_vector,
        };

        let style = self.compositor.style();
        let alignment = (valign, HAlign::Center);
        let text_size = height * style.size_fraction;

        // Draw four copies of the text, shifted in four diagonal directions,
        // to create the basis for an outline.
        if let Some(outline_color) = style.outline {
            let outline_width = style.outline_width;
            for &v in [vector(-outline_width, -outline_width),
                       vector(outline_width, -outline_width),
                       vector(outline_width, outline_width),
                       vector(-outline_width, outline_width)].iter() {
                let outline_style = Style::new(font, text_size, outline_color);
                let rect = Rect{min: rect.min + v, max: rect.max + v};
                img = text::render_line(img, text, alignment, rect, &outline_style);
            }
        }

        // Now render the fill color in the original position.
        let fill_style = Style::new(font, text_size, style.color);
        img = text::render_line(img, text, alignment, rect, &fill_style);

        Ok(img)
    }
}
