//! Tests for meme composition.

use image::{DynamicImage, GenericImage, ImageBuffer, Rgb};
use spectral::prelude::*;

use model::MemeInput;
use resources::Font;
use super::{ComposeError, Compositor};


const FONT_PATH: &'static str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/fonts/DejaVuSans-Bold.ttf");

fn compositor() -> Compositor {
    Compositor::new(Font::from_file(FONT_PATH).expect("test font"))
}

/// Create a gradient image, so that any drawn text
/// is guaranteed to actually change some pixels.
fn source_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_fn(width, height, |x, y| {
        Rgb{data: [(x % 256) as u8, (y % 256) as u8, 0x40]}
    }))
}

/// Whether any pixel differs between the two images within given rows.
fn rows_differ(a: &DynamicImage, b: &DynamicImage, from: u32, to: u32) -> bool {
    let (width, _) = a.dimensions();
    (from..to).any(|y| (0..width).any(|x| a.get_pixel(x, y) != b.get_pixel(x, y)))
}


#[test]
fn no_captions_is_identity() {
    let source = source_image(64, 48);
    let input = MemeInput::new(source.clone());

    let output = compositor().compose(&input).unwrap();
    assert_that!(output.dimensions()).is_equal_to((64, 48));
    assert_eq!(source.raw_pixels(), output.image().raw_pixels());
}

#[test]
fn top_caption_leaves_bottom_untouched() {
    let source = source_image(200, 200);
    let input = MemeInput::with_texts(source.clone(), "TOP", "");

    let output = compositor().compose(&input).unwrap();
    assert_that!(output.dimensions()).is_equal_to((200, 200));
    assert!(rows_differ(&source, output.image(), 0, 200 / 3),
        "top caption did not change any pixels in the top third");
    assert!(!rows_differ(&source, output.image(), 200 / 2, 200),
        "top caption changed pixels in the bottom half");
}

#[test]
fn both_captions_touch_distinct_regions() {
    let source = source_image(400, 300);
    let input = MemeInput::with_texts(source.clone(), "TOP", "BOTTOM");

    let output = compositor().compose(&input).unwrap();
    assert_that!(output.dimensions()).is_equal_to((400, 300));
    assert!(rows_differ(&source, output.image(), 0, 100),
        "top caption did not change any pixels in the top third");
    assert!(rows_differ(&source, output.image(), 200, 300),
        "bottom caption did not change any pixels in the bottom third");
    assert!(!rows_differ(&source, output.image(), 100, 200),
        "captions changed pixels in the middle third");
}

#[test]
fn composition_is_deterministic() {
    let input = MemeInput::with_texts(source_image(160, 120), "SAME", "PIXELS");
    let compositor = compositor();

    let first = compositor.compose(&input).unwrap();
    let second = compositor.compose(&input).unwrap();
    assert_eq!(first.image().raw_pixels(), second.image().raw_pixels());
}

#[test]
fn degenerate_image_is_invalid_input() {
    let input = MemeInput::new(DynamicImage::ImageRgb8(ImageBuffer::new(0, 0)));

    let error = compositor().compose(&input).unwrap_err();
    match error {
        ComposeError::InvalidInput(0, 0) => {}
        e => panic!("unexpected error: {:?}", e),
    }
}

#[test]
fn unrenderable_caption_is_fatal() {
    // DejaVu has no CJK glyphs.
    let input = MemeInput::with_texts(source_image(100, 100), "\u{6f22}", "");

    let error = compositor().compose(&input).unwrap_err();
    match error {
        ComposeError::Glyphs(ref codepoints) => {
            assert_eq!(&[0x6f22u32][..], &codepoints[..]);
        }
        ref e => panic!("unexpected error: {:?}", e),
    }
}
