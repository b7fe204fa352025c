//! Module for loading fonts used to render captions.

use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use rusttype::{self, FontCollection};


pub const FILE_EXTENSION: &'static str = "ttf";


/// Font that captions are rendered with.
macro_attr! {
    #[derive(NewtypeDeref!, NewtypeFrom!)]
    pub struct Font(rusttype::Font<'static>);
    // TODO: add font name for better Debug
}
impl fmt::Debug for Font {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Font(...)")
    }
}

impl Font {
    /// Load a font from the raw bytes of a TTF file.
    ///
    /// The file must contain exactly one typeface.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Font, FontError> {
        let fonts: Vec<_> = FontCollection::from_bytes(bytes).into_fonts().collect();
        match fonts.len() {
            0 => {
                error!("No typefaces found in the font file");
                Err(FontError::NoFonts)
            }
            1 => {
                debug!("Font loaded successfully");
                Ok(fonts.into_iter().next().unwrap().into())
            }
            count => {
                error!("Font file contains {} typefaces, expected one", count);
                Err(FontError::TooManyFonts(count))
            }
        }
    }

    /// Load a font from a TTF file at given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Font, FontError> {
        let path = path.as_ref();
        trace!("Loading font from {}", path.display());

        let file = File::open(path).map_err(FontError::Io)?;
        let mut bytes = match file.metadata() {
            Ok(stat) => Vec::with_capacity(stat.len() as usize),
            Err(e) => {
                warn!("Failed to stat font file {} to obtain its size: {}",
                    path.display(), e);
                Vec::new()
            },
        };

        let mut reader = BufReader::new(file);
        reader.read_to_end(&mut bytes).map_err(FontError::Io)?;
        Self::from_bytes(bytes)
    }
}


/// Error that may occur while loading a font.
#[derive(Debug)]
pub enum FontError {
    /// Error while reading the font file.
    Io(io::Error),
    /// Font file contains no typefaces.
    NoFonts,
    /// Font file contains more typefaces than expected.
    TooManyFonts(usize),
}

impl Error for FontError {
    fn description(&self) -> &str { "font loading error" }
    fn cause(&self) -> Option<&Error> {
        match *self {
            FontError::Io(ref e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for FontError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FontError::Io(ref e) => write!(fmt, "cannot read font file: {}", e),
            FontError::NoFonts => write!(fmt, "no typefaces found in the font file"),
            FontError::TooManyFonts(c) =>
                write!(fmt, "font file contains {} typefaces, expected one", c),
        }
    }
}
