//! Module handling the resources used for composing memes.

mod fonts;


pub use self::fonts::{Font, FontError, FILE_EXTENSION as FONT_FILE_EXTENSION};
