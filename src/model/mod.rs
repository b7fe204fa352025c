//! Module defining the input data model.

mod color;
mod constants;
mod input;


pub use self::color::Color;
pub use self::constants::*;
pub use self::input::{Builder as MemeBuilder, Error as MemeBuildError, MemeInput};
