//! Module implementing meme composition.

mod compositor;
mod error;
mod output;
mod style;
mod task;

#[cfg(test)]
mod tests;


pub use self::compositor::Compositor;
pub use self::error::ComposeError;
pub use self::output::MemeOutput;
pub use self::style::CaptionStyle;
