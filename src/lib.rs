//!
//! lolcap -- Caption your pics for the lulz
//!

             extern crate image;
#[macro_use] extern crate log;
#[macro_use] extern crate macro_attr;
#[macro_use] extern crate newtype_derive;
             extern crate num;
             extern crate rusttype;
             extern crate unreachable;


#[cfg(test)] #[macro_use] extern crate spectral;


mod compose;
mod model;
mod resources;
mod text;


pub use compose::*;
pub use model::*;
pub use resources::*;
