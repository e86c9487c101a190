mod error;
mod glyph;
mod schedule;

#[cfg(feature = "github")]
pub mod github;

pub use error::*;
pub use glyph::*;
pub use schedule::*;
