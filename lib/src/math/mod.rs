mod complex;
mod misc;
mod mutable_rect;
mod rect;
mod traits;

pub use complex::*;
pub use misc::*;
pub use mutable_rect::*;
pub use rect::ComplexRect;
pub use traits::*;
