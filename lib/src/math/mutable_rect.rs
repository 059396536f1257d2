use std::fmt::{Display, Formatter};

use super::{rect::normalize, rect::write_corners, Complex, ComplexRect};
use crate::utils::Float;

/// [`ComplexRect`] whose corners can be reassigned in place.
///
/// Every setter re-normalizes both corners before it returns, so the
/// `top_left`/`bottom_right` invariant is never observable as broken.
/// Mutation goes through `&mut self`; sharing one between threads for writing
/// needs external synchronisation such as a `Mutex`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MutableComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl MutableComplexRect {
    pub fn new(a: Complex, b: Complex) -> Self {
        let (top_left, bottom_right) = normalize(a, b);
        Self {
            top_left,
            bottom_right,
        }
    }

    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    pub fn bottom_left(&self) -> Complex {
        Complex::new(self.top_left.real(), self.bottom_right.imaginary())
    }

    pub fn top_right(&self) -> Complex {
        Complex::new(self.bottom_right.real(), self.top_left.imaginary())
    }

    pub fn width(&self) -> Float {
        self.bottom_right.real() - self.top_left.real()
    }

    pub fn height(&self) -> Float {
        self.top_left.imaginary() - self.bottom_right.imaginary()
    }

    /// Assigns the top left corner, then re-sorts it against the current bottom right one.
    pub fn set_top_left(&mut self, value: Complex) {
        self.set_corners(value, self.bottom_right)
    }

    /// Assigns the bottom right corner, then re-sorts it against the current top left one.
    pub fn set_bottom_right(&mut self, value: Complex) {
        self.set_corners(self.top_left, value)
    }

    pub fn set_corners(&mut self, a: Complex, b: Complex) {
        (self.top_left, self.bottom_right) = normalize(a, b);
    }

    pub fn freeze(&self) -> ComplexRect {
        ComplexRect::new(self.top_left, self.bottom_right)
    }
}

impl From<ComplexRect> for MutableComplexRect {
    fn from(value: ComplexRect) -> Self {
        Self {
            top_left: value.top_left(),
            bottom_right: value.bottom_right(),
        }
    }
}

impl From<MutableComplexRect> for ComplexRect {
    fn from(value: MutableComplexRect) -> Self {
        value.freeze()
    }
}

impl Display for MutableComplexRect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_corners(
            f,
            self.top_left(),
            self.bottom_right(),
            self.bottom_left(),
            self.top_right(),
        )
    }
}
