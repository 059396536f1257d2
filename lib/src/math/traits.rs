use super::Complex;
use crate::utils::Float;

pub trait Sqr {
    type Output;
    fn sqr(self) -> Self::Output;
}

impl Sqr for f32 {
    type Output = f32;
    fn sqr(self) -> Self::Output {
        self * self
    }
}

impl Sqr for f64 {
    type Output = f64;
    fn sqr(self) -> Self::Output {
        self * self
    }
}

impl Sqr for Complex {
    type Output = Complex;
    fn sqr(self) -> Self::Output {
        self.square()
    }
}

/// Absolute value, which for [`Complex`] is its modulus.
pub trait Abs {
    type Output;
    fn abs(self) -> Self::Output;
}

impl Abs for f32 {
    type Output = f32;

    fn abs(self) -> Self::Output {
        f32::abs(self)
    }
}

impl Abs for f64 {
    type Output = f64;

    fn abs(self) -> Self::Output {
        f64::abs(self)
    }
}

impl Abs for Complex {
    type Output = Float;

    fn abs(self) -> Self::Output {
        self.modulus()
    }
}
