//! Free-function forms of the [`Complex`] members, kept for call sites that
//! prefer prefix style. The methods are canonical; these only forward.

use std::ops::{Add, Div, Mul, Range, Sub};

use super::{Abs, Complex, Sqr};
use crate::utils::Float;

pub fn abs<T: Abs>(x: T) -> <T as Abs>::Output {
    x.abs()
}

pub fn sqr<T: Sqr>(x: T) -> <T as Sqr>::Output {
    x.sqr()
}

pub fn modulus(z: Complex) -> Float {
    z.modulus()
}

pub fn modulus_squared(z: Complex) -> Float {
    z.modulus_squared()
}

pub(crate) fn map_into_range<T, I, O>(x: T, input: I, output: O) -> T
where
    T: Clone + Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T>,
    I: Into<Range<T>>,
    O: Into<Range<T>>,
{
    let input: Range<T> = input.into();
    let output: Range<T> = output.into();
    (x - input.start.clone()) * (output.end - output.start.clone()) / (input.end - input.start)
        + output.start
}
