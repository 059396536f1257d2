use std::{
    error::Error,
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
    ops::{Add, Div, Mul, Neg, Sub},
};

use crate::utils::{canonical_zero, Float};

/// Glyph used for the imaginary unit in `Display` output.
pub const IMAGINARY_UNIT: &str = "𝒊";

/// Complex number `real + imaginary𝒊`.
///
/// Immutable value type: fields are only readable, every operation returns a
/// new value. Being plain `Copy` data it is `Send + Sync`.
///
/// Equality is exact (no epsilon). NaN components are allowed and propagate,
/// but such values are not equal to themselves and must not be used as map keys.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex {
    real: Float,
    imaginary: Float,
}

impl Eq for Complex {}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_zero(self.real).to_bits().hash(state);
        canonical_zero(self.imaginary).to_bits().hash(state);
    }
}

impl Complex {
    pub const ZERO: Complex = Complex::new(0., 0.);
    pub const ONE: Complex = Complex::new(1., 0.);
    pub const I: Complex = Complex::new(0., 1.);

    pub const fn new(real: Float, imaginary: Float) -> Self {
        Self { real, imaginary }
    }

    pub fn real(&self) -> Float {
        self.real
    }

    pub fn imaginary(&self) -> Float {
        self.imaginary
    }

    /// Magnitude computed with `hypot`, so large or tiny components do not
    /// overflow or underflow in the intermediate squares.
    pub fn modulus(self) -> Float {
        self.real.hypot(self.imaginary)
    }

    /// `real² + imaginary²`. Cheaper than [`Complex::modulus`] but may overflow.
    pub fn modulus_squared(self) -> Float {
        self.real * self.real + self.imaginary * self.imaginary
    }

    pub fn conjugate(self) -> Self {
        Self::new(self.real, -self.imaginary)
    }

    pub fn square(self) -> Self {
        self * self
    }

    /// Division that reports a zero divisor instead of panicking.
    ///
    /// The divisor is rejected when its squared magnitude is exactly zero.
    pub fn checked_div(self, rhs: Complex) -> Result<Complex, DivisionByZero> {
        let denominator = rhs.modulus_squared();
        if denominator == 0. {
            return Err(DivisionByZero { dividend: self });
        }
        Ok(Self::new(
            (self.real * rhs.real + self.imaginary * rhs.imaginary) / denominator,
            (self.imaginary * rhs.real - self.real * rhs.imaginary) / denominator,
        ))
    }
}

impl From<(Float, Float)> for Complex {
    fn from(value: (Float, Float)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<Float> for Complex {
    fn from(value: Float) -> Self {
        Self::new(value, 0.)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionByZero {
    dividend: Complex,
}

impl DivisionByZero {
    pub fn dividend(self) -> Complex {
        self.dividend
    }
}

impl Display for DivisionByZero {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "attempt to divide {} by zero", self.dividend)
    }
}

impl Error for DivisionByZero {}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Self::Output {
        Self::new(self.real + rhs.real, self.imaginary + rhs.imaginary)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Self::Output {
        Self::new(self.real - rhs.real, self.imaginary - rhs.imaginary)
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Self::Output {
        Self::new(-self.real, -self.imaginary)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Self::Output {
        Self::new(
            self.real * rhs.real - self.imaginary * rhs.imaginary,
            self.real * rhs.imaginary + self.imaginary * rhs.real,
        )
    }
}

/// Panics when `rhs` is zero. Use [`Complex::checked_div`] to get an error instead.
impl Div for Complex {
    type Output = Complex;

    fn div(self, rhs: Complex) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{}", err),
        }
    }
}

// Only `Float op Complex` is provided. There is no `Complex op Float`.

impl Add<Complex> for Float {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Self::Output {
        Complex::from(self) + rhs
    }
}

impl Sub<Complex> for Float {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Self::Output {
        Complex::from(self) - rhs
    }
}

impl Mul<Complex> for Float {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Self::Output {
        Complex::from(self) * rhs
    }
}

/// Panics when `rhs` is zero.
impl Div<Complex> for Float {
    type Output = Complex;

    fn div(self, rhs: Complex) -> Self::Output {
        Complex::from(self) / rhs
    }
}

impl Display for Complex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (real, imaginary) = (self.real, self.imaginary);
        if imaginary == 0. {
            return write!(f, "{:.2}", real);
        }

        let unit = imaginary.abs() == 1.;
        if real == 0. {
            let sign = if imaginary > 0. { "" } else { "-" };
            if unit {
                write!(f, "{}{}", sign, IMAGINARY_UNIT)
            } else {
                write!(f, "{}{:.2}{}", sign, imaginary.abs(), IMAGINARY_UNIT)
            }
        } else {
            let sign = if imaginary > 0. { '+' } else { '-' };
            if unit {
                write!(f, "{:.2} {} {}", real, sign, IMAGINARY_UNIT)
            } else {
                write!(
                    f,
                    "{:.2} {} {:.2}{}",
                    real,
                    sign,
                    imaginary.abs(),
                    IMAGINARY_UNIT
                )
            }
        }
    }
}
