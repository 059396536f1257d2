use std::fmt::{Display, Formatter};

use super::{map_into_range, Complex};
use crate::utils::Float;

/// Axis-aligned rectangle of the complex plane.
///
/// Only the two canonical corners are stored: `top_left` holds the minimal real
/// and maximal imaginary part, `bottom_right` the maximal real and minimal
/// imaginary part. The other two corners are derived on every access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

/// Sorts the coordinates of two arbitrary points into `(top_left, bottom_right)`.
pub(crate) fn normalize(a: Complex, b: Complex) -> (Complex, Complex) {
    (
        Complex::new(a.real().min(b.real()), a.imaginary().max(b.imaginary())),
        Complex::new(a.real().max(b.real()), a.imaginary().min(b.imaginary())),
    )
}

impl ComplexRect {
    /// Builds the rectangle spanned by two opposite corners given in any order.
    pub fn new(a: Complex, b: Complex) -> Self {
        let (top_left, bottom_right) = normalize(a, b);
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Smallest rectangle containing every point, `None` if there are none.
    pub fn bounding<I>(points: I) -> Option<ComplexRect>
    where
        I: IntoIterator<Item = Complex>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::new(first, first), |rect, point| {
            Self::new(
                Complex::new(
                    rect.top_left.real().min(point.real()),
                    rect.top_left.imaginary().max(point.imaginary()),
                ),
                Complex::new(
                    rect.bottom_right.real().max(point.real()),
                    rect.bottom_right.imaginary().min(point.imaginary()),
                ),
            )
        }))
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

    pub fn center(&self) -> Complex {
        Complex::new(
            (self.top_left.real() + self.bottom_right.real()) / 2.,
            (self.top_left.imaginary() + self.bottom_right.imaginary()) / 2.,
        )
    }

    /// Edges are inclusive.
    pub fn contains(&self, point: Complex) -> bool {
        point.real() >= self.top_left.real()
            && point.real() <= self.bottom_right.real()
            && point.imaginary() <= self.top_left.imaginary()
            && point.imaginary() >= self.bottom_right.imaginary()
    }

    /// Point at a fractional position inside the rectangle, `(0, 0)` being the
    /// top left corner and `(1, 1)` the bottom right one.
    ///
    /// Handy for mapping a pixel grid onto the region:
    /// `rect.point_at(x as Float / w as Float, y as Float / h as Float)`.
    pub fn point_at(&self, x_fraction: Float, y_fraction: Float) -> Complex {
        Complex::new(
            map_into_range(
                x_fraction,
                0. ..1.,
                self.top_left.real()..self.bottom_right.real(),
            ),
            map_into_range(
                y_fraction,
                0. ..1.,
                self.top_left.imaginary()..self.bottom_right.imaginary(),
            ),
        )
    }
}

impl Display for ComplexRect {
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

pub(crate) fn write_corners(
    f: &mut Formatter<'_>,
    top_left: Complex,
    bottom_right: Complex,
    bottom_left: Complex,
    top_right: Complex,
) -> std::fmt::Result {
    write!(
        f,
        "topLeft: {}, bottomRight: {}, bottomLeft: {}, topRight: {}",
        top_left, bottom_right, bottom_left, top_right
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::Rng as _;
    use rand_pcg::Pcg64;
    use rand_seeder::Seeder;

    use super::ComplexRect;
    use crate::math::Complex;

    #[test]
    fn normalizes_reversed_corners() {
        let reversed = ComplexRect::new(Complex::new(1., -1.), Complex::new(-2., 1.));
        let ordered = ComplexRect::new(Complex::new(-2., 1.), Complex::new(1., -1.));
        assert_eq!(reversed, ordered);

        assert_eq!(reversed.top_left(), Complex::new(-2., 1.));
        assert_eq!(reversed.bottom_right(), Complex::new(1., -1.));
        assert_eq!(reversed.bottom_left(), Complex::new(-2., -1.));
        assert_eq!(reversed.top_right(), Complex::new(1., 1.));
        assert_eq!(reversed.width(), 3.);
        assert_eq!(reversed.height(), 2.);
    }

    #[test]
    fn normalizes_anti_diagonal_corners() {
        let rect = ComplexRect::new(Complex::new(-2., -1.), Complex::new(1., 1.));
        assert_eq!(rect.top_left(), Complex::new(-2., 1.));
        assert_eq!(rect.bottom_right(), Complex::new(1., -1.));
    }

    #[test]
    fn invariant_holds_for_random_corners() {
        let mut rng: Pcg64 = Seeder::from("rect").make_rng();
        for _ in 0..256 {
            let a = Complex::new(rng.gen_range(-10. ..10.), rng.gen_range(-10. ..10.));
            let b = Complex::new(rng.gen_range(-10. ..10.), rng.gen_range(-10. ..10.));
            let rect = ComplexRect::new(a, b);
            assert!(rect.top_left().real() <= rect.bottom_right().real());
            assert!(rect.top_left().imaginary() >= rect.bottom_right().imaginary());
            assert!(rect.width() >= 0.);
            assert!(rect.height() >= 0.);
            assert_eq!(rect, ComplexRect::new(b, a));
            assert!(rect.contains(a));
            assert!(rect.contains(b));
        }
    }

    #[test]
    fn degenerate_rect() {
        let point = Complex::new(0.5, 0.5);
        let rect = ComplexRect::new(point, point);
        assert_eq!(rect.width(), 0.);
        assert_eq!(rect.height(), 0.);
        assert_eq!(rect.bottom_left(), point);
        assert!(rect.contains(point));
    }

    #[test]
    fn equality_ignores_corner_order() {
        let mut set = HashSet::new();
        set.insert(ComplexRect::new(Complex::new(0., 0.), Complex::new(1., 1.)));
        assert!(set.contains(&ComplexRect::new(Complex::new(1., 0.), Complex::new(0., 1.))));
        assert!(!set.contains(&ComplexRect::new(Complex::new(1., 0.), Complex::new(0., 2.))));
    }

    #[test]
    fn display() {
        let rect = ComplexRect::new(Complex::new(1., -1.), Complex::new(-2., 1.));
        assert_eq!(
            rect.to_string(),
            "topLeft: -2.00 + 𝒊, bottomRight: 1.00 - 𝒊, bottomLeft: -2.00 - 𝒊, topRight: 1.00 + 𝒊"
        );
    }

    #[test]
    fn center_and_contains() {
        let rect = ComplexRect::new(Complex::new(-2., 1.), Complex::new(1., -1.));
        assert_eq!(rect.center(), Complex::new(-0.5, 0.));
        assert!(rect.contains(Complex::ZERO));
        assert!(rect.contains(rect.top_right()));
        assert!(!rect.contains(Complex::new(1.5, 0.)));
        assert!(!rect.contains(Complex::new(0., -1.5)));
    }

    #[test]
    fn bounding() {
        assert_eq!(ComplexRect::bounding(std::iter::empty()), None);

        let points = [
            Complex::new(0.5, 0.),
            Complex::new(-1., 0.25),
            Complex::new(0., -2.),
        ];
        assert_eq!(
            ComplexRect::bounding(points),
            Some(ComplexRect::new(Complex::new(-1., 0.25), Complex::new(0.5, -2.)))
        );
    }

    #[test]
    fn point_at() {
        let rect = ComplexRect::new(Complex::new(-2., 1.), Complex::new(1., -1.));
        assert_eq!(rect.point_at(0., 0.), rect.top_left());
        assert_eq!(rect.point_at(1., 1.), rect.bottom_right());
        assert_eq!(rect.point_at(0., 1.), rect.bottom_left());
        assert_eq!(rect.point_at(1. / 3., 0.5), Complex::new(-1., 0.));
    }
}
