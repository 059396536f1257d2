#![no_main]

use complex_rect::{
    math::{Complex, ComplexRect, MutableComplexRect},
    utils::Float,
};
use libfuzzer_sys::fuzz_target;
use rand::Rng as _;
use rand_pcg::Pcg64;
use rand_seeder::Seeder;

const SPECIAL: [Float; 8] = [0., -0., 1., -1., 0.5, -0.5, 1e200, -1e-200];

fn random_component(rng: &mut Pcg64) -> Float {
    if rng.random_bool(0.25) {
        SPECIAL[rng.random_range(0..SPECIAL.len())]
    } else {
        rng.random_range(-1e6..1e6)
    }
}

fn random_complex(rng: &mut Pcg64) -> Complex {
    Complex::new(random_component(rng), random_component(rng))
}

// Equality that also treats two NaN components as the same outcome.
fn same(x: Complex, y: Complex) -> bool {
    let component = |p: Float, q: Float| p == q || (p.is_nan() && q.is_nan());
    component(x.real(), y.real()) && component(x.imaginary(), y.imaginary())
}

fn check_rect(rect: &MutableComplexRect) {
    assert!(rect.top_left().real() <= rect.bottom_right().real());
    assert!(rect.top_left().imaginary() >= rect.bottom_right().imaginary());
    assert!(rect.width() >= 0.);
    assert!(rect.height() >= 0.);
}

// Drives arithmetic, formatting and rect normalization with values derived from input data.
fuzz_target!(|data: &[u8]| {
    let mut rng: Pcg64 = Seeder::from(data).into_rng();

    let a = random_complex(&mut rng);
    let b = random_complex(&mut rng);

    assert!(same(a + b, b + a));
    assert!(same(a * b, b * a));
    assert!(a.modulus().is_finite());

    match a.checked_div(b) {
        Ok(quotient) => assert!(same(quotient, a / b)),
        Err(err) => {
            assert_eq!(b.modulus_squared(), 0.);
            assert_eq!(err.dividend(), a);
        }
    }

    assert!(!a.to_string().is_empty());
    assert!(!a.to_string().contains("--"));
    assert!(!a.to_string().contains("+ -"));

    let frozen = ComplexRect::new(a, b);
    let mut rect = MutableComplexRect::new(a, b);
    assert_eq!(rect.freeze(), frozen);
    check_rect(&rect);

    let mut steps: usize = 0;
    while rng.random_bool(0.9) && steps < 64 {
        let corner = random_complex(&mut rng);
        if rng.random_bool(0.5) {
            rect.set_top_left(corner);
        } else {
            rect.set_bottom_right(corner);
        }
        check_rect(&rect);

        let before = rect;
        rect.set_top_left(rect.top_left());
        assert_eq!(rect, before);
        steps += 1;
    }

    println!("data: {:?}, steps: {}, rect: {}", data, steps, rect);
});
