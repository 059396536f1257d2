pub type Float = f64;

/// Replaces `-0.0` with `0.0` so that values comparing equal share one bit pattern.
pub(crate) fn canonical_zero(value: Float) -> Float {
    if value == 0. {
        0.
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::canonical_zero;

    #[test]
    fn negative_zero_collapses() {
        assert_eq!(canonical_zero(-0.).to_bits(), 0f64.to_bits());
        assert_eq!(canonical_zero(0.).to_bits(), 0f64.to_bits());
        assert_eq!(canonical_zero(-1.5), -1.5);
    }
}
