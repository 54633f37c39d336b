//! Easing curves for time-based animation.

/// Quadratic ease-in-out over normalized time `t` in `[0, 1]`.
///
/// Accelerates through the first half and decelerates through the second,
/// with `f(0) = 0`, `f(0.5) = 0.5`, and `f(1) = 1`.
pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_endpoints() {
        assert!(ease_in_out_quad(0.0).abs() < EPSILON);
        assert!((ease_in_out_quad(1.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_midpoint() {
        assert!((ease_in_out_quad(0.5) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease_in_out_quad(i as f64 / 100.0);
            assert!(v >= prev, "easing not monotonic at step {i}");
            prev = v;
        }
    }

    #[test]
    fn test_clamps_out_of_range_input() {
        assert_eq!(ease_in_out_quad(-3.0), 0.0);
        assert_eq!(ease_in_out_quad(4.0), 1.0);
    }
}
