//! The escape-time evaluator.  Iterates z = z² + c from zero and
//! reports how long the orbit stays inside the radius-2 circle.

use num::Complex;

/// The square of the bailout radius.
pub const ESCAPE_RADIUS_SQR: f64 = 4.0;

/// How an orbit left (or didn't leave) the circle.  `magnitude_sqr` is
/// |z|² at the last check, and `iterations` is the zero-based step at
/// which escape was detected, or the iteration limit if it never was.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Escape {
    /// |z|² when the orbit was last measured.
    pub magnitude_sqr: f64,
    /// The step at which the orbit was last measured.
    pub iterations: usize,
}

impl Escape {
    /// True if the orbit got out.
    pub fn escaped(&self, max_iterations: usize) -> bool {
        self.iterations < max_iterations && self.magnitude_sqr > ESCAPE_RADIUS_SQR
    }
}

/// The classic iterator, unrolled into real and imaginary parts so the
/// squares computed for the bailout test are reused for the next step.
pub fn evaluate(c: Complex<f64>, max_iterations: usize) -> Escape {
    let (mut x, mut y) = (0.0_f64, 0.0_f64);
    let (mut xx, mut yy) = (0.0_f64, 0.0_f64);

    for i in 0..max_iterations {
        xx = x * x;
        yy = y * y;
        let xy = x * y;
        if xx + yy > ESCAPE_RADIUS_SQR {
            return Escape {
                magnitude_sqr: xx + yy,
                iterations: i,
            };
        }
        x = xx - yy + c.re;
        y = 2.0 * xy + c.im;
    }

    Escape {
        magnitude_sqr: xx + yy,
        iterations: max_iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn far_point_escapes_after_one_step() {
        // The first check always sees z = 0, so c itself is only
        // measured on the second.
        let e = evaluate(Complex::new(3.0, 0.0), 10);
        assert_eq!(e.iterations, 1);
        assert_eq!(e.magnitude_sqr, 9.0);
        assert!(e.escaped(10));
    }

    #[test]
    fn origin_never_escapes() {
        for &limit in &[0, 1, 2, 50, 1000] {
            let e = evaluate(Complex::new(0.0, 0.0), limit);
            assert_eq!(e.iterations, limit);
            assert_eq!(e.magnitude_sqr, 0.0);
            assert!(!e.escaped(limit));
        }
    }

    #[test]
    fn period_two_point_stays_bounded() {
        // c = -1 cycles 0, -1, 0, -1, ...
        let e = evaluate(Complex::new(-1.0, 0.0), 101);
        assert_eq!(e.iterations, 101);
        assert!(e.magnitude_sqr <= ESCAPE_RADIUS_SQR);
    }

    #[test]
    fn limit_reached_reports_last_magnitude() {
        // c = i: 0, i, -1+i, -i, -1+i, ... the check at step 2 sees
        // |-1+i|² = 2 and the check at step 3 sees |-i|² = 1.
        assert_eq!(evaluate(Complex::new(0.0, 1.0), 3).magnitude_sqr, 2.0);
        assert_eq!(evaluate(Complex::new(0.0, 1.0), 4).magnitude_sqr, 1.0);
    }

    #[test]
    fn boundary_point_does_not_escape() {
        // c = -2 sits exactly on the radius: 0, -2, 2, 2, ...
        let e = evaluate(Complex::new(-2.0, 0.0), 20);
        assert_eq!(e.iterations, 20);
        assert_eq!(e.magnitude_sqr, 4.0);
    }

    #[test]
    fn slower_points_take_longer() {
        let fast = evaluate(Complex::new(1.0, 1.0), 100);
        let slow = evaluate(Complex::new(0.3, 0.0), 100);
        assert!(fast.escaped(100));
        assert!(slow.escaped(100));
        assert!(fast.iterations < slow.iterations);
    }
}
