use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// 2D point / displacement in playfield pixels
/// - `add` and `mul` hand back a new value
/// - `translate` and `scale` mutate in place
#[derive(Debug, Default, Copy, Clone, PartialEq, Deserialize, Serialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Vector { x, y }
    }

    pub fn translate(&mut self, v: Vector) {
        self.x += v.x;
        self.y += v.y;
    }

    pub fn add(self, v: Vector) -> Vector {
        Vector::new(self.x + v.x, self.y + v.y)
    }

    pub fn scale(&mut self, k: f64) {
        self.x *= k;
        self.y *= k;
    }

    pub fn mul(self, k: f64) -> Vector {
        Vector::new(self.x * k, self.y * k)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::add(self, rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Vector::mul(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn add_is_component_wise() {
        let a = Vector::new(1.5, -2.0);
        let b = Vector::new(0.25, 4.0);
        assert_eq!(a.add(b), Vector::new(1.75, 2.0));
        assert_eq!(a + b, a.add(b));
    }

    #[test]
    fn mul_scales_each_component() {
        let a = Vector::new(3.0, -0.5);
        let scaled = a.mul(0.1);
        assert_relative_eq!(scaled.x, 0.3);
        assert_relative_eq!(scaled.y, -0.05);
        assert_eq!(a * 2.0, Vector::new(6.0, -1.0));
    }

    #[test]
    fn in_place_variants_match_their_copies() {
        let a = Vector::new(7.0, 11.0);
        let b = Vector::new(-2.0, 0.5);

        let mut translated = a;
        translated.translate(b);
        assert_eq!(translated, a.add(b));

        let mut scaled = a;
        scaled.scale(-3.0);
        assert_eq!(scaled, a.mul(-3.0));
    }

    #[test]
    fn derived_values_leave_the_source_untouched() {
        let a = Vector::new(1.0, 1.0);
        let _ = a.add(Vector::new(5.0, 5.0));
        let _ = a.mul(9.0);
        assert_eq!(a, Vector::new(1.0, 1.0));
    }
}
