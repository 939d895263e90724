//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a square region of the complex plane whose top-left corner
//! sits at an arbitrary point.
use num::Complex;

use crate::errors::RenderError;

/// Contains the definitions of two planes: an integral cartesian
/// plane, and a region of the complex plane `size` units on a side.
/// Maps (possibly fractional) pixel positions from one to the other.
/// The same span is used for both axes, so an image that isn't square
/// stretches the region to fit it.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The width of the pixel grid.
    pub width: usize,
    /// The height of the pixel grid.
    pub height: usize,
    /// The complex point under the top-left corner of pixel 0,0.
    pub origin: Complex<f64>,
    /// The span of the complex region along either axis.
    pub size: f64,
}

impl PlaneMapper {
    /// Takes the size of the pixel grid, the origin of the complex
    /// region and its span.
    pub fn new(
        width: usize,
        height: usize,
        origin: Complex<f64>,
        size: f64,
    ) -> Result<PlaneMapper, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidConfig(
                "The integral plane has no area.".to_string(),
            ));
        }

        if !size.is_finite() || size < 0.0 {
            return Err(RenderError::InvalidConfig(
                "The complex span must be finite and non-negative.".to_string(),
            ));
        }

        Ok(PlaneMapper {
            width,
            height,
            origin,
            size,
        })
    }

    /// Given a position on the integral plane, with any sub-pixel
    /// offset already added in, return the point on the complex plane
    /// under it.
    pub fn pixel_to_point(&self, left: f64, top: f64) -> Complex<f64> {
        Complex::new(
            self.size * (left / self.width as f64) + self.origin.re,
            self.size * (top / self.height as f64) + self.origin.im,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planemapper_fails_on_empty_grid() {
        assert!(PlaneMapper::new(0, 4, Complex::new(0.0, 0.0), 1.0).is_err());
        assert!(PlaneMapper::new(4, 0, Complex::new(0.0, 0.0), 1.0).is_err());
    }

    #[test]
    fn planemapper_fails_on_bad_span() {
        assert!(PlaneMapper::new(4, 4, Complex::new(0.0, 0.0), -1.0).is_err());
        assert!(PlaneMapper::new(4, 4, Complex::new(0.0, 0.0), std::f64::INFINITY).is_err());
    }

    #[test]
    fn planemapper_passes_on_good_shape() {
        let pm = PlaneMapper::new(4, 3, Complex::new(-2.0, -1.2), 2.5).unwrap();
        assert_eq!((pm.width, pm.height), (4, 3));
        assert_eq!(pm.pixel_to_point(0.0, 0.0), Complex::new(-2.0, -1.2));
    }

    #[test]
    fn pixel_to_point_on_positive_planes() {
        let pm = PlaneMapper::new(5, 5, Complex::new(0.0, 0.0), 5.0).unwrap();
        assert_eq!(pm.pixel_to_point(0.0, 0.0), Complex::new(0.0, 0.0));
        assert_eq!(pm.pixel_to_point(2.0, 2.0), Complex::new(2.0, 2.0));
        assert_eq!(pm.pixel_to_point(4.5, 0.5), Complex::new(4.5, 0.5));
    }

    #[test]
    fn pixel_to_points_on_mixed_planes() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-2.0, -2.0), 4.0).unwrap();
        assert_eq!(pm.pixel_to_point(0.0, 0.0), Complex::new(-2.0, -2.0));
        assert_eq!(pm.pixel_to_point(2.0, 2.0), Complex::new(0.0, 0.0));
        assert_eq!(pm.pixel_to_point(4.0, 4.0), Complex::new(2.0, 2.0));
    }

    #[test]
    fn span_covers_both_axes_of_a_wide_image() {
        let pm = PlaneMapper::new(8, 2, Complex::new(0.0, 0.0), 4.0).unwrap();
        assert_eq!(pm.pixel_to_point(8.0, 2.0), Complex::new(4.0, 4.0));
        assert_eq!(pm.pixel_to_point(1.0, 1.0), Complex::new(0.5, 2.0));
    }

    #[test]
    fn zero_span_collapses_to_the_origin() {
        let pm = PlaneMapper::new(16, 9, Complex::new(0.25, -0.5), 0.0).unwrap();
        assert_eq!(pm.pixel_to_point(15.9, 8.9), Complex::new(0.25, -0.5));
    }
}
