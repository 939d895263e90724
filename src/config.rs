//! The render configuration.  A `RenderConfig` is built once, checked
//! once, and then only ever read.

use num::Complex;

use crate::errors::RenderError;

/// The top-left corner of the default view, deep in the seahorse
/// valley.
pub const DEFAULT_ORIGIN: (f64, f64) = (-0.555_750_6, -0.555_60);
/// The width and height of the default view on the complex plane.
pub const DEFAULT_SIZE: f64 = 0.000_000_001;
/// Output image width, in pixels.
pub const DEFAULT_WIDTH: usize = 1920;
/// Output image height, in pixels.
pub const DEFAULT_HEIGHT: usize = 1080;
/// Per-sample iteration limit.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;
/// Jittered samples averaged into every pixel.
pub const DEFAULT_SAMPLES: usize = 25;

/// All of the knobs a render has.  `origin` is the complex point that
/// lands on the top-left corner of pixel (0, 0); `size` is the span
/// of the plane along *both* axes, so a non-square image stretches
/// the plane to fit.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// The complex point under the top-left corner of the image.
    pub origin: Complex<f64>,
    /// The span of the view on the complex plane, along either axis.
    pub size: f64,
    /// Image width, in pixels.
    pub width: usize,
    /// Image height, in pixels.
    pub height: usize,
    /// The most iterations any one sample gets before it is counted
    /// as inside the set.
    pub max_iterations: usize,
    /// Jittered samples averaged into each pixel.
    pub samples: usize,
    /// Whether to print a running row count while rendering.
    pub show_progress: bool,
    /// Size of the worker pool the rows are spread across.
    pub threads: usize,
    /// When false every sample lands on the pixel's top-left corner
    /// and the render is fully deterministic.
    pub jitter: bool,
    /// Base seed for the per-row generators.  `None` picks one at
    /// random for every render.
    pub seed: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            origin: Complex::new(DEFAULT_ORIGIN.0, DEFAULT_ORIGIN.1),
            size: DEFAULT_SIZE,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            samples: DEFAULT_SAMPLES,
            show_progress: true,
            threads: num_cpus::get(),
            jitter: true,
            seed: None,
        }
    }
}

impl RenderConfig {
    /// The whole set, head to tail.
    pub fn full_set() -> Self {
        RenderConfig {
            origin: Complex::new(-2.0, -1.2),
            size: 2.5,
            ..RenderConfig::default()
        }
    }

    /// Moves the view so `origin` sits at the top-left corner.
    pub fn with_origin(self, origin: Complex<f64>) -> Self {
        RenderConfig { origin, ..self }
    }

    /// Zooms the view to span `size` units of the plane.
    pub fn with_size(self, size: f64) -> Self {
        RenderConfig { size, ..self }
    }

    /// Changes the size of the output image.
    pub fn with_dimensions(self, width: usize, height: usize) -> Self {
        RenderConfig {
            width,
            height,
            ..self
        }
    }

    /// Changes the per-sample iteration limit.
    pub fn with_max_iterations(self, max_iterations: usize) -> Self {
        RenderConfig {
            max_iterations,
            ..self
        }
    }

    /// Changes the number of samples averaged into each pixel.
    pub fn with_samples(self, samples: usize) -> Self {
        RenderConfig { samples, ..self }
    }

    /// Turns the console progress line on or off.
    pub fn with_progress(self, show_progress: bool) -> Self {
        RenderConfig {
            show_progress,
            ..self
        }
    }

    /// Changes the size of the worker pool.
    pub fn with_threads(self, threads: usize) -> Self {
        RenderConfig { threads, ..self }
    }

    /// Turns sub-pixel jitter on or off.
    pub fn with_jitter(self, jitter: bool) -> Self {
        RenderConfig { jitter, ..self }
    }

    /// Fixes the base seed, making the render reproducible.
    pub fn with_seed(self, seed: u64) -> Self {
        RenderConfig {
            seed: Some(seed),
            ..self
        }
    }

    /// Rejects configurations that cannot produce an image.  Each
    /// dimension must fit the `u32` the image buffer and the encoder
    /// take.
    pub fn validate(&self) -> Result<(), RenderError> {
        let invalid = |msg: &str| Err(RenderError::InvalidConfig(msg.to_string()));

        if self.width == 0 || self.height == 0 {
            return invalid("The image must be at least one pixel wide and high.");
        }
        let limit = u64::from(u32::max_value());
        if self.width as u64 > limit || self.height as u64 > limit {
            return invalid("The image is too large to encode.");
        }
        if self.samples == 0 {
            return invalid("At least one sample per pixel is required.");
        }
        if self.threads == 0 {
            return invalid("At least one worker thread is required.");
        }
        if !self.size.is_finite() || self.size < 0.0 {
            return invalid("The plane span must be a finite, non-negative number.");
        }
        if !self.origin.re.is_finite() || !self.origin.im.is_finite() {
            return invalid("The plane origin must be finite.");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_seahorse_view() {
        let config = RenderConfig::default();
        assert_eq!(config.origin, Complex::new(-0.5557506, -0.55560));
        assert_eq!(config.size, 0.000000001);
        assert_eq!((config.width, config.height), (1920, 1080));
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.samples, 25);
        assert!(config.show_progress);
        assert!(config.jitter);
        assert!(config.threads >= 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn full_set_only_moves_the_view() {
        let config = RenderConfig::full_set();
        assert_eq!(config.origin, Complex::new(-2.0, -1.2));
        assert_eq!(config.size, 2.5);
        assert_eq!(config.samples, DEFAULT_SAMPLES);
    }

    #[test]
    fn builders_change_one_field() {
        let config = RenderConfig::default()
            .with_dimensions(4, 3)
            .with_samples(1)
            .with_seed(7);
        assert_eq!((config.width, config.height), (4, 3));
        assert_eq!(config.samples, 1);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn validate_rejects_empty_images() {
        assert!(RenderConfig::default().with_dimensions(0, 10).validate().is_err());
        assert!(RenderConfig::default().with_dimensions(10, 0).validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_samples_and_threads() {
        assert!(RenderConfig::default().with_samples(0).validate().is_err());
        assert!(RenderConfig::default().with_threads(0).validate().is_err());
    }

    #[test]
    fn validate_bounds_both_dimensions_alike() {
        let limit = u32::max_value() as usize;
        assert!(RenderConfig::default().with_dimensions(limit, 1).validate().is_ok());
        assert!(RenderConfig::default().with_dimensions(1, limit).validate().is_ok());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn validate_rejects_dimensions_past_u32() {
        let over = u32::max_value() as usize + 1;
        assert!(RenderConfig::default().with_dimensions(over, 1).validate().is_err());
        assert!(RenderConfig::default().with_dimensions(1, over).validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_spans() {
        assert!(RenderConfig::default().with_size(-1.0).validate().is_err());
        assert!(RenderConfig::default().with_size(std::f64::NAN).validate().is_err());
        assert!(RenderConfig::default().with_size(0.0).validate().is_ok());
    }
}
