//! Stochastic supersampling.  Each pixel is evaluated at several
//! randomly jittered sub-pixel positions and the resulting colors are
//! averaged, which smooths the edges a single sample per pixel would
//! leave jagged.

use image::{Rgb, Rgba};
use rand::Rng;

use crate::config::RenderConfig;
use crate::errors::RenderError;
use crate::escape::evaluate;
use crate::palette::colorize;
use crate::planes::PlaneMapper;

/// Everything needed to shade one pixel.  Shared read-only between all
/// workers; the random state lives with the caller.
#[derive(Debug)]
pub struct PixelSampler {
    plane: PlaneMapper,
    max_iterations: usize,
    samples: usize,
    jitter: bool,
}

impl PixelSampler {
    /// Builds a sampler for the view, limits and sample count in
    /// `config`.
    pub fn new(config: &RenderConfig) -> Result<Self, RenderError> {
        if config.samples == 0 {
            return Err(RenderError::InvalidConfig(
                "At least one sample per pixel is required.".to_string(),
            ));
        }
        Ok(PixelSampler {
            plane: PlaneMapper::new(config.width, config.height, config.origin, config.size)?,
            max_iterations: config.max_iterations,
            samples: config.samples,
            jitter: config.jitter,
        })
    }

    /// The color of pixel (x, y): the mean of `samples` jittered
    /// evaluations, fully opaque.
    pub fn sample<R: Rng>(&self, x: usize, y: usize, rng: &mut R) -> Rgba<u8> {
        let colors = (0..self.samples).map(|_| {
            let (ox, oy) = self.offset(rng);
            let point = self.plane.pixel_to_point(x as f64 + ox, y as f64 + oy);
            colorize(evaluate(point, self.max_iterations), self.max_iterations)
        });
        average(colors)
    }

    // Two independent draws in [0, 1), or the pixel corner when jitter
    // is off.
    fn offset<R: Rng>(&self, rng: &mut R) -> (f64, f64) {
        if self.jitter {
            (rng.gen::<f64>(), rng.gen::<f64>())
        } else {
            (0.0, 0.0)
        }
    }
}

/// Channel-wise arithmetic mean, truncated toward zero, with opacity
/// pinned at 255.  An empty set of samples is opaque black.
pub fn average<I>(colors: I) -> Rgba<u8>
where
    I: IntoIterator<Item = Rgb<u8>>,
{
    let (mut sums, mut count) = ([0_u64; 3], 0_u64);
    for color in colors {
        for (sum, &channel) in sums.iter_mut().zip(color.0.iter()) {
            *sum += u64::from(channel);
        }
        count += 1;
    }
    if count == 0 {
        return Rgba([0, 0, 0, 255]);
    }
    let mean = |sum: u64| num::clamp(sum / count, 0, 255) as u8;
    Rgba([mean(sums[0]), mean(sums[1]), mean(sums[2]), 255])
}
