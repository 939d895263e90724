//! Ties the pieces together: allocate, dispatch, time.

use std::time::Instant;

use image::RgbaImage;
use log::info;

use crate::config::RenderConfig;
use crate::dispatch::render_rows;
use crate::errors::RenderError;
use crate::progress::{ConsoleProgress, Progress};
use crate::sampler::PixelSampler;

/// A validated configuration and the sampler built from it.
#[derive(Debug)]
pub struct Renderer {
    config: RenderConfig,
    sampler: PixelSampler,
}

impl Renderer {
    /// Checks `config` and builds the sampler every worker will share.
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        let sampler = PixelSampler::new(&config)?;
        Ok(Renderer { config, sampler })
    }

    /// Renders the configured view, reporting progress on the console
    /// if the configuration asks for it.
    pub fn render(&self) -> Result<RgbaImage, RenderError> {
        if self.config.show_progress {
            self.render_with(Some(&mut ConsoleProgress))
        } else {
            self.render_with(None)
        }
    }

    /// Renders the configured view, reporting each finished row to
    /// `progress`.
    pub fn render_with(&self, progress: Option<&mut dyn Progress>) -> Result<RgbaImage, RenderError> {
        info!(
            "Allocating {}x{} image...",
            self.config.width, self.config.height
        );
        let mut frame = RgbaImage::new(self.config.width as u32, self.config.height as u32);

        let seed = self.config.seed.unwrap_or_else(rand::random);
        info!(
            "Rendering with {} threads, {} samples per pixel, seed {}...",
            self.config.threads, self.config.samples, seed
        );
        let start = Instant::now();
        render_rows(
            &mut frame,
            self.config.threads,
            seed,
            progress,
            |x, y, rng| self.sampler.sample(x, y, rng),
        )?;
        info!("Done rendering in {:?}", start.elapsed());

        Ok(frame)
    }
}
