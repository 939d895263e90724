#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Supersampled Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points c on the complex plane for
//! which repeatedly squaring a number and adding c, starting from
//! zero, never runs off to infinity.  Points outside the set escape,
//! some quickly and some only after many iterations, and how fast
//! they escape is what gives the picture its color.
//!
//! This crate renders one still image of the set.  Every pixel is
//! evaluated at several randomly jittered positions inside its
//! square and the colors averaged, which keeps the filaments near the
//! boundary from aliasing into noise.  The colors come from a
//! continuous hue gradient keyed to both the escape step and the
//! magnitude at escape.  Rows are spread across a pool of worker
//! threads that write straight into disjoint slices of the
//! framebuffer.

pub mod config;
pub mod dispatch;
pub mod errors;
pub mod escape;
pub mod output;
pub mod palette;
pub mod planes;
pub mod progress;
pub mod render;
pub mod sampler;

pub use crate::config::RenderConfig;
pub use crate::errors::RenderError;
pub use crate::escape::{evaluate, Escape};
pub use crate::palette::colorize;
pub use crate::render::Renderer;
pub use crate::sampler::PixelSampler;
