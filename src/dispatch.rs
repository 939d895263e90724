// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The parallel row dispatcher.
//!
//! The framebuffer is cut into rows up front.  A fixed pool of scoped
//! workers pulls rows off a shared queue until it runs dry; since each
//! row slice can only be taken off the queue once, every pixel has
//! exactly one writer and the pixel data itself needs no lock.  Each
//! row draws its jitter from its own generator, seeded from the base
//! seed and the row index, so a seeded render comes out the same no
//! matter which worker picks up which row.

use std::iter::Enumerate;
use std::slice::ChunksMut;
use std::sync::{Arc, Mutex};

use crossbeam::channel;
use image::{Pixel, Rgba, RgbaImage};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::errors::RenderError;
use crate::progress::Progress;

type RowQueue<'a> = Arc<Mutex<Enumerate<ChunksMut<'a, u8>>>>;

/// The generator for one row of a render seeded with `seed`.
pub fn row_rng(seed: u64, row: usize) -> StdRng {
    StdRng::seed_from_u64(seed.wrapping_add(row as u64))
}

/// Fills every pixel of `frame` with `shade(x, y, rng)`, spreading the
/// rows across `threads` workers.  If a progress observer is given, it
/// runs on a thread of its own and hears about each row as it
/// finishes; it is told to finish once the last worker has hung up.
/// Returns once every worker, and the observer, has finished.
pub fn render_rows<F>(
    frame: &mut RgbaImage,
    threads: usize,
    seed: u64,
    progress: Option<&mut dyn Progress>,
    shade: F,
) -> Result<(), RenderError>
where
    F: Fn(usize, usize, &mut StdRng) -> Rgba<u8> + Sync,
{
    let channels = usize::from(<Rgba<u8> as Pixel>::CHANNEL_COUNT);
    let (width, height) = (frame.width() as usize, frame.height() as usize);
    if width == 0 || height == 0 {
        return Ok(());
    }

    let rows: RowQueue = Arc::new(Mutex::new(frame.chunks_mut(width * channels).enumerate()));
    let shade = &shade;
    let watching = progress.is_some();
    let (signal, signals) = channel::unbounded::<()>();

    crossbeam::scope(|spawner| {
        if let Some(observer) = progress {
            spawner.spawn(move |_| {
                for (completed, ()) in signals.iter().enumerate() {
                    observer.advance(completed + 1, height);
                }
                observer.finish();
            });
        }

        for _ in 0..threads.max(1) {
            let rows = rows.clone();
            let signal = signal.clone();
            spawner.spawn(move |_| loop {
                let row = { rows.lock().ok().and_then(|mut rows| rows.next()) };
                match row {
                    Some((y, pixels)) => {
                        let mut rng = row_rng(seed, y);
                        for (x, pixel) in pixels.chunks_mut(channels).enumerate() {
                            pixel.copy_from_slice(&shade(x, y, &mut rng).0);
                        }
                        if watching {
                            // The observer only hangs up after every sender is gone.
                            let _ = signal.send(());
                        }
                    }
                    None => {
                        break;
                    }
                }
            });
        }

        // The workers hold the only remaining senders, so the observer
        // sees the channel close exactly when the last of them exits.
        drop(signal);
    })
    .map_err(|_| RenderError::WorkerPanicked)
}
