//! Where the image goes and how it gets there.

use std::env;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use std::time::Instant;

use failure::Error;
use image::png::PNGEncoder;
use image::{ColorType, RgbaImage};
use log::info;
use tempfile::NamedTempFile;

use crate::errors::RenderError;

/// The file name used when none is given.
pub const DEFAULT_FILENAME: &str = "fractal.png";

/// The current user's home directory, from `$HOME`.
pub fn home_dir() -> Result<PathBuf, RenderError> {
    match env::var_os("HOME") {
        Some(ref home) if !home.is_empty() => Ok(PathBuf::from(home)),
        _ => Err(RenderError::NoHomeDirectory),
    }
}

/// `name` (or the default) relative to `home`.  A leading root is
/// dropped rather than allowed to replace `home`, so `/etc/x.png`
/// lands at `home/etc/x.png`.
pub fn resolve_output(home: &Path, name: Option<&str>) -> PathBuf {
    let mut path = home.to_path_buf();
    for part in Path::new(name.unwrap_or(DEFAULT_FILENAME)).components() {
        match part {
            Component::Normal(_) | Component::CurDir | Component::ParentDir => path.push(part),
            Component::RootDir | Component::Prefix(_) => {}
        }
    }
    path
}

/// Encodes `frame` as an RGBA PNG at `path`.  The image is written to
/// a temporary file beside the target and renamed over it only once
/// encoding has succeeded, so a failure never leaves a truncated file
/// behind.
pub fn write_png(path: &Path, frame: &RgbaImage) -> Result<(), Error> {
    let start = Instant::now();
    info!("Encoding image to {}...", path.display());

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut staging = NamedTempFile::new_in(dir)?;
    PNGEncoder::new(&mut staging).encode(
        frame,
        frame.width(),
        frame.height(),
        ColorType::RGBA(8),
    )?;
    staging.flush()?;
    staging.persist(path).map_err(|e| e.error)?;

    info!("Done encoding in {:?}", start.elapsed());
    Ok(())
}
