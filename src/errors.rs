//! The failures a render can end in.  None of them is recoverable;
//! the binary reports them and exits.

use failure::Fail;

/// Everything that can stop a render that isn't an I/O or encoding
/// error.  Those arrive as `failure::Error` straight from the
/// encoder.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The render configuration describes an image we can't produce.
    #[fail(display = "Invalid render configuration: {}", _0)]
    InvalidConfig(String),

    /// `$HOME` could not be read, so there is nowhere to put the image.
    #[fail(display = "Could not determine the home directory")]
    NoHomeDirectory,

    /// A row worker panicked, leaving at least one row unwritten.
    #[fail(display = "A row worker panicked during rendering")]
    WorkerPanicked,
}
