//! Row-completion reporting.

use std::io::{self, Write};

/// Observes the completion of rows.  Exactly one observer consumes the
/// signals of a render, on a thread of its own.
pub trait Progress: Send {
    /// Called once per finished row, with the running count.
    fn advance(&mut self, completed: usize, total: usize);

    /// Called after the last signal, once no more rows can finish.
    fn finish(&mut self) {}
}

/// The integer percentage of `completed` rows out of `total`.
pub fn percent(completed: usize, total: usize) -> usize {
    if total == 0 {
        return 100;
    }
    100 * completed / total
}

/// Prints `row/total (percent%)` to stdout, overwriting itself in place.
#[derive(Debug, Default)]
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn advance(&mut self, completed: usize, total: usize) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        // A progress line that can't be printed isn't worth failing over.
        let _ = write!(
            out,
            "\r{}/{} ({}%)",
            completed,
            total,
            percent(completed, total)
        );
        let _ = out.flush();
    }

    fn finish(&mut self) {
        println!();
    }
}
