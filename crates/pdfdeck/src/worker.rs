//! Background conversion for interactive front ends.
//!
//! A conversion runs to completion on one worker thread and reports a
//! single terminal outcome over a channel: no progress percentage and
//! no cancellation. The front end keeps its event loop responsive by
//! polling or blocking on the receiver; no mutable state is shared with
//! the worker.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use crate::convert::{ConversionReport, ConvertOptions, Converter};
use crate::source::SourceDocument;

/// Terminal outcome of a background conversion.
#[derive(Debug)]
pub enum WorkerOutcome {
    /// The deck was written to `output`.
    Completed {
        report: ConversionReport,
        output: PathBuf,
    },
    /// A document-level failure aborted the conversion.
    Failed { message: String },
}

/// Run a conversion on a background thread.
///
/// Returns immediately with a receiver that yields exactly one
/// [`WorkerOutcome`] and then disconnects.
pub fn spawn_conversion<S>(
    source: S,
    output: PathBuf,
    options: ConvertOptions,
) -> Receiver<WorkerOutcome>
where
    S: SourceDocument + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let converter = Converter::new(options);
        let outcome = match converter.convert(&source, &output) {
            Ok(report) => WorkerOutcome::Completed { report, output },
            Err(err) => WorkerOutcome::Failed {
                message: err.to_string(),
            },
        };
        // The front end may have gone away; a closed channel is fine
        let _ = tx.send(outcome);
    });
    rx
}
