/*!
Reporting of chunks that could not be kept within the chunk size.

Oversized chunks are never an error. They happen when a fragment can't be
split any further, for example a single character when splitting with a sizer
that counts more than one unit per character. Reports are purely
informational and never change the chunks that are generated.
*/

/// Receives a notification whenever a chunk is generated whose size exceeds
/// the configured chunk size.
pub trait OversizeReporter {
    /// Called with the size of the oversized chunk and the configured chunk size.
    fn oversized(&self, size: usize, chunk_size: usize);
}

/// Default reporter, which emits a `tracing` warning event.
///
/// Without a subscriber installed, this does nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingReporter;

impl OversizeReporter for TracingReporter {
    fn oversized(&self, size: usize, chunk_size: usize) {
        tracing::warn!(
            size,
            chunk_size,
            "Created a chunk of size {size}, which is longer than the specified {chunk_size}"
        );
    }
}

/// Ignores all oversize reports.
#[derive(Copy, Clone, Debug, Default)]
pub struct Silent;

impl OversizeReporter for Silent {
    fn oversized(&self, _size: usize, _chunk_size: usize) {}
}

/// Any closure can be used to collect reports.
///
/// ```
/// use std::sync::Mutex;
///
/// use recursive_text_splitter::{ChunkConfig, TextSplitter};
///
/// let reports = Mutex::new(Vec::new());
/// let splitter = TextSplitter::new(ChunkConfig::new(1).unwrap())
///     .with_reporter(|size: usize, chunk_size: usize| {
///         reports.lock().unwrap().push((size, chunk_size));
///     });
/// splitter.chunks("abc").for_each(drop);
/// assert!(reports.lock().unwrap().is_empty());
/// ```
impl<F> OversizeReporter for F
where
    F: Fn(usize, usize),
{
    fn oversized(&self, size: usize, chunk_size: usize) {
        self(size, chunk_size);
    }
}
