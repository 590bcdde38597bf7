use std::{collections::VecDeque, ops::Range};

use crate::{report::OversizeReporter, trim::join};

/// A fragment waiting in the window to be emitted as part of a chunk.
#[derive(Debug)]
struct Buffered {
    /// Byte range of the fragment within the full text
    range: Range<usize>,
    /// Size of the fragment, in units of the sizer
    size: usize,
}

/// Greedily packs the fragments of a single split into chunks up to the chunk
/// size, keeping up to `overlap` worth of trailing fragments in the window
/// when a chunk is emitted so they start the next chunk as well.
#[derive(Debug)]
pub(super) struct Merger<'text> {
    chunk_size: usize,
    overlap: usize,
    /// Size of the separator the fragments were split by
    separator_size: usize,
    /// Full text the fragment offsets point into
    text: &'text str,
    /// Size of the window's fragments plus the separators between them
    total: usize,
    trim: bool,
    window: VecDeque<Buffered>,
}

impl<'text> Merger<'text> {
    pub(super) fn new(
        text: &'text str,
        chunk_size: usize,
        overlap: usize,
        separator_size: usize,
        trim: bool,
    ) -> Self {
        Self {
            chunk_size,
            overlap,
            separator_size,
            text,
            total: 0,
            trim,
            window: VecDeque::new(),
        }
    }

    /// Separator size that would be added by pushing another fragment.
    fn extra(&self) -> usize {
        if self.window.is_empty() {
            0
        } else {
            self.separator_size
        }
    }

    /// Add the next fragment to the window. If it doesn't fit, the current
    /// window is emitted as a chunk first and then shrunk down to the overlap.
    pub(super) fn push(
        &mut self,
        offset: usize,
        fragment: &str,
        size: usize,
        reporter: &impl OversizeReporter,
    ) -> Option<(usize, &'text str)> {
        let mut chunk = None;

        if self.total + size + self.extra() > self.chunk_size {
            if self.total > self.chunk_size {
                reporter.oversized(self.total, self.chunk_size);
            }

            chunk = self.join();

            // Keep popping while the window is larger than the overlap, or
            // while the next fragment still wouldn't fit
            while self.total > self.overlap
                || (self.total + size + self.extra() > self.chunk_size && self.total > 0)
            {
                let Some(front) = self.window.pop_front() else {
                    break;
                };
                self.total -= front.size + self.extra();
            }
        }

        self.window.push_back(Buffered {
            range: offset..offset + fragment.len(),
            size,
        });
        self.total += size;
        if self.window.len() > 1 {
            self.total += self.separator_size;
        }

        chunk
    }

    /// Emit whatever is left in the window and reset it.
    pub(super) fn flush(&mut self) -> Option<(usize, &'text str)> {
        let chunk = self.join();
        self.window.clear();
        self.total = 0;
        chunk
    }

    /// Join the fragments in the window into a chunk.
    fn join(&self) -> Option<(usize, &'text str)> {
        let start = self.window.front()?.range.start;
        let end = self.window.back()?.range.end;
        join(self.text, start..end, self.trim)
    }
}
