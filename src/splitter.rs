use either::Either;

use self::merge::Merger;
use crate::{
    report::OversizeReporter,
    separators::{fragments, CharFragments, SeparatedFragments},
    trim::join,
    ChunkConfig, ChunkSizer,
};

mod merge;
mod text;

#[allow(clippy::module_name_repetitions)]
pub use text::TextSplitter;

/// One split of a piece of text by a single separator, whose fragments are
/// still being merged into chunks.
#[derive(Debug)]
struct Level<'text, 'splitter> {
    /// Remaining fragments of this split
    fragments: Either<CharFragments<'text>, SeparatedFragments<'text, 'splitter>>,
    /// Merges the fragments of this split into chunks
    merger: Merger<'text>,
    /// Position of this level's separator in the separator list
    position: usize,
}

/// Returns chunks of text with their byte offsets as an iterator.
///
/// Rather than recursing into fragments that are too large, each oversized
/// fragment pushes a new [`Level`] onto a stack, which is worked through
/// before continuing with the fragments of the level below it.
#[derive(Debug)]
struct TextChunks<'text, 'splitter, Sizer, Reporter>
where
    Sizer: ChunkSizer,
    Reporter: OversizeReporter,
{
    /// Chunk configuration for this iterator
    chunk_config: &'splitter ChunkConfig<Sizer>,
    /// A chunk that is ready but has to wait for one emitted before it
    pending: Option<(usize, &'text str)>,
    /// Where oversized chunks are reported
    reporter: &'splitter Reporter,
    /// Splits still being worked on, the innermost on top
    stack: Vec<Level<'text, 'splitter>>,
    /// Original text to iterate over and generate chunks from
    text: &'text str,
}

impl<'text, 'splitter, Sizer, Reporter> TextChunks<'text, 'splitter, Sizer, Reporter>
where
    Sizer: ChunkSizer,
    Reporter: OversizeReporter,
{
    /// Generate new [`TextChunks`] iterator for a given text.
    /// Starts with the whole text split by the first matching separator.
    fn new(
        chunk_config: &'splitter ChunkConfig<Sizer>,
        reporter: &'splitter Reporter,
        text: &'text str,
    ) -> Self {
        let mut chunks = Self {
            chunk_config,
            pending: None,
            reporter,
            stack: Vec::new(),
            text,
        };
        // Validated separators always end with the character separator,
        // so a level is always found for the full text.
        if let Some(level) = chunks.level(0, text, 0) {
            chunks.stack.push(level);
        }
        chunks
    }

    /// Split a section of the text, starting at byte `offset`, by the first
    /// separator at or after `position` that matches it.
    /// Returns `None` if there are no more separators left to try.
    fn level(
        &self,
        offset: usize,
        section: &'text str,
        position: usize,
    ) -> Option<Level<'text, 'splitter>> {
        let (position, separator) = self.chunk_config.separators().select(section, position)?;
        Some(Level {
            fragments: fragments(section, offset, separator),
            merger: Merger::new(
                self.text,
                self.chunk_config.chunk_size(),
                self.chunk_config.overlap(),
                self.chunk_config.sizer().size(separator),
                self.chunk_config.trim(),
            ),
            position,
        })
    }

    /// Handle a fragment that is too large to be merged. Either it gets split
    /// further by the next matching separator, or, if no separator is left,
    /// it becomes a chunk on its own.
    fn split_oversized(
        &mut self,
        position: usize,
        offset: usize,
        fragment: &'text str,
        size: usize,
    ) -> Option<(usize, &'text str)> {
        // The fragment can't contain the current separator, or any before it,
        // so the search can continue with the next one.
        if let Some(level) = self.level(offset, fragment, position + 1) {
            self.stack.push(level);
            return None;
        }

        let chunk_size = self.chunk_config.chunk_size();
        if size > chunk_size {
            self.reporter.oversized(size, chunk_size);
        }
        join(
            self.text,
            offset..offset + fragment.len(),
            self.chunk_config.trim(),
        )
    }
}

impl<'text, 'splitter, Sizer, Reporter> Iterator for TextChunks<'text, 'splitter, Sizer, Reporter>
where
    Sizer: ChunkSizer,
    Reporter: OversizeReporter,
{
    type Item = (usize, &'text str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(chunk) = self.pending.take() {
                return Some(chunk);
            }

            let level = self.stack.last_mut()?;
            match level.fragments.next() {
                Some((offset, fragment)) => {
                    let size = self.chunk_config.sizer().size(fragment);
                    if size < self.chunk_config.chunk_size() {
                        if let Some(chunk) = level.merger.push(offset, fragment, size, self.reporter)
                        {
                            return Some(chunk);
                        }
                    } else {
                        // Everything merged so far comes before the oversized fragment
                        let flushed = level.merger.flush();
                        let position = level.position;
                        let split = self.split_oversized(position, offset, fragment, size);
                        match (flushed, split) {
                            (Some(flushed), split) => {
                                self.pending = split;
                                return Some(flushed);
                            }
                            (None, Some(split)) => return Some(split),
                            (None, None) => {}
                        }
                    }
                }
                None => {
                    let chunk = self.stack.pop().and_then(|mut level| level.merger.flush());
                    if chunk.is_some() {
                        return chunk;
                    }
                }
            }
        }
    }
}
