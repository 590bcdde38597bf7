/*!
# recursive-text-splitter

Large language models (LLMs) can be used for many tasks, but often have a limited context size that can be smaller than documents you might want to use. To use documents of larger length, you often have to split your text into chunks to fit within this context size.

This crate splits longer pieces of text into smaller chunks, up to a maximum chunk size, splitting at the most meaningful separator available, and optionally overlapping consecutive chunks so that context isn't lost at the boundaries.

## Get Started

```rust
use recursive_text_splitter::{ChunkConfig, Separators, TextSplitter};

// Maximum number of characters in a chunk, and how many to repeat between chunks
let config = ChunkConfig::new(1000)?
    .with_overlap(200)?
    .with_separators(Separators::new(["\n\n", "\n", " ", ""])?);
let splitter = TextSplitter::new(config);

let chunks = splitter.chunks("your document text").collect::<Vec<_>>();
# Ok::<(), recursive_text_splitter::Error>(())
```

Or in a single call:

```rust
let chunks = recursive_text_splitter::split("one two three four", 9, 3, &[" ", ""])?;
assert_eq!(vec!["one two", "two three", "four"], chunks);
# Ok::<(), recursive_text_splitter::Error>(())
```

## Method

1. Select the first separator in the list that occurs in the text. The empty separator, which is always last, splits the text into characters.
2. Split the text by it, and merge as many neighboring fragments as fit into each chunk.
3. When a chunk is emitted, the trailing fragments that fit within the overlap are kept as the start of the next chunk.
4. A fragment that is too large on its own is split again with the next separators, and its chunks are emitted in place.

Sizes are measured in characters. A single character can never be split further, so with a custom [`ChunkSizer`] a chunk may be larger than the chunk size. This is reported through an [`OversizeReporter`], by default as a `tracing` warning.

## Inspiration

This crate follows the recursive character splitting of [LangChain's TextSplitter](https://python.langchain.com/en/latest/modules/indexes/text_splitters/examples/recursive_text_splitter.html).
*/

#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

use thiserror::Error;

mod chunk_size;
mod report;
mod separators;
mod splitter;
mod trim;

pub use chunk_size::{Characters, ChunkConfig, ChunkConfigError, ChunkSizer};
pub use report::{OversizeReporter, Silent, TracingReporter};
pub use separators::{Separators, SeparatorsError};
pub use splitter::TextSplitter;

/// Any error that can occur while configuring a split.
#[derive(Error, Debug)]
pub enum Error {
    /// The chunk size or overlap are invalid.
    #[error(transparent)]
    ChunkConfig(#[from] ChunkConfigError),
    /// The separator list can't always produce a split.
    #[error(transparent)]
    Separators(#[from] SeparatorsError),
}

/// Split `text` into chunks of at most `chunk_size` characters, sharing up to
/// `chunk_overlap` characters between consecutive chunks.
///
/// `separators` are tried in order, and must end with the empty string, which
/// splits into characters. Chunks are trimmed of surrounding whitespace, and
/// empty chunks are dropped. Oversized chunks are reported as `tracing`
/// warnings.
///
/// ```
/// use recursive_text_splitter::split;
///
/// let chunks = split("a\n\nb\n\nc", 3, 0, &["\n\n", " ", ""]).unwrap();
/// assert_eq!(vec!["a", "b", "c"], chunks);
/// ```
///
/// # Errors
///
/// Will return an error if `chunk_size` is zero, if `chunk_overlap` is not
/// smaller than `chunk_size`, or if `separators` doesn't end with the empty
/// string.
pub fn split<'text>(
    text: &'text str,
    chunk_size: usize,
    chunk_overlap: usize,
    separators: &[&str],
) -> Result<Vec<&'text str>, Error> {
    let config = ChunkConfig::new(chunk_size)?
        .with_overlap(chunk_overlap)?
        .with_separators(Separators::new(separators.iter().copied())?);
    Ok(TextSplitter::new(config).chunks(text).collect())
}
