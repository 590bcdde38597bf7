use thiserror::Error;

mod characters;

use crate::separators::Separators;
pub use characters::Characters;

/// Determines the size of a given chunk.
pub trait ChunkSizer {
    /// Determine the size of a given chunk to use for validation
    fn size(&self, chunk: &str) -> usize;
}

/// Indicates there was an error with the chunk configuration.
/// The `Display` implementation will provide a human-readable error message to
/// help debug the issue that caused the error.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ChunkConfigError(#[from] ChunkConfigErrorRepr);

/// Private error and free to change across minor version of the crate.
#[derive(Error, Debug)]
enum ChunkConfigErrorRepr {
    #[error("The chunk size must be greater than zero")]
    ZeroChunkSize,
    #[error("The overlap is larger than or equal to the chunk size")]
    OverlapLargerThanChunkSize,
}

/// Configuration for how chunks should be created
#[derive(Debug)]
pub struct ChunkConfig<Sizer>
where
    Sizer: ChunkSizer,
{
    /// Maximum desired size of a chunk
    chunk_size: usize,
    /// The amount of overlap to retain between chunks. Defaults to 0.
    overlap: usize,
    /// Separators to split by, in order of preference
    separators: Separators,
    /// The chunk sizer to use for determining the size of each chunk
    sizer: Sizer,
    /// Whether whitespace will be trimmed from the beginning and end of each chunk
    trim: bool,
}

impl ChunkConfig<Characters> {
    /// Create a basic configuration for chunking with only the required value,
    /// the maximum chunk size.
    ///
    /// By default, chunk sizes will be calculated based on the number of
    /// characters in each chunk, text is split with [`Separators::default`],
    /// and there is no overlap between chunks.
    ///
    /// By default, chunks will be trimmed. If you want to preserve whitespace,
    /// call [`Self::with_trim`] and set it to `false`.
    ///
    /// ```
    /// use recursive_text_splitter::ChunkConfig;
    ///
    /// let config = ChunkConfig::new(512).unwrap();
    /// assert_eq!(config.chunk_size(), 512);
    /// ```
    ///
    /// # Errors
    ///
    /// Will return an error if `chunk_size` is zero.
    pub fn new(chunk_size: usize) -> Result<Self, ChunkConfigError> {
        if chunk_size == 0 {
            return Err(ChunkConfigError(ChunkConfigErrorRepr::ZeroChunkSize));
        }
        Ok(Self {
            chunk_size,
            overlap: 0,
            separators: Separators::default(),
            sizer: Characters,
            trim: true,
        })
    }
}

impl<Sizer> ChunkConfig<Sizer>
where
    Sizer: ChunkSizer,
{
    /// Maximum desired size of a chunk.
    #[must_use]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Retrieve the amount of overlap between chunks.
    #[must_use]
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Set the amount of overlap to retain between consecutive chunks.
    ///
    /// Overlap is built out of whole fragments, so the actual shared content
    /// will be at most this size.
    ///
    /// # Errors
    ///
    /// Will return an error if the overlap is larger than or equal to the chunk size.
    pub fn with_overlap(mut self, overlap: usize) -> Result<Self, ChunkConfigError> {
        if overlap >= self.chunk_size {
            Err(ChunkConfigError(
                ChunkConfigErrorRepr::OverlapLargerThanChunkSize,
            ))
        } else {
            self.overlap = overlap;
            Ok(self)
        }
    }

    /// Retrieve the separators used for splitting.
    #[must_use]
    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    /// Set the separators to split by, in order of preference.
    ///
    /// ```
    /// use recursive_text_splitter::{ChunkConfig, Separators};
    ///
    /// let separators = Separators::new(["\n", " ", ""]).unwrap();
    /// let config = ChunkConfig::new(512).unwrap().with_separators(separators);
    /// ```
    #[must_use]
    pub fn with_separators(mut self, separators: Separators) -> Self {
        self.separators = separators;
        self
    }

    /// Retrieve a reference to the chunk sizer for this configuration.
    #[must_use]
    pub fn sizer(&self) -> &Sizer {
        &self.sizer
    }

    /// Set a custom chunk sizer to use for determining the size of each chunk
    /// and separator.
    ///
    /// ```
    /// use recursive_text_splitter::{Characters, ChunkConfig};
    ///
    /// let config = ChunkConfig::new(512).unwrap().with_sizer(Characters);
    /// ```
    #[must_use]
    pub fn with_sizer<S: ChunkSizer>(self, sizer: S) -> ChunkConfig<S> {
        ChunkConfig {
            chunk_size: self.chunk_size,
            overlap: self.overlap,
            separators: self.separators,
            sizer,
            trim: self.trim,
        }
    }

    /// Whether chunks should have whitespace trimmed from the beginning and end or not.
    #[must_use]
    pub fn trim(&self) -> bool {
        self.trim
    }

    /// Specify whether chunks should have whitespace trimmed from the
    /// beginning and end or not.
    ///
    /// If `true` (default), all chunks will have whitespace removed from
    /// beginning and end, and chunks that are only whitespace are dropped.
    /// If `false`, chunks are returned exactly as they appear in the text.
    ///
    /// ```
    /// use recursive_text_splitter::ChunkConfig;
    ///
    /// let config = ChunkConfig::new(512).unwrap().with_trim(false);
    /// ```
    #[must_use]
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}
