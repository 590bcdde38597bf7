use crate::ChunkSizer;

/// Used for splitting a piece of text into chunks based on the number of
/// characters in each chunk.
///
/// ```
/// use recursive_text_splitter::{Characters, ChunkConfig};
///
/// let config = ChunkConfig::new(100).unwrap().with_sizer(Characters);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Characters;

impl ChunkSizer for Characters {
    /// Determine the size of a given chunk to use for validation.
    fn size(&self, chunk: &str) -> usize {
        chunk.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(Characters.size("e√©"), 3);
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(Characters.size(""), 0);
    }
}
