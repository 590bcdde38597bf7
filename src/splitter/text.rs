/*!
# [`TextSplitter`]
Recursive splitting of text documents by a list of separators.
*/

use crate::{
    report::{OversizeReporter, TracingReporter},
    splitter::TextChunks,
    ChunkConfig, ChunkSizer,
};

/// Plain-text splitter. Splits text by the most preferred separator that
/// occurs in it, recursively splitting sections that are too large by the
/// next separators, and merges neighboring sections into chunks that fit
/// within the chunk size, overlapping consecutive chunks if configured.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TextSplitter<Sizer, Reporter = TracingReporter>
where
    Sizer: ChunkSizer,
    Reporter: OversizeReporter,
{
    /// Method of determining chunk sizes.
    chunk_config: ChunkConfig<Sizer>,
    /// Receives a report for every chunk larger than the chunk size.
    reporter: Reporter,
}

impl<Sizer> TextSplitter<Sizer>
where
    Sizer: ChunkSizer,
{
    /// Creates a new [`TextSplitter`].
    ///
    /// ```
    /// use recursive_text_splitter::{ChunkConfig, TextSplitter};
    ///
    /// // By default, the chunk sizer is based on characters.
    /// let splitter = TextSplitter::new(ChunkConfig::new(512).unwrap());
    /// ```
    #[must_use]
    pub fn new(chunk_config: ChunkConfig<Sizer>) -> Self {
        Self {
            chunk_config,
            reporter: TracingReporter,
        }
    }
}

impl<Sizer, Reporter> TextSplitter<Sizer, Reporter>
where
    Sizer: ChunkSizer,
    Reporter: OversizeReporter,
{
    /// Set where chunks that are larger than the chunk size are reported.
    /// By default, a `tracing` warning is emitted.
    ///
    /// ```
    /// use recursive_text_splitter::{ChunkConfig, Silent, TextSplitter};
    ///
    /// let splitter = TextSplitter::new(ChunkConfig::new(512).unwrap()).with_reporter(Silent);
    /// ```
    #[must_use]
    pub fn with_reporter<R: OversizeReporter>(self, reporter: R) -> TextSplitter<Sizer, R> {
        TextSplitter {
            chunk_config: self.chunk_config,
            reporter,
        }
    }

    /// Retrieve the chunk configuration of this splitter.
    #[must_use]
    pub fn chunk_config(&self) -> &ChunkConfig<Sizer> {
        &self.chunk_config
    }

    /// Generate a list of chunks from a given text. Each chunk will be up to
    /// the chunk size, unless a single character is already larger.
    ///
    /// ## Method
    ///
    /// 1. Select the first separator that occurs in the text, or the empty
    ///    separator which splits it into characters.
    /// 2. Split the text by it into fragments.
    /// 3. Merge neighboring fragments that are smaller than the chunk size into
    ///    chunks. When the next fragment doesn't fit, the chunk is emitted and
    ///    the trailing fragments that fit within the overlap are kept to start
    ///    the next chunk.
    /// 4. Fragments that are too large on their own are split again, starting
    ///    from step 1 with the next separators.
    ///
    /// ```
    /// use recursive_text_splitter::{ChunkConfig, TextSplitter};
    ///
    /// let splitter = TextSplitter::new(ChunkConfig::new(10).unwrap());
    /// let text = "Some text\n\nfrom a\ndocument";
    /// let chunks = splitter.chunks(text).collect::<Vec<_>>();
    ///
    /// assert_eq!(vec!["Some text", "from a", "document"], chunks);
    /// ```
    pub fn chunks<'splitter, 'text: 'splitter>(
        &'splitter self,
        text: &'text str,
    ) -> impl Iterator<Item = &'text str> + 'splitter
    where
        Sizer: 'splitter,
        Reporter: 'splitter,
    {
        self.chunk_indices(text).map(|(_, t)| t)
    }

    /// Returns an iterator over chunks of the text and their byte offsets.
    /// Each chunk will be up to the chunk size.
    ///
    /// See [`TextSplitter::chunks`] for more information.
    ///
    /// ```
    /// use recursive_text_splitter::{ChunkConfig, TextSplitter};
    ///
    /// let splitter = TextSplitter::new(ChunkConfig::new(10).unwrap());
    /// let text = "Some text\n\nfrom a\ndocument";
    /// let chunks = splitter.chunk_indices(text).collect::<Vec<_>>();
    ///
    /// assert_eq!(vec![(0, "Some text"), (11, "from a"), (18, "document")], chunks);
    /// ```
    pub fn chunk_indices<'splitter, 'text: 'splitter>(
        &'splitter self,
        text: &'text str,
    ) -> impl Iterator<Item = (usize, &'text str)> + 'splitter
    where
        Sizer: 'splitter,
        Reporter: 'splitter,
    {
        TextChunks::new(&self.chunk_config, &self.reporter, text)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, cmp::min};

    use fake::{Fake, Faker};

    use crate::{Characters, Separators, Silent};

    use super::*;

    fn splitter(
        chunk_size: usize,
        overlap: usize,
        separators: &[&str],
    ) -> TextSplitter<Characters, Silent> {
        TextSplitter::new(
            ChunkConfig::new(chunk_size)
                .unwrap()
                .with_overlap(overlap)
                .unwrap()
                .with_separators(Separators::new(separators.iter().copied()).unwrap()),
        )
        .with_reporter(Silent)
    }

    #[test]
    fn returns_one_chunk_if_text_is_shorter_than_max_chunk_size() {
        let text = Faker.fake::<String>();
        let chunks = TextSplitter::new(
            ChunkConfig::new(text.chars().count() + 1)
                .unwrap()
                .with_trim(false),
        )
        .chunks(&text)
        .collect::<Vec<_>>();

        if text.is_empty() {
            assert!(chunks.is_empty());
        } else {
            assert_eq!(vec![&text], chunks);
        }
    }

    #[test]
    fn returns_two_chunks_if_text_is_longer_than_max_chunk_size() {
        let text1 = "a".repeat((3..20).fake::<usize>());
        let text2 = "b".repeat((3..20).fake::<usize>());
        let text = format!("{text1} {text2}");
        let max_chunk_size = text1.len().max(text2.len()) + 1;
        let chunks = splitter(max_chunk_size, 0, &[" ", ""])
            .chunks(&text)
            .collect::<Vec<_>>();

        assert!(chunks.iter().all(|c| c.chars().count() <= max_chunk_size));

        // Check that beginning of first chunk and text 1 matches
        let len = min(text1.len(), chunks[0].len());
        assert_eq!(text1[..len], chunks[0][..len]);
        // Check that end of second chunk and text 2 matches
        let len = min(text2.len(), chunks[1].len());
        assert_eq!(
            text2[(text2.len() - len)..],
            chunks[1][chunks[1].len() - len..]
        );

        assert_eq!(chunks.join(" "), text);
    }

    #[test]
    fn empty_string() {
        let chunks = splitter(100, 0, &["\n\n", " ", ""])
            .chunks("")
            .collect::<Vec<_>>();

        assert!(chunks.is_empty());
    }

    #[test]
    fn whitespace_only_string() {
        let chunks = splitter(100, 0, &["\n\n", " ", ""])
            .chunks(" \n\n \t ")
            .collect::<Vec<_>>();

        assert!(chunks.is_empty());
    }

    #[test]
    fn can_handle_unicode_characters() {
        let text = "éé"; // Char that is more than one byte
        let chunks = splitter(1, 0, &[""]).chunks(text).collect::<Vec<_>>();
        assert_eq!(vec!["é", "é"], chunks);
    }

    #[test]
    fn splits_paragraphs_before_words() {
        let text = "a\n\nb\n\nc";
        let chunks = splitter(3, 0, &["\n\n", " ", ""])
            .chunks(text)
            .collect::<Vec<_>>();
        assert_eq!(vec!["a", "b", "c"], chunks);
    }

    #[test]
    fn merges_paragraphs_that_fit() {
        let text = "a\n\nb\n\nc";
        let chunks = splitter(5, 0, &["\n\n", " ", ""])
            .chunks(text)
            .collect::<Vec<_>>();
        assert_eq!(vec!["a\n\nb", "c"], chunks);
    }

    #[test]
    fn splits_into_characters() {
        let chunks = splitter(4, 0, &[""])
            .chunks("aaaaaaaaaa")
            .collect::<Vec<_>>();
        assert_eq!(vec!["aaaa", "aaaa", "aa"], chunks);
    }

    #[test]
    fn overlapping_words() {
        let chunks = splitter(9, 3, &[" ", ""])
            .chunks("one two three four")
            .collect::<Vec<_>>();
        assert_eq!(vec!["one two", "two three", "four"], chunks);
    }

    #[test]
    fn long_word_falls_back_to_characters() {
        let chunks = splitter(4, 0, &[" ", ""])
            .chunks("to abcdefghij be")
            .collect::<Vec<_>>();
        assert_eq!(vec!["to", "abcd", "efgh", "ij", "be"], chunks);
    }

    #[test]
    fn trim_false_keeps_whitespace() {
        let splitter = TextSplitter::new(
            ChunkConfig::new(5)
                .unwrap()
                .with_trim(false)
                .with_separators(Separators::new(["\n", ""]).unwrap()),
        );
        let chunks = splitter.chunks(" a \n b ").collect::<Vec<_>>();
        assert_eq!(vec![" a ", " b "], chunks);
    }

    #[test]
    fn trim_word_indices() {
        let text = "Some text from a document";
        let chunks = splitter(10, 0, &[" ", ""])
            .chunk_indices(text)
            .collect::<Vec<_>>();
        assert_eq!(
            vec![(0, "Some text"), (10, "from a"), (17, "document")],
            chunks
        );
    }

    #[test]
    fn default_separators_prefer_lines_over_words() {
        let text = "Some text\nfrom a document";
        let chunks = TextSplitter::new(ChunkConfig::new(16).unwrap())
            .chunks(text)
            .collect::<Vec<_>>();
        assert_eq!(vec!["Some text", "from a document"], chunks);
    }

    #[test]
    fn reporter_is_not_called_for_chunks_that_fit() {
        let reports = RefCell::new(0);
        let splitter = TextSplitter::new(ChunkConfig::new(3).unwrap())
            .with_reporter(|_: usize, _: usize| *reports.borrow_mut() += 1);
        let count = splitter.chunks("abc def\n\nghij").count();

        assert_eq!(count, 4);
        assert_eq!(reports.into_inner(), 0);
    }

    #[test]
    fn splitter_is_reusable() {
        let splitter = splitter(9, 3, &[" ", ""]);
        let first = splitter.chunks("one two three four").collect::<Vec<_>>();
        let second = splitter.chunks("one two three four").collect::<Vec<_>>();
        assert_eq!(first, second);
    }
}
