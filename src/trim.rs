/*!
Joining runs of fragments into chunks, with optional whitespace trimming.
*/

use std::ops::Range;

/// Will remove all leading and trailing whitespace, adjusting the offset by
/// how many bytes were removed from the beginning.
pub(crate) fn trim(offset: usize, chunk: &str) -> (usize, &str) {
    // Figure out how many bytes we lose trimming the beginning
    let diff = chunk.len() - chunk.trim_start().len();
    (offset + diff, chunk.trim())
}

/// Join a contiguous run of fragments into a chunk.
///
/// Fragments from a single split are adjacent in `text`, separated by exactly
/// one separator, so joining them with that separator is the same as taking
/// the slice of `text` covering `span`, from the start of the first fragment
/// to the end of the last.
///
/// Returns `None` if the resulting chunk would be empty.
pub(crate) fn join(text: &str, span: Range<usize>, trim_chunk: bool) -> Option<(usize, &str)> {
    let chunk = text.get(span.clone())?;
    let (offset, chunk) = if trim_chunk {
        trim(span.start, chunk)
    } else {
        (span.start, chunk)
    };
    (!chunk.is_empty()).then_some((offset, chunk))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_all() {
        let chunk = "  hello world  ";
        let (offset, chunk) = trim(0, chunk);
        assert_eq!(offset, 2);
        assert_eq!(chunk, "hello world");
    }

    #[test]
    fn trim_keeps_base_offset() {
        let (offset, chunk) = trim(10, "\n\nhello");
        assert_eq!(offset, 12);
        assert_eq!(chunk, "hello");
    }

    #[test]
    fn join_matches_separator_join() {
        let text = "alpha beta gamma delta";
        // "beta" starts at 6, "gamma" ends at 16
        let joined = ["beta", "gamma"].join(" ");
        assert_eq!(join(text, 6..16, true), Some((6, joined.as_str())));
    }

    #[test]
    fn join_trims_whitespace() {
        let text = "a\n\n  b  \n\nc";
        assert_eq!(join(text, 3..8, true), Some((5, "b")));
    }

    #[test]
    fn join_without_trim() {
        let text = "a\n\n  b  \n\nc";
        assert_eq!(join(text, 3..8, false), Some((3, "  b  ")));
    }

    #[test]
    fn join_drops_whitespace_only() {
        assert_eq!(join(" \n \t ", 0..5, true), None);
    }

    #[test]
    fn join_keeps_whitespace_only_without_trim() {
        assert_eq!(join("a   b", 1..4, false), Some((1, "   ")));
    }

    #[test]
    fn join_drops_empty() {
        assert_eq!(join("abc", 1..1, false), None);
    }
}
