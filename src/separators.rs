/*!
Ordered separator lists, and the selection and fragment splitting driven by them.
*/

use std::str::CharIndices;

use either::Either;
use itertools::Itertools;
use thiserror::Error;

/// Indicates there was an error with the separator list.
/// The `Display` implementation will provide a human-readable error message to
/// help debug the issue that caused the error.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct SeparatorsError(#[from] SeparatorsErrorRepr);

/// Private error and free to change across minor version of the crate.
#[derive(Error, Debug)]
enum SeparatorsErrorRepr {
    #[error("At least one separator is required")]
    Empty,
    #[error("The last separator must be the empty string, so that text can always be split into characters")]
    MissingCharacterSeparator,
    #[error("The empty string separator must only appear at the end of the list, found at position {0}")]
    EarlyCharacterSeparator(usize),
}

/// An ordered list of separators to split text by, from most to least
/// preferred.
///
/// The empty string is a special separator meaning "split into individual
/// characters". It must be the last separator in the list, which guarantees
/// that a separator can always be selected for any text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Separators(Vec<String>);

impl Separators {
    /// Create a list of separators, in order of preference.
    ///
    /// ```
    /// use recursive_text_splitter::Separators;
    ///
    /// let separators = Separators::new(["\n\n", " ", ""]).unwrap();
    /// assert!(Separators::new(["\n\n", " "]).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Will return an error if the list is empty, if it does not end with the
    /// empty string separator, or if the empty string appears anywhere else.
    pub fn new<I, S>(separators: I) -> Result<Self, SeparatorsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let separators = separators.into_iter().map(Into::into).collect::<Vec<_>>();
        if separators.is_empty() {
            return Err(SeparatorsErrorRepr::Empty.into());
        }

        let first_empty = separators.iter().position(String::is_empty);
        match first_empty {
            None => Err(SeparatorsErrorRepr::MissingCharacterSeparator.into()),
            Some(i) if i + 1 < separators.len() => {
                Err(SeparatorsErrorRepr::EarlyCharacterSeparator(i).into())
            }
            Some(_) => Ok(Self(separators)),
        }
    }

    /// Number of separators in the list, including the character separator.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A validated list always contains at least the character separator.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the separators in order of preference.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    /// Select the first separator, starting at position `from`, that is
    /// either the character separator or occurs in `text`.
    ///
    /// Returns the position of the separator in the list as well, so that
    /// finer splits can resume from the next position. Only returns `None` if
    /// `from` is past the end of the list.
    ///
    /// ```
    /// use recursive_text_splitter::Separators;
    ///
    /// let separators = Separators::new(["\n\n", " ", ""]).unwrap();
    /// assert_eq!(separators.select("a b", 0), Some((1, " ")));
    /// assert_eq!(separators.select("ab", 0), Some((2, "")));
    /// assert_eq!(separators.select("ab", 3), None);
    /// ```
    #[must_use]
    pub fn select(&self, text: &str, from: usize) -> Option<(usize, &str)> {
        self.iter()
            .skip(from)
            .find_position(|separator| separator.is_empty() || text.contains(separator))
            .map(|(i, separator)| (from + i, separator))
    }
}

impl Default for Separators {
    /// Paragraphs, then lines, then words, then characters.
    fn default() -> Self {
        Self(
            ["\n\n", "\n", " ", ""]
                .into_iter()
                .map(String::from)
                .collect(),
        )
    }
}

/// Split `text`, which starts at byte `offset` of the full document, by
/// `separator`. Fragments are returned with their byte offset in the full
/// document.
///
/// Joining the fragments with the separator reconstructs `text` exactly.
pub(crate) fn fragments<'text, 'sep>(
    text: &'text str,
    offset: usize,
    separator: &'sep str,
) -> Either<CharFragments<'text>, SeparatedFragments<'text, 'sep>> {
    if separator.is_empty() {
        Either::Left(CharFragments {
            offset,
            text,
            chars: text.char_indices(),
        })
    } else {
        Either::Right(SeparatedFragments {
            cursor: Some(0),
            offset,
            separator,
            text,
        })
    }
}

/// Each char of the text as its own fragment.
#[derive(Debug)]
pub(crate) struct CharFragments<'text> {
    chars: CharIndices<'text>,
    offset: usize,
    text: &'text str,
}

impl<'text> Iterator for CharFragments<'text> {
    type Item = (usize, &'text str);

    fn next(&mut self) -> Option<Self::Item> {
        let (i, c) = self.chars.next()?;
        let fragment = self.text.get(i..i + c.len_utf8())?;
        Some((self.offset + i, fragment))
    }
}

/// Text between every literal, non-overlapping occurrence of a separator.
/// Like [`str::split`], but keeping track of byte offsets.
#[derive(Debug)]
pub(crate) struct SeparatedFragments<'text, 'sep> {
    /// Start of the next fragment. `None` once the last fragment was returned.
    cursor: Option<usize>,
    offset: usize,
    separator: &'sep str,
    text: &'text str,
}

impl<'text, 'sep> Iterator for SeparatedFragments<'text, 'sep> {
    type Item = (usize, &'text str);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.cursor?;
        let rest = self.text.get(start..)?;
        let end = match rest.find(self.separator) {
            Some(i) => {
                self.cursor = Some(start + i + self.separator.len());
                start + i
            }
            None => {
                self.cursor = None;
                self.text.len()
            }
        };
        Some((self.offset + start, self.text.get(start..end)?))
    }
}
