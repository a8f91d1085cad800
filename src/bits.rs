//! Encoded module patterns.
//!
//! A [BitString] is what a symbology encoder hands over for drawing: one
//! character per module, `'1'` for a bar and `'0'` for a space. The pattern
//! is validated once on construction and immutable afterwards.
use core::fmt;
use core::iter::FusedIterator;
use core::str::FromStr;

use crate::error::GeometryError;

/// Validated, non-empty string over `{'0', '1'}`.
///
/// ```rust
/// # use barpath::bits::BitString;
/// let bits: BitString = "0110111".parse().unwrap();
/// let runs: Vec<_> = bits.runs().map(|r| (r.start, r.len)).collect();
/// assert_eq!(runs, [(1, 2), (4, 3)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct BitString(String);

impl BitString {
    /// Validate `bits` and wrap it.
    pub fn new(bits: impl Into<String>) -> Result<Self, GeometryError> {
        let bits = bits.into();
        validate(&bits)?;
        Ok(Self(bits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of modules.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`, a bit string has at least one module.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the modules, `true` is a bar.
    pub fn modules(&self) -> impl DoubleEndedIterator<Item = bool> + ExactSizeIterator + '_ {
        self.0.bytes().map(|b| b == b'1')
    }

    /// Iterate over the maximal runs of bars, from left to right.
    pub fn runs(&self) -> Runs<'_> {
        Runs {
            bits: self.0.as_bytes(),
            pos: 0,
        }
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

fn validate(bits: &str) -> Result<(), GeometryError> {
    if bits.is_empty() {
        return Err(GeometryError::Empty);
    }
    match bits.chars().enumerate().find(|(_, c)| !matches!(c, '0' | '1')) {
        Some((index, character)) => Err(GeometryError::InvalidCharacter { index, character }),
        None => Ok(()),
    }
}

impl FromStr for BitString {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for BitString {
    type Error = GeometryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for BitString {
    type Error = GeometryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BitString> for String {
    fn from(bits: BitString) -> String {
        bits.0
    }
}

impl AsRef<str> for BitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A maximal run of bars, in module indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    /// Index of the first bar module.
    pub start: usize,
    /// Number of modules, at least one.
    pub len: usize,
}

impl Run {
    /// Index one past the last bar module.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Iterator returned by [BitString::runs].
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    bits: &'a [u8],
    pos: usize,
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let rest = self.bits.get(self.pos..)?;
        let start = self.pos + rest.iter().position(|&b| b == b'1')?;
        let len = self.bits[start..]
            .iter()
            .take_while(|&&b| b == b'1')
            .count();
        self.pos = start + len;
        Some(Run { start, len })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // runs are separated by at least one space
        let left = self.bits.len().saturating_sub(self.pos);
        (0, Some((left + 1) / 2))
    }
}

impl FusedIterator for Runs<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn runs(bits: &str) -> Vec<(usize, usize)> {
        BitString::new(bits)
            .unwrap()
            .runs()
            .map(|r| (r.start, r.len))
            .collect()
    }

    #[test]
    fn test_runs() {
        assert_eq!(runs("1101"), vec![(0, 2), (3, 1)]);
        assert_eq!(runs("0000"), Vec::<(usize, usize)>::new());
        assert_eq!(runs("1111"), vec![(0, 4)]);
        assert_eq!(runs("0011"), vec![(2, 2)]);
        assert_eq!(runs("1"), vec![(0, 1)]);
        assert_eq!(runs("0"), Vec::<(usize, usize)>::new());
        assert_eq!(runs("10101"), vec![(0, 1), (2, 1), (4, 1)]);
    }

    #[test]
    fn test_runs_fused() {
        let bits = BitString::new("10").unwrap();
        let mut it = bits.runs();
        assert_eq!(it.next(), Some(Run { start: 0, len: 1 }));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_size_hint_is_upper_bound() {
        for bits in ["1", "0", "101", "1010101", "0110", "111000111"] {
            let bits = BitString::new(bits).unwrap();
            let (_, upper) = bits.runs().size_hint();
            assert!(bits.runs().count() <= upper.unwrap());
        }
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(BitString::new(""), Err(GeometryError::Empty));
    }

    #[test]
    fn test_rejects_foreign_characters() {
        assert_eq!(
            "102".parse::<BitString>(),
            Err(GeometryError::InvalidCharacter {
                index: 2,
                character: '2'
            })
        );
        // index counts characters, not bytes
        assert_eq!(
            BitString::new("1ä1 "),
            Err(GeometryError::InvalidCharacter {
                index: 1,
                character: 'ä'
            })
        );
        assert!(BitString::new("1 0").is_err());
    }

    #[test]
    fn test_modules() {
        let bits = BitString::new("1001").unwrap();
        assert_eq!(bits.modules().collect::<Vec<_>>(), [true, false, false, true]);
        assert_eq!(bits.len(), 4);
        assert!(!bits.is_empty());
        assert_eq!(bits.to_string(), "1001");
    }
}
