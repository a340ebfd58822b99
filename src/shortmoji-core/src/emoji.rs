//! Emoji value types.
//!
//! An emoji is identified by its ordered list of Unicode codepoints and
//! nothing else. Equality, ordering and hashing are all structural over that
//! list, so two independently built [`Emoji`] values for the same sequence are
//! interchangeable; the catalog still hands out a single shared instance per
//! sequence.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{CatalogError, CatalogResult};

/// Ordered, non-empty sequence of Unicode scalar values.
///
/// Orders lexicographically by value; a strict prefix sorts before the longer
/// sequence. `Display` writes the wire form (`1F468-200D-1F469`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodepointSequence(Box<[u32]>);

impl CodepointSequence {
    /// Creates a sequence, rejecting empty input and non-scalar values.
    pub fn new(codepoints: impl Into<Vec<u32>>) -> CatalogResult<Self> {
        let codepoints = codepoints.into();
        if codepoints.is_empty() {
            return Err(CatalogError::InvalidSequence);
        }
        if let Some(&invalid) = codepoints.iter().find(|&&cp| char::from_u32(cp).is_none()) {
            return Err(CatalogError::InvalidCodepoint(invalid));
        }
        Ok(Self(codepoints.into_boxed_slice()))
    }

    /// Creates a sequence from the chars of a rendered emoji string.
    pub fn from_rendered(rendered: &str) -> CatalogResult<Self> {
        Self::new(rendered.chars().map(u32::from).collect::<Vec<_>>())
    }

    /// Returns the codepoints in order.
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Number of codepoints (always at least one).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the codepoints as chars.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        // Validated in `new`.
        self.0.iter().filter_map(|&cp| char::from_u32(cp))
    }

    /// Renders the sequence as the native string of its characters.
    pub fn render(&self) -> String {
        self.chars().collect()
    }

    /// Returns the hyphen-separated uppercase hex wire form.
    pub fn to_hex(&self) -> String {
        self.0
            .iter()
            .map(|cp| format!("{:04X}", cp))
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl FromStr for CodepointSequence {
    type Err = CatalogError;

    /// Parses the wire form. Empty groups (`1F600--FE0F`) are skipped.
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let mut codepoints = Vec::new();
        for group in key.split('-').map(str::trim).filter(|g| !g.is_empty()) {
            if !group.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(CatalogError::InvalidHex(group.to_string()));
            }
            let value = u32::from_str_radix(group, 16)
                .map_err(|_| CatalogError::InvalidHex(group.to_string()))?;
            codepoints.push(value);
        }
        Self::new(codepoints)
    }
}

impl fmt::Display for CodepointSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A single emoji.
///
/// Identity is delegated entirely to the [`CodepointSequence`]; the rendered
/// string is computed once at construction. `Display` writes the glyph.
#[derive(Debug, Clone)]
pub struct Emoji {
    sequence: CodepointSequence,
    rendered: String,
}

impl Emoji {
    /// Creates an emoji from a validated sequence.
    pub fn new(sequence: CodepointSequence) -> Self {
        let rendered = sequence.render();
        Self { sequence, rendered }
    }

    /// Returns the codepoint sequence.
    pub fn sequence(&self) -> &CodepointSequence {
        &self.sequence
    }

    /// Returns the codepoints in order.
    pub fn codepoints(&self) -> &[u32] {
        self.sequence.as_slice()
    }

    /// Returns the rendered emoji.
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    /// Returns the hyphen-separated uppercase hex form.
    pub fn hex(&self) -> String {
        self.sequence.to_hex()
    }
}

impl PartialEq for Emoji {
    fn eq(&self, other: &Self) -> bool {
        self.sequence == other.sequence
    }
}

impl Eq for Emoji {}

impl Hash for Emoji {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sequence.hash(state);
    }
}

impl PartialOrd for Emoji {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Emoji {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sequence.cmp(&other.sequence)
    }
}

impl fmt::Display for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl AsRef<str> for Emoji {
    fn as_ref(&self) -> &str {
        &self.rendered
    }
}

impl From<CodepointSequence> for Emoji {
    fn from(sequence: CodepointSequence) -> Self {
        Self::new(sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn seq(codepoints: &[u32]) -> CodepointSequence {
        CodepointSequence::new(codepoints.to_vec()).unwrap()
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_empty_sequence_rejected() {
        assert!(matches!(
            CodepointSequence::new(Vec::new()),
            Err(CatalogError::InvalidSequence)
        ));
    }

    #[test]
    fn test_surrogate_rejected() {
        assert!(matches!(
            CodepointSequence::new(vec![0x1F600, 0xD83D]),
            Err(CatalogError::InvalidCodepoint(0xD83D))
        ));
        assert!(matches!(
            CodepointSequence::new(vec![0x110000]),
            Err(CatalogError::InvalidCodepoint(0x110000))
        ));
    }

    #[test]
    fn test_parse_hex() {
        let family: CodepointSequence = "1F468-200D-1F469-200D-1F467".parse().unwrap();
        assert_eq!(
            family.as_slice(),
            &[0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F467]
        );
        assert_eq!(family.to_hex(), "1F468-200D-1F469-200D-1F467");

        let lower: CodepointSequence = "2764-fe0f".parse().unwrap();
        assert_eq!(lower.as_slice(), &[0x2764, 0xFE0F]);
        assert_eq!(lower.to_string(), "2764-FE0F");
    }

    #[test]
    fn test_parse_skips_empty_groups() {
        let parsed: CodepointSequence = "1F44D--1F3FB-".parse().unwrap();
        assert_eq!(parsed.as_slice(), &[0x1F44D, 0x1F3FB]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "1F60Z".parse::<CodepointSequence>(),
            Err(CatalogError::InvalidHex(g)) if g == "1F60Z"
        ));
        assert!(matches!(
            "+1F600".parse::<CodepointSequence>(),
            Err(CatalogError::InvalidHex(_))
        ));
        assert!(matches!(
            "FFFFFFFFF".parse::<CodepointSequence>(),
            Err(CatalogError::InvalidHex(_))
        ));
        assert!(matches!(
            "-".parse::<CodepointSequence>(),
            Err(CatalogError::InvalidSequence)
        ));
    }

    #[test]
    fn test_render() {
        let emoji = Emoji::new(seq(&[0x1F44D, 0x1F3FB]));
        assert_eq!(emoji.as_str(), "\u{1F44D}\u{1F3FB}");
        assert_eq!(emoji.to_string(), "👍🏻");
        assert_eq!(emoji.hex(), "1F44D-1F3FB");
    }

    #[test]
    fn test_from_rendered_round_trip() {
        let emoji = Emoji::new(seq(&[0x2764, 0xFE0F]));
        let back = CodepointSequence::from_rendered(emoji.as_str()).unwrap();
        assert_eq!(&back, emoji.sequence());
        assert!(CodepointSequence::from_rendered("").is_err());
    }

    #[test]
    fn test_equality_is_structural() {
        let a = Emoji::new(seq(&[0x1F600]));
        let b = Emoji::new(seq(&[0x1F600]));
        let c = Emoji::new(seq(&[0x1F603]));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, c);
    }

    #[test]
    fn test_permutations_are_distinct() {
        let ab = Emoji::new(seq(&[0x1F1EB, 0x1F1F7]));
        let ba = Emoji::new(seq(&[0x1F1F7, 0x1F1EB]));
        assert_ne!(ab, ba);
        assert_ne!(hash_of(&ab), hash_of(&ba));
    }

    #[test]
    fn test_prefix_sorts_first() {
        let heart = Emoji::new(seq(&[0x2764]));
        let red_heart = Emoji::new(seq(&[0x2764, 0xFE0F]));
        assert!(heart < red_heart);
        assert_eq!(heart.cmp(&heart), Ordering::Equal);
    }

    #[test]
    fn test_ordering_by_value_before_length() {
        let short_high = Emoji::new(seq(&[0x1F600]));
        let long_low = Emoji::new(seq(&[0x2764, 0xFE0F]));
        assert!(long_low < short_high);
    }

    #[test]
    fn test_ordering_is_transitive() {
        let mut emojis = vec![
            Emoji::new(seq(&[0x1F604])),
            Emoji::new(seq(&[0x2764, 0xFE0F])),
            Emoji::new(seq(&[0x1F44D, 0x1F3FB])),
            Emoji::new(seq(&[0x2764])),
            Emoji::new(seq(&[0x1F44D])),
        ];
        emojis.sort();
        let hexes: Vec<String> = emojis.iter().map(Emoji::hex).collect();
        assert_eq!(
            hexes,
            vec!["2764", "2764-FE0F", "1F44D", "1F44D-1F3FB", "1F604"]
        );
        for window in emojis.windows(2) {
            assert!(window[0] < window[1]);
        }
    }
}
