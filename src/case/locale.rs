use serde::{Deserialize, Serialize};

/// Locale for case mapping.
///
/// `Root` is the fixed default: plain Unicode case mappings, identical on
/// every machine regardless of the ambient platform locale. Conversions that
/// don't take an explicit locale always use `Root`, never the environment,
/// so generated identifiers, filenames and URLs come out the same everywhere.
///
/// `Turkish` exists because it is the classic counterexample: `I` lowercases
/// to dotless `ı` and `i` uppercases to dotted `İ`. Callers that genuinely
/// want that behavior have to ask for it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Root,
    Turkish,
}

/// Character case mapping result. One input char may map to several output
/// chars (`ß` uppercases to `SS`), so this is an iterator, not a char.
#[derive(Debug, Clone)]
pub enum MappedChars {
    Single(Option<char>),
    Upper(std::char::ToUppercase),
    Lower(std::char::ToLowercase),
}

impl Iterator for MappedChars {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        match self {
            Self::Single(c) => c.take(),
            Self::Upper(it) => it.next(),
            Self::Lower(it) => it.next(),
        }
    }
}

impl Locale {
    pub fn upper_char(self, c: char) -> MappedChars {
        match (self, c) {
            (Self::Turkish, 'i') => MappedChars::Single(Some('İ')),
            (Self::Turkish, 'ı') => MappedChars::Single(Some('I')),
            _ => MappedChars::Upper(c.to_uppercase()),
        }
    }

    pub fn lower_char(self, c: char) -> MappedChars {
        match (self, c) {
            (Self::Turkish, 'I') => MappedChars::Single(Some('ı')),
            (Self::Turkish, 'İ') => MappedChars::Single(Some('i')),
            _ => MappedChars::Lower(c.to_lowercase()),
        }
    }

    pub fn uppercase(self, text: &str) -> String {
        text.chars().flat_map(|c| self.upper_char(c)).collect()
    }

    pub fn lowercase(self, text: &str) -> String {
        text.chars().flat_map(|c| self.lower_char(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_basic() {
        assert_eq!(Locale::Root.uppercase("café"), "CAFÉ");
        assert_eq!(Locale::Root.lowercase("CAFÉ"), "café");
    }

    #[test]
    fn test_root_dotted_i_is_plain() {
        assert_eq!(Locale::Root.uppercase("i"), "I");
        assert_eq!(Locale::Root.lowercase("I"), "i");
    }

    #[test]
    fn test_turkish_dotted_i() {
        assert_eq!(Locale::Turkish.uppercase("i"), "İ");
        assert_eq!(Locale::Turkish.lowercase("I"), "ı");
        assert_eq!(Locale::Turkish.uppercase("ı"), "I");
        assert_eq!(Locale::Turkish.lowercase("İ"), "i");
    }

    #[test]
    fn test_turkish_other_chars_unchanged() {
        assert_eq!(Locale::Turkish.uppercase("abc"), "ABC");
        assert_eq!(Locale::Turkish.lowercase("XYZ"), "xyz");
    }

    #[test]
    fn test_multi_char_expansion() {
        assert_eq!(Locale::Root.uppercase("straße"), "STRASSE");
        let mapped: Vec<char> = Locale::Root.upper_char('ß').collect();
        assert_eq!(mapped, vec!['S', 'S']);
    }
}
