use super::char_class::ESCAPE_MARKER;
use super::locale::{Locale, MappedChars};

/// A three-valued case transform applied to a single slot of a case style.
///
/// `Original` means "leave the character alone", which is also how example
/// strings express "don't care" (rendered as the escape marker).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseConversion {
    Lower,
    Upper,
    Original,
}

impl CaseConversion {
    /// Applies the transform to one character under `locale`.
    ///
    /// Returns an iterator because case mapping can expand a character
    /// (`ß` → `SS`); `Original` always yields exactly the input.
    pub fn apply_char(self, c: char, locale: Locale) -> MappedChars {
        match self {
            Self::Lower => locale.lower_char(c),
            Self::Upper => locale.upper_char(c),
            Self::Original => MappedChars::Single(Some(c)),
        }
    }

    /// Applies the transform to a whole string with the fixed default locale.
    pub fn apply(self, text: &str) -> String {
        self.apply_with(text, Locale::default())
    }

    pub fn apply_with(self, text: &str, locale: Locale) -> String {
        match self {
            Self::Lower => locale.lowercase(text),
            Self::Upper => locale.uppercase(text),
            Self::Original => text.to_string(),
        }
    }

    /// Lenient classification: which transform would have produced `c`?
    /// Anything that is not an upper- or lower-case letter is `Original`.
    pub fn of_char(c: char) -> Self {
        if c.is_uppercase() {
            Self::Upper
        } else if c.is_lowercase() {
            Self::Lower
        } else {
            Self::Original
        }
    }

    /// Strict classification: rejects characters that are neither letters
    /// nor the escape marker.
    pub fn of_char_strict(c: char) -> Option<Self> {
        if c.is_alphabetic() || c == ESCAPE_MARKER {
            Some(Self::of_char(c))
        } else {
            None
        }
    }

    /// Renders `c` for an example string: the escape marker for `Original`
    /// (the slot's case is "don't care"), otherwise the transformed char.
    pub fn example_char(self, c: char, locale: Locale) -> char {
        match self {
            Self::Original => ESCAPE_MARKER,
            _ => self.apply_char(c, locale).next().unwrap_or(c),
        }
    }

    pub fn is_case_changing(self) -> bool {
        !matches!(self, Self::Original)
    }

    /// Two transforms are contradictory evidence for the same slot only when
    /// they differ and both actually change case; `Original` never conflicts.
    pub fn incompatible_with(self, other: Self) -> bool {
        self != other && self.is_case_changing() && other.is_case_changing()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lower => "lower",
            Self::Upper => "upper",
            Self::Original => "original",
        }
    }
}
