/// Reserved character used inside example strings to mark a position whose
/// case is left as-is (see [`crate::case::CaseConversion::Original`]).
pub const ESCAPE_MARKER: char = '$';

/// Coarse character classification driving word segmentation.
///
/// Digits are deliberately their own class: they sit inside words without
/// starting one and without resetting case tracking, so `v2Test` splits as
/// `v2` + `Test` and not at the digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Letter,
    Digit,
    Separator,
    EscapeMarker,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        if c == ESCAPE_MARKER {
            Self::EscapeMarker
        } else if c.is_alphabetic() {
            Self::Letter
        } else if c.is_numeric() {
            Self::Digit
        } else {
            Self::Separator
        }
    }

    /// Separator and escape-marker runs both delimit words.
    pub fn is_word_boundary(self) -> bool {
        matches!(self, Self::Separator | Self::EscapeMarker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters() {
        assert_eq!(CharClass::of('a'), CharClass::Letter);
        assert_eq!(CharClass::of('Z'), CharClass::Letter);
        assert_eq!(CharClass::of('é'), CharClass::Letter);
        assert_eq!(CharClass::of('ß'), CharClass::Letter);
    }

    #[test]
    fn test_digits() {
        assert_eq!(CharClass::of('0'), CharClass::Digit);
        assert_eq!(CharClass::of('9'), CharClass::Digit);
    }

    #[test]
    fn test_separators() {
        assert_eq!(CharClass::of('-'), CharClass::Separator);
        assert_eq!(CharClass::of('_'), CharClass::Separator);
        assert_eq!(CharClass::of(' '), CharClass::Separator);
        assert_eq!(CharClass::of('.'), CharClass::Separator);
    }

    #[test]
    fn test_escape_marker() {
        assert_eq!(CharClass::of('$'), CharClass::EscapeMarker);
        assert!(CharClass::of('$').is_word_boundary());
        assert!(CharClass::of('-').is_word_boundary());
        assert!(!CharClass::of('a').is_word_boundary());
        assert!(!CharClass::of('3').is_word_boundary());
    }
}
