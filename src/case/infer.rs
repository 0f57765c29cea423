//! Reconstructing a case style from an example identifier.

use super::char_class::CharClass;
use super::conversion::CaseConversion;
use super::{CaseStyle, Separator};
use std::error::Error;
use std::fmt;

/// Why an example string cannot describe a case style.
///
/// Every variant carries the offending example so callers can report it
/// without threading the input alongside the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InferError {
    /// Fewer than three significant (letter or escape-marker) characters.
    TooShort { example: String },
    /// More than two escape markers, or a marker past the first three
    /// positions.
    ExcessEscapeMarkers { example: String },
    /// Two non-word-start letters demand contradictory case conversions.
    ConflictingCase { example: String },
    /// Two word-start letters demand contradictory case conversions.
    ConflictingWordStart { example: String },
    /// Two different separator characters appear.
    MixedSeparators {
        example: String,
        first: char,
        second: char,
    },
    /// The same separator appears twice in a row.
    DuplicateSeparator { example: String, separator: char },
    /// Words are delimited both by separators and by case transitions.
    MixedBoundaries { example: String },
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::TooShort { example } => write!(
                f,
                "example \"{example}\" is too short: at least three letters are needed"
            ),
            InferError::ExcessEscapeMarkers { example } => write!(
                f,
                "example \"{example}\" has too many escape markers: at most two, within the first three characters"
            ),
            InferError::ConflictingCase { example } => write!(
                f,
                "example \"{example}\" mixes upper and lower case within a word"
            ),
            InferError::ConflictingWordStart { example } => write!(
                f,
                "example \"{example}\" starts words with conflicting cases"
            ),
            InferError::MixedSeparators {
                example,
                first,
                second,
            } => write!(
                f,
                "example \"{example}\" mixes separators '{first}' and '{second}'"
            ),
            InferError::DuplicateSeparator { example, separator } => write!(
                f,
                "example \"{example}\" repeats the separator '{separator}'"
            ),
            InferError::MixedBoundaries { example } => write!(
                f,
                "example \"{example}\" mixes separator and case-transition word boundaries"
            ),
        }
    }
}

impl Error for InferError {}

impl InferError {
    /// The example string that failed to infer.
    pub fn example(&self) -> &str {
        match self {
            InferError::TooShort { example }
            | InferError::ExcessEscapeMarkers { example }
            | InferError::ConflictingCase { example }
            | InferError::ConflictingWordStart { example }
            | InferError::MixedSeparators { example, .. }
            | InferError::DuplicateSeparator { example, .. }
            | InferError::MixedBoundaries { example } => example,
        }
    }
}

pub(super) fn infer(example: &str, standardize: bool) -> Result<CaseStyle, InferError> {
    let too_short = || InferError::TooShort {
        example: example.to_string(),
    };

    let mut chars = example.chars();
    let first = chars.next().ok_or_else(too_short)?;
    let first_class = CharClass::of(first);
    let first_case = CaseConversion::of_char(first);

    let mut separator: Option<char> = None;
    let mut word_start: Option<CaseConversion> = None;
    let mut other: Option<CaseConversion> = None;
    let mut markers = 0usize;
    // Set when a word boundary was expressed by a case transition; a later
    // separator (or vice versa) makes the boundaries ambiguous.
    let mut word_started_by_case = false;

    let mut prev_class = first_class;
    let mut prev_case = first_case;
    let mut significant =
        usize::from(matches!(first_class, CharClass::Letter | CharClass::EscapeMarker));

    for (i, c) in chars.enumerate() {
        let index = i + 1;
        let class = CharClass::of(c);
        match class {
            CharClass::Digit => {}
            CharClass::EscapeMarker => {
                significant += 1;
                if markers == 0 && index < 3 {
                    other = Some(CaseConversion::Original);
                } else if markers == 1 && index < 3 {
                    word_start = Some(CaseConversion::Original);
                } else {
                    return Err(InferError::ExcessEscapeMarkers {
                        example: example.to_string(),
                    });
                }
                markers += 1;
                prev_class = class;
                prev_case = CaseConversion::Original;
            }
            CharClass::Separator => {
                if word_started_by_case {
                    return Err(InferError::MixedBoundaries {
                        example: example.to_string(),
                    });
                }
                // Mixed separators outrank adjacency so "a-_b" names both
                // offending characters instead of a duplicate of one.
                if let Some(s) = separator {
                    if s != c {
                        return Err(InferError::MixedSeparators {
                            example: example.to_string(),
                            first: s,
                            second: c,
                        });
                    }
                }
                if prev_class == CharClass::Separator {
                    return Err(InferError::DuplicateSeparator {
                        example: example.to_string(),
                        separator: c,
                    });
                }
                if separator.is_none() {
                    separator = Some(c);
                }
                prev_class = class;
                prev_case = CaseConversion::Original;
            }
            CharClass::Letter => {
                significant += 1;
                let case = CaseConversion::of_char(c);
                if prev_class == CharClass::Separator {
                    // First letter after a separator fixes the word-start
                    // slot.
                    match word_start {
                        None => word_start = Some(case),
                        Some(w) if w.incompatible_with(case) => {
                            return Err(InferError::ConflictingWordStart {
                                example: example.to_string(),
                            });
                        }
                        Some(_) => {}
                    }
                } else if other.is_none() && word_start.is_none() {
                    other = Some(case);
                } else if case != prev_case && other.is_none_or(|o| case != o) {
                    // Case transition: a new word starts here.
                    if separator.is_some() {
                        return Err(InferError::MixedBoundaries {
                            example: example.to_string(),
                        });
                    }
                    match word_start {
                        None => word_start = Some(case),
                        Some(w) if w.incompatible_with(case) => {
                            return Err(InferError::ConflictingWordStart {
                                example: example.to_string(),
                            });
                        }
                        Some(_) => {}
                    }
                    word_started_by_case = true;
                } else if other.is_some_and(|o| o.incompatible_with(case)) {
                    return Err(InferError::ConflictingCase {
                        example: example.to_string(),
                    });
                } else if other.is_none() {
                    other = Some(case);
                }
                prev_class = class;
                prev_case = case;
            }
        }
    }

    if significant < 3 {
        return Err(too_short());
    }

    let (word_start, other) = match (word_start, other) {
        (Some(w), Some(o)) => (w, o),
        (Some(w), None) => (w, w),
        (None, Some(o)) => (o, o),
        (None, None) => (first_case, first_case),
    };
    let separator = match separator {
        Some(s) => Separator::Char(s),
        None => Separator::None,
    };

    if standardize {
        if let Some(found) = super::registered(separator, first_case, word_start, other) {
            return Ok(found.clone());
        }
    }
    Ok(CaseStyle::unregistered(
        separator,
        first_case,
        word_start,
        other,
        example.to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use crate::case::*;

    #[test]
    fn test_named_styles_infer_back() {
        for (name, style) in &NAMED_STYLES {
            if *name == "UNCAPITALIZED" {
                continue;
            }
            let inferred = CaseStyle::infer(style.example(), true)
                .unwrap_or_else(|e| panic!("{name}: {e}"));
            assert_eq!(&inferred, style, "{name}");
        }
    }

    #[test]
    fn test_standardized_example_is_canonical() {
        let style = CaseStyle::infer("fooBarBaz", true).unwrap();
        assert_eq!(style, CAML_CASE);
        assert_eq!(style.example(), "camlCase");
    }

    #[test]
    fn test_unstandardized_keeps_input_example() {
        let style = CaseStyle::infer("fooBarBaz", false).unwrap();
        assert_eq!(style, CAML_CASE);
        assert_eq!(style.example(), "fooBarBaz");
    }

    #[test]
    fn test_unregistered_separator() {
        let style = CaseStyle::infer("foo.bar.baz", true).unwrap();
        assert_eq!(style.separator(), Separator::Char('.'));
        assert!(style.name().is_none());
        assert_eq!(style.convert("fooBar"), "foo.bar");
    }

    #[test]
    fn test_escape_markers() {
        assert_eq!(CaseStyle::infer("$$$unmodified", true).unwrap(), UNMODIFIED);
        assert_eq!(
            CaseStyle::infer("C$$apitalized", true).unwrap(),
            CAPITALIZED
        );
    }

    #[test]
    fn test_uncapitalized_example_infers_lowercase_first() {
        // "u$capitalized" starts lowercase, so inference cannot reach the
        // registered UNCAPITALIZED descriptor (whose first case is Upper).
        let style = CaseStyle::infer(UNCAPITALIZED.example(), true).unwrap();
        assert_ne!(style, UNCAPITALIZED);
        assert!(style.name().is_none());
        assert_eq!(style.first_case(), CaseConversion::Lower);
    }

    #[test]
    fn test_too_short() {
        for example in ["", "a", "ab", "a1b2"] {
            assert_eq!(
                CaseStyle::infer(example, true),
                Err(InferError::TooShort {
                    example: example.to_string()
                }),
                "{example:?}"
            );
        }
    }

    #[test]
    fn test_duplicate_separator_beats_length_check() {
        assert_eq!(
            CaseStyle::infer("a--b", true),
            Err(InferError::DuplicateSeparator {
                example: "a--b".to_string(),
                separator: '-'
            })
        );
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(
            CaseStyle::infer("foo-bar_baz", true),
            Err(InferError::MixedSeparators {
                example: "foo-bar_baz".to_string(),
                first: '-',
                second: '_'
            })
        );
    }

    #[test]
    fn test_adjacent_mixed_separators() {
        assert_eq!(
            CaseStyle::infer("a-_b", true),
            Err(InferError::MixedSeparators {
                example: "a-_b".to_string(),
                first: '-',
                second: '_'
            })
        );
    }

    #[test]
    fn test_excess_escape_markers() {
        for example in ["a$$$b", "abcd$e"] {
            assert_eq!(
                CaseStyle::infer(example, true),
                Err(InferError::ExcessEscapeMarkers {
                    example: example.to_string()
                }),
                "{example:?}"
            );
        }
    }

    #[test]
    fn test_mixed_boundaries() {
        for example in ["fooBar-baz", "foo-barBaz"] {
            assert_eq!(
                CaseStyle::infer(example, true),
                Err(InferError::MixedBoundaries {
                    example: example.to_string()
                }),
                "{example:?}"
            );
        }
    }

    #[test]
    fn test_conflicting_case() {
        assert_eq!(
            CaseStyle::infer("FOob", true),
            Err(InferError::ConflictingCase {
                example: "FOob".to_string()
            })
        );
    }

    #[test]
    fn test_conflicting_word_start() {
        assert_eq!(
            CaseStyle::infer("foo-Bar-baz", true),
            Err(InferError::ConflictingWordStart {
                example: "foo-Bar-baz".to_string()
            })
        );
    }

    #[test]
    fn test_digits_are_skipped() {
        assert_eq!(CaseStyle::infer("foo2bar", true).unwrap(), LOWERCASE);
        assert_eq!(
            CaseStyle::infer("foo_2bar", true).unwrap(),
            LOWER_SNAKE_CASE
        );
    }

    #[test]
    fn test_error_carries_example() {
        let err = CaseStyle::infer("a--b", true).unwrap_err();
        assert_eq!(err.example(), "a--b");
        assert!(err.to_string().contains("a--b"));
    }
}
