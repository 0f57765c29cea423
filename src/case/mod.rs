//! Identifier case-style engine.
//!
//! A [`CaseStyle`] describes a naming convention as four pieces: the word
//! separator (if any) and the case transforms for the first character, for
//! word-start letters, and for everything else. Two algorithms operate on the
//! descriptor: [`CaseStyle::convert`] renders arbitrary text in the style,
//! and [`CaseStyle::infer`] reconstructs a descriptor from one representative
//! example string such as `"PascalCase"` or `"train-case"`.

pub mod char_class;
pub mod conversion;
mod convert;
mod infer;
pub mod locale;

pub use char_class::{CharClass, ESCAPE_MARKER};
pub use conversion::CaseConversion;
pub use infer::InferError;
pub use locale::Locale;

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use CaseConversion::{Lower, Original, Upper};

/// What goes between words in the rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    /// No separator; word boundaries show only through letter case, and
    /// separator characters in the input are dropped.
    None,
    /// A fixed literal character between words (`-`, `_`, ` `, ...).
    /// Never a letter or digit.
    Char(char),
    /// Keep whatever non-alphanumeric runs the input already has.
    PreserveExisting,
}

impl Separator {
    pub fn as_char(self) -> Option<char> {
        match self {
            Self::Char(c) => Some(c),
            _ => None,
        }
    }
}

/// A case-style descriptor.
///
/// Equality and hashing cover only the 4-tuple; the `example` field is a
/// canonical rendering carried for display and round-tripping through
/// [`CaseStyle::infer`], and two descriptors with equal tuples are
/// interchangeable no matter which example they carry.
#[derive(Debug, Clone)]
pub struct CaseStyle {
    separator: Separator,
    first_case: CaseConversion,
    word_start_case: CaseConversion,
    other_case: CaseConversion,
    example: Cow<'static, str>,
}

impl PartialEq for CaseStyle {
    fn eq(&self, other: &Self) -> bool {
        self.separator == other.separator
            && self.first_case == other.first_case
            && self.word_start_case == other.word_start_case
            && self.other_case == other.other_case
    }
}

impl Eq for CaseStyle {}

impl Hash for CaseStyle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.separator.hash(state);
        self.first_case.hash(state);
        self.word_start_case.hash(state);
        self.other_case.hash(state);
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.example)
    }
}

macro_rules! styles {
    ($($(#[$attr:meta])* $name:ident = ($sep:expr, $first:expr, $start:expr, $other:expr, $example:literal);)+) => {
        $(
            $(#[$attr])*
            pub const $name: CaseStyle =
                CaseStyle::literal($sep, $first, $start, $other, $example);
        )+

        /// All named styles, in registration order. Structural lookup
        /// returns the first match, so tuple duplicates (CAPITALIZED /
        /// UNCAPITALIZED) resolve to the earlier entry.
        pub static NAMED_STYLES: [(&str, CaseStyle); 21] = [
            $((stringify!($name), $name),)+
        ];
    };
}

styles! {
    LOWERCASE = (Separator::None, Lower, Lower, Lower, "lowercase");
    UPPERCASE = (Separator::None, Upper, Upper, Upper, "UPPERCASE");
    CAML_CASE = (Separator::None, Lower, Upper, Lower, "camlCase");
    PASCAL_CASE = (Separator::None, Upper, Upper, Lower, "PascalCase");
    TRAIN_CASE = (Separator::Char('-'), Lower, Lower, Lower, "train-case");
    UPPER_TRAIN_CASE = (Separator::Char('-'), Upper, Upper, Upper, "UPPER-TRAIN-CASE");
    PASCAL_TRAIN_CASE = (Separator::Char('-'), Upper, Upper, Lower, "Pascal-Train-Case");
    CAML_TRAIN_CASE = (Separator::Char('-'), Lower, Upper, Lower, "caml-Train-Case");
    LOWER_SNAKE_CASE = (Separator::Char('_'), Lower, Lower, Lower, "lower_snake_case");
    UPPER_SNAKE_CASE = (Separator::Char('_'), Upper, Upper, Upper, "UPPER_SNAKE_CASE");
    PASCAL_SNAKE_CASE = (Separator::Char('_'), Upper, Upper, Lower, "Pascal_Snake_Case");
    CAML_SNAKE_CASE = (Separator::Char('_'), Lower, Upper, Lower, "caml_Snake_Case");
    LOWER_SPACE_CASE = (Separator::Char(' '), Lower, Lower, Lower, "lower space case");
    UPPER_SPACE_CASE = (Separator::Char(' '), Upper, Upper, Upper, "UPPER SPACE CASE");
    PASCAL_SPACE_CASE = (Separator::Char(' '), Upper, Upper, Lower, "Pascal Space Case");
    CAML_SPACE_CASE = (Separator::Char(' '), Lower, Upper, Lower, "caml Space Case");
    UNMODIFIED = (Separator::None, Original, Original, Original, "$$$unmodified");
    CAPITALIZED = (Separator::None, Upper, Original, Original, "C$$apitalized");
    /// First case deliberately Upper, not Lower: the tuple is part of the
    /// compatibility contract and matches CAPITALIZED exactly.
    UNCAPITALIZED = (Separator::None, Upper, Original, Original, "u$$capitalized");
    CAPITALIZED_LOWER = (Separator::None, Upper, Lower, Lower, "Capitalizedlower");
    UNCAPITALIZED_UPPER = (Separator::None, Lower, Upper, Upper, "uNCAPITALIZEDUPPER");
}

impl CaseStyle {
    const fn literal(
        separator: Separator,
        first_case: CaseConversion,
        word_start_case: CaseConversion,
        other_case: CaseConversion,
        example: &'static str,
    ) -> Self {
        Self {
            separator,
            first_case,
            word_start_case,
            other_case,
            example: Cow::Borrowed(example),
        }
    }

    /// Returns the registered style with this 4-tuple, or builds a fresh
    /// unregistered one whose example is synthesized from "Custom"/"Case".
    pub fn of(
        separator: Separator,
        first_case: CaseConversion,
        word_start_case: CaseConversion,
        other_case: CaseConversion,
    ) -> Self {
        debug_assert!(
            separator.as_char().is_none_or(|c| !c.is_alphanumeric()),
            "separator must not be a letter or digit"
        );
        if let Some(found) = registered(separator, first_case, word_start_case, other_case) {
            return found.clone();
        }
        let example = synthesize_example(separator, first_case, word_start_case, other_case);
        Self {
            separator,
            first_case,
            word_start_case,
            other_case,
            example: Cow::Owned(example),
        }
    }

    pub(crate) fn unregistered(
        separator: Separator,
        first_case: CaseConversion,
        word_start_case: CaseConversion,
        other_case: CaseConversion,
        example: String,
    ) -> Self {
        Self {
            separator,
            first_case,
            word_start_case,
            other_case,
            example: Cow::Owned(example),
        }
    }

    /// Renders `text` in this style with the fixed default locale.
    /// Never fails; an empty string converts to an empty string.
    pub fn convert(&self, text: &str) -> String {
        self.convert_with(text, Locale::default())
    }

    pub fn convert_with(&self, text: &str, locale: Locale) -> String {
        convert::render(self, text, locale)
    }

    /// Reconstructs a style from one representative example string.
    ///
    /// With `standardize` set, a result whose tuple matches a named style
    /// returns that registered value (canonical example included); otherwise
    /// the returned descriptor carries `example` verbatim so its `Display`
    /// reproduces the caller's input.
    pub fn infer(example: &str, standardize: bool) -> Result<Self, InferError> {
        infer::infer(example, standardize)
    }

    /// Strips everything that is not a letter or digit and lower-cases the
    /// rest, for punctuation-insensitive comparison against example strings.
    pub fn normalize_example(example: &str) -> String {
        example
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(|c| Locale::Root.lower_char(c))
            .collect()
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    pub fn first_case(&self) -> CaseConversion {
        self.first_case
    }

    pub fn word_start_case(&self) -> CaseConversion {
        self.word_start_case
    }

    pub fn other_case(&self) -> CaseConversion {
        self.other_case
    }

    pub fn example(&self) -> &str {
        &self.example
    }

    /// The registered name of this style, if its tuple matches a constant.
    pub fn name(&self) -> Option<&'static str> {
        NAMED_STYLES
            .iter()
            .find(|(_, style)| style == self)
            .map(|(name, _)| *name)
    }
}

pub(crate) fn registered(
    separator: Separator,
    first_case: CaseConversion,
    word_start_case: CaseConversion,
    other_case: CaseConversion,
) -> Option<&'static CaseStyle> {
    NAMED_STYLES.iter().map(|(_, style)| style).find(|style| {
        style.separator == separator
            && style.first_case == first_case
            && style.word_start_case == word_start_case
            && style.other_case == other_case
    })
}

/// Builds an example for an unregistered tuple by casing "Custom"/"Case"
/// slot by slot. Original slots render as the escape marker while the index
/// is below three (the only positions the inferencer accepts markers at),
/// literally afterwards.
fn synthesize_example(
    separator: Separator,
    first_case: CaseConversion,
    word_start_case: CaseConversion,
    other_case: CaseConversion,
) -> String {
    let mut out = String::new();
    let mut index = 0;
    for (i, c) in "Custom".chars().enumerate() {
        let conversion = if i == 0 { first_case } else { other_case };
        push_example_char(&mut out, conversion, c, index);
        index += 1;
    }
    if let Separator::Char(sep) = separator {
        out.push(sep);
        index += 1;
    }
    for (i, c) in "Case".chars().enumerate() {
        let conversion = if i == 0 { word_start_case } else { other_case };
        push_example_char(&mut out, conversion, c, index);
        index += 1;
    }
    out
}

fn push_example_char(out: &mut String, conversion: CaseConversion, c: char, index: usize) {
    if conversion == CaseConversion::Original && index >= 3 {
        out.push(c);
    } else {
        out.push(conversion.example_char(c, Locale::Root));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_equality_ignores_example() {
        let a = CaseStyle::of(Separator::None, Upper, Upper, Lower);
        assert_eq!(a, PASCAL_CASE);
        assert_eq!(a.example(), "PascalCase");
    }

    #[test]
    fn test_of_returns_registered_constant() {
        let style = CaseStyle::of(Separator::Char('-'), Lower, Lower, Lower);
        assert_eq!(style.example(), "train-case");
        assert_eq!(style.name(), Some("TRAIN_CASE"));
    }

    #[test]
    fn test_of_synthesizes_unregistered_example() {
        let style = CaseStyle::of(Separator::Char('.'), Lower, Lower, Lower);
        assert_eq!(style.example(), "custom.case");
        assert_eq!(style.name(), None);

        let style = CaseStyle::of(Separator::Char('.'), Upper, Upper, Lower);
        assert_eq!(style.example(), "Custom.Case");
    }

    #[test]
    fn test_synthesized_original_slots_use_markers_early() {
        let style = CaseStyle::of(Separator::Char('.'), Upper, Original, Original);
        assert_eq!(style.example(), "C$$tom.Case");
    }

    #[test]
    fn test_uncapitalized_quirk_is_preserved() {
        // Part of the compatibility contract: UNCAPITALIZED stores Upper as
        // its first case, making it structurally equal to CAPITALIZED.
        assert_eq!(UNCAPITALIZED.first_case(), Upper);
        assert_eq!(UNCAPITALIZED, CAPITALIZED);
        assert_eq!(UNCAPITALIZED.name(), Some("CAPITALIZED"));
    }

    #[test]
    fn test_display_is_example() {
        assert_eq!(PASCAL_CASE.to_string(), "PascalCase");
        assert_eq!(UNMODIFIED.to_string(), "$$$unmodified");
    }

    #[test]
    fn test_normalize_example() {
        assert_eq!(
            CaseStyle::normalize_example("My-Variable_Name"),
            "myvariablename"
        );
        assert_eq!(CaseStyle::normalize_example("v2 Test!"), "v2test");
        assert_eq!(CaseStyle::normalize_example(""), "");
    }

    #[test]
    fn test_registry_is_complete() {
        assert_eq!(NAMED_STYLES.len(), 21);
        let names: Vec<&str> = NAMED_STYLES.iter().map(|(n, _)| *n).collect();
        assert_eq!(names[0], "LOWERCASE");
        assert!(names.contains(&"PASCAL_CASE"));
        assert!(names.contains(&"UNCAPITALIZED_UPPER"));
    }
}
