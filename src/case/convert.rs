//! Rendering text in a target case style.

use super::char_class::CharClass;
use super::conversion::CaseConversion;
use super::locale::Locale;
use super::{CaseStyle, Separator};

pub(crate) fn render(style: &CaseStyle, text: &str, locale: Locale) -> String {
    if text.is_empty() {
        return String::new();
    }
    // Purely case-driven styles (no inserted separator, uniform word case)
    // don't need word segmentation.
    if style.word_start_case == style.other_case && style.separator.as_char().is_none() {
        render_uniform(style, text, locale)
    } else {
        render_words(style, text, locale)
    }
}

/// Fast path: strip separators if the style has none, then apply at most two
/// conversions (first char, rest).
fn render_uniform(style: &CaseStyle, text: &str, locale: Locale) -> String {
    let stripped;
    let text = match style.separator {
        Separator::None => {
            stripped = text
                .chars()
                .filter(|&c| !CharClass::of(c).is_word_boundary())
                .collect::<String>();
            stripped.as_str()
        }
        _ => text,
    };

    if style.first_case == style.word_start_case {
        return style.first_case.apply_with(text, locale);
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    if let Some(first) = chars.next() {
        append_cased_char(&mut out, first, style.first_case, style.other_case, locale);
    }
    for c in chars {
        out.extend(style.other_case.apply_char(c, locale));
    }
    out
}

/// General path: scan for word boundaries.
///
/// A boundary is either a run of separator/escape characters followed by a
/// letter, or a lower-to-upper case transition inside a letter run (only
/// after the current word has produced at least one lowercase letter, so
/// acronym runs like `HTTP` don't split apart). Digits are transparent: they
/// neither end a word nor reset the case tracking.
fn render_words(style: &CaseStyle, text: &str, locale: Locale) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut pending_run = String::new();
    let mut first_done = false;
    let mut saw_lower = false;

    for c in text.chars() {
        match CharClass::of(c) {
            CharClass::Separator | CharClass::EscapeMarker => pending_run.push(c),
            CharClass::Digit => {
                if !pending_run.is_empty() {
                    emit_boundary(&mut out, style, &pending_run);
                    pending_run.clear();
                }
                out.push(c);
                first_done = true;
            }
            CharClass::Letter => {
                let case = CaseConversion::of_char(c);
                if !first_done {
                    // A leading run still yields one separator (or the
                    // original run) before the first-case character.
                    if !pending_run.is_empty() {
                        emit_boundary(&mut out, style, &pending_run);
                        pending_run.clear();
                    }
                    append_cased_char(&mut out, c, style.first_case, style.other_case, locale);
                    first_done = true;
                    saw_lower = seeds_lower(case, style.first_case);
                } else if !pending_run.is_empty() {
                    emit_boundary(&mut out, style, &pending_run);
                    pending_run.clear();
                    append_cased_char(&mut out, c, style.word_start_case, style.other_case, locale);
                    saw_lower = seeds_lower(case, style.word_start_case);
                } else if case == CaseConversion::Upper && saw_lower {
                    // camelCase hump
                    if let Separator::Char(sep) = style.separator {
                        out.push(sep);
                    }
                    append_cased_char(&mut out, c, style.word_start_case, style.other_case, locale);
                    saw_lower = false;
                } else {
                    out.extend(style.other_case.apply_char(c, locale));
                    if case == CaseConversion::Lower {
                        saw_lower = true;
                    }
                }
            }
        }
    }

    // Trailing runs are dropped for fixed/no separators; a preserving style
    // keeps them as they were.
    if style.separator == Separator::PreserveExisting {
        out.push_str(&pending_run);
    }
    out
}

/// Case-tracking seed after rendering a first or word-start letter.
/// Lowercase evidence counts only while the rendered text still shows it:
/// an uppercasing slot erases it, and a later hump split off that evidence
/// would not reappear when the output is converted again.
fn seeds_lower(case: CaseConversion, slot: CaseConversion) -> bool {
    case == CaseConversion::Lower && slot != CaseConversion::Upper
}

/// Collapses a separator run to whatever the style puts between words.
fn emit_boundary(out: &mut String, style: &CaseStyle, run: &str) {
    match style.separator {
        Separator::Char(sep) => out.push(sep),
        Separator::PreserveExisting => out.push_str(run),
        Separator::None => {}
    }
}

/// Appends one source character under `target`. Case mapping can expand a
/// single character into several; the first produced character carries the
/// target conversion and the remainder falls back to the other-case slot.
fn append_cased_char(
    out: &mut String,
    c: char,
    target: CaseConversion,
    other: CaseConversion,
    locale: Locale,
) {
    let mut mapped = target.apply_char(c, locale);
    if let Some(first) = mapped.next() {
        out.push(first);
    }
    for rest in mapped {
        match other {
            CaseConversion::Original => out.push(rest),
            conv => out.extend(conv.apply_char(rest, locale)),
        }
    }
}
