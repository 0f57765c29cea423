pub mod convert;
pub mod infer;
pub mod list;
pub mod style;

use anyhow::{Result, bail};

use crate::case::{CaseStyle, NAMED_STYLES};

/// Resolves a `--style` argument into a descriptor.
///
/// The argument is first matched against registered style names,
/// punctuation-insensitively, so `PASCAL_CASE`, `pascal-case` and
/// `PascalCase` all hit the same constant. Anything else is treated as an
/// example string and run through inference.
pub fn resolve_style(arg: &str) -> Result<CaseStyle> {
    let normalized = CaseStyle::normalize_example(arg);
    for (name, style) in &NAMED_STYLES {
        if CaseStyle::normalize_example(name) == normalized {
            return Ok(style.clone());
        }
    }
    match CaseStyle::infer(arg, true) {
        Ok(style) => Ok(style),
        Err(e) => bail!("\"{arg}\" is neither a known style name nor a usable example: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::{LOWER_SNAKE_CASE, PASCAL_CASE, Separator};

    #[test]
    fn test_resolve_by_name() {
        assert_eq!(resolve_style("PASCAL_CASE").unwrap(), PASCAL_CASE);
        assert_eq!(resolve_style("pascal-case").unwrap(), PASCAL_CASE);
        assert_eq!(resolve_style("lower_snake_case").unwrap(), LOWER_SNAKE_CASE);
    }

    #[test]
    fn test_resolve_by_example() {
        assert_eq!(resolve_style("FooBarBaz").unwrap(), PASCAL_CASE);
        let dotted = resolve_style("foo.bar.baz").unwrap();
        assert_eq!(dotted.separator(), Separator::Char('.'));
    }

    #[test]
    fn test_resolve_rejects_garbage() {
        let err = resolve_style("a--b").unwrap_err();
        assert!(err.to_string().contains("a--b"));
    }
}
