use serde_json::{Value, json};

use crate::case::{CaseStyle, Separator};

pub struct CompactFormatter;

impl CompactFormatter {
    pub fn format_style(style: &CaseStyle) -> String {
        Self::style_value(style).to_string()
    }

    pub fn format_style_list(styles: &[(&str, CaseStyle)]) -> String {
        let entries: Vec<Value> = styles
            .iter()
            .map(|(name, style)| {
                let mut v = Self::style_value(style);
                v["name"] = json!(name);
                v
            })
            .collect();
        json!({"styles": entries}).to_string()
    }

    pub fn format_conversions(style: &CaseStyle, pairs: &[(String, String)]) -> String {
        let results: Vec<Value> = pairs
            .iter()
            .map(|(input, output)| json!({"in": input, "out": output}))
            .collect();
        json!({"style": style.example(), "results": results}).to_string()
    }

    fn style_value(style: &CaseStyle) -> Value {
        let separator = match style.separator() {
            Separator::None => json!(null),
            Separator::Char(c) => json!(c.to_string()),
            Separator::PreserveExisting => json!("preserve"),
        };
        let mut v = json!({
            "sep": separator,
            "first": style.first_case().as_str(),
            "word_start": style.word_start_case().as_str(),
            "other": style.other_case().as_str(),
            "example": style.example(),
        });
        if let Some(name) = style.name() {
            v["name"] = json!(name);
        }
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::{NAMED_STYLES, PASCAL_CASE, TRAIN_CASE};

    #[test]
    fn test_format_style() {
        let out = CompactFormatter::format_style(&TRAIN_CASE);
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["sep"], "-");
        assert_eq!(v["first"], "lower");
        assert_eq!(v["example"], "train-case");
        assert_eq!(v["name"], "TRAIN_CASE");
    }

    #[test]
    fn test_format_unregistered_style_has_no_name() {
        let style = CaseStyle::infer("foo.bar.baz", true).unwrap();
        let out = CompactFormatter::format_style(&style);
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["sep"], ".");
        assert!(v.get("name").is_none());
    }

    #[test]
    fn test_format_style_list() {
        let out = CompactFormatter::format_style_list(&NAMED_STYLES);
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["styles"].as_array().unwrap().len(), 21);
    }

    #[test]
    fn test_format_conversions() {
        let pairs = vec![("fooBar".to_string(), "FooBar".to_string())];
        let out = CompactFormatter::format_conversions(&PASCAL_CASE, &pairs);
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["style"], "PascalCase");
        assert_eq!(v["results"][0]["out"], "FooBar");
    }
}
