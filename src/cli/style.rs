use owo_colors::{OwoColorize, Stream::Stdout};

pub fn heading(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.bold()).to_string()
}

pub fn info(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.dimmed()).to_string()
}
