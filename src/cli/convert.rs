use std::io::BufRead;

use anyhow::{Context, Result, bail};
use clap::Args;

use crate::case::Locale;
use crate::config::Config;
use crate::output::CompactFormatter;

#[derive(Args)]
pub struct ConvertArgs {
    /// Target style: a registered name (PASCAL_CASE, train-case, ...) or an
    /// example string (falls back to the configured default_style)
    #[arg(short, long)]
    pub style: Option<String>,
    /// Locale for case mapping (overrides the configured one)
    #[arg(long, value_enum)]
    pub locale: Option<Locale>,
    /// Emit JSON instead of plain text
    #[arg(long)]
    pub json: bool,
    /// Text to convert; reads lines from stdin when omitted
    pub text: Vec<String>,
}

pub fn run(args: ConvertArgs, config: &Config) -> Result<()> {
    let style_arg = args
        .style
        .as_deref()
        .or(config.convert.default_style.as_deref());
    let Some(style_arg) = style_arg else {
        bail!("no style given: pass --style or set convert.default_style in the config");
    };
    let style = super::resolve_style(style_arg)?;
    let locale = args.locale.unwrap_or(config.convert.locale);

    let inputs = if args.text.is_empty() {
        read_stdin_lines().context("failed to read from stdin")?
    } else {
        args.text
    };

    tracing::debug!(style = %style, ?locale, count = inputs.len(), "converting");

    if args.json || config.output.json {
        let pairs: Vec<(String, String)> = inputs
            .into_iter()
            .map(|input| {
                let output = style.convert_with(&input, locale);
                (input, output)
            })
            .collect();
        println!("{}", CompactFormatter::format_conversions(&style, &pairs));
    } else {
        for input in inputs {
            println!("{}", style.convert_with(&input, locale));
        }
    }
    Ok(())
}

fn read_stdin_lines() -> std::io::Result<Vec<String>> {
    std::io::stdin().lock().lines().collect()
}
