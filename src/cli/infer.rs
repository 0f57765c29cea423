use anyhow::Result;
use clap::Args;

use super::style;
use crate::case::{CaseStyle, Separator};
use crate::config::Config;
use crate::output::CompactFormatter;

#[derive(Args)]
pub struct InferArgs {
    /// Example identifier to infer a style from (e.g. "PascalCase")
    pub example: String,
    /// Keep the input as the style's example instead of canonicalizing
    #[arg(long)]
    pub raw: bool,
    /// Emit JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: InferArgs, config: &Config) -> Result<()> {
    let inferred = CaseStyle::infer(&args.example, !args.raw)?;

    if args.json || config.output.json {
        println!("{}", CompactFormatter::format_style(&inferred));
        return Ok(());
    }

    match inferred.name() {
        Some(name) => println!("{}", style::heading(name)),
        None => println!("{}", style::info("(unregistered style)")),
    }
    let separator = match inferred.separator() {
        Separator::None => "none".to_string(),
        Separator::Char(c) => format!("'{c}'"),
        Separator::PreserveExisting => "preserve existing".to_string(),
    };
    println!("  Separator:  {separator}");
    println!("  First:      {}", inferred.first_case().as_str());
    println!("  Word start: {}", inferred.word_start_case().as_str());
    println!("  Other:      {}", inferred.other_case().as_str());
    println!("  Example:    {inferred}");
    Ok(())
}
