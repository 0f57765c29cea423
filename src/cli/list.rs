use anyhow::Result;
use clap::Args;

use super::style;
use crate::case::NAMED_STYLES;
use crate::config::Config;
use crate::output::CompactFormatter;

#[derive(Args)]
pub struct ListArgs {
    /// Emit JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ListArgs, config: &Config) -> Result<()> {
    if args.json || config.output.json {
        println!("{}", CompactFormatter::format_style_list(&NAMED_STYLES));
        return Ok(());
    }

    println!("{}\n", style::heading("Registered styles:"));
    let width = NAMED_STYLES
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);
    for (name, case_style) in &NAMED_STYLES {
        println!("  {name:width$}  {}", style::info(case_style.example()));
    }
    Ok(())
}
