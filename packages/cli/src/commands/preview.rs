use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use stackblocks_common::read_state;
use stackblocks_evaluator::Evaluator;
use stackblocks_model::Value;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Lesson snapshot to render
    pub input: PathBuf,

    /// Replace the snapshot's scope with this JSON object
    #[arg(short, long)]
    pub scope: Option<String>,

    /// Print the preview as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn preview(args: PreviewArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut state = read_state(&args.input)?;

    if let Some(scope) = &args.scope {
        let value: serde_json::Value = serde_json::from_str(scope)?;
        state.scope = Value::from(value);
    }

    let mut evaluator = Evaluator::with_options(config.evaluator_options());
    let preview = evaluator.render_tree(&state);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&preview.nodes)?);
    } else {
        print!("{}", preview);
    }

    if !preview.diagnostics.is_empty() {
        eprintln!();
        for diagnostic in &preview.diagnostics {
            eprintln!("  {} {}", "⚠".yellow(), diagnostic);
        }
    }

    Ok(())
}
