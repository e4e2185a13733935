use anyhow::Result;
use clap::Args;
use stackblocks_common::read_state;
use stackblocks_model::Outliner;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct OutlineArgs {
    /// Lesson snapshot to outline
    pub input: PathBuf,

    /// Indentation per nesting level
    #[arg(long, default_value = "  ")]
    pub indent: String,
}

pub fn outline(args: OutlineArgs, _cwd: &str) -> Result<()> {
    let state = read_state(&args.input)?;
    print!("{}", Outliner::with_indent(&args.indent).outline(&state.tree));
    Ok(())
}
