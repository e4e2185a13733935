use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use stackblocks_common::read_state;
use stackblocks_editor::Editor;
use stackblocks_model::outline;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GradeArgs {
    /// Learner's snapshot
    pub submission: PathBuf,

    /// Target snapshot to compare against
    pub target: PathBuf,
}

pub fn grade(args: GradeArgs, _cwd: &str) -> Result<()> {
    let submission = Editor::new(read_state(&args.submission)?);
    let target = Editor::new(read_state(&args.target)?);

    if submission.equals(&target) {
        println!("{}", "✅ Matches the target".green().bold());
        return Ok(());
    }

    println!("{}", "Expected:".bright_white().bold());
    print!("{}", outline(target.tree()));
    println!("{}", "Found:".bright_white().bold());
    print!("{}", outline(submission.tree()));

    bail!("{} does not match {}", args.submission.display(), args.target.display())
}
