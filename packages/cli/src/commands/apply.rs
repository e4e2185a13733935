use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use stackblocks_common::{read_state, write_state, IdCollector};
use stackblocks_editor::{Editor, Mutation, Session};
use stackblocks_model::outline;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Lesson snapshot to edit
    pub input: PathBuf,

    /// JSON array of mutations
    pub mutations: PathBuf,

    /// Write the result back to the snapshot
    #[arg(short, long)]
    pub write: bool,
}

pub fn apply(args: ApplyArgs, _cwd: &str) -> Result<()> {
    let editor = Editor::new(read_state(&args.input)?);
    let script = std::fs::read_to_string(&args.mutations)?;
    let mutations: Vec<Mutation> = serde_json::from_str(&script)
        .with_context(|| format!("Invalid mutation script {}", args.mutations.display()))?;

    let mut session = Session::new(editor, |next: &Editor| {
        debug!(blocks = IdCollector::collect(next.tree()).len(), "Snapshot updated");
    });

    for (index, mutation) in mutations.iter().enumerate() {
        session
            .apply(mutation)
            .with_context(|| format!("Mutation #{} on {} failed", index, mutation.node_id()))?;
        println!("  {} #{} {}", "✓".green(), index, mutation.node_id());
    }

    let result = session.editor();
    print!("{}", outline(result.tree()));

    if args.write {
        write_state(&args.input, result.state())?;
        println!("{} Wrote {}", "✅".green(), args.input.display());
    }

    Ok(())
}
