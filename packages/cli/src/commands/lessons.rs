use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use stackblocks_common::{read_state, walk_node, Visitor};
use stackblocks_model::Node;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Args)]
pub struct LessonsArgs {
    /// Directory to scan (defaults to the configured lessons directory)
    pub path: Option<PathBuf>,
}

pub fn lessons(args: LessonsArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let dir = args.path.unwrap_or_else(|| config.get_lessons_dir(cwd));

    if !dir.exists() {
        return Err(anyhow!("Lessons directory does not exist: {:?}", dir));
    }

    let files = find_lesson_files(&dir)?;
    if files.is_empty() {
        println!("{}", "⚠️  No lessons found".yellow());
        return Ok(());
    }

    println!("Found {} lessons", files.len());
    for file in &files {
        let relative_path = file.strip_prefix(&dir).unwrap_or(file);
        match read_state(file) {
            Ok(state) => {
                let counts = BlockCounter::count(&state.tree);
                println!(
                    "  {} {} ({} blocks, {} modifiers)",
                    "✓".green(),
                    relative_path.display(),
                    counts.blocks,
                    counts.modifiers
                );
            }
            Err(e) => {
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative_path.display(),
                    e.to_string().red()
                );
            }
        }
    }

    Ok(())
}

/// Tallies content blocks and attached modifiers separately
#[derive(Debug, Default, PartialEq)]
struct BlockCounter {
    blocks: usize,
    modifiers: usize,
}

impl BlockCounter {
    fn count(tree: &[Node]) -> Self {
        let mut counter = BlockCounter::default();
        counter.visit_tree(tree);
        counter
    }
}

impl Visitor for BlockCounter {
    fn visit_node(&mut self, node: &Node) {
        self.blocks += 1;
        walk_node(self, node);
    }

    fn visit_modifier(&mut self, modifier: &Node) {
        self.modifiers += 1;
        walk_node(self, modifier);
    }
}

pub fn find_lesson_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();

    files.sort();
    Ok(files)
}
