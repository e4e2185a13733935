mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    apply, grade, init, lessons, outline, preview, ApplyArgs, GradeArgs, InitArgs, LessonsArgs,
    OutlineArgs, PreviewArgs,
};

/// Stackblocks CLI - build and check block-tree lessons
#[derive(Parser, Debug)]
#[command(name = "stackblocks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Stackblocks project with a sample lesson
    Init(InitArgs),

    /// List lesson snapshots
    Lessons(LessonsArgs),

    /// Print the block outline of a lesson
    Outline(OutlineArgs),

    /// Render a lesson against its scope
    Preview(PreviewArgs),

    /// Apply a mutation script to a lesson
    Apply(ApplyArgs),

    /// Compare a submission with a target, ignoring ids
    Grade(GradeArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Lessons(args) => lessons(args, &cwd),
        Command::Outline(args) => outline(args, &cwd),
        Command::Preview(args) => preview(args, &cwd),
        Command::Apply(args) => apply(args, &cwd),
        Command::Grade(args) => grade(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
