use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde_json::json;
use stackblocks_common::write_state;
use stackblocks_editor::Editor;
use stackblocks_model::*;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Lessons directory
    #[arg(short, long, default_value = "lessons")]
    pub lessons_dir: String,

    /// Seed for generated node ids
    #[arg(long, default_value = "stackblocks")]
    pub id_seed: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing Stackblocks project...".bright_blue().bold()
    );

    let config = Config {
        lessons_dir: args.lessons_dir.clone(),
        id_seed: args.id_seed.clone(),
        ..Config::default()
    };

    let lessons_dir = config.get_lessons_dir(cwd);
    if !lessons_dir.exists() {
        fs::create_dir_all(&lessons_dir)?;
        println!("  {} Created {}/", "✓".green(), args.lessons_dir);
    }

    let example_file = lessons_dir.join("todo-list.json");
    if !example_file.exists() {
        let lesson = todo_lesson(&config)?;
        write_state(&example_file, lesson.state())?;
        println!("  {} Created todo-list.json", "✓".green());
    }

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: stackblocks outline {}/todo-list.json", args.lessons_dir);
    println!("  2. Run: stackblocks preview {}/todo-list.json", args.lessons_dir);

    Ok(())
}

/// A ForEach over todos showing each title, with a checkmark for done ones
fn todo_lesson(config: &Config) -> Result<Editor> {
    let mut ids = IdGenerator::new(&config.id_seed);

    let list = Node::view(
        ids.new_id(),
        View::ForEach(ForEachArgs {
            data: "todos".to_string(),
            id: "id".to_string(),
            item: None,
            content: Vec::new(),
        }),
    );
    let row = Node::view(ids.new_id(), View::HStack(StackArgs::default()));
    let title = Node::view(
        ids.new_id(),
        View::Text(TextArgs {
            value: format!("{}.title", config.default_binding),
        }),
    );
    let done = Node::control(
        ids.new_id(),
        Control::If(IfArgs {
            condition: format!("{}.completed", config.default_binding),
            content: Vec::new(),
        }),
    );
    let check = Node::view(
        ids.new_id(),
        View::Image(ImageArgs {
            system_name: "checkmark".to_string(),
        }),
    );

    let mut factory = NodeFactory::new(ids);
    let font = factory.create(NodeType::Modifier(ModifierType::Font));

    let scope = Value::from(json!({
        "todos": [
            { "id": 1, "title": "Buy milk", "completed": true },
            { "id": 2, "title": "Walk the dog", "completed": false }
        ]
    }));

    let (list_id, row_id, title_id, done_id) = (
        list.id.clone(),
        row.id.clone(),
        title.id.clone(),
        done.id.clone(),
    );

    let editor = Editor::new(EditorState::new(scope, Vec::new()))
        .insert(list, None)?
        .insert(row, Some(&list_id))?
        .insert(title, Some(&row_id))?
        .insert(font, Some(&title_id))?
        .insert(done, Some(&row_id))?
        .insert(check, Some(&done_id))?;

    Ok(editor)
}
