use super::render::{print_messages, render_done_list, render_item_list};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use todoz::api::{CmdMessage, CmdResult, TodoApi};
use todoz::config::TodoConfig;
use todoz::error::{Result, TodoError};
use todoz::store::fs::FileStore;
use tracing_subscriber::EnvFilter;

const PROJECT_CONFIG_DIR: &str = ".todoz";

struct AppContext {
    api: TodoApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::List { filter } => handle_list(&ctx, &filter),
        Commands::Add { text } => handle_add(&mut ctx, &text),
        Commands::Do { line } => report_range(ctx.api.complete(line)),
        Commands::Delete { line } => report_range(ctx.api.delete(line)),
        Commands::Pri { arg } => report_range(ctx.api.prioritize(arg)),
        Commands::Done => handle_done(&ctx),
        Commands::Paths => handle_paths(&ctx),
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "todoz=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut config_dirs = Vec::new();
    if let Some(proj_dirs) = ProjectDirs::from("com", "todoz", "todoz") {
        config_dirs.push(proj_dirs.config_dir().to_path_buf());
    }
    config_dirs.push(cwd.join(PROJECT_CONFIG_DIR));

    let mut config = TodoConfig::load_layered(&config_dirs)?;
    if let Some(path) = &cli.todo_file {
        config = config.with_todo_file(path);
    }
    if let Some(path) = &cli.done_file {
        config = config.with_done_file(path);
    }
    let config = config.resolved(&cwd);
    tracing::debug!(
        todo = %config.todo_file.display(),
        done = %config.done_file.display(),
        "resolved files"
    );

    let store = FileStore::from_config(&config);
    Ok(AppContext {
        api: TodoApi::new(store, config),
    })
}

fn handle_list(ctx: &AppContext, filter: &[String]) -> Result<()> {
    let term = filter.join(" ");
    let filter = if term.trim().is_empty() {
        None
    } else {
        Some(term.as_str())
    };
    let result = ctx.api.list(filter)?;
    print!("{}", render_item_list(&result.listed_items, result.total));
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, text: &[String]) -> Result<()> {
    let result = ctx.api.add(&text.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

/// A line number that names no item is an ordinary user mistake: report it
/// on stdout and finish normally. Every other error propagates.
fn report_range(result: Result<CmdResult>) -> Result<()> {
    match result {
        Ok(result) => {
            print_messages(&result.messages);
            Ok(())
        }
        Err(e @ TodoError::LineOutOfRange { .. }) => {
            print_messages(&[CmdMessage::error(e.to_string())]);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn handle_done(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.done()?;
    print!("{}", render_done_list(&result.done_entries));
    Ok(())
}

fn handle_paths(ctx: &AppContext) -> Result<()> {
    let config = ctx.api.config();
    println!("todo: {}", config.todo_file.display());
    println!("done: {}", config.done_file.display());
    Ok(())
}
