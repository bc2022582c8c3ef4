mod args;
mod document;
mod render;

use std::fs::File;

use anyhow::Context;
use clap::Parser;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};
use tablesort::{EngineConfig, TableMessage, TableRegistry};

use args::{Args, OutputFormat};
use document::Document;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args)?;
    run(&args)
}

fn init_logging(args: &Args) -> anyhow::Result<()> {
    match &args.log_file {
        Some(path) => {
            let log_file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            WriteLogger::init(args.log_level, Config::default(), log_file)
                .map_err(|e| anyhow::anyhow!("failed to initialize logger: {e}"))?;
        }
        None => {
            TermLogger::init(
                args.log_level,
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            )
            .map_err(|e| anyhow::anyhow!("failed to initialize logger: {e}"))?;
        }
    }
    Ok(())
}

fn run(args: &Args) -> anyhow::Result<()> {
    let engine = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };

    let table = Document::load(&args.document)?.into_table();
    let mut registry = TableRegistry::with_config(engine);
    let id = registry.attach(table);

    for path in &args.appends {
        let rows = document::load_rows(path)?;
        log::info!("appending {} rows from {}", rows.len(), path.display());
        registry
            .get_mut(id)
            .context("table detached while appending")?
            .rows_mut()
            .extend(rows);
        registry.dispatch(TableMessage::update(id))?;
    }

    for click in &args.clicks {
        let result =
            registry.dispatch(TableMessage::header_click(id, click.column, click.modifiers))?;
        if !result.is_handled() {
            log::warn!(
                "click on column {} ignored (disabled or out of range)",
                click.column
            );
        }
    }

    let table = registry.get(id).context("table detached before output")?;
    match args.format {
        OutputFormat::Table => println!("{}", render::render_table(table)),
        OutputFormat::Json => {
            let output = render::Output::from(table);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
