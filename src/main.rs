//! tokscope CLI: interactive tokenizer checkpoint explorer

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokscope::{
    parse_event, render_checkpoint_list, render_report, render_title, App, Checkpoint,
    HubProvider, Outcome,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "tokscope")]
#[command(about = "Inspect how pretrained checkpoints tokenize text")]
#[command(version)]
struct Cli {
    /// Tokenizer checkpoint to start with
    #[arg(short, long, value_enum, default_value_t = Checkpoint::default())]
    checkpoint: Checkpoint,

    /// Text to tokenize
    #[arg(short, long, default_value = "gobbledygook!")]
    text: String,

    /// Run once and exit instead of entering the interactive loop
    #[arg(long)]
    once: bool,

    /// With --once, also write the report as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut app = App::new(cli.checkpoint, cli.text, HubProvider::new());

    if cli.once {
        let report = app.run_once()?;
        println!("{}", render_report(&report));
        if let Some(path) = &cli.output {
            std::fs::write(path, serde_json::to_string_pretty(&report)?)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report saved to {}", path.display());
        }
        return Ok(());
    }

    println!("{}", render_title());
    println!("{}", render_checkpoint_list(app.checkpoint()));
    println!("type text to tokenize it, :help for commands\n");

    // Initial render with the starting inputs, then one full re-run per line.
    match app.run_once() {
        Ok(report) => println!("{}", render_report(&report)),
        Err(e) => println!("error: {e:#}"),
    }

    let stdin = io::stdin();
    loop {
        print!("\n> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let event = match parse_event(&line) {
            Ok(event) => event,
            Err(e) => {
                println!("error: {e:#}");
                continue;
            }
        };

        match app.apply(event) {
            Outcome::Render(out) => println!("{out}"),
            Outcome::Quit => break,
        }
    }

    Ok(())
}
