use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use vshell::emulator::{Dispatch, Emulator, EmulatorOptions};
use vshell::session::SessionRecorder;
use vshell::vfs::{build_tree, load_archive};

#[derive(Parser)]
#[command(name = "vshell")]
#[command(about = "An emulated UNIX-like shell over a virtual filesystem")]
#[command(version)]
struct Cli {
    /// User name for the session
    #[arg(short = 'u', long = "user")]
    user: String,

    /// Path to the zip archive backing the virtual filesystem
    #[arg(short = 'v', long = "vfs")]
    vfs: PathBuf,

    /// Path the session log is written to on exit
    #[arg(short = 'l', long = "logfile")]
    logfile: PathBuf,

    /// Startup script, one command per line, run before interactive input
    #[arg(short = 's', long = "startup")]
    startup: Option<PathBuf>,

    /// Resolve cd paths with a leading slash from the root instead of
    /// the current directory (historical behavior is always-relative)
    #[arg(long = "rooted-cd")]
    rooted_cd: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let recorder = SessionRecorder::create(&cli.logfile)
        .with_context(|| format!("cannot open log destination: {}", cli.logfile.display()))?;

    let entries = load_archive(&cli.vfs).context("cannot load virtual filesystem")?;
    info!(entries = entries.len(), archive = %cli.vfs.display(), "virtual filesystem loaded");
    let vfs = build_tree(&entries);

    let mut emulator = Emulator::new(
        vfs,
        recorder,
        EmulatorOptions {
            user: cli.user,
            rooted_cd: cli.rooted_cd,
        },
    );

    // Startup script runs to completion before any interactive input;
    // an `exit` line inside it ends the session there.
    if let Some(ref script_path) = cli.startup {
        let script = std::fs::read_to_string(script_path)
            .with_context(|| format!("cannot read startup script: {}", script_path.display()))?;
        for line in script.lines() {
            match emulator.process(line.trim()).await? {
                Dispatch::Output(output) => println!("{}", output),
                Dispatch::Exit => return Ok(()),
            }
        }
        info!(script = %script_path.display(), "startup script finished");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}", emulator.prompt());
        std::io::stdout().flush().context("cannot write prompt")?;

        // The interrupt is only observed between commands; each command
        // runs to completion once its line has been read.
        tokio::select! {
            line = lines.next_line() => match line.context("cannot read input")? {
                Some(line) => match emulator.process(&line).await? {
                    Dispatch::Output(output) => println!("{}", output),
                    Dispatch::Exit => break,
                },
                None => {
                    // EOF on stdin ends the session like an interrupt.
                    println!();
                    emulator.shutdown()?;
                    break;
                }
            },
            _ = tokio::signal::ctrl_c() => {
                println!("\nSession ended.");
                emulator.shutdown()?;
                break;
            }
        }
    }

    Ok(())
}
