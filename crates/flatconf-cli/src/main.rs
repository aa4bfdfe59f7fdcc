use std::{env, path::PathBuf, process};

use clap::Parser;
use flatconf::{build_sequence, Environment};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// File to resolve the effective configuration for; prints the whole
    /// composed sequence when omitted
    pub input: Option<PathBuf>,

    /// Project root used for dependency probes
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Runtime mode, overriding the NODE_ENV lookup
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let root = match cli.root {
        Some(root) => root,
        None => env::current_dir().map_err(|err| format!("Failed to get cwd: {err}"))?,
    };

    let mut environment = Environment::detect(&root);
    if let Some(mode) = cli.mode {
        environment = environment.with_mode(mode);
    }

    let sequence =
        build_sequence(&environment).map_err(|err| format!("Failed to build config: {err}"))?;

    let output = match &cli.input {
        Some(path) => {
            let rel_path = path.strip_prefix(&root).unwrap_or(path);
            if sequence.is_ignored(rel_path) {
                return Ok(());
            }
            let effective = sequence.resolve(rel_path);
            serde_json::to_string_pretty(&effective)
        }
        None => serde_json::to_string_pretty(&sequence),
    }
    .map_err(|err| format!("Failed to serialize config: {err}"))?;

    println!("{output}");
    Ok(())
}
