use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lisp2c::{Config, compile_with};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source file to compile; reads stdin when omitted
    input: Option<PathBuf>,

    /// YAML file with compiler settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the source and C trees before the generated code
    #[arg(long)]
    dump_trees: bool,

    /// Deepest call nesting to accept
    #[arg(long)]
    max_depth: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if cli.dump_trees {
        config.dump_trees = true;
    }
    if let Some(max_depth) = cli.max_depth {
        config.max_depth = max_depth;
    }
    config.validate()?;

    let source = if let Some(path) = &cli.input {
        fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Reading stdin")?;
        buffer
    };

    let compilation = compile_with(&source, &config).context("Compiling input")?;
    if let Some(dumps) = &compilation.dumps {
        print!("{}\n{}\n", dumps.source, dumps.target);
    }
    print!("{}", compilation.output);
    Ok(())
}
