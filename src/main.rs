use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;

use mdhtml::{extract_title, render_with};

#[derive(Parser)]
#[command(name = "mdhtml")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Converts Markdown documents to HTML")]
struct Cli {
    /// Input Markdown file (stdin if not provided)
    file: Option<PathBuf>,

    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the document title instead of the HTML
    #[arg(long)]
    title: bool,

    /// Check that the document renders without printing it
    #[arg(long, conflicts_with = "title")]
    check: bool,

    /// Write the HTML to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn source_name(input_path: &Option<PathBuf>) -> String {
    input_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string())
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let start_dir = start_dir_for(&cli.file)?;
    let (cfg, source) = mdhtml::config::load(cli.config.as_deref(), &start_dir)?;
    log::debug!("Using config from {source}");

    let input = read_all(cli.file.as_ref())?;
    let name = source_name(&cli.file);

    let result = if cli.title {
        extract_title(&input)
    } else {
        render_with(&input, &cfg)
    };

    let output = match result {
        Ok(output) => output,
        Err(e) => {
            eprintln!("{name}: {e}");
            std::process::exit(1);
        }
    };

    if cli.check {
        println!("{name} renders cleanly");
    } else if let Some(out_path) = &cli.output {
        if let Some(parent) = out_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(out_path, &output)?;
        println!("Wrote {}", out_path.display());
    } else if cli.title {
        println!("{output}");
    } else {
        print!("{output}");
    }

    Ok(())
}
