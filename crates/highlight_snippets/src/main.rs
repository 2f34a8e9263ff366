use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::env;
use std::fs;

// Library dependencies.
use find_snippet_files::find_snippet_files_in_dir;
use transcode_markers::transcode;

/// Name of the output subdirectory. It must already exist and be
/// writable; it is never created here.
const OUT_DIR_NAME: &str = "out";

fn main() -> Result<()> {
    let matches = Command::new("highlight_snippets")
        .version("0.1.0")
        .about("Rewrites marker-tagged snippet files into HTML fragments with highlighting spans")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
        .get_matches();

    let verbose = *matches.get_one::<bool>("verbose").unwrap();

    // 1. Resolve the snippet directory and check the output directory.
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    println!("--------------------------------------------------");
    println!("Snippet directory: {}", current_dir.display());

    let out_dir = current_dir.join(OUT_DIR_NAME);
    if !out_dir.is_dir() {
        eprintln!(
            "Error: output directory '{}' does not exist.",
            out_dir.display()
        );
        std::process::exit(1);
    }

    // 2. List the snippet files to process.
    let snippet_files = find_snippet_files_in_dir(&current_dir, verbose)
        .context("Failed to list snippet files")?;
    println!("Found {} snippet file(s)", snippet_files.len());
    println!("--------------------------------------------------");

    // 3. Transcode each file and write it under the same name in out/.
    for path in &snippet_files {
        let file_name = path.file_name().unwrap_or_default();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?;
        let html = transcode(&content)
            .with_context(|| format!("Failed to transcode '{}'", path.display()))?;
        let out_path = out_dir.join(file_name);
        fs::write(&out_path, html)
            .with_context(|| format!("Failed to write '{}'", out_path.display()))?;
        println!("Highlighted {}", file_name.to_string_lossy());
    }

    println!("--------------------------------------------------");
    println!(
        "Done: {} file(s) written to '{}'",
        snippet_files.len(),
        out_dir.display()
    );

    Ok(())
}
