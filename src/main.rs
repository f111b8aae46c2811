use clap::{CommandFactory, Parser};
use miette::IntoDiagnostic;
use std::fs;
use std::path::PathBuf;

/// Compile line-oriented field specification files into Go struct
/// definitions with JSON tags.
#[derive(Parser, Debug)]
#[command(name = "fieldspec", version, about)]
struct Cli {
    /// A spec file, one field per line; the struct name is taken from the
    /// file stem. With --package, a directory of spec files.
    input: Option<PathBuf>,

    /// Compile every spec file in the INPUT directory into one Go source
    /// file carrying this package clause.
    #[arg(long)]
    package: Option<String>,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // A missing input path is informational, not a failure.
    let Some(input) = cli.input.as_ref() else {
        Cli::command().print_help().into_diagnostic()?;
        return Ok(());
    };

    let output = match cli.package.as_deref() {
        Some(package) => fieldspec::generate_package(input, package)?,
        None => fieldspec::generate_path(input)?.to_source(),
    };

    match cli.out.as_ref() {
        Some(path) => fs::write(path, &output).into_diagnostic()?,
        None => print!("{output}"),
    }

    Ok(())
}
