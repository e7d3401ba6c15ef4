//! Command-line interface for dirsum.
//!
//! This binary provides access to the dirsum library functionality,
//! summarizing a directory tree into a Markdown document.

use clap::{Parser, ValueEnum};
use dirsum::{SummaryBuilder, SummaryOptions, default_output_name, output, project_name, summarize};
use std::path::PathBuf;
use std::process::exit;

/// dirsum — directory tree summarizer
#[derive(Parser)]
#[command(name = "dirsum", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Extra ignore patterns (can be repeated)
    #[arg(short = 'i', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Only include files with these extensions, e.g. ".py" (can be repeated)
    #[arg(short = 't', long = "type")]
    file_types: Vec<String>,

    /// Output file (default <project>_summary.md inside the root)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print to stdout in the given format instead of writing the output file
    #[arg(long, value_enum)]
    print: Option<PrintFormat>,

    /// Disable .gitignore handling
    #[arg(long)]
    no_gitignore: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PrintFormat {
    Markdown,
    Json,
}

impl Cli {
    fn into_options(self) -> (SummaryOptions, Option<PrintFormat>) {
        let mut builder = SummaryBuilder::new(self.root)
            .respect_gitignore(!self.no_gitignore)
            .ignore_patterns(self.ignore_patterns)
            .file_types(self.file_types);
        if let Some(output) = self.output {
            builder = builder.output(output);
        }
        (builder.build(), self.print)
    }
}

fn main() {
    let cli = Cli::parse();
    let (options, print) = cli.into_options();

    let name = project_name(&options.root);
    let destination = options
        .output
        .clone()
        .unwrap_or_else(|| options.root.join(default_output_name(&name)));

    let doc = match summarize(options) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    match print {
        Some(PrintFormat::Markdown) => {
            print!("{}", output::render(&name, &doc));
        }
        Some(PrintFormat::Json) => {
            let json = serde_json::to_string_pretty(&doc).unwrap_or_else(|e| {
                eprintln!("JSON serialization error: {}", e);
                exit(1);
            });
            println!("{}", json);
        }
        None => {
            if let Err(e) = output::write_summary(&name, &doc, &destination) {
                eprintln!("Error: {}", e);
                exit(1);
            }
            println!("Wrote {}", destination.display());
        }
    }
}
