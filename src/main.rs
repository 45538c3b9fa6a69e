use clap::{Parser, Subcommand};
use formkit::cli;
use formkit::error::FormkitResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "formkit")]
#[command(about = "Authoring tools for YAML form definitions")]
#[command(long_about = "Formkit - YAML form definition tooling

COMMANDS:
  preview - Render a form document to a self-contained HTML preview
  check   - Parse form documents and report YAML errors

EXAMPLES:
  formkit preview onboarding.yaml               # Write onboarding.html
  formkit preview onboarding.yaml --watch       # Re-render on save
  formkit check forms/*.yaml                    # Validate documents

Editor completion ships as a separate language-server binary: formkit-lsp")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Render a form document to a complete HTML page.

The output is self-contained: inline styles, no scripts, no external
resources. A document that fails to parse renders as an inline error panel,
so the preview file always reflects the latest save.

WATCH MODE:
  --watch keeps running and re-renders whenever the source file changes
  (debounced). Point a browser at the output file and reload after saving.

EXAMPLES:
  formkit preview onboarding.yaml
  formkit preview onboarding.yaml -o /tmp/preview.html --watch")]
    /// Render a form document to an HTML preview
    Preview {
        /// Path to the form YAML file
        file: PathBuf,

        /// Output HTML path (defaults to the input path with .html)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Re-render whenever the source file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Parse form documents and report YAML errors
    Check {
        /// Paths to form YAML file(s)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> FormkitResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Preview {
            file,
            output,
            watch,
        } => cli::preview(file, output, watch),

        Commands::Check { files } => cli::check(files),
    }
}
