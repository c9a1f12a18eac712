use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use harlog_cli::{OutputFormat, commands};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "harlog")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Read, inspect and rewrite HTTP Archive (HAR) 1.2 files",
    long_about = "harlog decodes HAR 1.2 documents into a typed model and encodes them back, \
                  normalizing formatting and reporting what a capture contains."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format for reports
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a HAR file and write it back out, normalized
    Fmt {
        /// Path to the HAR file (use - for stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit single-line JSON instead of indented output
        #[arg(long)]
        compact: bool,
    },

    /// Show version, creator and counts for a HAR file
    Info {
        /// Path to the HAR file (use - for stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Generate shell completion scripts
    #[command(after_help = "SUPPORTED SHELLS: bash, zsh, fish, powershell, elvish\n\n\
                            INSTALLATION:\n  \
                            bash: harlog completion --shell bash >> ~/.bashrc\n  \
                            zsh:  harlog completion --shell zsh > ~/.zfunc/_harlog")]
    Completion {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    match cli.command {
        Commands::Fmt {
            file,
            output,
            compact,
        } => commands::fmt::execute(&file, output, compact),
        Commands::Info { file } => commands::info::execute(&file, cli.format),
        Commands::Completion { shell } => {
            commands::completion::execute(shell, &mut Cli::command())
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("harlog=debug,harlog_cli=debug,harlog_core=debug")
    } else {
        EnvFilter::new("harlog=info,harlog_cli=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
