use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod build;
mod document;
mod logging;
mod render;
mod source;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "openrpc-assembler")]
#[command(about = "Assemble JSON fragments into one OpenRPC document", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge fragments, validate, and write the document.
    Build {
        /// Directory holding src/{methods,schemas,content,errors}.
        #[arg(long, default_value = ".")]
        root: PathBuf,

        #[arg(short = 'o', long, default_value = "openrpc.json")]
        out: PathBuf,

        /// Inline local $ref pointers instead of preserving them.
        #[arg(long)]
        dereference: bool,
    },
    /// Merge and validate without writing anything.
    Check {
        #[arg(long, default_value = ".")]
        root: PathBuf,

        #[arg(long)]
        dereference: bool,
    },
}

fn main() -> Result<()> {
    logging::init_logging();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Build {
            root,
            out,
            dereference,
        } => {
            let config = build::BuildConfig {
                root,
                out,
                dereference,
            };
            build::run_build(&config)?;
            println!("Build successful.");
        }
        Commands::Check { root, dereference } => {
            let config = build::BuildConfig {
                out: PathBuf::new(),
                root,
                dereference,
            };
            build::run_check(&config)?;
            println!("Check passed.");
        }
    }

    Ok(())
}
