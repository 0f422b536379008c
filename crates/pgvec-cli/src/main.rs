//! pgvec CLI - encode/decode halfvec values and look up the type OID

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "pgvec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up the OID the extension's type was assigned on a database
    ResolveOid {
        /// Connection string of the target database
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,

        /// Extension that installs the type
        #[arg(long, default_value = pgvec_core::EXTENSION_NAME)]
        extension: String,

        /// Catalog name of the type
        #[arg(long, default_value = pgvec_core::TYPE_NAME)]
        type_name: String,

        /// Connection timeout in milliseconds (unbounded when omitted)
        #[arg(long)]
        timeout_ms: Option<u64>,
    },

    /// Print the binary wire form of a `[v1,v2,...]` literal as hex
    Encode {
        /// Vector literal, e.g. "[0.5,1,2]"
        literal: String,
    },

    /// Print the text form of a hex-encoded binary value
    Decode {
        /// Hex-encoded binary value, or a text literal with --text
        input: String,

        /// Treat the input as a text literal instead of hex
        #[arg(long)]
        text: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::ResolveOid {
            database_url,
            extension,
            type_name,
            timeout_ms,
        } => {
            let mut config = pgvec_core::ResolverConfig::new(database_url)
                .with_extension_name(extension)
                .with_type_name(type_name);
            if let Some(timeout_ms) = timeout_ms {
                config = config.with_connect_timeout_ms(timeout_ms);
            }
            commands::resolve::execute(config).await?;
        }
        Commands::Encode { literal } => {
            println!("{}", commands::codec::encode(&literal)?);
        }
        Commands::Decode { input, text } => {
            println!("{}", commands::codec::decode(&input, text)?);
        }
    }

    Ok(())
}
