use std::path::PathBuf;

use charforge::{AppError, GenerationInputs, OutputFormat, ParseOptions};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "charforge")]
#[command(version)]
#[command(about = "Generate character sheet fields from templated prompts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the messages a generation would send
    #[clap(visible_alias = "p")]
    Preview {
        #[command(flatten)]
        inputs: InputArgs,
        /// Print messages as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run a generation against the host fixture and print the field text
    #[clap(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        inputs: InputArgs,
    },
    /// Extract a field value from a saved model response
    Parse {
        /// Response format: xml, json or none
        #[arg(short, long)]
        format: OutputFormat,
        /// Field identifier (XML tag / JSON key)
        #[arg(long)]
        field: String,
        /// Response file (defaults to stdin)
        file: Option<PathBuf>,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Generation request (JSON)
    #[arg(short, long)]
    request: PathBuf,
    /// Host fixture (JSON)
    #[arg(long)]
    host: PathBuf,
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl From<InputArgs> for GenerationInputs {
    fn from(args: InputArgs) -> Self {
        GenerationInputs { request: args.request, host: args.host, config: args.config }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Preview { inputs, json } => {
            charforge::preview(&inputs.into()).await.and_then(|messages| {
                if json {
                    let rendered = serde_json::to_string_pretty(&messages).map_err(|err| {
                        AppError::Internal(format!("Failed to serialize messages: {}", err))
                    })?;
                    println!("{}", rendered);
                } else {
                    println!("{}", charforge::render_text(&messages));
                }
                Ok(())
            })
        }
        Commands::Generate { inputs } => {
            charforge::generate(&inputs.into()).await.map(|value| println!("{}", value))
        }
        Commands::Parse { format, field, file } => {
            charforge::parse(&ParseOptions { format, field, input: file })
                .map(|value| println!("{}", value))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
