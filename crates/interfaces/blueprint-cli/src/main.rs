use blueprint_cli::{commands, ParamArgs};
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about = "Headless driver for the Blueprint3D conversion pipeline")]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the conversion stages and their durations
    Stages,
    /// Convert a blueprint with the simulated pipeline
    Convert {
        image: Utf8PathBuf,
        #[command(flatten)]
        params: ParamArgs,
        #[arg(long, help = "Print the final run state as JSON")]
        json: bool,
    },
    /// Build and validate a parameter record without converting
    Params {
        #[command(flatten)]
        params: ParamArgs,
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install logger: {e}");
    }

    match cli.command {
        Commands::Stages => commands::cmd_stages(),
        Commands::Convert {
            image,
            params,
            json,
        } => commands::cmd_convert(image, &params, json).await?,
        Commands::Params { params, json } => commands::cmd_params(&params, json)?,
    }

    Ok(())
}
