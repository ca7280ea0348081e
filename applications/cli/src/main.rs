/// Wavedock - waveform, browse and volume tooling for static music sites
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wavedock_cli::{commands, Settings, VolumeAction};

#[derive(Parser)]
#[command(name = "wavedock")]
#[command(about = "Wavedock site tooling", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "WAVEDOCK_CONFIG_PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the symbol values of an encoded peak string
    Decode {
        /// Encoded peaks, as found in `data-peaks`
        peaks: String,
    },
    /// Render the waveforms of a page manifest as SVG
    Render {
        /// Page manifest (JSON)
        #[arg(short, long)]
        manifest: PathBuf,
        /// Observed container widths in px; the narrowest wins
        #[arg(short, long, required = true, num_args = 1..)]
        width: Vec<f64>,
        /// Output directory; markup is printed when omitted
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Show what the browse overlay displays for a query
    Search {
        /// Catalog (JSON)
        #[arg(short, long)]
        catalog: PathBuf,
        /// Search query; the featured items are shown when omitted
        query: Option<String>,
    },
    /// Read or change the persisted volume
    Volume {
        #[command(subcommand)]
        action: VolumeCommand,
    },
}

#[derive(Subcommand)]
enum VolumeCommand {
    Get,
    /// Set an absolute level between 0 and 1
    Set { level: f64 },
    Up,
    Down,
    /// Mute, or restore when muted
    Mute,
}

impl From<VolumeCommand> for VolumeAction {
    fn from(command: VolumeCommand) -> Self {
        match command {
            VolumeCommand::Get => VolumeAction::Get,
            VolumeCommand::Set { level } => VolumeAction::Set(level),
            VolumeCommand::Up => VolumeAction::Up,
            VolumeCommand::Down => VolumeAction::Down,
            VolumeCommand::Mute => VolumeAction::Mute,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wavedock=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?;
    settings.validate()?;

    match cli.command {
        Commands::Decode { peaks } => {
            println!("{}", commands::decode_peaks(&peaks));
        }
        Commands::Render {
            manifest,
            width,
            out,
        } => {
            let files = commands::render_manifest(&manifest, &width, &settings.waveform)?;
            match out {
                Some(dir) => {
                    let written = commands::write_waveforms(&dir, &files)?;
                    tracing::info!("Rendered {} waveforms into {}", written.len(), dir.display());
                }
                None => {
                    for file in &files {
                        println!("<!-- {}. {} -->", file.number, file.title);
                        println!("{}", file.markup);
                    }
                }
            }
        }
        Commands::Search { catalog, query } => {
            let report = commands::search_catalog(&catalog, query.as_deref(), &settings.strings)?;
            print!("{}", report);
        }
        Commands::Volume { action } => {
            let report = commands::volume(
                action.into(),
                &settings.storage.preferences_path,
                &settings.player,
                &settings.strings,
            )?;
            println!("{}", report);
        }
    }

    Ok(())
}
