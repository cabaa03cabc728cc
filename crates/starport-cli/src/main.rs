use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use starport_cli::commands::{galaxy, play, ports, status, ShipConfig};
use starport_cli::terminal::ColorPalette;
use starport_lib::ship::RoomTier;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fly a spaceship between ports, trade and upgrade")]
struct Cli {
    /// Galaxy map CSV file (falls back to STARPORT_GALAXY_MAP, then the built-in map).
    #[arg(long, global = true)]
    map: Option<PathBuf>,

    /// Ship name.
    #[arg(long, global = true, default_value = "Nomad")]
    name: String,

    /// Ship owner.
    #[arg(long, global = true, default_value = "Captain")]
    owner: String,

    /// Ship registry id.
    #[arg(long, global = true, default_value = "SP-001")]
    id: String,

    /// Cargo hold tier: BASIC, AVERAGE or PRIME.
    #[arg(long, global = true, default_value = "BASIC")]
    cargo_tier: RoomTier,

    /// Navigation room tier: BASIC, AVERAGE or PRIME.
    #[arg(long, global = true, default_value = "BASIC")]
    nav_tier: RoomTier,

    /// Disable ANSI colors.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Take the helm: read commands from stdin until `exit` (default).
    Play,
    /// List the ports of the galaxy map.
    Ports,
    /// Print a newly commissioned ship.
    Status,
}

impl Cli {
    fn ship_config(&self) -> ShipConfig {
        ShipConfig {
            name: self.name.clone(),
            owner: self.owner.clone(),
            id: self.id.clone(),
            cargo_tier: self.cargo_tier,
            nav_tier: self.nav_tier,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let palette = ColorPalette::for_flag(cli.no_color);
    let galaxy = galaxy::load_galaxy(cli.map.as_deref())?;
    let config = cli.ship_config();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => play::handle_play(&config, galaxy, palette),
        Command::Ports => ports::handle_list_ports(&galaxy, palette),
        Command::Status => status::handle_status(&config, galaxy),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
