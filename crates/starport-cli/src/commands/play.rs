//! Play command handler.

use std::io;

use anyhow::{Context, Result};

use starport_lib::GalaxyMap;

use super::ShipConfig;
use crate::session::Session;
use crate::terminal::ColorPalette;

/// Run an interactive session on stdin/stdout.
pub fn handle_play(config: &ShipConfig, galaxy: GalaxyMap, palette: ColorPalette) -> Result<()> {
    let ship = config.build(galaxy)?;
    let mut session = Session::new(ship, palette);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    session
        .run(stdin.lock(), &mut stdout)
        .context("interactive session failed")
}
