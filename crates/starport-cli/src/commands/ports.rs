//! Ports command handler for listing the galaxy map.

use anyhow::Result;

use starport_lib::{GalaxyMap, SpacePort};

use crate::terminal::ColorPalette;

/// Handle the ports subcommand.
pub fn handle_list_ports(galaxy: &GalaxyMap, palette: ColorPalette) -> Result<()> {
    print!("{}", render_ports(galaxy, palette));
    Ok(())
}

/// Every port with its services and distance from the starting port.
pub fn render_ports(galaxy: &GalaxyMap, palette: ColorPalette) -> String {
    let source = galaxy
        .source_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());
    let mut out = format!(
        "{}\n",
        palette.paint(
            palette.white_bold,
            &format!("Galaxy map ({} ports, {source}):", galaxy.len())
        )
    );

    let Some(start) = galaxy.ports().first() else {
        return out;
    };
    for port in galaxy.ports() {
        out.push_str(&format!(
            "{} {}\n",
            port,
            palette.paint(palette.gray, &distance_note(start, port))
        ));
        for action in port.actions() {
            out.push_str(&format!("    {action}\n"));
        }
    }
    out
}

fn distance_note(start: &SpacePort, port: &SpacePort) -> String {
    if start.name() == port.name() {
        "[start]".to_string()
    } else {
        format!("[{} from {}]", start.distance_to(port), start.name())
    }
}
