//! Interactive command loop driving a [`Ship`].

use std::io::{self, BufRead, Write};

use tracing::debug;

use starport_lib::{Ship, ShipCommand};

use crate::terminal::ColorPalette;

/// Lines printed by `help`.
pub const HELP: &str = "\
Commands:
  ship | status             show the ship
  show <Room>               show CargoHold or NavigationRoom
  port                      show the current port and its services
  actions                   list everything the ship can do right now
  fly [to] <port>           fly to a port, burning TRITIUM
  jump [to] <port>          jump to a port, spending 1 HYPERDRIVE_CORE
  repair <Room>             spend 1 REPAIR_KIT to restore a room
  upgrade <Room>            upgrade a room at a shipyard
  buy <ITEM> <amount>       buy REPAIR_KIT, TRITIUM or HYPERDRIVE_CORE at a store
  help                      show this help
  exit | quit               leave the ship";

/// What a single input line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Command output; empty for silent successes.
    Output(String),
    /// A failed command or unparseable line.
    Failure(String),
    Help,
    Exit,
}

/// A player at the helm of one ship.
pub struct Session {
    ship: Ship,
    palette: ColorPalette,
}

impl Session {
    pub fn new(ship: Ship, palette: ColorPalette) -> Self {
        Self { ship, palette }
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Interpret one line of input.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "" => return Reply::Output(String::new()),
            "help" | "?" => return Reply::Help,
            "exit" | "quit" => return Reply::Exit,
            _ => {}
        }

        let command: ShipCommand = match line.parse() {
            Ok(command) => command,
            Err(err) => return Reply::Failure(format!("{err} (type `help` for commands)")),
        };
        debug!(%command, "dispatching");
        match self.ship.process_command(&command) {
            Ok(output) => Reply::Output(output),
            Err(err) => Reply::Failure(Ship::failure_report(&err)),
        }
    }

    /// Read commands from `input` until it ends or the player exits.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        let p = self.palette;
        writeln!(
            output,
            "Welcome aboard {}. Type {} for commands, {} to leave.",
            p.paint(p.white_bold, self.ship.name()),
            p.paint(p.green, "help"),
            p.paint(p.green, "exit")
        )?;
        writeln!(
            output,
            "{}",
            p.paint(p.gray, &self.ship.navigation_room().current_port().to_string())
        )?;

        let mut lines = input.lines();
        loop {
            write!(output, "{}", p.paint(p.prompt, "> "))?;
            output.flush()?;
            let Some(line) = lines.next() else {
                writeln!(output)?;
                break;
            };

            match self.handle_line(&line?) {
                Reply::Output(text) if text.is_empty() => {}
                Reply::Output(text) => writeln!(output, "{text}")?,
                Reply::Failure(text) => writeln!(output, "{}", p.paint(p.red, &text))?,
                Reply::Help => writeln!(output, "{HELP}")?,
                Reply::Exit => break,
            }
        }

        writeln!(output, "Safe travels, {}.", self.ship.owner())?;
        Ok(())
    }
}
