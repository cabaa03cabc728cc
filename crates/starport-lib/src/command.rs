//! Text commands understood by a [`Ship`](crate::ship::Ship).
//!
//! The grammar mirrors the action strings the ship advertises. Listed `repair`,
//! `upgrade`, `fly to` and `jump to` actions can be typed back as-is, cost and port
//! annotations included. An advertised `buy KIND 1..MAX` range needs a concrete amount
//! instead (`buy TRITIUM 50`).

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A request dispatched to a ship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShipCommand {
    /// Print one room's status.
    ShowRoom(String),
    FlyTo(String),
    JumpTo(String),
    /// Spend a repair kit to restore a room.
    RepairRoom(String),
    /// Upgrade a room at the current shipyard.
    UpgradeRoom(String),
    PurchaseItem {
        item: String,
        amount: i32,
    },
    ShowPort,
    ShowActions,
    ShowShip,
}

impl fmt::Display for ShipCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipCommand::ShowRoom(room) => write!(f, "show {room}"),
            ShipCommand::FlyTo(port) => write!(f, "fly to \"{port}\""),
            ShipCommand::JumpTo(port) => write!(f, "jump to \"{port}\""),
            ShipCommand::RepairRoom(room) => write!(f, "repair {room}"),
            ShipCommand::UpgradeRoom(room) => write!(f, "upgrade {room}"),
            ShipCommand::PurchaseItem { item, amount } => write!(f, "buy {item} {amount}"),
            ShipCommand::ShowPort => f.write_str("port"),
            ShipCommand::ShowActions => f.write_str("actions"),
            ShipCommand::ShowShip => f.write_str("ship"),
        }
    }
}

impl FromStr for ShipCommand {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = strip_cost(line.trim());
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "show" | "room" => Ok(ShipCommand::ShowRoom(required(verb, rest)?)),
            "fly" => Ok(ShipCommand::FlyTo(port_argument(verb, rest)?)),
            "jump" => Ok(ShipCommand::JumpTo(port_argument(verb, rest)?)),
            "repair" => Ok(ShipCommand::RepairRoom(required(verb, rest)?)),
            "upgrade" => Ok(ShipCommand::UpgradeRoom(required(verb, rest)?)),
            "buy" => parse_purchase(rest),
            "port" => no_arguments(verb, rest, ShipCommand::ShowPort),
            "actions" => no_arguments(verb, rest, ShipCommand::ShowActions),
            "ship" | "status" => no_arguments(verb, rest, ShipCommand::ShowShip),
            "" => Err(Error::invalid("empty command")),
            other => Err(Error::invalid(format!("unknown command: {other}"))),
        }
    }
}

/// Drop a trailing ` [COST: ...]` annotation.
fn strip_cost(line: &str) -> &str {
    match line.rfind(" [COST:") {
        Some(index) if line.ends_with(']') => line[..index].trim_end(),
        _ => line,
    }
}

fn required(verb: &str, rest: &str) -> Result<String> {
    if rest.is_empty() {
        return Err(Error::invalid(format!("{verb} needs an argument")));
    }
    Ok(rest.to_string())
}

fn no_arguments(verb: &str, rest: &str, command: ShipCommand) -> Result<ShipCommand> {
    if !rest.is_empty() {
        return Err(Error::invalid(format!("{verb} takes no arguments")));
    }
    Ok(command)
}

/// Accepts `to` before the name. A quoted name may be followed by a `: PORT: ...`
/// description, which is ignored.
fn port_argument(verb: &str, rest: &str) -> Result<String> {
    let name = match rest.split_once(char::is_whitespace) {
        Some((to, name)) if to.eq_ignore_ascii_case("to") => name.trim(),
        None if rest.eq_ignore_ascii_case("to") => "",
        _ => rest,
    };
    let name = match name.strip_prefix('"').and_then(|n| n.split_once('"')) {
        Some((quoted, tail)) if tail.is_empty() || tail.starts_with(':') => quoted,
        _ => name,
    };
    required(verb, name)
}

fn parse_purchase(rest: &str) -> Result<ShipCommand> {
    let mut parts = rest.split_whitespace();
    let (Some(item), Some(amount), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(Error::invalid("usage: buy <ITEM> <AMOUNT>"));
    };
    let amount: i32 = amount
        .parse()
        .map_err(|_| Error::invalid(format!("amount must be a whole number, got {amount}")))?;
    if amount <= 0 {
        return Err(Error::invalid(format!(
            "amount must be positive, got {amount}"
        )));
    }
    Ok(ShipCommand::PurchaseItem {
        item: item.to_string(),
        amount,
    })
}
