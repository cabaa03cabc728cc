use tracing::warn;

use crate::error::{Error, Result};
use crate::ship::{Room, RoomKind};

/// Upgrades the rooms on its allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Shipyard {
    upgradable: Vec<RoomKind>,
}

impl Shipyard {
    pub fn new(upgradable: Vec<RoomKind>) -> Self {
        Self { upgradable }
    }

    pub fn upgradable(&self) -> &[RoomKind] {
        &self.upgradable
    }

    pub fn can_upgrade(&self, kind: RoomKind) -> bool {
        self.upgradable.contains(&kind)
    }

    /// Upgrade `room`, which must be of `kind`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] when this shipyard does not work on `kind`;
    /// the room is left untouched.
    pub fn upgrade(&self, kind: RoomKind, room: &mut Room) -> Result<()> {
        if !self.can_upgrade(kind) {
            warn!(room = %kind, "shipyard cannot upgrade room");
            return Err(Error::invalid(format!("this shipyard cannot upgrade {kind}")));
        }
        room.upgrade();
        Ok(())
    }

    pub fn actions(&self) -> Vec<String> {
        self.upgradable
            .iter()
            .map(|kind| format!("upgrade {kind}"))
            .collect()
    }
}
