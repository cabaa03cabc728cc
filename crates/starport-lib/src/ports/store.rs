use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::resources::{ResourceContainer, Supply};
use crate::ship::{CargoHold, RoomTier};

/// Sells repair kits and fuel out of its own cargo hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    hold: CargoHold,
}

impl Store {
    /// A store holding one full container of every [`Supply`].
    pub fn new() -> Self {
        let stock = Supply::ALL
            .into_iter()
            .map(|supply| supply.container(supply.maximum_capacity()))
            .collect();
        Self {
            hold: CargoHold::preloaded(RoomTier::Average, stock),
        }
    }

    pub fn hold(&self) -> &CargoHold {
        &self.hold
    }

    /// Stock left of `supply`.
    pub fn total(&self, supply: Supply) -> i32 {
        self.hold.total_supply(supply)
    }

    /// Sell `amount` of `item`, returning a new container for the buyer.
    ///
    /// # Errors
    /// - [`Error::InsufficientResources`] if `item` is not sold here or the stock is
    ///   below `amount`.
    /// - [`Error::InvalidArgument`] if `amount` is not positive.
    pub fn purchase(&mut self, item: &str, amount: i32) -> Result<ResourceContainer> {
        let supply: Supply = item.parse().map_err(|_| {
            warn!(item, "store does not sell item");
            Error::insufficient(format!("The specified resource does not exist: {item}"))
        })?;

        self.hold.consume_supply(supply, amount)?;
        info!(item = supply.as_str(), amount, "purchased from store");
        Ok(supply.container(amount))
    }

    /// `buy KIND 1..MAX` for each supply still in stock, in hold order.
    pub fn actions(&self) -> Vec<String> {
        let mut listed: Vec<Supply> = Vec::new();
        for container in self.hold.resources() {
            if container.amount() <= 0 {
                continue;
            }
            let Some(supply) = Supply::ALL.into_iter().find(|s| s.matches(container)) else {
                continue;
            };
            if !listed.contains(&supply) {
                listed.push(supply);
            }
        }
        listed
            .into_iter()
            .map(|supply| format!("buy {} 1..{}", supply, self.total(supply)))
            .collect()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
