//! Galaxy map loading.
//!
//! A galaxy map is the ordered, non-empty list of ports a navigation room works
//! with. Maps are read from CSV (`name,kind,x,y,z,upgrades`) or taken from the
//! built-in default galaxy. The first port is where every ship starts.

use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::info;

use crate::error::{Error, Result};
use crate::ports::{Position, Shipyard, SpacePort};
use crate::ship::RoomKind;

/// One row of a galaxy map CSV file.
#[derive(Debug, Clone, Deserialize)]
struct PortRecord {
    name: String,
    kind: String,
    x: i32,
    y: i32,
    z: i32,
    #[serde(default)]
    upgrades: Option<String>,
}

impl PortRecord {
    fn into_port(self, row: usize) -> Result<SpacePort> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::MapDataValidation {
                message: format!("port name must not be empty (row {row})"),
            });
        }
        let position = Position::new(self.x, self.y, self.z);

        match self.kind.trim().to_ascii_lowercase().as_str() {
            "spaceport" | "port" => Ok(SpacePort::new(name, position)),
            "store" => Ok(SpacePort::store(name, position)),
            "shipyard" => {
                let upgrades = parse_upgrades(self.upgrades.as_deref().unwrap_or(""), &name)?;
                Ok(SpacePort::shipyard(name, position, Shipyard::new(upgrades)))
            }
            other => Err(Error::MapDataValidation {
                message: format!("unknown port kind '{other}' for port '{name}' at row {row}"),
            }),
        }
    }
}

fn parse_upgrades(value: &str, port: &str) -> Result<Vec<RoomKind>> {
    value
        .split(';')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            name.parse::<RoomKind>()
                .map_err(|_| Error::MapDataValidation {
                    message: format!("shipyard '{port}' lists unknown room '{name}'"),
                })
        })
        .collect()
}

/// An ordered set of uniquely named ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalaxyMap {
    ports: Vec<SpacePort>,
    source: Option<PathBuf>,
}

impl GalaxyMap {
    /// Build a map from ports, checking that it is non-empty with unique names.
    pub fn new(ports: Vec<SpacePort>) -> Result<Self> {
        if ports.is_empty() {
            return Err(Error::MapDataValidation {
                message: "galaxy map must contain at least one port".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for port in &ports {
            if !seen.insert(port.name()) {
                return Err(Error::DuplicatePortName {
                    name: port.name().to_string(),
                });
            }
        }

        Ok(Self {
            ports,
            source: None,
        })
    }

    /// Load a galaxy map from a CSV file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut map = Self::from_reader(file)?;
        map.source = Some(path.to_path_buf());
        info!(
            ports = map.len(),
            path = %path.display(),
            "loaded galaxy map"
        );
        Ok(map)
    }

    /// Load a galaxy map from CSV held by any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

        let mut ports = Vec::new();
        // Row 1 is the header.
        for (index, record) in csv_reader.deserialize::<PortRecord>().enumerate() {
            let row = index + 2;
            let record = record.map_err(|err| Error::MapDataValidation {
                message: format!("row {row}: {err}"),
            })?;
            ports.push(record.into_port(row)?);
        }

        Self::new(ports)
    }

    /// The default galaxy used when no map file is configured.
    pub fn builtin() -> Self {
        let both = || Shipyard::new(vec![RoomKind::CargoHold, RoomKind::NavigationRoom]);
        let ports = vec![
            SpacePort::new("Earth", Position::new(0, 0, 0)),
            SpacePort::store("Luna Market", Position::new(60, 30, 0)),
            SpacePort::shipyard("Mars Shipyard", Position::new(150, 100, 50), both()),
            SpacePort::new("Ceres Outpost", Position::new(300, 0, 0)),
            SpacePort::new("Vega Station", Position::new(-350, -200, 100)),
            SpacePort::store("Titan Depot", Position::new(0, 450, 100)),
            SpacePort::shipyard(
                "Proxima Yards",
                Position::new(600, 600, 0),
                Shipyard::new(vec![RoomKind::NavigationRoom]),
            ),
            SpacePort::store("Kepler Exchange", Position::new(900, 100, 300)),
        ];
        Self {
            ports,
            source: None,
        }
    }

    pub fn ports(&self) -> &[SpacePort] {
        &self.ports
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    /// Always false: a map holds at least one port.
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&SpacePort> {
        self.ports.iter().find(|port| port.name() == name)
    }

    /// Get the source path if the map was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn into_ports(self) -> Vec<SpacePort> {
        self.ports
    }
}

impl Default for GalaxyMap {
    fn default() -> Self {
        Self::builtin()
    }
}
