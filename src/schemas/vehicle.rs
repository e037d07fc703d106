use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vehicle category used for browsing and pricing grouping.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum VehicleClass {
    #[default]
    A,
    B,
    C,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 3] = [VehicleClass::A, VehicleClass::B, VehicleClass::C];

    pub fn letter(&self) -> &'static str {
        match self {
            VehicleClass::A => "A",
            VehicleClass::B => "B",
            VehicleClass::C => "C",
        }
    }

    pub fn label(&self) -> String {
        format!("Class {}", self.letter())
    }

    pub fn description(&self) -> &'static str {
        match self {
            VehicleClass::A => "Economy vehicles",
            VehicleClass::B => "Standard vehicles",
            VehicleClass::C => "Premium vehicles",
        }
    }

    /// Position within `ALL`, used by the selector for left/right cycling.
    pub fn index(&self) -> usize {
        match self {
            VehicleClass::A => 0,
            VehicleClass::B => 1,
            VehicleClass::C => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl FromStr for VehicleClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(VehicleClass::A),
            "B" => Ok(VehicleClass::B),
            "C" => Ok(VehicleClass::C),
            other => Err(format!("unknown vehicle class '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub class: VehicleClass,
}

impl Vehicle {
    pub fn new(id: impl Into<String>, name: impl Into<String>, class: VehicleClass) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            class,
        }
    }
}
