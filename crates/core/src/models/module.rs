use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::RoomError;

/// The six building sections shown on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingModule {
    #[serde(rename = "Módulo A")]
    ModuloA,
    #[serde(rename = "Módulo B")]
    ModuloB,
    #[serde(rename = "Módulo C")]
    ModuloC,
    #[serde(rename = "Módulo D")]
    ModuloD,
    #[serde(rename = "Módulo Psicología")]
    ModuloPsicologia,
    Laboratorios,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    Building,
    Laboratory,
}

impl BuildingModule {
    /// Modules in the order the picker lists them.
    pub const ALL: [BuildingModule; 6] = [
        BuildingModule::ModuloA,
        BuildingModule::ModuloB,
        BuildingModule::ModuloC,
        BuildingModule::ModuloD,
        BuildingModule::ModuloPsicologia,
        BuildingModule::Laboratorios,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuildingModule::ModuloA => "Módulo A",
            BuildingModule::ModuloB => "Módulo B",
            BuildingModule::ModuloC => "Módulo C",
            BuildingModule::ModuloD => "Módulo D",
            BuildingModule::ModuloPsicologia => "Módulo Psicología",
            BuildingModule::Laboratorios => "Laboratorios",
        }
    }

    /// ASCII identifier used in URLs.
    pub fn slug(self) -> &'static str {
        match self {
            BuildingModule::ModuloA => "modulo-a",
            BuildingModule::ModuloB => "modulo-b",
            BuildingModule::ModuloC => "modulo-c",
            BuildingModule::ModuloD => "modulo-d",
            BuildingModule::ModuloPsicologia => "modulo-psicologia",
            BuildingModule::Laboratorios => "laboratorios",
        }
    }

    pub fn kind(self) -> ModuleKind {
        match self {
            BuildingModule::Laboratorios => ModuleKind::Laboratory,
            _ => ModuleKind::Building,
        }
    }
}

impl fmt::Display for BuildingModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts either the display name or the slug.
impl FromStr for BuildingModule {
    type Err = RoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuildingModule::ALL
            .into_iter()
            .find(|module| module.name() == s || module.slug() == s)
            .ok_or_else(|| RoomError::Validation(format!("Unknown module: {}", s)))
    }
}
