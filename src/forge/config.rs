use super::error::Error;
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    /// Mass in amu moved from each heavy atom to every hydrogen bonded to it.
    pub hydrogen_mass_repartitioning: f64,
    pub level_of_theory: LevelOfTheory,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            hydrogen_mass_repartitioning: 1.0,
            level_of_theory: LevelOfTheory::MolecularMechanics,
        }
    }
}

impl ForgeConfig {
    /// Parses a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml(toml: &str) -> Result<Self, Error> {
        let config: ForgeConfig = toml::from_str(toml)?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.level_of_theory != LevelOfTheory::MolecularMechanics {
            return Err(Error::UnsupportedLevelOfTheory(self.level_of_theory));
        }

        let hmr = self.hydrogen_mass_repartitioning;
        if !hmr.is_finite() || hmr < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "hydrogen mass repartitioning must be finite and non-negative, got {hmr}"
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelOfTheory {
    #[default]
    MolecularMechanics,
    RigidBodyMechanics,
}

impl fmt::Display for LevelOfTheory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelOfTheory::MolecularMechanics => f.write_str("molecular_mechanics"),
            LevelOfTheory::RigidBodyMechanics => f.write_str("rigid_body_mechanics"),
        }
    }
}
