mod adjacency;
mod classify;
mod config;
mod enumerate;
mod error;
mod exceptions;
mod masses;
mod rigid;
mod rings;

pub use config::{ForgeConfig, LevelOfTheory};
pub use error::{Error, ErrorKind};

use crate::model::parameters::{Atoms, Parameters};
use crate::model::system::System;

pub fn forge(system: &System, config: &ForgeConfig) -> Result<Parameters, Error> {
    config.validate()?;

    let mut adjacency = adjacency::build(system)?;

    let mut topology = enumerate::enumerate(&adjacency)?;

    let mut rings = rings::detect(&adjacency, &topology.torsions)?;

    let ring_types = classify::classify(
        adjacency.atom_count(),
        &mut adjacency.bonds,
        &mut topology,
        &mut rings,
    )?;

    let rigid_bodies = rigid::partition(&adjacency)?;

    let masses = masses::repartition(
        system,
        &adjacency.bonds,
        config.hydrogen_mass_repartitioning,
    )?;

    let exceptions = exceptions::compute(&topology);

    log::info!(
        "forged {} atoms: {} bonds, {} angles, {} torsions, {} rings, {} rigid bodies",
        system.atom_count(),
        adjacency.bonds.len(),
        topology.angles.len(),
        topology.torsions.len(),
        rings.len(),
        rigid_bodies.ranges.len()
    );

    Ok(Parameters {
        atoms: Atoms {
            elements: system.atoms.iter().map(|atom| atom.element).collect(),
            masses,
            ring_types,
            atoms_to_atoms_map: adjacency.atoms_to_atoms,
            atoms_to_bonds_map: adjacency.atoms_to_bonds,
            atoms_to_rigid_bodies_map: rigid_bodies.atoms_to_rigid_bodies,
        },
        bonds: adjacency.bonds,
        angles: topology.angles,
        torsions: topology.torsions,
        rings,
        rigid_bodies: rigid_bodies.ranges,
        nonbonded_exceptions_13: exceptions.exceptions_13,
        nonbonded_exceptions_14: exceptions.exceptions_14,
    })
}
