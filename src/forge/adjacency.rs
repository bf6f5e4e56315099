//! Bounded-degree adjacency tables built from the bond list.
//!
//! Every atom gets up to [`MAX_VALENCE`] neighbour slots and the same number
//! of incident-bond slots, both ordered by neighbour index so that everything
//! derived from them is independent of the order bonds were supplied in.

use super::error::Error;
use crate::model::system::{Bond, System};
use crate::model::topology::{Interactions, MAX_VALENCE, Slots};

#[derive(Debug, Clone)]
pub struct Adjacency {
    /// Canonical bonds in input order.
    pub bonds: Interactions<Bond>,
    /// Bonded neighbours of each atom.
    pub atoms_to_atoms: Vec<Slots>,
    /// Positions in `bonds` of the bonds incident to each atom, aligned
    /// slot-for-slot with `atoms_to_atoms`.
    pub atoms_to_bonds: Vec<Slots>,
}

impl Adjacency {
    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms_to_atoms.len()
    }

    /// Bonded neighbours of `atom` in ascending index order.
    #[inline]
    pub fn neighbors(&self, atom: u32) -> impl Iterator<Item = u32> + '_ {
        self.atoms_to_atoms[atom as usize]
            .iter()
            .map_while(|slot| *slot)
    }

    #[inline]
    pub fn are_bonded(&self, a: u32, b: u32) -> bool {
        self.neighbors(a).any(|n| n == b)
    }
}

/// Builds the adjacency tables for `system`.
///
/// # Errors
///
/// - [`Error::EmptySystem`] if there are no atoms.
/// - [`Error::InvalidBond`] for an out-of-range index, a self bond, or a bond
///   listed twice.
/// - [`Error::ExcessiveValence`] if an atom has more than [`MAX_VALENCE`] bonds.
/// - [`Error::IndexOverflow`] if the atom count does not fit in `u32`.
pub fn build(system: &System) -> Result<Adjacency, Error> {
    if system.atoms.is_empty() {
        return Err(Error::EmptySystem);
    }

    let n_atoms = system.atom_count();
    let atom_limit = u32::try_from(n_atoms).map_err(|_| Error::IndexOverflow {
        collection: "atoms",
        count: n_atoms,
    })?;

    let mut bonds = Interactions::new();
    let mut incident: Vec<Vec<(u32, u32)>> = vec![Vec::new(); n_atoms];

    for &raw in &system.bonds {
        let bond = Bond::new(raw.i, raw.j);
        if bond.j >= atom_limit {
            return Err(Error::invalid_bond(
                bond.i,
                bond.j,
                format!("atom index out of bounds (n_atoms = {})", n_atoms),
            ));
        }
        if bond.is_self_bond() {
            return Err(Error::invalid_bond(bond.i, bond.j, "atom bonded to itself"));
        }

        let (position, inserted) = bonds.insert(bond, "bonds")?;
        if !inserted {
            return Err(Error::invalid_bond(
                bond.i,
                bond.j,
                format!("duplicate of bond {}", position),
            ));
        }

        incident[bond.i as usize].push((bond.j, position));
        incident[bond.j as usize].push((bond.i, position));
    }

    let mut atoms_to_atoms = Vec::with_capacity(n_atoms);
    let mut atoms_to_bonds = Vec::with_capacity(n_atoms);
    for (atom, mut entries) in incident.into_iter().enumerate() {
        if entries.len() > MAX_VALENCE {
            return Err(Error::ExcessiveValence {
                atom: atom as u32,
                degree: entries.len(),
                max: MAX_VALENCE,
            });
        }
        entries.sort_unstable();

        let mut neighbor_slots: Slots = [None; MAX_VALENCE];
        let mut bond_slots: Slots = [None; MAX_VALENCE];
        for (slot, (neighbor, bond)) in entries.into_iter().enumerate() {
            neighbor_slots[slot] = Some(neighbor);
            bond_slots[slot] = Some(bond);
        }
        atoms_to_atoms.push(neighbor_slots);
        atoms_to_bonds.push(bond_slots);
    }

    log::debug!(
        "adjacency: {} atoms, {} bonds",
        atoms_to_atoms.len(),
        bonds.len()
    );

    Ok(Adjacency {
        bonds,
        atoms_to_atoms,
        atoms_to_bonds,
    })
}
