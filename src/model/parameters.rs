use super::system::Bond;
use super::topology::{Angle, Interactions, Offset, Ring, Slots, Torsion};
use super::types::{Element, RingType};
use crate::forge::Error;
use std::ops::Range;

/// Per-atom tables of a parameterised system.
#[derive(Debug, Clone, PartialEq)]
pub struct Atoms {
    pub(crate) elements: Vec<Element>,
    pub(crate) masses: Vec<f64>,
    pub(crate) ring_types: Vec<RingType>,
    pub(crate) atoms_to_atoms_map: Vec<Slots>,
    pub(crate) atoms_to_bonds_map: Vec<Slots>,
    pub(crate) atoms_to_rigid_bodies_map: Vec<u32>,
}

impl Atoms {
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn atomic_numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.elements.iter().map(Element::atomic_number)
    }

    /// Masses in amu after hydrogen mass repartitioning.
    #[inline]
    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    #[inline]
    pub fn ring_types(&self) -> &[RingType] {
        &self.ring_types
    }

    /// Bonded neighbours of every atom, ascending, unused slots `None`.
    #[inline]
    pub fn atoms_to_atoms_map(&self) -> &[Slots] {
        &self.atoms_to_atoms_map
    }

    /// Bond positions incident to every atom, aligned with
    /// [`atoms_to_atoms_map`](Self::atoms_to_atoms_map).
    #[inline]
    pub fn atoms_to_bonds_map(&self) -> &[Slots] {
        &self.atoms_to_bonds_map
    }

    #[inline]
    pub fn atoms_to_rigid_bodies_map(&self) -> &[u32] {
        &self.atoms_to_rigid_bodies_map
    }
}

/// Bonded topology, ring classification, and rigid-body layout of a system.
///
/// Produced by [`forge`](crate::forge). The only mutation allowed afterwards
/// is [`append`](Parameters::append), which concatenates another parameter
/// set behind this one.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub(crate) atoms: Atoms,
    pub(crate) bonds: Interactions<Bond>,
    pub(crate) angles: Interactions<Angle>,
    pub(crate) torsions: Interactions<Torsion>,
    pub(crate) rings: Interactions<Ring>,
    pub(crate) rigid_bodies: Vec<Range<u32>>,
    pub(crate) nonbonded_exceptions_13: Vec<Bond>,
    pub(crate) nonbonded_exceptions_14: Vec<Bond>,
}

impl Parameters {
    #[inline]
    pub fn atoms(&self) -> &Atoms {
        &self.atoms
    }

    #[inline]
    pub fn bonds(&self) -> &Interactions<Bond> {
        &self.bonds
    }

    #[inline]
    pub fn angles(&self) -> &Interactions<Angle> {
        &self.angles
    }

    #[inline]
    pub fn torsions(&self) -> &Interactions<Torsion> {
        &self.torsions
    }

    #[inline]
    pub fn rings(&self) -> &Interactions<Ring> {
        &self.rings
    }

    /// Contiguous atom ranges of the rigid bodies, sorted and gap-free.
    #[inline]
    pub fn rigid_bodies(&self) -> &[Range<u32>] {
        &self.rigid_bodies
    }

    #[inline]
    pub fn nonbonded_exceptions_13(&self) -> &[Bond] {
        &self.nonbonded_exceptions_13
    }

    #[inline]
    pub fn nonbonded_exceptions_14(&self) -> &[Bond] {
        &self.nonbonded_exceptions_14
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Appends `other` behind this parameter set.
    ///
    /// Atom indices of `other` are shifted by the current atom count, its
    /// bond positions by the current bond count, and its rigid-body indices
    /// by the current rigid-body count. The result is identical to running
    /// [`forge`](crate::forge) on the concatenated system.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOverflow`] if any combined collection would no
    /// longer be addressable with `u32`; `self` is left unchanged.
    pub fn append(&mut self, other: &Parameters) -> Result<(), Error> {
        let atom_delta = combined_len("atoms", self.atoms.len(), 0)?;
        let bond_delta = combined_len("bonds", self.bonds.len(), 0)?;
        let body_delta = combined_len("rigid bodies", self.rigid_bodies.len(), 0)?;

        combined_len("atoms", self.atoms.len(), other.atoms.len())?;
        combined_len("bonds", self.bonds.len(), other.bonds.len())?;
        combined_len("angles", self.angles.len(), other.angles.len())?;
        combined_len("torsions", self.torsions.len(), other.torsions.len())?;
        combined_len("rings", self.rings.len(), other.rings.len())?;
        combined_len(
            "rigid bodies",
            self.rigid_bodies.len(),
            other.rigid_bodies.len(),
        )?;

        let atoms = &mut self.atoms;
        atoms.elements.extend_from_slice(&other.atoms.elements);
        atoms.masses.extend_from_slice(&other.atoms.masses);
        atoms.ring_types.extend_from_slice(&other.atoms.ring_types);
        atoms.atoms_to_atoms_map.extend(
            other
                .atoms
                .atoms_to_atoms_map
                .iter()
                .map(|slots| slots.offset(atom_delta)),
        );
        atoms.atoms_to_bonds_map.extend(
            other
                .atoms
                .atoms_to_bonds_map
                .iter()
                .map(|slots| slots.offset(bond_delta)),
        );
        atoms.atoms_to_rigid_bodies_map.extend(
            other
                .atoms
                .atoms_to_rigid_bodies_map
                .iter()
                .map(|body| body + body_delta),
        );

        self.bonds.append_offset(&other.bonds, atom_delta);
        self.angles.append_offset(&other.angles, atom_delta);
        self.torsions.append_offset(&other.torsions, atom_delta);
        self.rings.append_offset(&other.rings, atom_delta);

        self.rigid_bodies.extend(
            other
                .rigid_bodies
                .iter()
                .map(|range| range.offset(atom_delta)),
        );
        self.nonbonded_exceptions_13.extend(
            other
                .nonbonded_exceptions_13
                .iter()
                .map(|pair| pair.offset(atom_delta)),
        );
        self.nonbonded_exceptions_14.extend(
            other
                .nonbonded_exceptions_14
                .iter()
                .map(|pair| pair.offset(atom_delta)),
        );

        log::debug!(
            "appended {} atoms; system now has {} atoms in {} rigid bodies",
            other.atom_count(),
            self.atom_count(),
            self.rigid_bodies.len()
        );

        Ok(())
    }
}

fn combined_len(collection: &'static str, current: usize, added: usize) -> Result<u32, Error> {
    let count = current.saturating_add(added);
    u32::try_from(count).map_err(|_| Error::IndexOverflow { collection, count })
}
