//! Ring-type assignment.
//!
//! Everything starts as [`RingType::Six`]. Each detected ring then marks its
//! atoms, its bonds, and the angles and torsions running around it as
//! [`RingType::Five`].

use super::enumerate::Topology;
use super::error::Error;
use crate::model::system::Bond;
use crate::model::topology::{Angle, Interactions, Ring, Torsion};
use crate::model::types::RingType;

/// Applies ring membership to every collection and returns the per-atom ring
/// types.
///
/// # Errors
///
/// Returns [`Error::MissingRingMember`] if a ring walks over a bond, angle, or
/// torsion absent from the enumerated topology.
pub fn classify(
    atom_count: usize,
    bonds: &mut Interactions<Bond>,
    topology: &mut Topology,
    rings: &mut Interactions<Ring>,
) -> Result<Vec<RingType>, Error> {
    let mut atom_ring_types = vec![RingType::Six; atom_count];

    for position in 0..rings.len() as u32 {
        let ring = rings.indices()[position as usize];
        let members: Vec<u32> = ring.atoms().collect();
        let n = members.len();
        let at = |offset: usize| members[offset % n];

        for s in 0..n {
            atom_ring_types[at(s) as usize] = RingType::Five;

            let bond = Bond::new(at(s), at(s + 1));
            let index = bonds
                .position(&bond)
                .ok_or_else(|| Error::missing_ring_member(&ring, "bond", &[bond.i, bond.j]))?;
            bonds.set_ring_type(index, RingType::Five);

            let angle = Angle::new(at(s), at(s + 1), at(s + 2));
            let index = topology.angles.position(&angle).ok_or_else(|| {
                Error::missing_ring_member(&ring, "angle", &[angle.i, angle.j, angle.k])
            })?;
            topology.angles.set_ring_type(index, RingType::Five);

            let torsion = Torsion::new(at(s), at(s + 1), at(s + 2), at(s + 3));
            let index = topology.torsions.position(&torsion).ok_or_else(|| {
                Error::missing_ring_member(
                    &ring,
                    "torsion",
                    &[torsion.i, torsion.j, torsion.k, torsion.l],
                )
            })?;
            topology.torsions.set_ring_type(index, RingType::Five);
        }

        rings.set_ring_type(position, RingType::Five);
    }

    Ok(atom_ring_types)
}
