//! Five-membered ring detection.
//!
//! A torsion `a1-a2-a3-a4` lies on a five-membered ring when some neighbour of
//! `a4` is also a neighbour of `a1` (other than `a2`). Smaller rings are already
//! rejected by the enumerator, so the five atoms are always distinct.

use super::adjacency::Adjacency;
use super::error::Error;
use crate::model::topology::{Interactions, Ring, Torsion};

pub fn detect(
    adjacency: &Adjacency,
    torsions: &Interactions<Torsion>,
) -> Result<Interactions<Ring>, Error> {
    let mut rings = Interactions::new();

    for torsion in torsions.indices() {
        for a5 in adjacency.neighbors(torsion.l) {
            if a5 == torsion.k || a5 == torsion.i {
                continue;
            }
            let closes = adjacency
                .neighbors(torsion.i)
                .any(|n| n != torsion.j && n == a5);
            if !closes {
                continue;
            }

            let cycle = [torsion.i, torsion.j, torsion.k, torsion.l, a5];
            if let Some(ring) = Ring::from_cycle(&cycle) {
                let (position, inserted) = rings.insert(ring, "rings")?;
                if inserted {
                    log::trace!("ring {} discovered from torsion {:?}", position, torsion);
                }
            }
        }
    }

    log::debug!("detected {} five-membered rings", rings.len());

    Ok(rings)
}
