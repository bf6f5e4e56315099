//! Angle and torsion enumeration by walking the adjacency tables.
//!
//! Each angle is recorded only from the endpoint with the smaller index and
//! each torsion only in its canonical direction (see [`Torsion`]), so no
//! mirrored duplicate is ever produced. The same walk rejects three- and
//! four-membered rings.

use super::adjacency::Adjacency;
use super::error::Error;
use crate::model::topology::{Angle, Interactions, Torsion};

/// Angles and torsions derived from the bond graph.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    pub angles: Interactions<Angle>,
    pub torsions: Interactions<Torsion>,
}

/// Shortest ring size MM4 can parameterise.
const MIN_RING_SIZE: u8 = 5;

pub fn enumerate(adjacency: &Adjacency) -> Result<Topology, Error> {
    let mut topology = Topology::default();

    for a1 in 0..adjacency.atom_count() as u32 {
        // Fewest hops along which a simple path returns to `a1`.
        let mut closure_hops: Option<u8> = None;

        for a2 in adjacency.neighbors(a1) {
            for a3 in adjacency.neighbors(a2) {
                if a3 == a1 {
                    continue;
                }
                if a1 < a3 {
                    topology.angles.insert(Angle { i: a1, j: a2, k: a3 }, "angles")?;
                }

                for a4 in adjacency.neighbors(a3) {
                    if a4 == a2 {
                        continue;
                    }
                    if a4 == a1 {
                        return Err(Error::SmallRing { atom: a1, size: 3 });
                    }
                    if adjacency.are_bonded(a4, a1) {
                        closure_hops = Some(closure_hops.map_or(4, |hops| hops.min(4)));
                    }
                    if Torsion::is_canonical_order(a1, a2, a3, a4) {
                        let torsion = Torsion {
                            i: a1,
                            j: a2,
                            k: a3,
                            l: a4,
                        };
                        topology.torsions.insert(torsion, "torsions")?;
                    }
                }
            }
        }

        if let Some(size) = closure_hops.filter(|&hops| hops < MIN_RING_SIZE) {
            return Err(Error::SmallRing { atom: a1, size });
        }
    }

    log::debug!(
        "enumerated {} angles and {} torsions",
        topology.angles.len(),
        topology.torsions.len()
    );

    Ok(topology)
}
