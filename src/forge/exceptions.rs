//! Nonbonded exception pairs derived from angles and torsions.

use super::enumerate::Topology;
use crate::model::system::Bond;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exceptions {
    /// Endpoints of every angle.
    pub exceptions_13: Vec<Bond>,
    /// Endpoints of every torsion that are not already 1-3 partners.
    pub exceptions_14: Vec<Bond>,
}

pub fn compute(topology: &Topology) -> Exceptions {
    let mut seen_13 = HashSet::new();
    let exceptions_13: Vec<Bond> = topology
        .angles
        .indices()
        .iter()
        .map(|angle| Bond::new(angle.i, angle.k))
        .filter(|pair| seen_13.insert(*pair))
        .collect();

    // In a five-membered ring the ends of a torsion also meet across the ring.
    let mut seen_14 = HashSet::new();
    let exceptions_14: Vec<Bond> = topology
        .torsions
        .indices()
        .iter()
        .map(|torsion| Bond::new(torsion.i, torsion.l))
        .filter(|pair| !seen_13.contains(pair) && seen_14.insert(*pair))
        .collect();

    log::debug!(
        "derived {} 1-3 and {} 1-4 nonbonded exceptions",
        exceptions_13.len(),
        exceptions_14.len()
    );

    Exceptions {
        exceptions_13,
        exceptions_14,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forge::{adjacency, enumerate};
    use crate::model::system::System;

    fn exceptions_for(atom_count: usize, bonds: &[[u32; 2]]) -> Exceptions {
        let sys = System::from_atomic_numbers(&vec![6; atom_count], bonds).unwrap();
        let adj = adjacency::build(&sys).unwrap();
        compute(&enumerate::enumerate(&adj).unwrap())
    }

    #[test]
    fn butane_pairs() {
        let ex = exceptions_for(4, &[[0, 1], [1, 2], [2, 3]]);
        assert_eq!(ex.exceptions_13, vec![Bond::new(0, 2), Bond::new(1, 3)]);
        assert_eq!(ex.exceptions_14, vec![Bond::new(0, 3)]);
    }

    #[test]
    fn cyclopentane_has_no_1_4_pairs() {
        let bonds: Vec<[u32; 2]> = (0..5).map(|i| [i, (i + 1) % 5]).collect();
        let ex = exceptions_for(5, &bonds);
        assert_eq!(ex.exceptions_13.len(), 5);
        assert!(ex.exceptions_14.is_empty());
    }

    #[test]
    fn cyclohexane_deduplicates_para_pairs() {
        let bonds: Vec<[u32; 2]> = (0..6).map(|i| [i, (i + 1) % 6]).collect();
        let ex = exceptions_for(6, &bonds);
        assert_eq!(ex.exceptions_13.len(), 6);
        assert_eq!(ex.exceptions_14.len(), 3);
        assert!(ex.exceptions_14.contains(&Bond::new(0, 3)));
    }
}
