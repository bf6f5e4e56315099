//! Rigid-body partitioning.
//!
//! Bonded clusters are found with a disjoint-set union over the bond list.
//! Each cluster must occupy a consecutive run of atom indices and the runs
//! must tile `0..atom_count`, because the simulation engine lays rigid bodies
//! out as contiguous atom ranges.

use super::adjacency::Adjacency;
use super::error::Error;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RigidBodies {
    /// Atom ranges, sorted by lower bound.
    pub ranges: Vec<Range<u32>>,
    /// Index into `ranges` for every atom.
    pub atoms_to_rigid_bodies: Vec<u32>,
}

/// Union-find whose roots also own the member lists of their sets.
struct DisjointSet {
    parent: Vec<u32>,
    members: Vec<Vec<u32>>,
}

impl DisjointSet {
    fn new(n: u32) -> Self {
        Self {
            parent: (0..n).collect(),
            members: (0..n).map(|atom| vec![atom]).collect(),
        }
    }

    fn find(&mut self, atom: u32) -> u32 {
        let mut root = atom;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut current = atom;
        while current != root {
            let next = self.parent[current as usize];
            self.parent[current as usize] = root;
            current = next;
        }
        root
    }

    /// Merges the sets of `a` and `b`. The larger set survives; on a tie the
    /// set of `b` does.
    fn union(&mut self, a: u32, b: u32) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return;
        }

        let (survivor, absorbed) =
            if self.members[root_a as usize].len() > self.members[root_b as usize].len() {
                (root_a, root_b)
            } else {
                (root_b, root_a)
            };

        let moved = std::mem::take(&mut self.members[absorbed as usize]);
        self.members[survivor as usize].extend(moved);
        self.parent[absorbed as usize] = survivor;
    }

    /// Consumes the forest and returns the member list of every root.
    fn into_groups(self) -> impl Iterator<Item = Vec<u32>> {
        let parent = self.parent;
        self.members
            .into_iter()
            .enumerate()
            .filter(move |(root, _)| parent[*root] == *root as u32)
            .map(|(_, members)| members)
    }
}

pub fn partition(adjacency: &Adjacency) -> Result<RigidBodies, Error> {
    let atom_count = adjacency.atom_count();
    let mut sets = DisjointSet::new(atom_count as u32);
    for bond in adjacency.bonds.indices() {
        sets.union(bond.i, bond.j);
    }

    let mut ranges = Vec::new();
    for mut group in sets.into_groups() {
        group.sort_unstable();
        let (Some(&first), Some(&last)) = (group.first(), group.last()) else {
            continue;
        };

        for (offset, &atom) in group.iter().enumerate() {
            let expected = first + offset as u32;
            if atom != expected {
                return Err(Error::NonContiguousRigidBody {
                    first,
                    last,
                    missing: expected,
                });
            }
        }
        ranges.push(first..last + 1);
    }
    ranges.sort_unstable_by_key(|range| range.start);

    validate_coverage(&ranges, atom_count)?;

    let mut atoms_to_rigid_bodies = vec![0; atom_count];
    for (body, range) in ranges.iter().enumerate() {
        for atom in range.clone() {
            atoms_to_rigid_bodies[atom as usize] = body as u32;
        }
    }

    log::debug!("partitioned {} atoms into {} rigid bodies", atom_count, ranges.len());

    Ok(RigidBodies {
        ranges,
        atoms_to_rigid_bodies,
    })
}

fn validate_coverage(ranges: &[Range<u32>], atom_count: usize) -> Result<(), Error> {
    let Some(first) = ranges.first() else {
        return Err(Error::rigid_body_coverage(atom_count, "no rigid bodies"));
    };
    if first.start != 0 {
        return Err(Error::rigid_body_coverage(
            atom_count,
            format!("first rigid body starts at atom {}", first.start),
        ));
    }

    for pair in ranges.windows(2) {
        if pair[0].end != pair[1].start {
            return Err(Error::rigid_body_coverage(
                atom_count,
                format!(
                    "rigid body {}..{} is followed by {}..{}",
                    pair[0].start, pair[0].end, pair[1].start, pair[1].end
                ),
            ));
        }
    }

    let end = ranges.last().map_or(first.end, |last| last.end);
    if end as usize != atom_count {
        return Err(Error::rigid_body_coverage(
            atom_count,
            format!("last rigid body ends at atom {}", end),
        ));
    }

    Ok(())
}
