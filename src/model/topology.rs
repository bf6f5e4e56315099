use super::system::Bond;
use super::types::RingType;
use crate::forge::Error;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Range;

/// Maximum coordination number assumed by the MM4 valence model.
pub const MAX_VALENCE: usize = 4;

/// Slot count of a [`Ring`]; only the first five are used by supported rings.
pub const RING_CAPACITY: usize = 8;

/// Fixed-width neighbour table of one atom. Unused slots are `None`.
pub type Slots = [Option<u32>; MAX_VALENCE];

/// Shifts every atom index held by a value when parameter sets are concatenated.
pub trait Offset {
    fn offset(&self, delta: u32) -> Self;
}

impl Offset for Bond {
    fn offset(&self, delta: u32) -> Self {
        Bond {
            i: self.i + delta,
            j: self.j + delta,
        }
    }
}

impl Offset for Slots {
    fn offset(&self, delta: u32) -> Self {
        self.map(|slot| slot.map(|index| index + delta))
    }
}

impl Offset for Range<u32> {
    fn offset(&self, delta: u32) -> Self {
        (self.start + delta)..(self.end + delta)
    }
}

/// Bond angle `i-j-k` with `j` at the vertex, stored with `i < k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Angle {
    pub i: u32,
    pub j: u32,
    pub k: u32,
}

impl Angle {
    pub fn new(i: u32, j: u32, k: u32) -> Self {
        if i < k {
            Self { i, j, k }
        } else {
            Self { i: k, j, k: i }
        }
    }
}

impl Offset for Angle {
    fn offset(&self, delta: u32) -> Self {
        Self {
            i: self.i + delta,
            j: self.j + delta,
            k: self.k + delta,
        }
    }
}

/// Proper torsion `i-j-k-l` about the central bond `j-k`.
///
/// Of the two traversal directions, the one with `j > k` is kept (falling
/// back to `i > l` when the central atoms coincide).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Torsion {
    pub i: u32,
    pub j: u32,
    pub k: u32,
    pub l: u32,
}

impl Torsion {
    pub fn new(i: u32, j: u32, k: u32, l: u32) -> Self {
        if Self::is_canonical_order(i, j, k, l) {
            Self { i, j, k, l }
        } else {
            Self {
                i: l,
                j: k,
                k: j,
                l: i,
            }
        }
    }

    #[inline]
    pub fn is_canonical_order(i: u32, j: u32, k: u32, l: u32) -> bool {
        j > k || (j == k && i > l)
    }
}

impl Offset for Torsion {
    fn offset(&self, delta: u32) -> Self {
        Self {
            i: self.i + delta,
            j: self.j + delta,
            k: self.k + delta,
            l: self.l + delta,
        }
    }
}

/// Closed path of bonded atoms.
///
/// The smallest atom index sits in slot 0 and the path runs toward the larger
/// of its two ring neighbours. Slots past the ring size are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ring {
    slots: [Option<u32>; RING_CAPACITY],
}

impl Ring {
    /// Canonicalises a cycle given in traversal order (either direction,
    /// any starting atom).
    ///
    /// Returns `None` for an empty cycle or one longer than [`RING_CAPACITY`].
    pub fn from_cycle(cycle: &[u32]) -> Option<Self> {
        let n = cycle.len();
        if n == 0 || n > RING_CAPACITY {
            return None;
        }

        let anchor = (0..n).min_by_key(|&pos| cycle[pos])?;
        let next = cycle[(anchor + 1) % n];
        let previous = cycle[(anchor + n - 1) % n];
        let forward = next >= previous;

        let mut slots = [None; RING_CAPACITY];
        for (step, slot) in slots.iter_mut().take(n).enumerate() {
            let pos = if forward {
                (anchor + step) % n
            } else {
                (anchor + n - step) % n
            };
            *slot = Some(cycle[pos]);
        }

        Some(Self { slots })
    }

    #[inline]
    pub fn slots(&self) -> &[Option<u32>; RING_CAPACITY] {
        &self.slots
    }

    /// Ring members in canonical traversal order.
    pub fn atoms(&self) -> impl Iterator<Item = u32> + '_ {
        self.slots.iter().map_while(|slot| *slot)
    }

    pub fn len(&self) -> usize {
        self.atoms().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots[0].is_none()
    }

    pub fn contains(&self, atom: u32) -> bool {
        self.atoms().any(|a| a == atom)
    }
}

impl Offset for Ring {
    fn offset(&self, delta: u32) -> Self {
        Self {
            slots: self.slots.map(|slot| slot.map(|index| index + delta)),
        }
    }
}

/// Deduplicated, insertion-ordered collection of canonical index tuples.
///
/// Holds the tuples in discovery order, a lookup from tuple to position, and
/// a ring type per position.
#[derive(Debug, Clone, PartialEq)]
pub struct Interactions<T: Copy + Eq + Hash> {
    indices: Vec<T>,
    map: HashMap<T, u32>,
    ring_types: Vec<RingType>,
}

impl<T: Copy + Eq + Hash> Default for Interactions<T> {
    fn default() -> Self {
        Self {
            indices: Vec::new(),
            map: HashMap::new(),
            ring_types: Vec::new(),
        }
    }
}

impl<T: Copy + Eq + Hash> Interactions<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn indices(&self) -> &[T] {
        &self.indices
    }

    #[inline]
    pub fn ring_types(&self) -> &[RingType] {
        &self.ring_types
    }

    #[inline]
    pub fn position(&self, item: &T) -> Option<u32> {
        self.map.get(item).copied()
    }

    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.map.contains_key(item)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, RingType)> + '_ {
        self.indices.iter().zip(self.ring_types.iter().copied())
    }

    /// Appends `item` unless already present and returns its position along
    /// with whether it was newly inserted.
    pub(crate) fn insert(
        &mut self,
        item: T,
        collection: &'static str,
    ) -> Result<(u32, bool), Error> {
        if let Some(&position) = self.map.get(&item) {
            return Ok((position, false));
        }

        let position = u32::try_from(self.indices.len()).map_err(|_| Error::IndexOverflow {
            collection,
            count: self.indices.len() + 1,
        })?;
        self.indices.push(item);
        self.map.insert(item, position);
        self.ring_types.push(RingType::default());
        Ok((position, true))
    }

    pub(crate) fn set_ring_type(&mut self, position: u32, ring_type: RingType) {
        if let Some(slot) = self.ring_types.get_mut(position as usize) {
            *slot = ring_type;
        }
    }
}

impl<T: Copy + Eq + Hash + Offset> Interactions<T> {
    /// Appends every entry of `other` with atom indices shifted by `delta`.
    ///
    /// The caller guarantees that the shifted indices and the combined
    /// length fit in `u32`.
    pub(crate) fn append_offset(&mut self, other: &Self, delta: u32) {
        let base = self.indices.len() as u32;
        self.indices.reserve(other.len());
        self.map.reserve(other.len());
        for (position, item) in other.indices.iter().enumerate() {
            let shifted = item.offset(delta);
            self.indices.push(shifted);
            self.map.insert(shifted, base + position as u32);
        }
        self.ring_types.extend_from_slice(&other.ring_types);
    }
}
