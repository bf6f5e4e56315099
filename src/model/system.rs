use super::atom::Atom;
use super::types::Element;
use crate::forge::Error;

/// Covalent bond stored canonically as `(min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bond {
    pub i: u32,
    pub j: u32,
}

impl Bond {
    pub fn new(idx1: u32, idx2: u32) -> Self {
        if idx1 <= idx2 {
            Self { i: idx1, j: idx2 }
        } else {
            Self { i: idx2, j: idx1 }
        }
    }

    #[inline]
    pub fn is_self_bond(&self) -> bool {
        self.i == self.j
    }

    /// Returns the partner of `atom` in this bond, if `atom` is an endpoint.
    #[inline]
    pub fn other(&self, atom: u32) -> Option<u32> {
        if atom == self.i {
            Some(self.j)
        } else if atom == self.j {
            Some(self.i)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct System {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a system from raw atomic numbers and index pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownElement`] for an atomic number the force field
    /// does not parameterise. Bond indices are validated later by
    /// [`forge`](crate::forge).
    pub fn from_atomic_numbers(atomic_numbers: &[u8], bonds: &[[u32; 2]]) -> Result<Self, Error> {
        let atoms = atomic_numbers
            .iter()
            .enumerate()
            .map(|(index, &z)| {
                Element::try_from(z)
                    .map(Atom::new)
                    .map_err(|atomic_number| Error::UnknownElement {
                        atom: index,
                        atomic_number,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let bonds = bonds.iter().map(|&[a, b]| Bond::new(a, b)).collect();

        Ok(Self { atoms, bonds })
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bond_new_is_canonical() {
        assert_eq!(Bond::new(5, 2), Bond { i: 2, j: 5 });
        assert_eq!(Bond::new(2, 5), Bond::new(5, 2));
    }

    #[test]
    fn bond_other_endpoint() {
        let bond = Bond::new(3, 7);
        assert_eq!(bond.other(3), Some(7));
        assert_eq!(bond.other(7), Some(3));
        assert_eq!(bond.other(4), None);
    }

    #[test]
    fn self_bond_survives_canonicalization() {
        assert!(Bond::new(4, 4).is_self_bond());
        assert!(!Bond::new(4, 5).is_self_bond());
    }

    #[test]
    fn from_atomic_numbers_builds_methane() {
        let sys = System::from_atomic_numbers(&[6, 1, 1, 1, 1], &[[1, 0], [0, 2], [3, 0], [0, 4]])
            .unwrap();
        assert_eq!(sys.atom_count(), 5);
        assert_eq!(sys.bond_count(), 4);
        assert_eq!(sys.atoms[0].element, Element::C);
        assert_eq!(sys.bonds[0], Bond { i: 0, j: 1 });
    }

    #[test]
    fn from_atomic_numbers_rejects_unknown_element() {
        let result = System::from_atomic_numbers(&[6, 26], &[[0, 1]]);
        assert!(matches!(
            result,
            Err(Error::UnknownElement {
                atom: 1,
                atomic_number: 26
            })
        ));
    }
}
