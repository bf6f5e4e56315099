//! Error types for MM4 topology construction.
//!
//! Every failure is fatal for the [`forge`](super::forge) call that raised it:
//! construction either succeeds completely or returns one of these errors and
//! no partial result. [`Error::kind`] groups the variants by who is at fault.

use super::config::LevelOfTheory;
use thiserror::Error;

/// Broad classification of a construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied inconsistent atoms, bonds, or settings.
    MalformedInput,
    /// The input is well formed but describes a topology MM4 cannot model.
    UnsupportedTopology,
    /// A derived structure disagrees with another one. Indicates a library bug
    /// or an index space that outgrew `u32`.
    InternalInconsistency,
}

/// Errors that can occur while building MM4 parameters.
#[derive(Debug, Error)]
pub enum Error {
    /// The input system contains no atoms.
    #[error("input system is empty: at least one atom is required")]
    EmptySystem,

    /// An atomic number outside the elements MM4 parameterises.
    #[error("atom {atom} has unsupported atomic number {atomic_number}")]
    UnknownElement {
        /// Atom index.
        atom: usize,
        /// Offending atomic number.
        atomic_number: u8,
    },

    /// Invalid bond definition in the input system.
    #[error("invalid bond between atoms {i} and {j}: {detail}")]
    InvalidBond {
        /// First atom index.
        i: u32,
        /// Second atom index.
        j: u32,
        /// Description of the problem.
        detail: String,
    },

    /// Failed to parse a TOML configuration.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration value is out of its valid domain.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Only molecular mechanics can be parameterised.
    #[error("level of theory '{0}' is not supported; only molecular mechanics is")]
    UnsupportedLevelOfTheory(LevelOfTheory),

    /// An atom has more bonded neighbours than the valence model allows.
    #[error("atom {atom} has {degree} bonds, more than the supported maximum of {max}")]
    ExcessiveValence {
        /// Atom index.
        atom: u32,
        /// Number of bonds found.
        degree: usize,
        /// Maximum coordination number.
        max: usize,
    },

    /// A three- or four-membered ring was found.
    #[error("atom {atom} is part of a {size}-membered ring, which is not supported")]
    SmallRing {
        /// An atom on the ring.
        atom: u32,
        /// Ring size.
        size: u8,
    },

    /// A bonded cluster does not occupy a consecutive run of atom indices.
    #[error(
        "rigid body spanning atoms {first}..={last} is not contiguous: atom {missing} belongs elsewhere"
    )]
    NonContiguousRigidBody {
        /// Smallest atom index in the cluster.
        first: u32,
        /// Largest atom index in the cluster.
        last: u32,
        /// First index inside the span that the cluster does not contain.
        missing: u32,
    },

    /// The rigid bodies do not tile the atom range exactly.
    #[error("rigid bodies do not cover atoms 0..{atom_count}: {detail}")]
    RigidBodyCoverage {
        /// Number of atoms in the system.
        atom_count: usize,
        /// Description of the gap or overlap.
        detail: String,
    },

    /// A ring references a bond, angle, or torsion that was never enumerated.
    #[error("ring {ring:?} references {collection} {members:?} missing from the topology")]
    MissingRingMember {
        /// Canonical ring atoms.
        ring: Vec<u32>,
        /// Name of the collection that lacks the entry.
        collection: &'static str,
        /// Atom indices of the missing entry.
        members: Vec<u32>,
    },

    /// A collection grew beyond what a `u32` index can address.
    #[error("{collection} index space overflowed at {count} entries")]
    IndexOverflow {
        /// Name of the collection.
        collection: &'static str,
        /// Number of entries that was requested.
        count: usize,
    },
}

impl Error {
    /// Returns the failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptySystem
            | Error::UnknownElement { .. }
            | Error::InvalidBond { .. }
            | Error::ConfigParse(_)
            | Error::InvalidConfig(_)
            | Error::UnsupportedLevelOfTheory(_) => ErrorKind::MalformedInput,
            Error::ExcessiveValence { .. }
            | Error::SmallRing { .. }
            | Error::NonContiguousRigidBody { .. }
            | Error::RigidBodyCoverage { .. } => ErrorKind::UnsupportedTopology,
            Error::MissingRingMember { .. } | Error::IndexOverflow { .. } => {
                ErrorKind::InternalInconsistency
            }
        }
    }

    /// Creates an [`InvalidBond`](Error::InvalidBond) error.
    ///
    /// # Arguments
    ///
    /// * `i` — First atom index
    /// * `j` — Second atom index
    /// * `details` — Description of the bond problem
    pub fn invalid_bond(i: u32, j: u32, details: impl Into<String>) -> Self {
        Self::InvalidBond {
            i,
            j,
            detail: details.into(),
        }
    }

    /// Creates a [`RigidBodyCoverage`](Error::RigidBodyCoverage) error.
    pub fn rigid_body_coverage(atom_count: usize, details: impl Into<String>) -> Self {
        Self::RigidBodyCoverage {
            atom_count,
            detail: details.into(),
        }
    }

    /// Creates a [`MissingRingMember`](Error::MissingRingMember) error.
    pub fn missing_ring_member(
        ring: &crate::model::topology::Ring,
        collection: &'static str,
        members: &[u32],
    ) -> Self {
        Self::MissingRingMember {
            ring: ring.atoms().collect(),
            collection,
            members: members.to_vec(),
        }
    }
}
