//! Bonded topology perception for the MM4 molecular-mechanics force field.
//!
//! From an atom list and a set of covalent bonds, `mm4-forge` derives every
//! angle and torsion, finds five-membered rings and propagates ring membership
//! onto atoms, bonds, angles, and torsions, and partitions the system into
//! contiguous rigid bodies. The result is the index layer a simulation engine
//! needs before any parameter values are looked up.
//!
//! # Features
//!
//! - **Canonical topology** — Bonds, angles, torsions, and rings are stored in
//!   one canonical direction each, deduplicated, with dense `u32` positions
//! - **Ring typing** — Five-membered rings are detected and tagged; three- and
//!   four-membered rings are rejected
//! - **Rigid bodies** — Bonded clusters become contiguous atom ranges with an
//!   atom→rigid-body lookup
//! - **Merging** — Independently forged parameter sets can be concatenated
//!   with [`Parameters::append`]
//!
//! # Quick Start
//!
//! ```
//! use mm4_forge::{ForgeConfig, ForgeError, RingType, System, forge};
//!
//! // Cyclopentane carbons followed by an ethane molecule.
//! let system = System::from_atomic_numbers(
//!     &[6, 6, 6, 6, 6, 6, 6],
//!     &[[0, 1], [1, 2], [2, 3], [3, 4], [4, 0], [5, 6]],
//! )?;
//!
//! let params = forge(&system, &ForgeConfig::default())?;
//!
//! assert_eq!(params.bonds().len(), 6);
//! assert_eq!(params.angles().len(), 5);
//! assert_eq!(params.torsions().len(), 5);
//!
//! // One five-membered ring, with every ring atom tagged.
//! assert_eq!(params.rings().len(), 1);
//! assert_eq!(params.atoms().ring_types()[0], RingType::Five);
//! assert_eq!(params.atoms().ring_types()[5], RingType::Six);
//!
//! // Two rigid bodies covering atoms 0..5 and 5..7.
//! assert_eq!(params.rigid_bodies(), &[0..5, 5..7]);
//! # Ok::<(), ForgeError>(())
//! ```
//!
//! # Errors
//!
//! Construction either succeeds completely or returns a [`ForgeError`];
//! [`ForgeError::kind`] tells malformed input apart from unsupported topology
//! and internal inconsistencies.

mod forge;
mod model;

pub use model::atom::Atom;
pub use model::parameters::{Atoms, Parameters};
pub use model::system::{Bond, System};
pub use model::topology::{
    Angle, Interactions, MAX_VALENCE, Offset, RING_CAPACITY, Ring, Slots, Torsion,
};
pub use model::types::{Element, ParseElementError, RingType};

pub use forge::{ErrorKind, ForgeConfig, LevelOfTheory, forge};

pub use forge::Error as ForgeError;
