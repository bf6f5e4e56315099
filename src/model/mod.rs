//! Core data structures for molecular systems and their MM4 topology.
//!
//! - [`atom`] – Minimal atom representation carrying its element.
//! - [`types`] – Supported elements and ring-size classifications.
//! - [`system`] – Input systems: atoms plus canonical bonds.
//! - [`topology`] – Canonical angle, torsion, and ring tuples and the
//!   deduplicating [`Interactions`](topology::Interactions) collection.
//! - [`parameters`] – The [`Parameters`](parameters::Parameters) aggregate
//!   produced by [`crate::forge`], including the merge operation.
//!
//! Raw input ([`System`](system::System)) is kept apart from derived topology
//! so that the forge pipeline reads one and builds the other.

pub mod atom;
pub mod parameters;
pub mod system;
pub mod topology;
pub mod types;
