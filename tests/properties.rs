use mm4_forge::{
    Angle, Bond, ErrorKind, ForgeConfig, ForgeError, Offset, Parameters, Ring, RingType, System,
    Torsion, forge,
};

fn forge_bonds(atomic_numbers: &[u8], bonds: &[[u32; 2]]) -> Result<Parameters, ForgeError> {
    let system = System::from_atomic_numbers(atomic_numbers, bonds)?;
    forge(&system, &ForgeConfig::default())
}

fn cycle(start: u32, n: u32) -> Vec<[u32; 2]> {
    (0..n).map(|i| [start + i, start + (i + 1) % n]).collect()
}

/// Methylcyclopentane (atoms 0..6) followed by propanol heavy atoms (6..10).
fn make_mixture() -> (Vec<u8>, Vec<[u32; 2]>) {
    let mut bonds = cycle(0, 5);
    bonds.push([0, 5]);
    bonds.extend([[6, 7], [7, 8], [8, 9]]);
    (vec![6, 6, 6, 6, 6, 6, 6, 6, 6, 8], bonds)
}

/// Indane carbon skeleton: six-ring 0..6 fused with the five-ring 0-5-6-7-8.
fn make_indane() -> (Vec<u8>, Vec<[u32; 2]>) {
    let mut bonds = cycle(0, 6);
    bonds.extend([[5, 6], [6, 7], [7, 8], [8, 0]]);
    (vec![6; 9], bonds)
}

fn count_five(types: &[RingType]) -> usize {
    types.iter().filter(|t| **t == RingType::Five).count()
}

#[test]
fn canonical_collections_ignore_bond_order() {
    let (atoms, bonds) = make_mixture();
    let forward = forge_bonds(&atoms, &bonds).unwrap();

    let scrambled: Vec<[u32; 2]> = bonds.iter().rev().map(|&[a, b]| [b, a]).collect();
    let reversed = forge_bonds(&atoms, &scrambled).unwrap();

    assert_eq!(forward.angles().indices(), reversed.angles().indices());
    assert_eq!(forward.torsions().indices(), reversed.torsions().indices());
    assert_eq!(forward.rings().indices(), reversed.rings().indices());
    assert_eq!(forward.atoms().ring_types(), reversed.atoms().ring_types());
    assert_eq!(forward.atoms().atoms_to_atoms_map(), reversed.atoms().atoms_to_atoms_map());
    assert_eq!(forward.rigid_bodies(), reversed.rigid_bodies());
    assert_eq!(
        forward.nonbonded_exceptions_14(),
        reversed.nonbonded_exceptions_14()
    );

    let mut a: Vec<Bond> = forward.bonds().indices().to_vec();
    let mut b: Vec<Bond> = reversed.bonds().indices().to_vec();
    a.sort();
    b.sort();
    assert_eq!(a, b);
}

#[test]
fn forging_twice_is_identical() {
    let (atoms, bonds) = make_indane();
    assert_eq!(
        forge_bonds(&atoms, &bonds).unwrap(),
        forge_bonds(&atoms, &bonds).unwrap()
    );
}

#[test]
fn no_mirrored_angles_or_torsions() {
    let (atoms, bonds) = make_indane();
    let params = forge_bonds(&atoms, &bonds).unwrap();

    for angle in params.angles().indices() {
        let mirrored = Angle {
            i: angle.k,
            j: angle.j,
            k: angle.i,
        };
        assert!(angle.i < angle.k);
        assert!(!params.angles().contains(&mirrored));
    }
    for t in params.torsions().indices() {
        let mirrored = Torsion {
            i: t.l,
            j: t.k,
            k: t.j,
            l: t.i,
        };
        assert!(!params.torsions().contains(&mirrored));
    }
}

#[test]
fn fused_five_ring_is_typed_separately_from_six_ring() {
    let (atoms, bonds) = make_indane();
    let params = forge_bonds(&atoms, &bonds).unwrap();

    assert_eq!(params.rings().len(), 1);
    assert_eq!(
        params.rings().indices()[0],
        Ring::from_cycle(&[0, 5, 6, 7, 8]).unwrap()
    );

    let ring_types = params.atoms().ring_types();
    for atom in [0, 5, 6, 7, 8] {
        assert_eq!(ring_types[atom], RingType::Five);
    }
    for atom in [1, 2, 3, 4] {
        assert_eq!(ring_types[atom], RingType::Six);
    }

    let shared = params.bonds().position(&Bond::new(0, 5)).unwrap();
    assert_eq!(params.bonds().ring_types()[shared as usize], RingType::Five);
    assert_eq!(count_five(params.bonds().ring_types()), 5);
    assert_eq!(count_five(params.angles().ring_types()), 5);
    assert_eq!(count_five(params.torsions().ring_types()), 5);
}

#[test]
fn six_ring_alone_yields_no_rings() {
    let params = forge_bonds(&[6; 6], &cycle(0, 6)).unwrap();
    assert!(params.rings().is_empty());
    assert_eq!(count_five(params.atoms().ring_types()), 0);
    assert_eq!(count_five(params.torsions().ring_types()), 0);
}

#[test]
fn disjoint_molecules_become_two_rigid_bodies() {
    let (atoms, bonds) = make_mixture();
    let params = forge_bonds(&atoms, &bonds).unwrap();

    assert_eq!(params.rigid_bodies(), &[0..6, 6..10]);
    assert_eq!(
        params.atoms().atoms_to_rigid_bodies_map(),
        &[0, 0, 0, 0, 0, 0, 1, 1, 1, 1]
    );
}

#[test]
fn interleaved_molecules_are_rejected() {
    let err = forge_bonds(&[6; 6], &[[0, 2], [2, 4], [1, 3], [3, 5]]).unwrap_err();
    assert!(matches!(err, ForgeError::NonContiguousRigidBody { .. }));
    assert_eq!(err.kind(), ErrorKind::UnsupportedTopology);
}

#[test]
fn small_rings_are_rejected() {
    for size in [3, 4] {
        let err = forge_bonds(&vec![6; size as usize], &cycle(0, size)).unwrap_err();
        assert!(matches!(err, ForgeError::SmallRing { .. }));
        assert_eq!(err.kind(), ErrorKind::UnsupportedTopology);
    }
}

#[test]
fn malformed_input_is_classified() {
    let err = forge_bonds(&[6, 6], &[[0, 2]]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);

    let err = forge_bonds(&[6, 79], &[[0, 1]]).unwrap_err();
    assert!(matches!(err, ForgeError::UnknownElement { atom: 1, .. }));

    let err = forge_bonds(&[], &[]).unwrap_err();
    assert!(matches!(err, ForgeError::EmptySystem));
}

#[test]
fn append_equals_forging_the_concatenation() {
    let (ring_atoms, ring_bonds) = make_indane();
    let (mix_atoms, mix_bonds) = make_mixture();

    let mut appended = forge_bonds(&ring_atoms, &ring_bonds).unwrap();
    appended
        .append(&forge_bonds(&mix_atoms, &mix_bonds).unwrap())
        .unwrap();

    let offset = ring_atoms.len() as u32;
    let mut atoms = ring_atoms.clone();
    atoms.extend_from_slice(&mix_atoms);
    let mut bonds = ring_bonds.clone();
    bonds.extend(mix_bonds.iter().map(|&[a, b]| [a + offset, b + offset]));
    let direct = forge_bonds(&atoms, &bonds).unwrap();

    assert_eq!(appended.bonds(), direct.bonds());
    assert_eq!(appended.angles(), direct.angles());
    assert_eq!(appended.torsions(), direct.torsions());
    assert_eq!(appended.rings(), direct.rings());
    assert_eq!(
        appended.nonbonded_exceptions_13(),
        direct.nonbonded_exceptions_13()
    );
    assert_eq!(
        appended.nonbonded_exceptions_14(),
        direct.nonbonded_exceptions_14()
    );
    assert_eq!(
        appended.atoms().atoms_to_atoms_map(),
        direct.atoms().atoms_to_atoms_map()
    );
    assert_eq!(
        appended.atoms().atoms_to_bonds_map(),
        direct.atoms().atoms_to_bonds_map()
    );
    assert_eq!(appended.rigid_bodies(), direct.rigid_bodies());
    assert_eq!(appended, direct);
}

#[test]
fn ring_offset_shifts_every_member() {
    let ring = Ring::from_cycle(&[0, 1, 2, 3, 4]).unwrap();
    let shifted = ring.offset(10);
    assert_eq!(
        shifted.atoms().collect::<Vec<_>>(),
        ring.atoms().map(|a| a + 10).collect::<Vec<_>>()
    );
    assert!(shifted.slots()[5..].iter().all(Option::is_none));
}
