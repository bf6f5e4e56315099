use super::error::Error;
use crate::model::system::{Bond, System};
use crate::model::topology::Interactions;

/// Computes per-atom masses in amu after hydrogen mass repartitioning.
///
/// For every hydrogen bonded to a heavier element, `repartitioning` amu is
/// moved from the heavy atom onto the hydrogen. Total mass is unchanged.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if a heavy atom would be left with a
/// non-positive mass.
pub fn repartition(
    system: &System,
    bonds: &Interactions<Bond>,
    repartitioning: f64,
) -> Result<Vec<f64>, Error> {
    let mut masses: Vec<f64> = system
        .atoms
        .iter()
        .map(|atom| atom.element.atomic_mass())
        .collect();

    for bond in bonds.indices() {
        let (i, j) = (bond.i as usize, bond.j as usize);
        let h_i = system.atoms[i].element.is_hydrogen();
        let h_j = system.atoms[j].element.is_hydrogen();
        match (h_i, h_j) {
            (true, false) => {
                masses[i] += repartitioning;
                masses[j] -= repartitioning;
            }
            (false, true) => {
                masses[j] += repartitioning;
                masses[i] -= repartitioning;
            }
            _ => {}
        }
    }

    if let Some((atom, mass)) = masses
        .iter()
        .enumerate()
        .find(|(_, mass)| **mass <= 0.0)
    {
        return Err(Error::InvalidConfig(format!(
            "hydrogen mass repartitioning of {} amu leaves atom {} ({}) with mass {:.3} amu",
            repartitioning, atom, system.atoms[atom].element, mass
        )));
    }

    Ok(masses)
}
