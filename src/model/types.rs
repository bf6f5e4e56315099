use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported element symbol: '{0}'")]
pub struct ParseElementError(String);

/// Elements parameterised by the MM4 force field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Element {
    H = 1,
    C = 6,
    N = 7,
    O = 8,
    F = 9,
    Si = 14,
    P = 15,
    S = 16,
    Ge = 32,
}

impl Element {
    pub fn atomic_mass(&self) -> f64 {
        match self {
            Element::H => 1.008,
            Element::C => 12.011,
            Element::N => 14.007,
            Element::O => 15.999,
            Element::F => 18.998,
            Element::Si => 28.085,
            Element::P => 30.974,
            Element::S => 32.06,
            Element::Ge => 72.63,
        }
    }

    #[inline]
    pub fn atomic_number(&self) -> u8 {
        *self as u8
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Element::H => "H",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::F => "F",
            Element::Si => "Si",
            Element::P => "P",
            Element::S => "S",
            Element::Ge => "Ge",
        }
    }

    #[inline]
    pub fn is_hydrogen(&self) -> bool {
        matches!(self, Element::H)
    }
}

impl TryFrom<u8> for Element {
    type Error = u8;

    fn try_from(atomic_number: u8) -> Result<Self, Self::Error> {
        match atomic_number {
            1 => Ok(Element::H),
            6 => Ok(Element::C),
            7 => Ok(Element::N),
            8 => Ok(Element::O),
            9 => Ok(Element::F),
            14 => Ok(Element::Si),
            15 => Ok(Element::P),
            16 => Ok(Element::S),
            32 => Ok(Element::Ge),
            other => Err(other),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Element {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" => Ok(Element::H),
            "C" => Ok(Element::C),
            "N" => Ok(Element::N),
            "O" => Ok(Element::O),
            "F" => Ok(Element::F),
            "Si" => Ok(Element::Si),
            "P" => Ok(Element::P),
            "S" => Ok(Element::S),
            "Ge" => Ok(Element::Ge),
            _ => Err(ParseElementError(s.to_string())),
        }
    }
}

/// Smallest ring an atom, bond, angle, or torsion participates in.
///
/// Anything outside a five-membered ring is treated as six-membered, which
/// is also the parameter set used for acyclic chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum RingType {
    Five = 5,
    #[default]
    Six = 6,
}

impl RingType {
    #[inline]
    pub fn size(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for RingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_from_str_valid() {
        assert_eq!("C".parse::<Element>().unwrap(), Element::C);
        assert_eq!("Si".parse::<Element>().unwrap(), Element::Si);
        assert_eq!("Ge".parse::<Element>().unwrap(), Element::Ge);
    }

    #[test]
    fn element_from_str_rejects_unsupported() {
        assert!("Fe".parse::<Element>().is_err());
        assert!("c".parse::<Element>().is_err());
    }

    #[test]
    fn element_try_from_atomic_number() {
        for element in [
            Element::H,
            Element::C,
            Element::N,
            Element::O,
            Element::F,
            Element::Si,
            Element::P,
            Element::S,
            Element::Ge,
        ] {
            assert_eq!(Element::try_from(element.atomic_number()), Ok(element));
        }
        assert_eq!(Element::try_from(0), Err(0));
        assert_eq!(Element::try_from(26), Err(26));
    }

    #[test]
    fn element_symbol_display_and_atomic_number() {
        assert_eq!(Element::Ge.to_string(), "Ge");
        assert_eq!(Element::Si.atomic_number(), 14);
        assert!(Element::H.is_hydrogen());
        assert!(!Element::C.is_hydrogen());
    }

    #[test]
    fn ring_type_defaults_to_six() {
        assert_eq!(RingType::default(), RingType::Six);
        assert_eq!(RingType::Five.size(), 5);
        assert_eq!(RingType::Six.to_string(), "6");
    }
}
