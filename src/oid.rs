//! Numeric SNMP object identifiers.

use crate::error::{CounterError, Result};
use std::fmt;
use std::str::FromStr;

/// Immutable dot-separated numeric path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Oid(Vec<u32>);

impl Oid {
    pub fn new(arcs: &[u32]) -> Self {
        Oid(arcs.to_vec())
    }

    /// Build a new OID from `self` followed by `arcs`.
    pub fn extend(&self, arcs: &[u32]) -> Self {
        let mut result = self.0.clone();
        result.extend_from_slice(arcs);
        Oid(result)
    }

    pub fn arcs(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arc) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", arc)?;
        }
        Ok(())
    }
}

impl FromStr for Oid {
    type Err = CounterError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.strip_prefix('.').unwrap_or(s);
        let arcs = trimmed
            .split('.')
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|_| CounterError::InvalidOid(s.to_string()))
            })
            .collect::<Result<Vec<u32>>>()?;

        if arcs.len() < 2 {
            return Err(CounterError::InvalidOid(s.to_string()));
        }
        Ok(Oid(arcs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays() {
        let oid: Oid = "1.3.6.1.4.1.1248".parse().unwrap();
        assert_eq!(oid.arcs(), &[1, 3, 6, 1, 4, 1, 1248]);
        assert_eq!(oid.to_string(), "1.3.6.1.4.1.1248");
    }

    #[test]
    fn leading_dot_is_accepted() {
        let oid: Oid = ".1.3.6".parse().unwrap();
        assert_eq!(oid, Oid::new(&[1, 3, 6]));
    }

    #[test]
    fn rejects_garbage() {
        assert!("1.3.x".parse::<Oid>().is_err());
        assert!("1..3".parse::<Oid>().is_err());
        assert!("7".parse::<Oid>().is_err());
    }

    #[test]
    fn extend_returns_new_oid() {
        let root = Oid::new(&[1, 3, 6]);
        let child = root.extend(&[24, 0]);
        assert_eq!(root.len(), 3);
        assert_eq!(child.to_string(), "1.3.6.24.0");
    }
}
