//! Responsive breakpoints.
//!
//! A [`Breakpoint`] is a named responsive tier. The grid never looks at
//! pixel thresholds; it only needs the ordered list of keys held by a
//! [`BreakpointRegistry`] to emit one column class per tier, smallest first.

use std::fmt;
use std::str::FromStr;

use crate::GridCssError;

/// A named responsive tier, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// All breakpoints in ascending order.
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// The key used in class names (`xs`, `sm`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }

    /// Position of this breakpoint in [`Breakpoint::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Breakpoint {
    type Err = GridCssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "xs" => Ok(Breakpoint::Xs),
            "sm" => Ok(Breakpoint::Sm),
            "md" => Ok(Breakpoint::Md),
            "lg" => Ok(Breakpoint::Lg),
            "xl" => Ok(Breakpoint::Xl),
            other => Err(GridCssError::InvalidValue {
                prop: "breakpoint",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The ordered set of breakpoint keys a stylesheet was generated for.
///
/// Always holds at least two keys in strictly ascending order. The first
/// key is the *base* breakpoint, which the non-responsive classes
/// (`spacing-xs-2`, `direction-xs-column`, ...) are keyed under.
///
/// # Example
///
/// ```
/// use gridcss::types::{Breakpoint, BreakpointRegistry};
///
/// let registry = BreakpointRegistry::new(vec![Breakpoint::Sm, Breakpoint::Lg]).unwrap();
/// assert_eq!(registry.base(), Breakpoint::Sm);
/// assert!(BreakpointRegistry::new(vec![Breakpoint::Md]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointRegistry {
    keys: Vec<Breakpoint>,
}

impl BreakpointRegistry {
    pub fn new(keys: Vec<Breakpoint>) -> Result<Self, GridCssError> {
        if keys.len() < 2 {
            return Err(GridCssError::InvalidBreakpoints(format!(
                "expected at least two keys, got {}",
                keys.len()
            )));
        }

        if let Some(pair) = keys.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(GridCssError::InvalidBreakpoints(format!(
                "keys must be strictly ascending, found {} before {}",
                pair[0], pair[1]
            )));
        }

        Ok(Self { keys })
    }

    /// Parses a whitespace- or comma-separated list such as `"xs sm md"`.
    pub fn parse(source: &str) -> Result<Self, GridCssError> {
        let keys = source
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(keys)
    }

    /// The smallest breakpoint.
    pub fn base(&self) -> Breakpoint {
        self.keys[0]
    }

    pub fn keys(&self) -> &[Breakpoint] {
        &self.keys
    }

    pub fn iter(&self) -> impl Iterator<Item = Breakpoint> + '_ {
        self.keys.iter().copied()
    }

    pub fn contains(&self, breakpoint: Breakpoint) -> bool {
        self.keys.contains(&breakpoint)
    }
}

impl Default for BreakpointRegistry {
    fn default() -> Self {
        Self {
            keys: Breakpoint::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_is_xs_to_xl() {
        let registry = BreakpointRegistry::default();
        let keys: Vec<_> = registry.iter().map(|b| b.as_str()).collect();
        assert_eq!(keys, ["xs", "sm", "md", "lg", "xl"]);
        assert_eq!(registry.base(), Breakpoint::Xs);
    }

    #[test]
    fn rejects_unordered_keys() {
        let err = BreakpointRegistry::new(vec![Breakpoint::Md, Breakpoint::Sm]).unwrap_err();
        assert!(matches!(err, GridCssError::InvalidBreakpoints(_)));
    }

    #[test]
    fn rejects_duplicate_keys() {
        assert!(BreakpointRegistry::new(vec![Breakpoint::Sm, Breakpoint::Sm]).is_err());
    }

    #[test]
    fn parses_key_list() {
        let registry = BreakpointRegistry::parse("xs, md xl").unwrap();
        assert_eq!(
            registry.keys(),
            &[Breakpoint::Xs, Breakpoint::Md, Breakpoint::Xl]
        );
        assert!(BreakpointRegistry::parse("xs xxl").is_err());
    }
}
