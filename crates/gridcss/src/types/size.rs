//! Bounded numeric values used by the grid.
//!
//! - [`SpacingLevel`]: gutter step between container children, `0..=10`
//! - [`ColumnCount`]: columns spanned on the 12-column scale, `1..=12`
//! - [`GridSize`]: what a node spans at one breakpoint

use std::fmt;
use std::str::FromStr;

use crate::GridCssError;

/// Gutter step applied by a container to its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SpacingLevel(u8);

impl SpacingLevel {
    pub const MAX: u8 = 10;
    pub const ZERO: SpacingLevel = SpacingLevel(0);

    pub fn new(level: u8) -> Result<Self, GridCssError> {
        if level > Self::MAX {
            return Err(GridCssError::OutOfRange {
                what: "spacing",
                value: i64::from(level),
                min: 0,
                max: i64::from(Self::MAX),
            });
        }
        Ok(Self(level))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Every level from 0 to 10.
    pub fn all() -> impl Iterator<Item = SpacingLevel> {
        (0..=Self::MAX).map(SpacingLevel)
    }
}

impl TryFrom<u8> for SpacingLevel {
    type Error = GridCssError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl FromStr for SpacingLevel {
    type Err = GridCssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let level: i64 = s.parse().map_err(|_| GridCssError::InvalidValue {
            prop: "spacing",
            value: s.to_string(),
        })?;
        u8::try_from(level)
            .ok()
            .and_then(|level| Self::new(level).ok())
            .ok_or(GridCssError::OutOfRange {
                what: "spacing",
                value: level,
                min: 0,
                max: i64::from(Self::MAX),
            })
    }
}

impl fmt::Display for SpacingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of columns spanned out of twelve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnCount(u8);

impl ColumnCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 12;

    pub fn new(columns: u8) -> Result<Self, GridCssError> {
        if !(Self::MIN..=Self::MAX).contains(&columns) {
            return Err(GridCssError::OutOfRange {
                what: "column span",
                value: i64::from(columns),
                min: i64::from(Self::MIN),
                max: i64::from(Self::MAX),
            });
        }
        Ok(Self(columns))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Every count from 1 to 12.
    pub fn all() -> impl Iterator<Item = ColumnCount> {
        (Self::MIN..=Self::MAX).map(ColumnCount)
    }
}

impl fmt::Display for ColumnCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How much of the row a node takes at one breakpoint.
///
/// The literal form is what the column stylesheet is keyed on, so
/// [`GridSize::Fill`] (`true`) and `Columns(12)` stay distinct values even
/// though they usually produce the same width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GridSize {
    /// Not set at this breakpoint (`false`).
    #[default]
    Unset,
    /// Grow to fill the remaining space (`true`).
    Fill,
    /// Size to content (`"auto"`).
    Auto,
    /// A fixed number of columns.
    Columns(ColumnCount),
}

impl GridSize {
    /// Shorthand for `GridSize::Columns(ColumnCount::new(n)?)`.
    pub fn columns(columns: u8) -> Result<Self, GridCssError> {
        ColumnCount::new(columns).map(GridSize::Columns)
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, GridSize::Unset)
    }

    /// Every value that produces a column class, in generator order.
    pub fn set_values() -> impl Iterator<Item = GridSize> {
        [GridSize::Auto, GridSize::Fill]
            .into_iter()
            .chain(ColumnCount::all().map(GridSize::Columns))
    }
}

impl From<bool> for GridSize {
    fn from(fill: bool) -> Self {
        if fill { GridSize::Fill } else { GridSize::Unset }
    }
}

impl From<ColumnCount> for GridSize {
    fn from(columns: ColumnCount) -> Self {
        GridSize::Columns(columns)
    }
}

impl TryFrom<u8> for GridSize {
    type Error = GridCssError;

    fn try_from(columns: u8) -> Result<Self, Self::Error> {
        Self::columns(columns)
    }
}

impl FromStr for GridSize {
    type Err = GridCssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "false" => Ok(GridSize::Unset),
            "true" => Ok(GridSize::Fill),
            "auto" => Ok(GridSize::Auto),
            other => {
                let columns: i64 = other.parse().map_err(|_| GridCssError::InvalidValue {
                    prop: "column span",
                    value: other.to_string(),
                })?;
                u8::try_from(columns)
                    .ok()
                    .and_then(|c| GridSize::columns(c).ok())
                    .ok_or(GridCssError::OutOfRange {
                        what: "column span",
                        value: columns,
                        min: i64::from(ColumnCount::MIN),
                        max: i64::from(ColumnCount::MAX),
                    })
            }
        }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridSize::Unset => f.write_str("false"),
            GridSize::Fill => f.write_str("true"),
            GridSize::Auto => f.write_str("auto"),
            GridSize::Columns(columns) => write!(f, "{columns}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_range() {
        assert_eq!(SpacingLevel::new(10).unwrap().get(), 10);
        assert!(SpacingLevel::new(11).is_err());
        assert_eq!(SpacingLevel::all().count(), 11);
        assert!("-1".parse::<SpacingLevel>().is_err());
        assert!("two".parse::<SpacingLevel>().is_err());
    }

    #[test]
    fn column_range() {
        assert!(ColumnCount::new(0).is_err());
        assert!(ColumnCount::new(13).is_err());
        assert_eq!(ColumnCount::all().count(), 12);
    }

    #[test]
    fn grid_size_literals() {
        assert_eq!("true".parse::<GridSize>().unwrap(), GridSize::Fill);
        assert_eq!("false".parse::<GridSize>().unwrap(), GridSize::Unset);
        assert_eq!("auto".parse::<GridSize>().unwrap(), GridSize::Auto);
        assert_eq!("7".parse::<GridSize>().unwrap(), GridSize::columns(7).unwrap());
        assert!(matches!(
            "13".parse::<GridSize>(),
            Err(GridCssError::OutOfRange { value: 13, .. })
        ));
    }

    #[test]
    fn fill_and_twelve_stay_distinct() {
        let twelve = GridSize::columns(12).unwrap();
        assert_ne!(GridSize::Fill, twelve);
        assert_eq!(GridSize::Fill.to_string(), "true");
        assert_eq!(twelve.to_string(), "12");
    }

    #[test]
    fn set_values_cover_the_generator_keys() {
        let literals: Vec<_> = GridSize::set_values().map(|s| s.to_string()).collect();
        assert_eq!(literals.len(), 14);
        assert_eq!(literals[0], "auto");
        assert_eq!(literals[1], "true");
        assert_eq!(literals[13], "12");
    }
}
