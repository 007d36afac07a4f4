//! Class-name key to generated class name lookup.
//!
//! The grid stylesheet is produced elsewhere; all the render layer needs
//! from it is the name each [`ClassKey`] was registered under. A key the
//! resolver emits but the map lacks is a stylesheet integration error.

use std::collections::HashMap;

use gridcss::types::{
    AlignContent, AlignItems, BreakpointRegistry, ClassKey, Direction, GridSize, Justify,
    SpacingLevel, Wrap,
};

use crate::error::{GridError, Result};
use crate::resolver::ClassSet;

pub trait ClassMap {
    /// The generated class name for `key`, if registered.
    fn get(&self, key: &str) -> Option<&str>;

    /// Looks up a single key, failing if the stylesheet never registered it.
    fn lookup(&self, key: &ClassKey) -> Result<&str> {
        let key = key.to_string();
        match self.get(&key) {
            Some(name) => Ok(name),
            None => Err(GridError::MissingClass(key)),
        }
    }

    /// Class names for every key in `classes`, in order.
    fn class_names(&self, classes: &ClassSet) -> Result<Vec<&str>> {
        classes.iter().map(|key| self.lookup(key)).collect()
    }
}

/// A [`ClassMap`] backed by a hash map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassRegistry {
    names: HashMap<String, String>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every grid key under `{prefix}-{key}`, the naming a
    /// style-sheet-in-code generator uses for a sheet called `prefix`.
    ///
    /// ```
    /// use flexgrid::{ClassMap, ClassRegistry};
    /// use gridcss::BreakpointRegistry;
    ///
    /// let registry = ClassRegistry::for_sheet("Grid", &BreakpointRegistry::default());
    /// assert_eq!(registry.get("spacing-xs-3"), Some("Grid-spacing-xs-3"));
    /// assert_eq!(registry.get("grid-xl-auto"), Some("Grid-grid-xl-auto"));
    /// ```
    pub fn for_sheet(prefix: &str, breakpoints: &BreakpointRegistry) -> Self {
        let base = breakpoints.base();
        let mut keys: Vec<ClassKey> = ClassKey::FIXED.to_vec();

        keys.extend(SpacingLevel::all().map(|level| ClassKey::Spacing(base, level)));
        keys.extend(
            Direction::ALL
                .iter()
                .filter(|v| !v.is_default())
                .map(|v| ClassKey::Direction(base, *v)),
        );
        keys.extend(
            Wrap::ALL
                .iter()
                .filter(|v| !v.is_default())
                .map(|v| ClassKey::Wrap(base, *v)),
        );
        keys.extend(
            AlignItems::ALL
                .iter()
                .filter(|v| !v.is_default())
                .map(|v| ClassKey::AlignItems(base, *v)),
        );
        keys.extend(
            AlignContent::ALL
                .iter()
                .filter(|v| !v.is_default())
                .map(|v| ClassKey::AlignContent(base, *v)),
        );
        keys.extend(
            Justify::ALL
                .iter()
                .filter(|v| !v.is_default())
                .map(|v| ClassKey::Justify(base, *v)),
        );
        for breakpoint in breakpoints.iter() {
            keys.extend(GridSize::set_values().map(|size| ClassKey::Grid(breakpoint, size)));
        }

        keys.into_iter()
            .map(|key| {
                let key = key.to_string();
                let name = format!("{prefix}-{key}");
                (key, name)
            })
            .collect()
    }

    pub fn insert(&mut self, key: impl Into<String>, name: impl Into<String>) {
        self.names.insert(key.into(), name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl ClassMap for ClassRegistry {
    fn get(&self, key: &str) -> Option<&str> {
        self.names.get(key).map(String::as_str)
    }
}

impl FromIterator<(String, String)> for ClassRegistry {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl ClassMap for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }
}
