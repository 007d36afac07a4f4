//! Layout intent to class-name key resolution.
//!
//! Every rule below is evaluated on its own and every matching key is
//! kept; the result is a union, not a choice between branches. Keys come
//! out in a fixed order so identical intents always produce identical,
//! identically ordered sets:
//!
//! 1. `root`
//! 2. `container` and `container-row` / `container-column`
//! 3. `item`
//! 4. `maximize`, `relative`, `zero-min-width`
//! 5. `flex-context` when any alignment prop was written
//! 6. `spacing-{base}-{n}`
//! 7. `direction-{base}-{value}`
//! 8. `wrap-{base}-{value}`
//! 9. `align-items-*`, `align-content-*`, `justify-*`
//! 10. `grid-{bp}-{span}` for each breakpoint, smallest first
//!
//! `{base}` is the first breakpoint of the registry.

use std::fmt;

use gridcss::types::{BreakpointRegistry, ClassKey, ExplicitProps};
use smallvec::SmallVec;

use crate::intent::LayoutIntent;

/// The ordered class-name keys resolved for one node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ClassSet {
    keys: SmallVec<[ClassKey; 12]>,
}

impl ClassSet {
    fn push(&mut self, key: ClassKey) {
        debug_assert!(!self.keys.contains(&key), "duplicate class key {key}");
        self.keys.push(key);
    }

    pub fn keys(&self) -> &[ClassKey] {
        &self.keys
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassKey> {
        self.keys.iter()
    }

    pub fn contains(&self, key: &ClassKey) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The string form of every key, in order.
    pub fn to_strings(&self) -> Vec<String> {
        self.keys.iter().map(ClassKey::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a ClassSet {
    type Item = &'a ClassKey;
    type IntoIter = std::slice::Iter<'a, ClassKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

/// Resolves the class-name keys for `intent`.
pub fn resolve(intent: &LayoutIntent, breakpoints: &BreakpointRegistry) -> ClassSet {
    let base = breakpoints.base();
    let mut classes = ClassSet::default();

    classes.push(ClassKey::Root);

    if intent.container {
        classes.push(ClassKey::Container);
        // Lets the stylesheet fill width or height depending on the main axis
        if intent.direction.is_row() {
            classes.push(ClassKey::ContainerRow);
        } else {
            classes.push(ClassKey::ContainerColumn);
        }
    }

    if intent.item {
        classes.push(ClassKey::Item);
    }

    if intent.maximize {
        classes.push(ClassKey::Maximize);
    }
    if intent.relative {
        classes.push(ClassKey::Relative);
    }
    if intent.zero_min_width {
        classes.push(ClassKey::ZeroMinWidth);
    }

    // Alignment classes need display: flex, which a plain item lacks
    if intent.is_explicit(ExplicitProps::FLEX_CONTEXT) {
        classes.push(ClassKey::FlexContext);
    }

    if intent.container && !intent.spacing.is_zero() {
        classes.push(ClassKey::Spacing(base, intent.spacing));
    }

    if !intent.direction.is_default() {
        classes.push(ClassKey::Direction(base, intent.direction));
    }

    if !intent.wrap.is_default() {
        classes.push(ClassKey::Wrap(base, intent.wrap));
    }

    if !intent.align_items.is_default() {
        classes.push(ClassKey::AlignItems(base, intent.align_items));
    }
    if !intent.align_content.is_default() {
        classes.push(ClassKey::AlignContent(base, intent.align_content));
    }
    if !intent.justify.is_default() {
        classes.push(ClassKey::Justify(base, intent.justify));
    }

    for breakpoint in breakpoints.iter() {
        let size = intent.span(breakpoint);
        if size.is_set() {
            classes.push(ClassKey::Grid(breakpoint, size));
        }
    }

    classes
}
