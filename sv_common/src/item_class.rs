//! Lookups over the generated item class tables.
//!
//! The generator in `sv_data` writes two static tables: every item class with
//! the names of its base types, and every base type name with its class. An
//! [`ItemClassTable`] is built from those once at startup, and then borrowed
//! by anything that needs to look up an item.

use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// The forward table: each item class, in declared order, with its names.
pub type ClassesToNames = [(&'static str, &'static [&'static str])];
/// The inverse table: each item name with the class it belongs to.
pub type NamesToClasses = [(&'static str, &'static str)];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
  #[error("item class `{0}` is listed twice")]
  DuplicateClass(&'static str),
  #[error("item name `{0}` is listed twice")]
  DuplicateName(&'static str),
  #[error("item name `{name}` maps to unknown class `{class}`")]
  UnknownClass { name: &'static str, class: &'static str },
  #[error("item name `{name}` maps to `{class}`, but `{class}` does not list it")]
  NotInClass { name: &'static str, class: &'static str },
}

/// An immutable view of the generated tables.
#[derive(Debug, Clone)]
pub struct ItemClassTable {
  // Class order as declared by the generator.
  order:    Vec<&'static str>,
  by_class: BTreeMap<&'static str, &'static [&'static str]>,
  by_name:  HashMap<&'static str, &'static str>,
}

impl ItemClassTable {
  /// Builds a table from the two generated statics. This checks that every
  /// name in `names_to_classes` is listed under the class it points to.
  pub fn new(
    classes_to_names: &'static ClassesToNames,
    names_to_classes: &'static NamesToClasses,
  ) -> Result<Self, TableError> {
    let mut order = Vec::with_capacity(classes_to_names.len());
    let mut by_class = BTreeMap::new();
    for &(class, names) in classes_to_names {
      if by_class.insert(class, names).is_some() {
        return Err(TableError::DuplicateClass(class));
      }
      order.push(class);
    }

    let mut by_name = HashMap::with_capacity(names_to_classes.len());
    for &(name, class) in names_to_classes {
      let names = by_class.get(class).ok_or(TableError::UnknownClass { name, class })?;
      if !names.contains(&name) {
        return Err(TableError::NotInClass { name, class });
      }
      if by_name.insert(name, class).is_some() {
        return Err(TableError::DuplicateName(name));
      }
    }

    Ok(ItemClassTable { order, by_class, by_name })
  }

  /// Returns the names listed under `class`, or `None` if the class is not in
  /// the table. A known class with no items returns an empty slice.
  pub fn names(&self, class: &str) -> Option<&'static [&'static str]> {
    self.by_class.get(class).copied()
  }

  /// Returns the class of the item `name`.
  pub fn class_of(&self, name: &str) -> Option<&'static str> { self.by_name.get(name).copied() }

  pub fn contains_class(&self, class: &str) -> bool { self.by_class.contains_key(class) }

  /// Iterates over every class, in the order the generator declared them.
  pub fn classes(&self) -> impl Iterator<Item = &'static str> + '_ { self.order.iter().copied() }

  /// The number of item names in the inverse table.
  pub fn len(&self) -> usize { self.by_name.len() }
  pub fn is_empty(&self) -> bool { self.by_name.is_empty() }
}
