use crate::{Catalog, Entry, Skipped};
use std::collections::{btree_map, hash_map, BTreeMap, BTreeSet, HashMap};

/// Every item class, in declared order, with the set of names under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMap<'a> {
  classes: Vec<(&'a str, BTreeSet<&'a str>)>,
  index:   HashMap<&'a str, usize>,
}

/// The inverse of a [`ClassMap`]: each name with the class it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameIndex<'a> {
  by_name:   BTreeMap<&'a str, &'a str>,
  conflicts: Vec<Conflict<'a>>,
}

/// A name that shows up under two classes. The class declared first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict<'a> {
  pub name:    &'a str,
  pub kept:    &'a str,
  pub dropped: &'a str,
}

impl<'a> ClassMap<'a> {
  /// Creates a map with an empty set for every class. Repeated classes are
  /// only added once.
  pub fn new(classes: &[&'a str]) -> Self {
    let mut map = ClassMap { classes: Vec::with_capacity(classes.len()), index: HashMap::new() };
    for &class in classes {
      if let hash_map::Entry::Vacant(e) = map.index.entry(class) {
        e.insert(map.classes.len());
        map.classes.push((class, BTreeSet::new()));
      }
    }
    map
  }

  /// Groups every record in the catalog. Returns the map, and the number of
  /// records that were skipped.
  pub fn group(catalog: &'a Catalog, classes: &[&'a str]) -> (Self, usize) {
    let mut map = ClassMap::new(classes);
    let mut skipped = 0;
    for (key, entry) in catalog.entries() {
      if let Err(reason) = entry.and_then(|entry| map.insert(entry)) {
        debug!("skipping `{key}`: {reason}");
        skipped += 1;
      }
    }
    (map, skipped)
  }

  /// Adds the entry's name under its class. Entries with a class that isn't in
  /// this map are rejected.
  pub fn insert(&mut self, entry: Entry<'a>) -> Result<(), Skipped<'a>> {
    let &i = self.index.get(entry.class).ok_or(Skipped::UnknownClass(entry.class))?;
    self.classes[i].1.insert(entry.name);
    Ok(())
  }

  pub fn get(&self, class: &str) -> Option<&BTreeSet<&'a str>> {
    self.index.get(class).map(|&i| &self.classes[i].1)
  }

  /// Iterates over every class in declared order, including empty ones.
  pub fn iter(&self) -> impl Iterator<Item = (&'a str, &BTreeSet<&'a str>)> + '_ {
    self.classes.iter().map(|(class, names)| (*class, names))
  }

  /// The number of classes.
  pub fn len(&self) -> usize { self.classes.len() }
  pub fn is_empty(&self) -> bool { self.classes.is_empty() }
}

impl<'a> NameIndex<'a> {
  pub fn build(map: &ClassMap<'a>) -> Self {
    let mut by_name = BTreeMap::new();
    let mut conflicts = vec![];
    for (class, names) in map.iter() {
      for &name in names {
        match by_name.entry(name) {
          btree_map::Entry::Vacant(e) => {
            e.insert(class);
          }
          btree_map::Entry::Occupied(e) => {
            conflicts.push(Conflict { name, kept: *e.get(), dropped: class });
          }
        }
      }
    }
    NameIndex { by_name, conflicts }
  }

  pub fn get(&self, name: &str) -> Option<&'a str> { self.by_name.get(name).copied() }

  /// Iterates over every name, sorted.
  pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
    self.by_name.iter().map(|(&name, &class)| (name, class))
  }

  pub fn conflicts(&self) -> &[Conflict<'a>] { &self.conflicts }

  pub fn len(&self) -> usize { self.by_name.len() }
  pub fn is_empty(&self) -> bool { self.by_name.is_empty() }
}
