//! The item catalog, as published by RePoE.
//!
//! The catalog is one json object, keyed by the item's metadata id:
//!
//! ```ignore
//! {
//!   "Metadata/Items/Armours/Boots/BootsDex1": {
//!     "name": "Shagreen Boots",
//!     "item_class": "Boots",
//!     ...
//!   },
//!   ...
//! }
//! ```
//!
//! Only `name` and `item_class` are read. Records missing either are skipped,
//! one at a time, so a single odd record never stops a run.

use crate::ParseError;
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Catalog {
  records: Map<String, Value>,
}

/// The two fields we care about from a catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
  pub name:  &'a str,
  pub class: &'a str,
}

/// Why a record did not make it into the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skipped<'a> {
  NotAnObject,
  MissingName,
  MissingClass,
  /// The record has a class, but it isn't one we generate tables for.
  UnknownClass(&'a str),
}

impl Catalog {
  pub fn parse(body: &str) -> Result<Self, ParseError> {
    match serde_json::from_str(body)? {
      Value::Object(records) => Ok(Catalog { records }),
      other => Err(ParseError::NotAnObject(kind(&other))),
    }
  }

  pub fn len(&self) -> usize { self.records.len() }
  pub fn is_empty(&self) -> bool { self.records.is_empty() }

  /// Iterates over every record, along with its key. Records that are missing
  /// a field are returned as `Err`.
  pub fn entries(&self) -> impl Iterator<Item = (&str, Result<Entry<'_>, Skipped<'_>>)> {
    self.records.iter().map(|(key, record)| (key.as_str(), Entry::from_record(record)))
  }
}

impl<'a> Entry<'a> {
  pub fn from_record(record: &'a Value) -> Result<Self, Skipped<'a>> {
    let record = record.as_object().ok_or(Skipped::NotAnObject)?;
    let name = record.get("name").and_then(Value::as_str).ok_or(Skipped::MissingName)?;
    let class = record.get("item_class").and_then(Value::as_str).ok_or(Skipped::MissingClass)?;
    Ok(Entry { name, class })
  }
}

impl fmt::Display for Skipped<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::NotAnObject => write!(f, "record is not an object"),
      Self::MissingName => write!(f, "missing `name`"),
      Self::MissingClass => write!(f, "missing `item_class`"),
      Self::UnknownClass(class) => write!(f, "unknown item class `{class}`"),
    }
  }
}

fn kind(v: &Value) -> &'static str {
  match v {
    Value::Null => "null",
    Value::Bool(_) => "a bool",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}
