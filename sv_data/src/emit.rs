use crate::{gen::CodeGen, ClassMap, Error, NameIndex};
use std::{fs, io, path::Path};

pub const CLASSES_TO_NAMES: &str = "ITEM_CLASSES_TO_NAMES";
pub const NAMES_TO_CLASSES: &str = "ITEM_NAMES_TO_CLASSES";

/// Renders both tables as rust source. The output only depends on the
/// arguments, so running this twice on the same catalog gives the same bytes.
pub fn render(classes: &ClassMap, index: &NameIndex, source: &str) -> String {
  let mut gen = CodeGen::new();
  gen.write_comment(&format!("Generated by sv_data from {source}"));
  gen.write_comment("Do not edit this file by hand, rerun `sv_data` instead.");
  gen.write_line("");

  gen.write_doc("Every item class, in declared order, with the names of its base types.");
  gen.write_static(CLASSES_TO_NAMES, "&[(&str, &[&str])]", &classes.iter().collect::<Vec<_>>());
  gen.write_line("");

  gen.write_doc("Every base type name, sorted, with its item class.");
  gen.write_static(NAMES_TO_CLASSES, "&[(&str, &str)]", &index.iter().collect::<Vec<_>>());

  gen.into_output()
}

/// Writes `src` to `path`, replacing whatever was there. The source is written
/// to a temporary file first, so a failed write never leaves half a file at
/// `path`.
pub fn write(path: &Path, src: &str) -> Result<(), Error> {
  let err = |err: io::Error| Error::Io { path: path.display().to_string(), err };
  if let Some(parent) = path.parent() {
    if !parent.as_os_str().is_empty() {
      fs::create_dir_all(parent).map_err(err)?;
    }
  }

  let tmp = path.with_extension("rs.tmp");
  if let Err(e) = fs::write(&tmp, src).and_then(|()| fs::rename(&tmp, path)) {
    // `path` is left as it was.
    let _ = fs::remove_file(&tmp);
    debug!("could not replace {}: {e}", path.display());
    return Err(err(e));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Catalog;
  use pretty_assertions::assert_eq;

  fn render_catalog(src: &str, classes: &[&str]) -> String {
    let catalog = Catalog::parse(src).unwrap();
    let (map, _) = ClassMap::group(&catalog, classes);
    let index = NameIndex::build(&map);
    render(&map, &index, "test.json")
  }

  #[test]
  fn render_tables() {
    let out = render_catalog(
      r#"{
        "1": {"name": "Leather Boots", "item_class": "Boots"},
        "2": {"name": "Lapis Amulet", "item_class": "Amulet"},
        "3": {"name": "Onyx Amulet", "item_class": "Amulet"},
        "4": {"name": "Golden Flask", "item_class": "Flask"},
        "5": {"name": "No Class"}
      }"#,
      &["Amulet", "Boots", "Belt"],
    );
    assert_eq!(
      out,
      r#"// Generated by sv_data from test.json
// Do not edit this file by hand, rerun `sv_data` instead.

/// Every item class, in declared order, with the names of its base types.
pub static ITEM_CLASSES_TO_NAMES: &[(&str, &[&str])] = &[
  ("Amulet", &[
    "Lapis Amulet",
    "Onyx Amulet",
  ]),
  ("Boots", &[
    "Leather Boots",
  ]),
  ("Belt", &[]),
];

/// Every base type name, sorted, with its item class.
pub static ITEM_NAMES_TO_CLASSES: &[(&str, &str)] = &[
  ("Lapis Amulet", "Amulet"),
  ("Leather Boots", "Boots"),
  ("Onyx Amulet", "Amulet"),
];
"#
    );
  }

  #[test]
  fn render_empty() {
    let out = render_catalog("{}", &["Ring"]);
    assert_eq!(
      out,
      r#"// Generated by sv_data from test.json
// Do not edit this file by hand, rerun `sv_data` instead.

/// Every item class, in declared order, with the names of its base types.
pub static ITEM_CLASSES_TO_NAMES: &[(&str, &[&str])] = &[
  ("Ring", &[]),
];

/// Every base type name, sorted, with its item class.
pub static ITEM_NAMES_TO_CLASSES: &[(&str, &str)] = &[];
"#
    );
  }

  #[test]
  fn render_is_stable() {
    // Same records, different keys and order.
    let a = render_catalog(
      r#"{
        "x": {"name": "Iron Ring", "item_class": "Ring"},
        "y": {"name": "Coral Ring", "item_class": "Ring"},
        "z": {"name": "Rustic Sash", "item_class": "Belt"}
      }"#,
      crate::ITEM_CLASSES,
    );
    let b = render_catalog(
      r#"{
        "3": {"name": "Rustic Sash", "item_class": "Belt"},
        "1": {"name": "Coral Ring", "item_class": "Ring"},
        "2": {"name": "Iron Ring", "item_class": "Ring"}
      }"#,
      crate::ITEM_CLASSES,
    );
    assert_eq!(a, b);
  }

  #[test]
  fn write_replaces_file() {
    let dir = std::env::temp_dir().join(format!("sv_data_emit_{}", std::process::id()));
    let path = dir.join("nested").join("item_classes.rs");
    write(&path, "old").unwrap();
    write(&path, "new").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    assert!(!path.with_extension("rs.tmp").exists());
    fs::remove_dir_all(&dir).unwrap();
  }

  #[test]
  fn failed_write_keeps_old_output() {
    let dir = std::env::temp_dir().join(format!("sv_data_emit_failed_{}", std::process::id()));
    // A directory can't be replaced by a file, so the rename fails.
    let path = dir.join("item_classes.rs");
    fs::create_dir_all(&path).unwrap();
    fs::write(path.join("keep.txt"), "old").unwrap();

    let e = write(&path, "new").unwrap_err();
    assert!(matches!(e, Error::Io { .. }), "{e}");
    assert!(!path.with_extension("rs.tmp").exists());
    assert_eq!(fs::read_to_string(path.join("keep.txt")).unwrap(), "old");
    fs::remove_dir_all(&dir).unwrap();
  }
}
