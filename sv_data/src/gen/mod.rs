mod to_lit;
pub use to_lit::ToLit;

/// A code generator. It is used to write the generated table sources.
pub struct CodeGen {
  current:      String,
  // Indent level (not amount of spaces)
  indent:       usize,
  // Indent is added when we write a new line, not on write_line
  needs_indent: bool,
}

impl CodeGen {
  #[allow(clippy::new_without_default)]
  pub fn new() -> Self { CodeGen { current: String::new(), indent: 0, needs_indent: true } }
  /// Returns the current indent of this generator.
  pub fn indent(&self) -> usize { self.indent }
  /// Writes a `pub static` item. Example:
  /// ```
  /// # use sv_data::gen::CodeGen;
  /// # let mut gen = CodeGen::new();
  /// gen.write_static("NAMES", "&[&str]", &vec!["Iron Ring", "Coral Ring"]);
  /// # let out = gen.into_output();
  /// # eprintln!("OUTPUT: {}", out);
  /// # assert_eq!(out,
  /// # r#"pub static NAMES: &[&str] = &[
  /// #   "Iron Ring",
  /// #   "Coral Ring",
  /// # ];
  /// # "#);
  /// ```
  /// That will produce:
  /// ```ignore
  /// pub static NAMES: &[&str] = &[
  ///   "Iron Ring",
  ///   "Coral Ring",
  /// ];
  /// ```
  pub fn write_static<T>(&mut self, name: &str, ty: &str, value: &T)
  where
    T: ToLit + ?Sized,
  {
    self.write("pub static ");
    self.write(name);
    self.write(": ");
    self.write(ty);
    self.write(" = ");
    value.to_lit(self);
    self.write_line(";");
  }
  /// Writes a line comment. Example:
  /// ```
  /// # use sv_data::gen::CodeGen;
  /// # let mut gen = CodeGen::new();
  /// gen.write_comment("Hello world!");
  /// # let out = gen.into_output();
  /// # eprintln!("OUTPUT: {}", out);
  /// # assert_eq!(out,
  /// # r#"// Hello world!
  /// # "#);
  /// ```
  /// That will produce:
  /// ```ignore
  /// // Hello world!
  /// ```
  pub fn write_comment(&mut self, text: &str) {
    self.write("// ");
    self.write_line(text);
  }
  /// Writes a doc comment. An empty `text` writes a bare `///`, without
  /// trailing whitespace.
  pub fn write_doc(&mut self, text: &str) {
    if text.is_empty() {
      self.write_line("///");
    } else {
      self.write("/// ");
      self.write_line(text);
    }
  }

  pub fn write(&mut self, src: &str) {
    // Make sure not to indent when we aren't writing anything
    if src.is_empty() {
      return;
    }
    if self.needs_indent {
      self.current.push_str(&"  ".repeat(self.indent));
      self.needs_indent = false;
    }
    self.current.push_str(src);
  }
  pub fn write_line(&mut self, src: &str) {
    // Blank lines never get indents
    self.write(src);
    self.current.push('\n');
    self.needs_indent = true;
  }
  /// Adds a new indent level to the generator.
  pub fn add_indent(&mut self) { self.indent += 1; }
  /// Removes a level of indent from the generator.
  pub fn remove_indent(&mut self) {
    debug_assert!(self.indent > 0, "removed more indents than were added");
    self.indent = self.indent.saturating_sub(1);
  }
  /// Returns the code that was generated with this generator.
  pub fn into_output(self) -> String { self.current }
}

use std::fmt;
impl fmt::Debug for CodeGen {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("CodeGen").field("indent", &self.indent).finish()
  }
}
