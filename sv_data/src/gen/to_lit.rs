//! Converts things to literals.
use super::CodeGen;
use std::collections::BTreeSet;

pub trait ToLit {
  fn to_lit(&self, gen: &mut CodeGen);
}

impl ToLit for str {
  // `Debug` escapes quotes, backslashes and control characters in a way that
  // is also a valid rust string literal.
  fn to_lit(&self, gen: &mut CodeGen) { gen.write(&format!("{self:?}")); }
}
impl ToLit for String {
  fn to_lit(&self, gen: &mut CodeGen) { self.as_str().to_lit(gen); }
}
impl<T> ToLit for &T
where
  T: ToLit + ?Sized,
{
  fn to_lit(&self, gen: &mut CodeGen) { (**self).to_lit(gen); }
}
impl<A, B> ToLit for (A, B)
where
  A: ToLit,
  B: ToLit,
{
  fn to_lit(&self, gen: &mut CodeGen) {
    gen.write("(");
    self.0.to_lit(gen);
    gen.write(", ");
    self.1.to_lit(gen);
    gen.write(")");
  }
}
impl<T> ToLit for [T]
where
  T: ToLit,
{
  fn to_lit(&self, gen: &mut CodeGen) { write_slice(gen, self.iter()); }
}
impl<T> ToLit for Vec<T>
where
  T: ToLit,
{
  fn to_lit(&self, gen: &mut CodeGen) { write_slice(gen, self.iter()); }
}
impl<T> ToLit for BTreeSet<T>
where
  T: ToLit,
{
  fn to_lit(&self, gen: &mut CodeGen) { write_slice(gen, self.iter()); }
}

/// Writes a slice literal with one item per line, or `&[]` if there are no
/// items.
fn write_slice<'a, T>(gen: &mut CodeGen, items: impl ExactSizeIterator<Item = &'a T>)
where
  T: ToLit + 'a,
{
  if items.len() == 0 {
    gen.write("&[]");
    return;
  }
  gen.write_line("&[");
  gen.add_indent();
  for item in items {
    item.to_lit(gen);
    gen.write_line(",");
  }
  gen.remove_indent();
  gen.write("]");
}
