//! Dotted logger names.
//!
//! `"a.b.c"` has ancestors `"a.b"`, `"a"` and the root `""`. Segments are
//! opaque: `"a..b"` and `".x"` are legal names whose parents are `"a."`
//! and `""` respectively.

/// Name of the root logger.
pub const ROOT: &str = "";

/// Hierarchy separator.
pub const SEPARATOR: char = '.';

pub fn is_root(name: &str) -> bool {
    name == ROOT
}

/// Syntactic parent: everything before the last separator, or the root when
/// there is none. The root itself has no parent.
pub fn parent(name: &str) -> Option<&str> {
    if is_root(name) {
        return None;
    }
    match name.rfind(SEPARATOR) {
        Some(pos) => Some(&name[..pos]),
        None => Some(ROOT),
    }
}

/// Ancestors of `name`, nearest first, always ending with the root.
pub fn ancestors(name: &str) -> Ancestors<'_> {
    Ancestors { next: parent(name) }
}

/// Number of segments; 0 for the root.
pub fn depth(name: &str) -> usize {
    if is_root(name) {
        0
    } else {
        name.split(SEPARATOR).count()
    }
}

/// Iterator returned by [`ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    next: Option<&'a str>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = parent(current);
        Some(current)
    }
}
