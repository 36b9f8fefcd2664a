//! Glyph names and named glyph classes

use std::fmt::{Display, Formatter};

use serde::Deserialize;

/// The name of a single glyph in the font.
///
/// Glyph names are opaque: we only ever compare, sort, and print them.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct GlyphName(String);

/// One stylistic alternate for each of N glyph slots.
///
/// Position `i` in every set used together refers to the same slot.
pub type VariationSet = Vec<GlyphName>;

/// The name of a glyph class, without the leading `@`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassName(String);

/// A member of a glyph class: either a glyph or a reference to another class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassItem {
    Glyph(GlyphName),
    Class(ClassName),
}

/// A named, ordered list of class items.
///
/// Items are kept in definition order; callers that need a different order
/// (such as partitions) sort before constructing the class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphClass {
    name: ClassName,
    items: Vec<ClassItem>,
}

impl GlyphName {
    pub fn new(name: impl Into<String>) -> Self {
        GlyphName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ClassName {
    pub fn new(name: impl Into<String>) -> Self {
        ClassName(name.into())
    }

    /// The bare name, without the `@` sigil.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl GlyphClass {
    pub fn new(name: ClassName, items: Vec<ClassItem>) -> Self {
        GlyphClass { name, items }
    }

    /// Create a class containing only glyphs.
    pub fn from_glyphs(name: ClassName, glyphs: impl IntoIterator<Item = GlyphName>) -> Self {
        Self::new(name, glyphs.into_iter().map(ClassItem::Glyph).collect())
    }

    /// Create a class whose members are references to other classes.
    pub fn from_classes<'a>(
        name: ClassName,
        classes: impl IntoIterator<Item = &'a ClassName>,
    ) -> Self {
        Self::new(name, classes.into_iter().cloned().map(ClassItem::Class).collect())
    }

    pub fn name(&self) -> &ClassName {
        &self.name
    }

    pub fn items(&self) -> &[ClassItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the glyphs in this class, skipping class references.
    pub fn glyphs(&self) -> impl Iterator<Item = &GlyphName> + '_ {
        self.items.iter().filter_map(|item| match item {
            ClassItem::Glyph(glyph) => Some(glyph),
            ClassItem::Class(_) => None,
        })
    }

    /// The bracketed, space separated member list, e.g. `[a b @other]`.
    pub fn body(&self) -> String {
        let items = self
            .items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        format!("[{items}]")
    }
}

impl From<&str> for GlyphName {
    fn from(src: &str) -> Self {
        GlyphName::new(src)
    }
}

impl From<String> for GlyphName {
    fn from(src: String) -> Self {
        GlyphName(src)
    }
}

impl Display for GlyphName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Display for ClassName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.0)
    }
}

impl Display for ClassItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassItem::Glyph(glyph) => glyph.fmt(f),
            ClassItem::Class(class) => class.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_body_keeps_definition_order() {
        let class = GlyphClass::from_glyphs(
            ClassName::new("letters"),
            ["g", "a", "l"].into_iter().map(GlyphName::from),
        );
        assert_eq!(class.body(), "[g a l]");
        assert_eq!(class.name().to_string(), "@letters");
    }

    #[test]
    fn class_references_get_sigil() {
        let names = [ClassName::new("one"), ClassName::new("two")];
        let class = GlyphClass::from_classes(ClassName::new("both"), &names);
        assert_eq!(class.body(), "[@one @two]");
        assert_eq!(class.glyphs().count(), 0);
    }

    #[test]
    fn empty_class() {
        let class = GlyphClass::from_glyphs(ClassName::new("nothing"), Vec::<GlyphName>::new());
        assert!(class.is_empty());
        assert_eq!(class.body(), "[]");
    }
}
