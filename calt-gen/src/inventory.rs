//! Loading the list of exported glyphs

use std::{collections::HashSet, path::Path};

use read_fonts::{types::GlyphId16, FontRef, TableProvider};

use crate::{error::Error, glyphs::GlyphName};

/// The ordered list of glyph names exported by a font.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphInventory {
    glyphs: Vec<GlyphName>,
}

impl GlyphInventory {
    pub fn new(glyphs: Vec<GlyphName>) -> Self {
        GlyphInventory { glyphs }
    }

    /// Parse a plain text glyph list.
    ///
    /// Names are separated by whitespace; anything after a `#` on a line is
    /// ignored.
    pub fn from_text(text: &str) -> Self {
        let glyphs = text
            .lines()
            .map(|line| line.split('#').next().unwrap_or_default())
            .flat_map(str::split_whitespace)
            .map(GlyphName::from)
            .collect();
        Self::new(glyphs)
    }

    /// Read the glyph names from a compiled font.
    ///
    /// Every glyph in a binary font is exported. Names come from the `post`
    /// table; glyphs without a name there are called `glyph{gid}`.
    ///
    /// For a font collection, the first font is used.
    pub fn from_font_data(data: &[u8]) -> Result<Self, Error> {
        let font = FontRef::from_index(data, 0)?;
        if font.ttc_index().is_some() {
            log::info!("reading glyph names from the first font in the collection");
        }
        let num_glyphs = font.maxp()?.num_glyphs();
        let post = match font.post() {
            Ok(post) => Some(post),
            Err(e) => {
                log::warn!("no usable post table ({e}), using generated glyph names");
                None
            }
        };
        let glyphs = (0..num_glyphs as u32)
            .map(|gid| {
                post.as_ref()
                    .and_then(|post| post.glyph_name(GlyphId16::new(gid as u16)))
                    .map(GlyphName::from)
                    .unwrap_or_else(|| GlyphName::new(format!("glyph{gid:05}")))
            })
            .collect();
        Ok(Self::new(glyphs))
    }

    /// Load an inventory from disk.
    ///
    /// Files with a `ttf`, `otf`, or `ttc` extension are read as fonts;
    /// anything else as a text glyph list.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let is_font = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "ttf" | "otf" | "ttc"))
            .unwrap_or(false);
        if is_font {
            Self::load_font(path)
        } else {
            Self::load_text(path)
        }
    }

    pub fn load_text(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::from_text(&text))
    }

    pub fn load_font(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| Error::io(path, e))?;
        Self::from_font_data(&data)
    }

    pub fn glyphs(&self) -> &[GlyphName] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn contains(&self, glyph: &GlyphName) -> bool {
        self.glyphs.contains(glyph)
    }

    /// Names that occur more than once, in order of their second appearance.
    pub fn duplicates(&self) -> Vec<&GlyphName> {
        let mut seen = HashSet::new();
        self.glyphs
            .iter()
            .filter(|glyph| !seen.insert(*glyph))
            .collect()
    }
}

impl FromIterator<GlyphName> for GlyphInventory {
    fn from_iter<T: IntoIterator<Item = GlyphName>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
