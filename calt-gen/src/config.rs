//! Generator configuration
//!
//! A configuration is usually loaded from a TOML file:
//!
//! ```toml
//! seed = 0
//! depth = 10
//! partitions = 2
//! mode = "body"
//! base = ["a", "g", "l", "u"]
//! variations = [
//!     ["abreve", "gdotaccent", "lslash", "ubreve"],
//!     ["acircumflex", "gcommaaccent", "lcaron", "uring"],
//! ]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::{
    emit::RenderMode,
    error::Error,
    glyphs::{GlyphName, VariationSet},
};

pub const DEFAULT_SEED: u64 = 0;
pub const DEFAULT_DEPTH: usize = 10;
pub const DEFAULT_PARTITIONS: i64 = 2;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Seed for the partition shuffle. Change it to get a different partition.
    #[serde(default)]
    pub seed: u64,
    /// How many glyphs ahead the lookups look for a trigger.
    ///
    /// Larger values give longer-range triggers at the cost of more work
    /// for the shaper.
    #[serde(default = "default_depth")]
    pub depth: usize,
    /// How many partitions the glyph inventory is split into.
    ///
    /// Signed so that zero and negative counts are reported by
    /// [`validate`][Self::validate] rather than as parse errors.
    #[serde(default = "default_partitions")]
    pub partitions: i64,
    #[serde(default)]
    pub mode: RenderMode,
    /// Prefix added to every emitted line.
    #[serde(default)]
    pub indent: String,
    /// Emit the `@All` class that the skip class refers to.
    #[serde(default)]
    pub include_all_class: bool,
    /// The default form of each glyph slot.
    pub base: VariationSet,
    /// Alternates for the base glyphs; `variations[n][i]` is an alternate
    /// of `base[i]`.
    #[serde(default)]
    pub variations: Vec<VariationSet>,
}

fn default_depth() -> usize {
    DEFAULT_DEPTH
}

fn default_partitions() -> i64 {
    DEFAULT_PARTITIONS
}

impl Config {
    /// Create a configuration with default settings for the given glyph sets.
    pub fn new(base: VariationSet, variations: Vec<VariationSet>) -> Self {
        Config {
            seed: DEFAULT_SEED,
            depth: DEFAULT_DEPTH,
            partitions: DEFAULT_PARTITIONS,
            mode: RenderMode::default(),
            indent: String::new(),
            include_all_class: false,
            base,
            variations,
        }
    }

    pub fn from_toml(text: &str) -> Result<Self, Error> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml(&text)
    }

    /// The base set followed by each variation set, in state order.
    pub fn transitions(&self) -> Vec<VariationSet> {
        std::iter::once(&self.base)
            .chain(&self.variations)
            .cloned()
            .collect()
    }

    /// Ensure this configuration can be used to generate a feature.
    ///
    /// All problems are reported together.
    pub fn validate(&self) -> Result<(), Error> {
        let mut problems = Vec::new();
        if self.partitions < 1 {
            problems.push(format!("partitions must be at least 1, got {}", self.partitions));
        }
        for (i, variation) in self.variations.iter().enumerate() {
            if variation.len() != self.base.len() {
                problems.push(format!(
                    "variation {} has {} glyphs, but base has {}",
                    i + 1,
                    variation.len(),
                    self.base.len()
                ));
            }
        }
        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::Configuration(problems.join("; ")))
        }
    }

    /// The partition count, or zero if it isn't positive.
    pub fn partition_count(&self) -> usize {
        usize::try_from(self.partitions).unwrap_or(0)
    }

    /// Every glyph named by the base and variation sets.
    pub fn state_glyphs(&self) -> impl Iterator<Item = &GlyphName> + '_ {
        std::iter::once(&self.base)
            .chain(&self.variations)
            .flatten()
    }
}
