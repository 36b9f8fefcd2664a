//! Turning variation sets into state classes

use crate::glyphs::{ClassName, GlyphClass, VariationSet};

/// The name of the state class for the variation set at `index`.
pub fn state_name(index: usize) -> ClassName {
    ClassName::new(format!("transformation{index}"))
}

/// Build one state class per variation set.
///
/// Index 0 is the base set by convention. Glyphs keep their original order,
/// since position `i` in every state refers to the same slot.
pub fn build_states(transitions: &[VariationSet]) -> Vec<GlyphClass> {
    transitions
        .iter()
        .enumerate()
        .map(|(i, set)| GlyphClass::from_glyphs(state_name(i), set.iter().cloned()))
        .collect()
}
