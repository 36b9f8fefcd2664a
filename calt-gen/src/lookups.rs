//! Planning the chained contextual lookups
//!
//! Each lookup fires when the glyph being shaped belongs to one transition
//! class and a glyph from a given partition appears `d` glyphs further
//! along, with `d` "skip" placeholders bridging the gap. Which partition a
//! run of text happens to hit, rather than a position counter, decides the
//! next substitution.

use crate::{
    glyphs::{ClassName, GlyphClass},
    transitions::{StateTransition, TransitionMap},
};

/// A single substitution rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupRule {
    pub name: String,
    /// The partition whose glyph triggers this rule.
    pub trigger: ClassName,
    /// The class repeated between the trigger and the substituted glyph.
    pub skip: ClassName,
    /// How many times `skip` is repeated.
    pub skip_count: usize,
    pub from: ClassName,
    pub to: ClassName,
}

/// All the rules sharing a lookahead depth, in reverse partition order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupGroup {
    pub depth: usize,
    pub rules: Vec<LookupRule>,
}

/// The sequence of transitions that lookups are assigned from.
///
/// This is built from the transition class names with the first name
/// appended again, and is deliberately kept apart from
/// [`TransitionMap::successors`]: that describes how states feed each
/// other, this decides which transition each partition's lookup applies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionCycle {
    pairs: Vec<StateTransition>,
}

impl TransitionCycle {
    pub fn new(names: &[ClassName]) -> Self {
        let Some(first) = names.first() else {
            return Self::default();
        };
        let p_names: Vec<_> = names.iter().chain(std::iter::once(first)).collect();
        let pairs = p_names
            .windows(2)
            .map(|pair| StateTransition {
                from: pair[0].clone(),
                to: pair[1].clone(),
            })
            .collect();
        TransitionCycle { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The transition for the `index`th lookup in a group, wrapping around.
    pub fn get(&self, index: usize) -> Option<&StateTransition> {
        if self.pairs.is_empty() {
            return None;
        }
        self.pairs.get(index % self.pairs.len())
    }
}

/// Build `depth` groups of one lookup per partition.
///
/// Group `d` holds the rules with `d` skip placeholders. Within a group the
/// partitions are visited in reverse, and the `i`th rule applies the `i`th
/// transition of the cycle regardless of depth. If there are no partitions
/// or no transitions, no lookups are produced.
pub fn plan_lookups(
    transitions: &TransitionMap,
    partitions: &[GlyphClass],
    skip: &ClassName,
    depth: usize,
) -> Vec<LookupGroup> {
    let cycle = TransitionCycle::new(&transitions.class_names());
    if cycle.is_empty() || partitions.is_empty() {
        return Vec::new();
    }

    (0..depth)
        .map(|d| {
            let rules = partitions
                .iter()
                .rev()
                .enumerate()
                .filter_map(|(i, partition)| {
                    let transition = cycle.get(i)?;
                    Some(LookupRule {
                        name: format!("skip{d}_partition{i}"),
                        trigger: partition.name().clone(),
                        skip: skip.clone(),
                        skip_count: d,
                        from: transition.from.clone(),
                        to: transition.to.clone(),
                    })
                })
                .collect();
            LookupGroup { depth: d, rules }
        })
        .collect()
}
