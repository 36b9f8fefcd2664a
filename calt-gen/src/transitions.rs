//! The cyclic permutation over state classes

use crate::glyphs::{ClassName, GlyphClass};

/// A directed edge from one class to the class that follows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateTransition {
    pub from: ClassName,
    pub to: ClassName,
}

/// The transition classes derived from a list of state classes.
///
/// For N states, transition class `i` lists every state name rotated left by
/// `i`, so that class `i` starts at state `i` and wraps around to state `i - 1`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionMap {
    states: Vec<ClassName>,
    classes: Vec<GlyphClass>,
}

/// The name of the transition class starting at state `index`.
pub fn transition_name(index: usize) -> ClassName {
    ClassName::new(format!("state{index}"))
}

/// Pair every name with the one after it, closing the cycle at the end.
///
/// A single name produces one self-transition; no names produce nothing.
pub fn successor_pairs(names: &[ClassName]) -> Vec<StateTransition> {
    (0..names.len())
        .map(|i| StateTransition {
            from: names[i].clone(),
            to: names[(i + 1) % names.len()].clone(),
        })
        .collect()
}

impl TransitionMap {
    pub fn from_states(states: &[GlyphClass]) -> Self {
        let states: Vec<_> = states.iter().map(|class| class.name().clone()).collect();
        let classes = (0..states.len())
            .map(|i| {
                let rotated = states[i..].iter().chain(&states[..i]);
                GlyphClass::from_classes(transition_name(i), rotated)
            })
            .collect();
        TransitionMap { states, classes }
    }

    /// The rotation classes, in state order.
    pub fn classes(&self) -> &[GlyphClass] {
        &self.classes
    }

    pub fn class_names(&self) -> Vec<ClassName> {
        self.classes.iter().map(|c| c.name().clone()).collect()
    }

    /// The successor of each state: state `i` feeds state `(i + 1) % N`.
    pub fn successors(&self) -> Vec<StateTransition> {
        successor_pairs(&self.states)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
