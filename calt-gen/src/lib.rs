//! Generate pseudo-random contextual alternates.
//!
//! Given a set of base glyphs and one or more sets of alternates, this crate
//! generates `calt` feature code that cycles each glyph through its
//! alternates in a pattern that looks random rather than periodic. This is
//! the "quantum" technique described in the [OpenType Cookbook]: the whole
//! glyph set is randomly split into a few partitions, and which partition
//! the upcoming glyphs fall into decides the next alternate.
//!
//! The generator runs as a single pass:
//!
//! - each variation set becomes a state class ([`states`])
//! - the states are arranged in a cycle of transition classes ([`transitions`])
//! - the glyph inventory is split into partitions ([`partition`])
//! - one lookup is planned per partition and lookahead depth ([`lookups`])
//! - everything is rendered as feature file text ([`emit`])
//!
//! ```no_run
//! # fn main() -> Result<(), calt_gen::Error> {
//! use calt_gen::{Config, GlyphInventory};
//!
//! let config = Config::load("calt.toml")?;
//! let inventory = GlyphInventory::load("MyFont.ttf")?;
//! println!("{}", calt_gen::compile(&config, &inventory)?);
//! # Ok(())
//! # }
//! ```
//!
//! [OpenType Cookbook]: https://opentypecookbook.com/common-techniques/

pub mod config;
pub mod emit;
mod error;
pub mod glyphs;
pub mod inventory;
pub mod lookups;
pub mod partition;
pub mod states;
pub mod transitions;

pub use config::Config;
pub use emit::{Emitter, FeatureProgram, RenderMode};
pub use error::Error;
pub use glyphs::{ClassItem, ClassName, GlyphClass, GlyphName, VariationSet};
pub use inventory::GlyphInventory;
pub use partition::{RandomSource, SeededRandom};

use transitions::TransitionMap;

/// The name of the class containing every exported glyph.
pub const ALL_CLASS: &str = "All";
/// The name of the class used to fill the gap before a lookahead trigger.
pub const SKIP_CLASS: &str = "skip";

/// Generate the feature program for `config`, drawing partitions from `rng`.
///
/// The configuration is validated before anything is drawn from `rng`.
pub fn build_program(
    config: &Config,
    inventory: &GlyphInventory,
    rng: &mut impl RandomSource,
) -> Result<FeatureProgram, Error> {
    config.validate()?;
    check_inventory(config, inventory);

    let states = states::build_states(&config.transitions());
    let transitions = TransitionMap::from_states(&states);
    let k = config.partition_count();
    let partitions = partition::build_partitions(inventory.glyphs(), k, rng)?;
    log::debug!(
        "{} states, {} partitions of {} glyphs",
        states.len(),
        partitions.classes.len(),
        inventory.len() / k
    );

    let all = GlyphClass::from_glyphs(ClassName::new(ALL_CLASS), inventory.glyphs().to_vec());
    let skip = GlyphClass::from_classes(ClassName::new(SKIP_CLASS), [all.name()]);
    let lookups =
        lookups::plan_lookups(&transitions, &partitions.classes, skip.name(), config.depth);
    log::debug!("planned {} lookup groups", lookups.len());

    Ok(FeatureProgram {
        states,
        transitions: transitions.classes().to_vec(),
        partitions: partitions.classes,
        all,
        skip,
        lookups,
    })
}

/// Generate and render the feature described by `config`.
///
/// Partitions are drawn from a generator seeded with [`Config::seed`], so
/// the same inputs always produce the same output.
pub fn compile(config: &Config, inventory: &GlyphInventory) -> Result<String, Error> {
    let mut rng = SeededRandom::new(config.seed);
    let program = build_program(config, inventory, &mut rng)?;
    let emitter = Emitter::new(config.indent.as_str()).with_all_class(config.include_all_class);
    Ok(emitter.render(&program, config.mode))
}

// Suspicious but legal input: report it, don't reject it.
fn check_inventory(config: &Config, inventory: &GlyphInventory) {
    if inventory.is_empty() {
        log::warn!("glyph inventory is empty, all partitions will be empty");
    }
    for glyph in inventory.duplicates() {
        log::warn!("glyph '{glyph}' appears more than once in the inventory");
    }
    if !inventory.is_empty() {
        for glyph in config.state_glyphs().filter(|g| !inventory.contains(g)) {
            log::warn!("glyph '{glyph}' is not in the glyph inventory");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::partition::test_helpers::ScriptedRandom;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn minimal_config() -> Config {
        let mut config = Config::new(vec!["a".into()], vec![vec!["abreve".into()]]);
        config.depth = 1;
        config
    }

    fn minimal_inventory() -> GlyphInventory {
        GlyphInventory::from_text("a abreve b")
    }

    #[test]
    fn minimal_scripted() {
        init();
        let program = build_program(
            &minimal_config(),
            &minimal_inventory(),
            &mut ScriptedRandom::new([2, 0]),
        )
        .unwrap();
        let expected = "\
@transformation0 = [a];
@transformation1 = [abreve];

@state0 = [@transformation0 @transformation1];
@state1 = [@transformation1 @transformation0];

@partition0 = [b];
@partition1 = [a];

@skip = [@All];

lookup skip0_partition0 {
\tsub @partition1 @state0' by @state1;
} skip0_partition0;

lookup skip0_partition1 {
\tsub @partition0 @state1' by @state0;
} skip0_partition1;

";
        assert_eq!(Emitter::default().render_body(&program), expected);
    }

    #[test]
    fn invalid_config_draws_nothing() {
        struct Untouchable;
        impl RandomSource for Untouchable {
            fn next_index(&mut self, _bound: usize) -> usize {
                panic!("rng used before validation finished");
            }
        }

        let mut config = minimal_config();
        config.variations.push(vec!["aacute".into(), "extra".into()]);
        let result = build_program(&config, &minimal_inventory(), &mut Untouchable);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn all_class_is_the_full_inventory() {
        let program = build_program(
            &minimal_config(),
            &minimal_inventory(),
            &mut SeededRandom::new(0),
        )
        .unwrap();
        assert_eq!(program.all.body(), "[a abreve b]");
        assert_eq!(program.skip.body(), "[@All]");
    }

    #[test]
    fn compile_honours_mode() {
        let mut config = minimal_config();
        config.mode = RenderMode::Feature;
        let text = compile(&config, &minimal_inventory()).unwrap();
        assert!(text.starts_with("feature calt {"));
        assert!(text.ends_with("} calt;"));
    }
}
