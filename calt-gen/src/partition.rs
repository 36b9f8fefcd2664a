//! Randomly splitting the glyph inventory into trigger partitions

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    error::Error,
    glyphs::{ClassName, GlyphClass, GlyphName},
};

/// A source of random indices.
///
/// Partitioning consumes this strictly in order, so a given sequence of
/// indices always produces the same partitions.
pub trait RandomSource {
    /// Return an index in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// A [`RandomSource`] backed by a seeded [`StdRng`].
#[derive(Clone, Debug)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}

/// The result of partitioning an inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partitions {
    /// One class per partition, with contents sorted.
    pub classes: Vec<GlyphClass>,
    /// Glyphs left over when the inventory size isn't a multiple of `k`.
    ///
    /// These are never assigned to any partition.
    pub unassigned: Vec<GlyphName>,
}

/// The name of the partition at `index`.
pub fn partition_name(index: usize) -> ClassName {
    ClassName::new(format!("partition{index}"))
}

/// Split `inventory` into `k` equally sized, disjoint partitions.
///
/// Each of the `len / k` rounds draws one glyph for every partition in
/// turn, without replacement, from the glyphs not yet assigned. Every
/// partition ends up with exactly `len / k` glyphs; any remainder is
/// returned in [`Partitions::unassigned`].
pub fn build_partitions(
    inventory: &[GlyphName],
    k: usize,
    rng: &mut impl RandomSource,
) -> Result<Partitions, Error> {
    if k == 0 {
        return Err(Error::Configuration("partition count must be at least 1".into()));
    }

    let rounds = inventory.len() / k;
    let mut pool = inventory.to_vec();
    let mut members = vec![Vec::with_capacity(rounds); k];
    for _ in 0..rounds {
        for partition in members.iter_mut() {
            // the remaining pool keeps its order, so draws depend only on the rng
            let ix = rng.next_index(pool.len());
            partition.push(pool.remove(ix));
        }
    }

    if !pool.is_empty() {
        log::warn!(
            "{} glyph(s) not assigned to any partition: {}",
            pool.len(),
            pool.iter()
                .map(GlyphName::as_str)
                .collect::<Vec<_>>()
                .join(" ")
        );
    }

    let classes = members
        .into_iter()
        .enumerate()
        .map(|(i, mut glyphs)| {
            glyphs.sort();
            GlyphClass::from_glyphs(partition_name(i), glyphs)
        })
        .collect();

    Ok(Partitions {
        classes,
        unassigned: pool,
    })
}


#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{test_helpers::ScriptedRandom, *};

    fn inventory(n: usize) -> Vec<GlyphName> {
        (0..n).map(|i| GlyphName::new(format!("glyph{i:03}"))).collect()
    }

    fn glyph_sets(partitions: &Partitions) -> Vec<HashSet<GlyphName>> {
        partitions
            .classes
            .iter()
            .map(|class| class.glyphs().cloned().collect())
            .collect()
    }

    #[test]
    fn scripted_draws() {
        let glyphs: Vec<GlyphName> = ["a", "abreve", "b"].into_iter().map(Into::into).collect();
        let mut rng = ScriptedRandom::new([2, 0]);
        let partitions = build_partitions(&glyphs, 2, &mut rng).unwrap();
        assert_eq!(partitions.classes[0].body(), "[b]");
        assert_eq!(partitions.classes[1].body(), "[a]");
        assert_eq!(partitions.unassigned, vec![GlyphName::from("abreve")]);
    }

    #[test]
    fn round_robin_then_sorted() {
        // pool: [a b c d]; p0 <- d, p1 <- a, p0 <- c, p1 <- b
        let glyphs: Vec<GlyphName> = ["a", "b", "c", "d"].into_iter().map(Into::into).collect();
        let mut rng = ScriptedRandom::new([3, 0, 1, 0]);
        let partitions = build_partitions(&glyphs, 2, &mut rng).unwrap();
        assert_eq!(partitions.classes[0].body(), "[c d]");
        assert_eq!(partitions.classes[1].body(), "[a b]");
        assert!(partitions.unassigned.is_empty());
    }

    #[test]
    fn deterministic_for_seed() {
        let glyphs = inventory(57);
        let one = build_partitions(&glyphs, 3, &mut SeededRandom::new(0)).unwrap();
        let two = build_partitions(&glyphs, 3, &mut SeededRandom::new(0)).unwrap();
        assert_eq!(one, two);
    }

    #[test]
    fn equal_sizes_and_disjoint() {
        let glyphs = inventory(103);
        for k in 1..=7 {
            let partitions = build_partitions(&glyphs, k, &mut SeededRandom::new(42)).unwrap();
            let sets = glyph_sets(&partitions);
            assert_eq!(sets.len(), k);
            for set in &sets {
                assert_eq!(set.len(), glyphs.len() / k);
            }
            for i in 0..k {
                for j in (i + 1)..k {
                    assert!(sets[i].is_disjoint(&sets[j]), "k={k} {i} {j}");
                }
            }
            let union: HashSet<_> = sets.iter().flatten().collect();
            assert_eq!(union.len(), k * (glyphs.len() / k));
            assert_eq!(partitions.unassigned.len(), glyphs.len() % k);
        }
    }

    #[test]
    fn contents_are_sorted() {
        let glyphs = inventory(40);
        let partitions = build_partitions(&glyphs, 4, &mut SeededRandom::new(7)).unwrap();
        for class in &partitions.classes {
            let members: Vec<_> = class.glyphs().collect();
            let mut sorted = members.clone();
            sorted.sort();
            assert_eq!(members, sorted);
        }
    }

    #[test]
    fn empty_inventory_gives_empty_partitions() {
        let partitions = build_partitions(&[], 3, &mut SeededRandom::new(0)).unwrap();
        assert_eq!(partitions.classes.len(), 3);
        assert!(partitions.classes.iter().all(GlyphClass::is_empty));
    }

    #[test]
    fn fewer_glyphs_than_partitions() {
        let glyphs = inventory(2);
        let partitions = build_partitions(&glyphs, 5, &mut SeededRandom::new(0)).unwrap();
        assert!(partitions.classes.iter().all(GlyphClass::is_empty));
        assert_eq!(partitions.unassigned, glyphs);
    }

    #[test]
    fn zero_partitions_is_an_error() {
        let result = build_partitions(&inventory(3), 0, &mut SeededRandom::new(0));
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
