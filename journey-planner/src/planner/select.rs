//! Random candidate selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of "pick and remove" choices over a candidate list.
///
/// The composer never reads ambient randomness; it asks a picker, so a run
/// can be reproduced with a seeded picker or scripted in tests.
pub trait CandidatePicker {
    /// Remove and return one element of `items`, or `None` when it is empty.
    fn pick<T>(&mut self, items: &mut Vec<T>) -> Option<T>;
}

/// Picks uniformly at random.
#[derive(Debug, Clone)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// A picker seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// A reproducible picker.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl CandidatePicker for RandomPicker {
    fn pick<T>(&mut self, items: &mut Vec<T>) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..items.len());
        Some(items.swap_remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_yields_none() {
        let mut picker = RandomPicker::seeded(7);
        let mut items: Vec<u32> = Vec::new();
        assert_eq!(picker.pick(&mut items), None);
    }

    #[test]
    fn drains_every_element_exactly_once() {
        let mut picker = RandomPicker::seeded(7);
        let mut items: Vec<u32> = (0..20).collect();

        let mut seen = Vec::new();
        while let Some(item) = picker.pick(&mut items) {
            seen.push(item);
        }

        seen.sort_unstable();
        assert_eq!(seen, (0..20).collect::<Vec<_>>());
        assert!(items.is_empty());
    }

    #[test]
    fn same_seed_same_sequence() {
        let draw = |seed| {
            let mut picker = RandomPicker::seeded(seed);
            let mut items: Vec<u32> = (0..10).collect();
            std::iter::from_fn(|| picker.pick(&mut items)).collect::<Vec<_>>()
        };

        assert_eq!(draw(42), draw(42));
    }

    #[test]
    fn every_index_reachable() {
        let mut picker = RandomPicker::seeded(1);
        let mut counts = [0usize; 4];
        for _ in 0..4000 {
            let mut items = vec![0usize, 1, 2, 3];
            let picked = picker.pick(&mut items).unwrap();
            counts[picked] += 1;
        }
        // Uniform within a generous tolerance
        for count in counts {
            assert!((800..1200).contains(&count), "counts: {counts:?}");
        }
    }
}
