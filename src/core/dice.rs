// Random source used by the battle engine and the session
//
// Everything random in the game (damage variance, coin drops, action
// commands, superguards, random encounters, enemy sampling) goes through
// `Dice` so tests can script exact outcomes.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of game randomness
pub trait Dice {
    /// Uniform integer in `low..=high`
    fn roll(&mut self, low: i32, high: i32) -> i32;

    /// `true` with the given probability
    fn chance(&mut self, probability: f64) -> bool;

    /// `amount` distinct indices drawn from `0..len` (without replacement)
    fn sample(&mut self, len: usize, amount: usize) -> Vec<usize>;
}

/// `Dice` backed by a real pseudo-random generator
#[derive(Debug, Clone)]
pub struct RandomDice<R = SmallRng> {
    rng: R,
}

impl RandomDice<SmallRng> {
    /// Deterministic dice for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Dice seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl<R: Rng> Dice for RandomDice<R> {
    fn roll(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }

    fn sample(&mut self, len: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(len);
        rand::seq::index::sample(&mut self.rng, len, amount).into_vec()
    }
}

/// Dice that replay scripted outcomes
///
/// Once a script runs dry the dice fall back to the lowest roll, failed
/// chances and the first `amount` indices.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedDice {
    rolls: std::collections::VecDeque<i32>,
    chances: std::collections::VecDeque<bool>,
    samples: std::collections::VecDeque<Vec<usize>>,
}

#[cfg(test)]
impl ScriptedDice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rolls(mut self, rolls: &[i32]) -> Self {
        self.rolls.extend(rolls.iter().copied());
        self
    }

    pub fn with_chances(mut self, chances: &[bool]) -> Self {
        self.chances.extend(chances.iter().copied());
        self
    }

    pub fn with_sample(mut self, indices: &[usize]) -> Self {
        self.samples.push_back(indices.to_vec());
        self
    }
}

#[cfg(test)]
impl Dice for ScriptedDice {
    fn roll(&mut self, low: i32, high: i32) -> i32 {
        self.rolls
            .pop_front()
            .map_or(low, |value| value.clamp(low, high.max(low)))
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }

    fn sample(&mut self, len: usize, amount: usize) -> Vec<usize> {
        self.samples
            .pop_front()
            .unwrap_or_else(|| (0..amount.min(len)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_stays_in_range() {
        let mut dice = RandomDice::seeded(7);
        for _ in 0..500 {
            let value = dice.roll(1, 3);
            assert!((1..=3).contains(&value));
        }
    }

    #[test]
    fn test_degenerate_roll_returns_low() {
        let mut dice = RandomDice::seeded(7);
        assert_eq!(dice.roll(4, 4), 4);
        assert_eq!(dice.roll(4, 2), 4);
    }

    #[test]
    fn test_chance_extremes() {
        let mut dice = RandomDice::seeded(11);
        for _ in 0..100 {
            assert!(dice.chance(1.0));
            assert!(!dice.chance(0.0));
        }
    }

    #[test]
    fn test_sample_is_without_replacement() {
        let mut dice = RandomDice::seeded(3);
        for _ in 0..100 {
            let mut picked = dice.sample(5, 3);
            assert_eq!(picked.len(), 3);
            picked.sort_unstable();
            picked.dedup();
            assert_eq!(picked.len(), 3);
            assert!(picked.iter().all(|&i| i < 5));
        }
    }

    #[test]
    fn test_sample_caps_amount_at_len() {
        let mut dice = RandomDice::seeded(3);
        assert_eq!(dice.sample(2, 3).len(), 2);
        assert!(dice.sample(0, 3).is_empty());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomDice::seeded(42);
        let mut b = RandomDice::seeded(42);
        let rolls_a: Vec<i32> = (0..20).map(|_| a.roll(1, 100)).collect();
        let rolls_b: Vec<i32> = (0..20).map(|_| b.roll(1, 100)).collect();
        assert_eq!(rolls_a, rolls_b);
    }

    #[test]
    fn test_scripted_dice_replays_then_falls_back() {
        let mut dice = ScriptedDice::new()
            .with_rolls(&[2])
            .with_chances(&[true])
            .with_sample(&[2, 0]);
        assert_eq!(dice.roll(1, 3), 2);
        assert_eq!(dice.roll(1, 3), 1);
        assert!(dice.chance(0.7));
        assert!(!dice.chance(0.7));
        assert_eq!(dice.sample(3, 2), vec![2, 0]);
        assert_eq!(dice.sample(3, 2), vec![0, 1]);
    }
}
