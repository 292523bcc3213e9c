//! Local fallback replies.
//!
//! Used whenever the external provider is disabled or a call fails. Keyword
//! categories are checked in [`Category::ORDERED`] order with plain substring
//! matching on the lower-cased prompt; the first match wins. Prompts matching
//! no category get one of [`GENERIC_TIPS`], chosen by a [`TipPicker`].

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Keyword category of a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Sadness,
    Anxiety,
    Boredom,
}

impl Category {
    /// Categories in precedence order.
    pub const ORDERED: [Category; 3] = [Category::Sadness, Category::Anxiety, Category::Boredom];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Sadness => &["sad", "down", "unhappy", "depressed", "lonely"],
            Category::Anxiety => &["anxious", "anxiety", "stressed", "nervous"],
            Category::Boredom => &["bored"],
        }
    }

    pub fn reply(self) -> &'static str {
        match self {
            Category::Sadness => {
                "I hear you — that sounds heavy. Try a 2-minute breathing exercise: \
                 inhale 4s, hold 4s, exhale 6s. Micro-challenge: step outside for 2 minutes."
            }
            Category::Anxiety => {
                "When anxiety rises, try grounding: name 5 things you can see, \
                 4 you can touch, 3 you can hear."
            }
            Category::Boredom => {
                "Boredom can be a spark. Micro-challenge: pick one small thing to try for 3 minutes."
            }
        }
    }

    /// First category with a keyword occurring anywhere in `prompt`.
    pub fn detect(prompt: &str) -> Option<Category> {
        let lower = prompt.to_lowercase();
        Self::ORDERED
            .into_iter()
            .find(|category| category.keywords().iter().any(|kw| lower.contains(kw)))
    }
}

/// Tips for prompts that match no category.
pub const GENERIC_TIPS: [&str; 3] = [
    "Try the 20-20-20 rule: every 20 minutes, look 20 feet away for 20 seconds.",
    "Turn off notifications for one hour and notice how you feel.",
    "Take three gentle breaths: in for 4, out for 6.",
];

/// Source of the index used to choose a generic tip.
pub trait TipPicker: Send + Sync {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}

/// Picks with the calling thread's RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl TipPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Picks from a seeded RNG, for reproducible sequences.
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl TipPicker for SeededPicker {
    fn pick(&self, len: usize) -> usize {
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .random_range(0..len)
    }
}

/// Reply for `prompt` without consulting any external provider.
pub fn local_reply(prompt: &str, picker: &dyn TipPicker) -> &'static str {
    match Category::detect(prompt) {
        Some(category) => category.reply(),
        None => GENERIC_TIPS[picker.pick(GENERIC_TIPS.len()) % GENERIC_TIPS.len()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always picks the same index.
    struct FixedPicker(usize);

    impl TipPicker for FixedPicker {
        fn pick(&self, _len: usize) -> usize {
            self.0
        }
    }

    #[test]
    fn each_keyword_selects_its_category() {
        for category in Category::ORDERED {
            for kw in category.keywords() {
                let prompt = format!("lately I feel {kw}");
                assert_eq!(Category::detect(&prompt), Some(category), "keyword {kw}");
            }
        }
    }

    #[test]
    fn sadness_takes_precedence_over_anxiety() {
        assert_eq!(
            local_reply("I feel sad and anxious", &FixedPicker(0)),
            Category::Sadness.reply()
        );
    }

    #[test]
    fn anxiety_takes_precedence_over_boredom() {
        assert_eq!(
            Category::detect("bored but also nervous"),
            Some(Category::Anxiety)
        );
    }

    #[test]
    fn matching_is_substring_based() {
        assert_eq!(
            Category::detect("I am so sadful today"),
            Some(Category::Sadness)
        );
        assert_eq!(Category::detect("sadness"), Some(Category::Sadness));
        // "down" inside "download" still counts.
        assert_eq!(
            Category::detect("my download failed"),
            Some(Category::Sadness)
        );
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(Category::detect("SO STRESSED"), Some(Category::Anxiety));
        assert_eq!(Category::detect("Bored."), Some(Category::Boredom));
    }

    #[test]
    fn no_keyword_returns_generic_tip() {
        for i in 0..GENERIC_TIPS.len() {
            assert_eq!(
                local_reply("what time is it", &FixedPicker(i)),
                GENERIC_TIPS[i]
            );
        }
    }

    #[test]
    fn out_of_range_pick_stays_in_tip_set() {
        assert!(GENERIC_TIPS.contains(&local_reply("hello", &FixedPicker(7))));
    }

    #[test]
    fn seeded_picker_is_reproducible() {
        let a = SeededPicker::new(7);
        let b = SeededPicker::new(7);
        let seq_a: Vec<usize> = (0..50).map(|_| a.pick(3)).collect();
        let seq_b: Vec<usize> = (0..50).map(|_| b.pick(3)).collect();
        assert_eq!(seq_a, seq_b);
        assert!(seq_a.iter().all(|i| *i < 3));
    }

    #[test]
    fn thread_rng_picker_stays_in_range() {
        let picker = ThreadRngPicker;
        for _ in 0..200 {
            assert!(picker.pick(3) < 3);
        }
    }

    #[test]
    fn generic_tips_are_uniform() {
        const SAMPLES: usize = 3000;
        let picker = SeededPicker::new(0x5007_4e);
        let mut counts = [0usize; GENERIC_TIPS.len()];
        for _ in 0..SAMPLES {
            let reply = local_reply("what time is it", &picker);
            let idx = GENERIC_TIPS
                .iter()
                .position(|tip| *tip == reply)
                .expect("reply is a generic tip");
            counts[idx] += 1;
        }

        let expected = SAMPLES as f64 / GENERIC_TIPS.len() as f64;
        let chi_square: f64 = counts
            .iter()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();
        // Critical value for 2 degrees of freedom at p = 0.001.
        assert!(
            chi_square < 13.816,
            "chi-square {chi_square} too large for counts {counts:?}"
        );
    }
}
