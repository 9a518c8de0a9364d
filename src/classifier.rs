// src/classifier.rs
// Keyword dispatch from a chat message to a response template

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use crate::config::AppConfig;
use crate::templates::TemplateKey;

/// Source of the weighted coin flip used for viability questions.
pub trait RandomSource: Send + Sync {
    /// Returns `true` with the given probability, which must lie in `[0, 1]`.
    fn chance(&self, probability: f64) -> bool;
}

/// Draws from the thread-local generator.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn chance(&self, probability: f64) -> bool {
        rand::thread_rng().gen_bool(probability)
    }
}

/// Reproducible draws from a seeded `StdRng`.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn chance(&self, probability: f64) -> bool {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_bool(probability)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Fixed(TemplateKey),
    /// Positive with the configured probability, negative otherwise.
    Viability,
}

/// Matches when every group has at least one keyword contained in the message.
struct Rule {
    groups: &'static [&'static [&'static str]],
    outcome: Outcome,
}

impl Rule {
    fn matches(&self, message: &str) -> bool {
        self.groups
            .iter()
            .all(|group| group.iter().any(|keyword| message.contains(keyword)))
    }
}

// Order matters: first match wins.
static RULES: &[Rule] = &[
    Rule {
        groups: &[&["analyze crut viability", "asset value"]],
        outcome: Outcome::Fixed(TemplateKey::CrutPositive),
    },
    Rule {
        groups: &[&["what is"], &["crut", "charitable remainder"]],
        outcome: Outcome::Fixed(TemplateKey::CrutExplanation),
    },
    Rule {
        groups: &[&["fit", "correct", "right", "strategy"], &["crut", "charitable"]],
        outcome: Outcome::Viability,
    },
    Rule {
        groups: &[&["crut", "charitable remainder"]],
        outcome: Outcome::Fixed(TemplateKey::CrutExplanation),
    },
];

pub struct Classifier {
    positive_probability: f64,
    random: Box<dyn RandomSource>,
}

impl Classifier {
    pub fn new(positive_probability: f64, random: Box<dyn RandomSource>) -> Self {
        Self {
            positive_probability: positive_probability.clamp(0.0, 1.0),
            random,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let random: Box<dyn RandomSource> = match config.rng_seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(ThreadRandom),
        };
        Self::new(config.positive_probability, random)
    }

    pub fn classify(&self, message: &str) -> TemplateKey {
        let message = message.to_lowercase();

        let outcome = RULES
            .iter()
            .find(|rule| rule.matches(&message))
            .map(|rule| rule.outcome)
            .unwrap_or(Outcome::Fixed(TemplateKey::General));

        match outcome {
            Outcome::Fixed(key) => key,
            Outcome::Viability => {
                if self.random.chance(self.positive_probability) {
                    TemplateKey::CrutPositive
                } else {
                    TemplateKey::CrutNegative
                }
            }
        }
    }
}
