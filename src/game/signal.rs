//! The four-symbol signal alphabet and where new signals come from.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One element of the alphabet the player has to recall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Green,
    Red,
    Orange,
    Blue,
}

impl Signal {
    /// The whole alphabet, indexed 0..=3.
    pub const ALL: [Signal; 4] = [Signal::Green, Signal::Red, Signal::Orange, Signal::Blue];

    /// Signal at `index`, or `None` outside the alphabet.
    pub fn from_index(index: usize) -> Option<Signal> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Signal::Green => 0,
            Signal::Red => 1,
            Signal::Orange => 2,
            Signal::Blue => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Signal::Green => "green",
            Signal::Red => "red",
            Signal::Orange => "orange",
            Signal::Blue => "blue",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A color name that is not part of the alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown signal '{0}', expected one of green, red, orange, blue")]
pub struct UnknownSignal(pub String);

impl FromStr for Signal {
    type Err = UnknownSignal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|signal| signal.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSignal(s.to_string()))
    }
}

/// Supplies the signal appended at the start of each round.
///
/// Any `FnMut() -> Signal` closure is a source, which makes scripted games
/// trivial to set up.
pub trait SignalSource {
    fn next_signal(&mut self) -> Signal;
}

impl<F> SignalSource for F
where
    F: FnMut() -> Signal,
{
    fn next_signal(&mut self) -> Signal {
        self()
    }
}

/// Uniform random signals drawn from a ChaCha8 generator.
///
/// Seeded sources replay the exact same game, which is what tests and bug
/// reports want; unseeded sources draw their seed from the OS.
#[derive(Debug, Clone)]
pub struct RandomSignals {
    rng: ChaCha8Rng,
}

impl RandomSignals {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Seeded when `seed` is given, entropy-backed otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl SignalSource for RandomSignals {
    fn next_signal(&mut self) -> Signal {
        Signal::ALL[self.rng.gen_range(0..Signal::ALL.len())]
    }
}
