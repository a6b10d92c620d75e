//! Coin record with a randomized flip.
//!
//! A coin carries a monetary value, a currency label, the face currently
//! shown, and a minting year. The only behavior is [`Coin::flip`], which
//! reassigns the face uniformly at random.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// The face a coin currently shows.
///
/// Serializes to the literal strings `"heads"` / `"tails"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    Heads,
    Tails,
}

impl Face {
    /// The wire/string form of this face.
    pub fn as_str(self) -> &'static str {
        match self {
            Face::Heads => "heads",
            Face::Tails => "tails",
        }
    }
}

/// A single coin.
///
/// No invariants are enforced: a negative value or an arbitrary year is
/// accepted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    /// Monetary value of the coin.
    pub value: f64,
    /// Currency label (e.g. `"dollar"`).
    pub currency: String,
    /// Face currently shown.
    pub face_up: Face,
    /// Minting year.
    pub year: i32,
}

impl Coin {
    pub fn new(value: f64, currency: impl Into<String>, face_up: Face, year: i32) -> Self {
        Self {
            value,
            currency: currency.into(),
            face_up,
            year,
        }
    }

    /// A 1987 US quarter, heads up.
    pub fn quarter() -> Self {
        Self::new(0.25, "dollar", Face::Heads, 1987)
    }

    /// A 2002 US dime, tails up.
    pub fn dime() -> Self {
        Self::new(0.10, "dollar", Face::Tails, 2002)
    }

    /// A 1995 US nickel, heads up.
    pub fn nickel() -> Self {
        Self::new(0.05, "dollar", Face::Heads, 1995)
    }

    /// Overwrite `face_up` with a uniformly random face.
    ///
    /// Each outcome has probability 1/2, independent of the current face.
    pub fn flip(&mut self) {
        self.face_up = if rand::rng().random_bool(0.5) {
            Face::Heads
        } else {
            Face::Tails
        };
    }
}
