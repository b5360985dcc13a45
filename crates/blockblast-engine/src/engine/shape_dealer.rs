use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::{SHAPE_CATALOG, Shape};

/// Number of shapes dealt per turn.
pub const TRAY_SIZE: usize = 3;

/// Deals trays of shapes drawn uniformly, with replacement, from
/// [`SHAPE_CATALOG`].
///
/// # Example
///
/// ```
/// use blockblast_engine::{DealSeed, ShapeDealer};
///
/// let seed: DealSeed = "00112233445566778899aabbccddeeff".parse().unwrap();
/// let mut a = ShapeDealer::with_seed(seed);
/// let mut b = ShapeDealer::with_seed(seed);
/// assert_eq!(a.deal(), b.deal());
/// ```
#[derive(Debug, Clone)]
pub struct ShapeDealer {
    rng: Pcg32,
}

impl Default for ShapeDealer {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeDealer {
    /// Creates a dealer with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but deterministic.
    #[must_use]
    pub fn with_seed(seed: DealSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
        }
    }

    pub fn next_shape(&mut self) -> Shape {
        SHAPE_CATALOG[self.rng.random_range(0..SHAPE_CATALOG.len())]
    }

    pub fn deal(&mut self) -> [Shape; TRAY_SIZE] {
        std::array::from_fn(|_| self.next_shape())
    }
}

/// 128-bit seed for deterministic dealing.
///
/// Written as a 32-character hex string, both in `Display`/`FromStr` and in serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DealSeed([u8; 16]);

/// A seed string that is not 32 hex characters.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid hex seed {input:?}: expected 32 hex characters")]
pub struct InvalidSeedError {
    input: String,
}

impl DealSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl fmt::Display for DealSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for DealSeed {
    type Err = InvalidSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidSeedError {
            input: s.to_owned(),
        };
        if s.len() != 32 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| invalid())?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for DealSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DealSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Enables `rng.random::<DealSeed>()`.
impl Distribution<DealSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DealSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        DealSeed(seed)
    }
}
