//! Random helpers. Every function takes the generator explicitly, so callers
//! decide between `rand::rng()` and a seeded `StdRng`.
use rand::Rng;
use std::net::Ipv4Addr;
use thiserror::Error;

/// Digits that still fit in a `u64`
pub const MAX_DIGITS: u32 = 19;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RandomError {
    #[error("digit count {0} is outside 1..=19")]
    DigitCount(u32),
}

impl RandomError {
    pub fn code(&self) -> &str {
        match self {
            RandomError::DigitCount(_) => "digit_count",
        }
    }
}

/// A number with exactly `digits` decimal digits (no leading zero)
pub fn random_number<R: Rng>(rng: &mut R, digits: u32) -> Result<u64, RandomError> {
    if digits == 0 || digits > MAX_DIGITS {
        return Err(RandomError::DigitCount(digits));
    }

    let mut value: u64 = rng.random_range(1..=9);
    for _ in 1..digits {
        value = value * 10 + rng.random_range(0..=9u64);
    }
    Ok(value)
}

pub fn random_ip<R: Rng>(rng: &mut R) -> Ipv4Addr {
    let octets: [u8; 4] = rng.random();
    Ipv4Addr::from(octets)
}

/// Uniformly chosen element, `None` for an empty slice
pub fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.random_range(0..items.len()))
}
