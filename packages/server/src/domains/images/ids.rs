//! Collision-resistant local identifiers for compressed files.

use rand::Rng;
use std::collections::HashSet;

// Smallest and largest values that print to exactly ten digits.
const MIN_ID: u64 = 1_000_000_000;
const MAX_ID: u64 = 10_000_000_000;

/// Generates numeric file identifiers unique within one pipeline invocation.
///
/// No cross-invocation guarantee: a fresh generator starts with an empty
/// issued set.
#[derive(Debug, Default)]
pub struct FileIdGenerator {
    issued: HashSet<u64>,
}

impl FileIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a fresh 10-digit identifier. A collision with an already issued
    /// value silently redraws.
    pub fn generate(&mut self) -> String {
        let mut rng = rand::rng();
        loop {
            let candidate = rng.random_range(MIN_ID..MAX_ID);
            if self.issued.insert(candidate) {
                return candidate.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_ten_digit_numeric_strings() {
        let mut ids = FileIdGenerator::new();
        for _ in 0..100 {
            let id = ids.generate();
            assert_eq!(id.len(), 10);
            assert!(id.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn ids_are_pairwise_distinct_within_one_generator() {
        let mut ids = FileIdGenerator::new();
        let drawn: HashSet<String> = (0..1000).map(|_| ids.generate()).collect();
        assert_eq!(drawn.len(), 1000);
    }
}
