// 🏆 Rank - prize tiers by match count

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// RANK
// ============================================================================

/// Prize tier. Variants are declared lowest first so the derived `Ord`
/// makes `First` the greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Fewer than three matches
    None,

    /// Zero-prize tier kept for display; match counts never land here
    Fifth,

    /// Three matches
    Fourth,

    /// Four matches
    Third,

    /// Five matches
    Second,

    /// All six numbers
    First,
}

impl Rank {
    /// Every tier, best first
    pub const ALL: [Rank; 6] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
        Rank::None,
    ];

    pub fn for_match_count(count: usize) -> Rank {
        match count {
            6 => Rank::First,
            5 => Rank::Second,
            4 => Rank::Third,
            3 => Rank::Fourth,
            _ => Rank::None,
        }
    }

    pub fn match_threshold(&self) -> usize {
        match self {
            Rank::First => 6,
            Rank::Second => 5,
            Rank::Third => 4,
            Rank::Fourth => 3,
            Rank::Fifth => 2,
            Rank::None => 0,
        }
    }

    /// Fixed cash prize in won
    pub fn prize(&self) -> u64 {
        match self {
            Rank::First => 2_000_000_000,
            Rank::Second => 1_500_000,
            Rank::Third => 50_000,
            Rank::Fourth => 5_000,
            Rank::Fifth | Rank::None => 0,
        }
    }

    pub fn is_winning(&self) -> bool {
        self.prize() > 0
    }

    /// Tiers that pay out, in descending prize order
    pub fn ranked() -> impl DoubleEndedIterator<Item = Rank> {
        Rank::ALL.into_iter().filter(Rank::is_winning)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::First => "First",
            Rank::Second => "Second",
            Rank::Third => "Third",
            Rank::Fourth => "Fourth",
            Rank::Fifth => "Fifth",
            Rank::None => "None",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_match_count() {
        assert_eq!(Rank::for_match_count(6), Rank::First);
        assert_eq!(Rank::for_match_count(5), Rank::Second);
        assert_eq!(Rank::for_match_count(4), Rank::Third);
        assert_eq!(Rank::for_match_count(3), Rank::Fourth);
        assert_eq!(Rank::for_match_count(2), Rank::None);
        assert_eq!(Rank::for_match_count(1), Rank::None);
        assert_eq!(Rank::for_match_count(0), Rank::None);
    }

    #[test]
    fn test_threshold_maps_back() {
        for rank in Rank::ranked() {
            assert_eq!(Rank::for_match_count(rank.match_threshold()), rank);
        }
    }

    #[test]
    fn test_fifth_never_produced_by_match_count() {
        assert!((0..=6).all(|count| Rank::for_match_count(count) != Rank::Fifth));
    }

    #[test]
    fn test_ranked_excludes_non_paying_tiers() {
        let ranked: Vec<Rank> = Rank::ranked().collect();
        assert_eq!(
            ranked,
            vec![Rank::First, Rank::Second, Rank::Third, Rank::Fourth]
        );
        assert!(!ranked.contains(&Rank::None));
        assert!(!ranked.contains(&Rank::Fifth));
    }

    #[test]
    fn test_ranked_in_descending_prize_order() {
        let prizes: Vec<u64> = Rank::ranked().map(|r| r.prize()).collect();
        let mut sorted = prizes.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(prizes, sorted);
    }

    #[test]
    fn test_ordering() {
        assert!(Rank::First > Rank::Second);
        assert!(Rank::Fourth > Rank::Fifth);
        assert!(Rank::Fifth > Rank::None);
        assert_eq!(Rank::ALL.iter().max(), Some(&Rank::First));
    }
}
