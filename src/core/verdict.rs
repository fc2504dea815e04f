//! Per-letter feedback classification

use std::fmt;

/// Feedback for a single guessed letter
///
/// Ordered from best to worst so that `Correct < Present < Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    /// Right letter in the right position (green)
    Correct,
    /// Letter occurs elsewhere in the secret, within its unmatched count (yellow)
    Present,
    /// Letter has no unmatched occurrence left in the secret (gray)
    Absent,
}

impl Verdict {
    /// Emoji square used in share strings and history views
    #[inline]
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single ASCII symbol: `G`, `Y` or `-`
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(label)
    }
}
