//! Wordle feedback calculation and representation
//!
//! A feedback code packs the five per-position marks into one base-3 number:
//! - 0 = Miss (letter absent, or all of its occurrences already accounted for)
//! - 1 = Present (letter elsewhere in the word)
//! - 2 = Hit (letter in the correct position)
//!
//! Digits are packed most significant first, so position 0 contributes
//! digit × 81 and position 4 contributes digit × 1. Codes range over 0-242.

use super::word::WORD_LENGTH;
use super::{SolverError, Word};
use std::fmt;

/// Outcome for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Miss,
    Present,
    Hit,
}

impl Mark {
    /// Base-3 digit used when packing
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Miss => 0,
            Self::Present => 1,
            Self::Hit => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Hit,
            1 => Self::Present,
            _ => Self::Miss,
        }
    }

    /// Parse a user-entered feedback symbol
    ///
    /// Accepts G/🟩 for Hit, Y/🟨 for Present and B/-/_/⬜/⬛ for Miss, case-insensitively.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'G' | '🟩' => Some(Self::Hit),
            'Y' | '🟨' => Some(Self::Present),
            'B' | '-' | '_' | '⬜' | '⬛' => Some(Self::Miss),
            _ => None,
        }
    }
}

/// Packed feedback for one guess against one solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeedbackCode(u8);

impl FeedbackCode {
    /// Number of distinct codes (3^5)
    pub const COUNT: usize = 243;

    /// Every position a Hit
    pub const ALL_HIT: Self = Self(242);

    /// Wrap a value already known to be a valid code
    #[inline]
    #[must_use]
    pub(crate) const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Feedback code must be < 243");
        Self(value)
    }

    /// Code for a raw value, `None` unless it is below 243
    ///
    /// # Examples
    /// ```
    /// use wordle_lookahead::core::FeedbackCode;
    ///
    /// assert_eq!(FeedbackCode::from_value(242), Some(FeedbackCode::ALL_HIT));
    /// assert_eq!(FeedbackCode::from_value(250), None);
    /// ```
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if (value as usize) < Self::COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Raw code value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Code as a bucket index
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_all_hit(self) -> bool {
        self.0 == Self::ALL_HIT.0
    }

    /// Pack five marks, position 0 most significant
    #[must_use]
    pub fn from_marks(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks.iter().fold(0u8, |code, mark| code * 3 + mark.digit()))
    }

    /// Unpack into per-position marks
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LENGTH] {
        let mut marks = [Mark::Miss; WORD_LENGTH];
        let mut value = self.0;
        for mark in marks.iter_mut().rev() {
            *mark = Mark::from_digit(value % 3);
            value /= 3;
        }
        marks
    }

    /// Calculate the feedback when `guess` is played against `solution`
    ///
    /// # Algorithm
    /// 1. Count the letters of the solution
    /// 2. Left to right: exact matches become Hits and consume one count
    /// 3. Left to right over the rest: a letter with count left becomes Present
    ///    and consumes one count, otherwise Miss
    /// 4. Pack base-3, most significant first
    ///
    /// Hits are settled before any Present, so a repeated letter is never
    /// reported more often than the solution contains it.
    ///
    /// # Examples
    /// ```
    /// use wordle_lookahead::core::{FeedbackCode, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let solution = Word::new("slate").unwrap();
    ///
    /// // C(miss) R(miss) A(hit) N(miss) E(hit) = 2×9 + 2×1
    /// assert_eq!(FeedbackCode::calculate(&guess, &solution).value(), 20);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        let guess = guess.chars();
        let target = solution.chars();
        let mut remaining = solution.letter_counts();
        let mut marks = [Mark::Miss; WORD_LENGTH];

        for (i, mark) in marks.iter_mut().enumerate() {
            if guess[i] == target[i] {
                *mark = Mark::Hit;
                remaining[usize::from(guess[i] - b'a')] -= 1;
            }
        }

        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Mark::Hit {
                continue;
            }
            let count = &mut remaining[usize::from(guess[i] - b'a')];
            if *count > 0 {
                *mark = Mark::Present;
                *count -= 1;
            }
        }

        Self::from_marks(marks)
    }

    /// Parse user feedback such as "GYBBG" or "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let marks: Vec<Mark> = input
            .trim()
            .chars()
            .map(Mark::from_symbol)
            .collect::<Option<_>>()?;
        let marks: [Mark; WORD_LENGTH] = marks.try_into().ok()?;
        Some(Self::from_marks(marks))
    }
}

impl std::str::FromStr for FeedbackCode {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| SolverError::InvalidInput(format!("feedback '{s}'")))
    }
}

impl fmt::Display for FeedbackCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            let symbol = match mark {
                Mark::Hit => 'G',
                Mark::Present => 'Y',
                Mark::Miss => 'B',
            };
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// Encode feedback for two raw tokens
///
/// # Errors
/// `InvalidInput` if the tokens differ in length or are not valid words.
///
/// # Examples
/// ```
/// use wordle_lookahead::core::{encode, FeedbackCode};
///
/// assert_eq!(encode("crane", "crane").unwrap(), FeedbackCode::ALL_HIT);
/// assert!(encode("crane", "cranes").is_err());
/// ```
pub fn encode(guess: &str, solution: &str) -> Result<FeedbackCode, SolverError> {
    if guess.len() != solution.len() {
        return Err(SolverError::InvalidInput(format!(
            "'{guess}' and '{solution}' differ in length"
        )));
    }
    let guess = Word::new(guess)?;
    let solution = Word::new(solution)?;
    Ok(FeedbackCode::calculate(&guess, &solution))
}

/// Unpack a code into per-position marks
#[must_use]
pub fn decode(code: FeedbackCode) -> [Mark; WORD_LENGTH] {
    code.marks()
}
