use crate::Value;
use core::{fmt, ops};

/// The three prime multipliers that define the Hamming sequence.
///
/// The enumeration is closed on purpose: the topology is fixed at 2/3/5 and
/// the collator's held-value table is sized by this enum rather than by a
/// dynamic keyed collection, which keeps its working set bounded no matter
/// how many values the network produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Factor {
    Two,
    Three,
    Five,
}

impl Factor {
    /// Every factor, in the fixed order used by the collator's refresh scan
    /// and minimum selection. The order doubles as the tie-break: when two
    /// inputs hold an equal minimum, the lowest multiplier wins.
    pub const ALL: [Self; 3] = [Self::Two, Self::Three, Self::Five];

    /// The integer multiplier applied by this factor's transformer.
    pub const fn multiplier(self) -> Value {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Five => 5,
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}", self.multiplier())
    }
}

/// Fixed three-slot table keyed by [`Factor`].
///
/// Slots are never added or removed, only read and overwritten. Indexing is
/// total, so "a tagged input is missing" is unrepresentable rather than a
/// runtime check.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct FactorMap<T> {
    two: T,
    three: T,
    five: T,
}

impl<T> FactorMap<T> {
    pub(crate) fn new(two: T, three: T, five: T) -> Self {
        Self { two, three, five }
    }
}

impl<T> ops::Index<Factor> for FactorMap<T> {
    type Output = T;

    fn index(&self, factor: Factor) -> &T {
        match factor {
            Factor::Two => &self.two,
            Factor::Three => &self.three,
            Factor::Five => &self.five,
        }
    }
}

impl<T> ops::IndexMut<Factor> for FactorMap<T> {
    fn index_mut(&mut self, factor: Factor) -> &mut T {
        match factor {
            Factor::Two => &mut self.two,
            Factor::Three => &mut self.three,
            Factor::Five => &mut self.five,
        }
    }
}
