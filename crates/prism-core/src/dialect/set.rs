use super::{Dialect, Family};

use std::fmt;

/// A set of dialects, used to express which dialects support a feature.
///
/// Sets are usually declared as constants:
///
/// ```
/// use prism_core::dialect::{Dialect, DialectSet};
///
/// const NATIVE_MERGE: DialectSet =
///     DialectSet::supported_by(&[Dialect::Postgres15, Dialect::Oracle]);
///
/// assert!(NATIVE_MERGE.contains(Dialect::Postgres16));
/// assert!(!NATIVE_MERGE.contains(Dialect::Postgres14));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DialectSet {
    bits: u128,
}

impl DialectSet {
    pub const EMPTY: DialectSet = DialectSet { bits: 0 };

    /// Each given dialect plus every later version of its family. A family's
    /// unversioned dialect stands for the whole family.
    pub const fn supported_by(dialects: &[Dialect]) -> DialectSet {
        let mut bits = 0;
        let mut i = 0;

        while i < dialects.len() {
            let dialect = dialects[i];
            let mut j = 0;

            while j < Dialect::ALL.len() {
                let candidate = Dialect::ALL[j];

                if candidate.family() as u8 == dialect.family() as u8
                    && (dialect.is_family() || candidate as u8 >= dialect as u8)
                {
                    bits |= 1 << (candidate as u8);
                }

                j += 1;
            }

            i += 1;
        }

        DialectSet { bits }
    }

    /// Each given dialect plus every earlier version of its family.
    pub const fn supported_until(dialects: &[Dialect]) -> DialectSet {
        let mut bits = 0;
        let mut i = 0;

        while i < dialects.len() {
            let dialect = dialects[i];
            let mut j = 0;

            while j < Dialect::ALL.len() {
                let candidate = Dialect::ALL[j];

                if candidate.family() as u8 == dialect.family() as u8
                    && candidate as u8 <= dialect as u8
                {
                    bits |= 1 << (candidate as u8);
                }

                j += 1;
            }

            i += 1;
        }

        DialectSet { bits }
    }

    pub const fn contains(self, dialect: Dialect) -> bool {
        self.bits & (1 << (dialect as u8)) != 0
    }

    /// Returns `true` if any version of `family` is in the set.
    pub const fn contains_family(self, family: Family) -> bool {
        let mut i = 0;

        while i < Dialect::ALL.len() {
            let dialect = Dialect::ALL[i];

            if dialect.family() as u8 == family as u8 && self.contains(dialect) {
                return true;
            }

            i += 1;
        }

        false
    }

    pub const fn union(self, other: DialectSet) -> DialectSet {
        DialectSet {
            bits: self.bits | other.bits,
        }
    }

    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Dialect> {
        Dialect::ALL
            .iter()
            .copied()
            .filter(move |dialect| self.contains(*dialect))
    }
}

impl FromIterator<Dialect> for DialectSet {
    fn from_iter<I: IntoIterator<Item = Dialect>>(iter: I) -> Self {
        let bits = iter
            .into_iter()
            .fold(0, |bits, dialect| bits | (1 << (dialect as u8)));
        DialectSet { bits }
    }
}

impl fmt::Debug for DialectSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
