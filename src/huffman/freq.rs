//! Symbol frequency counting.

use super::types::ALPHABET_SIZE;

/// Occurrence count for each of the 256 byte values.
///
/// Built in a single pass by [`FrequencyTable::from_bytes`] and read-only
/// afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
}

impl FrequencyTable {
    pub fn from_bytes(src: &[u8]) -> Self {
        let mut counts = [0u64; ALPHABET_SIZE];
        for &b in src {
            counts[b as usize] += 1;
        }
        FrequencyTable { counts }
    }

    #[inline]
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Number of symbols that occur at least once.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Sum of all counts, i.e. the length of the analysed buffer.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Present symbols with their counts, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(s, &c)| (s as u8, c))
    }

    /// All 256 counts, indexed by symbol.
    pub fn as_array(&self) -> &[u64; ALPHABET_SIZE] {
        &self.counts
    }
}

impl core::fmt::Debug for FrequencyTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
