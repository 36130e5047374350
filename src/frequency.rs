//! Byte frequency counting.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{HuffmanError, Result};

/// Occurrence counts of the distinct bytes in a buffer.
///
/// Only bytes that occur at least once have an entry. Entries keep the
/// order in which each byte first appeared, which is the order
/// [`TieBreak::InsertionOrder`](crate::TieBreak::InsertionOrder) relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<(u8, usize)>", into = "Vec<(u8, usize)>")
)]
pub struct FrequencyTable {
    entries: Vec<(u8, usize)>,
}

impl FrequencyTable {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut counts = [0usize; 256];
        let mut order = Vec::new();
        for &byte in bytes {
            let slot = &mut counts[byte as usize];
            if *slot == 0 {
                order.push(byte);
            }
            *slot += 1;
        }

        let entries = order
            .into_iter()
            .map(|byte| (byte, counts[byte as usize]))
            .collect();
        let table = FrequencyTable { entries };
        log::trace!("frequency table: {:?}", table.entries);
        table
    }

    /// Builds a table from explicit `(symbol, count)` pairs.
    ///
    /// Zero counts are dropped and repeated symbols are summed; the first
    /// occurrence of a symbol fixes its position. Fails with
    /// [`HuffmanError::WeightOverflow`] if the counts add up past `usize::MAX`,
    /// so every tree weight built from the table fits.
    pub fn from_counts<I>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u8, usize)>,
    {
        let mut total: usize = 0;
        let mut index: [Option<usize>; 256] = [None; 256];
        let mut entries: Vec<(u8, usize)> = Vec::new();
        for (byte, count) in counts {
            if count == 0 {
                continue;
            }
            total = total
                .checked_add(count)
                .ok_or(HuffmanError::WeightOverflow)?;
            match index[byte as usize] {
                // cannot overflow, bounded by total
                Some(i) => entries[i].1 += count,
                None => {
                    index[byte as usize] = Some(entries.len());
                    entries.push((byte, count));
                }
            }
        }
        Ok(FrequencyTable { entries })
    }

    pub fn get(&self, symbol: u8) -> Option<usize> {
        self.entries
            .iter()
            .find(|(byte, _)| *byte == symbol)
            .map(|&(_, count)| count)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted input.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    /// Entries in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.entries.iter().copied()
    }
}

impl TryFrom<Vec<(u8, usize)>> for FrequencyTable {
    type Error = HuffmanError;

    fn try_from(counts: Vec<(u8, usize)>) -> Result<Self> {
        FrequencyTable::from_counts(counts)
    }
}

impl From<FrequencyTable> for Vec<(u8, usize)> {
    fn from(table: FrequencyTable) -> Self {
        table.entries
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_counts_in_first_appearance_order() {
        let table = FrequencyTable::from_bytes(b"cabbac");
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![(b'c', 2), (b'a', 2), (b'b', 2)]);
        assert_eq!(table.total(), 6);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_aaabbc() {
        let table = FrequencyTable::from_bytes(b"aaabbc");
        assert_eq!(table.get(b'a'), Some(3));
        assert_eq!(table.get(b'b'), Some(2));
        assert_eq!(table.get(b'c'), Some(1));
        assert_eq!(table.get(b'd'), None);
    }

    #[test]
    fn test_empty_input() {
        let table = FrequencyTable::from_bytes(&[]);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_from_counts_drops_zero_and_merges() {
        let table = FrequencyTable::try_from(vec![(7, 2), (3, 0), (9, 1), (7, 5)]).unwrap();
        assert_eq!(table.iter().collect::<Vec<_>>(), vec![(7, 7), (9, 1)]);
        assert_eq!(table.get(3), None);
    }

    #[test]
    fn test_from_counts_rejects_overflow() {
        assert_eq!(
            FrequencyTable::from_counts([(0, usize::MAX), (1, 1)]),
            Err(HuffmanError::WeightOverflow)
        );
        assert_eq!(
            FrequencyTable::from_counts([(5, usize::MAX), (5, 1)]),
            Err(HuffmanError::WeightOverflow)
        );
        let table = FrequencyTable::from_counts([(0, usize::MAX - 1), (1, 1)]).unwrap();
        assert_eq!(table.total(), usize::MAX);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let table = FrequencyTable::from_bytes(b"aaabbc");
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, "[[97,3],[98,2],[99,1]]");
        let back: FrequencyTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_normalizes_counts() {
        let table: FrequencyTable = serde_json::from_str("[[97,3],[97,2],[98,0]]").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(b'a'), Some(5));
        assert_eq!(table.get(b'b'), None);

        let overflow = format!("[[0,{}],[1,1]]", usize::MAX);
        assert!(serde_json::from_str::<FrequencyTable>(&overflow).is_err());
    }
}
