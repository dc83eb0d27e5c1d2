//! Slot table: the symbol-to-slot assignment consumed by an ANS coder.
//!
//! A slot table of precision `p` assigns one symbol identifier to each of
//! `p` quantised probability slots. Tables produced here satisfy:
//!
//! 1. `slots.len() == precision`
//! 2. `slots[0] == 0`
//! 3. adjacent slots hold the same symbol or advance by exactly one
//! 4. no symbol exceeds `alphabet_size - 1`
//!
//! Symbols above the last one reached simply never appear.

use super::TableError;

/// An immutable symbol-to-slot assignment.
///
/// Tables are created by [`crate::builder::build_table`] or validated through
/// [`SlotTable::from_slots`]; no mutating accessors exist.
///
/// # Examples
///
/// ```rust
/// use anstable_core::types::SlotTable;
///
/// let table = SlotTable::from_slots(3, vec![0, 1, 1, 2, 2]).unwrap();
/// assert_eq!(table.precision(), 5);
/// assert_eq!(table.counts(), vec![1, 2, 2]);
/// assert_eq!(table.max_symbol(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotTable {
    alphabet_size: usize,
    slots: Vec<usize>,
}

/// A maximal span of consecutive slots holding the same symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Run {
    /// Symbol identifier held by every slot of the run
    pub symbol: usize,
    /// Index of the first slot of the run
    pub start: usize,
    /// Number of slots in the run (always at least 1)
    pub len: usize,
}

impl SlotTable {
    /// Wraps slots produced by the builder, which upholds the invariants.
    pub(crate) fn new_unchecked(alphabet_size: usize, slots: Vec<usize>) -> Self {
        debug_assert!(check_invariants(alphabet_size, &slots).is_ok());
        Self {
            alphabet_size,
            slots,
        }
    }

    /// Builds a table from externally supplied slots, checking every
    /// structural invariant.
    ///
    /// # Errors
    ///
    /// - [`TableError::InvalidParameter`] if `alphabet_size` is zero or
    ///   `slots` is empty
    /// - [`TableError::InvariantViolation`] if the slots do not start at
    ///   symbol 0, skip a symbol, step backwards, or exceed the alphabet
    pub fn from_slots(alphabet_size: usize, slots: Vec<usize>) -> Result<Self, TableError> {
        super::error::check_sizes(alphabet_size, slots.len())?;
        check_invariants(alphabet_size, &slots)?;
        Ok(Self {
            alphabet_size,
            slots,
        })
    }

    /// Number of slots in the table.
    #[inline]
    pub fn precision(&self) -> usize {
        self.slots.len()
    }

    /// Number of distinct symbol identifiers the table may use.
    #[inline]
    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    /// The symbol identifier of every slot, in slot order.
    #[inline]
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    /// Consumes the table and returns its slots.
    pub fn into_slots(self) -> Vec<usize> {
        self.slots
    }

    /// Symbol held by `slot`, or `None` past the end of the table.
    #[inline]
    pub fn symbol_at(&self, slot: usize) -> Option<usize> {
        self.slots.get(slot).copied()
    }

    /// Highest symbol present. Slots are non-decreasing, so this is the
    /// symbol of the last slot.
    pub fn max_symbol(&self) -> usize {
        self.slots.last().copied().unwrap_or(0)
    }

    /// Number of distinct symbols present.
    ///
    /// Symbols advance by at most one per slot from 0, so every symbol up to
    /// [`max_symbol`](Self::max_symbol) appears.
    pub fn distinct_symbols(&self) -> usize {
        self.max_symbol() + 1
    }

    /// Per-symbol slot counts, indexed by symbol, of length `alphabet_size`.
    ///
    /// The counts sum to [`precision`](Self::precision) and are the
    /// frequency form an ANS encoder quantises against.
    pub fn counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.alphabet_size];
        for &symbol in &self.slots {
            counts[symbol] += 1;
        }
        counts
    }

    /// The maximal runs of the table in slot order.
    pub fn runs(&self) -> Vec<Run> {
        let mut runs: Vec<Run> = Vec::new();
        for (slot, &symbol) in self.slots.iter().enumerate() {
            match runs.last_mut() {
                Some(run) if run.symbol == symbol => run.len += 1,
                _ => runs.push(Run {
                    symbol,
                    start: slot,
                    len: 1,
                }),
            }
        }
        runs
    }

    /// Re-checks the structural invariants.
    pub fn validate(&self) -> Result<(), TableError> {
        super::error::check_sizes(self.alphabet_size, self.slots.len())?;
        check_invariants(self.alphabet_size, &self.slots)
    }
}

impl AsRef<[usize]> for SlotTable {
    fn as_ref(&self) -> &[usize] {
        &self.slots
    }
}

/// Checks invariants 2 to 4 for a non-empty slot sequence.
fn check_invariants(alphabet_size: usize, slots: &[usize]) -> Result<(), TableError> {
    let last_symbol = alphabet_size.saturating_sub(1);

    if let Some(&first) = slots.first() {
        if first != 0 {
            return Err(TableError::InvariantViolation(format!(
                "first slot holds symbol {} instead of 0",
                first
            )));
        }
    }

    for (slot, pair) in slots.windows(2).enumerate() {
        let (prev, cur) = (pair[0], pair[1]);
        if cur != prev && cur != prev + 1 {
            return Err(TableError::InvariantViolation(format!(
                "slot {} steps from symbol {} to {}",
                slot + 1,
                prev,
                cur
            )));
        }
        if cur > last_symbol {
            return Err(TableError::InvariantViolation(format!(
                "slot {} holds symbol {} beyond last symbol {}",
                slot + 1,
                cur,
                last_symbol
            )));
        }
    }

    Ok(())
}

#[cfg(feature = "serde")]
impl serde::Serialize for SlotTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.slots.serialize(serializer)
    }
}
