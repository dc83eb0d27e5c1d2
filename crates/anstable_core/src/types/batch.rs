//! Ordered batches of slot tables sharing one parameter set.

use super::{SlotTable, TableError};

/// An ordered collection of slot tables sharing one `alphabet_size` and one
/// `precision`.
///
/// Table order is meaningful: a generated batch can only be reproduced by
/// rebuilding its tables in the same order from the same Random Source
/// stream.
///
/// With the `serde` feature the batch serialises as
/// `{"alphabet_size": n, "precision": p, "tables": [[0, ...], ...]}` and
/// deserialisation re-validates every table.
///
/// # Examples
///
/// ```rust
/// use anstable_core::types::HistogramBatch;
///
/// let batch = HistogramBatch::from_distributions(2, 3, vec![vec![0, 0, 1], vec![0, 1, 1]]).unwrap();
/// assert_eq!(batch.len(), 2);
/// assert_eq!(batch.get(1).unwrap().slots(), &[0, 1, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BatchRepr"))]
pub struct HistogramBatch {
    alphabet_size: usize,
    precision: usize,
    tables: Vec<SlotTable>,
}

impl HistogramBatch {
    /// Wraps tables produced by the batch generator.
    pub(crate) fn new_unchecked(
        alphabet_size: usize,
        precision: usize,
        tables: Vec<SlotTable>,
    ) -> Self {
        Self {
            alphabet_size,
            precision,
            tables,
        }
    }

    /// Assembles a batch from existing tables, checking that each one is
    /// valid and matches the batch parameters.
    pub fn from_tables(
        alphabet_size: usize,
        precision: usize,
        tables: Vec<SlotTable>,
    ) -> Result<Self, TableError> {
        let batch = Self {
            alphabet_size,
            precision,
            tables,
        };
        batch.validate()?;
        Ok(batch)
    }

    /// Assembles a batch from raw slot sequences, one per table.
    ///
    /// # Errors
    ///
    /// Returns the first error found, with the offending table index in the
    /// message for invariant violations.
    pub fn from_distributions(
        alphabet_size: usize,
        precision: usize,
        distributions: Vec<Vec<usize>>,
    ) -> Result<Self, TableError> {
        super::error::check_sizes(alphabet_size, precision)?;
        let tables = distributions
            .into_iter()
            .enumerate()
            .map(|(j, slots)| {
                if slots.len() != precision {
                    return Err(TableError::InvariantViolation(format!(
                        "table {} has {} slots, expected {}",
                        j,
                        slots.len(),
                        precision
                    )));
                }
                SlotTable::from_slots(alphabet_size, slots).map_err(|e| match e {
                    TableError::InvariantViolation(msg) => {
                        TableError::InvariantViolation(format!("table {}: {}", j, msg))
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            alphabet_size,
            precision,
            tables,
        })
    }

    /// Alphabet size shared by every table.
    #[inline]
    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    /// Precision shared by every table.
    #[inline]
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Number of tables.
    #[inline]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns `true` if the batch holds no tables.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// The table at position `index`, if any.
    pub fn get(&self, index: usize) -> Option<&SlotTable> {
        self.tables.get(index)
    }

    /// All tables in generation order.
    pub fn tables(&self) -> &[SlotTable] {
        &self.tables
    }

    /// Iterates over the tables in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, SlotTable> {
        self.tables.iter()
    }

    /// Consumes the batch and returns its tables.
    pub fn into_tables(self) -> Vec<SlotTable> {
        self.tables
    }

    /// Plain nested slot sequences, one per table.
    pub fn to_distributions(&self) -> Vec<Vec<usize>> {
        self.tables.iter().map(|t| t.slots().to_vec()).collect()
    }

    /// Checks every table and that each one shares the batch parameters.
    pub fn validate(&self) -> Result<(), TableError> {
        super::error::check_sizes(self.alphabet_size, self.precision)?;
        for (j, table) in self.tables.iter().enumerate() {
            if table.alphabet_size() != self.alphabet_size {
                return Err(TableError::InvariantViolation(format!(
                    "table {} has alphabet size {}, expected {}",
                    j,
                    table.alphabet_size(),
                    self.alphabet_size
                )));
            }
            if table.precision() != self.precision {
                return Err(TableError::InvariantViolation(format!(
                    "table {} has {} slots, expected {}",
                    j,
                    table.precision(),
                    self.precision
                )));
            }
            table.validate()?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a HistogramBatch {
    type Item = &'a SlotTable;
    type IntoIter = std::slice::Iter<'a, SlotTable>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}

impl IntoIterator for HistogramBatch {
    type Item = SlotTable;
    type IntoIter = std::vec::IntoIter<SlotTable>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.into_iter()
    }
}

/// Wire form of a batch; converted through [`HistogramBatch::from_distributions`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BatchRepr {
    alphabet_size: usize,
    precision: usize,
    tables: Vec<Vec<usize>>,
}

#[cfg(feature = "serde")]
impl TryFrom<BatchRepr> for HistogramBatch {
    type Error = TableError;

    fn try_from(repr: BatchRepr) -> Result<Self, Self::Error> {
        HistogramBatch::from_distributions(repr.alphabet_size, repr.precision, repr.tables)
    }
}
