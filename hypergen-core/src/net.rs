//! Net representation shared by the generator, the instance, and the text
//! format.

use std::fmt;

/// Identifier of a cell. Valid identifiers lie in `1..=cell_count`.
pub type CellId = u32;

/// A hyperedge: a set of distinct cells.
///
/// Members are stored sorted and de-duplicated, so equality, ordering and
/// hashing follow set semantics regardless of the order cells were drawn in.
///
/// # Examples
/// ```
/// use hypergen_core::Net;
///
/// let left = Net::from_cells([3, 1, 2]);
/// let right = Net::from_cells([2, 3, 1, 1]);
/// assert_eq!(left, right);
/// assert_eq!(left.cells(), &[1, 2, 3]);
/// ```
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Net {
    cells: Box<[CellId]>,
}

impl Net {
    /// Builds a net from any collection of cell identifiers.
    #[must_use]
    pub fn from_cells(cells: impl IntoIterator<Item = CellId>) -> Self {
        let mut members: Vec<CellId> = cells.into_iter().collect();
        members.sort_unstable();
        members.dedup();
        Self {
            cells: members.into_boxed_slice(),
        }
    }

    /// Member cells in ascending order.
    #[must_use]
    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    /// Number of member cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the net has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `cell` belongs to the net.
    #[must_use]
    pub fn contains(&self, cell: CellId) -> bool {
        self.cells.binary_search(&cell).is_ok()
    }
}

impl fmt::Display for Net {
    /// Formats the members separated by single spaces, matching one net line
    /// of the text format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut members = self.cells.iter();
        if let Some(first) = members.next() {
            write!(f, "{first}")?;
        }
        for cell in members {
            write!(f, " {cell}")?;
        }
        Ok(())
    }
}
