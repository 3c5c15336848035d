//! Materialised walk output.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use crate::error::WalkError;

/// A generated random walk.
///
/// Holds the index sequence `0..len`, the walk values, and the seed that
/// produced them. Both sequences always have the same length.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawWalkResult"))]
pub struct WalkResult {
    indices: Vec<usize>,
    values: Vec<i64>,
    seed: u64,
}

/// Unchecked wire form of [`WalkResult`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawWalkResult {
    indices: Vec<usize>,
    values: Vec<i64>,
    seed: u64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawWalkResult> for WalkResult {
    type Error = WalkError;

    fn try_from(raw: RawWalkResult) -> Result<Self, Self::Error> {
        if raw.indices.len() != raw.values.len() {
            return Err(WalkError::invalid_argument(
                "indices",
                format!(
                    "expected {} entries to match values, got {}",
                    raw.values.len(),
                    raw.indices.len()
                ),
            ));
        }
        if !raw.indices.iter().copied().eq(0..raw.values.len()) {
            return Err(WalkError::invalid_argument(
                "indices",
                "must be the sequence 0..len",
            ));
        }
        Ok(Self::new(raw.values, raw.seed))
    }
}

impl WalkResult {
    pub(crate) fn new(values: Vec<i64>, seed: u64) -> Self {
        let indices = (0..values.len()).collect();
        Self {
            indices,
            values,
            seed,
        }
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the walk has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the index sequence `0..len`.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the walk values.
    #[inline]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Returns the seed used to generate the walk.
    ///
    /// For unseeded requests this is the time-derived seed, so passing it
    /// back reproduces the same walk.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Iterates over `(index, value)` pairs, e.g. for plotting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use walk_core::walk::generate_walk;
    ///
    /// let walk = generate_walk(3, 1, 0, Some(1)).unwrap();
    /// let xs: Vec<usize> = walk.points().map(|(x, _)| x).collect();
    /// assert_eq!(xs, vec![0, 1, 2]);
    /// ```
    pub fn points(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Lowest value, or `None` for an empty walk.
    pub fn min(&self) -> Option<i64> {
        self.values.iter().copied().min()
    }

    /// Highest value, or `None` for an empty walk.
    pub fn max(&self) -> Option<i64> {
        self.values.iter().copied().max()
    }

    /// Final value, or `None` for an empty walk.
    pub fn last(&self) -> Option<i64> {
        self.values.last().copied()
    }

    /// Consumes the walk and returns `(indices, values)`.
    pub fn into_parts(self) -> (Vec<usize>, Vec<i64>) {
        (self.indices, self.values)
    }
}
