//! Net-size and subset sampling.
//!
//! Net sizes come from pushing a uniform draw through a sixth-power curve,
//! which concentrates mass near the minimum size of two. Members are then
//! drawn uniformly without replacement from `1..=cell_count`.

use rand::{Rng, distributions::Standard, seq::index};

use crate::{
    net::{CellId, Net},
    params::MIN_CELL_COUNT,
};

/// Exponent applied to the uniform draw before scaling it to a net size.
pub const SIZE_SKEW_EXPONENT: i32 = 6;

/// Maps a uniform draw in `[0, 1)` to a net size.
///
/// Computes `floor(draw^6 * (cell_count - 2) + 2)` and clamps the result to
/// `[2, cell_count]`. Draws outside `[0, 1]` are clamped first and `NaN` is
/// treated as `0`.
///
/// # Examples
/// ```
/// use hypergen_core::net_size_from_draw;
///
/// assert_eq!(net_size_from_draw(0.0, 10), 2);
/// assert_eq!(net_size_from_draw(0.5, 10), 2);
/// assert_eq!(net_size_from_draw(0.99, 10), 9);
/// assert!(net_size_from_draw(1.0 - f64::EPSILON, 10) <= 10);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the size curve is defined over floating-point draws"
)]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is floored and clamped to [2, cell_count] before the cast"
)]
pub fn net_size_from_draw(draw: f64, cell_count: u32) -> usize {
    let draw = if draw.is_nan() { 0.0 } else { draw.clamp(0.0, 1.0) };
    let lower = f64::from(MIN_CELL_COUNT);
    let upper = f64::from(cell_count.max(MIN_CELL_COUNT));
    let span = f64::from(cell_count.saturating_sub(MIN_CELL_COUNT));
    let size = (draw.powi(SIZE_SKEW_EXPONENT) * span + lower).floor();
    size.clamp(lower, upper) as usize
}

/// Draws one net: a skewed size followed by a uniform subset of that size.
///
/// `cell_count` must be at least two; smaller values are rejected earlier by
/// [`crate::HypergraphParams::try_new`].
pub fn sample_net<R>(rng: &mut R, cell_count: u32) -> Net
where
    R: Rng + ?Sized,
{
    let draw: f64 = rng.sample(Standard);
    let size = net_size_from_draw(draw, cell_count);
    let length = cell_count as usize;
    Net::from_cells(
        index::sample(rng, length, size.min(length))
            .into_iter()
            .map(cell_from_index),
    )
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "sampled indices are below the u32 cell count"
)]
const fn cell_from_index(index: usize) -> CellId {
    index as CellId + 1
}

/// Number of distinct nets [`sample_net`] can produce over `cell_count` cells.
///
/// Uniform draws stay strictly below one, so the size curve tops out at
/// `cell_count - 1` once there are three or more cells and the full cell set
/// is never drawn. The count is `2^cell_count - cell_count - 2` in that case
/// and `1` for exactly two cells. Returns `None` when the count does not fit
/// in `u128`.
///
/// # Examples
/// ```
/// use hypergen_core::distinct_net_capacity;
///
/// assert_eq!(distinct_net_capacity(2), Some(1));
/// assert_eq!(distinct_net_capacity(4), Some(10));
/// assert_eq!(distinct_net_capacity(200), None);
/// ```
#[must_use]
pub fn distinct_net_capacity(cell_count: u32) -> Option<u128> {
    if cell_count <= MIN_CELL_COUNT {
        return Some(u128::from(cell_count == MIN_CELL_COUNT));
    }
    1_u128
        .checked_shl(cell_count)?
        .checked_sub(u128::from(cell_count))?
        .checked_sub(2)
}
