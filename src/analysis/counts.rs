//! Leaf census per label, computed two independent ways

use ndarray::{Array1, Array2};
use num_traits::{CheckedAdd, CheckedMul, PrimInt};

use crate::error::{Result, invalid_argument};
use crate::grammar::label::{LEAF_LABELS, Label, SUBSTITUTION_RULES, SUPERTILES};

/// Leaf tile census keyed by the ten leaf labels
///
/// Generic over the integer width so deep generations can run on `i128`
/// or `u128`; accumulation is checked and overflow is reported, never
/// wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelCounts<T> {
    counts: [T; 10],
}

impl<T: PrimInt + CheckedAdd> LabelCounts<T> {
    /// An empty census
    pub fn new() -> Self {
        Self {
            counts: [T::zero(); 10],
        }
    }

    /// Count for a leaf label, `None` for the Gamma supertile
    pub fn get(&self, label: Label) -> Option<T> {
        label
            .leaf_index()
            .and_then(|index| self.counts.get(index).copied())
    }

    /// Add to a label's count
    ///
    /// # Errors
    ///
    /// Fails for the Gamma supertile (not a leaf label) and on integer
    /// overflow.
    pub fn record(&mut self, label: Label, amount: T) -> Result<()> {
        let index = label
            .leaf_index()
            .ok_or_else(|| invalid_argument("LabelCounts::record", "a leaf label", &label))?;
        let slot = self
            .counts
            .get_mut(index)
            .ok_or_else(|| invalid_argument("LabelCounts::record", "a leaf index", &index))?;
        *slot = slot.checked_add(&amount).ok_or_else(|| {
            invalid_argument("LabelCounts::record", "a count within range", &label)
        })?;
        Ok(())
    }

    /// Total number of leaves
    ///
    /// # Errors
    ///
    /// Fails on integer overflow.
    pub fn total(&self) -> Result<T> {
        self.counts.iter().try_fold(T::zero(), |sum, count| {
            sum.checked_add(count)
                .ok_or_else(|| invalid_argument("LabelCounts::total", "a total within range", &""))
        })
    }

    /// Census as `(label, count)` pairs in leaf label order
    pub fn as_pairs(&self) -> Vec<(Label, T)> {
        LEAF_LABELS.iter().copied().zip(self.counts).collect()
    }
}

impl<T: PrimInt + CheckedAdd> Default for LabelCounts<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// How many times `child` appears in `parent`'s rule row
fn multiplicity(parent: Label, child: Label) -> usize {
    parent.substitution_row().map_or(0, |row| {
        row.iter().filter(|slot| **slot == Some(child)).count()
    })
}

/// Convert the supertile population at depth zero into a leaf census
fn expand_to_leaves<T: PrimInt + CheckedAdd>(population: &[T]) -> Result<LabelCounts<T>> {
    let mut census = LabelCounts::new();
    for (symbol, count) in SUPERTILES.iter().zip(population.iter()) {
        if count.is_zero() {
            continue;
        }
        if *symbol == Label::Gamma {
            // A fully expanded Gamma is its two concrete leaves.
            census.record(Label::Gamma1, *count)?;
            census.record(Label::Gamma2, *count)?;
        } else {
            census.record(*symbol, *count)?;
        }
    }
    Ok(census)
}

/// Census by direct frequency iteration of the rule table
///
/// Tracks how many instances of each supertile symbol the root Delta
/// expands into, one substitution step at a time, with checked arithmetic
/// throughout.
///
/// # Errors
///
/// Fails on integer overflow of the chosen width.
pub fn substitution_counts<T>(generations: usize) -> Result<LabelCounts<T>>
where
    T: PrimInt + CheckedAdd,
{
    let mut population = vec![T::zero(); SUPERTILES.len()];
    set_symbol(&mut population, Label::Delta, T::one())?;
    for _ in 0..generations {
        let mut next = vec![T::zero(); SUPERTILES.len()];
        for (parent, row) in SUBSTITUTION_RULES {
            let parent_count = get_symbol(&population, parent)?;
            if parent_count.is_zero() {
                continue;
            }
            for child in row.iter().flatten() {
                let current = get_symbol(&next, *child)?;
                let bumped = current.checked_add(&parent_count).ok_or_else(|| {
                    invalid_argument("substitution_counts", "a count within range", child)
                })?;
                set_symbol(&mut next, *child, bumped)?;
            }
        }
        population = next;
    }
    expand_to_leaves(&population)
}

/// Census by the matrix recurrence over the substitution multiplicities
///
/// Builds the 9x9 child multiplicity matrix once and folds a checked
/// matrix-vector product over the state vector; cross-validates
/// [`substitution_counts`]. The caller chooses an integer width large
/// enough for the target depth.
///
/// # Errors
///
/// Fails when the multiplicity matrix cannot be assembled for the chosen
/// integer type, and on integer overflow of that width.
pub fn recurrence_counts<T>(generations: usize) -> Result<LabelCounts<T>>
where
    T: PrimInt + CheckedAdd + CheckedMul,
{
    let order = SUPERTILES.len();
    let mut data = Vec::with_capacity(order * order);
    for child in SUPERTILES {
        for parent in SUPERTILES {
            let count = T::from(multiplicity(parent, child)).ok_or_else(|| {
                invalid_argument("recurrence_counts", "a representable multiplicity", &child)
            })?;
            data.push(count);
        }
    }
    let matrix = Array2::from_shape_vec((order, order), data)
        .map_err(|e| invalid_argument("recurrence_counts", "a square matrix", &e))?;

    let mut state = Array1::from_elem(order, T::zero());
    let delta = Label::Delta
        .supertile_index()
        .ok_or_else(|| invalid_argument("recurrence_counts", "a supertile index", &Label::Delta))?;
    let start = state
        .get_mut(delta)
        .ok_or_else(|| invalid_argument("recurrence_counts", "a state slot", &delta))?;
    *start = T::one();

    for _ in 0..generations {
        state = checked_product(&matrix, &state)?;
    }
    let population = state.as_slice().ok_or_else(|| {
        invalid_argument("recurrence_counts", "a contiguous state vector", &"")
    })?;
    expand_to_leaves(population)
}

/// Checked matrix-vector product, reporting overflow instead of wrapping
fn checked_product<T>(matrix: &Array2<T>, state: &Array1<T>) -> Result<Array1<T>>
where
    T: PrimInt + CheckedAdd + CheckedMul,
{
    let mut next = Array1::from_elem(state.len(), T::zero());
    for (row, slot) in matrix.rows().into_iter().zip(next.iter_mut()) {
        let mut sum = T::zero();
        for (weight, count) in row.iter().zip(state.iter()) {
            let term = weight.checked_mul(count).ok_or_else(|| {
                invalid_argument("recurrence_counts", "a product within range", &"")
            })?;
            sum = sum.checked_add(&term).ok_or_else(|| {
                invalid_argument("recurrence_counts", "a sum within range", &"")
            })?;
        }
        *slot = sum;
    }
    Ok(next)
}

fn get_symbol<T: PrimInt>(population: &[T], symbol: Label) -> Result<T> {
    symbol
        .supertile_index()
        .and_then(|index| population.get(index).copied())
        .ok_or_else(|| invalid_argument("census", "a supertile symbol", &symbol))
}

fn set_symbol<T: PrimInt>(population: &mut [T], symbol: Label, value: T) -> Result<()> {
    let index = symbol
        .supertile_index()
        .ok_or_else(|| invalid_argument("census", "a supertile symbol", &symbol))?;
    let slot = population
        .get_mut(index)
        .ok_or_else(|| invalid_argument("census", "a population slot", &index))?;
    *slot = value;
    Ok(())
}
