//! Circular sample buffer with an incrementally maintained sum.

use core::fmt::Debug;
use core::ops::{Add, Sub};

/// A value that can be stored in a [`SampleBuffer`].
///
/// The running sum uses a wider accumulator type where the sample type could
/// overflow (integer samples are summed as `i64`).
pub trait Sample: Copy + Default + Debug {
    /// Accumulator used for the running sum.
    type Acc: Copy + Default + Debug + Add<Output = Self::Acc> + Sub<Output = Self::Acc>;

    /// Widen a sample into the accumulator type.
    fn widen(self) -> Self::Acc;

    /// Convert an accumulated sum into a real number.
    fn acc_to_f64(acc: Self::Acc) -> f64;
}

impl Sample for f64 {
    type Acc = f64;

    #[inline]
    fn widen(self) -> f64 {
        self
    }

    #[inline]
    fn acc_to_f64(acc: f64) -> f64 {
        acc
    }
}

impl Sample for i32 {
    type Acc = i64;

    #[inline]
    fn widen(self) -> i64 {
        i64::from(self)
    }

    #[inline]
    fn acc_to_f64(acc: i64) -> f64 {
        acc as f64
    }
}

/// Fixed-capacity circular buffer averaging the last `N` pushed samples.
///
/// Invariant: `sum` equals the sum of the slots, which are the last `N`
/// pushed values (or zero for slots not yet written). The sum is maintained
/// incrementally on [`push`](Self::push); [`recompute`](Self::recompute)
/// re-sums from scratch to shed accumulated floating-point drift.
///
/// # Example
///
/// ```
/// use carsim_filters::AverageFilter;
///
/// let mut speed = AverageFilter::new(3);
/// speed.push(30.0);
/// // Unwritten slots count as zero.
/// assert!((speed.average() - 10.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct SampleBuffer<T: Sample> {
    slots: Box<[T]>,
    cursor: usize,
    prev: usize,
    sum: T::Acc,
    pushed: u64,
}

/// Real-valued running average filter.
pub type AverageFilter = SampleBuffer<f64>;

/// Integer running average filter.
pub type IntAverageFilter = SampleBuffer<i32>;

impl<T: Sample> SampleBuffer<T> {
    /// Create a buffer with `capacity` zeroed slots.
    ///
    /// A capacity of zero is raised to one so the average is always defined.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: vec![T::default(); capacity].into_boxed_slice(),
            cursor: 0,
            prev: 0,
            sum: T::Acc::default(),
            pushed: 0,
        }
    }

    /// Overwrite the slot at the write cursor and advance it.
    ///
    /// The displaced value (pushed `N` samples ago) leaves the sum and the new
    /// value enters it.
    #[inline]
    pub fn push(&mut self, value: T) {
        let capacity = self.slots.len();
        if let Some(slot) = self.slots.get_mut(self.cursor) {
            let evicted = core::mem::replace(slot, value);
            self.sum = self.sum - evicted.widen() + value.widen();
        }
        self.prev = self.cursor;
        self.cursor = (self.cursor + 1) % capacity;
        self.pushed = self.pushed.saturating_add(1);
    }

    /// Push the same value `count` times.
    pub fn push_repeated(&mut self, value: T, count: usize) {
        for _ in 0..count {
            self.push(value);
        }
    }

    /// Push `value` into every slot, making the average exactly `value`.
    pub fn fill(&mut self, value: T) {
        self.push_repeated(value, self.slots.len());
        self.recompute();
    }

    /// Re-sum all slots from scratch.
    pub fn recompute(&mut self) {
        self.sum = self
            .slots
            .iter()
            .fold(T::Acc::default(), |acc, &slot| acc + slot.widen());
    }

    /// Average over the full window: `sum / N`.
    #[inline]
    pub fn average(&self) -> f64 {
        T::acc_to_f64(self.sum) / self.slots.len() as f64
    }

    /// The most recently pushed sample.
    #[inline]
    pub fn prev_value(&self) -> T {
        self.slots.get(self.prev).copied().unwrap_or_default()
    }

    /// Current running sum.
    #[inline]
    pub fn sum(&self) -> T::Acc {
        self.sum
    }

    /// Window size `N`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Total number of samples pushed since creation or the last reset.
    #[inline]
    pub fn pushed(&self) -> u64 {
        self.pushed
    }

    /// True once every slot has been written at least once.
    #[inline]
    pub fn is_warm(&self) -> bool {
        self.pushed >= self.slots.len() as u64
    }

    /// Zero every slot and rewind the cursor.
    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = T::default());
        self.cursor = 0;
        self.prev = 0;
        self.sum = T::Acc::default();
        self.pushed = 0;
    }
}

impl SampleBuffer<i32> {
    /// Average truncated toward zero, computed in integer arithmetic.
    #[inline]
    pub fn int_average(&self) -> i32 {
        let n = self.slots.len() as i64;
        i32::try_from(self.sum / n).unwrap_or(if self.sum < 0 { i32::MIN } else { i32::MAX })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_filter_is_zero() {
        let filter = AverageFilter::new(8);
        assert_eq!(filter.capacity(), 8);
        assert!(filter.average().abs() < f64::EPSILON);
        assert!(!filter.is_warm());
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        let mut filter = AverageFilter::new(0);
        assert_eq!(filter.capacity(), 1);
        filter.push(7.5);
        assert!((filter.average() - 7.5).abs() < 1e-12);
    }

    #[test]
    fn test_average_before_warm_is_biased_toward_zero() {
        let mut filter = AverageFilter::new(4);
        filter.push(8.0);
        assert!((filter.average() - 2.0).abs() < 1e-12);
        filter.push(8.0);
        assert!((filter.average() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_window_only_keeps_last_n() {
        let mut filter = AverageFilter::new(4);
        for value in [1.0, 1.0, 1.0, 1.0, 9.0] {
            filter.push(value);
        }
        assert!((filter.average() - 3.0).abs() < 1e-12);
        assert!(filter.is_warm());
    }

    #[test]
    fn test_prev_value_is_last_pushed() {
        let mut filter = AverageFilter::new(3);
        filter.push(1.0);
        filter.push(2.0);
        assert!((filter.prev_value() - 2.0).abs() < f64::EPSILON);
        filter.push(3.0);
        filter.push(4.0);
        assert!((filter.prev_value() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_recompute_matches_incremental_sum() {
        let mut filter = AverageFilter::new(5);
        for i in 0..23 {
            filter.push(f64::from(i) * 0.1);
        }
        let incremental = filter.sum();
        filter.recompute();
        assert!((incremental - filter.sum()).abs() < 1e-9);
    }

    #[test]
    fn test_recompute_clears_drift_to_exact_zero() {
        let mut filter = AverageFilter::new(3);
        for value in [0.1, 0.2, 0.3] {
            filter.push(value);
        }
        for _ in 0..3 {
            filter.push(0.0);
        }
        filter.recompute();
        assert!(filter.sum().abs() < f64::EPSILON);
        assert!(filter.average().abs() < f64::EPSILON);
    }

    #[test]
    fn test_fill_sets_exact_average() {
        let mut filter = IntAverageFilter::new(40);
        filter.fill(32767);
        assert_eq!(filter.int_average(), 32767);
        assert!(filter.is_warm());
    }

    #[test]
    fn test_int_average_truncates() {
        let mut filter = IntAverageFilter::new(3);
        filter.push(1);
        filter.push(1);
        filter.push(2);
        assert_eq!(filter.int_average(), 1);
        assert!((filter.average() - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_int_sum_does_not_overflow() {
        let mut filter = IntAverageFilter::new(180);
        filter.fill(i32::MAX);
        assert_eq!(filter.int_average(), i32::MAX);
    }

    #[test]
    fn test_reset() {
        let mut filter = IntAverageFilter::new(4);
        filter.push_repeated(100, 6);
        filter.reset();
        assert_eq!(filter.int_average(), 0);
        assert_eq!(filter.pushed(), 0);
        assert_eq!(filter.prev_value(), 0);
    }

    #[test]
    fn test_push_repeated_counts() {
        let mut filter = AverageFilter::new(10);
        filter.push_repeated(2.0, 3);
        assert_eq!(filter.pushed(), 3);
        assert!((filter.average() - 0.6).abs() < 1e-12);
    }
}
