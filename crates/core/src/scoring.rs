//! Batch-based point scheme.
//!
//! Questions are grouped by asking order into consecutive batches of ten;
//! the batch number is the point value of every question in it. The first
//! ten questions are worth one point each, the next ten two, and so on.

/// Questions per batch.
pub const BATCH_SIZE: u32 = 10;

/// Point value of the question about to be asked, given how many questions
/// have already been asked this session (0-indexed).
///
/// # Examples
///
/// ```
/// # use quiz_core::scoring::points_for;
/// assert_eq!(points_for(0), 1);
/// assert_eq!(points_for(9), 1);
/// assert_eq!(points_for(10), 2);
/// ```
#[must_use]
pub fn points_for(questions_asked: u32) -> i64 {
    i64::from(questions_asked / BATCH_SIZE) + 1
}

/// Highest score obtainable from a pool of `total_questions` if every
/// question is answered correctly.
///
/// Fills successive batches of up to ten and accumulates
/// `batch_number * questions_in_batch`; the final batch may be partial and
/// contributes only its actual fill.
#[must_use]
pub fn max_score(total_questions: usize) -> i64 {
    let mut total = 0_i64;
    let mut batch = 1_i64;
    let mut remaining = total_questions;

    while remaining > 0 {
        let in_batch = remaining.min(BATCH_SIZE as usize);
        total += batch * in_batch as i64;
        remaining -= in_batch;
        batch += 1;
    }

    total
}
