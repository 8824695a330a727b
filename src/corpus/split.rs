//! Seeded random splitting of cleaned article collections.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{Result, VeracityError};

/// Split `records` into `(rest, held_out)` where the held-out part is a
/// random sample of `fraction` of the input, drawn with a fixed seed.
///
/// Applied twice by the corpus builder: once to carve out the test set,
/// then again on the remainder to carve out validation.
pub fn train_test_split<T>(mut records: Vec<T>, fraction: f64, seed: u64) -> Result<(Vec<T>, Vec<T>)> {
    if !(0.0..1.0).contains(&fraction) || fraction == 0.0 {
        return Err(VeracityError::PreprocessingError(format!(
            "split fraction must be in (0, 1), got {fraction}"
        )));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    records.shuffle(&mut rng);

    let n_held_out = ((records.len() as f64) * fraction).ceil() as usize;
    let rest = records.split_off(n_held_out);

    Ok((rest, records))
}
