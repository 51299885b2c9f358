//! Arithmetic behind `add`, `median` and `rand`

use crate::error::{Error, Result};

/// Multiplier of the Lehmer (Park-Miller) generator.
pub const LEHMER_MULTIPLIER: i64 = 16807;
/// Modulus of the Lehmer generator, 2^31 - 1.
pub const LEHMER_MODULUS: i64 = 2_147_483_647;

pub fn parse_number(input: &str) -> Result<i64> {
    input.trim().parse::<i64>().map_err(|_| Error::Parse {
        input: input.to_string(),
    })
}

/// Sum of two operands, widened so that no pair of `i64` inputs can fail.
pub fn add(a: i64, b: i64) -> i128 {
    i128::from(a) + i128::from(b)
}

/// Median of `numbers`, sorting them in place. An empty list has median 0.
pub fn median(numbers: &mut [i64]) -> f64 {
    numbers.sort_unstable();
    let count = numbers.len();
    if count == 0 {
        return 0.0;
    }
    if count % 2 == 1 {
        return numbers[count / 2] as f64;
    }
    (numbers[count / 2 - 1] as f64 + numbers[count / 2] as f64) / 2.0
}

/// Next value of the generator: `16807 * x mod (2^31 - 1)`.
pub fn lehmer_next(x: i64) -> i64 {
    let product = i128::from(x) * i128::from(LEHMER_MULTIPLIER);
    // rem_euclid by a modulus below 2^31 always fits in i64
    product.rem_euclid(i128::from(LEHMER_MODULUS)) as i64
}

/// Shortest decimal form: `23`, `23.5`, `0`.
pub fn format_median(value: f64) -> String {
    format!("{value}")
}
