//! Answer input parsing and formatting.
//!
//! Users type 1-based option numbers separated by commas; internally answers
//! are sets of 0-based indices.

use std::collections::BTreeSet;
use std::num::IntErrorKind;

use crate::error::InputError;

/// A normalized answer: the set of selected 0-based option indices.
pub type AnswerSet = BTreeSet<usize>;

/// Parse a raw answer line such as `"1, 3"` for a question with
/// `option_count` options.
///
/// Every token must be an integer in `1..=option_count`; integers too large
/// to parse count as out of range. Duplicates collapse.
pub fn parse_answer(raw: &str, option_count: usize) -> Result<AnswerSet, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(InputError::Empty);
    }

    raw.split(',')
        .map(|token| {
            let token = token.trim();
            let out_of_range = || InputError::OutOfRange {
                number: token.to_string(),
                max: option_count,
            };
            let number = match token.parse::<i64>() {
                Ok(n) => n,
                Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                    return Err(out_of_range());
                }
                Err(_) => return Err(InputError::NotANumber(token.to_string())),
            };
            if number < 1 || number as u64 > option_count as u64 {
                return Err(out_of_range());
            }
            Ok(number as usize - 1)
        })
        .collect()
}

/// Render indices as 1-based option numbers, e.g. `{0, 2}` → `"1, 3"`.
pub fn format_option_numbers(answer: &AnswerSet) -> String {
    answer
        .iter()
        .map(|i| (i + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
