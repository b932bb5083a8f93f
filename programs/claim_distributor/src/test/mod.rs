

use crate::error::DistributorError;
use anchor_lang::prelude::Result;

/// Asserts that `result` failed with exactly `expected`
pub(crate) fn assert_err<T: std::fmt::Debug>(result: Result<T>, expected: DistributorError) {
    assert_eq!(
        result.unwrap_err(),
        anchor_lang::error::Error::from(expected)
    );
}
