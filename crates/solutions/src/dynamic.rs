//! Bottom-up dynamic programming.

use thiserror::Error;

/// Errors that can occur when computing [`coin_change`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CoinChangeError {
    #[error("a table for amount {amount} cannot be allocated")]
    TooLarge { amount: u64 },
}

/// Returns the fewest coins that add up to `amount`, or `None` if no
/// combination does.
///
/// Every denomination may be used any number of times. Zero-valued coins
/// never help and are ignored. The table has one entry per amount from `0`
/// to `amount`, so memory grows with `amount`.
///
/// # Errors
///
/// Returns [`CoinChangeError::TooLarge`] if the table for `amount` does not
/// fit in memory.
///
/// # Examples
///
/// ```
/// use drills_solutions::dynamic::coin_change;
///
/// assert_eq!(coin_change(&[1, 2, 5], 11), Ok(Some(3)));
/// assert_eq!(coin_change(&[2], 3), Ok(None));
/// ```
pub fn coin_change(coins: &[u64], amount: u64) -> Result<Option<u64>, CoinChangeError> {
    let too_large = CoinChangeError::TooLarge { amount };
    let target = usize::try_from(amount).map_err(|_| too_large)?;
    let len = target.checked_add(1).ok_or(too_large)?;

    // fewest[a] is the fewest coins summing to a, if any.
    let mut fewest: Vec<Option<u64>> = Vec::new();
    fewest.try_reserve_exact(len).map_err(|_| too_large)?;
    fewest.resize(len, None);
    fewest[0] = Some(0);

    for total in 1..=target {
        fewest[total] = coins
            .iter()
            .filter(|&&coin| coin > 0)
            .filter_map(|&coin| usize::try_from(coin).ok())
            .filter(|&coin| coin <= total)
            .filter_map(|coin| fewest[total - coin])
            .min()
            .map(|count| count + 1);
    }

    Ok(fewest[target])
}
