use thiserror::Error;

/// Errors that can occur when computing [`product_except_self`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProductError {
    #[error("product of all values except index {index} does not fit in i64")]
    Overflow { index: usize },
}

/// Returns, for every position, the product of all other values.
///
/// Runs a prefix pass and a suffix pass without dividing, so zeros need no
/// special casing. Partial products are tracked in `i128`; a partial product
/// that overflows even that is remembered as overflowed and only matters if
/// no zero cancels it.
///
/// # Errors
///
/// Returns [`ProductError::Overflow`] for the first position whose answer does
/// not fit in `i64`.
pub fn product_except_self(values: &[i64]) -> Result<Vec<i64>, ProductError> {
    let mut partial = vec![Some(1_i128); values.len()];

    let mut prefix = Some(1_i128);
    for (slot, &value) in partial.iter_mut().zip(values) {
        *slot = prefix;
        prefix = times(prefix, value);
    }

    let mut suffix = Some(1_i128);
    for (slot, &value) in partial.iter_mut().zip(values).rev() {
        *slot = combine(*slot, suffix);
        suffix = times(suffix, value);
    }

    partial
        .into_iter()
        .enumerate()
        .map(|(index, product)| {
            product
                .and_then(|p| i64::try_from(p).ok())
                .ok_or(ProductError::Overflow { index })
        })
        .collect()
}

/// Multiplies a partial product by one more value; `None` means overflowed.
fn times(acc: Option<i128>, value: i64) -> Option<i128> {
    if value == 0 {
        return Some(0);
    }
    acc.and_then(|a| a.checked_mul(i128::from(value)))
}

fn combine(left: Option<i128>, right: Option<i128>) -> Option<i128> {
    match (left, right) {
        (Some(0), _) | (_, Some(0)) => Some(0),
        (Some(a), Some(b)) => a.checked_mul(b),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_of_others() {
        assert_eq!(product_except_self(&[1, 2, 3, 4]), Ok(vec![24, 12, 8, 6]));
        assert_eq!(product_except_self(&[-1, 1, 0, -3, 3]), Ok(vec![0, 0, 9, 0, 0]));
    }

    #[test]
    fn short_inputs() {
        assert_eq!(product_except_self(&[]), Ok(vec![]));
        assert_eq!(product_except_self(&[7]), Ok(vec![1]));
        assert_eq!(product_except_self(&[7, -2]), Ok(vec![-2, 7]));
    }

    #[test]
    fn two_zeros_zero_everything() {
        assert_eq!(product_except_self(&[0, 5, 0]), Ok(vec![0, 0, 0]));
    }

    #[test]
    fn zero_cancels_overflowing_partial_product() {
        let huge = i64::MAX;
        // The prefix before the first zero overflows even i128.
        assert_eq!(
            product_except_self(&[huge, huge, huge, 0, 0]),
            Ok(vec![0, 0, 0, 0, 0])
        );

        // Only the zero's own answer overflows.
        assert_eq!(
            product_except_self(&[huge, 2, 0]),
            Err(ProductError::Overflow { index: 2 })
        );
    }

    #[test]
    fn answer_equal_to_i64_min_fits() {
        let result = product_except_self(&[1 << 62, -2, 5]).unwrap();
        assert_eq!(result[2], i64::MIN);
    }
}
