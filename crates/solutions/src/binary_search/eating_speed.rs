use thiserror::Error;

/// Errors that can occur when searching for an eating speed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EatingSpeedError {
    #[error("there are no piles to eat")]
    NoPiles,

    #[error("{piles} piles cannot be finished in {hours} hours at any speed")]
    NotEnoughHours { piles: usize, hours: u64 },
}

/// Returns the smallest whole-number speed that finishes every pile within
/// `hours`.
///
/// At speed `s` a pile of `p` takes `ceil(p / s)` hours, and only one pile is
/// eaten per hour. The total is monotone in `s`, so the answer is found by
/// binary search over `1..=max(piles)`.
///
/// # Errors
///
/// Returns [`EatingSpeedError::NoPiles`] for empty input, and
/// [`EatingSpeedError::NotEnoughHours`] when there are fewer hours than
/// non-empty piles, since each of those takes at least one hour.
pub fn min_eating_speed(piles: &[u64], hours: u64) -> Result<u64, EatingSpeedError> {
    let largest = piles.iter().copied().max().ok_or(EatingSpeedError::NoPiles)?;
    let non_empty = piles.iter().filter(|&&pile| pile > 0).count();
    if u64::try_from(non_empty).unwrap_or(u64::MAX) > hours {
        return Err(EatingSpeedError::NotEnoughHours {
            piles: non_empty,
            hours,
        });
    }

    let mut low = 1;
    let mut high = largest.max(1);
    let mut answer = high;
    while low <= high {
        let speed = low + (high - low) / 2;
        if hours_needed(piles, speed) <= hours {
            answer = speed;
            high = speed - 1;
        } else {
            low = speed + 1;
        }
    }

    Ok(answer)
}

fn hours_needed(piles: &[u64], speed: u64) -> u64 {
    piles
        .iter()
        .map(|&pile| pile.div_ceil(speed))
        .fold(0, u64::saturating_add)
}
