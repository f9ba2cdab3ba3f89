//! Pure batch helpers over an explicit list of values.

use crate::numeric::Numeric;

/// Arithmetic mean. An empty input yields zero.
pub fn average<'a, T, I>(values: I) -> T
where
    T: Numeric,
    I: IntoIterator<Item = &'a T>,
{
    let (sum, count) = values
        .into_iter()
        .fold((T::ZERO, 0usize), |(sum, count), value| (sum + *value, count + 1));
    if count == 0 {
        T::ZERO
    } else {
        sum / T::from_usize(count)
    }
}

/// Population standard deviation around `mean`, or around the average when no
/// mean is supplied.
pub fn standard_deviation<'a, T, I>(values: I, mean: Option<T>) -> T
where
    T: Numeric,
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: Clone,
{
    let values = values.into_iter();
    let middle = match mean {
        Some(mean) => mean,
        None => average(values.clone()),
    };
    let squared: Vec<T> = values
        .map(|value| {
            let diff = *value - middle;
            diff * diff
        })
        .collect();
    average(&squared).sqrt()
}

pub fn maximum<'a, T, I>(values: I) -> Option<T>
where
    T: Numeric,
    I: IntoIterator<Item = &'a T>,
{
    values.into_iter().fold(None, |max, value| match max {
        Some(max) if max >= *value => Some(max),
        _ => Some(*value),
    })
}

pub fn minimum<'a, T, I>(values: I) -> Option<T>
where
    T: Numeric,
    I: IntoIterator<Item = &'a T>,
{
    values.into_iter().fold(None, |min, value| match min {
        Some(min) if min <= *value => Some(min),
        _ => Some(*value),
    })
}
