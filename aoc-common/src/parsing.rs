//! Small string and number helpers for puzzle lines.

use crate::error::CommonError;

/// First field of `source`, split on `split_on`, that parses as an integer.
pub fn first_int(source: &str, split_on: char) -> Option<i64> {
    source
        .split(split_on)
        .find_map(|field| field.trim().parse().ok())
}

/// The text after the first `marker`, trimmed. Empty when `marker` is absent.
fn after(source: &str, marker: char) -> &str {
    source
        .split_once(marker)
        .map_or("", |(_, rest)| rest.trim())
}

/// Integers listed after `marker`, separated by `split_on`.
///
/// `ints_after("Card 1: 4, 5, 6", ':', ',')` is `[4, 5, 6]`. Empty fields
/// are skipped.
pub fn ints_after(source: &str, marker: char, split_on: char) -> Result<Vec<i64>, CommonError> {
    after(source, marker)
        .split(split_on)
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(|field| {
            field
                .parse()
                .map_err(|_| CommonError::InvalidInput(format!("{:?} is not an integer", field)))
        })
        .collect()
}

/// Trimmed fields after `marker`, separated by `split_on`.
pub fn parts_after(source: &str, marker: char, split_on: char) -> Vec<&str> {
    let rest = after(source, marker);
    if rest.is_empty() {
        return Vec::new();
    }
    rest.split(split_on).map(str::trim).collect()
}

/// Reads a string of `0`s and `1`s as a binary number, most significant
/// bit first.
pub fn bits_to_int(bits: &str) -> Result<u64, CommonError> {
    bools_to_int(bits.chars().map(|c| match c {
        '0' => Ok(false),
        '1' => Ok(true),
        other => Err(CommonError::InvalidInput(format!("{:?} is not a bit", other))),
    }))
}

/// Folds bits, most significant first, into a number.
pub fn bools_to_int<I>(bits: I) -> Result<u64, CommonError>
where
    I: IntoIterator<Item = Result<bool, CommonError>>,
{
    let mut value = 0u64;
    for (count, bit) in bits.into_iter().enumerate() {
        if count == u64::BITS as usize {
            return Err(CommonError::InvalidInput(format!(
                "more than {} bits",
                u64::BITS
            )));
        }
        value = (value << 1) | u64::from(bit?);
    }
    Ok(value)
}

/// Product of all values, 1 for none.
pub fn product<I, N>(values: I) -> i64
where
    I: IntoIterator<Item = N>,
    N: Into<i64>,
{
    values.into_iter().fold(1, |acc, n| acc * n.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_int() {
        assert_eq!(first_int("Game 12 red", ' '), Some(12));
        assert_eq!(first_int("a, -3, 4", ','), Some(-3));
        assert_eq!(first_int("none here", ' '), None);
    }

    #[test]
    fn test_ints_after() {
        assert_eq!(ints_after("Card 1: 4, 5, 6", ':', ',').unwrap(), vec![4, 5, 6]);
        assert_eq!(ints_after("Time:   7  15   30", ':', ' ').unwrap(), vec![7, 15, 30]);
        assert!(ints_after("no marker", ':', ',').unwrap().is_empty());
        assert!(ints_after("x: 1, b", ':', ',').is_err());
    }

    #[test]
    fn test_parts_after() {
        assert_eq!(
            parts_after("Game 3: 3 blue; 4 red", ':', ';'),
            vec!["3 blue", "4 red"]
        );
        assert!(parts_after("Game 3", ':', ';').is_empty());
    }

    #[test]
    fn test_bits_to_int() {
        assert_eq!(bits_to_int("10110").unwrap(), 22);
        assert_eq!(bits_to_int("").unwrap(), 0);
        assert!(bits_to_int("102").is_err());
        assert!(bits_to_int(&"1".repeat(65)).is_err());
        assert_eq!(bits_to_int(&"1".repeat(64)).unwrap(), u64::MAX);
    }

    #[test]
    fn test_product() {
        assert_eq!(product([2, 3, 7]), 42);
        assert_eq!(product(Vec::<i32>::new()), 1);
        assert_eq!(product([4u8, 5u8]), 20);
    }
}
