//! Random input generation

use rand::Rng;

/// Fallback search target when the data set is empty.
const EMPTY_ARRAY_TARGET: i32 = 42;

/// Generate `length` integers, each drawn independently and uniformly from
/// the inclusive range `[min, max]`. No uniqueness guarantee, within a call
/// or across calls.
pub fn generate_random_array(min: i32, max: i32, length: usize) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    (0..length).map(|_| rng.gen_range(min..=max)).collect()
}

/// Pick a random element of `array`, used as the default search target so
/// a freshly opened search usually succeeds. Returns a fixed fallback for
/// an empty array.
pub fn random_value_from(array: &[i32]) -> i32 {
    if array.is_empty() {
        return EMPTY_ARRAY_TARGET;
    }
    let index = rand::thread_rng().gen_range(0..array.len());
    array[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_length_within_bounds() {
        let data = generate_random_array(5, 95, 15);
        assert_eq!(data.len(), 15);
        assert!(data.iter().all(|&v| (5..=95).contains(&v)));
    }

    #[test]
    fn degenerate_range_yields_constant_values() {
        let data = generate_random_array(7, 7, 4);
        assert_eq!(data, vec![7, 7, 7, 7]);
    }

    #[test]
    fn zero_length_yields_empty() {
        assert!(generate_random_array(0, 10, 0).is_empty());
    }

    #[test]
    fn random_value_comes_from_the_array() {
        let data = [3, 9, 27];
        for _ in 0..20 {
            assert!(data.contains(&random_value_from(&data)));
        }
        assert_eq!(random_value_from(&[]), EMPTY_ARRAY_TARGET);
    }
}
