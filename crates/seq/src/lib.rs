mod dedup;
mod reverse;
mod search;
mod shuffle;
mod stringify;
mod sum;

pub use dedup::{FloatKey, unique, unique_by_key, unique_floats};
pub use reverse::reverse;
pub use search::{contains, find_index, find_index_or_sentinel};
pub use shuffle::{Shuffler, shuffle, shuffle_thread_local};
pub use stringify::{to_csv_string, to_delimited_string};
pub use sum::{Summable, sum};

/// Returned by [`find_index_or_sentinel`] when the target is absent.
pub const NOT_FOUND: isize = -1;

/// Delimiter used by [`to_csv_string`].
pub const DEFAULT_DELIMITER: &str = ",";

/// Environment variable read by [`Shuffler::from_env`].
pub const SHUFFLE_SEED_ENV: &str = "SEQ_SHUFFLE_SEED";

#[derive(Debug, thiserror::Error)]
pub enum SeqError {
    #[error("invalid shuffle seed {value:?}: expected a decimal or 0x-prefixed u64")]
    InvalidSeed { value: String },
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn random_vec(rng: &mut StdRng, len: usize, modulo: u64) -> Vec<u64> {
        (0..len).map(|_| rng.random::<u64>() % modulo).collect()
    }

    fn brute_force_unique(data: &[u64]) -> Vec<u64> {
        let mut out: Vec<u64> = Vec::new();
        for &x in data {
            if !out.contains(&x) {
                out.push(x);
            }
        }
        out
    }

    #[test]
    fn scenarios() {
        assert_eq!(unique(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
        assert_eq!(to_delimited_string(&[1, 2, 3], ","), "1,2,3");
        assert_eq!(find_index_or_sentinel(&["a", "b", "c"], &"b"), 1);
        assert_eq!(find_index_or_sentinel(&["a", "b", "c"], &"z"), -1);

        let mut data = [1, 2, 3, 4];
        reverse(&mut data);
        assert_eq!(data, [4, 3, 2, 1]);
    }

    #[test]
    fn fixed_seed_unique_matches_bruteforce() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[0_usize, 1, 2, 7, 64, 513] {
            for &modulo in &[1_u64, 4, 32, u64::MAX] {
                let data = random_vec(&mut rng, size, modulo);
                let out = unique(&data);

                assert_eq!(out, brute_force_unique(&data), "size={size} modulo={modulo}");
                assert!(out.len() <= data.len());

                let distinct = data.iter().collect::<HashSet<_>>().len();
                assert_eq!(out.len() == data.len(), distinct == data.len());
            }
        }
    }

    #[test]
    fn fixed_seed_find_index_returns_first_match() {
        let mut rng = StdRng::seed_from_u64(0xF11D_2026);
        for _ in 0..200 {
            let data = random_vec(&mut rng, 48, 16);
            let target = rng.random::<u64>() % 20;
            let expected = data.iter().position(|&x| x == target);

            assert_eq!(find_index(&data, &target), expected);
            assert_eq!(contains(&data, &target), expected.is_some());
            match expected {
                Some(i) => assert_eq!(find_index_or_sentinel(&data, &target), i as isize),
                None => assert_eq!(find_index_or_sentinel(&data, &target), NOT_FOUND),
            }
        }
    }

    #[test]
    fn fixed_seed_reverse_and_shuffle_preserve_multiset() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        let mut shuffler = Shuffler::with_seed(0xBA5E_0001);
        for &size in &[0_usize, 1, 2, 3, 31, 256] {
            let data = random_vec(&mut rng, size, 8);
            let mut sorted = data.clone();
            sorted.sort_unstable();

            let mut reversed = data.clone();
            reverse(&mut reversed);
            let mut check = reversed.clone();
            check.sort_unstable();
            assert_eq!(check, sorted);
            reverse(&mut reversed);
            assert_eq!(reversed, data);

            let mut shuffled = data.clone();
            shuffler.shuffle(&mut shuffled);
            assert_eq!(shuffled.len(), data.len());
            shuffled.sort_unstable();
            assert_eq!(shuffled, sorted);
        }
    }

    #[test]
    fn fixed_seed_sum_matches_wide_total() {
        let mut rng = StdRng::seed_from_u64(0x5A11_2026);
        for &size in &[0_usize, 1, 10, 1000] {
            let data: Vec<u32> = (0..size).map(|_| rng.random_range(0..1_000_000)).collect();
            let wide: u64 = data.iter().map(|&x| u64::from(x)).sum();
            assert_eq!(u64::from(sum(&data)), wide);
        }
    }
}
