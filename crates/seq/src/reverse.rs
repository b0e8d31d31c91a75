/// Reverses `data` in place by swapping mirrored pairs.
#[inline]
pub fn reverse<T>(data: &mut [T]) {
    let len = data.len();
    for i in 0..len / 2 {
        data.swap(i, len - 1 - i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_cases() {
        let cases: [(Vec<i32>, Vec<i32>); 5] = [
            (vec![], vec![]),
            (vec![42], vec![42]),
            (vec![1, 2], vec![2, 1]),
            (vec![1, 2, 3], vec![3, 2, 1]),
            (vec![1, 2, 3, 4], vec![4, 3, 2, 1]),
        ];

        for (input, expected) in cases {
            let mut actual = input.clone();
            reverse(&mut actual);
            assert_eq!(actual, expected, "input={input:?}");
        }
    }

    #[test]
    fn matches_std_and_round_trips() {
        for len in 0..40 {
            let data: Vec<String> = (0..len).map(|i| format!("s{i}")).collect();

            let mut actual = data.clone();
            reverse(&mut actual);
            let mut expected = data.clone();
            expected.reverse();
            assert_eq!(actual, expected);

            reverse(&mut actual);
            assert_eq!(actual, data);
        }
    }
}
