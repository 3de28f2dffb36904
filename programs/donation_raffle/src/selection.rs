/// Maps a random word onto an index into a contributor list of length
/// `contributor_count`.
///
/// The word is read as a big-endian unsigned 256-bit integer and reduced
/// modulo the count, so the result is `word mod count` exactly. Returns
/// `None` for an empty list.
///
/// The reduction is not perfectly uniform when 2^256 is not a multiple of
/// the count. With at most a few dozen contributors the bias is far below
/// anything observable.
pub fn select_winner_index(random_word: &[u8; 32], contributor_count: usize) -> Option<usize> {
    if contributor_count == 0 {
        return None;
    }
    let modulus = contributor_count as u128;
    let remainder = random_word
        .iter()
        .fold(0u128, |acc, &byte| ((acc << 8) | byte as u128) % modulus);
    Some(remainder as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_from_u64(value: u64) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[24..].copy_from_slice(&value.to_be_bytes());
        word
    }

    #[test]
    fn small_values_reduce_modulo_count() {
        assert_eq!(select_winner_index(&word_from_u64(7), 3), Some(1));
        assert_eq!(select_winner_index(&word_from_u64(9), 3), Some(0));
        assert_eq!(select_winner_index(&word_from_u64(796), 10), Some(6));
    }

    #[test]
    fn full_width_word_is_reduced_as_one_integer() {
        // 2^256 - 1 is divisible by 3 and 5, and leaves 1 modulo 7.
        let max = [0xffu8; 32];
        assert_eq!(select_winner_index(&max, 3), Some(0));
        assert_eq!(select_winner_index(&max, 5), Some(0));
        assert_eq!(select_winner_index(&max, 7), Some(1));
    }

    #[test]
    fn high_bytes_contribute_to_the_result() {
        // 2^248 mod 3 == 1, so only the leading byte set to 1 yields index 1.
        let mut word = [0u8; 32];
        word[0] = 1;
        assert_eq!(select_winner_index(&word, 3), Some(1));
    }

    #[test]
    fn single_contributor_always_wins() {
        assert_eq!(select_winner_index(&[0xab; 32], 1), Some(0));
    }

    #[test]
    fn empty_list_has_no_winner() {
        assert_eq!(select_winner_index(&word_from_u64(5), 0), None);
    }

    #[test]
    fn result_is_deterministic() {
        let word = [0x5au8; 32];
        assert_eq!(
            select_winner_index(&word, 17),
            select_winner_index(&word, 17)
        );
    }
}
