pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Maps the digit keys `1`..`9` to a zero-based index.
pub fn digit_index(ch: char) -> Option<usize> {
    let digit = ch.to_digit(10)? as usize;
    digit.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::{digit_index, wrap_decrement, wrap_increment};

    #[test]
    fn wrapping_stays_in_range() {
        assert_eq!(wrap_increment(3, 4), 0);
        assert_eq!(wrap_decrement(0, 4), 3);
        assert_eq!(wrap_increment(0, 0), 0);
        assert_eq!(wrap_decrement(0, 0), 0);
    }

    #[test]
    fn digits_are_one_based() {
        assert_eq!(digit_index('1'), Some(0));
        assert_eq!(digit_index('4'), Some(3));
        assert_eq!(digit_index('0'), None);
        assert_eq!(digit_index('x'), None);
    }
}
