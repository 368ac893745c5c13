//! Trial-division primality test.

/// Returns whether `candidate` is prime.
///
/// Every divisor in `2..candidate` is tried in order until one divides
/// evenly. Anything below 2 (including negatives) is not prime.
pub fn is_prime(candidate: i64) -> bool {
    if candidate < 2 {
        return false;
    }
    if candidate == 2 {
        return true;
    }

    let mut divisor = 2;
    while divisor < candidate {
        if candidate % divisor == 0 {
            return false;
        }
        divisor += 1;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::is_prime;

    #[test]
    fn below_two_is_not_prime() {
        for n in [i64::MIN, -7, -2, -1, 0, 1] {
            assert!(!is_prime(n), "{n} should not be prime");
        }
    }

    #[test]
    fn two_is_prime() {
        assert!(is_prime(2));
    }

    #[test]
    fn small_values() {
        let primes = [3, 5, 7, 11, 13, 97, 997];
        let composites = [4, 6, 9, 15, 25, 49, 91, 999];

        for n in primes {
            assert!(is_prime(n), "{n} should be prime");
        }
        for n in composites {
            assert!(!is_prime(n), "{n} should not be prime");
        }
    }
}
