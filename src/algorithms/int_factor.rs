///
/// Factors the given integer using trial division.
///
/// The prime factors are returned in ascending order, together with their
/// multiplicities. For `n <= 1`, there are no prime factors and the result is empty.
///
/// # Example
/// ```
/// # use ideal_arith::algorithms::int_factor::*;
/// assert_eq!(vec![(2, 2), (3, 1), (7, 1)], prime_factorize(84));
/// assert_eq!(Vec::<(i64, usize)>::new(), prime_factorize(1));
/// ```
///
pub fn prime_factorize(n: i64) -> Vec<(i64, usize)> {
    let mut result = Vec::new();
    if n <= 1 {
        return result;
    }
    let mut n = n;
    let mut p: i64 = 2;
    while (p as i128) * (p as i128) <= n as i128 {
        let mut multiplicity = 0;
        while n % p == 0 {
            n /= p;
            multiplicity += 1;
        }
        if multiplicity > 0 {
            result.push((p, multiplicity));
        }
        p += if p == 2 { 1 } else { 2 };
    }
    if n > 1 {
        result.push((n, 1));
    }
    return result;
}

///
/// Checks whether the given integer is prime, using trial division.
/// Integers smaller than 2 are never prime.
///
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    } else if n < 4 {
        return true;
    } else if n % 2 == 0 {
        return false;
    }
    let mut i: i64 = 3;
    while (i as i128) * (i as i128) <= n as i128 {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    return true;
}

#[test]
fn test_prime_factorize() {
    assert_eq!(vec![(2, 3), (3, 2), (5, 1)], prime_factorize(360));
    assert_eq!(vec![(97, 1)], prime_factorize(97));
    assert_eq!(vec![(2, 10)], prime_factorize(1024));
    assert_eq!(vec![(3, 1), (1000003, 1)], prime_factorize(3000009));
    assert!(prime_factorize(1).is_empty());
    assert!(prime_factorize(0).is_empty());
    assert!(prime_factorize(-12).is_empty());
}

#[test]
fn test_prime_factorize_product() {
    for n in 2..500 {
        let factorization = prime_factorize(n);
        assert_eq!(n, factorization.iter().map(|(p, e)| p.pow(*e as u32)).product::<i64>());
        assert!(factorization.iter().all(|(p, _)| is_prime(*p)));
        assert!(factorization.windows(2).all(|w| w[0].0 < w[1].0));
    }
}

#[test]
fn test_is_prime() {
    let primes = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31];
    for n in -5..32 {
        assert_eq!(primes.contains(&n), is_prime(n));
    }
    assert!(is_prime((1 << 31) - 1));
    assert!(!is_prime(1 << 40));
    assert!(!is_prime(1000003 * 3));
}
