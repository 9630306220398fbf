use crate::algorithms::eea::solve_linear_diophantine;
use crate::pid::*;
use crate::primitive_int::StaticRing;

///
/// Returns the representative of `x mod m` in `[0, m)`. Panics if `m <= 0`.
///
pub fn mod_reduce(x: i64, m: i64) -> i64 {
    assert!(m > 0, "modulus must be positive");
    x.rem_euclid(m)
}

///
/// Combines two congruences `x = a1 mod m1` and `x = a2 mod m2` using Garner's
/// method, for not necessarily coprime moduli.
///
/// Returns the unique solution in `[0, lcm(m1, m2))`, or `None` if the congruences
/// are incompatible, i.e. `a1 != a2 mod gcd(m1, m2)`. Panics if one of the moduli
/// is not positive, or if `lcm(m1, m2)` does not fit into an `i64`, since then the
/// solution might not be representable.
///
/// # Example
/// ```
/// # use ideal_arith::algorithms::crt::*;
/// assert_eq!(Some(8), garner_combine(2, 3, 3, 5));
/// assert_eq!(Some(4), garner_combine(0, 4, 4, 6));
/// assert_eq!(None, garner_combine(1, 4, 2, 6));
/// ```
///
pub fn garner_combine(a1: i64, m1: i64, a2: i64, m2: i64) -> Option<i64> {
    let a1 = mod_reduce(a1, m1);
    let a2 = mod_reduce(a2, m2);
    let g = StaticRing::<i64>::RING.ideal_gen(&m1, &m2);
    if a1 % g != a2 % g {
        return None;
    }
    let lcm = (m1 / g) as i128 * m2 as i128;
    assert!(lcm <= i64::MAX as i128, "lcm({}, {}) does not fit into i64", m1, m2);
    // p * m1 = g mod m2, so x = a1 + m1 * k with k = p * (a2 - a1) / g mod m2 / g
    let (p, _) = solve_linear_diophantine(m1, m2);
    let m2_red = (m2 / g) as i128;
    let k = (((a2 - a1) / g) as i128).rem_euclid(m2_red) * (p as i128).rem_euclid(m2_red) % m2_red;
    let result = a1 as i128 + m1 as i128 * k;
    debug_assert!(result < lcm);
    return Some(result as i64);
}

#[test]
fn test_mod_reduce() {
    assert_eq!(2, mod_reduce(-3, 5));
    assert_eq!(0, mod_reduce(10, 5));
    assert_eq!(4, mod_reduce(4, 5));
    assert_eq!(0, mod_reduce(i64::MIN, 2));
}

#[test]
#[should_panic]
fn test_mod_reduce_nonpositive() {
    mod_reduce(3, 0);
}

#[test]
fn test_garner_combine() {
    assert_eq!(Some(8), garner_combine(2, 3, 3, 5));
    assert_eq!(Some(8), garner_combine(-1, 3, -2, 5));
    assert_eq!(Some(10), garner_combine(4, 6, 2, 8));
    assert_eq!(None, garner_combine(1, 6, 2, 8));
    assert_eq!(Some(0), garner_combine(0, 7, 0, 7));
    for a1 in 0..12 {
        for a2 in 0..18 {
            match garner_combine(a1, 12, a2, 18) {
                Some(x) => {
                    assert!(0 <= x && x < 36);
                    assert_eq!(a1, x % 12);
                    assert_eq!(a2, x % 18);
                },
                None => assert!(a1 % 6 != a2 % 6)
            }
        }
    }
}

#[test]
fn test_garner_combine_large() {
    let m1 = (1 << 40) + 15;
    let m2 = (1 << 21) + 17;
    let x = garner_combine(3, m1, 5, m2).unwrap();
    assert_eq!(3, x % m1);
    assert_eq!(5, x % m2);

    let m1 = (1 << 62) - 57;
    let m2 = 2;
    let x = garner_combine(m1 - 1, m1, 0, m2).unwrap();
    assert_eq!(m1 - 1, x % m1);
    assert_eq!(0, x % m2);

    let m1 = 3 * ((1 << 60) + 1);
    let m2 = 6;
    assert_eq!(Some(m1 - 2), garner_combine(-2, m1, 1, m2));
    assert_eq!(Some(i64::MAX - 2), garner_combine(-2, i64::MAX, -2, i64::MAX));
}

#[test]
#[should_panic]
fn test_garner_combine_lcm_overflow() {
    garner_combine(1, 1 << 40, 2, (1 << 40) - 1);
}
