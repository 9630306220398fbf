use crate::ring::*;
use crate::integer::*;
use crate::primitive_int::StaticRing;
use crate::algorithms::crt::mod_reduce;

///
/// Computes `base^|power|` using square-and-multiply, where the group (or monoid) operations
/// are given by `square` and `multiply_base`. Here `multiply_base(&base, x)` should compute
/// `base * x`, and `identity` is the neutral element.
///
pub fn generic_abs_square_and_multiply<T, U, F, H, I>(base: U, power: &El<I>, int_ring: I, mut square: F, mut multiply_base: H, identity: T) -> T
    where I: IntegerRingStore,
        I::Type: IntegerRing,
        F: FnMut(T) -> T, H: FnMut(&U, T) -> T
{
    if int_ring.is_zero(power) {
        return identity;
    } else if int_ring.is_one(power) {
        return multiply_base(&base, identity);
    }

    let mut result = identity;
    let Some(highest_bit) = int_ring.abs_highest_set_bit(power) else {
        unreachable!()
    };
    for i in (0..=highest_bit).rev() {
        if int_ring.abs_is_bit_set(power, i) {
            result = multiply_base(&base, square(result));
        } else {
            result = square(result);
        }
    }
    return result;
}

///
/// Computes `base^power mod modulus`, as an integer in `[0, modulus)`.
///
/// Intermediate products are computed with 128 bits, so this does not overflow for
/// any modulus that fits into an `i64`. Panics if `modulus <= 0` or `power < 0`.
///
/// # Example
/// ```
/// # use ideal_arith::algorithms::sqr_mul::mod_pow;
/// assert_eq!(1, mod_pow(3, 4, 5));
/// assert_eq!(4, mod_pow(-2, 3, 6));
/// assert_eq!(0, mod_pow(7, 0, 1));
/// ```
///
pub fn mod_pow(base: i64, power: i64, modulus: i64) -> i64 {
    assert!(modulus > 0, "modulus must be positive");
    assert!(power >= 0, "exponent must be nonnegative");
    let base = mod_reduce(base, modulus) as i128;
    let result = generic_abs_square_and_multiply(
        base,
        &power,
        StaticRing::<i64>::RING,
        |x| (x * x) % modulus as i128,
        |b, x| (*b * x) % modulus as i128,
        1
    );
    return mod_reduce(result as i64, modulus);
}

#[test]
fn test_pow() {
    assert_eq!(3 * 3, generic_abs_square_and_multiply(3, &2, StaticRing::<i64>::RING, |a| a * a, |a, b| *a * b, 1));
    assert_eq!(3 * 3 * 3 * 3 * 3, generic_abs_square_and_multiply(3, &5, StaticRing::<i64>::RING, |a| a * a, |a, b| *a * b, 1));
    assert_eq!(1, generic_abs_square_and_multiply(3, &0, StaticRing::<i64>::RING, |a| a * a, |a, b| *a * b, 1));
}

#[test]
fn test_mod_pow() {
    assert_eq!(1, mod_pow(2, 10, 1023));
    assert_eq!(24, mod_pow(2, 10, 1000));
    assert_eq!(1, mod_pow(5, 0, 7));
    assert_eq!(0, mod_pow(5, 3, 1));
    // Fermat
    let p = (1 << 61) - 1;
    assert_eq!(1, mod_pow(123456789, p - 1, p));
    assert_eq!(p - 1, mod_pow(-1, 5, p));
}
