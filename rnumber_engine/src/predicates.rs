// predicates.rs - Number tests used by the rule table
//
// All three are total over i64, so any neighbor sum (or its absolute value)
// can be passed in without overflow.

/// True for terms of 0, 1, 1, 2, 3, 5, 8, ...
pub fn is_fibonacci(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let (mut a, mut b) = (0i64, 1i64);
    while a < n {
        let Some(next) = a.checked_add(b) else {
            return b == n;
        };
        (a, b) = (b, next);
    }
    a == n
}

pub fn is_power_of_two(n: i64) -> bool {
    u64::try_from(n).is_ok_and(u64::is_power_of_two)
}

/// Trial division up to the square root.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let n = n as u64;
    (2u64..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}
