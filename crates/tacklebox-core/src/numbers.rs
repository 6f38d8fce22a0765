//! Numeric helpers: rounding and formatting, number theory, Roman numerals.
//!
//! Values are `f64` unless the domain is intrinsically integral. Reducers
//! over an empty slice return a sentinel (`NaN` or the identity) rather than
//! an error:
//!
//! | helper      | empty input |
//! |-------------|-------------|
//! | [`gcd`]     | `NaN`       |
//! | [`lcm`]     | `NaN`       |
//! | [`average`] | `NaN`       |
//! | [`sum`]     | `0.0`       |

use crate::{Error, Result};
use rand::Rng;
use std::f64::consts::PI;

const ROMAN_TABLE: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

const MAX_FORMAT_DIGITS: usize = 100;

/// Remainder of `a / b`, carrying the sign of the dividend.
pub fn modulus(a: f64, b: f64) -> f64 {
    a % b
}

/// Convert an angle from radians to degrees.
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Convert an angle from degrees to radians.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Random integer in the inclusive range `[ceil(min), floor(max)]`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the range holds no integer or a
/// bound is not finite.
#[allow(clippy::cast_possible_truncation)]
pub fn random_int(min: f64, max: f64) -> Result<i64> {
    let (lo, hi) = (min.ceil(), max.floor());
    if !lo.is_finite() || !hi.is_finite() || lo > hi {
        return Err(Error::InvalidArgument(format!(
            "no integer between {min} and {max}"
        )));
    }
    Ok(rand::thread_rng().gen_range(lo as i64..=hi as i64))
}

/// Random float in the half-open range `[min, max)`.
///
/// Inverted bounds are accepted and yield a value in `(max, min]`.
pub fn random_float(min: f64, max: f64) -> f64 {
    let unit: f64 = rand::thread_rng().gen_range(0.0..1.0);
    unit.mul_add(max - min, min)
}

/// Format with `precision` significant digits.
///
/// Switches to exponential notation (`1.2e+5`) when the decimal exponent is
/// below -6 or at least `precision`, matching the behaviour of script
/// runtimes. Ties round away from zero on the exact binary value, so
/// `to_precision(0.125, 2)` is `"0.13"`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] unless `1 <= precision <= 100`.
///
/// ```rust
/// use tacklebox_core::numbers::to_precision;
///
/// assert_eq!(to_precision(123.456, 4)?, "123.5");
/// assert_eq!(to_precision(0.000123, 2)?, "0.00012");
/// assert_eq!(to_precision(123456.0, 2)?, "1.2e+5");
/// # Ok::<(), tacklebox_core::Error>(())
/// ```
pub fn to_precision(num: f64, precision: usize) -> Result<String> {
    if !(1..=MAX_FORMAT_DIGITS).contains(&precision) {
        return Err(Error::InvalidArgument(format!(
            "precision {precision} is outside 1..={MAX_FORMAT_DIGITS}"
        )));
    }
    if let Some(text) = non_finite_text(num) {
        return Ok(text);
    }

    let (digits, point) = exact_digits(num);
    let (significand, exponent) = match digits.iter().position(|&d| d != b'0') {
        Some(first) => {
            let (mut rounded, carried) = round_digits_half_up(&digits[first..], precision);
            #[allow(clippy::cast_possible_wrap)]
            let mut exponent = point as i64 - first as i64 - 1;
            if carried {
                rounded.truncate(precision);
                exponent += 1;
            }
            (rounded, exponent)
        },
        None => (vec![b'0'; precision], 0),
    };
    let significand = ascii(&significand);
    let sign = if num < 0.0 { "-" } else { "" };

    #[allow(clippy::cast_possible_wrap)]
    let digits_wanted = precision as i64;
    if exponent < -6 || exponent >= digits_wanted {
        let (lead, rest) = significand.split_at(1);
        let mantissa = if rest.is_empty() { lead.to_string() } else { format!("{lead}.{rest}") };
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        return Ok(format!("{sign}{mantissa}e{exp_sign}{}", exponent.unsigned_abs()));
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let text = if exponent >= 0 {
        let (int, frac) = significand.split_at(exponent as usize + 1);
        if frac.is_empty() { int.to_string() } else { format!("{int}.{frac}") }
    } else {
        let zeros = "0".repeat(exponent.unsigned_abs() as usize - 1);
        format!("0.{zeros}{significand}")
    };
    Ok(format!("{sign}{text}"))
}

/// Format with exactly `digits` digits after the decimal point.
///
/// Ties round away from zero on the exact binary value: `to_fixed(2.5, 0)`
/// is `"3"`, while `to_fixed(1.005, 2)` is `"1.00"` because `1.005` is stored
/// slightly below the tie.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `digits` exceeds 100.
pub fn to_fixed(num: f64, digits: usize) -> Result<String> {
    if digits > MAX_FORMAT_DIGITS {
        return Err(Error::InvalidArgument(format!(
            "digits {digits} is outside 0..={MAX_FORMAT_DIGITS}"
        )));
    }
    if let Some(text) = non_finite_text(num) {
        return Ok(text);
    }

    let (all_digits, point) = exact_digits(num);
    let (rounded, carried) = round_digits_half_up(&all_digits, point + digits);
    let rounded = ascii(&rounded);
    let (int, frac) = rounded.split_at(point + usize::from(carried));
    let sign = if num < 0.0 { "-" } else { "" };

    if frac.is_empty() {
        Ok(format!("{sign}{int}"))
    } else {
        Ok(format!("{sign}{int}.{frac}"))
    }
}

/// Every decimal digit of `|num|` with no rounding, and the number of digits
/// before the decimal point. 1100 fractional digits cover the longest
/// expansion an `f64` has.
fn exact_digits(num: f64) -> (Vec<u8>, usize) {
    let expansion = format!("{:.1100}", num.abs());
    let (int, frac) = expansion.split_once('.').unwrap_or((expansion.as_str(), ""));
    let mut digits = Vec::with_capacity(int.len() + frac.len());
    digits.extend_from_slice(int.as_bytes());
    digits.extend_from_slice(frac.as_bytes());
    (digits, int.len())
}

/// Keep the first `keep` ASCII digits, rounding up when the next digit is 5
/// or more. Returns `true` alongside when the carry added a leading digit.
fn round_digits_half_up(digits: &[u8], keep: usize) -> (Vec<u8>, bool) {
    let mut kept: Vec<u8> = digits.iter().take(keep).copied().collect();
    kept.resize(keep, b'0');
    if !digits.get(keep).is_some_and(|&d| d >= b'5') {
        return (kept, false);
    }
    for digit in kept.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return (kept, false);
        }
    }
    kept.insert(0, b'1');
    (kept, true)
}

fn ascii(digits: &[u8]) -> String {
    digits.iter().copied().map(char::from).collect()
}

fn non_finite_text(num: f64) -> Option<String> {
    if num.is_nan() {
        Some("NaN".to_string())
    } else if num.is_infinite() {
        Some(if num > 0.0 { "Infinity" } else { "-Infinity" }.to_string())
    } else {
        None
    }
}

/// `true` for any non-`NaN` number that is not an integer, infinities included.
pub fn is_float(num: f64) -> bool {
    !num.is_nan() && !is_integer(num)
}

/// `true` for finite numbers without a fractional part.
pub fn is_integer(num: f64) -> bool {
    num.is_finite() && num.fract() == 0.0
}

/// `true` when `num % 2 == 0`.
pub fn is_even(num: f64) -> bool {
    num % 2.0 == 0.0
}

/// `true` when `num % 2 != 0`, so fractional numbers and `NaN` count as odd.
pub fn is_odd(num: f64) -> bool {
    num % 2.0 != 0.0
}

/// Constrain `num` to `[min, max]`.
///
/// Evaluated as `min(max(num, min), max)`; with inverted bounds the upper one
/// wins instead of panicking.
pub fn clamp(num: f64, min: f64, max: f64) -> f64 {
    num.max(min).min(max)
}

/// Round to `decimal_places` digits; halves round towards positive infinity.
///
/// ```rust
/// use tacklebox_core::numbers::round;
///
/// assert_eq!(round(1.005, 1), 1.0);
/// assert_eq!(round(2.5, 0), 3.0);
/// assert_eq!(round(-2.5, 0), -2.0);
/// assert_eq!(round(1234.0, -2), 1200.0);
/// ```
pub fn round(num: f64, decimal_places: i32) -> f64 {
    let factor = 10_f64.powi(decimal_places);
    round_half_up(num * factor) / factor
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Arithmetic mean; `NaN` for an empty slice.
#[allow(clippy::cast_precision_loss)]
pub fn average(numbers: &[f64]) -> f64 {
    if numbers.is_empty() {
        return f64::NAN;
    }
    sum(numbers) / numbers.len() as f64
}

/// Sum of all numbers; `0.0` for an empty slice.
pub fn sum(numbers: &[f64]) -> f64 {
    numbers.iter().sum()
}

/// `n!` as a float; `NaN` for negative `n`, infinity once it overflows (n > 170).
pub fn factorial(n: i64) -> f64 {
    if n < 0 {
        return f64::NAN;
    }
    let mut result = 1.0_f64;
    for i in 2..=n {
        #[allow(clippy::cast_precision_loss)]
        let factor = i as f64;
        result *= factor;
        if result.is_infinite() {
            break;
        }
    }
    result
}

/// First `terms` Fibonacci numbers, starting `0, 1, 1, 2, ...`.
///
/// Returns an empty vector for `terms <= 0` and `[0]` for `terms == 1`.
pub fn fibonacci(terms: i64) -> Vec<f64> {
    let Ok(count) = usize::try_from(terms) else {
        return Vec::new();
    };
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let mut seq = Vec::with_capacity(count);
            seq.extend([0.0, 1.0]);
            for i in 2..count {
                seq.push(seq[i - 1] + seq[i - 2]);
            }
            seq
        },
    }
}

/// Primality by trial division over `6k ± 1` candidates.
///
/// ```rust
/// use tacklebox_core::numbers::is_prime;
///
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// ```
pub const fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5;
    // i <= n / i avoids overflowing i * i near i64::MAX
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Greatest common divisor of every number; `NaN` for an empty slice.
pub fn gcd(numbers: &[f64]) -> f64 {
    numbers
        .iter()
        .copied()
        .reduce(gcd_two_numbers)
        .unwrap_or(f64::NAN)
}

/// Least common multiple of every number; `NaN` for an empty slice.
pub fn lcm(numbers: &[f64]) -> f64 {
    numbers
        .iter()
        .copied()
        .reduce(lcm_two_numbers)
        .unwrap_or(f64::NAN)
}

/// Euclid's algorithm; `gcd(a, 0) == |a|`.
///
/// Non-finite input yields `NaN`.
pub fn gcd_two_numbers(a: f64, b: f64) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return f64::NAN;
    }
    let (mut a, mut b) = (a, b);
    while b != 0.0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a.abs()
}

/// `a * b / gcd(a, b)`. `lcm(0, 0)` is `NaN` because the divisor is zero.
pub fn lcm_two_numbers(a: f64, b: f64) -> f64 {
    (a * b) / gcd_two_numbers(a, b)
}

/// Roman numeral for `num`, built greedily from the subtractive symbol table.
///
/// Zero yields an empty string. Values above 3999 repeat `M`.
pub fn number_to_roman(num: u32) -> String {
    let mut remaining = num;
    let mut roman = String::new();
    for &(value, symbol) in &ROMAN_TABLE {
        while remaining >= value {
            remaining -= value;
            roman.push_str(symbol);
        }
    }
    roman
}

/// Value of a Roman numeral.
///
/// Assumes well-formed input. A symbol followed by a larger one is read as a
/// subtractive pair. Malformed numerals produce an unspecified number rather
/// than an error; unknown characters count as zero.
///
/// ```rust
/// use tacklebox_core::numbers::{number_to_roman, roman_to_number};
///
/// assert_eq!(number_to_roman(1994), "MCMXCIV");
/// assert_eq!(roman_to_number("MCMXCIV"), 1994);
/// ```
pub fn roman_to_number(roman: &str) -> u32 {
    let values: Vec<u32> = roman.chars().map(roman_symbol_value).collect();
    let mut total = 0_u32;
    let mut i = 0;
    while i < values.len() {
        let current = values[i];
        match values.get(i + 1) {
            Some(&next) if next > current => {
                total = total.saturating_add(next - current);
                i += 2;
            },
            _ => {
                total = total.saturating_add(current);
                i += 1;
            },
        }
    }
    total
}

const fn roman_symbol_value(symbol: char) -> u32 {
    match symbol {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => 0,
    }
}
