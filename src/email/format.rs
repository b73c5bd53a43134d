//! Text fragments shared by both email documents.

use crate::models::Player;

/// Render players as `N. name (Age: age)` lines, 1-indexed, in input order.
pub fn players_list(players: &[Player]) -> String {
    players
        .iter()
        .enumerate()
        .map(|(index, player)| format!("{}. {} (Age: {})", index + 1, player.name, player.age))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format an amount with thousands separators and at most three fraction
/// digits, trailing zeros dropped (`1234567.5` -> `1,234,567.5`).
///
/// Rounding is half away from zero on the shortest decimal form of the value,
/// so `0.0625` renders as `0.063`.
pub fn grouped_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let (integer, fraction) = round_half_expand(&amount.abs().to_string(), MAX_FRACTION_DIGITS);
    let integer = integer.as_str();
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (position, digit) in integer.chars().enumerate() {
        if position > 0 && (integer.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let is_zero = integer.chars().all(|c| c == '0') && fraction.is_empty();
    let sign = if amount.is_sign_negative() && !is_zero {
        "-"
    } else {
        ""
    };

    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}

const MAX_FRACTION_DIGITS: usize = 3;

/// Round a plain decimal string to `places` fraction digits, ties away from zero.
/// Returns the integer and fraction digits separately.
fn round_half_expand(decimal: &str, places: usize) -> (String, String) {
    let (integer, fraction) = decimal.split_once('.').unwrap_or((decimal, ""));
    if fraction.len() <= places {
        return (integer.to_string(), fraction.to_string());
    }

    let mut digits: Vec<u8> = integer.bytes().chain(fraction.bytes().take(places)).collect();
    if fraction.as_bytes()[places] >= b'5' {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - places;
    let text: String = digits.iter().map(|&b| char::from(b)).collect();
    (text[..split].to_string(), text[split..].to_string())
}
