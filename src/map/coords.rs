use serde::Serialize;

/// A point on the map. Both components are always finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        (lat.is_finite() && lng.is_finite()).then_some(Self { lat, lng })
    }
}

/// Parses a `"(lat,lon)"` location string.
///
/// Parentheses are stripped anywhere in the string, the rest is split on
/// commas and the first two parts are read with `parse_float_prefix`.
/// Anything that does not yield two finite numbers gives `None`; extra
/// parts after the second are ignored.
pub fn parse_location(raw: &str) -> Option<LatLng> {
    let cleaned: String = raw.chars().filter(|c| !matches!(c, '(' | ')')).collect();
    let mut parts = cleaned.split(',');

    let lat = parse_float_prefix(parts.next()?)?;
    let lng = parse_float_prefix(parts.next()?)?;

    LatLng::new(lat, lng)
}

/// Lenient float parsing: leading whitespace is skipped and the longest
/// decimal prefix is used, so `" 20abc"` reads as `20.0`. Returns `None`
/// when no digits are found.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}
