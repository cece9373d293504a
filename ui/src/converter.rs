//! Pure conversion rules behind the converter view.

use api::conversion_pair::ConversionPair;
use api::number_format::NumberLocale;
use api::rate::Rate;
use api::UserError;

/// Most fractional digits shown for a converted amount.
pub const RESULT_FRACTION_DIGITS: usize = 4;
/// Most fractional digits shown for the quoted rate.
pub const RATE_FRACTION_DIGITS: usize = 6;

/// Parses the leading number of `input`, ignoring anything after it.
///
/// Leading whitespace is skipped, then the longest prefix of the form
/// `[+-] digits [. digits] [(e|E) [+-] digits]` is read, so `"12abc"` is 12 and
/// `".5"` is 0.5. Returns `None` when no digits lead the input.
pub fn parse_amount(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        let frac_digits = frac_end - (end + 1);
        if mantissa_digits + frac_digits > 0 {
            mantissa_digits += frac_digits;
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_start = end + 1 + sign;
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// The amount used for live conversion: an empty field counts as zero.
pub fn live_amount(input: &str) -> Option<f64> {
    if input.is_empty() {
        Some(0.0)
    } else {
        parse_amount(input)
    }
}

/// Computes the text of the "Converted to" field.
///
/// Empty when no rate is known or the amount does not parse.
pub fn convert_amount(input: &str, rate: Option<Rate>, locale: &NumberLocale) -> String {
    let Some(rate) = rate else {
        return String::new();
    };
    match live_amount(input) {
        Some(amount) => locale.format(rate.apply(amount), RESULT_FRACTION_DIGITS),
        None => String::new(),
    }
}

/// Validation behind the explicit Convert button. Unlike live conversion, an
/// empty field is rejected.
pub fn validate_amount(input: &str) -> Result<f64, UserError> {
    parse_amount(input).ok_or(UserError::InvalidAmount)
}

/// "€1 EUR = 90.12 INR"
pub fn rate_statement(pair: ConversionPair, rate: Rate, locale: &NumberLocale) -> String {
    format!(
        "{}1 {} = {} {}",
        pair.source.symbol(),
        pair.source,
        locale.format(rate.value(), RATE_FRACTION_DIGITS),
        pair.target
    )
}
