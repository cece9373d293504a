//! Locale-aware decimal formatting for converted amounts and rates.

/// How the integer digits of a number are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Groups of three: 1,234,567
    Thousands,
    /// Last three, then groups of two: 12,34,567
    Indian,
}

/// Separator and grouping rules for one display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub group_separator: char,
    pub decimal_separator: char,
    pub grouping: Grouping,
    /// Digits required in the leading group before any separator is shown.
    /// With 2, `1234` stays ungrouped while `12345` is grouped.
    pub min_grouping_digits: usize,
}

impl NumberLocale {
    pub const EN_US: Self = Self {
        group_separator: ',',
        decimal_separator: '.',
        grouping: Grouping::Thousands,
        min_grouping_digits: 1,
    };

    pub const EN_IN: Self = Self {
        group_separator: ',',
        decimal_separator: '.',
        grouping: Grouping::Indian,
        min_grouping_digits: 1,
    };

    pub const DOT_GROUPED: Self = Self {
        group_separator: '.',
        decimal_separator: ',',
        grouping: Grouping::Thousands,
        min_grouping_digits: 1,
    };

    pub const SPACE_GROUPED: Self = Self {
        group_separator: '\u{202F}',
        decimal_separator: ',',
        grouping: Grouping::Thousands,
        min_grouping_digits: 1,
    };

    pub const fn with_min_grouping_digits(self, min_grouping_digits: usize) -> Self {
        Self {
            min_grouping_digits,
            ..self
        }
    }

    /// Picks rules for a BCP 47 tag such as `en-IN` or `de`. Unknown tags fall
    /// back to `en-US`.
    pub fn from_language_tag(tag: &str) -> Self {
        let tag = tag.trim().replace('_', "-").to_ascii_lowercase();
        let mut parts = tag.split('-');
        let language = parts.next().unwrap_or("");
        let region = parts.last().unwrap_or("");

        match (language, region) {
            ("en", "in") | ("hi", _) => Self::EN_IN,
            ("es", _) | ("pt", "pt") => Self::DOT_GROUPED.with_min_grouping_digits(2),
            ("de" | "it" | "nl" | "pt" | "id" | "tr", _) => Self::DOT_GROUPED,
            ("pl", _) => Self::SPACE_GROUPED.with_min_grouping_digits(2),
            ("fr" | "ru" | "sv" | "nb" | "cs" | "fi" | "uk", _) => Self::SPACE_GROUPED,
            _ => Self::EN_US,
        }
    }

    /// Formats `value` rounded to at most `max_fraction_digits`, with trailing
    /// fractional zeros dropped and integer digits grouped.
    ///
    /// Rounding works on the shortest decimal form of `value` and sends ties
    /// away from zero, so `0.03125` at four digits is `0.0313` and `1.005` at
    /// two is `1.01`. A value that rounds to zero is shown without a sign.
    pub fn format(&self, value: f64, max_fraction_digits: usize) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value < 0.0 { "-∞" } else { "∞" }.to_string();
        }

        let (int_part, frac_part) = round_half_away(value.abs(), max_fraction_digits);
        let frac_part = frac_part.trim_end_matches('0');

        let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();

        let mut out = String::with_capacity(int_part.len() * 2 + frac_part.len() + 2);
        if value < 0.0 && !is_zero {
            out.push('-');
        }
        out.push_str(&self.group(&int_part));
        if !frac_part.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(frac_part);
        }
        out
    }

    fn group(&self, digits: &str) -> String {
        let len = digits.len();
        if len < 3 + self.min_grouping_digits {
            return digits.to_string();
        }
        let mut out = String::with_capacity(len + len / 2);
        for (i, ch) in digits.chars().enumerate() {
            let remaining = len - i;
            if i > 0 && self.is_group_boundary(remaining) {
                out.push(self.group_separator);
            }
            out.push(ch);
        }
        out
    }

    // `remaining` counts the digits from this position to the end.
    fn is_group_boundary(&self, remaining: usize) -> bool {
        match self.grouping {
            Grouping::Thousands => remaining % 3 == 0,
            Grouping::Indian => remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0),
        }
    }
}

/// Rounds a finite, non-negative `value` to `digits` fractional places and
/// returns its integer and fraction digits.
///
/// `f64`'s `Display` is the shortest string that reads back as the same value
/// and never uses an exponent, so rounding is done on those digits.
fn round_half_away(value: f64, digits: usize) -> (String, String) {
    let plain = value.to_string();
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

    let mut kept: Vec<char> = int_part
        .chars()
        .chain(frac_part.chars().take(digits))
        .collect();
    let mut int_len = int_part.len();

    let round_up = frac_part.chars().nth(digits).is_some_and(|c| c >= '5');
    if round_up {
        let mut carry = true;
        for c in kept.iter_mut().rev() {
            if *c == '9' {
                *c = '0';
            } else {
                *c = char::from(*c as u8 + 1);
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, '1');
            int_len += 1;
        }
    }

    let frac: String = kept.split_off(int_len).into_iter().collect();
    (kept.into_iter().collect(), frac)
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::EN_US
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_have_no_fraction() {
        assert_eq!(NumberLocale::EN_US.format(180.0, 4), "180");
        assert_eq!(NumberLocale::EN_US.format(0.0, 4), "0");
    }

    #[test]
    fn rounds_to_max_fraction_digits() {
        assert_eq!(NumberLocale::EN_US.format(1234.56789, 4), "1,234.5679");
        assert_eq!(NumberLocale::EN_US.format(0.1 + 0.2, 4), "0.3");
        assert_eq!(NumberLocale::EN_US.format(90.123456789, 6), "90.123457");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(NumberLocale::EN_US.format(1_234_567.0, 4), "1,234,567");
        assert_eq!(NumberLocale::EN_US.format(-1000.5, 4), "-1,000.5");
        assert_eq!(NumberLocale::EN_US.format(999.0, 4), "999");
    }

    #[test]
    fn groups_lakh_and_crore() {
        assert_eq!(NumberLocale::EN_IN.format(1_234_567.5, 4), "12,34,567.5");
        assert_eq!(NumberLocale::EN_IN.format(123_456_789.0, 4), "12,34,56,789");
        assert_eq!(NumberLocale::EN_IN.format(1000.0, 4), "1,000");
    }

    #[test]
    fn swaps_separators_for_dot_grouped_locales() {
        assert_eq!(NumberLocale::DOT_GROUPED.format(1234.5, 4), "1.234,5");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(NumberLocale::EN_US.format(0.03125, 4), "0.0313");
        assert_eq!(NumberLocale::EN_US.format(2.5, 0), "3");
        assert_eq!(NumberLocale::EN_US.format(-2.5, 0), "-3");
        assert_eq!(NumberLocale::EN_US.format(1.005, 2), "1.01");
        assert_eq!(NumberLocale::EN_US.format(0.00005, 4), "0.0001");
    }

    #[test]
    fn rounding_carries_into_integer_part() {
        assert_eq!(NumberLocale::EN_US.format(9.99996, 4), "10");
        assert_eq!(NumberLocale::EN_US.format(999.99999, 4), "1,000");
        assert_eq!(NumberLocale::EN_US.format(0.99999, 4), "1");
    }

    #[test]
    fn sparse_grouping_leaves_four_digits_alone() {
        let es = NumberLocale::from_language_tag("es-ES");
        assert_eq!(es.format(1234.5, 4), "1234,5");
        assert_eq!(es.format(12345.5, 4), "12.345,5");

        let pl = NumberLocale::from_language_tag("pl");
        assert_eq!(pl.format(1234.0, 4), "1234");
        assert_eq!(pl.format(1_234_567.0, 4), "1\u{202F}234\u{202F}567");

        assert_eq!(NumberLocale::from_language_tag("pt-PT").format(1234.0, 4), "1234");
        assert_eq!(NumberLocale::from_language_tag("pt-BR").format(1234.0, 4), "1.234");
    }

    #[test]
    fn tiny_negative_rounds_to_unsigned_zero() {
        assert_eq!(NumberLocale::EN_US.format(-0.00001, 4), "0");
        assert_eq!(NumberLocale::EN_US.format(-0.0, 4), "0");
    }

    #[test]
    fn picks_rules_from_language_tag() {
        assert_eq!(NumberLocale::from_language_tag("en-IN"), NumberLocale::EN_IN);
        assert_eq!(NumberLocale::from_language_tag("hi"), NumberLocale::EN_IN);
        assert_eq!(NumberLocale::from_language_tag("de-DE"), NumberLocale::DOT_GROUPED);
        assert_eq!(NumberLocale::from_language_tag("fr_FR"), NumberLocale::SPACE_GROUPED);
        assert_eq!(NumberLocale::from_language_tag("en-GB"), NumberLocale::EN_US);
        assert_eq!(NumberLocale::from_language_tag(""), NumberLocale::EN_US);
    }
}
