// Locale-style number formatting shared across the engine and the chart
// layer. Everything here is pure: no state, no side effects, no panics.

pub mod locale_format {
    /// Outcome of leniently parsing a display value.
    ///
    /// Display contexts prefer a defaulted value over a visible error, so
    /// unparsable input degrades to zero -- but through an explicit variant,
    /// not an implicit coercion, so the degradation is visible at call sites.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum ParsedNumber {
        Value(f64),
        FallbackZero,
    }

    impl ParsedNumber {
        pub fn as_f64(&self) -> f64 {
            match self {
                ParsedNumber::Value(v) => *v,
                ParsedNumber::FallbackZero => 0.0,
            }
        }

        pub fn is_fallback(&self) -> bool {
            matches!(self, ParsedNumber::FallbackZero)
        }
    }

    /// Parse a value that may already be locale-formatted, e.g. "1,234" or
    /// "1 234". Literal commas and spaces are stripped before parsing; any
    /// input that does not yield a finite number becomes `FallbackZero`.
    pub fn parse_lenient(input: &str) -> ParsedNumber {
        let cleaned: String = input
            .chars()
            .filter(|c| *c != ',' && *c != ' ')
            .collect();
        match cleaned.parse::<f64>() {
            Ok(v) if v.is_finite() => ParsedNumber::Value(v),
            _ => ParsedNumber::FallbackZero,
        }
    }

    /// Round `value` to `decimals` fractional digits, half away from zero.
    ///
    /// Kept separate from `number_format`: chart data points are rounded
    /// before the chart ever sees them, independently of how (or whether)
    /// they are later rendered as strings.
    pub fn round_to(value: f64, decimals: u32) -> f64 {
        if decimals == 0 {
            return value.round();
        }
        let k = 10f64.powi(decimals as i32);
        (value * k).round() / k
    }

    /// Format `value` with `decimals` fractional digits, `dec_point` as the
    /// decimal marker and `thousands_sep` between groups of three integer
    /// digits (empty string suppresses grouping).
    ///
    /// Example: `number_format(1234.56, 2, ",", " ")` returns `"1 234,56"`.
    pub fn number_format(value: f64, decimals: usize, dec_point: &str, thousands_sep: &str) -> String {
        let n = if value.is_finite() { value } else { 0.0 };

        // Scale, round, divide, then let the shortest-representation float
        // display produce the digits. A naive fixed-decimal conversion
        // mis-rounds values like 0.55 at zero decimals on some platforms.
        let rounded = if decimals > 0 {
            let k = 10f64.powi(decimals as i32);
            (n * k).round() / k
        } else {
            n.round()
        };
        // -0 rounds to plain 0 so it prints without a sign.
        let rounded = if rounded == 0.0 { 0.0 } else { rounded };

        let repr = rounded.to_string();
        let (int_part, frac_part) = match repr.split_once('.') {
            Some((i, f)) => (i.to_string(), f.to_string()),
            None => (repr, String::new()),
        };

        let grouped = group_thousands(&int_part, thousands_sep);

        if decimals == 0 {
            return grouped;
        }

        let mut frac = frac_part;
        while frac.len() < decimals {
            frac.push('0');
        }
        format!("{}{}{}", grouped, dec_point, frac)
    }

    /// `number_format` with the conventional defaults: "." decimal marker,
    /// "," grouping separator.
    pub fn number_format_default(value: f64, decimals: usize) -> String {
        number_format(value, decimals, ".", ",")
    }

    // Inserts `sep` every three digits from the right. The minus sign is not
    // a grouping digit; no separator lands at either end of the digit run.
    fn group_thousands(int_part: &str, sep: &str) -> String {
        let (sign, digits) = match int_part.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", int_part),
        };
        if sep.is_empty() || digits.len() <= 3 {
            return int_part.to_string();
        }

        let mut grouped = String::with_capacity(int_part.len() + sep.len() * (digits.len() / 3));
        grouped.push_str(sign);
        let lead = digits.len() % 3;
        if lead > 0 {
            grouped.push_str(&digits[..lead]);
        }
        for (i, chunk) in digits.as_bytes()[lead..].chunks(3).enumerate() {
            if lead > 0 || i > 0 {
                grouped.push_str(sep);
            }
            // Chunks come from an ASCII digit run, so this cannot fail.
            grouped.push_str(std::str::from_utf8(chunk).unwrap_or(""));
        }
        grouped
    }

}
