//! Numeric input fields
//!
//! Text is parsed on every keystroke. A leading integer is accepted
//! ("12abc" reads as 12); anything else takes the field's fallback. The value
//! is then clamped to the field's range before it reaches the calculators.

/// Longest text a field accepts, sign included
const MAX_FIELD_LEN: usize = 10;

/// Parsing and clamping rules for one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRules {
    /// Value used when the text has no leading integer
    pub fallback: i64,
    pub min: i64,
    pub max: i64,
}

impl FieldRules {
    /// Character level and base power: at least 1
    pub const AT_LEAST_ONE: FieldRules = FieldRules {
        fallback: 0,
        min: 1,
        max: u32::MAX as i64,
    };

    /// Magic level and skills: never negative
    pub const NON_NEGATIVE: FieldRules = FieldRules {
        fallback: 0,
        min: 0,
        max: u32::MAX as i64,
    };

    /// Equipment bonus: signed and unclamped
    pub const SIGNED_PERCENT: FieldRules = FieldRules {
        fallback: 0,
        min: i32::MIN as i64,
        max: i32::MAX as i64,
    };

    /// Target resistance: neutral (100) when unreadable
    pub const RESISTANCE_PERCENT: FieldRules = FieldRules {
        fallback: 100,
        min: 0,
        max: u32::MAX as i64,
    };

    /// Parse text and clamp it into range
    pub fn sanitize(&self, text: &str) -> i64 {
        parse_leading_int(text)
            .unwrap_or(self.fallback)
            .clamp(self.min, self.max)
    }
}

/// Parse an optional sign followed by digits at the start of `text`
///
/// Surrounding whitespace is ignored. Returns None when no digit follows the sign.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() {
        return None;
    }

    // Saturate instead of failing on absurdly long input
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// An editable numeric field
#[derive(Debug, Clone, PartialEq)]
pub struct NumericField {
    pub label: &'static str,
    text: String,
    rules: FieldRules,
}

impl NumericField {
    pub fn new(label: &'static str, initial: i64, rules: FieldRules) -> Self {
        NumericField {
            label,
            text: initial.to_string(),
            rules,
        }
    }

    /// Raw text as typed
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sanitized value
    pub fn value(&self) -> i64 {
        self.rules.sanitize(&self.text)
    }

    pub fn value_u32(&self) -> u32 {
        u32::try_from(self.value().max(0)).unwrap_or(u32::MAX)
    }

    pub fn value_i32(&self) -> i32 {
        let value = self.value();
        i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
    }

    /// Whether the displayed text differs from the value used
    pub fn is_adjusted(&self) -> bool {
        self.text != self.value().to_string()
    }

    /// Append a typed character
    ///
    /// Digits are always accepted. A '-' is accepted only as the first
    /// character of a field that allows negative values.
    pub fn push_char(&mut self, c: char) -> bool {
        if self.text.len() >= MAX_FIELD_LEN {
            return false;
        }
        let at_start = self.text.is_empty() || self.text == "0";
        let accepted = c.is_ascii_digit() || (c == '-' && at_start && self.rules.min < 0);
        if accepted {
            // A lone "0" is replaced rather than extended
            if self.text == "0" {
                self.text.clear();
            }
            self.text.push(c);
        }
        accepted
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Add `delta` to the sanitized value and rewrite the text
    pub fn step(&mut self, delta: i64) {
        let value = self
            .value()
            .saturating_add(delta)
            .clamp(self.rules.min, self.rules.max);
        self.text = value.to_string();
    }
}
