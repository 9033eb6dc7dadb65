/// Result of [`parse_long`]: the value and whether the whole text was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed {
    pub value: i64,
    /// `true` when the text was exactly one integer with nothing left over.
    pub clean: bool,
}

/// Convert `text` to an integer in `radix`, the permissive way C's `strtol` does.
///
/// Leading whitespace is skipped, one optional sign is accepted, then the
/// longest run of digits valid in `radix` is consumed. Anything after that is
/// ignored, text without digits yields 0 and overflow saturates.
///
/// # Panics
/// Panics if `radix` is outside `2..=36`.
pub fn parse_long(text: &str, radix: u32) -> Parsed {
    assert!((2..=36).contains(&radix), "radix {radix} out of range");

    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut saturated = false;
    let mut consumed = 0;
    for (i, c) in digits.char_indices() {
        let Some(digit) = c.to_digit(radix) else {
            break;
        };
        consumed = i + c.len_utf8();
        if saturated {
            continue;
        }
        let next = value
            .checked_mul(i64::from(radix))
            .and_then(|v| {
                if negative {
                    v.checked_sub(i64::from(digit))
                } else {
                    v.checked_add(i64::from(digit))
                }
            });
        match next {
            Some(v) => value = v,
            None => {
                value = if negative { i64::MIN } else { i64::MAX };
                saturated = true;
            }
        }
    }

    Parsed {
        value,
        clean: consumed > 0 && consumed == digits.len() && trimmed.len() == text.len(),
    }
}
