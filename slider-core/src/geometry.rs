//! Geometry math for the slider: step size, visible window and offset bounds.
//!
//! Every input here comes from layout measurement and is treated as
//! best-effort. Anything that is not a finite, non-negative number reads as 0.

use crate::constants::layout::{MIN_STEP_DIVISOR, MIN_VISIBLE_CARDS};

/// Coerce a measured pixel value to a finite, non-negative number.
#[inline]
pub fn sanitize_px(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parse a computed CSS gap value the way `parseFloat` reads it.
///
/// Only the leading numeric prefix is used, so `"16px"` is 16 and `"1.5rem"`
/// is 1.5. Keywords such as `"normal"`, empty strings and anything else that
/// does not start with a number read as 0.
pub fn parse_gap(raw: &str) -> f32 {
    let trimmed = raw.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    // Exponent only counts when followed by at least one digit.
    if end > digits_start && end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    trimmed[..end]
        .parse::<f32>()
        .map(sanitize_px)
        .unwrap_or(0.0)
}

/// Resolve the inter-card gap from a style: `column-gap` first, then the
/// column half of the `gap` shorthand.
///
/// An empty `column-gap` falls through to `gap`, but a present one is used
/// even if it does not parse.
pub fn resolve_gap(column_gap: Option<&str>, gap: Option<&str>) -> f32 {
    let raw = column_gap
        .filter(|value| !value.trim().is_empty())
        .or_else(|| gap.and_then(shorthand_column_gap))
        .unwrap_or("0");
    parse_gap(raw)
}

/// `gap: <row> <column>`; a single value sets both.
fn shorthand_column_gap(gap: &str) -> Option<&str> {
    let mut values = gap.split_whitespace();
    let row = values.next()?;
    Some(values.next().unwrap_or(row))
}

/// Derived layout for one recompute pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    /// Pixel distance for one index unit (card width + gap).
    pub card_step: f32,
    /// Whole cards that fit in the viewport, at least one.
    pub visible_count: usize,
    /// Largest legal `current_index`.
    pub max_index: usize,
}

impl Geometry {
    /// Geometry of a slider with no cards.
    pub const EMPTY: Self = Self {
        card_step: 0.0,
        visible_count: MIN_VISIBLE_CARDS,
        max_index: 0,
    };

    /// Compute step size and bounds from measured values.
    ///
    /// N fully visible cards span `N * step - gap`, so the viewport is widened
    /// by one gap before dividing.
    pub fn measure(
        card_count: usize,
        first_card_width: f32,
        gap: f32,
        viewport_width: f32,
    ) -> Self {
        if card_count == 0 {
            return Self::EMPTY;
        }

        let gap = sanitize_px(gap);
        let card_step = sanitize_px(first_card_width) + gap;
        let viewport_width = sanitize_px(viewport_width);

        let raw = ((viewport_width + gap) / card_step.max(MIN_STEP_DIVISOR)).floor();
        let visible_count = if raw.is_finite() && raw > 0.0 {
            (raw as usize).max(MIN_VISIBLE_CARDS)
        } else {
            MIN_VISIBLE_CARDS
        };

        Self {
            card_step,
            visible_count,
            max_index: card_count.saturating_sub(visible_count),
        }
    }

    /// Largest track offset reachable at this geometry.
    #[inline]
    pub fn max_offset(&self) -> f32 {
        self.max_index as f32 * self.card_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_rejects_non_finite_and_negative() {
        assert_eq!(sanitize_px(f32::NAN), 0.0);
        assert_eq!(sanitize_px(f32::INFINITY), 0.0);
        assert_eq!(sanitize_px(-3.0), 0.0);
        assert_eq!(sanitize_px(12.5), 12.5);
    }

    #[test]
    fn parse_gap_reads_leading_number() {
        assert_eq!(parse_gap("16px"), 16.0);
        assert_eq!(parse_gap("  1.5rem"), 1.5);
        assert_eq!(parse_gap(".5px"), 0.5);
        assert_eq!(parse_gap("2e1px"), 20.0);
        assert_eq!(parse_gap("3em"), 3.0);
    }

    #[test]
    fn parse_gap_falls_back_to_zero() {
        assert_eq!(parse_gap("normal"), 0.0);
        assert_eq!(parse_gap(""), 0.0);
        assert_eq!(parse_gap("px"), 0.0);
        assert_eq!(parse_gap("-8px"), 0.0);
    }

    #[test]
    fn resolve_gap_prefers_column_gap() {
        assert_eq!(resolve_gap(Some("24px"), Some("8px")), 24.0);
        assert_eq!(resolve_gap(Some(""), Some("8px")), 8.0);
        assert_eq!(resolve_gap(None, None), 0.0);
        assert_eq!(resolve_gap(Some("normal"), Some("8px")), 0.0);
    }

    #[test]
    fn gap_shorthand_uses_column_value() {
        assert_eq!(resolve_gap(None, Some("10px 20px")), 20.0);
        assert_eq!(resolve_gap(Some(""), Some("  8px   12px ")), 12.0);
        assert_eq!(resolve_gap(None, Some("16px")), 16.0);
        assert_eq!(resolve_gap(None, Some("   ")), 0.0);
        assert_eq!(resolve_gap(Some("4px"), Some("10px 20px")), 4.0);
    }

    #[test]
    fn measure_counts_whole_cards_with_gap_correction() {
        // 3 cards of 100 with 20 gap span 340px exactly
        let geometry = Geometry::measure(6, 100.0, 20.0, 340.0);
        assert_eq!(geometry.card_step, 120.0);
        assert_eq!(geometry.visible_count, 3);
        assert_eq!(geometry.max_index, 3);
    }

    #[test]
    fn measure_zero_viewport_keeps_one_visible() {
        let geometry = Geometry::measure(4, 100.0, 10.0, 0.0);
        assert_eq!(geometry.visible_count, 1);
        assert_eq!(geometry.max_index, 3);
    }

    #[test]
    fn measure_zero_width_cards_does_not_divide_by_zero() {
        let geometry = Geometry::measure(5, 0.0, 0.0, 300.0);
        assert_eq!(geometry.card_step, 0.0);
        assert_eq!(geometry.visible_count, 300);
        assert_eq!(geometry.max_index, 0);
        assert_eq!(geometry.max_offset(), 0.0);
    }

    #[test]
    fn measure_without_cards_is_empty() {
        assert_eq!(Geometry::measure(0, 100.0, 10.0, 500.0), Geometry::EMPTY);
    }

    #[test]
    fn max_offset_spans_max_index_steps() {
        let geometry = Geometry::measure(6, 100.0, 0.0, 200.0);
        assert_eq!(geometry.visible_count, 2);
        assert_eq!(geometry.max_offset(), 400.0);
    }
}
