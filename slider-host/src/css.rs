//! CSS values written to the track element.

use slider_core::Transition;

/// `transform` value translating the track left by `offset_px`.
pub fn translate_x(offset_px: f32) -> String {
    format!("translateX(-{}px)", offset_px)
}

/// Read back the offset from a value produced by [`translate_x`].
pub fn parse_translate_x(value: &str) -> Option<f32> {
    value
        .strip_prefix("translateX(-")?
        .strip_suffix("px)")?
        .parse()
        .ok()
}

/// `transition` value for an offset write.
pub fn transition(transition: Transition) -> String {
    match transition {
        Transition::Animated(duration) => {
            format!("transform {}s ease", duration.as_secs_f32())
        }
        Transition::Instant => "none".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn formats_translation() {
        assert_eq!(translate_x(0.0), "translateX(-0px)");
        assert_eq!(translate_x(240.0), "translateX(-240px)");
        assert_eq!(translate_x(120.5), "translateX(-120.5px)");
    }

    #[test]
    fn parses_own_translation() {
        assert_eq!(parse_translate_x("translateX(-240px)"), Some(240.0));
        assert_eq!(parse_translate_x("none"), None);
    }

    #[test]
    fn formats_transition() {
        assert_eq!(
            transition(Transition::Animated(Duration::from_millis(350))),
            "transform 0.35s ease"
        );
        assert_eq!(transition(Transition::Instant), "none");
    }
}
