//! Reply pacing: how long to "type" before a reply appears.

use std::time::Duration;

/// `delay = min(max_ms, base_ms + per_char_ms * length(reply))`.
///
/// Length is counted in UTF-16 code units, the way a browser text field
/// measures it, so an emoji counts as two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub base_ms: u64,
    pub per_char_ms: u64,
    pub max_ms: u64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            base_ms: 350,
            per_char_ms: 12,
            max_ms: 1800,
        }
    }
}

impl Pacing {
    /// No artificial delay at all.
    pub const INSTANT: Pacing = Pacing {
        base_ms: 0,
        per_char_ms: 0,
        max_ms: 0,
    };

    pub fn delay_ms(&self, reply: &str) -> u64 {
        let len = reply.encode_utf16().count() as u64;
        self.per_char_ms
            .saturating_mul(len)
            .saturating_add(self.base_ms)
            .min(self.max_ms)
    }

    pub fn delay_for(&self, reply: &str) -> Duration {
        Duration::from_millis(self.delay_ms(reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reply_waits_base_delay() {
        assert_eq!(Pacing::default().delay_ms(""), 350);
    }

    #[test]
    fn short_reply_scales_with_length() {
        // 350 + 12 * 8
        assert_eq!(Pacing::default().delay_ms("hi there"), 446);
    }

    #[test]
    fn long_reply_is_capped() {
        let reply = "a".repeat(500);
        assert_eq!(Pacing::default().delay_ms(&reply), 1800);
    }

    #[test]
    fn cap_boundary() {
        // 350 + 12 * 120 = 1790, 350 + 12 * 121 = 1802
        assert_eq!(Pacing::default().delay_ms(&"x".repeat(120)), 1790);
        assert_eq!(Pacing::default().delay_ms(&"x".repeat(121)), 1800);
    }

    #[test]
    fn length_counts_utf16_units() {
        // U+1F605 is a surrogate pair
        assert_eq!(Pacing::default().delay_ms("😅"), 350 + 24);
        assert_eq!(Pacing::default().delay_ms("é"), 350 + 12);
    }

    #[test]
    fn instant_pacing_never_waits() {
        assert_eq!(Pacing::INSTANT.delay_for("anything"), Duration::ZERO);
    }

    #[test]
    fn huge_multiplier_saturates() {
        let pacing = Pacing {
            base_ms: u64::MAX,
            per_char_ms: u64::MAX,
            max_ms: 5,
        };
        assert_eq!(pacing.delay_ms("abc"), 5);
    }
}
