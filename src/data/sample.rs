//! Timing samples and the display-name policy applied when they are captured.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Separator between a test's container (class, module) and its member.
pub const MEMBER_SEPARATOR: &str = "::";

/// A single timed unit: its display name and how long it took.
///
/// Samples are created once, when the unit finishes, and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub name: String,
    #[serde(with = "secs_f64")]
    pub duration: Duration,
}

impl Sample {
    pub fn new(name: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }

    /// Build a sample from floating-point seconds.
    ///
    /// See [`clamp_secs`] for how out-of-range values are handled.
    pub fn from_secs_f64(name: impl Into<String>, secs: f64) -> Self {
        Self::new(name, clamp_secs(secs))
    }
}

/// Convert float seconds to a `Duration`.
///
/// Negative values and NaN become zero; values too large for a `Duration`,
/// infinity included, saturate at `Duration::MAX`.
pub fn clamp_secs(secs: f64) -> Duration {
    if secs.is_nan() || secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}

/// How identifiers are turned into display names at record time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayNamePolicy {
    /// Keep the fully qualified identifier verbatim.
    #[default]
    FullyQualified,
    /// Keep only the last dotted segment of the container, plus the member.
    Short,
}

impl DisplayNamePolicy {
    /// Policy matching the `showFQCN` option.
    pub fn from_show_fqcn(show_fqcn: bool) -> Self {
        if show_fqcn {
            Self::FullyQualified
        } else {
            Self::Short
        }
    }

    /// Apply the policy to a raw identifier.
    pub fn apply(self, identifier: &str) -> String {
        match self {
            Self::FullyQualified => identifier.to_string(),
            Self::Short => shorten_name(identifier),
        }
    }
}

/// Reduce `Namespace.Class::member` to `Class::member`.
///
/// Only the first `::` splits container from member; identifiers without it
/// are returned unchanged.
pub fn shorten_name(identifier: &str) -> String {
    let Some((container, member)) = identifier.split_once(MEMBER_SEPARATOR) else {
        return identifier.to_string();
    };

    let short_container = container.rsplit('.').next().unwrap_or(container);
    format!("{}{}{}", short_container, MEMBER_SEPARATOR, member)
}

/// Serde helper storing a `Duration` as float seconds.
mod secs_f64 {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(d.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Ok(super::clamp_secs(secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_fully_qualified_name() {
        assert_eq!(shorten_name("App.Tests.FooTest::testBar"), "FooTest::testBar");
    }

    #[test]
    fn test_shorten_without_separator_passes_through() {
        assert_eq!(shorten_name("App.Tests.FooTest"), "App.Tests.FooTest");
        assert_eq!(shorten_name("plain_test"), "plain_test");
    }

    #[test]
    fn test_shorten_splits_on_first_separator_only() {
        assert_eq!(
            shorten_name("a.b.Suite::case::with data set"),
            "Suite::case::with data set"
        );
    }

    #[test]
    fn test_shorten_container_without_dots() {
        assert_eq!(shorten_name("FooTest::testBar"), "FooTest::testBar");
    }

    #[test]
    fn test_policy_from_show_fqcn() {
        assert_eq!(
            DisplayNamePolicy::from_show_fqcn(true),
            DisplayNamePolicy::FullyQualified
        );
        assert_eq!(
            DisplayNamePolicy::from_show_fqcn(false).apply("A.B::c"),
            "B::c"
        );
        assert_eq!(DisplayNamePolicy::FullyQualified.apply("A.B::c"), "A.B::c");
    }

    #[test]
    fn test_negative_seconds_clamp_to_zero() {
        assert_eq!(Sample::from_secs_f64("t", -0.5).duration, Duration::ZERO);
        assert_eq!(Sample::from_secs_f64("t", f64::NAN).duration, Duration::ZERO);
        assert_eq!(clamp_secs(f64::NEG_INFINITY), Duration::ZERO);
    }

    #[test]
    fn test_oversized_seconds_saturate() {
        assert_eq!(clamp_secs(f64::INFINITY), Duration::MAX);
        assert_eq!(clamp_secs(1e20), Duration::MAX);
        assert_eq!(clamp_secs(1.5), Duration::from_millis(1500));
    }

    #[test]
    fn test_deserialize_sample() {
        let sample: Sample = serde_json::from_str(r#"{"name":"t","duration":1.5}"#).unwrap();
        assert_eq!(sample.name, "t");
        assert_eq!(sample.duration, Duration::from_millis(1500));
    }
}
