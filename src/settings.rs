//! Run settings.
//!
//! Settings arrive as a flat mapping of option name to string value, either
//! from the host directly ([`Settings::from_parameters`]) or from a config file
//! plus `EXEC_TIMING_*` environment variables ([`Settings::load`]).
//!
//! ```toml
//! topN = 5
//! showIndividualTimings = true
//! showFQCN = false
//! warningThreshold = 0.5
//! dangerThreshold = "2s"
//! colors = "auto"
//! ```
//!
//! Parsing never fails: unknown keys are ignored and values that cannot be
//! understood leave the default in place.

use std::path::Path;
use std::time::Duration;

use config::{Config, Environment, File, Source, Value};
use tracing::{debug, warn};

use crate::data::duration::parse_duration;
use crate::data::{DisplayNamePolicy, Thresholds};
use crate::error::TimingError;
use crate::report::{ColorMode, ReportConfig};

/// Prefix for environment overrides, e.g. `EXEC_TIMING_TOP_N=3`.
pub const ENV_PREFIX: &str = "EXEC_TIMING";

/// Immutable settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub top_n: i64,
    pub show_individual_timings: bool,
    pub show_fqcn: bool,
    pub warning_threshold: Duration,
    pub danger_threshold: Duration,
    pub colors: ColorMode,
}

impl Default for Settings {
    fn default() -> Self {
        let thresholds = Thresholds::default();
        Self {
            top_n: 10,
            show_individual_timings: false,
            show_fqcn: true,
            warning_threshold: thresholds.warning,
            danger_threshold: thresholds.danger,
            colors: ColorMode::Auto,
        }
    }
}

/// Options recognised in the parameter mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionKey {
    TopN,
    ShowIndividualTimings,
    ShowFqcn,
    WarningThreshold,
    DangerThreshold,
    Colors,
}

impl OptionKey {
    /// Match a key ignoring case, `_` and `-`.
    fn lookup(key: &str) -> Option<Self> {
        let normalized: String = key
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "topn" => Some(Self::TopN),
            "showindividualtimings" => Some(Self::ShowIndividualTimings),
            "showfqcn" => Some(Self::ShowFqcn),
            "warningthreshold" => Some(Self::WarningThreshold),
            "dangerthreshold" => Some(Self::DangerThreshold),
            "colors" | "color" => Some(Self::Colors),
            _ => None,
        }
    }
}

impl Settings {
    /// Build settings from `(name, value)` pairs on top of the defaults.
    pub fn from_parameters<I, K, V>(parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut settings = Self::default();
        for (key, value) in parameters {
            settings.apply(key.as_ref(), value.as_ref());
        }
        settings
    }

    /// Apply one option. Unknown keys and unparseable values are ignored.
    pub fn apply(&mut self, key: &str, value: &str) {
        let Some(option) = OptionKey::lookup(key) else {
            debug!(key, "ignoring unknown option");
            return;
        };

        match option {
            OptionKey::TopN => match value.trim().parse::<i64>() {
                Ok(n) => self.top_n = n,
                Err(_) => warn!(key, value, "invalid integer, keeping {}", self.top_n),
            },
            OptionKey::ShowIndividualTimings => self.show_individual_timings = parse_bool(value),
            OptionKey::ShowFqcn => self.show_fqcn = parse_bool(value),
            OptionKey::WarningThreshold => match parse_duration(value) {
                Ok(d) => self.warning_threshold = d,
                Err(e) => warn!(key, error = %e, "keeping default warning threshold"),
            },
            OptionKey::DangerThreshold => match parse_duration(value) {
                Ok(d) => self.danger_threshold = d,
                Err(e) => warn!(key, error = %e, "keeping default danger threshold"),
            },
            OptionKey::Colors => match ColorMode::parse(value) {
                Some(mode) => self.colors = mode,
                None => warn!(key, value, "unknown color mode, keeping {:?}", self.colors),
            },
        }
    }

    /// Load settings from an optional config file and the environment.
    ///
    /// A missing file is an error only when a path was given explicitly.
    pub fn load(path: Option<&Path>) -> Result<Self, TimingError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let parameters: Vec<(String, String)> = config
            .collect()?
            .into_iter()
            .filter_map(|(key, value)| scalar_to_string(value).map(|v| (key, v)))
            .collect();

        Ok(Self::from_parameters(parameters))
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.warning_threshold, self.danger_threshold)
    }

    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            limit: self.top_n,
            thresholds: self.thresholds(),
        }
    }

    pub fn display_name_policy(&self) -> DisplayNamePolicy {
        DisplayNamePolicy::from_show_fqcn(self.show_fqcn)
    }
}

/// Truthy values are `1`, `true`, `on` and `yes`; anything else is false.
pub fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "on" | "yes"
    )
}

fn scalar_to_string(value: Value) -> Option<String> {
    // Tables and arrays carry no option values.
    value.into_string().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Severity;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.top_n, 10);
        assert!(!settings.show_individual_timings);
        assert!(settings.show_fqcn);
        assert_eq!(settings.warning_threshold, Duration::from_secs(1));
        assert_eq!(settings.danger_threshold, Duration::from_secs(5));
        assert_eq!(settings.colors, ColorMode::Auto);
    }

    #[test]
    fn test_from_parameters() {
        let settings = Settings::from_parameters([
            ("topN", "3"),
            ("showIndividualTimings", "true"),
            ("showFQCN", "false"),
            ("warningThreshold", "0.5"),
            ("dangerThreshold", "2"),
        ]);
        assert_eq!(settings.top_n, 3);
        assert!(settings.show_individual_timings);
        assert!(!settings.show_fqcn);
        assert_eq!(settings.warning_threshold, Duration::from_millis(500));
        assert_eq!(settings.danger_threshold, Duration::from_secs(2));
        assert_eq!(settings.display_name_policy(), DisplayNamePolicy::Short);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let settings = Settings::from_parameters([("verbosity", "loud")]);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_invalid_numbers_keep_defaults() {
        let settings = Settings::from_parameters([
            ("topN", "lots"),
            ("warningThreshold", "abc"),
            ("dangerThreshold", ""),
        ]);
        assert_eq!(settings.top_n, 10);
        assert_eq!(settings.warning_threshold, Duration::from_secs(1));
        assert_eq!(settings.danger_threshold, Duration::from_secs(5));
    }

    #[test]
    fn test_zero_and_negative_top_n_are_kept() {
        assert_eq!(Settings::from_parameters([("topN", "0")]).top_n, 0);
        assert_eq!(Settings::from_parameters([("topN", "-2")]).top_n, -2);
    }

    #[test]
    fn test_key_matching_is_loose() {
        let settings = Settings::from_parameters([("top_n", "4"), ("SHOW-FQCN", "no")]);
        assert_eq!(settings.top_n, 4);
        assert!(!settings.show_fqcn);
    }

    #[test]
    fn test_huge_thresholds_never_flag() {
        for value in ["inf", "1e20"] {
            let settings =
                Settings::from_parameters([("warningThreshold", value), ("dangerThreshold", value)]);
            assert_eq!(settings.danger_threshold, Duration::MAX, "{value}");
            let thresholds = settings.thresholds();
            assert_eq!(thresholds.classify(Duration::from_millis(100)), Severity::Normal);
            assert_eq!(thresholds.classify(Duration::from_secs(3600)), Severity::Normal);
        }
    }

    #[test]
    fn test_threshold_duration_syntax() {
        let settings = Settings::from_parameters([("warningThreshold", "250ms")]);
        assert_eq!(settings.warning_threshold, Duration::from_millis(250));
    }

    #[test]
    fn test_parse_bool() {
        for truthy in ["1", "true", "TRUE", "on", "yes", " yes "] {
            assert!(parse_bool(truthy), "{truthy}");
        }
        for falsy in ["0", "false", "off", "no", "", "maybe"] {
            assert!(!parse_bool(falsy), "{falsy}");
        }
    }

    #[test]
    fn test_report_config() {
        let settings = Settings::from_parameters([("topN", "7"), ("dangerThreshold", "3")]);
        let report = settings.report_config();
        assert_eq!(report.limit, 7);
        assert_eq!(report.thresholds.danger, Duration::from_secs(3));
        assert_eq!(report.thresholds.warning, Duration::from_secs(1));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "topN = 5\nshowFQCN = false\ndangerThreshold = \"2s\"\ncolors = \"never\""
        )
        .unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.top_n, 5);
        assert!(!settings.show_fqcn);
        assert_eq!(settings.danger_threshold, Duration::from_secs(2));
        assert_eq!(settings.colors, ColorMode::Never);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = Settings::load(Some(Path::new("/nonexistent/exec-timing.toml")));
        assert!(matches!(result, Err(TimingError::Config(_))));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.top_n, Settings::default().top_n);
    }
}
