use std::fmt;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use serde::de::{self, Deserializer, Visitor};
use tracing::warn;

/// Intervals outside this window are accepted but logged.
pub const RECOMMENDED_INTERVAL_MS: std::ops::RangeInclusive<u64> = 1_000..=10_000;

/// One displayable image. Owned by the host; the carousel only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Slide {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

impl Slide {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: None,
            caption: None,
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CarouselOptions {
    /// Advance automatically every `interval`.
    pub auto_play: bool,
    /// Accepts integer milliseconds or a humantime string such as `"5s"`.
    #[serde(deserialize_with = "deserialize_interval")]
    pub interval: Duration,
    /// Render the previous/next buttons.
    pub show_controls: bool,
    /// Render the indicator strip.
    pub show_indicators: bool,
}

impl CarouselOptions {
    const fn default_interval() -> Duration {
        Duration::from_millis(5_000)
    }

    pub fn interval_ms(&self) -> u64 {
        u64::try_from(self.interval.as_millis()).unwrap_or(u64::MAX)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.interval.is_zero(),
            "carousel.interval must be greater than zero"
        );
        if !RECOMMENDED_INTERVAL_MS.contains(&self.interval_ms()) {
            warn!(
                interval = %humantime::format_duration(self.interval),
                "carousel.interval is outside the recommended 1s-10s range"
            );
        }
        Ok(())
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            auto_play: true,
            interval: Self::default_interval(),
            show_controls: true,
            show_indicators: true,
        }
    }
}

fn deserialize_interval<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(IntervalVisitor)
}

struct IntervalVisitor;

impl<'de> Visitor<'de> for IntervalVisitor {
    type Value = Duration;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("milliseconds as an integer or a duration string like \"5s\"")
    }

    fn visit_u64<E>(self, ms: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Duration::from_millis(ms))
    }

    fn visit_i64<E>(self, ms: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(ms)
            .map(Duration::from_millis)
            .map_err(|_| de::Error::invalid_value(de::Unexpected::Signed(ms), &self))
    }

    fn visit_str<E>(self, raw: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        humantime::parse_duration(raw.trim()).map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Configuration {
    /// Ordered slide collection; may be empty.
    pub slides: Vec<Slide>,
    /// Initial carousel options, later driven by the settings panel.
    pub carousel: CarouselOptions,
}

impl Configuration {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(serde_yaml::from_str(&s)?)
    }

    /// Validate runtime invariants that cannot be expressed via serde defaults alone.
    pub fn validated(self) -> Result<Self> {
        self.carousel
            .validate()
            .context("invalid carousel configuration")?;
        Ok(self)
    }
}
