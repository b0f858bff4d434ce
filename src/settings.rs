use std::fmt;
use std::time::Duration;

use crate::config::CarouselOptions;

pub const INTERVAL_MIN_MS: u64 = 1_000;
pub const INTERVAL_MAX_MS: u64 = 10_000;
pub const INTERVAL_STEP_MS: u64 = 500;

/// Host-side toggles feeding [`CarouselOptions`] to the carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsPanel {
    visible: bool,
    options: CarouselOptions,
}

impl SettingsPanel {
    pub fn new(options: CarouselOptions) -> Self {
        Self {
            visible: false,
            options,
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    pub fn toggle_auto_play(&mut self) {
        self.options.auto_play = !self.options.auto_play;
    }

    pub fn toggle_controls(&mut self) {
        self.options.show_controls = !self.options.show_controls;
    }

    pub fn toggle_indicators(&mut self) {
        self.options.show_indicators = !self.options.show_indicators;
    }

    /// Behaves like the slider: clamped to 1s..=10s and snapped to 500ms steps.
    pub fn set_interval_ms(&mut self, ms: u64) -> u64 {
        let clamped = ms.clamp(INTERVAL_MIN_MS, INTERVAL_MAX_MS);
        let snapped = INTERVAL_MIN_MS
            + ((clamped - INTERVAL_MIN_MS + INTERVAL_STEP_MS / 2) / INTERVAL_STEP_MS)
                * INTERVAL_STEP_MS;
        self.options.interval = Duration::from_millis(snapped);
        snapped
    }

    /// Label of the button that opens or closes the panel.
    pub fn button_label(&self) -> &'static str {
        if self.visible {
            "Hide Settings"
        } else {
            "Show Settings"
        }
    }
}

impl fmt::Display for SettingsPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = |on: bool| if on { "on" } else { "off" };
        writeln!(f, "Carousel Settings")?;
        writeln!(f, "  Auto Play:       {}", mark(self.options.auto_play))?;
        writeln!(f, "  Show Controls:   {}", mark(self.options.show_controls))?;
        writeln!(f, "  Show Indicators: {}", mark(self.options.show_indicators))?;
        writeln!(f, "  Interval (ms):   {}", self.options.interval_ms())
    }
}
