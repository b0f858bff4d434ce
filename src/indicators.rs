use serde::Serialize;

use crate::events::CarouselEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
    pub aria_label: String,
    pub aria_current: &'static str,
}

/// One jump control per slide, exactly one of them active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorStrip {
    pub indicators: Vec<Indicator>,
}

impl IndicatorStrip {
    pub fn new(count: usize, active_index: usize) -> Self {
        let indicators = (0..count)
            .map(|index| {
                let active = index == active_index;
                Indicator {
                    index,
                    active,
                    aria_label: format!("Go to slide {}", index + 1),
                    aria_current: if active { "true" } else { "false" },
                }
            })
            .collect();
        Self { indicators }
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.indicators.iter().position(|i| i.active)
    }

    /// Clicking always navigates, even onto the slide already shown.
    pub fn click(&self, index: usize) -> Option<CarouselEvent> {
        (index < self.len()).then_some(CarouselEvent::Indicator(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_control_per_slide_with_single_active() {
        let strip = IndicatorStrip::new(5, 2);
        assert_eq!(strip.len(), 5);
        assert_eq!(strip.indicators.iter().filter(|i| i.active).count(), 1);
        assert_eq!(strip.active_index(), Some(2));
        assert_eq!(strip.indicators[2].aria_current, "true");
        assert_eq!(strip.indicators[0].aria_current, "false");
        assert_eq!(strip.indicators[4].aria_label, "Go to slide 5");
    }

    #[test]
    fn clicking_active_indicator_still_navigates() {
        let strip = IndicatorStrip::new(3, 1);
        assert_eq!(strip.click(1), Some(CarouselEvent::Indicator(1)));
        assert_eq!(strip.click(0), Some(CarouselEvent::Indicator(0)));
    }

    #[test]
    fn clicks_past_the_strip_are_ignored() {
        let strip = IndicatorStrip::new(3, 0);
        assert_eq!(strip.click(3), None);
    }
}
