//! Headless render tree for the carousel.
//!
//! Rendering is a pure function of the slide collection, the options and the
//! current index. Accessibility attributes are plain fields so hosts (and
//! tests) can check them without a DOM.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::config::{CarouselOptions, Slide};
use crate::events::CarouselEvent;
use crate::indicators::IndicatorStrip;

pub const EMPTY_PLACEHOLDER: &str = "No images to display";
pub const CAROUSEL_LABEL: &str = "Image carousel";

/// Where a slide sits relative to the active one; drives the slide transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlidePosition {
    /// Already passed; parked off to the left.
    Before,
    Active,
    /// Not reached yet; parked off to the right.
    After,
}

impl SlidePosition {
    pub fn of(index: usize, current: usize) -> Self {
        match index.cmp(&current) {
            Ordering::Less => SlidePosition::Before,
            Ordering::Equal => SlidePosition::Active,
            Ordering::Greater => SlidePosition::After,
        }
    }

    /// Horizontal offset in slide widths.
    pub fn offset(self) -> i8 {
        match self {
            SlidePosition::Before => -1,
            SlidePosition::Active => 0,
            SlidePosition::After => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SlideView {
    pub index: usize,
    pub url: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub position: SlidePosition,
    pub role: &'static str,
    pub aria_roledescription: &'static str,
    pub aria_label: String,
    pub aria_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ControlButton {
    pub aria_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Controls {
    pub previous: ControlButton,
    pub next: ControlButton,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            previous: ControlButton {
                aria_label: "Previous slide",
            },
            next: ControlButton {
                aria_label: "Next slide",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Deck {
    pub aria_roledescription: &'static str,
    pub aria_label: &'static str,
    pub current_index: usize,
    pub slides: Vec<SlideView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controls: Option<Controls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicators: Option<IndicatorStrip>,
}

impl Deck {
    pub fn active_slide(&self) -> Option<&SlideView> {
        self.slides
            .iter()
            .find(|s| s.position == SlidePosition::Active)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CarouselView {
    Empty { placeholder: &'static str },
    Deck(Deck),
}

impl CarouselView {
    pub fn deck(&self) -> Option<&Deck> {
        match self {
            CarouselView::Deck(deck) => Some(deck),
            CarouselView::Empty { .. } => None,
        }
    }

    /// Clicks a dot of the rendered strip. `None` when the strip is hidden or
    /// has no such dot.
    pub fn click_indicator(&self, index: usize) -> Option<CarouselEvent> {
        self.deck()?.indicators.as_ref()?.click(index)
    }
}

pub fn render(slides: &[Slide], options: &CarouselOptions, current: usize) -> CarouselView {
    if slides.is_empty() {
        return CarouselView::Empty {
            placeholder: EMPTY_PLACEHOLDER,
        };
    }
    let total = slides.len();
    let slides_view = slides
        .iter()
        .enumerate()
        .map(|(index, slide)| {
            let position = SlidePosition::of(index, current);
            SlideView {
                index,
                url: slide.url.clone(),
                alt: slide
                    .alt
                    .clone()
                    .unwrap_or_else(|| format!("Slide {}", index + 1)),
                caption: slide.caption.clone().filter(|c| !c.is_empty()),
                position,
                role: "group",
                aria_roledescription: "slide",
                aria_label: format!("Slide {} of {}", index + 1, total),
                aria_hidden: position != SlidePosition::Active,
            }
        })
        .collect();

    CarouselView::Deck(Deck {
        aria_roledescription: "carousel",
        aria_label: CAROUSEL_LABEL,
        current_index: current,
        slides: slides_view,
        controls: options.show_controls.then(Controls::default),
        indicators: options
            .show_indicators
            .then(|| IndicatorStrip::new(total, current)),
    })
}

impl fmt::Display for CarouselView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let deck = match self {
            CarouselView::Empty { placeholder } => return writeln!(f, "[{placeholder}]"),
            CarouselView::Deck(deck) => deck,
        };
        writeln!(f, "[{}]", deck.aria_label)?;
        if let Some(slide) = deck.active_slide() {
            writeln!(f, "  {}: {} ({})", slide.aria_label, slide.alt, slide.url)?;
            if let Some(caption) = &slide.caption {
                writeln!(f, "  \"{caption}\"")?;
            }
        }
        if let Some(controls) = &deck.controls {
            writeln!(
                f,
                "  < {}    {} >",
                controls.previous.aria_label, controls.next.aria_label
            )?;
        }
        if let Some(strip) = &deck.indicators {
            let dots: Vec<&str> = strip
                .indicators
                .iter()
                .map(|i| if i.active { "●" } else { "○" })
                .collect();
            writeln!(f, "  {}", dots.join(" "))?;
        }
        Ok(())
    }
}
