use tracing::{debug, trace};

use crate::config::{CarouselOptions, Slide};
use crate::cycler::Cycler;
use crate::events::{ControlClick, Navigation, TouchEvent};
use crate::gesture::{GestureDetector, Swipe};
use crate::view::{self, CarouselView};

/// Snapshot of the component's interaction state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselState {
    pub current_index: usize,
    pub is_playing: bool,
    pub is_touching: bool,
    pub touch_start_x: f32,
}

/// What a mounted carousel publishes after every change.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselSnapshot {
    pub state: CarouselState,
    pub view: CarouselView,
}

/// Synchronous core of the carousel: slide selection, swipe handling and
/// rendering. Timers and key subscriptions live with the mounted task.
#[derive(Debug, Clone)]
pub struct Carousel {
    slides: Vec<Slide>,
    options: CarouselOptions,
    cycler: Option<Cycler>,
    current: usize,
    gesture: GestureDetector,
}

impl Carousel {
    pub fn new(slides: Vec<Slide>, options: CarouselOptions) -> Self {
        let cycler = Cycler::new(slides.len());
        Self {
            slides,
            options,
            cycler,
            current: 0,
            gesture: GestureDetector::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cycler.is_none()
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn set_options(&mut self, options: CarouselOptions) {
        self.options = options;
    }

    pub fn state(&self, is_playing: bool) -> CarouselState {
        CarouselState {
            current_index: self.current,
            is_playing,
            is_touching: self.gesture.is_tracking(),
            touch_start_x: self.gesture.touch_start_x(),
        }
    }

    pub fn snapshot(&self, is_playing: bool) -> CarouselSnapshot {
        CarouselSnapshot {
            state: self.state(is_playing),
            view: self.render(),
        }
    }

    /// Applies a navigation and returns the resulting index, or `None` when
    /// there is nothing to navigate (empty collection or out-of-range jump).
    pub fn navigate(&mut self, nav: Navigation) -> Option<usize> {
        let cycler = self.cycler?;
        let target = match nav {
            Navigation::Next => cycler.next(self.current),
            Navigation::Previous => cycler.previous(self.current),
            Navigation::GoTo(index) if index < cycler.len() => cycler.go_to(index),
            Navigation::GoTo(index) => {
                debug!(index, len = cycler.len(), "ignoring jump past the last slide");
                return None;
            }
        };
        trace!(?nav, from = self.current, to = target, "navigate");
        self.current = target;
        Some(target)
    }

    pub fn click_control(&mut self, click: ControlClick) -> Option<usize> {
        match click {
            ControlClick::Previous => self.navigate(Navigation::Previous),
            ControlClick::Next => self.navigate(Navigation::Next),
        }
    }

    pub fn click_indicator(&mut self, index: usize) -> Option<usize> {
        self.navigate(Navigation::GoTo(index))
    }

    /// Feeds a touch event to the gesture detector and navigates on a swipe.
    pub fn touch(&mut self, event: TouchEvent) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        match event {
            TouchEvent::Start { x } => {
                self.gesture.touch_start(x);
                None
            }
            TouchEvent::Move { x } => match self.gesture.touch_move(x)? {
                Swipe::Left => self.navigate(Navigation::Next),
                Swipe::Right => self.navigate(Navigation::Previous),
            },
            TouchEvent::End => {
                self.gesture.touch_end();
                None
            }
        }
    }

    pub fn render(&self) -> CarouselView {
        view::render(&self.slides, &self.options, self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(n: usize) -> Carousel {
        let slides = (0..n).map(|i| Slide::new(format!("{i}.jpg"))).collect();
        Carousel::new(slides, CarouselOptions::default())
    }

    #[test]
    fn empty_carousel_ignores_everything() {
        let mut c = carousel(0);
        assert!(c.is_empty());
        assert_eq!(c.navigate(Navigation::Next), None);
        assert_eq!(c.touch(TouchEvent::Start { x: 100.0 }), None);
        assert_eq!(c.touch(TouchEvent::Move { x: 0.0 }), None);
        assert!(!c.state(false).is_touching);
        assert!(c.render().deck().is_none());
    }

    #[test]
    fn controls_wrap_around() {
        let mut c = carousel(3);
        assert_eq!(c.click_control(ControlClick::Previous), Some(2));
        assert_eq!(c.click_control(ControlClick::Next), Some(0));
        assert_eq!(c.click_control(ControlClick::Next), Some(1));
    }

    #[test]
    fn indicator_jumps_exactly() {
        let mut c = carousel(5);
        c.navigate(Navigation::Next);
        assert_eq!(c.click_indicator(4), Some(4));
        assert_eq!(c.current_index(), 4);
        assert_eq!(c.click_indicator(4), Some(4));
        assert_eq!(c.click_indicator(9), None);
        assert_eq!(c.current_index(), 4);
    }

    #[test]
    fn swipe_sequence_navigates_once() {
        let mut c = carousel(4);
        c.touch(TouchEvent::Start { x: 100.0 });
        assert!(c.state(false).is_touching);
        assert_eq!(c.state(false).touch_start_x, 100.0);
        assert_eq!(c.touch(TouchEvent::Move { x: 40.0 }), Some(1));
        assert_eq!(c.touch(TouchEvent::Move { x: -40.0 }), None);
        c.touch(TouchEvent::End);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn short_swipe_does_nothing() {
        let mut c = carousel(4);
        c.touch(TouchEvent::Start { x: 100.0 });
        assert_eq!(c.touch(TouchEvent::Move { x: 70.0 }), None);
        c.touch(TouchEvent::End);
        assert_eq!(c.current_index(), 0);
        assert!(!c.state(false).is_touching);
    }

    #[test]
    fn right_swipe_goes_back_and_wraps() {
        let mut c = carousel(4);
        c.touch(TouchEvent::Start { x: 0.0 });
        assert_eq!(c.touch(TouchEvent::Move { x: 75.0 }), Some(3));
    }

    #[test]
    fn options_change_rerenders() {
        let mut c = carousel(2);
        assert!(c.render().deck().unwrap().controls.is_some());
        c.set_options(CarouselOptions {
            show_controls: false,
            ..CarouselOptions::default()
        });
        assert!(c.render().deck().unwrap().controls.is_none());
        assert_eq!(c.options().show_controls, false);
    }

    #[test]
    fn snapshot_pairs_state_with_view() {
        let mut c = carousel(3);
        c.navigate(Navigation::Previous);
        let snapshot = c.snapshot(true);
        assert_eq!(snapshot.state.current_index, 2);
        assert!(snapshot.state.is_playing);
        assert_eq!(snapshot.view.deck().unwrap().current_index, 2);
    }
}
