use crate::config::CarouselOptions;

/// A request to move the active slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Previous,
    GoTo(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Start { x: f32 },
    Move { x: f32 },
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlClick {
    Previous,
    Next,
}

/// Everything a mounted carousel reacts to, queued in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselEvent {
    /// A bound key, delivered by the key bus.
    Key(Navigation),
    Pointer(PointerEvent),
    Touch(TouchEvent),
    Control(ControlClick),
    Indicator(usize),
    Configure(CarouselOptions),
}
