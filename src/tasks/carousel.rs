use std::future;

use anyhow::{Context, Result, anyhow};
use tokio::select;
use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use crate::autoplay::AutoplayTimer;
use crate::carousel::{Carousel, CarouselSnapshot, CarouselState};
use crate::config::{CarouselOptions, Slide};
use crate::events::{CarouselEvent, Navigation, PointerEvent};
use crate::keys::{KeyBus, KeyListener};
use crate::view::CarouselView;

const EVENT_QUEUE: usize = 64;

/// Handle to a carousel running on the tokio runtime.
///
/// Dropping the handle closes the event channel, which also stops the task;
/// [`MountedCarousel::unmount`] additionally waits for it to finish.
#[derive(Debug)]
pub struct MountedCarousel {
    events: Sender<CarouselEvent>,
    snapshots: watch::Receiver<CarouselSnapshot>,
    cancel: CancellationToken,
    handle: JoinHandle<Result<()>>,
}

impl MountedCarousel {
    pub async fn send(&self, event: CarouselEvent) -> Result<()> {
        self.events
            .send(event)
            .await
            .map_err(|_| anyhow!("carousel is no longer mounted"))
    }

    pub fn events(&self) -> Sender<CarouselEvent> {
        self.events.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CarouselSnapshot> {
        self.snapshots.clone()
    }

    pub fn state(&self) -> CarouselState {
        self.snapshots.borrow().state
    }

    /// The view as last rendered by the carousel itself.
    pub fn view(&self) -> CarouselView {
        self.snapshots.borrow().view.clone()
    }

    /// Cancels the task and waits until its timer and key binding are gone.
    pub async fn unmount(self) -> Result<()> {
        self.cancel.cancel();
        self.handle.await.context("carousel task panicked")?
    }
}

/// Spawns the carousel. Must be called from within a tokio runtime.
///
/// An empty collection mounts as a static placeholder: no timer is created
/// and no key binding is attached.
pub fn mount(slides: Vec<Slide>, options: CarouselOptions, keys: &KeyBus) -> MountedCarousel {
    let carousel = Carousel::new(slides, options);
    let (events_tx, events_rx) = mpsc::channel(EVENT_QUEUE);
    let (autoplay, listener) = if carousel.is_empty() {
        (None, None)
    } else {
        (
            Some(AutoplayTimer::new(carousel.options())),
            Some(keys.attach(&events_tx)),
        )
    };
    let playing = autoplay.as_ref().is_some_and(AutoplayTimer::is_playing);
    let (snapshot_tx, snapshot_rx) = watch::channel(carousel.snapshot(playing));
    let cancel = CancellationToken::new();

    let handle = tokio::spawn(run(
        carousel,
        autoplay,
        listener,
        events_rx,
        snapshot_tx,
        cancel.clone(),
    ));

    MountedCarousel {
        events: events_tx,
        snapshots: snapshot_rx,
        cancel,
        handle,
    }
}

/// Event loop of a mounted carousel.
///
/// Host events and key presses share one queue and are handled in arrival
/// order; queued events are drained before a due autoplay tick.
#[instrument(skip_all, fields(slides = carousel.len()))]
pub async fn run(
    mut carousel: Carousel,
    mut autoplay: Option<AutoplayTimer>,
    keys: Option<KeyListener>,
    mut events: Receiver<CarouselEvent>,
    snapshot_tx: watch::Sender<CarouselSnapshot>,
    cancel: CancellationToken,
) -> Result<()> {
    info!(
        autoplay = autoplay.as_ref().is_some_and(AutoplayTimer::is_playing),
        "carousel mounted"
    );

    loop {
        select! {
            biased;

            _ = cancel.cancelled() => {
                debug!("cancel received; unmounting carousel");
                break;
            }

            maybe_ev = events.recv() => {
                match maybe_ev {
                    Some(ev) => handle_event(&mut carousel, &mut autoplay, ev),
                    None => {
                        debug!("event channel closed; unmounting carousel");
                        break;
                    }
                }
            }

            _ = next_tick(&mut autoplay) => {
                if let Some(to) = carousel.navigate(Navigation::Next) {
                    debug!(to, "autoplay advanced");
                }
            }
        }

        let playing = autoplay.as_ref().is_some_and(AutoplayTimer::is_playing);
        let next = carousel.snapshot(playing);
        snapshot_tx.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
    }

    if let Some(timer) = autoplay.as_mut() {
        timer.release();
    }
    drop(keys);
    info!(index = carousel.current_index(), "carousel unmounted");
    Ok(())
}

fn handle_event(carousel: &mut Carousel, autoplay: &mut Option<AutoplayTimer>, ev: CarouselEvent) {
    match ev {
        CarouselEvent::Key(nav) => {
            if let Some(to) = carousel.navigate(nav) {
                debug!(?nav, to, "key navigation");
            }
        }
        CarouselEvent::Pointer(PointerEvent::Enter) => {
            if let Some(timer) = autoplay.as_mut() {
                timer.pointer_enter();
            }
        }
        CarouselEvent::Pointer(PointerEvent::Leave) => {
            if let Some(timer) = autoplay.as_mut() {
                timer.pointer_leave();
            }
        }
        CarouselEvent::Touch(touch) => {
            if let Some(to) = carousel.touch(touch) {
                debug!(to, "swipe navigation");
            }
        }
        CarouselEvent::Control(click) => {
            carousel.click_control(click);
        }
        CarouselEvent::Indicator(index) => {
            carousel.click_indicator(index);
        }
        CarouselEvent::Configure(options) => {
            if let Some(timer) = autoplay.as_mut() {
                timer.reconfigure(&options);
            }
            info!(
                auto_play = options.auto_play,
                interval = %humantime::format_duration(options.interval),
                show_controls = options.show_controls,
                show_indicators = options.show_indicators,
                "carousel reconfigured"
            );
            carousel.set_options(options);
        }
    }
}

async fn next_tick(autoplay: &mut Option<AutoplayTimer>) {
    match autoplay {
        Some(timer) => timer.tick().await,
        None => future::pending().await,
    }
}
