//! The drag/scroll carousel core.
//!
//! Input events accumulate into a target scroll offset (`progress`), which the
//! per-frame tick smooths toward with exponential interpolation and applies as
//! a horizontal translation to the mask. Instantaneous scroll speed drives a
//! squash/stretch distortion on the slides and their images.
//!
//! The core owns no scheduling: the host forwards input through
//! [`DragScroll::handle_event`] and calls [`DragScroll::advance_frame`] once
//! per display frame.

use crate::config::Config;
use crate::element::{Element, Elements, Transform};
use crate::input::Event;
use crate::utils::lerp;


/// Minimum progress-bar scale, so the bar never fully collapses.
const PROGRESS_BAR_MIN: f64 = 0.18;
const PROGRESS_BAR_RANGE: f64 = 1. - PROGRESS_BAR_MIN;

/// Upper bound on the per-frame speed reading.
///
/// Only the upper bound: large negative readings (scrolling the other way)
/// pass through unclamped. The asymmetry is load-bearing for the distortion
/// visuals; do not replace with a magnitude clamp.
const MAX_SPEED: f64 = 100.;

/// One carousel instance bound to a set of host elements.
#[derive(Debug)]
pub struct DragScroll<E: Element> {
    elements: Elements<E>,
    config: Config,

    /// Target scroll offset in pixels, clamped to `[0, max_scroll]`.
    progress: f64,
    /// Current rendered (smoothed) offset.
    x: f64,
    /// Previous frame's `x`, for deriving `speed`.
    old_x: f64,
    /// Per-frame offset delta, upper-clamped to [`MAX_SPEED`].
    speed: f64,
    /// Normalized scroll position in `[0, 1]`, drives the progress bar.
    playrate: f64,

    wrap_width: f64,
    max_scroll: f64,

    dragging: bool,
    start_x: f64,
}

impl<E: Element> DragScroll<E> {
    /// Creates a carousel over the given elements.
    ///
    /// Fails fast when the element structure is unusable (no slides), rather
    /// than surfacing the problem on first use.
    pub fn new(elements: Elements<E>, config: Config) -> anyhow::Result<Self> {
        elements.validate()?;

        let mut rv = Self {
            elements,
            config,
            progress: 0.,
            x: 0.,
            old_x: 0.,
            speed: 0.,
            playrate: 0.,
            wrap_width: 0.,
            max_scroll: 0.,
            dragging: false,
            start_x: 0.,
        };
        rv.recompute();

        debug!(
            "created carousel: {} slides, wrap width {}, max scroll {}",
            rv.elements.slides.len(),
            rv.wrap_width,
            rv.max_scroll,
        );

        Ok(rv)
    }

    /// Recomputes the layout bounds from current element widths.
    ///
    /// Call once per viewport resize. All slides are assumed to share the
    /// first slide's width; unequal widths are out of contract.
    ///
    /// A shrunken `max_scroll` does not re-clamp `progress` here; the clamp
    /// happens on the next input mutation.
    pub fn recompute(&mut self) {
        let slide_width = self.elements.slides[0].element.client_width();
        self.wrap_width = slide_width * self.elements.slides.len() as f64;
        self.elements.mask.set_width(self.wrap_width);
        self.max_scroll = self.wrap_width - self.elements.container.client_width();
    }

    /// Dispatches a unified input event.
    ///
    /// Returns `true` when the event started a drag, in which case the host
    /// should suppress the default action (native touch scroll, text
    /// selection) for the underlying platform event.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Wheel { delta_y } => {
                self.on_wheel(delta_y);
            }
            Event::PointerDown(pointer) => {
                let Some(x) = pointer.x() else {
                    trace!("ignoring pointer-down without a coordinate");
                    return false;
                };
                self.on_drag_start(x);
                return true;
            }
            Event::PointerMove(pointer) => {
                if let Some(x) = pointer.x() {
                    self.on_drag_move(x);
                }
            }
            Event::PointerUp | Event::PointerLeft => {
                self.on_drag_end();
            }
        }
        false
    }

    /// Adds a wheel delta to the progress accumulator.
    pub fn on_wheel(&mut self, delta_y: f64) {
        self.progress += delta_y;
        self.clamp_progress();
    }

    /// Begins a drag at the given horizontal coordinate.
    ///
    /// A repeated start without an intervening end just resets the anchor.
    pub fn on_drag_start(&mut self, pointer_x: f64) {
        self.dragging = true;
        self.start_x = pointer_x;
    }

    /// Feeds pointer motion into the progress accumulator. No-op unless a
    /// drag is in flight.
    pub fn on_drag_move(&mut self, pointer_x: f64) {
        if !self.dragging {
            return;
        }

        self.progress += (self.start_x - pointer_x) * self.config.speed_factor;
        self.start_x = pointer_x;
        self.clamp_progress();
    }

    pub fn on_drag_end(&mut self) {
        self.dragging = false;
    }

    /// Runs one render tick: smooths `x` toward `progress` and writes the
    /// resulting transforms to the elements.
    ///
    /// Invoked by the host's display driver at its refresh cadence; always
    /// runs to completion.
    pub fn advance_frame(&mut self) {
        self.x = lerp(self.x, self.progress, self.config.strength);

        // With no scrollable overflow there is nothing to normalize against.
        self.playrate = if self.max_scroll > 0. {
            self.x / self.max_scroll
        } else {
            0.
        };

        self.elements.mask.set_transform(Transform::TranslateX(-self.x));

        if let Some(bar) = &mut self.elements.progress_bar {
            bar.set_transform(Transform::ScaleX(
                PROGRESS_BAR_MIN + self.playrate * PROGRESS_BAR_RANGE,
            ));
        }

        self.speed = f64::min(MAX_SPEED, self.old_x - self.x);
        self.old_x = self.x;

        for slide in &mut self.elements.slides {
            slide
                .element
                .set_transform(Transform::Scale(1. - self.speed.abs() * self.config.scale_factor));
            slide.image.set_transform(Transform::ScaleX(
                1. + self.speed.abs() * self.config.distortion_factor,
            ));
        }
    }

    fn clamp_progress(&mut self) {
        // Slides narrower than the container make max_scroll negative; the
        // valid range collapses to the single point 0.
        self.progress = self.progress.clamp(0., self.max_scroll.max(0.));
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn playrate(&self) -> f64 {
        self.playrate
    }

    pub fn wrap_width(&self) -> f64 {
        self.wrap_width
    }

    pub fn max_scroll(&self) -> f64 {
        self.max_scroll
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

/// Creates a carousel for every component the host discovered.
///
/// Explicit replacement for page-wide discovery: the host resolves element
/// handles and attribute pairs per component and receives owned instances
/// back. Fails on the first component with an unusable element structure.
pub fn init<E, I>(components: I) -> anyhow::Result<Vec<DragScroll<E>>>
where
    E: Element,
    I: IntoIterator<Item = (Elements<E>, Config)>,
{
    components
        .into_iter()
        .map(|(elements, config)| DragScroll::new(elements, config))
        .collect()
}
