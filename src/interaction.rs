use std::time::{Duration, Instant};

use iced_core::{Point, Rectangle};

use crate::brush;

/// Rate-limits brush pointer updates. Positions arriving faster than
/// the configured interval are coalesced with a latest-wins strategy;
/// the caller flushes the survivor when the gesture settles so the
/// final position is never lost.
#[derive(Debug, Clone)]
pub struct PointerCoalescer {
    interval: Duration,
    last_emit: Option<Instant>,
    pending: Option<Point>,
}

impl PointerCoalescer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
            last_emit: None,
            pending: None,
        }
    }

    /// Offers a pointer position. Returns it back when enough time has
    /// passed since the last emitted position; otherwise stores it as
    /// pending, replacing any earlier pending position.
    pub fn push(&mut self, position: Point, now: Instant) -> Option<Point> {
        let due = self
            .last_emit
            .is_none_or(|last| now.duration_since(last) >= self.interval);

        if due {
            self.last_emit = Some(now);
            self.pending = None;
            Some(position)
        } else {
            self.pending = Some(position);
            None
        }
    }

    /// Takes the pending position, if any. Call on gesture end so the
    /// last sampled position is always processed.
    pub fn flush(&mut self) -> Option<Point> {
        self.pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn clear(&mut self) {
        self.last_emit = None;
        self.pending = None;
    }
}

/// Which part of a range scrollbar a drag is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Min,
    Max,
    Thumb,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging {
        handle: Handle,
        /// Pointer fraction minus the thumb's min at grab time, so
        /// thumb drags keep the grab point under the pointer.
        grab_offset: f32,
    },
}

/// A two-handle range scrollbar with `min`/`max` as fractions of the
/// track in `[0, 1]`.
///
/// Touch drags stay active when the pointer leaves the track and only
/// end on an explicit release; hit tolerance is doubled for them.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollbarState {
    pub min: f32,
    pub max: f32,
    drag: DragState,
    touch: bool,
}

impl Default for ScrollbarState {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            drag: DragState::Idle,
            touch: false,
        }
    }
}

impl ScrollbarState {
    pub fn new(min: f32, max: f32) -> Self {
        Self {
            min: min.clamp(0.0, 1.0),
            max: max.clamp(min, 1.0),
            ..Self::default()
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag != DragState::Idle
    }

    pub fn dragged_handle(&self) -> Option<Handle> {
        match self.drag {
            DragState::Idle => None,
            DragState::Dragging { handle, .. } => Some(handle),
        }
    }

    /// Starts a drag if `position` hits a handle or the thumb between
    /// them within the `track` rectangle. Handles win over the thumb
    /// so a collapsed range can still be widened.
    pub fn grab(
        &mut self,
        position: Point,
        track: Rectangle,
        tolerance: f32,
        touch: bool,
    ) -> Option<Handle> {
        if track.width <= 0.0 {
            return None;
        }

        let tolerance = if touch { tolerance * 2.0 } else { tolerance };
        let min_px = track.x + self.min * track.width;
        let max_px = track.x + self.max * track.width;
        // Zero-width handle rectangles; the hit-test tolerance gives
        // them their grab zone.
        let handle_zone = |center: f32| Rectangle {
            x: center,
            y: track.y,
            width: 0.0,
            height: track.height,
        };

        let handle = if brush::is_within(position, handle_zone(min_px), tolerance)
            && (position.x - min_px).abs() <= (position.x - max_px).abs()
        {
            Handle::Min
        } else if brush::is_within(position, handle_zone(max_px), tolerance) {
            Handle::Max
        } else if brush::is_within(position, track, 0.0)
            && position.x > min_px
            && position.x < max_px
        {
            Handle::Thumb
        } else {
            return None;
        };

        let fraction = (position.x - track.x) / track.width;
        log::debug!("scrollbar grab: {handle:?} at fraction {fraction:.3}");
        self.touch = touch;
        self.drag = DragState::Dragging {
            handle,
            grab_offset: fraction - self.min,
        };
        Some(handle)
    }

    /// Moves the active drag to the pointer's new track position.
    pub fn pointer_moved(&mut self, position: Point, track: Rectangle) {
        let DragState::Dragging {
            handle,
            grab_offset,
        } = self.drag
        else {
            return;
        };
        if track.width <= 0.0 {
            return;
        }

        let fraction = ((position.x - track.x) / track.width).clamp(0.0, 1.0);
        match handle {
            Handle::Min => self.min = fraction.min(self.max),
            Handle::Max => self.max = fraction.max(self.min),
            Handle::Thumb => {
                let span = self.max - self.min;
                let min = (fraction - grab_offset).clamp(0.0, 1.0 - span);
                self.min = min;
                self.max = min + span;
            }
        }
    }

    /// Ends the drag when the pointer leaves the widget. Touch drags
    /// survive this and keep tracking until an explicit release.
    pub fn pointer_left(&mut self) {
        if !self.touch {
            self.drag = DragState::Idle;
        }
    }

    pub fn released(&mut self) {
        self.drag = DragState::Idle;
        self.touch = false;
    }
}
