//! Pointer input normalization
//!
//! Raw pointer events arrive in device pixels; animated components read
//! a normalized snapshot in `[-1, 1]` per axis. Events are applied as
//! they arrive (no queueing) and only the latest snapshot is visible to
//! the tick, so multiple moves between two frames collapse to the last
//! one.

use serde::{Deserialize, Serialize};

/// Raw pointer-move event from the host
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Pointer x in device pixels, origin top-left
    pub client_x: f32,
    /// Pointer y in device pixels, origin top-left
    pub client_y: f32,
    /// Viewport width in device pixels
    pub viewport_width: f32,
    /// Viewport height in device pixels
    pub viewport_height: f32,
}

/// Normalized pointer snapshot
///
/// `x` and `y` are normalized device coordinates: `-1` at the left and
/// bottom viewport edges, `+1` at the right and top edges. The y axis
/// is flipped relative to pixel coordinates so "up" is positive,
/// matching a right-handed render convention.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

/// Tracks the latest normalized pointer position
///
/// Starts at `{0, 0}` (viewport center) until the first event arrives.
#[derive(Debug, Default)]
pub struct PointerTracker {
    latest: PointerState,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one raw pointer event.
    ///
    /// A degenerate viewport (zero or non-finite dimensions) would push
    /// NaN into the render path, so it resolves to the center snapshot
    /// instead.
    pub fn on_pointer_move(&mut self, event: PointerEvent) {
        self.latest = normalize(event);
    }

    /// Latest snapshot; never blocks, never consumes.
    pub fn state(&self) -> PointerState {
        self.latest
    }
}

fn normalize(event: PointerEvent) -> PointerState {
    let x = (event.client_x / event.viewport_width) * 2.0 - 1.0;
    let y = -(event.client_y / event.viewport_height) * 2.0 + 1.0;

    if x.is_finite() && y.is_finite() {
        PointerState { x, y }
    } else {
        PointerState::default()
    }
}
