//! Pointer and keyboard handling for the viewport.
//!
//! Events are plain values applied to an explicit [`PlotState`], so every
//! gesture can be replayed in tests without a terminal. A drag moves
//! `idle -> dragging` on press, stays `dragging` while the pointer moves
//! (only the rubber band changes), and returns to `idle` on release, where
//! a box larger than the threshold on both axes becomes the new extent.

use crate::error::PlotError;
use crate::plot::PlotState;
use crate::viewport::{Pixel, PixelRect};

/// An in-progress box selection in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSelection {
    /// Where the pointer went down.
    pub start: Pixel,
    /// Latest pointer position.
    pub end: Pixel,
}

impl DragSelection {
    /// Start a selection at `at`.
    pub fn begin(at: Pixel) -> Self {
        Self { start: at, end: at }
    }

    /// The normalized selection rectangle.
    pub fn rect(&self) -> PixelRect {
        PixelRect::from_corners(self.start, self.end)
    }
}

/// Wheel rotation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    /// Rotated away from the user; zooms in.
    Up,
    /// Rotated towards the user; zooms out.
    Down,
}

/// Viewport navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Pan towards smaller x.
    Left,
    /// Pan towards larger x.
    Right,
    /// Shift the extent towards smaller y; content moves up on screen.
    Up,
    /// Shift the extent towards larger y; content moves down on screen.
    Down,
    /// Restore the default extent.
    Reset,
}

/// An input event in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button pressed.
    PointerDown(Pixel),
    /// Pointer moved with the button held.
    PointerMove(Pixel),
    /// Primary button released.
    PointerUp(Pixel),
    /// Wheel step at a position.
    Wheel {
        /// Pointer position.
        at: Pixel,
        /// Rotation direction.
        direction: WheelDirection,
    },
    /// Navigation key.
    Key(NavKey),
}

/// What applying an event did.
#[derive(Debug)]
pub enum Outcome {
    /// Only transient state changed; redraw.
    Redraw,
    /// The viewport changed; redraw.
    ViewChanged,
    /// Nothing to do.
    Ignored,
    /// The requested viewport was invalid and the previous one is kept.
    Rejected(PlotError),
}

impl Outcome {
    /// Whether the surface should be redrawn.
    pub fn needs_redraw(&self) -> bool {
        matches!(self, Self::Redraw | Self::ViewChanged)
    }
}

/// Apply one event to the plot state.
pub fn handle(state: &mut PlotState, event: InputEvent) -> Outcome {
    match event {
        InputEvent::PointerDown(at) => {
            state.drag = Some(DragSelection::begin(at));
            Outcome::Redraw
        },
        InputEvent::PointerMove(at) => match state.drag.as_mut() {
            Some(drag) => {
                drag.end = at;
                Outcome::Redraw
            },
            None => Outcome::Ignored,
        },
        InputEvent::PointerUp(at) => finish_drag(state, at),
        InputEvent::Wheel { at, direction } => wheel_zoom(state, at, direction),
        InputEvent::Key(key) => navigate(state, key),
    }
}

fn finish_drag(state: &mut PlotState, at: Pixel) -> Outcome {
    let Some(mut drag) = state.drag.take() else {
        return Outcome::Ignored;
    };
    drag.end = at;

    let rect = drag.rect();
    let threshold = state.config.interaction.box_zoom_threshold;
    if rect.width <= threshold || rect.height <= threshold || !state.viewport.has_surface() {
        tracing::debug!("Discarded {}x{} selection", rect.width, rect.height);
        return Outcome::Redraw;
    }

    let vp = &state.viewport;
    let x_min = vp.screen_to_x(rect.x);
    let x_max = vp.screen_to_x(rect.x + rect.width);
    let y_max = vp.screen_to_y(rect.y);
    let y_min = vp.screen_to_y(rect.y + rect.height);
    commit(state.viewport.set_extent(x_min, x_max, y_min, y_max))
}

fn wheel_zoom(state: &mut PlotState, at: Pixel, direction: WheelDirection) -> Outcome {
    if !state.viewport.has_surface() {
        return Outcome::Ignored;
    }
    let cfg = &state.config.interaction;
    let factor = match direction {
        WheelDirection::Up => cfg.wheel_zoom_in,
        WheelDirection::Down => cfg.wheel_zoom_out,
    };
    let cx = state.viewport.screen_to_x(at.x);
    let cy = state.viewport.screen_to_y(at.y);
    commit(state.viewport.zoom_around(cx, cy, factor))
}

fn navigate(state: &mut PlotState, key: NavKey) -> Outcome {
    let step = state.config.interaction.pan_fraction;
    let result = match key {
        NavKey::Left => state.viewport.pan(-step, 0.0),
        NavKey::Right => state.viewport.pan(step, 0.0),
        NavKey::Up => state.viewport.pan(0.0, -step),
        NavKey::Down => state.viewport.pan(0.0, step),
        NavKey::Reset => {
            state.reset_view();
            Ok(())
        },
    };
    commit(result)
}

fn commit(result: crate::error::Result<()>) -> Outcome {
    match result {
        Ok(()) => Outcome::ViewChanged,
        Err(e) => Outcome::Rejected(e),
    }
}
