//! Frame-coherent mouse state.
//!
//! Accumulates winit mouse events between redraws and hands the camera a
//! drag delta and scroll amount once per frame via the `take_*` methods.

use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

/// Approximate pixels per scroll line for trackpad pixel deltas.
const PIXELS_PER_LINE: f64 = 40.0;

/// Mouse state accumulated between frames.
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    position: Vec2,
    drag_delta: Vec2,
    scroll_lines: f32,
    left_held: bool,
}

impl MouseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a `CursorMoved` event. Motion only counts as drag while the
    /// left button is held.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        let new_position = Vec2::new(x as f32, y as f32);
        if self.left_held {
            self.drag_delta += new_position - self.position;
        }
        self.position = new_position;
    }

    /// Process a `MouseInput` event.
    pub fn on_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.left_held = state == ElementState::Pressed;
        }
    }

    /// Process a `MouseWheel` event, normalizing pixel deltas to lines.
    pub fn on_scroll(&mut self, delta: MouseScrollDelta) {
        match delta {
            MouseScrollDelta::LineDelta(_x, y) => self.scroll_lines += y,
            MouseScrollDelta::PixelDelta(pos) => {
                self.scroll_lines += (pos.y / PIXELS_PER_LINE) as f32;
            }
        }
    }

    /// Whether the left button is currently held.
    pub fn is_dragging(&self) -> bool {
        self.left_held
    }

    /// Current cursor position in window pixels.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Drag delta accumulated since the last call, in pixels.
    pub fn take_drag_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.drag_delta)
    }

    /// Scroll lines accumulated since the last call.
    pub fn take_scroll(&mut self) -> f32 {
        std::mem::take(&mut self.scroll_lines)
    }
}
