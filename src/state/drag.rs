// Drag gesture state for the floating window
use std::ops::Sub;

/// A 2D translation in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// CSS `transform` value for this offset.
    pub fn translate(&self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}

impl Sub for Offset {
    type Output = Offset;
    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct DragState {
    pub active: bool,
    /// Pointer position at press, minus the accumulated offset.
    pub initial_pointer: Offset,
    /// Last translation applied to the target.
    pub current_offset: Offset,
    /// Baseline carried between drag sessions. Only written at release.
    pub accumulated_offset: Offset,
}

impl DragState {
    pub fn press(&mut self, pointer: Offset) {
        self.active = true;
        self.initial_pointer = pointer - self.accumulated_offset;
        // a release without any move commits the unchanged baseline
        self.current_offset = self.accumulated_offset;
    }

    pub fn release(&mut self) {
        self.active = false;
        self.accumulated_offset = self.current_offset;
    }

    /// Returns the new offset to draw, or `None` when no drag is in progress.
    pub fn track(&mut self, pointer: Offset) -> Option<Offset> {
        if !self.active {
            return None;
        }
        self.current_offset = pointer - self.initial_pointer;
        Some(self.current_offset)
    }
}
