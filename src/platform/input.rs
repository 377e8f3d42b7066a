//! Pointer input
//!
//! Event handlers only touch the pointer fields and a start latch; the frame
//! driver consumes the latch before the next simulation step.

use glam::Vec2;

use super::viewport::ScreenMetrics;
use crate::sim::Pointer;

/// Kind of pointer event delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// One-shot inputs waiting for the next step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputLatch {
    /// Pointer went down; start a game if idle
    pub start: bool,
}

impl InputLatch {
    /// Take the start request, clearing it
    pub fn take_start(&mut self) -> bool {
        std::mem::take(&mut self.start)
    }
}

/// Apply a pointer event given in CSS coordinates relative to the canvas
pub fn handle_pointer(
    pointer: &mut Pointer,
    latch: &mut InputLatch,
    metrics: &ScreenMetrics,
    kind: PointerEventKind,
    css_x: f64,
    css_y: f64,
) {
    match kind {
        PointerEventKind::Down => {
            let (x, y) = metrics.to_surface(css_x, css_y);
            pointer.active = true;
            pointer.pos = Vec2::new(x, y);
            latch.start = true;
        }
        PointerEventKind::Move => {
            if pointer.active {
                let (x, y) = metrics.to_surface(css_x, css_y);
                pointer.pos = Vec2::new(x, y);
            }
        }
        PointerEventKind::Up | PointerEventKind::Cancel => {
            pointer.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_lifecycle() {
        let metrics = ScreenMetrics::new(200.0, 400.0, 2.0);
        let mut pointer = Pointer::default();
        let mut latch = InputLatch::default();

        // Moves without engagement are ignored
        handle_pointer(&mut pointer, &mut latch, &metrics, PointerEventKind::Move, 5.0, 5.0);
        assert!(!pointer.active);
        assert_eq!(pointer.pos, Vec2::ZERO);

        handle_pointer(&mut pointer, &mut latch, &metrics, PointerEventKind::Down, 10.0, 20.0);
        assert!(pointer.active);
        assert_eq!(pointer.pos, Vec2::new(20.0, 40.0));
        assert!(latch.take_start());
        assert!(!latch.take_start());

        handle_pointer(&mut pointer, &mut latch, &metrics, PointerEventKind::Move, 50.0, 60.0);
        assert_eq!(pointer.pos, Vec2::new(100.0, 120.0));

        handle_pointer(&mut pointer, &mut latch, &metrics, PointerEventKind::Cancel, 0.0, 0.0);
        assert!(!pointer.active);
        assert_eq!(pointer.pos, Vec2::new(100.0, 120.0));
    }
}
