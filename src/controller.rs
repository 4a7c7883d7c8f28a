//! Drag controller for the floating window.
//!
//! The controller only reacts to pointer events; delivering them is the job of an
//! [`EventSource`]. `crate::dom` provides the browser implementations of the traits
//! below, the tests provide in-memory ones.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::DragConfig;
use crate::state::{DragState, Offset};

/// The element being repositioned.
pub trait DragTarget {
    fn set_transform(&self, value: &str);
    fn set_cursor(&self, value: &str);
}

/// Pointer event data the controller needs.
pub trait PointerInput {
    /// Pointer position in viewport coordinates.
    fn position(&self) -> Offset;
    fn prevent_default(&self);
}

/// Resolves the target element by its id.
pub trait ElementLookup {
    type Target: DragTarget;
    fn find(&self, id: &str) -> Option<Self::Target>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Press on the target element.
    Press,
    /// Pointer movement anywhere in the document.
    Move,
    /// Release anywhere in the document.
    Release,
}

pub type Handler<E> = Box<dyn FnMut(&E)>;

/// Event dispatch owned by the host.
pub trait EventSource {
    type Event: PointerInput;
    fn subscribe(&mut self, kind: EventKind, handler: Handler<Self::Event>);
}

#[derive(Debug)]
pub struct DragController<T: DragTarget> {
    target: T,
    state: DragState,
}

impl<T: DragTarget> DragController<T> {
    pub fn new(target: T) -> Self {
        Self {
            target,
            state: DragState::default(),
        }
    }

    /// Looks up the target and sets its cursor hint. `None` when the element is
    /// missing; nothing is touched in that case.
    pub fn bind<L>(lookup: &L, config: &DragConfig) -> Option<Self>
    where
        L: ElementLookup<Target = T>,
    {
        let target = lookup.find(&config.target_id)?;
        target.set_cursor(&config.cursor);
        Some(Self::new(target))
    }

    pub fn on_press_start(&mut self, x: f64, y: f64) {
        self.state.press(Offset::new(x, y));
    }

    pub fn on_press_end(&mut self) {
        self.state.release();
    }

    pub fn on_pointer_move<E: PointerInput>(&mut self, event: &E) {
        if !self.state.active {
            return;
        }
        event.prevent_default();
        if let Some(offset) = self.state.track(event.position()) {
            self.target.set_transform(&offset.translate());
        }
    }

    /// Offset committed by the last finished drag.
    #[cfg(test)]
    pub fn offset(&self) -> Offset {
        self.state.accumulated_offset
    }

    #[cfg(test)]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn target(&self) -> &T {
        &self.target
    }
}

/// Wires press on the target and move/release on the document to the controller.
pub fn attach<T, S>(controller: &Rc<RefCell<DragController<T>>>, source: &mut S)
where
    T: DragTarget + 'static,
    S: EventSource + 'static,
    S::Event: 'static,
{
    let press = {
        let controller = controller.clone();
        Box::new(move |e: &S::Event| {
            let p = e.position();
            controller.borrow_mut().on_press_start(p.x, p.y);
        })
    };
    source.subscribe(EventKind::Press, press);

    let moved = {
        let controller = controller.clone();
        Box::new(move |e: &S::Event| controller.borrow_mut().on_pointer_move(e))
    };
    source.subscribe(EventKind::Move, moved);

    let release = {
        let controller = controller.clone();
        Box::new(move |_e: &S::Event| controller.borrow_mut().on_press_end())
    };
    source.subscribe(EventKind::Release, release);
}
