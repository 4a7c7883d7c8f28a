// Browser side of the drag controller: web_sys implementations and listener wiring
use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, EventTarget, HtmlElement, MouseEvent};

use crate::config::DragConfig;
use crate::controller::{self, DragController, DragTarget, ElementLookup, EventKind, EventSource, Handler, PointerInput};
use crate::state::Offset;

#[derive(Clone, Debug)]
pub struct DomTarget(pub HtmlElement);

impl DragTarget for DomTarget {
    fn set_transform(&self, value: &str) {
        let _ = self.0.style().set_property("transform", value);
    }

    fn set_cursor(&self, value: &str) {
        let _ = self.0.style().set_property("cursor", value);
    }
}

impl PointerInput for MouseEvent {
    fn position(&self) -> Offset {
        Offset::new(self.client_x() as f64, self.client_y() as f64)
    }

    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}

impl ElementLookup for Document {
    type Target = DomTarget;

    fn find(&self, id: &str) -> Option<DomTarget> {
        self.get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(DomTarget)
    }
}

type MouseClosure = Closure<dyn FnMut(MouseEvent)>;

/// Mouse listeners on the target and the document. Dropping it removes them all.
pub struct DomEvents {
    target: EventTarget,
    document: EventTarget,
    listeners: Vec<(EventTarget, &'static str, MouseClosure)>,
}

impl DomEvents {
    pub fn new(target: &HtmlElement, document: &Document) -> Self {
        Self {
            target: target.clone().into(),
            document: document.clone().into(),
            listeners: Vec::new(),
        }
    }
}

impl EventSource for DomEvents {
    type Event = MouseEvent;

    fn subscribe(&mut self, kind: EventKind, mut handler: Handler<MouseEvent>) {
        let (on, name) = match kind {
            EventKind::Press => (self.target.clone(), "mousedown"),
            EventKind::Move => (self.document.clone(), "mousemove"),
            EventKind::Release => (self.document.clone(), "mouseup"),
        };
        let cb = Closure::wrap(Box::new(move |e: MouseEvent| handler(&e)) as Box<dyn FnMut(_)>);
        if on
            .add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())
            .is_ok()
        {
            self.listeners.push((on, name, cb));
        }
    }
}

impl Drop for DomEvents {
    fn drop(&mut self) {
        for (on, name, cb) in self.listeners.drain(..) {
            let _ = on.remove_event_listener_with_callback(name, cb.as_ref().unchecked_ref());
        }
    }
}

/// A live binding. The listeners own the controller; dropping this unhooks them.
pub struct DragBinding {
    _events: DomEvents,
}

/// Binds the configured element of `document`. `None` if it is not on the page.
pub fn bind(document: &Document, config: &DragConfig) -> Option<DragBinding> {
    let controller = DragController::bind(document, config)?;
    let mut events = DomEvents::new(&controller.target().0, document);
    let controller = Rc::new(RefCell::new(controller));
    controller::attach(&controller, &mut events);
    Some(DragBinding { _events: events })
}
