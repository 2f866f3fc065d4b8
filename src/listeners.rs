/// Scoped event listeners: subscribe at a lifecycle point, release on drop

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

/// A registered listener that is removed when this guard is dropped
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Subscription {
        Subscription {
            release: Some(Box::new(release)),
        }
    }

    /// Release the listener now instead of at end of scope
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Anything listeners can be attached to
pub trait EventHost {
    type Event;

    fn listen(
        &self,
        kind: &'static str,
        capture: bool,
        handler: Box<dyn FnMut(&Self::Event)>,
    ) -> Result<Subscription, String>;
}

/// A DOM event target (window, document, element)
#[derive(Clone)]
pub struct DomHost {
    target: EventTarget,
}

impl DomHost {
    pub fn new(target: impl Into<EventTarget>) -> DomHost {
        DomHost {
            target: target.into(),
        }
    }

    pub fn window() -> Option<DomHost> {
        web_sys::window().map(DomHost::new)
    }

    pub fn document() -> Option<DomHost> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(DomHost::new)
    }
}

impl EventHost for DomHost {
    type Event = Event;

    fn listen(
        &self,
        kind: &'static str,
        capture: bool,
        mut handler: Box<dyn FnMut(&Event)>,
    ) -> Result<Subscription, String> {
        let closure = Closure::wrap(Box::new(move |event: Event| {
            handler(&event);
        }) as Box<dyn FnMut(Event)>);

        let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
        self.target
            .add_event_listener_with_callback_and_bool(kind, callback, capture)
            .map_err(|e| format!("Failed to add {} listener: {:?}", kind, e))?;

        let target = self.target.clone();
        Ok(Subscription::new(move || {
            let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
            if let Err(e) = target.remove_event_listener_with_callback_and_bool(kind, callback, capture) {
                log::warn!("Failed to remove {} listener: {:?}", kind, e);
            }
            // closure is dropped here, after the browser no longer references it
        }))
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeHost;
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_drop_releases_once() {
        let released = Rc::new(Cell::new(0));
        {
            let released = released.clone();
            let _subscription = Subscription::new(move || released.set(released.get() + 1));
        }

        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_cancel_releases_immediately() {
        let released = Rc::new(Cell::new(false));
        let subscription = {
            let released = released.clone();
            Subscription::new(move || released.set(true))
        };

        assert!(!released.get());
        subscription.cancel();
        assert!(released.get());
    }

    #[test]
    fn test_fake_host_delivers_until_released() {
        let host = FakeHost::<u32>::new();
        let seen = Rc::new(Cell::new(0));

        let subscription = {
            let seen = seen.clone();
            host.listen("resize", false, Box::new(move |value: &u32| seen.set(seen.get() + value)))
                .unwrap()
        };

        host.dispatch("resize", &2);
        host.dispatch("scroll", &100);
        assert_eq!(seen.get(), 2);
        assert_eq!(host.active(), 1);

        drop(subscription);
        host.dispatch("resize", &2);

        assert_eq!(seen.get(), 2);
        assert_eq!(host.active(), 0);
    }

    #[test]
    fn test_release_only_removes_own_listener() {
        let host = FakeHost::<()>::new();
        let first = host.listen("scroll", true, Box::new(|_: &()| {})).unwrap();
        let _second = host.listen("scroll", true, Box::new(|_: &()| {})).unwrap();

        first.cancel();

        assert_eq!(host.active(), 1);
        assert!(host.has("scroll", true));
    }
}
