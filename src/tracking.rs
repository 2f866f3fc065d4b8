/// Anchor position tracking and click-outside detection on top of `EventHost`

use crate::annotation::PointerTarget;
use crate::geometry::AnchorPosition;
use crate::listeners::{EventHost, Subscription};
use std::rc::Rc;

/// Keeps an anchor's position current for as long as it is alive
///
/// Listens for `resize` and for `scroll` in the capture phase, so scrolling any
/// ancestor container is seen, not just the window. Dropping the tracker
/// releases both listeners.
pub struct PositionTracker {
    _subscriptions: Vec<Subscription>,
}

impl PositionTracker {
    pub fn attach<H, M, C>(host: &H, measure: M, on_change: C) -> Result<PositionTracker, String>
    where
        H: EventHost,
        M: Fn() -> Option<AnchorPosition> + 'static,
        C: Fn(AnchorPosition) + 'static,
    {
        let refresh: Rc<dyn Fn()> = Rc::new(move || {
            if let Some(position) = measure() {
                on_change(position);
            }
        });

        // initial measurement on mount
        refresh();

        let on_resize = refresh.clone();
        let resize = host.listen("resize", false, Box::new(move |_: &H::Event| on_resize()))?;

        let on_scroll = refresh;
        let scroll = host.listen("scroll", true, Box::new(move |_: &H::Event| on_scroll()))?;

        Ok(PositionTracker {
            _subscriptions: vec![resize, scroll],
        })
    }
}

/// Fire `on_outside` for every pointer-down that lands outside the overlay
///
/// Meant to be held only while the popover is open.
pub fn watch_outside<H, K, F>(host: &H, classify: K, on_outside: F) -> Result<Subscription, String>
where
    H: EventHost,
    K: Fn(&H::Event) -> PointerTarget + 'static,
    F: Fn() + 'static,
{
    host.listen(
        "mousedown",
        false,
        Box::new(move |event: &H::Event| {
            if classify(event) == PointerTarget::Outside {
                on_outside();
            }
        }),
    )
}
