/// Annotation overlay component and the shared render target it mounts into

use crate::annotation::{
    AnnotationEvent, AnnotationState, PointerTarget, classify_pointer, plan_layout,
};
use crate::config::OverlayConfig;
use crate::geometry::{AnchorPosition, ScrollOffset, ViewportRect, document_position};
use crate::listeners::DomHost;
use crate::tracking::{PositionTracker, watch_outside};
use std::rc::Rc;
use uuid::Uuid;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, Node, Window};
use yew::prelude::*;

/// The page-level element every overlay portals into
///
/// Provided through context so overlays never look it up themselves. An empty
/// target means overlays render only their invisible anchors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderTarget {
    host: Option<Element>,
}

impl RenderTarget {
    pub fn new(host: Element) -> RenderTarget {
        RenderTarget { host: Some(host) }
    }

    pub fn detached() -> RenderTarget {
        RenderTarget { host: None }
    }

    /// Resolve the target by element id in the current document
    pub fn lookup(id: &str) -> RenderTarget {
        let host = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id));

        RenderTarget { host }
    }

    pub fn host(&self) -> Option<&Element> {
        self.host.as_ref()
    }

    pub fn is_available(&self) -> bool {
        self.host.is_some()
    }
}

#[derive(Properties, PartialEq)]
pub struct OverlayProviderProps {
    #[prop_or_default]
    pub config: OverlayConfig,
    pub children: Children,
}

/// Supplies overlay config and the resolved render target to descendants
///
/// The target is resolved after mount, so it may be rendered by the
/// children themselves.
#[function_component(OverlayProvider)]
pub fn overlay_provider(props: &OverlayProviderProps) -> Html {
    let target = use_state(RenderTarget::detached);

    {
        let target = target.clone();
        use_effect_with(props.config.target_id.clone(), move |id| {
            let resolved = RenderTarget::lookup(id);
            if !resolved.is_available() {
                log::debug!("Render target #{} not found, annotations stay hidden", id);
            }
            target.set(resolved);
            || ()
        });
    }

    html! {
        <ContextProvider<OverlayConfig> context={props.config.clone()}>
            <ContextProvider<RenderTarget> context={(*target).clone()}>
                {props.children.clone()}
            </ContextProvider<RenderTarget>>
        </ContextProvider<OverlayConfig>>
    }
}

impl Reducible for AnnotationState {
    type Action = AnnotationEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).next(action);
        if next == *self {
            return self;
        }

        log::debug!("Annotation {:?} -> {:?} on {:?}", *self, next, action);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct BugIndicatorProps {
    pub description: AttrValue,
}

/// Marker + popover for one described defect, anchored where it is rendered
#[function_component(BugIndicator)]
pub fn bug_indicator(props: &BugIndicatorProps) -> Html {
    let target = use_context::<RenderTarget>().unwrap_or_default();
    let config = use_context::<OverlayConfig>().unwrap_or_default();
    let state = use_reducer_eq(AnnotationState::default);
    let anchor = use_state_eq(|| None::<AnchorPosition>);
    let popover_id = use_state(|| format!("annotation-{}", Uuid::new_v4()));

    let anchor_ref = use_node_ref();
    let marker_ref = use_node_ref();
    let popover_ref = use_node_ref();

    // Track the anchor for the whole mounted lifetime
    {
        let anchor = anchor.clone();
        let anchor_ref = anchor_ref.clone();

        use_effect_with((), move |_| {
            let tracker = DomHost::window()
                .ok_or_else(|| "No window available".to_string())
                .and_then(|host| {
                    PositionTracker::attach(
                        &host,
                        move || measure_anchor(&anchor_ref),
                        move |position| anchor.set(Some(position)),
                    )
                });

            let tracker = match tracker {
                Ok(tracker) => Some(tracker),
                Err(e) => {
                    log::warn!("Annotation position tracking disabled: {}", e);
                    None
                }
            };

            move || drop(tracker)
        });
    }

    // Close on pointer-down outside, only while open
    {
        let dispatcher = state.dispatcher();
        let marker_ref = marker_ref.clone();
        let popover_ref = popover_ref.clone();

        use_effect_with(state.is_open(), move |open| {
            let watch = if *open {
                let watch = DomHost::document()
                    .ok_or_else(|| "No document available".to_string())
                    .and_then(|host| {
                        watch_outside(
                            &host,
                            move |event: &Event| classify_event(event, &marker_ref, &popover_ref),
                            move || {
                                dispatcher.dispatch(AnnotationEvent::PointerDown(PointerTarget::Outside))
                            },
                        )
                    });

                match watch {
                    Ok(watch) => Some(watch),
                    Err(e) => {
                        log::warn!("Click-outside dismissal disabled: {}", e);
                        None
                    }
                }
            } else {
                None
            };

            move || drop(watch)
        });
    }

    let on_marker_click = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            dispatcher.dispatch(AnnotationEvent::MarkerClicked);
        })
    };

    let on_dismiss = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(AnnotationEvent::Dismissed);
        })
    };

    let anchor_html = html! {
        <span
            ref={anchor_ref}
            class="annotation-anchor"
            aria-hidden="true"
            style="display: inline-block; width: 0; height: 0; overflow: visible; vertical-align: middle; font-size: 0; line-height: 0;"
        ></span>
    };

    let layout = plan_layout(*state, *anchor, target.is_available(), &config);

    let overlay = match (target.host(), layout) {
        (Some(host), Some(layout)) => {
            let marker_style = format!(
                "{} width: {}px; height: {}px; z-index: {}; display: flex; align-items: center; justify-content: center; background: transparent; border: none; padding: 0; cursor: pointer;",
                layout.marker.to_style(),
                config.marker_size,
                config.marker_size,
                config.z_index
            );

            let overlay_html = html! {
                <>
                    <button
                        ref={marker_ref}
                        type="button"
                        class="annotation-marker"
                        style={marker_style}
                        onclick={on_marker_click}
                        aria-label="View bug description"
                        aria-expanded={state.is_open().to_string()}
                        aria-controls={(*popover_id).clone()}
                    >
                        <span class="annotation-marker-ping" style="position: absolute; width: 100%; height: 100%; border-radius: 50%; background-color: #f87171; opacity: 0.75;"></span>
                        <span class="annotation-marker-dot" style="position: relative; width: 12px; height: 12px; border-radius: 50%; background-color: #ef4444;"></span>
                    </button>

                    if let Some(popover) = layout.popover {
                        <div
                            ref={popover_ref}
                            id={(*popover_id).clone()}
                            role="dialog"
                            class="annotation-popover"
                            style={format!(
                                "{} z-index: {}; width: {}px; background-color: #111827; color: white; border-radius: 8px; box-shadow: 0 20px 25px rgba(0, 0, 0, 0.25); padding: 16px; font-size: 14px; line-height: 1.5;",
                                popover.to_style(),
                                config.z_index.saturating_add(1),
                                config.popover_width
                            )}
                        >
                            <button
                                type="button"
                                class="annotation-dismiss"
                                aria-label="Dismiss"
                                onclick={on_dismiss}
                                style="position: absolute; top: 8px; right: 8px; background: transparent; border: none; color: #9ca3af; cursor: pointer; padding: 2px;"
                            >
                                {"✕"}
                            </button>
                            <p class="annotation-description" style="margin: 0 0 12px 0; padding-right: 16px;">
                                {props.description.clone()}
                            </p>
                            <p class="annotation-footnote" style="margin: 0; font-size: 12px; color: #a5b4fc;">
                                {config.footnote.clone()}
                            </p>
                        </div>
                    }
                </>
            };

            create_portal(overlay_html, host.clone())
        }
        _ => html! {},
    };

    html! {
        <>
            {anchor_html}
            {overlay}
        </>
    }
}

// Helper functions

fn measure_anchor(anchor_ref: &NodeRef) -> Option<AnchorPosition> {
    let element = anchor_ref.cast::<Element>()?;
    let window = web_sys::window()?;

    let scroll = match read_scroll(&window) {
        Ok(scroll) => scroll,
        Err(e) => {
            log::warn!("{}", e);
            return None;
        }
    };

    let rect = element.get_bounding_client_rect();
    let viewport = ViewportRect {
        top: rect.top(),
        left: rect.left(),
    };

    Some(document_position(viewport, scroll))
}

fn read_scroll(window: &Window) -> Result<ScrollOffset, String> {
    let x = window
        .scroll_x()
        .map_err(|e| format!("Failed to read horizontal scroll: {:?}", e))?;
    let y = window
        .scroll_y()
        .map_err(|e| format!("Failed to read vertical scroll: {:?}", e))?;

    Ok(ScrollOffset { x, y })
}

fn classify_event(event: &Event, marker_ref: &NodeRef, popover_ref: &NodeRef) -> PointerTarget {
    let node = event.target().and_then(|target| target.dyn_into::<Node>().ok());
    let contains = |node_ref: &NodeRef| {
        node_ref
            .get()
            .is_some_and(|owner| owner.contains(node.as_ref()))
    };

    classify_pointer(contains(marker_ref), contains(popover_ref))
}
