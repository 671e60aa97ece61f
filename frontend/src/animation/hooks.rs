use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};
use yew::prelude::*;

use super::counter::CounterAnimator;
use super::easing::Easing;
use super::frame::FrameLoop;
use super::parallax::parallax_offset;
use super::reveal::{intersects, Bounds, RevealState, Viewport};

/// Window event listener that detaches itself when dropped.
struct WindowListener {
    window: Window,
    events: &'static [&'static str],
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    fn attach(
        window: Window,
        events: &'static [&'static str],
        callback: Closure<dyn FnMut()>,
    ) -> Option<Self> {
        for event in events {
            if let Err(e) = window
                .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                log::warn!("Failed to listen for {}: {:?}", event, e);
                return None;
            }
        }
        Some(Self { window, events, callback })
    }

    fn fire(&self) {
        let _ = self
            .callback
            .as_ref()
            .unchecked_ref::<web_sys::js_sys::Function>()
            .call0(&wasm_bindgen::JsValue::NULL);
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        for event in self.events {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
    }
}

fn visibility(window: &Window, node: &NodeRef, margin_px: f64) -> Option<bool> {
    let element = node.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    let viewport = Viewport {
        width: window.inner_width().ok()?.as_f64()?,
        height: window.inner_height().ok()?.as_f64()?,
    };
    let bounds = Bounds {
        top: rect.top(),
        bottom: rect.bottom(),
        left: rect.left(),
        right: rect.right(),
    };
    Some(intersects(bounds, viewport, margin_px))
}

/// Returns true once the referenced element has come within `margin_px` of the
/// viewport, and stays true afterwards.
#[hook]
pub fn use_reveal_on_view(node: NodeRef, margin_px: f64) -> bool {
    let revealed = use_state(|| false);

    {
        let setter = revealed.setter();
        use_effect_with_deps(
            move |_| {
                let listener = match web_sys::window() {
                    Some(window) => {
                        let state = Rc::new(Cell::new(RevealState::hidden()));
                        let check = {
                            let window = window.clone();
                            let setter = setter.clone();
                            Closure::wrap(Box::new(move || {
                                if state.get().is_revealed() {
                                    return;
                                }
                                // no measurable viewport means nothing can ever trigger
                                let visible = visibility(&window, &node, margin_px).unwrap_or(true);
                                let mut next = state.get();
                                if next.observe(visible) {
                                    state.set(next);
                                    setter.set(true);
                                }
                            }) as Box<dyn FnMut()>)
                        };
                        let listener = WindowListener::attach(window, &["scroll", "resize"], check);
                        match &listener {
                            Some(listener) => listener.fire(),
                            None => setter.set(true),
                        }
                        listener
                    }
                    None => {
                        setter.set(RevealState::without_viewport().is_revealed());
                        None
                    }
                };
                move || drop(listener)
            },
            (),
        );
    }

    *revealed
}

/// Counts from 0 to `target` once `active` turns true. Stays at 0 until then.
#[hook]
pub fn use_counter(target: u64, duration_ms: u32, easing: Easing, active: bool) -> u64 {
    let value = use_state_eq(|| 0u64);

    {
        let setter = value.setter();
        use_effect_with_deps(
            move |&(target, duration_ms, easing, active)| {
                let frames = if active {
                    // a restart counts up from 0 again, not from the old value
                    setter.set(0);
                    let mut animator = CounterAnimator::new(target, duration_ms, easing);
                    let tick_setter = setter.clone();
                    let started = FrameLoop::start(move |now| {
                        let frame = animator.sample(now);
                        tick_setter.set(frame.value);
                        !frame.finished
                    });
                    match started {
                        Ok(frames) => Some(frames),
                        Err(e) => {
                            log::warn!("Counter animation unavailable, jumping to {}: {}", target, e);
                            setter.set(target);
                            None
                        }
                    }
                } else {
                    None
                };
                // cancels the pending frame on unmount
                move || drop(frames)
            },
            (target, duration_ms, easing, active),
        );
    }

    *value
}

/// Scroll-linked vertical offset for parallax layers.
#[hook]
pub fn use_parallax(factor: f64, max_px: f64) -> f64 {
    let offset = use_state_eq(|| 0.0_f64);

    {
        let setter = offset.setter();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().and_then(|window| {
                    let source = window.clone();
                    let on_scroll = Closure::wrap(Box::new(move || {
                        let scroll_y = source.scroll_y().unwrap_or(0.0);
                        setter.set(parallax_offset(scroll_y, factor, max_px));
                    }) as Box<dyn FnMut()>);
                    WindowListener::attach(window, &["scroll"], on_scroll)
                });
                if let Some(listener) = &listener {
                    listener.fire();
                }
                move || drop(listener)
            },
            (),
        );
    }

    *offset
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod tests {
    use std::cell::RefCell;

    use gloo_timers::callback::Timeout;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const COUNT_MS: u32 = 200;

    thread_local! {
        static SHOWN: RefCell<Vec<(u64, u64)>> = RefCell::new(Vec::new());
    }

    fn mount_point() -> Element {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document");
        let root = document.create_element("div").expect("div");
        document
            .body()
            .expect("body")
            .append_child(&root)
            .expect("mounted");
        root
    }

    fn shown() -> Vec<(u64, u64)> {
        SHOWN.with(|shown| shown.borrow().clone())
    }

    #[derive(Properties, PartialEq)]
    struct CounterHostProps {
        target: u64,
        active: bool,
    }

    #[function_component(CounterHost)]
    fn counter_host(props: &CounterHostProps) -> Html {
        let value = use_counter(props.target, COUNT_MS, Easing::Linear, props.active);
        SHOWN.with(|shown| shown.borrow_mut().push((props.target, value)));
        html! { <span>{ value }</span> }
    }

    /// Counts to 100, then switches its own target to 30 once finished.
    #[function_component(RetargetingHost)]
    fn retargeting_host() -> Html {
        let target = use_state(|| 100u64);
        {
            let target = target.clone();
            use_effect_with_deps(
                move |_| {
                    let switch = Timeout::new(COUNT_MS * 3, move || target.set(30));
                    move || drop(switch)
                },
                (),
            );
        }
        let value = use_counter(*target, COUNT_MS, Easing::Linear, true);
        SHOWN.with(|shown| shown.borrow_mut().push((*target, value)));
        html! { <span>{ value }</span> }
    }

    #[wasm_bindgen_test]
    fn dropped_listener_stops_hearing_events() {
        let window = web_sys::window().expect("window");
        let heard = Rc::new(Cell::new(0));
        let callback = {
            let heard = heard.clone();
            Closure::wrap(Box::new(move || heard.set(heard.get() + 1)) as Box<dyn FnMut()>)
        };
        let resize = Event::new("resize").expect("event");

        let listener = WindowListener::attach(window.clone(), &["resize"], callback).expect("attached");
        window.dispatch_event(&resize).expect("dispatched");
        assert_eq!(heard.get(), 1);
        listener.fire();
        assert_eq!(heard.get(), 2);

        drop(listener);
        window.dispatch_event(&resize).expect("dispatched");
        assert_eq!(heard.get(), 2);
    }

    #[wasm_bindgen_test]
    async fn inactive_counter_stays_at_zero() {
        let root = mount_point();
        let app = yew::Renderer::<CounterHost>::with_root_and_props(
            root.clone(),
            CounterHostProps { target: 250, active: false },
        )
        .render();

        TimeoutFuture::new(COUNT_MS * 2).await;
        assert_eq!(root.text_content().as_deref(), Some("0"));
        app.destroy();
    }

    #[wasm_bindgen_test]
    async fn active_counter_lands_on_target() {
        let root = mount_point();
        let app = yew::Renderer::<CounterHost>::with_root_and_props(
            root.clone(),
            CounterHostProps { target: 250, active: true },
        )
        .render();

        TimeoutFuture::new(COUNT_MS * 3).await;
        assert_eq!(root.text_content().as_deref(), Some("250"));
        app.destroy();
    }

    #[wasm_bindgen_test]
    async fn unmounting_mid_count_stops_updates() {
        SHOWN.with(|shown| shown.borrow_mut().clear());
        let root = mount_point();
        let app = yew::Renderer::<CounterHost>::with_root_and_props(
            root.clone(),
            CounterHostProps { target: 1_000_000, active: true },
        )
        .render();

        TimeoutFuture::new(COUNT_MS / 4).await;
        app.destroy();
        // destruction is scheduled, let it settle
        TimeoutFuture::new(16).await;
        let renders = shown().len();
        assert!(renders > 0);
        assert!(shown().iter().all(|&(_, value)| value < 1_000_000));

        TimeoutFuture::new(COUNT_MS * 2).await;
        assert_eq!(shown().len(), renders);
        assert!(shown().iter().all(|&(_, value)| value < 1_000_000));
    }

    #[wasm_bindgen_test]
    async fn retargeted_counter_restarts_from_zero() {
        SHOWN.with(|shown| shown.borrow_mut().clear());
        let root = mount_point();
        let app = yew::Renderer::<RetargetingHost>::with_root(root.clone()).render();

        TimeoutFuture::new(COUNT_MS * 6).await;
        assert_eq!(root.text_content().as_deref(), Some("30"));

        let after_switch: Vec<u64> = shown()
            .into_iter()
            .filter(|&(target, _)| target == 30)
            .map(|(_, value)| value)
            .skip_while(|&value| value != 0)
            .collect();
        assert!(!after_switch.is_empty());
        assert!(after_switch.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(after_switch.last(), Some(&30));
        app.destroy();
    }
}
