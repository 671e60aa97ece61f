use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FrameError {
    #[error("window is not available")]
    WindowUnavailable,
    #[error("failed to request animation frame: {0}")]
    RequestFailed(String),
}

/// A `requestAnimationFrame` loop owned by a component.
///
/// The callback receives the frame timestamp in milliseconds and returns
/// whether it wants another frame. Dropping the loop cancels any pending
/// frame, so nothing fires after the owner is gone.
pub struct FrameLoop {
    window: Window,
    request_id: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start<F>(mut on_frame: F) -> Result<Self, FrameError>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = web_sys::window().ok_or(FrameError::WindowUnavailable)?;
        let request_id = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let tick = {
            let window = window.clone();
            let request_id = request_id.clone();
            let callback = callback.clone();
            Closure::wrap(Box::new(move |timestamp: f64| {
                request_id.set(None);
                if !on_frame(timestamp) {
                    return;
                }
                if let Some(next) = callback.borrow().as_ref() {
                    match window.request_animation_frame(next.as_ref().unchecked_ref()) {
                        Ok(id) => request_id.set(Some(id)),
                        Err(e) => log::warn!("Animation frame request failed: {:?}", e),
                    }
                }
            }) as Box<dyn FnMut(f64)>)
        };

        let id = window
            .request_animation_frame(tick.as_ref().unchecked_ref())
            .map_err(|e| FrameError::RequestFailed(format!("{e:?}")))?;
        request_id.set(Some(id));
        *callback.borrow_mut() = Some(tick);

        Ok(Self { window, request_id, callback })
    }

    pub fn cancel(&self) {
        if let Some(id) = self.request_id.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::warn!("Failed to cancel animation frame {}: {:?}", id, e);
            }
        }
        // breaks the closure <-> slot cycle
        self.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn counting_loop(frames: &Rc<Cell<u32>>, keep_going: bool) -> FrameLoop {
        let frames = frames.clone();
        FrameLoop::start(move |_| {
            frames.set(frames.get() + 1);
            keep_going
        })
        .expect("frame loop starts in a browser")
    }

    async fn wait_for_first_frame(frames: &Rc<Cell<u32>>) {
        for _ in 0..60 {
            if frames.get() > 0 {
                return;
            }
            TimeoutFuture::new(16).await;
        }
        panic!("no animation frame arrived");
    }

    #[wasm_bindgen_test]
    async fn dropped_loop_never_fires_again() {
        let frames = Rc::new(Cell::new(0));
        let frame_loop = counting_loop(&frames, true);
        wait_for_first_frame(&frames).await;

        drop(frame_loop);
        let seen = frames.get();
        TimeoutFuture::new(200).await;
        assert_eq!(frames.get(), seen);
    }

    #[wasm_bindgen_test]
    async fn cancelled_before_first_frame_never_fires() {
        let frames = Rc::new(Cell::new(0));
        let frame_loop = counting_loop(&frames, true);
        frame_loop.cancel();

        TimeoutFuture::new(100).await;
        assert_eq!(frames.get(), 0);
    }

    #[wasm_bindgen_test]
    async fn finished_callback_stops_requesting() {
        let frames = Rc::new(Cell::new(0));
        let _frame_loop = counting_loop(&frames, false);
        wait_for_first_frame(&frames).await;

        TimeoutFuture::new(150).await;
        assert_eq!(frames.get(), 1);
    }

    #[wasm_bindgen_test]
    fn cancelling_twice_is_harmless() {
        let frame_loop = FrameLoop::start(|_| true).expect("frame loop starts in a browser");
        frame_loop.cancel();
        frame_loop.cancel();
        drop(frame_loop);
    }
}
