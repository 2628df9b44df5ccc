//! Per-frame callback scheduling with explicit pause and resume.
//!
//! `FrameLoop` owns the "is a callback pending" state so that visibility
//! changes, resizes and stale callbacks can't leave two frame callbacks
//! chained at once. The browser binding implements [`FrameScheduler`] over
//! `requestAnimationFrame`; tests use a counting fake.

pub trait FrameScheduler {
    type Handle: Copy;

    /// Asks for one callback on the next frame. `None` when the host refuses.
    fn request(&mut self) -> Option<Self::Handle>;

    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState<H> {
    Idle,
    Running(H),
    Paused,
}

pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    state: LoopState<S::Handle>,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            state: LoopState::Idle,
        }
    }

    pub fn state(&self) -> LoopState<S::Handle> {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running(_))
    }

    pub fn start(&mut self) {
        if matches!(self.state, LoopState::Idle) {
            self.schedule();
        }
    }

    /// Called from the frame callback. Returns `true` when the frame should be
    /// painted; the next callback has already been requested by then.
    pub fn on_frame(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.schedule();
        true
    }

    pub fn pause(&mut self) {
        if let LoopState::Running(handle) = self.state {
            self.scheduler.cancel(handle);
        }
        self.state = LoopState::Paused;
    }

    pub fn resume(&mut self) {
        if matches!(self.state, LoopState::Paused) {
            self.schedule();
        }
    }

    fn schedule(&mut self) {
        self.state = match self.scheduler.request() {
            Some(handle) => LoopState::Running(handle),
            None => LoopState::Idle,
        };
    }
}

impl<S: FrameScheduler> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        if let LoopState::Running(handle) = self.state {
            self.scheduler.cancel(handle);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{set_timeout, AnimationFrames};

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::FrameScheduler;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;
    use wasm_bindgen::{closure::Closure, JsCast};
    use web_sys::window;

    pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    /// `requestAnimationFrame` bound to one callback slot. The slot is filled
    /// after construction because the callback usually needs the loop itself.
    #[derive(Clone, Default)]
    pub struct AnimationFrames {
        callback: FrameCallback,
    }

    impl AnimationFrames {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_callback(&self, callback: Closure<dyn FnMut(f64)>) {
            *self.callback.borrow_mut() = Some(callback);
        }

        pub fn clear_callback(&self) {
            self.callback.borrow_mut().take();
        }
    }

    impl FrameScheduler for AnimationFrames {
        type Handle = i32;

        fn request(&mut self) -> Option<i32> {
            let callback = self.callback.borrow();
            let callback = callback.as_ref()?;
            window()?
                .request_animation_frame(callback.as_ref().unchecked_ref())
                .ok()
        }

        fn cancel(&mut self, handle: i32) {
            if let Some(win) = window() {
                let _ = win.cancel_animation_frame(handle);
            }
        }
    }

    /// One-shot timer. The closure is released by the JS side after it runs.
    pub fn set_timeout(delay: Duration, callback: impl FnOnce() + 'static) -> Option<i32> {
        let callback = Closure::once_into_js(callback);
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
            .ok()
    }
}
