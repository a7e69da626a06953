//! Leading-edge throttle for scroll handlers.
//!
//! The first call in a window runs immediately and every further call until
//! the window has elapsed is dropped. Nothing is deferred to the trailing edge.

#[derive(Debug, Clone)]
pub struct Throttle {
    window_ms: f64,
    opened_at: Option<f64>,
}

impl Throttle {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            opened_at: None,
        }
    }

    /// Returns true when a call arriving at `now_ms` may run.
    ///
    /// A clock reading earlier than the start of the current window counts as
    /// the window having elapsed, so a clock stepping back never stalls calls.
    pub fn admit(&mut self, now_ms: f64) -> bool {
        if let Some(opened_at) = self.opened_at {
            if now_ms >= opened_at && now_ms < opened_at + self.window_ms {
                return false;
            }
        }
        self.opened_at = Some(now_ms);
        true
    }
}

/// Wraps `f` so it runs at most once per `window_ms`, reading time from `clock`.
pub fn throttle<F, C>(window_ms: f64, clock: C, mut f: F) -> impl FnMut()
where
    F: FnMut(),
    C: Fn() -> f64,
{
    let mut gate = Throttle::new(window_ms);
    move || {
        if gate.admit(clock()) {
            f();
        }
    }
}

/// Monotonic milliseconds from `performance.now()`, or the wall clock where
/// no `Performance` object exists.
pub fn browser_now() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(web_sys::js_sys::Date::now)
}
