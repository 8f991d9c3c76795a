use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerState {
    #[default]
    Idle,
    Active,
}

/// Single cancellable deadline. Arming replaces any previous deadline, so at
/// most one expiry is ever pending.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdleTimer {
    deadline_ms: Option<f64>,
}

impl IdleTimer {
    pub fn arm(&mut self, now_ms: f64, delay_ms: f64) {
        self.deadline_ms = Some(now_ms + delay_ms);
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn deadline_ms(&self) -> Option<f64> {
        self.deadline_ms
    }

    /// True once `now_ms` reaches the deadline. Does not disarm.
    pub fn is_due(&self, now_ms: f64) -> bool {
        matches!(self.deadline_ms, Some(d) if now_ms >= d)
    }
}

/// Tracks the last pointer position and whether the pointer is still moving.
///
/// Timestamps are host-supplied monotonic milliseconds (`performance.now()` in
/// a browser); the tracker never reads a clock itself.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    last_known: Vec2,
    state: PointerState,
    timer: IdleTimer,
    quiet_ms: f64,
}

impl PointerTracker {
    pub fn new(quiet_ms: f64) -> Self {
        Self {
            last_known: Vec2::ZERO,
            state: PointerState::Idle,
            timer: IdleTimer::default(),
            quiet_ms,
        }
    }

    /// Coordinates are stored as given; NaN and off-surface values are not
    /// filtered.
    pub fn on_pointer_move(&mut self, x: f32, y: f32, now_ms: f64) {
        self.last_known = Vec2::new(x, y);
        self.state = PointerState::Active;
        self.timer.arm(now_ms, self.quiet_ms);
    }

    /// Follow `(x, y)` until the next host event, with no quiet-period
    /// deadline. A later `on_pointer_move` arms the timer as usual.
    pub fn hold(&mut self, x: f32, y: f32) {
        self.last_known = Vec2::new(x, y);
        self.state = PointerState::Active;
        self.timer.cancel();
    }

    pub fn current_target(&self) -> Vec2 {
        self.last_known
    }

    pub fn is_active(&self, now_ms: f64) -> bool {
        self.state == PointerState::Active && !self.timer.is_due(now_ms)
    }

    /// Fire the idle timer if it is due and return the resulting state.
    pub fn poll(&mut self, now_ms: f64) -> PointerState {
        if self.timer.is_due(now_ms) {
            self.timer.cancel();
            self.state = PointerState::Idle;
        }
        self.state
    }

    /// State as of the last event or poll.
    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_pending()
    }

    /// Drop the pending timer and fall back to idle. Used on teardown.
    pub fn release(&mut self) {
        self.timer.cancel();
        self.state = PointerState::Idle;
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(crate::constants::IDLE_QUIET_MS)
    }
}
