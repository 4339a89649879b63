use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

/// Shared switch for a self-rescheduling frame loop. The loop checks
/// [`LoopHandle::is_running`] before requesting the next frame; `stop` is
/// final.
#[derive(Clone, Debug)]
pub struct LoopHandle {
    state: Rc<Cell<LoopState>>,
}

impl Default for LoopHandle {
    fn default() -> Self {
        Self {
            state: Rc::new(Cell::new(LoopState::Idle)),
        }
    }
}

impl LoopHandle {
    #[inline]
    pub fn state(&self) -> LoopState {
        self.state.get()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.get() == LoopState::Running
    }

    /// Returns false when the loop was already started or has been stopped.
    pub fn start(&self) -> bool {
        if self.state.get() != LoopState::Idle {
            return false;
        }
        self.state.set(LoopState::Running);
        true
    }

    pub fn stop(&self) {
        self.state.set(LoopState::Stopped);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the first tick.
    pub elapsed: f32,
    /// Seconds since the previous tick.
    pub delta: f32,
}

/// Elapsed-time clock fed with monotonic timestamps in seconds.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    start: Option<f64>,
    last: Option<f64>,
}

impl FrameClock {
    pub fn tick(&mut self, now_sec: f64) -> FrameTime {
        let start = *self.start.get_or_insert(now_sec);
        let prev = self.last.unwrap_or(start);
        let now = now_sec.max(prev);
        self.last = Some(now);
        FrameTime {
            elapsed: (now - start) as f32,
            delta: (now - prev) as f32,
        }
    }
}
