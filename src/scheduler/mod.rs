mod tokio_scheduler;
#[cfg(test)]
mod virtual_scheduler;

use std::fmt::{Display, Formatter};
use std::time::Duration;

pub use tokio_scheduler::TokioScheduler;
#[cfg(test)]
pub use virtual_scheduler::VirtualScheduler;

/// Shortest period a repeating timer may have, shorter periods are raised to this.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

pub type RepeatingCallback = Box<dyn FnMut()>;
pub type OneShotCallback = Box<dyn FnOnce()>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl Display for TimerHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// Drives callbacks on a single thread, a callback always runs to completion before the next one starts.
pub trait Scheduler {
    /// Time elapsed since the scheduler was created.
    fn now(&self) -> Duration;

    /// Runs `callback` once per rendered frame, the first run happens right away.
    fn on_every_frame(&self, callback: RepeatingCallback) -> TimerHandle;

    /// Runs `callback` every `period`, the first run happens one period from now.
    fn on_interval(&self, period: Duration, callback: RepeatingCallback) -> TimerHandle;

    /// Runs `callback` once after `delay`.
    fn after(&self, delay: Duration, callback: OneShotCallback) -> TimerHandle;

    /// Cancels a pending timer, returns `false` if it already fired or was cancelled.
    fn cancel(&self, handle: TimerHandle) -> bool;

    fn cancel_all(&self);
}
