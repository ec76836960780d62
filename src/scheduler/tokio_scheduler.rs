use crate::scheduler::{MIN_PERIOD, OneShotCallback, RepeatingCallback, Scheduler, TimerHandle};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;
use tokio::task::{self, JoinHandle};
use tokio::time::{Instant, MissedTickBehavior, interval_at, sleep};
use tracing::debug;

type TaskMap = Rc<RefCell<HashMap<TimerHandle, JoinHandle<()>>>>;

/// Wall-clock scheduler backed by Tokio timers.
///
/// Every timer is a local task, so it must be used from within a [`tokio::task::LocalSet`].
pub struct TokioScheduler {
    frame_interval: Duration,
    started: Instant,
    next_id: Cell<u64>,
    tasks: TaskMap,
}

impl TokioScheduler {
    pub fn new(frame_interval: Duration) -> Self {
        TokioScheduler {
            frame_interval: frame_interval.max(MIN_PERIOD),
            started: Instant::now(),
            next_id: Cell::new(0),
            tasks: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    fn next_handle(&self) -> TimerHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        TimerHandle(id)
    }

    fn spawn_repeating(&self, start: Instant, period: Duration, mut callback: RepeatingCallback) -> TimerHandle {
        let handle = self.next_handle();
        let join_handle = task::spawn_local(async move {
            let mut ticker = interval_at(start, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                callback();
            }
        });

        self.tasks.borrow_mut().insert(handle, join_handle);
        handle
    }
}

impl Scheduler for TokioScheduler {
    fn now(&self) -> Duration {
        self.started.elapsed()
    }

    fn on_every_frame(&self, callback: RepeatingCallback) -> TimerHandle {
        self.spawn_repeating(Instant::now(), self.frame_interval, callback)
    }

    fn on_interval(&self, period: Duration, callback: RepeatingCallback) -> TimerHandle {
        let period = period.max(MIN_PERIOD);
        self.spawn_repeating(Instant::now() + period, period, callback)
    }

    fn after(&self, delay: Duration, callback: OneShotCallback) -> TimerHandle {
        let handle = self.next_handle();
        let tasks = Rc::downgrade(&self.tasks);
        let join_handle = task::spawn_local(async move {
            sleep(delay).await;
            if let Some(tasks) = tasks.upgrade() {
                tasks.borrow_mut().remove(&handle);
            }
            callback();
        });

        self.tasks.borrow_mut().insert(handle, join_handle);
        handle
    }

    fn cancel(&self, handle: TimerHandle) -> bool {
        // Bind first so the map is not borrowed while aborting
        let join_handle = self.tasks.borrow_mut().remove(&handle);
        match join_handle {
            Some(join_handle) => {
                join_handle.abort();
                true
            }
            None => false,
        }
    }

    fn cancel_all(&self) {
        let join_handles = self.tasks.borrow_mut().drain().map(|(_, join_handle)| join_handle).collect::<Vec<_>>();
        debug!("⏱️ Cancelling {} timer(s)", join_handles.len());
        for join_handle in join_handles {
            join_handle.abort();
        }
    }
}
