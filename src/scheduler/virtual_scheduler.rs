use crate::scheduler::{MIN_PERIOD, OneShotCallback, RepeatingCallback, Scheduler, TimerHandle};
use std::cell::RefCell;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::time::Duration;
use tracing::trace;

/// Deterministic scheduler driven by virtual time.
///
/// Nothing runs until the clock is moved with [`VirtualScheduler::advance_to`] or
/// [`VirtualScheduler::advance_by`]. Due timers fire in deadline order; timers with equal
/// deadlines fire in the order they were (re)scheduled.
pub struct VirtualScheduler {
    frame_interval: Duration,
    state: RefCell<State>,
}

#[derive(Default)]
struct State {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    timers: HashMap<TimerHandle, Timer>,
    queue: BinaryHeap<Reverse<(Duration, u64, TimerHandle)>>,
}

enum Timer {
    // `callback` is `None` while the callback is running
    Repeating { period: Duration, callback: Option<RepeatingCallback> },
    OneShot(OneShotCallback),
}

enum Due {
    Repeating { deadline: Duration, period: Duration, callback: RepeatingCallback },
    OneShot(OneShotCallback),
}

impl State {
    fn push(&mut self, deadline: Duration, handle: TimerHandle) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse((deadline, seq, handle)));
    }

    fn register(&mut self, delay: Duration, timer: Timer) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;

        self.timers.insert(handle, timer);
        self.push(self.now + delay, handle);
        handle
    }
}

impl VirtualScheduler {
    pub fn new(frame_interval: Duration) -> Self {
        VirtualScheduler {
            frame_interval: frame_interval.max(MIN_PERIOD),
            state: RefCell::new(State::default()),
        }
    }

    pub fn advance_by(&self, duration: Duration) {
        let target = self.now() + duration;
        self.advance_to(target);
    }

    /// Moves the clock to `target`, running every timer that is due on the way.
    pub fn advance_to(&self, target: Duration) {
        while let Some((handle, due)) = self.pop_due(target) {
            match due {
                Due::OneShot(callback) => callback(),
                Due::Repeating {
                    deadline,
                    period,
                    mut callback,
                } => {
                    callback();
                    self.reschedule(handle, deadline + period, callback);
                }
            }
        }

        let mut state = self.state.borrow_mut();
        state.now = state.now.max(target);
    }

    /// Number of timers that are still scheduled.
    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    fn pop_due(&self, target: Duration) -> Option<(TimerHandle, Due)> {
        let mut state = self.state.borrow_mut();
        loop {
            let Reverse((deadline, _, handle)) = *state.queue.peek()?;
            if deadline > target {
                return None;
            }
            state.queue.pop();

            // Cancelled timers leave their queue entry behind
            let due = match state.timers.remove(&handle) {
                Some(Timer::OneShot(callback)) => Due::OneShot(callback),
                Some(Timer::Repeating {
                    period,
                    callback: Some(callback),
                }) => {
                    state.timers.insert(handle, Timer::Repeating { period, callback: None });
                    Due::Repeating { deadline, period, callback }
                }
                Some(running @ Timer::Repeating { callback: None, .. }) => {
                    state.timers.insert(handle, running);
                    continue;
                }
                None => continue,
            };

            state.now = state.now.max(deadline);
            trace!(timer = %handle, at = ?deadline, "⏱️ Firing timer");
            return Some((handle, due));
        }
    }

    fn reschedule(&self, handle: TimerHandle, deadline: Duration, callback: RepeatingCallback) {
        let mut state = self.state.borrow_mut();
        // The callback may have cancelled its own timer
        let Some(Timer::Repeating { callback: slot, .. }) = state.timers.get_mut(&handle) else {
            return;
        };
        *slot = Some(callback);
        state.push(deadline, handle);
    }
}

impl Scheduler for VirtualScheduler {
    fn now(&self) -> Duration {
        self.state.borrow().now
    }

    fn on_every_frame(&self, callback: RepeatingCallback) -> TimerHandle {
        let period = self.frame_interval;
        self.state.borrow_mut().register(
            Duration::ZERO,
            Timer::Repeating {
                period,
                callback: Some(callback),
            },
        )
    }

    fn on_interval(&self, period: Duration, callback: RepeatingCallback) -> TimerHandle {
        let period = period.max(MIN_PERIOD);
        self.state.borrow_mut().register(
            period,
            Timer::Repeating {
                period,
                callback: Some(callback),
            },
        )
    }

    fn after(&self, delay: Duration, callback: OneShotCallback) -> TimerHandle {
        self.state.borrow_mut().register(delay, Timer::OneShot(callback))
    }

    fn cancel(&self, handle: TimerHandle) -> bool {
        self.state.borrow_mut().timers.remove(&handle).is_some()
    }

    fn cancel_all(&self) {
        let mut state = self.state.borrow_mut();
        state.timers.clear();
        state.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn recorder() -> (Rc<RefCell<Vec<(&'static str, Duration)>>>, Rc<VirtualScheduler>) {
        (Rc::new(RefCell::new(Vec::new())), Rc::new(VirtualScheduler::new(ms(16))))
    }

    #[test]
    fn nothing_runs_before_the_clock_moves() {
        let fired = Rc::new(Cell::new(false));
        let scheduler = VirtualScheduler::new(ms(16));

        let flag = fired.clone();
        scheduler.on_every_frame(Box::new(move || flag.set(true)));

        assert!(!fired.get());
        scheduler.advance_by(Duration::ZERO);
        assert!(fired.get());
    }

    #[test]
    fn frames_fire_every_frame_interval() {
        let count = Rc::new(Cell::new(0));
        let scheduler = VirtualScheduler::new(ms(16));

        let counter = count.clone();
        scheduler.on_every_frame(Box::new(move || counter.set(counter.get() + 1)));
        scheduler.advance_to(ms(160));

        // t = 0, 16, ..., 160
        assert_eq!(count.get(), 11);
    }

    #[test]
    fn intervals_first_fire_one_period_after_registration() {
        let (log, scheduler) = recorder();

        let (l, s) = (log.clone(), scheduler.clone());
        scheduler.on_interval(ms(3000), Box::new(move || l.borrow_mut().push(("tick", s.now()))));
        scheduler.advance_to(ms(9500));

        assert_eq!(*log.borrow(), vec![("tick", ms(3000)), ("tick", ms(6000)), ("tick", ms(9000))]);
        assert_eq!(scheduler.now(), ms(9500));
    }

    #[test]
    fn one_shots_fire_once_at_their_deadline() {
        let (log, scheduler) = recorder();

        let (l, s) = (log.clone(), scheduler.clone());
        scheduler.after(ms(5000), Box::new(move || l.borrow_mut().push(("expired", s.now()))));

        scheduler.advance_to(ms(4999));
        assert!(log.borrow().is_empty());
        assert_eq!(scheduler.pending_timers(), 1);

        scheduler.advance_to(ms(20_000));
        assert_eq!(*log.borrow(), vec![("expired", ms(5000))]);
        assert_eq!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn equal_deadlines_fire_in_registration_order() {
        let (log, scheduler) = recorder();

        let (a, b) = (log.clone(), log.clone());
        scheduler.after(ms(10), Box::new(move || a.borrow_mut().push(("a", Duration::ZERO))));
        scheduler.after(ms(10), Box::new(move || b.borrow_mut().push(("b", Duration::ZERO))));
        scheduler.advance_to(ms(10));

        let names = log.borrow().iter().map(|(name, _)| *name).collect::<Vec<_>>();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn cancelled_timers_do_not_fire() {
        let fired = Rc::new(Cell::new(0));
        let scheduler = VirtualScheduler::new(ms(16));

        let counter = fired.clone();
        let handle = scheduler.on_interval(ms(100), Box::new(move || counter.set(counter.get() + 1)));
        scheduler.advance_to(ms(250));

        assert!(scheduler.cancel(handle));
        assert!(!scheduler.cancel(handle));
        scheduler.advance_to(ms(1000));

        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn callbacks_can_schedule_new_timers() {
        let (log, scheduler) = recorder();

        let (l, s) = (log.clone(), scheduler.clone());
        scheduler.on_interval(
            ms(3000),
            Box::new(move || {
                let (inner_log, inner_scheduler) = (l.clone(), s.clone());
                s.after(ms(5000), Box::new(move || inner_log.borrow_mut().push(("expired", inner_scheduler.now()))));
            }),
        );
        scheduler.advance_to(ms(11_000));

        // Spawned at 3000 and 6000, the one from 9000 expires at 14000
        assert_eq!(*log.borrow(), vec![("expired", ms(8000)), ("expired", ms(11_000))]);
    }

    #[test]
    fn a_repeating_callback_can_cancel_itself() {
        let count = Rc::new(Cell::new(0));
        let handle_slot: Rc<Cell<Option<TimerHandle>>> = Rc::new(Cell::new(None));
        let scheduler = Rc::new(VirtualScheduler::new(ms(16)));

        let (counter, slot, s) = (count.clone(), handle_slot.clone(), scheduler.clone());
        let handle = scheduler.on_every_frame(Box::new(move || {
            counter.set(counter.get() + 1);
            if counter.get() == 3 {
                if let Some(handle) = slot.get() {
                    s.cancel(handle);
                }
            }
        }));
        handle_slot.set(Some(handle));
        scheduler.advance_to(ms(1000));

        assert_eq!(count.get(), 3);
        assert_eq!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn cancel_all_stops_everything() {
        let count = Rc::new(Cell::new(0));
        let scheduler = VirtualScheduler::new(ms(16));

        let (a, b) = (count.clone(), count.clone());
        scheduler.on_every_frame(Box::new(move || a.set(a.get() + 1)));
        scheduler.after(ms(50), Box::new(move || b.set(b.get() + 100)));
        scheduler.cancel_all();
        scheduler.advance_to(ms(1000));

        assert_eq!(count.get(), 0);
        assert_eq!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn zero_periods_are_raised_to_the_minimum() {
        let count = Rc::new(Cell::new(0));
        let scheduler = VirtualScheduler::new(ms(16));

        let counter = count.clone();
        scheduler.on_interval(Duration::ZERO, Box::new(move || counter.set(counter.get() + 1)));
        scheduler.advance_to(ms(10));

        assert_eq!(count.get(), 10);
    }
}
