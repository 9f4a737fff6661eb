//! Timer queue
//!
//! Deferred single-shot and recurring tasks for single-threaded widgets.
//!
//! The queue never reads a wall clock. The owner drives time forward by
//! draining due tasks with [`TimerQueue::pop_due`]; while a task is being
//! handed out, [`TimerQueue::now`] reports that task's due time, so timers
//! scheduled from inside a handler are relative to the moment it fired.
//!
//! Tasks are plain values (usually a small `enum`) rather than closures, so
//! the owner dispatches them with full `&mut` access to its own state.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a scheduled timer
    pub struct TimerId;
}

#[derive(Clone, Debug)]
struct TimerEntry<T> {
    due_ms: u64,
    /// Recurring period; `None` for single-shot timers
    period_ms: Option<u64>,
    /// Scheduling order, breaks ties between timers due at the same instant
    seq: u64,
    task: T,
}

/// A queue of timed tasks driven by an explicit clock
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    timers: SlotMap<TimerId, TimerEntry<T>>,
    now_ms: u64,
    next_seq: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            now_ms: 0,
            next_seq: 0,
        }
    }

    /// Current queue time in milliseconds
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    /// Number of scheduled timers
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    fn schedule(&mut self, delay_ms: u64, period_ms: Option<u64>, task: T) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.insert(TimerEntry {
            due_ms: self.now_ms.saturating_add(delay_ms),
            period_ms,
            seq,
            task,
        })
    }

    /// Run `task` once, `delay_ms` from now
    pub fn set_timeout(&mut self, delay_ms: u64, task: T) -> TimerId {
        self.schedule(delay_ms, None, task)
    }

    /// Run `task` every `period_ms`, first firing one period from now
    ///
    /// A zero period is treated as one millisecond so a recurring timer can
    /// never starve the queue.
    pub fn set_interval(&mut self, period_ms: u64, task: T) -> TimerId {
        let period = period_ms.max(1);
        self.schedule(period, Some(period), task)
    }

    /// Cancel a timer. Returns false if it was not scheduled.
    pub fn clear(&mut self, id: TimerId) -> bool {
        self.timers.remove(id).is_some()
    }

    /// Due time of a scheduled timer
    pub fn due_at(&self, id: TimerId) -> Option<u64> {
        self.timers.get(id).map(|t| t.due_ms)
    }

    /// Scheduled tasks, in no particular order
    pub fn tasks(&self) -> impl Iterator<Item = (TimerId, &T)> {
        self.timers.iter().map(|(id, t)| (id, &t.task))
    }

    /// Move the clock forward without firing anything
    ///
    /// Time never runs backwards; earlier instants are ignored.
    pub fn advance_to(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}

impl<T: Clone> TimerQueue<T> {
    /// Take the earliest task due at or before `until_ms`
    ///
    /// The clock moves to the task's due time. Single-shot timers are
    /// removed; recurring timers are rescheduled one period later and keep
    /// their [`TimerId`]. Returns `None` once nothing else is due; the
    /// caller then settles the clock with [`advance_to`](Self::advance_to).
    pub fn pop_due(&mut self, until_ms: u64) -> Option<(TimerId, T)> {
        let (id, due_ms) = self
            .timers
            .iter()
            .filter(|(_, t)| t.due_ms <= until_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.seq))
            .map(|(id, t)| (id, t.due_ms))?;

        self.now_ms = self.now_ms.max(due_ms);

        let Some(period) = self.timers[id].period_ms else {
            return self.timers.remove(id).map(|t| (id, t.task));
        };
        let seq = self.next_seq;
        self.next_seq += 1;
        let entry = &mut self.timers[id];
        entry.due_ms = due_ms.saturating_add(period);
        entry.seq = seq;
        Some((id, entry.task.clone()))
    }
}
