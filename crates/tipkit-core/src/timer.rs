#![forbid(unsafe_code)]

//! Single-slot deadline timer.
//!
//! A [`TimerSlot`] holds at most one scheduled payload. Scheduling always
//! evicts the previous occupant first, so two timers can never coexist and a
//! superseded timer can never fire.
//!
//! # Invariants
//!
//! 1. At most one occupant.
//! 2. [`TimerId`]s are strictly increasing per slot; an evicted id is never
//!    reissued.
//! 3. `fire_due` removes the occupant it returns.

use std::fmt;

/// Identifies one scheduled occupancy of a [`TimerSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Raw generation number.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct Pending<T> {
    id: TimerId,
    deadline_ms: u64,
    payload: T,
}

/// One logical timer that carries a payload until its deadline.
#[derive(Debug, Clone)]
pub struct TimerSlot<T> {
    pending: Option<Pending<T>>,
    next_id: u64,
}

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerSlot<T> {
    /// Create an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: None,
            next_id: 1,
        }
    }

    /// Schedule `payload` to fire at `now_ms + delay_ms`, evicting any
    /// current occupant.
    pub fn schedule(&mut self, payload: T, now_ms: u64, delay_ms: u64) -> TimerId {
        self.cancel();
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending = Some(Pending {
            id,
            deadline_ms: now_ms.saturating_add(delay_ms),
            payload,
        });
        id
    }

    /// Drop the occupant without firing it.
    pub fn cancel(&mut self) -> Option<TimerId> {
        self.pending.take().map(|p| p.id)
    }

    /// Take the occupant if its deadline has been reached.
    pub fn fire_due(&mut self, now_ms: u64) -> Option<(TimerId, T)> {
        if !self
            .pending
            .as_ref()
            .is_some_and(|p| p.deadline_ms <= now_ms)
        {
            return None;
        }
        self.pending.take().map(|p| (p.id, p.payload))
    }

    /// Deadline of the occupant, if any.
    #[inline]
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.deadline_ms)
    }

    /// Id of the occupant, if any.
    #[inline]
    #[must_use]
    pub fn pending_id(&self) -> Option<TimerId> {
        self.pending.as_ref().map(|p| p.id)
    }

    /// Payload of the occupant, if any.
    #[inline]
    #[must_use]
    pub fn payload(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.payload)
    }

    /// True if something is scheduled.
    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
