use std::collections::VecDeque;

use crate::{event::Event, time::Ticks};

/// A delta-list scheduler over named, optionally repeating events.
///
/// Entries are kept ordered by time-until-firing, stored as deltas: each
/// entry's `delay` is the offset from its predecessor's firing time, and the
/// head's is the offset from "now". Summing `delay` from the head through
/// position `k` yields the absolute remaining time of the `k`-th event.
/// Advancing the clock therefore only ever touches the head.
///
/// The queue is single-owner and single-threaded; no operation blocks, and
/// none can fail. Empty-queue ticks, removals of unknown names, and drains
/// with nothing due are all defined as no-ops.
#[derive(Debug, Default, derive_new::new)]
pub struct EventQueue {
    #[new(default)]
    events: VecDeque<Event>,
}

impl EventQueue {
    delegate::delegate! {
        to self.events {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
        }
    }

    /// Inserts `event`, interpreting its `delay` as the absolute offset from
    /// "now".
    ///
    /// The walk uses a strictly-greater comparison, so events with equal
    /// firing times stay in insertion order and drain in that order.
    pub fn queue(&mut self, mut event: Event) {
        let mut split = None;
        for (i, queued) in self.events.iter().enumerate() {
            if queued.delay > event.delay {
                split = Some(i);
                break;
            }
            event.delay -= queued.delay;
        }
        match split {
            Some(i) => {
                // The displaced entry keeps its absolute firing time.
                self.events[i].delay -= event.delay;
                self.events.insert(i, event);
            }
            None => self.events.push_back(event),
        }
    }

    /// Inserts `event` unless an entry with the same name is already queued.
    pub fn add(&mut self, event: Event) {
        if self.events.iter().any(|queued| queued.name == event.name) {
            return;
        }
        self.queue(event);
    }

    /// Advances logical time by `elapsed` ticks.
    ///
    /// Negative values are treated as zero. Only the head delta is mutated;
    /// the delta encoding shifts every entry's absolute firing time with it.
    pub fn tick(&mut self, elapsed: Ticks) {
        let elapsed = elapsed.max(Ticks::ZERO);
        if let Some(head) = self.events.front_mut() {
            head.delay -= elapsed;
        }
    }

    /// Removes the first entry (in queue order) named `name`, if any.
    pub fn remove(&mut self, name: &str) {
        let Some(i) = self.events.iter().position(|queued| queued.name == name) else {
            return;
        };
        if let Some(removed) = self.events.remove(i) {
            // Fold the removed delta into the successor so every entry
            // behind it keeps its absolute firing time.
            if let Some(next) = self.events.get_mut(i) {
                next.delay += removed.delay;
            }
        }
    }

    /// Pops the next due event, or `None` if nothing is due.
    ///
    /// A repeating event is re-armed before being returned: its next firing
    /// is the first multiple of `repeat` past its original due time that is
    /// still in the future, so however many intervals a large tick skipped,
    /// each drain yields it at most once. The returned record's `delay`
    /// holds the overdue amount (zero or negative).
    pub fn next_triggered(&mut self) -> Option<Event> {
        if !self.events.front().map_or(false, |head| head.delay.is_due()) {
            return None;
        }
        let event = self.events.pop_front()?;
        // The detached delta is part of every successor's cumulative
        // offset; fold it into the new head.
        if let Some(head) = self.events.front_mut() {
            head.delay += event.delay;
        }
        if event.is_repeating() {
            let mut next = event.clone();
            next.delay = next.repeat + event.delay;
            while next.delay.is_due() {
                next.delay += next.repeat;
            }
            self.queue(next);
        }
        Some(event)
    }

    /// Streams the currently-triggered set: every event whose cumulative
    /// delay has reached zero, in queue order. The iterator ending is the
    /// end-of-drain sentinel; events left undrained reappear on the next
    /// call.
    pub fn triggered_events(&mut self) -> Triggered<'_> {
        Triggered::new(self)
    }
}

/// Draining iterator returned by [`EventQueue::triggered_events`].
#[derive(Debug, derive_new::new)]
pub struct Triggered<'a> {
    queue: &'a mut EventQueue,
}

impl Iterator for Triggered<'_> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        self.queue.next_triggered()
    }
}
