//! Completion counting for one dispatch.
//!
//! The counter starts at the number of dispatched workers. Each worker holds
//! an [`Arrival`] guard that decrements on drop, so a worker that unwinds
//! still arrives and the caller is never left waiting on it.

use std::hint;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Condvar, Mutex, PoisonError};
use std::thread;

use crate::config::WaitStrategy;

/// Spins between `yield_now` calls while waiting.
const SPINS_PER_YIELD: u32 = 64;

/// Countdown shared by the workers of one dispatch and the calling thread.
#[derive(Debug)]
pub struct CompletionCounter {
    remaining: AtomicUsize,
    lock: Mutex<()>,
    zero: Condvar,
}

impl CompletionCounter {
    /// Creates a counter expecting `count` arrivals.
    pub fn new(count: usize) -> Self {
        Self {
            remaining: AtomicUsize::new(count),
            lock: Mutex::new(()),
            zero: Condvar::new(),
        }
    }

    /// Arrivals still outstanding.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::Acquire)
    }

    /// Returns a guard that arrives when dropped.
    #[inline]
    pub fn arrival(&self) -> Arrival<'_> {
        Arrival { counter: self }
    }

    /// Records one arrival.
    pub fn arrive(&self) {
        if self.remaining.fetch_sub(1, Ordering::AcqRel) == 1 {
            // Last one in: wake a blocked waiter. Taking the lock orders the
            // notify after the waiter's check.
            let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
            self.zero.notify_all();
        }
    }

    /// Waits until every expected arrival happened.
    pub fn wait(&self, strategy: WaitStrategy) {
        match strategy {
            WaitStrategy::Spin => self.spin(),
            WaitStrategy::Block => self.block(),
        }
    }

    fn spin(&self) {
        let mut spins = 0u32;
        while self.remaining() != 0 {
            spins = spins.wrapping_add(1);
            if spins % SPINS_PER_YIELD == 0 {
                thread::yield_now();
            } else {
                hint::spin_loop();
            }
        }
    }

    fn block(&self) {
        let mut guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        while self.remaining() != 0 {
            guard = self
                .zero
                .wait(guard)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }
}

/// Arrives at its [`CompletionCounter`] on drop.
#[derive(Debug)]
pub struct Arrival<'a> {
    counter: &'a CompletionCounter,
}

impl Drop for Arrival<'_> {
    fn drop(&mut self) {
        self.counter.arrive();
    }
}
