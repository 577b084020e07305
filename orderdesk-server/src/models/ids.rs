//! Record identifiers derived from the wall clock
//!
//! Ids are the last six decimal digits of the current epoch-millisecond
//! timestamp. Within one process consecutive ids never repeat; across
//! processes nothing is guaranteed and the primary key catches collisions.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Ids wrap at one million (six digits)
pub const ID_MODULUS: u64 = 1_000_000;

/// Sentinel meaning "nothing issued yet"
const UNSET: u64 = u64::MAX;

/// Hands out timestamp-fragment ids
#[derive(Debug)]
pub struct IdGenerator {
    last: AtomicU64,
    /// Epoch milliseconds
    clock: fn() -> u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::with_clock(|| Utc::now().timestamp_millis().unsigned_abs())
    }

    /// Generator reading epoch milliseconds from `clock`.
    pub fn with_clock(clock: fn() -> u64) -> Self {
        Self {
            last: AtomicU64::new(UNSET),
            clock,
        }
    }

    /// Next raw fragment in `0..ID_MODULUS`.
    pub fn next_fragment(&self) -> u64 {
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let now = (self.clock)() % ID_MODULUS;
            let candidate = if last == UNSET || now > last {
                now
            } else {
                (last + 1) % ID_MODULUS
            };

            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }

    /// Company ids are the fragment as a zero-padded six character string.
    pub fn next_company_id(&self) -> String {
        format!("{:06}", self.next_fragment())
    }

    /// Order numbers are the fragment as an integer.
    pub fn next_order_num(&self) -> i64 {
        self.next_fragment() as i64
    }
}
