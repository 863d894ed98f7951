//! Item Identifiers
//!
//! Ids are ULIDs: a millisecond timestamp followed by 80 random bits, written
//! as 26 Crockford base32 characters. Collisions are negligible, not impossible.

use ulid::Ulid;

use crate::model::ItemId;

/// Source of fresh item ids, injected into the store
pub trait IdGenerator {
    /// Each call should return an id not returned before. An `add` that keeps
    /// drawing ids already in the list is dropped after a few attempts.
    fn next_id(&mut self) -> ItemId;
}

/// ULID generator, monotonic within one instance
#[derive(Debug, Default)]
pub struct UlidGenerator {
    last: Option<Ulid>,
}

impl UlidGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same-millisecond (or clock-skewed) calls increment the previous id
    fn next_ulid(&mut self, now_ms: u64) -> Ulid {
        let next = match self.last {
            Some(last) if last.timestamp_ms() >= now_ms => {
                last.increment().unwrap_or_else(|| self.fresh(now_ms))
            }
            _ => self.fresh(now_ms),
        };
        self.last = Some(next);
        next
    }

    fn fresh(&self, now_ms: u64) -> Ulid {
        let mut bytes = [0u8; 16];
        match getrandom::fill(&mut bytes) {
            Ok(()) => Ulid::from_parts(now_ms, u128::from_le_bytes(bytes)),
            Err(err) => {
                log::warn!("random source unavailable ({err}), deriving id from the previous one");
                self.last
                    .and_then(|last| last.increment())
                    .unwrap_or_else(|| Ulid::from_parts(now_ms, 0))
            }
        }
    }
}

impl IdGenerator for UlidGenerator {
    fn next_id(&mut self) -> ItemId {
        ItemId::new(self.next_ulid(now_ms()).to_string())
    }
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
