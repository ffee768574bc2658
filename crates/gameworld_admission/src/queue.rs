use std::time::Instant;

use indexmap::IndexMap;

use crate::retry::{expiry_timeout, retry_wait_seconds};

pub type Guid = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AdmissionEntry {
    expiry: Instant,
}

/// Which sublist a player would join (or already occupies).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum List {
    Priority,
    Standard,
}

/// What the caller asked admission to decide for.
#[derive(Debug, Clone, Copy)]
pub struct AdmissionRequest {
    pub guid: Guid,
    pub premium: bool,
    /// Staff accounts and other always-admit privilege holders.
    pub always_admit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionOutcome {
    Admit,
    Deferred { slot: u32, retry_after_secs: u64 },
}

/// Two ordered lists — `priority` for premium accounts, `standard` for
/// everyone else — each an `IndexMap` so a guid's membership can be
/// checked in O(1) while FIFO order is preserved for sweeps and slot
/// arithmetic.
#[derive(Debug, Default)]
pub struct AdmissionQueue {
    priority: IndexMap<Guid, AdmissionEntry>,
    standard: IndexMap<Guid, AdmissionEntry>,
}

impl AdmissionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.priority.len() + self.standard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.priority.is_empty() && self.standard.is_empty()
    }

    /// Drops every entry whose expiry has passed. Must run before any
    /// admission check so slot numbers reflect only live entries.
    pub fn sweep(&mut self, now: Instant) {
        self.priority.retain(|_, e| e.expiry > now);
        self.standard.retain(|_, e| e.expiry > now);
    }

    fn locate(&self, guid: Guid) -> Option<(List, usize)> {
        if let Some(idx) = self.priority.get_index_of(&guid) {
            return Some((List::Priority, idx));
        }
        self.standard
            .get_index_of(&guid)
            .map(|idx| (List::Standard, idx))
    }

    /// Number of entries that would be admitted strictly before this
    /// position — the priority list drains fully before standard, so a
    /// standard-list slot carries the whole priority list's length ahead
    /// of it.
    fn slot_for(&self, list: List, index_in_list: usize) -> u32 {
        let ahead = match list {
            List::Priority => index_in_list,
            List::Standard => self.priority.len() + index_in_list,
        };
        ahead as u32
    }

    /// Runs the full admission algorithm for one player. Callers must have
    /// already resolved `online_count` and `cap` (0 = unlimited) from the
    /// world's live state; this function touches nothing but its own
    /// lists and the clock value passed in.
    pub fn check(
        &mut self,
        req: AdmissionRequest,
        online_count: u32,
        cap: u32,
        now: Instant,
    ) -> AdmissionOutcome {
        if req.always_admit {
            return AdmissionOutcome::Admit;
        }

        self.sweep(now);

        if cap == 0 || (self.is_empty() && online_count < cap) {
            return AdmissionOutcome::Admit;
        }

        if let Some((list, index_in_list)) = self.locate(req.guid) {
            let slot = self.slot_for(list, index_in_list);
            if online_count + slot <= cap {
                match list {
                    List::Priority => {
                        self.priority.shift_remove(&req.guid);
                    }
                    List::Standard => {
                        self.standard.shift_remove(&req.guid);
                    }
                }
                return AdmissionOutcome::Admit;
            }

            let entry = match list {
                List::Priority => self.priority.get_mut(&req.guid),
                List::Standard => self.standard.get_mut(&req.guid),
            }
            .expect("slot was just located in this list");
            entry.expiry = now + expiry_timeout(slot);

            return AdmissionOutcome::Deferred {
                slot,
                retry_after_secs: retry_wait_seconds(slot),
            };
        }

        let list = if req.premium {
            &mut self.priority
        } else {
            &mut self.standard
        };
        let index_in_list = list.len();
        let list_tag = if req.premium {
            List::Priority
        } else {
            List::Standard
        };
        let slot = self.slot_for(list_tag, index_in_list);
        list.insert(
            req.guid,
            AdmissionEntry {
                expiry: now + expiry_timeout(slot),
            },
        );

        AdmissionOutcome::Deferred {
            slot,
            retry_after_secs: retry_wait_seconds(slot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn req(guid: Guid, premium: bool) -> AdmissionRequest {
        AdmissionRequest { guid, premium, always_admit: false }
    }

    #[test]
    fn admits_immediately_under_capacity() {
        let mut q = AdmissionQueue::new();
        let now = Instant::now();
        let outcome = q.check(req(1, false), 0, 10, now);
        assert_eq!(outcome, AdmissionOutcome::Admit);
        assert!(q.is_empty());
    }

    #[test]
    fn always_admit_bypasses_everything() {
        let mut q = AdmissionQueue::new();
        let now = Instant::now();
        let mut vip = req(1, false);
        vip.always_admit = true;
        assert_eq!(q.check(vip, 999, 1, now), AdmissionOutcome::Admit);
    }

    #[test]
    fn defers_when_saturated_and_tracks_slot() {
        let mut q = AdmissionQueue::new();
        let now = Instant::now();
        let outcome = q.check(req(1, false), 1, 1, now);
        assert_eq!(
            outcome,
            AdmissionOutcome::Deferred { slot: 0, retry_after_secs: 5 }
        );
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn priority_list_drains_before_standard() {
        let mut q = AdmissionQueue::new();
        let now = Instant::now();
        // one priority, one standard entry queued while saturated
        q.check(req(1, true), 5, 5, now);
        let outcome = q.check(req(2, false), 5, 5, now);
        assert_eq!(
            outcome,
            AdmissionOutcome::Deferred { slot: 1, retry_after_secs: 5 }
        );
    }

    #[test]
    fn retrying_client_is_admitted_once_capacity_frees() {
        let mut q = AdmissionQueue::new();
        let now = Instant::now();
        q.check(req(1, false), 5, 5, now);
        // capacity freed up: online_count dropped to 4
        let outcome = q.check(req(1, false), 4, 5, now + Duration::from_secs(1));
        assert_eq!(outcome, AdmissionOutcome::Admit);
        assert!(q.is_empty());
    }

    #[test]
    fn sweep_drops_expired_entries() {
        let mut q = AdmissionQueue::new();
        let now = Instant::now();
        q.check(req(1, false), 5, 5, now);
        assert_eq!(q.len(), 1);
        q.sweep(now + Duration::from_secs(3600));
        assert!(q.is_empty());
    }

    #[test]
    fn no_player_appears_twice() {
        let mut q = AdmissionQueue::new();
        let now = Instant::now();
        q.check(req(1, false), 5, 5, now);
        q.check(req(1, false), 5, 5, now);
        assert_eq!(q.len(), 1);
    }
}
