use log::{debug, info, warn};

use crate::config::GateConfig;
use crate::storage::KeyValueStore;

const ACKNOWLEDGED_VALUE: &str = "true";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateStart {
    ShowAfter(u32),
    Suppressed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GatePoll {
    Show,
    Wait(u32),
    Idle,
}

pub struct DisclaimerGate<S> {
    store: S,
    config: GateConfig,
    deadline: Option<i64>,
    visible: bool,
    acknowledged: bool,
}

impl<S: KeyValueStore> DisclaimerGate<S> {
    pub fn start(store: S, config: GateConfig, now_ms: i64) -> (Self, GateStart) {
        let seen = match store.get(config.storage_key) {
            Ok(value) => value.map_or(false, |v| !v.is_empty()),
            Err(e) => {
                warn!("Could not read disclaimer flag, treating as unseen: {}", e);
                false
            }
        };

        let mut gate = Self {
            store,
            config,
            deadline: None,
            visible: false,
            acknowledged: seen,
        };

        if seen {
            debug!("Disclaimer already acknowledged on this client");
            return (gate, GateStart::Suppressed);
        }

        gate.deadline = Some(now_ms + i64::from(config.delay_ms));
        debug!("Disclaimer scheduled in {}ms", config.delay_ms);
        (gate, GateStart::ShowAfter(config.delay_ms))
    }

    pub fn poll(&mut self, now_ms: i64) -> GatePoll {
        let deadline = match self.deadline {
            Some(deadline) if !self.acknowledged => deadline,
            _ => return GatePoll::Idle,
        };

        if now_ms < deadline {
            let remaining = u32::try_from(deadline - now_ms).unwrap_or(self.config.delay_ms);
            return GatePoll::Wait(remaining);
        }

        self.deadline = None;
        self.visible = true;
        info!("Showing legal disclaimer");
        GatePoll::Show
    }

    pub fn acknowledge(&mut self) {
        if self.acknowledged {
            return;
        }
        self.acknowledged = true;
        self.deadline = None;
        self.visible = false;

        match self.store.set(self.config.storage_key, ACKNOWLEDGED_VALUE) {
            Ok(()) => info!("Disclaimer acknowledged"),
            Err(e) => warn!("Could not persist disclaimer flag, it may show again: {}", e),
        }
    }

    pub fn cancel(&mut self) {
        if self.deadline.take().is_some() {
            debug!("Pending disclaimer cancelled");
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[cfg(test)]
    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DISCLAIMER_STORAGE_KEY;
    use crate::storage::memory::{BrokenStore, MemoryStore};

    const T0: i64 = 1_700_000_000_000;

    fn start(store: MemoryStore) -> (DisclaimerGate<MemoryStore>, GateStart) {
        DisclaimerGate::start(store, GateConfig::default(), T0)
    }

    #[test]
    fn first_visit_shows_after_delay() {
        let store = MemoryStore::default();
        let (mut gate, schedule) = start(store.clone());
        assert_eq!(schedule, GateStart::ShowAfter(1500));
        assert!(!gate.is_visible());

        assert_eq!(gate.poll(T0 + 1400), GatePoll::Wait(100));
        assert!(!gate.is_visible());

        assert_eq!(gate.poll(T0 + 1600), GatePoll::Show);
        assert!(gate.is_visible());

        gate.acknowledge();
        assert!(!gate.is_visible());
        assert_eq!(store.get(DISCLAIMER_STORAGE_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn shows_exactly_at_deadline() {
        let (mut gate, _) = start(MemoryStore::default());
        assert_eq!(gate.poll(T0 + 1499), GatePoll::Wait(1));
        assert_eq!(gate.poll(T0 + 1500), GatePoll::Show);
        assert_eq!(gate.poll(T0 + 1501), GatePoll::Idle);
        assert!(gate.is_visible());
    }

    #[test]
    fn early_acknowledge_prevents_showing() {
        let store = MemoryStore::default();
        let (mut gate, _) = start(store.clone());
        gate.acknowledge();

        assert_eq!(gate.poll(T0 + 1500), GatePoll::Idle);
        assert_eq!(gate.poll(T0 + 60_000), GatePoll::Idle);
        assert!(!gate.is_visible());
        assert!(gate.is_acknowledged());
    }

    #[test]
    fn acknowledged_client_is_never_shown() {
        let store = MemoryStore::default();
        let (mut gate, _) = start(store.clone());
        gate.poll(T0 + 1500);
        gate.acknowledge();

        let (mut reloaded, schedule) = start(store.clone());
        assert_eq!(schedule, GateStart::Suppressed);
        for elapsed in [0, 1500, 10_000, 3_600_000] {
            assert_eq!(reloaded.poll(T0 + elapsed), GatePoll::Idle);
            assert!(!reloaded.is_visible());
        }
    }

    #[test]
    fn preexisting_flag_suppresses_gate() {
        let store = MemoryStore::with(DISCLAIMER_STORAGE_KEY, "true");
        let (mut gate, schedule) = start(store);
        assert_eq!(schedule, GateStart::Suppressed);
        assert!(gate.is_acknowledged());
        assert_eq!(gate.poll(T0 + 100_000), GatePoll::Idle);
        assert!(!gate.is_visible());
    }

    #[test]
    fn any_non_empty_value_counts_as_seen() {
        let (_, schedule) = start(MemoryStore::with(DISCLAIMER_STORAGE_KEY, "1"));
        assert_eq!(schedule, GateStart::Suppressed);

        let (_, schedule) = start(MemoryStore::with(DISCLAIMER_STORAGE_KEY, ""));
        assert_eq!(schedule, GateStart::ShowAfter(1500));
    }

    #[test]
    fn acknowledge_is_idempotent() {
        let store = MemoryStore::default();
        let (mut gate, _) = start(store.clone());
        gate.poll(T0 + 2000);
        gate.acknowledge();
        gate.acknowledge();
        gate.acknowledge();
        assert_eq!(store.writes(), 1);
        assert!(!gate.is_visible());
    }

    #[test]
    fn cancel_stops_pending_show() {
        let (mut gate, _) = start(MemoryStore::default());
        gate.cancel();
        assert_eq!(gate.poll(T0 + 5000), GatePoll::Idle);
        assert!(!gate.is_visible());
        assert!(!gate.is_acknowledged());
    }

    #[test]
    fn clearing_storage_resets_gate() {
        let store = MemoryStore::default();
        let (mut gate, _) = start(store.clone());
        gate.acknowledge();
        store.clear();

        let (_, schedule) = start(store);
        assert_eq!(schedule, GateStart::ShowAfter(1500));
    }

    #[test]
    fn broken_storage_fails_open() {
        let (mut gate, schedule) = DisclaimerGate::start(BrokenStore, GateConfig::default(), T0);
        assert_eq!(schedule, GateStart::ShowAfter(1500));
        assert_eq!(gate.poll(T0 + 1500), GatePoll::Show);

        gate.acknowledge();
        assert!(!gate.is_visible());
        assert!(gate.is_acknowledged());
    }

    #[test]
    fn delay_and_key_are_configurable() {
        let store = MemoryStore::default();
        let config = GateConfig { delay_ms: 10, storage_key: "seen" };
        let (mut gate, schedule) = DisclaimerGate::start(store.clone(), config, T0);
        assert_eq!(schedule, GateStart::ShowAfter(10));
        assert_eq!(gate.poll(T0 + 10), GatePoll::Show);
        gate.acknowledge();
        assert!(store.get("seen").unwrap().is_some());
        assert!(store.get(DISCLAIMER_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn visibility_changes_only_through_poll_and_acknowledge() {
        let (mut gate, _) = start(MemoryStore::default());
        assert!(!gate.is_visible());
        gate.poll(T0 + 100);
        assert!(!gate.is_visible());
        gate.poll(T0 + 1500);
        assert!(gate.is_visible());
        gate.cancel();
        assert!(gate.is_visible());
        gate.acknowledge();
        assert!(!gate.is_visible());
        gate.poll(T0 + 10_000);
        assert!(!gate.is_visible());
    }
}
