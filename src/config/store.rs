use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// `(domain, group, key)` address of one stored value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigKey {
    pub domain: String,
    pub group: String,
    pub key: String,
}

impl ConfigKey {
    #[must_use]
    pub fn new(
        domain: impl Into<String>,
        group: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            group: group.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.domain, self.group, self.key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigValue {
    String(String),
    I32(i32),
}

/// Receives store writes for a subscribed domain, synchronously.
pub trait ConfigListener {
    fn config_string_did_change(&mut self, key: &ConfigKey, value: &str);
    fn config_i32_did_change(&mut self, key: &ConfigKey, value: i32);
}

struct Subscriber {
    id: u64,
    domain: String,
    listener: Weak<RefCell<dyn ConfigListener>>,
}

#[derive(Default)]
struct StoreInner {
    values: IndexMap<ConfigKey, ConfigValue>,
    subscribers: Vec<Subscriber>,
    next_subscriber_id: u64,
}

/// Process-wide key/value configuration with change notification.
///
/// Cloning yields another handle to the same store. Listeners are held
/// weakly; a `ConfigSubscription` removes its entry when dropped.
#[derive(Clone, Default)]
pub struct ConfigStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ConfigStore")
            .field("values", &inner.values)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl ConfigStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
        self.inner.borrow().values.get(key).cloned()
    }

    /// Reads a string value; an integer entry is rendered in decimal.
    #[must_use]
    pub fn read_string(&self, domain: &str, group: &str, key: &str, default: &str) -> String {
        match self.get(&ConfigKey::new(domain, group, key)) {
            Some(ConfigValue::String(value)) => value,
            Some(ConfigValue::I32(value)) => value.to_string(),
            None => default.to_owned(),
        }
    }

    /// Reads an integer value; a string entry is parsed and falls back to `default`.
    #[must_use]
    pub fn read_i32(&self, domain: &str, group: &str, key: &str, default: i32) -> i32 {
        match self.get(&ConfigKey::new(domain, group, key)) {
            Some(ConfigValue::I32(value)) => value,
            Some(ConfigValue::String(value)) => value.trim().parse().unwrap_or(default),
            None => default,
        }
    }

    pub fn write_string(&self, domain: &str, group: &str, key: &str, value: impl Into<String>) {
        self.write(
            ConfigKey::new(domain, group, key),
            ConfigValue::String(value.into()),
        );
    }

    pub fn write_i32(&self, domain: &str, group: &str, key: &str, value: i32) {
        self.write(ConfigKey::new(domain, group, key), ConfigValue::I32(value));
    }

    /// Removes a value without notifying subscribers.
    pub fn remove(&self, domain: &str, group: &str, key: &str) -> Option<ConfigValue> {
        self.inner
            .borrow_mut()
            .values
            .shift_remove(&ConfigKey::new(domain, group, key))
    }

    /// Registers `listener` for writes under `domain`.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(
        &self,
        domain: &str,
        listener: Weak<RefCell<dyn ConfigListener>>,
    ) -> ConfigSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_subscriber_id;
        inner.next_subscriber_id += 1;
        inner.subscribers.push(Subscriber {
            id,
            domain: domain.to_owned(),
            listener,
        });
        debug!(id, domain, "config subscriber added");
        ConfigSubscription {
            store: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Subscribers whose listener is still alive.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .filter(|subscriber| subscriber.listener.strong_count() > 0)
            .count()
    }

    fn write(&self, key: ConfigKey, value: ConfigValue) {
        let listeners: Vec<_> = {
            let mut inner = self.inner.borrow_mut();
            if inner.values.get(&key) == Some(&value) {
                return;
            }
            inner.values.insert(key.clone(), value.clone());
            inner
                .subscribers
                .iter()
                .filter(|subscriber| subscriber.domain == key.domain)
                .map(|subscriber| subscriber.listener.clone())
                .collect()
        };

        for listener in listeners {
            let Some(listener) = listener.upgrade() else {
                continue;
            };
            let Ok(mut listener) = listener.try_borrow_mut() else {
                warn!(%key, "config listener is busy; skipping re-entrant notification");
                continue;
            };
            match &value {
                ConfigValue::String(text) => listener.config_string_did_change(&key, text),
                ConfigValue::I32(number) => listener.config_i32_did_change(&key, *number),
            }
        }

        self.inner
            .borrow_mut()
            .subscribers
            .retain(|subscriber| subscriber.listener.strong_count() > 0);
    }
}

/// Live registration with a `ConfigStore`; unsubscribes on drop.
#[derive(Debug)]
pub struct ConfigSubscription {
    store: Weak<RefCell<StoreInner>>,
    id: u64,
}

impl ConfigSubscription {
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// `false` once the store itself has been dropped.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.store.strong_count() > 0
    }
}

impl Drop for ConfigSubscription {
    fn drop(&mut self) {
        let Some(store) = self.store.upgrade() else {
            return;
        };
        // A busy store prunes the dead listener on its next write instead.
        if let Ok(mut inner) = store.try_borrow_mut() {
            inner
                .subscribers
                .retain(|subscriber| subscriber.id != self.id);
            debug!(id = self.id, "config subscriber removed");
        }
    }
}
