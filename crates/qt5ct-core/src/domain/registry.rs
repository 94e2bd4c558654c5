//! StyleInstanceRegistry: live style objects that must reload on change.
//!
//! Every style created by the platform theme registers itself here when it is
//! constructed.  When the user saves new settings, the owner of the registry
//! calls [`StyleInstanceRegistry::reload_style_instance_settings`] and every
//! style still alive re-reads its configuration.
//!
//! # Ownership (for beginners)
//!
//! The registry never owns a style.  It keeps a [`Weak`] reference, which
//! does not keep the value alive: once the last [`Rc`] to a style is dropped,
//! upgrading the weak reference fails and the entry is pruned on the next
//! broadcast.  Callers refer to registrations by an opaque [`InstanceId`]
//! rather than by pointer, so there is nothing that can dangle.
//!
//! # Threading
//!
//! `Rc` and `RefCell` are not thread-safe, which makes the registry `!Send`
//! and `!Sync`.  The compiler therefore rejects any attempt to share it
//! between threads; it is meant to live on the UI thread next to the styles.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, warn};
use uuid::Uuid;

/// A consumer of qt5ct settings that can be told to re-read them.
#[cfg_attr(test, mockall::automock)]
pub trait StyleInstance {
    /// Re-reads settings from disk and applies them.
    fn reload_settings(&mut self);
}

/// Opaque handle returned by [`StyleInstanceRegistry::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(Uuid);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

struct Registration {
    /// Address of the registered value, used for identity checks.
    addr: *const (),
    instance: Weak<RefCell<dyn StyleInstance>>,
}

impl Registration {
    fn is_alive(&self) -> bool {
        self.instance.strong_count() > 0
    }
}

/// Set of style instances keyed by [`InstanceId`].
///
/// Iteration order during a broadcast is unspecified.
#[derive(Default)]
pub struct StyleInstanceRegistry {
    instances: HashMap<InstanceId, Registration>,
}

impl StyleInstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `instance` to the registry.
    ///
    /// Registering a value that is already present returns its existing id.
    pub fn register<T: StyleInstance + 'static>(&mut self, instance: &Rc<RefCell<T>>) -> InstanceId {
        let addr = Rc::as_ptr(instance) as *const ();
        if let Some((id, _)) = self
            .instances
            .iter()
            .find(|(_, reg)| reg.addr == addr && reg.is_alive())
        {
            return *id;
        }

        let weak: Weak<RefCell<T>> = Rc::downgrade(instance);
        let weak: Weak<RefCell<dyn StyleInstance>> = weak;
        let id = InstanceId(Uuid::new_v4());
        self.instances.insert(
            id,
            Registration {
                addr,
                instance: weak,
            },
        );
        debug!(%id, "style instance registered");
        id
    }

    /// Removes a registration.  Returns `false` if `id` was not registered.
    pub fn unregister(&mut self, id: InstanceId) -> bool {
        let removed = self.instances.remove(&id).is_some();
        if removed {
            debug!(%id, "style instance unregistered");
        }
        removed
    }

    /// Returns `true` if `id` is registered and its instance is still alive.
    pub fn contains(&self, id: InstanceId) -> bool {
        self.instances.get(&id).is_some_and(Registration::is_alive)
    }

    /// Number of registrations whose instance is still alive.
    pub fn len(&self) -> usize {
        self.instances.values().filter(|reg| reg.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls [`StyleInstance::reload_settings`] on every live instance.
    ///
    /// Entries whose instance has been dropped are removed.  An instance that
    /// is already mutably borrowed (a reload triggered from inside its own
    /// reload) is skipped.  Returns the number of instances reloaded.
    pub fn reload_style_instance_settings(&mut self) -> usize {
        self.instances.retain(|_, reg| reg.is_alive());

        let mut reloaded = 0;
        for (id, reg) in &self.instances {
            let Some(instance) = reg.instance.upgrade() else {
                continue;
            };
            let Ok(mut style) = instance.try_borrow_mut() else {
                warn!(%id, "style instance busy; reload skipped");
                continue;
            };
            style.reload_settings();
            reloaded += 1;
        }
        reloaded
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn expecting_reloads(times: usize) -> Rc<RefCell<MockStyleInstance>> {
        let mut mock = MockStyleInstance::new();
        mock.expect_reload_settings().times(times).return_const(());
        Rc::new(RefCell::new(mock))
    }

    #[test]
    fn test_registry_starts_empty() {
        let registry = StyleInstanceRegistry::new();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_broadcast_with_no_instances_is_noop() {
        let mut registry = StyleInstanceRegistry::new();
        assert_eq!(registry.reload_style_instance_settings(), 0);
    }

    #[test]
    fn test_broadcast_reaches_every_instance() {
        // Arrange
        let mut registry = StyleInstanceRegistry::new();
        let first = expecting_reloads(1);
        let second = expecting_reloads(1);
        registry.register(&first);
        registry.register(&second);

        // Act
        let reloaded = registry.reload_style_instance_settings();

        // Assert: mock expectations are checked when the mocks drop.
        assert_eq!(reloaded, 2);
    }

    #[test]
    fn test_unregistered_instance_is_not_reloaded() {
        // Arrange
        let mut registry = StyleInstanceRegistry::new();
        let kept = expecting_reloads(1);
        let removed = expecting_reloads(0);
        registry.register(&kept);
        let removed_id = registry.register(&removed);

        // Act
        assert!(registry.unregister(removed_id));
        let reloaded = registry.reload_style_instance_settings();

        // Assert
        assert_eq!(reloaded, 1);
        assert!(!registry.contains(removed_id));
    }

    #[test]
    fn test_unregister_unknown_id_returns_false() {
        let mut registry = StyleInstanceRegistry::new();
        let instance = expecting_reloads(0);
        let id = registry.register(&instance);
        assert!(registry.unregister(id));
        assert!(!registry.unregister(id));
    }

    #[test]
    fn test_registering_twice_keeps_one_entry() {
        let mut registry = StyleInstanceRegistry::new();
        let instance = expecting_reloads(1);

        let a = registry.register(&instance);
        let b = registry.register(&instance);

        assert_eq!(a, b);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.reload_style_instance_settings(), 1);
    }

    #[test]
    fn test_dropped_instance_is_pruned() {
        // Arrange
        let mut registry = StyleInstanceRegistry::new();
        let instance = expecting_reloads(0);
        let id = registry.register(&instance);

        // Act
        drop(instance);

        // Assert
        assert!(!registry.contains(id));
        assert_eq!(registry.reload_style_instance_settings(), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_busy_instance_is_skipped() {
        let mut registry = StyleInstanceRegistry::new();
        let instance = expecting_reloads(0);
        registry.register(&instance);

        let _guard = instance.borrow_mut();
        assert_eq!(registry.reload_style_instance_settings(), 0);
    }
}
