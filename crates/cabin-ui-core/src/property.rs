//! Reactive properties for Cabin UI.
//!
//! A [`Property`] wraps a value and reports whether a `set()` actually changed
//! it. Widgets pair properties with a [`Signal`](crate::Signal) and emit only
//! when the value changed.
//!
//! # Example
//!
//! ```
//! use cabin_ui_core::{Property, Signal};
//!
//! struct Header {
//!     title: Property<Option<String>>,
//!     title_changed: Signal<Option<String>>,
//! }
//!
//! impl Header {
//!     fn set_title(&self, title: Option<String>) {
//!         if self.title.set(title.clone()) {
//!             self.title_changed.emit(title);
//!         }
//!     }
//! }
//!
//! let header = Header {
//!     title: Property::new(None),
//!     title_changed: Signal::new(),
//! };
//! header.set_title(Some("Media".to_string()));
//! assert_eq!(header.title.get().as_deref(), Some("Media"));
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A reactive property that tracks changes.
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// whenever `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    ///
    /// This clones the value. For large types, consider using `with()` instead.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_property_set_detects_change() {
        let prop = Property::new(Some("Radio".to_string()));

        assert!(!prop.set(Some("Radio".to_string())));
        assert!(prop.set(None));
        assert_eq!(prop.get(), None);
    }

    #[test]
    fn test_property_with_closure() {
        let prop = Property::new(vec!["a".to_string(), "bb".to_string()]);
        let total: usize = prop.with(|v| v.iter().map(String::len).sum());
        assert_eq!(total, 3);
    }

    #[test]
    fn test_property_shared_between_threads() {
        let prop = Arc::new(Property::new(0));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let prop = prop.clone();
                std::thread::spawn(move || {
                    prop.set(i);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert!((0..4).contains(&prop.get()));
    }
}
