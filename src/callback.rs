//! Callback abstraction for caller-supplied handlers
//!
//! Wraps the `Option<Box<dyn FnMut(T)>>` pattern so optional handlers
//! (`on_image_index_change`, `on_long_press`, ...) can be stored and invoked
//! without repeating the boxing and `None` checks everywhere.
//!
//! # Examples
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use lightbox::Callback;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let mut on_change = Callback::new({
//!     let seen = Rc::clone(&seen);
//!     move |index: usize| seen.borrow_mut().push(index)
//! });
//! assert!(on_change.call(3));
//! assert_eq!(*seen.borrow(), vec![3]);
//!
//! let mut unset: Callback<usize> = Callback::none();
//! assert!(!unset.call(1));
//! ```

use std::fmt;

/// An optional event handler receiving values of type `T`.
pub struct Callback<T> {
    f: Option<Box<dyn FnMut(T)>>,
}

impl<T> Callback<T> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut(T) + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the callback with a value, if it exists.
    ///
    /// Returns `true` if a handler was registered and invoked.
    pub fn call(&mut self, value: T) -> bool {
        match self.f.as_mut() {
            Some(f) => {
                f(value);
                true
            }
            None => false,
        }
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if the callback is not set.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T> Default for Callback<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("is_set", &self.is_some())
            .finish()
    }
}
