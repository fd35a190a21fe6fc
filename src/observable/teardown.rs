use super::subscription::Subscription;

/// A cleanup action invoked at most once when a connection is torn down.
///
/// A connect function always returns a valid teardown; producers that
/// acquired nothing return [`Teardown::noop`].
pub struct Teardown {
    action: Option<Box<dyn FnOnce()>>,
}

impl Teardown {
    pub fn new(action: impl FnOnce() + 'static) -> Self {
        Self {
            action: Some(Box::new(action)),
        }
    }

    /// The canonical "no cleanup needed" action.
    pub fn noop() -> Self {
        Self { action: None }
    }

    pub(crate) fn call(self) {
        if let Some(action) = self.action {
            action();
        }
    }
}

impl From<Subscription> for Teardown {
    /// An operator's teardown is exactly its upstream subscription's
    /// unsubscribe.
    fn from(upstream: Subscription) -> Self {
        Teardown::new(move || upstream.unsubscribe())
    }
}
