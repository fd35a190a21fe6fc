use std::cell::RefCell;

/// The live handle for one connection of an
/// [`Observable`](crate::observable::Observable).
///
/// A subscription owns its teardown action and, through the action's
/// environment, a strong reference up the observable chain: the chain stays
/// alive at least until the subscription is unsubscribed or dropped. Nothing
/// up the chain ever references the subscription back, so no cycle can form.
///
/// Dropping a subscription releases the chain without running the teardown
/// action; [`unsubscribe`](Subscription::unsubscribe) is the only operation
/// that runs it. A torn-down subscription is terminal.
#[must_use = "dropping a Subscription releases the observable chain without tearing it down"]
pub struct Subscription {
    teardown: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl Subscription {
    pub(crate) fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: RefCell::new(Some(Box::new(teardown))),
        }
    }

    /// Runs the teardown action and releases the upstream chain.
    ///
    /// Idempotent: repeated calls do nothing. The teardown slot is emptied
    /// before the action runs, so unsubscribing again from inside a `next`
    /// callback, or from inside the teardown itself, is safe.
    pub fn unsubscribe(&self) {
        let teardown = self.teardown.borrow_mut().take();

        if let Some(teardown) = teardown {
            teardown();
        }
    }
}
