use std::rc::Rc;

/// A sink capability: receives values pushed by a connect function.
pub trait Observer {
    type Item;

    fn next(&self, value: Self::Item);
}

/// A type-erased [`Observer`] over any `Fn(T)`.
///
/// Serves both as the terminal sink built by
/// [`Observable::subscribe`](crate::observable::Observable::subscribe) and as
/// the intermediate sink operators synthesize. Clones are cheap and share
/// identity with the original (see [`ptr_eq`](AnyObserver::ptr_eq)), which is
/// what lets multi-observer producers remove one specific registration at
/// teardown.
///
/// Carries no teardown logic of its own; cleanup always lives in the
/// [`Teardown`](crate::observable::teardown::Teardown) returned by the
/// connect function.
pub struct AnyObserver<T> {
    next: Rc<dyn Fn(T)>,
}

impl<T> AnyObserver<T> {
    pub fn new(next: impl Fn(T) + 'static) -> Self {
        Self {
            next: Rc::new(next),
        }
    }

    /// Reference identity: true when `self` and `other` are clones of the
    /// same observer.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.next, &other.next)
    }
}

impl<T> Observer for AnyObserver<T> {
    type Item = T;

    fn next(&self, value: T) {
        (self.next)(value)
    }
}

impl<T> Clone for AnyObserver<T> {
    fn clone(&self) -> Self {
        Self {
            next: Rc::clone(&self.next),
        }
    }
}
