use std::rc::Rc;

use crate::observable::{
    observer::{AnyObserver, Observer},
    teardown::Teardown,
    Observable,
};

impl<T: 'static> Observable<T> {
    /// Transforms every upstream value with `transform`, in emission order.
    ///
    /// The returned observable is as lazy as its upstream: connecting it
    /// creates exactly one upstream subscription, and its teardown is that
    /// subscription's unsubscribe. `transform` runs synchronously, once per
    /// value; anything it panics with propagates to whoever pushed the value.
    pub fn map<U: 'static>(&self, transform: impl Fn(T) -> U + 'static) -> Observable<U> {
        let upstream = self.clone();
        let transform = Rc::new(transform);

        Observable::new(move |observer: AnyObserver<U>| {
            let transform = Rc::clone(&transform);
            let subscription = upstream.connect(AnyObserver::new(move |value| {
                observer.next(transform(value));
            }));

            Teardown::from(subscription)
        })
    }
}
