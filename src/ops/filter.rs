use std::rc::Rc;

use crate::observable::{
    observer::{AnyObserver, Observer},
    teardown::Teardown,
    Observable,
};

impl<T: 'static> Observable<T> {
    /// Forwards only the upstream values for which `predicate` returns true.
    ///
    /// Non-matching values are dropped silently; matching values keep their
    /// emission order. Laziness and ownership behave exactly as in
    /// [`map`](Observable::map).
    pub fn filter(&self, predicate: impl Fn(&T) -> bool + 'static) -> Observable<T> {
        let upstream = self.clone();
        let predicate = Rc::new(predicate);

        Observable::new(move |observer: AnyObserver<T>| {
            let predicate = Rc::clone(&predicate);
            let subscription = upstream.connect(AnyObserver::new(move |value| {
                if predicate(&value) {
                    observer.next(value);
                }
            }));

            Teardown::from(subscription)
        })
    }
}
