use std::{cell::RefCell, rc::Rc};

use crate::observable::{
    observer::{AnyObserver, Observer},
    teardown::Teardown,
    Observable,
};

use super::Subject;

/// A multi-observer producer: every observer registered at push time receives
/// the pushed value, in registration order.
///
/// Registrations are removed by observer identity at teardown, so two
/// subscriptions to the same subject tear down independently.
pub struct PublishSubject<T> {
    observers: Rc<RefCell<Vec<AnyObserver<T>>>>,
}

impl<T: 'static> PublishSubject<T> {
    pub fn new() -> Self {
        Self {
            observers: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<T: 'static> Default for PublishSubject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> Subject for PublishSubject<T> {
    type Item = T;

    fn subscribe(&self) -> Observable<T> {
        let observers = Rc::clone(&self.observers);

        Observable::new(move |observer| {
            observers.borrow_mut().push(observer.clone());

            let observers = Rc::clone(&observers);
            Teardown::new(move || {
                let mut observers = observers.borrow_mut();

                if let Some(index) = observers.iter().position(|it| it.ptr_eq(&observer)) {
                    observers.remove(index);
                }
            })
        })
    }

    fn push(&self, value: T) {
        // Snapshot the registrations so an observer may unsubscribe from
        // inside its own `next` without re-borrowing the list.
        let observers = self.observers.borrow().clone();

        for observer in &observers {
            observer.next(value.clone());
        }
    }
}
