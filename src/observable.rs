use std::rc::Rc;

use observer::AnyObserver;
use subscription::Subscription;
use teardown::Teardown;

pub mod observer;
pub mod subscription;
pub mod teardown;

/// A lazy, reusable blueprint for producing values to observers.
///
/// An `Observable` stores a single connect function and performs no work
/// until it is subscribed to. It is meant for sources that have no concept of
/// completion (timers, gesture callbacks, hardware events): once connected,
/// values keep flowing until the returned [`Subscription`] is unsubscribed.
///
/// Synchronous source:
///
/// ```
/// use indefinite_rx::prelude::*;
///
/// let observable = Observable::new(|observer| {
///     observer.next(5);
///     Teardown::noop()
/// });
///
/// let subscription = observable.subscribe(|value: i32| println!("{value}"));
///
/// subscription.unsubscribe();
/// ```
///
/// Asynchronous sources register the observer with some callback mechanism
/// and undo the registration in the returned [`Teardown`]; see
/// [`PublishSubject`](crate::subject::publish_subject::PublishSubject) for a
/// fan-out producer built on exactly that contract.
#[must_use = "observables do nothing unless subscribed to"]
pub struct Observable<T> {
    connect: Rc<dyn Fn(AnyObserver<T>) -> Teardown>,
}

impl<T: 'static> Observable<T> {
    /// Stores `connect` without invoking it. Connecting is the only place
    /// work happens; constructing and composing are free of side effects.
    pub fn new(connect: impl Fn(AnyObserver<T>) -> Teardown + 'static) -> Self {
        Self {
            connect: Rc::new(connect),
        }
    }

    /// Subscribes `next` to this observable.
    ///
    /// Sugar over [`connect`](Observable::connect) for plain closures.
    pub fn subscribe(&self, next: impl Fn(T) + 'static) -> Subscription {
        self.connect(AnyObserver::new(next))
    }

    /// Connects `observer` to this observable, invoking the connect function
    /// synchronously. Every call is an independent execution of the connect
    /// function; connections share no state at this level.
    ///
    /// The returned subscription holds a strong reference up the observable
    /// chain, so the chain stays alive at least until unsubscription.
    pub fn connect(&self, observer: AnyObserver<T>) -> Subscription {
        let teardown = (self.connect)(observer);
        let retained = self.clone();

        Subscription::new(move || {
            teardown.call();
            drop(retained);
        })
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            connect: Rc::clone(&self.connect),
        }
    }
}

#[cfg(test)]
mod test {
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    use crate::prelude::*;

    #[test]
    fn delivers_synchronous_values_before_subscribe_returns() {
        let observable = Observable::new(|observer: AnyObserver<i32>| {
            observer.next(10);
            Teardown::noop()
        });

        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&received);
        let subscription = observable.subscribe(move |value| sink.borrow_mut().push(value));

        assert_eq!(*received.borrow(), [10]);

        subscription.unsubscribe();
    }

    #[test]
    fn construction_and_composition_perform_no_work() {
        let connects = Rc::new(Cell::new(0));
        let observable = {
            let connects = Rc::clone(&connects);

            Observable::new(move |_observer: AnyObserver<i32>| {
                connects.set(connects.get() + 1);
                Teardown::noop()
            })
        };

        let _chained = observable.map(|value| value * 2).filter(|value| *value > 0);

        assert_eq!(connects.get(), 0);
    }

    #[test]
    fn each_connect_is_an_independent_execution() {
        let connects = Rc::new(Cell::new(0));
        let observable = {
            let connects = Rc::clone(&connects);

            Observable::new(move |observer: AnyObserver<i32>| {
                connects.set(connects.get() + 1);

                let mut counter = 0;
                for _ in 0..2 {
                    counter += 1;
                    observer.next(counter);
                }

                Teardown::noop()
            })
        };

        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&first);
        let subscription_a = observable.subscribe(move |value| sink.borrow_mut().push(value));
        let sink = Rc::clone(&second);
        let subscription_b = observable.subscribe(move |value| sink.borrow_mut().push(value));

        // Both executions start from scratch; neither sees the other's state.
        assert_eq!(*first.borrow(), [1, 2]);
        assert_eq!(*second.borrow(), [1, 2]);
        assert_eq!(connects.get(), 2);

        subscription_a.unsubscribe();
        subscription_b.unsubscribe();
    }

    #[test]
    fn two_subsequent_subscriptions_each_receive_the_value() {
        let observable = Observable::new(|observer: AnyObserver<i32>| {
            observer.next(10);
            Teardown::noop()
        });

        let received = Rc::new(Cell::new(0));

        let sink = Rc::clone(&received);
        let subscription_a = observable.subscribe(move |value| sink.set(sink.get() + value));
        let sink = Rc::clone(&received);
        let subscription_b = observable.subscribe(move |value| sink.set(sink.get() + value));

        assert_eq!(received.get(), 20);

        subscription_a.unsubscribe();
        subscription_b.unsubscribe();
    }
}
