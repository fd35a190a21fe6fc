use std::{
    cell::RefCell,
    collections::VecDeque,
    pin::Pin,
    rc::Rc,
    task::{Context, Poll, Waker},
};

use futures::stream::{FusedStream, Stream};
use pin_project_lite::pin_project;

use crate::observable::{subscription::Subscription, Observable};

struct Shared<T> {
    buffer: VecDeque<T>,
    waker: Option<Waker>,
}

pin_project! {
    /// Stream for the [`into_stream`](Observable::into_stream) method.
    ///
    /// Never terminates: an observable has no completion signal, so an empty
    /// buffer is `Pending`, never `Ready(None)`. Dropping the stream
    /// unsubscribes from the observable.
    #[must_use = "streams do nothing unless polled"]
    pub struct ObservableStream<T> {
        shared: Rc<RefCell<Shared<T>>>,
        subscription: Option<Subscription>,
    }

    impl<T> PinnedDrop for ObservableStream<T> {
        fn drop(this: Pin<&mut Self>) {
            let this = this.project();

            if let Some(subscription) = this.subscription.take() {
                subscription.unsubscribe();
            }
        }
    }
}

impl<T: 'static> Observable<T> {
    /// Bridges this observable into a [`Stream`].
    ///
    /// Subscribes immediately; values pushed from then on are buffered until
    /// polled, and a parked task is woken per push.
    pub fn into_stream(self) -> ObservableStream<T> {
        let shared = Rc::new(RefCell::new(Shared {
            buffer: VecDeque::new(),
            waker: None,
        }));

        let subscription = {
            let shared = Rc::clone(&shared);

            self.subscribe(move |value| {
                let mut shared = shared.borrow_mut();

                shared.buffer.push_back(value);

                if let Some(waker) = shared.waker.take() {
                    waker.wake();
                }
            })
        };

        ObservableStream {
            shared,
            subscription: Some(subscription),
        }
    }
}

impl<T> Stream for ObservableStream<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        let mut shared = this.shared.borrow_mut();

        match shared.buffer.pop_front() {
            Some(value) => Poll::Ready(Some(value)),
            None => {
                shared.waker = Some(cx.waker().clone());

                Poll::Pending
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.shared.borrow().buffer.len(), None)
    }
}

impl<T> FusedStream for ObservableStream<T> {
    fn is_terminated(&self) -> bool {
        false
    }
}
