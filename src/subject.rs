use crate::observable::Observable;

pub mod publish_subject;

/// A push source that fans values out to its current observers.
///
/// Subjects sit on the producer side of the observable contract: each call to
/// [`subscribe`](Subject::subscribe) hands out a fresh [`Observable`] whose
/// connect function registers with the subject and whose teardown removes
/// that registration. A subject never completes; it emits until every
/// observer has unsubscribed, and may keep emitting after that.
pub trait Subject {
    type Item;

    fn subscribe(&self) -> Observable<Self::Item>;
    fn push(&self, value: Self::Item);
}
