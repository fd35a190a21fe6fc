use futures::{executor::block_on, StreamExt};
use indefinite_rx::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
enum DragState {
    Began,
    Changed,
    Ended,
}

// A PublishSubject standing in for a delegate-style event source, e.g. a pan
// gesture recognizer pushing its state on every callback.
fn main() {
    let drags = PublishSubject::new();

    let positions = drags
        .subscribe()
        .filter(|(state, _): &(DragState, (f64, f64))| *state == DragState::Changed)
        .map(|(_, position)| position);

    let printer = positions.subscribe(|position| println!("drag moved to {position:?}"));
    let stream = positions.into_stream();

    drags.push((DragState::Began, (0.0, 0.0)));
    drags.push((DragState::Changed, (4.0, 2.0)));
    drags.push((DragState::Changed, (8.0, 3.0)));
    drags.push((DragState::Ended, (8.0, 3.0)));

    printer.unsubscribe();

    block_on(async {
        let buffered = stream.take(2).collect::<Vec<_>>().await;

        println!("buffered positions: {buffered:?}");
    });
}
