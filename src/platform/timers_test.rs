use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn recorder() -> (Rc<RefCell<Vec<(&'static str, u64)>>>, ManualScheduler) {
    (Rc::new(RefCell::new(Vec::new())), ManualScheduler::new())
}

#[test]
fn tasks_run_only_once_due() {
    let (log, timers) = recorder();
    let (l, t) = (log.clone(), timers.clone());
    timers.schedule(100, Box::new(move || l.borrow_mut().push(("a", t.now_ms()))));

    timers.advance(99);
    assert!(log.borrow().is_empty());
    assert_eq!(timers.pending(), 1);

    timers.advance(1);
    assert_eq!(*log.borrow(), vec![("a", 100)]);
    assert_eq!(timers.pending(), 0);
}

#[test]
fn tasks_run_in_due_order_then_fifo() {
    let (log, timers) = recorder();
    for (name, delay) in [("late", 50), ("first", 10), ("second", 10)] {
        let l = log.clone();
        timers.schedule(delay, Box::new(move || l.borrow_mut().push((name, 0))));
    }
    timers.advance(60);
    let order: Vec<_> = log.borrow().iter().map(|(n, _)| *n).collect();
    assert_eq!(order, vec!["first", "second", "late"]);
}

#[test]
fn nested_tasks_are_timed_from_their_parent() {
    let (log, timers) = recorder();
    let (l, t) = (log.clone(), timers.clone());
    timers.schedule(
        3000,
        Box::new(move || {
            let (l2, t2) = (l.clone(), t.clone());
            t.schedule(400, Box::new(move || l2.borrow_mut().push(("removed", t2.now_ms()))));
        }),
    );

    timers.advance(3399);
    assert!(log.borrow().is_empty());
    timers.advance(1);
    assert_eq!(*log.borrow(), vec![("removed", 3400)]);
}

#[test]
fn advance_moves_clock_even_when_idle() {
    let timers = ManualScheduler::new();
    timers.advance(250);
    assert_eq!(timers.now_ms(), 250);
}
