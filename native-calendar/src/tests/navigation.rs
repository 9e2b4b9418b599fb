use chrono::Month;

use crate::events::EventPayload;
use crate::tests::recorder;
use crate::{calendar_at, date, EventKey, MonthShift};

#[test]
fn twelve_forward_shifts() {
    let mut calendar = calendar_at!("2024-03-15");
    let (callback, received) = recorder();
    calendar.add_listener(EventKey::OnChange, callback);

    for _ in 0..12 {
        assert!(calendar.navigate(MonthShift::Forward));
    }

    assert_eq!(calendar.anchor(), date!("2025-03-15"));
    assert_eq!(received.borrow().len(), 12);

    let months: Vec<_> = received
        .borrow()
        .iter()
        .map(|payload| match payload {
            EventPayload::Change(state) => state.month,
            other => panic!("unexpected payload {other:?}"),
        })
        .collect();

    assert_eq!(months, [4, 5, 6, 7, 8, 9, 10, 11, 12, 1, 2, 3]);
}

#[test]
fn forward_then_backward() {
    let mut calendar = calendar_at!("2024-03-15");
    calendar.navigate(MonthShift::Forward);
    calendar.navigate(MonthShift::Backward);
    assert_eq!(calendar.anchor(), date!("2024-03-15"));

    let mut calendar = calendar_at!("2024-01-10");
    calendar.navigate(MonthShift::Backward);
    assert_eq!(calendar.anchor(), date!("2023-12-10"));
    assert_eq!(calendar.core_state().current.year, 2023);
}

#[test]
fn forward_from_end_of_january_rolls_over() {
    let mut calendar = calendar_at!("2023-01-31");

    // There is no February 31st.
    calendar.navigate(MonthShift::Forward);
    assert_eq!(calendar.anchor(), date!("2023-03-03"));
    assert_eq!(calendar.core_state().current.month, 3);

    calendar.navigate(MonthShift::Backward);
    assert_eq!(calendar.anchor(), date!("2023-02-03"));
}

#[test]
fn backward_from_end_of_march_stays_in_march() {
    let mut calendar = calendar_at!("2023-03-31");
    assert!(calendar.navigate(MonthShift::Backward));
    assert_eq!(calendar.anchor(), date!("2023-03-03"));
    assert_eq!(calendar.core_state().current.month, 3);

    let mut calendar = calendar_at!("2024-03-31");
    calendar.navigate(MonthShift::Backward);
    assert_eq!(calendar.anchor(), date!("2024-03-02"));
}

#[test]
fn absolute_month() {
    let mut calendar = calendar_at!("2024-05-10");
    calendar.navigate(MonthShift::To(Month::February));
    assert_eq!(calendar.anchor(), date!("2024-02-10"));

    calendar.navigate(Month::December.into());
    assert_eq!(calendar.anchor(), date!("2024-12-10"));
}

#[test]
fn change_event_carries_new_state() {
    let mut calendar = calendar_at!("2024-01-15");
    let (callback, received) = recorder();
    calendar.add_listener(EventKey::OnChange, callback);
    calendar.navigate(MonthShift::Forward);

    assert_eq!(
        received.borrow().as_slice(),
        [EventPayload::Change(calendar.core_state().current)],
    );

    let EventPayload::Change(state) = &received.borrow()[0] else {
        panic!("expected a change payload");
    };

    assert_eq!(state.days_count, 29);
    assert_eq!(state.initial_date, date!("2024-02-15"));
}

#[test]
fn navigation_does_not_select() {
    let mut calendar = calendar_at!("2024-01-15");
    calendar.navigate(MonthShift::Forward);
    assert_eq!(calendar.selection().date, date!("2024-01-15"));
    assert_eq!(calendar.selection().hash, "2024/1/15");
}

#[test]
fn navigation_outside_supported_range() {
    let (callback, received) = recorder();

    let mut calendar = calendar_at!("9999-12-15");
    calendar.add_listener(EventKey::OnChange, callback.clone());
    assert!(!calendar.navigate(MonthShift::Forward));
    assert_eq!(calendar.anchor(), date!("9999-12-15"));

    let mut calendar = calendar_at!("0000-01-10");
    calendar.add_listener(EventKey::OnChange, callback);
    assert!(!calendar.navigate(MonthShift::Backward));
    assert_eq!(calendar.anchor(), date!("0000-01-10"));

    assert!(received.borrow().is_empty());
}

#[test]
fn dropdown_toggles() {
    let mut calendar = calendar_at!("2024-01-15");
    assert!(!calendar.view_state().dropdown_open);
    assert!(calendar.toggle_dropdown());
    assert!(calendar.view_state().dropdown_open);
    assert!(!calendar.toggle_dropdown());
}
