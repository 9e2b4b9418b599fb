use std::cell::RefCell;
use std::rc::Rc;

use crate::error::UnknownPickerType;
use crate::state::YEAR_WINDOW;
use crate::tests::tracer;
use crate::{calendar_at, date, EventKey, Field, Picker, PickerType};

#[test]
fn month_grid_selection() {
    let mut calendar = calendar_at!("2024-03-15");
    let log = Rc::new(RefCell::new(Vec::new()));

    for event in [EventKey::OnChange, EventKey::OnSelect] {
        calendar.add_listener(event, tracer("cb", event, &log));
    }

    assert!(!calendar.select_month(1));
    assert!(calendar.change_picker(Picker::Months));
    assert!(!calendar.select_month(12));
    assert!(calendar.select_month(1));

    assert_eq!(calendar.anchor(), date!("2024-02-15"));
    assert_eq!(calendar.picker(), Picker::Days);
    assert_eq!(calendar.fields().display(Field::Month), "2");
    assert_eq!(calendar.selection().date, date!("2024-03-15"));
    assert_eq!(*log.borrow(), ["cb:onChange"]);
}

#[test]
fn month_grid_selection_rolls_over() {
    let mut calendar = calendar_at!("2023-01-31");
    calendar.change_picker(Picker::Months);
    calendar.select_month(1);
    assert_eq!(calendar.anchor(), date!("2023-03-03"));
}

#[test]
fn year_grid_window() {
    let mut calendar = calendar_at!("2024-03-15");
    calendar.shift_year_window(true);
    assert!(calendar.change_picker(Picker::Years));
    assert_eq!(calendar.view_state().year_window, 2024);

    calendar.shift_year_window(true);
    assert_eq!(calendar.view_state().year_window, 2024 + YEAR_WINDOW);
    assert_eq!(calendar.frame().years()[0].year, 2040);

    calendar.shift_year_window(false);
    calendar.shift_year_window(false);
    assert_eq!(calendar.view_state().year_window, 2024 - YEAR_WINDOW);

    let (prev, next) = calendar.frame().year_window_labels();
    assert_eq!(prev, "1992 - 2007");
    assert_eq!(next, "2024 - 2039");

    // The window moves without changing the date.
    assert_eq!(calendar.anchor(), date!("2024-03-15"));
}

#[test]
fn year_grid_window_stops_at_range_bounds() {
    let mut calendar = calendar_at!("9999-06-01");
    assert!(calendar.change_picker(Picker::Years));
    assert_eq!(calendar.view_state().year_window, 10_000 - YEAR_WINDOW);

    for _ in 0..3 {
        calendar.shift_year_window(true);
    }

    let years: Vec<_> = calendar.frame().years().iter().map(|cell| cell.year).collect();
    assert_eq!(years, (9984..=9999).collect::<Vec<_>>());
    assert_eq!(calendar.frame().year_window_labels().1, "9984 - 9999");

    for _ in 0..700 {
        calendar.shift_year_window(false);
    }

    assert_eq!(calendar.view_state().year_window, 0);
    assert_eq!(calendar.frame().years()[0].year, 0);
    assert_eq!(calendar.frame().year_window_labels().0, "0 - 15");

    // Every displayed year can be selected.
    assert!(calendar.select_year(15));
    assert_eq!(calendar.anchor(), date!("0015-06-01"));
}

#[test]
fn year_grid_selection() {
    let mut calendar = calendar_at!("2024-02-29");
    calendar.change_picker(Picker::Years);

    assert!(!calendar.select_year(10_000));
    assert_eq!(calendar.picker(), Picker::Years);

    assert!(calendar.select_year(2028));
    assert_eq!(calendar.anchor(), date!("2028-02-29"));
    assert_eq!(calendar.picker(), Picker::Days);
    assert_eq!(calendar.fields().display(Field::Year), "2028");

    calendar.change_picker(Picker::Years);
    calendar.select_year(2023);
    assert_eq!(calendar.anchor(), date!("2023-03-01"));
}

#[test]
fn standalone_month_picker() {
    let mut calendar = calendar_at!("2024-03-15", kind = PickerType::Month);
    let log = Rc::new(RefCell::new(Vec::new()));

    for event in [EventKey::OnChange, EventKey::OnSelect] {
        calendar.add_listener(event, tracer("cb", event, &log));
    }

    assert_eq!(calendar.picker(), Picker::Months);
    assert!(!calendar.change_picker(Picker::Days));
    assert!(!calendar.change_picker(Picker::Years));
    assert!(!calendar.select_date("2024/3/1"));

    assert!(calendar.select_month(5));
    assert_eq!(calendar.picker(), Picker::Months);
    assert_eq!(calendar.anchor(), date!("2024-06-15"));
    assert_eq!(calendar.selection().date, date!("2024-06-15"));
    assert_eq!(*log.borrow(), ["cb:onChange", "cb:onSelect"]);

    let active: Vec<_> = calendar
        .frame()
        .months()
        .into_iter()
        .filter(|cell| cell.active)
        .map(|cell| cell.index)
        .collect();

    assert_eq!(active, [5]);
}

#[test]
fn standalone_year_picker() {
    let mut calendar = calendar_at!("2024-03-15", kind = PickerType::Year);
    assert_eq!(calendar.picker(), Picker::Years);
    assert!(!calendar.change_picker(Picker::Months));

    assert!(calendar.select_year(2031));
    assert_eq!(calendar.picker(), Picker::Years);
    assert_eq!(calendar.selection().date, date!("2031-03-15"));
}

#[test]
fn picker_type_names() {
    for kind in [PickerType::Date, PickerType::Month, PickerType::Year] {
        assert_eq!(kind.to_string().parse(), Ok(kind));
    }

    assert_eq!(
        "week".parse::<PickerType>(),
        Err(UnknownPickerType("week".to_string())),
    );
}

#[test]
fn labels() {
    let mut calendar = calendar_at!("2024-03-15");
    assert_eq!(calendar.frame().month_label(), "Marzo");
    assert_eq!(calendar.frame().year_label(), "2024");

    calendar.set_locale(crate::Locale::EN);
    assert_eq!(calendar.frame().month_label(), "March");
}
