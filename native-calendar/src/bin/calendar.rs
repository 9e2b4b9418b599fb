use std::env;

use chrono::NaiveDate;

use native_calendar::grid::{CellKind, DayCell};
use native_calendar::{Calendar, Field, FirstWeekDay, Frame, Locale, MonthShift, Options, View};

/// Print the calendar on standard output each time it changes.
struct Terminal;

impl View for Terminal {
    fn mount(&mut self, host: &str) -> bool {
        host == "stdout"
    }

    fn render(&mut self, frame: &Frame<'_>) {
        println!("---");
        println!("{} {}", frame.month_label(), frame.year_label());

        println!(
            " - fields: {} / {} / {}",
            frame.field(Field::Day),
            frame.field(Field::Month),
            frame.field(Field::Year),
        );

        for names in frame.weekdays() {
            print!("{:>5}", names.short);
        }

        println!();

        for week in frame.days().chunks(7) {
            println!("{}", week_row(week));
        }
    }
}

/// Format a week of the day grid: the selected day is between brackets and
/// days borrowed from surrounding months between parentheses.
fn week_row(week: &[DayCell]) -> String {
    week.iter()
        .map(|cell| {
            let day = cell.date.format("%-d").to_string();

            let text = match cell.kind {
                _ if cell.active => format!("[{day}]"),
                CellKind::Current => day,
                CellKind::Prev | CellKind::Next => format!("({day})"),
            };

            format!("{text:>5}")
        })
        .collect()
}

fn main() {
    let mut args = env::args().skip(1);

    let initial_date = args.next().map(|arg| {
        NaiveDate::parse_from_str(&arg, "%Y-%m-%d")
            .unwrap_or_else(|err| panic!("invalid date `{arg}`: {err}"))
    });

    let first_week_day: FirstWeekDay = args
        .next()
        .map(|arg| arg.parse().unwrap_or_else(|err| panic!("{err}")))
        .unwrap_or_default();

    let mut options = Options::default()
        .with_first_week_day(first_week_day)
        .with_locale(Locale::EN);

    if let Some(date) = initial_date {
        options = options.with_initial_date(date);
    }

    let mut calendar = match Calendar::create(Terminal, "stdout", options) {
        Ok(calendar) => calendar,
        Err(err) => panic!("{err}"),
    };

    calendar.navigate(MonthShift::Forward);
    calendar.navigate(MonthShift::Backward);

    let selected = calendar.anchor().to_string().replace('-', "/");
    calendar.select_date(&selected);
}
