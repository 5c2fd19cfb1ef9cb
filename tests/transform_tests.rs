use chrono::{NaiveDate, Weekday};
use healthlog::core::aggregator::{aggregate, week_start_of};
use healthlog::core::extractor::{DEFAULT_QUANTITY, extract, quantity_from_comment};
use healthlog::core::pipeline::run_pipeline;
use healthlog::models::{DRINK_EVENT_NAME, DrinkEvent, Event, ReportMode};

mod common;
use common::{now_row, ny, retro_row, settings};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn quantity_from_leading_number() {
    assert_eq!(quantity_from_comment(Some("1.5 beer")), 1.5);
    assert_eq!(quantity_from_comment(Some(".5 wine")), 0.5);
    assert_eq!(quantity_from_comment(Some("  3 highballs")), 3.0);
    assert_eq!(quantity_from_comment(Some("0")), 0.0);
}

#[test]
fn quantity_from_full_width_digits() {
    assert_eq!(quantity_from_comment(Some("２ 杯")), 2.0);
    assert_eq!(quantity_from_comment(Some("１.５")), 1.5);
    assert_eq!(quantity_from_comment(Some("１０本")), 10.0);
    assert_eq!(quantity_from_comment(Some("10 beers")), 10.0);
}

#[test]
fn quantity_defaults_to_one() {
    assert_eq!(quantity_from_comment(Some("two")), DEFAULT_QUANTITY);
    assert_eq!(quantity_from_comment(Some("beer 2")), DEFAULT_QUANTITY);
    assert_eq!(quantity_from_comment(None), DEFAULT_QUANTITY);
}

#[test]
fn extract_keeps_only_drinks_with_their_effective_date() {
    let cutoff = settings().cutoff;
    let events = vec![
        Event::new(ReportMode::Immediate, "睡眠", None, ny(2021, 1, 5, 1, 0, 0), cutoff),
        Event::new(ReportMode::Immediate, DRINK_EVENT_NAME, None, ny(2021, 1, 5, 1, 0, 0), cutoff)
            .with_comments(Some("2 cans")),
        Event::new(ReportMode::Retrospective, DRINK_EVENT_NAME, None, ny(2021, 1, 5, 20, 0, 0), cutoff)
            .invalidated("kept anyway"),
    ];

    let drinks = extract(&events);
    assert_eq!(drinks.len(), 2);
    assert_eq!(drinks[0].effective_date, date(2021, 1, 4));
    assert_eq!(drinks[0].quantity, 2.0);
    assert_eq!(drinks[0].comments.as_deref(), Some("2 cans"));
    assert_eq!(drinks[1].quantity, 1.0);
    assert_eq!(drinks[1].source_event_ref, None);
}

#[test]
fn aggregate_one_monday_week() {
    let drinks = vec![
        DrinkEvent::new(date(2021, 1, 4), 1.0, None),
        DrinkEvent::new(date(2021, 1, 6), 2.0, None),
        DrinkEvent::new(date(2021, 1, 10), 3.0, None),
    ];

    let weeks = aggregate(&drinks, Weekday::Mon);
    assert_eq!(weeks.len(), 1);
    assert_eq!(weeks[0].week_start_date, date(2021, 1, 4));
    assert_eq!(weeks[0].week_end_date, date(2021, 1, 10));
    assert_eq!(weeks[0].total_quantity, 6.0);
    assert_eq!(weeks[0].event_count, 3);

    // same input, same output
    assert_eq!(aggregate(&drinks, Weekday::Mon), weeks);
}

#[test]
fn aggregate_splits_weeks_and_sorts() {
    let drinks = vec![
        DrinkEvent::new(date(2021, 1, 11), 1.0, None),
        DrinkEvent::new(date(2021, 1, 3), 2.0, None),
    ];
    let weeks = aggregate(&drinks, Weekday::Mon);
    let starts: Vec<NaiveDate> = weeks.iter().map(|w| w.week_start_date).collect();
    assert_eq!(starts, [date(2020, 12, 28), date(2021, 1, 11)]);
    assert!(aggregate(&[], Weekday::Mon).is_empty());
}

#[test]
fn week_start_day_is_configurable() {
    // Sunday 2021-01-10 starts its own week when weeks start on Sunday
    assert_eq!(week_start_of(date(2021, 1, 10), Weekday::Sun), date(2021, 1, 10));
    assert_eq!(week_start_of(date(2021, 1, 9), Weekday::Sun), date(2021, 1, 3));
    assert_eq!(week_start_of(date(2021, 1, 10), Weekday::Mon), date(2021, 1, 4));
}

#[test]
fn pipeline_runs_every_stage() {
    let rows = vec![
        now_row("1/4/2021 23:00:00", "睡眠", "Start", ""),
        now_row("1/5/2021 7:00:00", "睡眠", "Stop", ""),
        now_row("1/5/2021 21:00:00", DRINK_EVENT_NAME, "", "2 beers"),
        retro_row("1/6/2021 9:30:00", DRINK_EVENT_NAME, "", "1/5/2021", "10:00:00 PM")
            .with(healthlog::source::columns::COMMENTS, "1.5 wine"),
        now_row("1/7/2021 12:00:00", "散歩", "Stop", ""),
    ];

    let out = run_pipeline(&rows, &settings());

    assert_eq!(out.events.len(), 5);
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].row_number, 4);
    assert_eq!(out.drinks.len(), 2);
    assert_eq!(out.weekly.len(), 1);
    assert_eq!(out.weekly[0].total_quantity, 3.5);
    assert_eq!(out.weekly[0].event_count, 2);
}
