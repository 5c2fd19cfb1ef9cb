//! Start/Stop pairing checks.
//!
//! Pending starts are queued per event name and each stop closes the oldest
//! one (FIFO). Drink events are exempt. Every input event comes back, in the
//! same order, possibly replaced by an invalidated copy.

use crate::models::{ErrorRecord, Event, Transition, ValidationErrorKind};
use chrono::Duration;
use std::collections::{HashMap, VecDeque};

pub const NOTE_UNPAIRED_STOP: &str = "Stop event without matching Start";
pub const NOTE_UNPAIRED_START: &str = "Start event without matching Stop";
pub const NOTE_STOP_BEFORE_START: &str = "Stop time is before Start time";
pub const NOTE_TOO_LONG: &str = "Timespan exceeds 24 hours";

fn max_span() -> Duration {
    Duration::hours(24)
}

pub fn validate(events: Vec<Event>) -> (Vec<Event>, Vec<ErrorRecord>) {
    let mut out = events;
    let mut errors = Vec::new();

    // name -> indices of starts still waiting for a stop, in arrival order
    let mut pending: HashMap<String, VecDeque<usize>> = HashMap::new();
    // names in first-seen order, so unpaired-start errors come out stably
    let mut seen_names: Vec<String> = Vec::new();

    for idx in 0..out.len() {
        let ev = &out[idx];
        if ev.is_drink() {
            continue;
        }

        match ev.transition() {
            Some(Transition::Start) => {
                let queue = pending.entry(ev.name().to_string()).or_insert_with(|| {
                    seen_names.push(ev.name().to_string());
                    VecDeque::new()
                });
                queue.push_back(idx);
            }
            Some(Transition::Stop) => {
                let start_idx = pending.get_mut(ev.name()).and_then(VecDeque::pop_front);

                let Some(start_idx) = start_idx else {
                    errors.push(record(
                        idx,
                        ev,
                        ValidationErrorKind::UnpairedStop,
                        format!("Stop event without preceding Start for '{}'", ev.name()),
                    ));
                    out[idx] = out[idx].invalidated(NOTE_UNPAIRED_STOP);
                    continue;
                };

                let span = ev
                    .occurred_at()
                    .signed_duration_since(out[start_idx].occurred_at());
                let problem = if span < Duration::zero() {
                    Some((
                        NOTE_STOP_BEFORE_START,
                        format!("Stop time before Start time for event '{}'", ev.name()),
                    ))
                } else if span > max_span() {
                    Some((
                        NOTE_TOO_LONG,
                        format!("Timespan > 24 hours for event '{}'", ev.name()),
                    ))
                } else {
                    None
                };

                if let Some((note, message)) = problem {
                    errors.push(record(idx, ev, ValidationErrorKind::InvalidTimespan, message));
                    out[idx] = out[idx].invalidated(note);
                }
            }
            None => {}
        }
    }

    for name in &seen_names {
        let Some(queue) = pending.get(name) else {
            continue;
        };
        for &idx in queue {
            errors.push(record(
                idx,
                &out[idx],
                ValidationErrorKind::UnpairedStart,
                format!("Start event without matching Stop for '{name}'"),
            ));
            out[idx] = out[idx].invalidated(NOTE_UNPAIRED_START);
        }
    }

    tracing::info!(errors = errors.len(), "validation complete");
    (out, errors)
}

fn record(idx: usize, ev: &Event, kind: ValidationErrorKind, message: String) -> ErrorRecord {
    ErrorRecord {
        row_number: idx,
        error_type: kind,
        error_message: message,
        timestamp: ev.occurred_at().to_rfc3339(),
    }
}
