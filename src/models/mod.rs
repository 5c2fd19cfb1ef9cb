pub mod drink_event;
pub mod error_record;
pub mod event;
pub mod weekly_bucket;

pub use drink_event::DrinkEvent;
pub use error_record::{ErrorRecord, ValidationErrorKind};
pub use event::{DRINK_EVENT_NAME, Event, ReportMode, Transition};
pub use weekly_bucket::WeeklyBucket;
