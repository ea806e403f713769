#![forbid(unsafe_code)]

pub mod countdown;
pub mod error;
pub mod model;
pub mod session;
pub mod time;

pub use countdown::{Countdown, DEFAULT_QUIZ_SECONDS, TickOutcome, format_mmss};
pub use error::SessionError;
pub use session::{NavStatus, QuizSession, SectionRange};
pub use time::Clock;
