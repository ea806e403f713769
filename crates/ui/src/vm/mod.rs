mod markdown_vm;
mod quiz_vm;
mod result_vm;
mod time_fmt;

pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use quiz_vm::{
    LOW_TIME_SECS, NavItemVm, OptionVm, QuizIntent, QuizVm, SectionVm, apply_intent,
    intent_for_key, map_quiz,
};
pub use result_vm::{ResultVm, map_result};
pub use time_fmt::format_submitted_at;
