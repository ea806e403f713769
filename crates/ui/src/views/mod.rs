mod alert;
mod instructions;
mod login;
mod quiz;
mod result;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use alert::AlertDialog;
pub use instructions::InstructionsView;
pub use login::LoginView;
pub use quiz::QuizView;
pub use result::ResultView;
pub use state::ViewError;
