pub mod app;
pub mod context;
pub mod flow;
pub mod i18n;
pub mod vm;
pub mod views;

pub use app::{App, Flow};
pub use context::{AppContext, UiApp, build_app_context};
pub use flow::FlowStage;
pub use i18n::{Labels, Locale, UnknownLocale};
