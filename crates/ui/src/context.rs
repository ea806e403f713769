use std::sync::Arc;

use services::QuizFlowService;

use crate::i18n::{Labels, Locale};

pub trait UiApp: Send + Sync {
    fn locale(&self) -> Locale;

    fn quiz_flow(&self) -> Arc<QuizFlowService>;
}

#[derive(Clone)]
pub struct AppContext {
    locale: Locale,
    quiz_flow: Arc<QuizFlowService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            locale: app.locale(),
            quiz_flow: app.quiz_flow(),
        }
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn labels(&self) -> &'static Labels {
        self.locale.labels()
    }

    #[must_use]
    pub fn quiz_flow(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz_flow)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
