use std::sync::Arc;

use quiz_core::Clock;

use crate::config::QuizApiConfig;
use crate::error::ServiceError;
use crate::http_api::HttpQuizApi;
use crate::quiz_flow::QuizFlowService;

/// Assembles app-facing services from configuration.
#[derive(Clone)]
pub struct AppServices {
    api_config: QuizApiConfig,
    quiz_flow: Arc<QuizFlowService>,
}

impl AppServices {
    /// Build services backed by the HTTP quiz backend.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the HTTP client cannot be created.
    pub fn new_http(
        api_config: QuizApiConfig,
        clock: Clock,
        duration_secs: u32,
    ) -> Result<Self, ServiceError> {
        let api = Arc::new(HttpQuizApi::new(api_config.clone())?);
        let quiz_flow = Arc::new(
            QuizFlowService::new(api.clone(), api.clone(), api, clock)
                .with_duration_secs(duration_secs),
        );

        Ok(Self {
            api_config,
            quiz_flow,
        })
    }

    #[must_use]
    pub fn api_config(&self) -> &QuizApiConfig {
        &self.api_config
    }

    #[must_use]
    pub fn quiz_flow(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz_flow)
    }
}
