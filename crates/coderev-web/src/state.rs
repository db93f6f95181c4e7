use std::sync::Arc;

use coderev_application::{AppServices, ReviewUseCase, SessionStore};
use minijinja::Environment;

use crate::page;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct WebState {
    pub review_usecase: Arc<ReviewUseCase>,
    pub session_store: SessionStore,
    pub templates: Arc<Environment<'static>>,
}

impl WebState {
    pub fn new(
        review_usecase: Arc<ReviewUseCase>,
        session_store: SessionStore,
    ) -> Result<Self, minijinja::Error> {
        Ok(Self {
            review_usecase,
            session_store,
            templates: Arc::new(page::templates()?),
        })
    }

    pub fn from_services(services: &AppServices) -> Result<Self, minijinja::Error> {
        Self::new(
            services.review_usecase.clone(),
            services.session_store.clone(),
        )
    }
}
