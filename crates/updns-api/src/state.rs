use std::sync::Arc;
use updns_core::UpdateService;

/// State shared by every request handler
#[derive(Clone)]
pub struct AppState {
    /// The update pipeline; owns the configuration and the publisher
    pub service: Arc<UpdateService>,
}
