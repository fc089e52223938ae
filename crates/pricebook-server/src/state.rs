use pricebook_core::{ItemRepository, TokenIssuer};

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
#[derive(Debug, Default)]
pub struct AppState {
    pub items: ItemRepository,
    /// Mock login issuer; keys are fixed at construction.
    pub tokens: TokenIssuer,
}

impl AppState {
    pub fn new(items: ItemRepository) -> Self {
        Self {
            items,
            tokens: TokenIssuer::default(),
        }
    }
}
