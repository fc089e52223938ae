//! Domain core for the pricebook service: items, the in-memory repository,
//! and the mock token issuer.

pub mod error;
pub mod models;
pub mod repository;
pub mod token;

pub use error::AppError;
pub use models::{Credentials, Item, ReplaceOutcome};
pub use repository::ItemRepository;
pub use token::{Claims, TokenIssuer};
