//! Domain Layer
//!
//! Contains entities, value objects, and the repository/notifier traits.

pub mod entity;
pub mod notifier;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::account::{Account, OtpGate};
pub use notifier::{CodeNotifier, NotifyError};
pub use repository::AccountRepository;
