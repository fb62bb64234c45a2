//! Important-updates collaborator.
//!
//! The resolver only sees the [`UpdatesProvider`] trait. Transport lives in
//! the implementations: [`HttpUpdatesProvider`] talks to the portal backend,
//! [`StaticUpdatesProvider`] and [`NoUpdates`] serve fixed data. The backend
//! token lives in the OS keyring ([`keyring_store`]).

mod http;
pub mod keyring_store;
mod memory;
mod traits;
mod types;

pub use http::HttpUpdatesProvider;
pub use memory::{NoUpdates, StaticUpdatesProvider};
pub use traits::UpdatesProvider;
pub use types::{EducationUpdate, UpdateType};
