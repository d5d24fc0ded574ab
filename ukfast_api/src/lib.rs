//! Typed client core for the UKFast API.
//!
//! [`Client`] dispatches requests through a [`Transport`], translates
//! responses into typed values or [`Error`]s, and walks paginated
//! collections via [`Paginated`]. Resource-specific crates bind fixed paths
//! and item types on top of it.

mod client;
pub mod config;
mod errors;
mod paginated;
mod request;
pub mod testing;
mod transport;
pub mod types;
pub mod validation;
pub use self::client::Client;
pub use self::config::ClientConfig;
pub use self::errors::{Error, TransportError, TransportErrorKind};
pub use self::paginated::{PageMeta, Paginated};
pub use self::request::{
    ClientRequestParameters, FilterOperator, FilteringParameter, PaginationParameters,
    SortingParameters,
};
pub use self::transport::{ApiRequest, HttpTransport, Method, Transport};
pub use self::validation::ResourceId;
