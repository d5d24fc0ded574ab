//! Typed client for the UKFast eCloud API.
//!
//! Built on the `ukfast_api` dispatcher: each eCloud collection is described
//! by an endpoint type in [`endpoints`] and exposed through the generic
//! [`Collection`] and [`NestedCollection`] facades. [`ECloudClient`] hands out
//! a facade per resource.

pub mod client;
pub mod endpoints;
pub mod models;
pub mod operations;

pub use ukfast_api;
pub use ukfast_api::{
    Client, ClientConfig, ClientRequestParameters, Error, FilterOperator, Paginated,
};

pub use client::ECloudClient;
pub use operations::{
    Collection, CollectionOperations, Endpoint, NestedCollection, NestedCollectionOperations,
    NestedEndpoint, NestedMutations, RenamableEndpoint,
};
