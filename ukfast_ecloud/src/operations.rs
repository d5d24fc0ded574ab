//! Generic resource facades.
//!
//! A resource is described once by a zero-sized endpoint type (path template,
//! id type, item type) and served by [`Collection`] or [`NestedCollection`].
//! Consumers program against the capability traits rather than the structs.

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use ukfast_api::{
    validation::expand_parent, Client, ClientRequestParameters, Error, Method, Paginated,
    ResourceId,
};

/// A top-level collection such as `/ecloud/v2/dhcps`.
pub trait Endpoint {
    type Item: DeserializeOwned + Send + Sync;
    /// Identifier type; fixes the validation rule for `get`.
    type Id: ResourceId + ?Sized;
    /// Human-readable name used in validation errors.
    const LABEL: &'static str;
    const PATH: &'static str;
}

/// A collection scoped under a parent resource, such as
/// `/ecloud/v1/solutions/{parent}/templates`.
pub trait NestedEndpoint {
    type Item: DeserializeOwned + Send + Sync;
    type ParentId: ResourceId + ?Sized;
    type Id: ResourceId + ?Sized;
    const PARENT_LABEL: &'static str;
    const LABEL: &'static str;
    /// Path template containing a `{parent}` placeholder.
    const PATH: &'static str;
}

/// A nested collection whose members can be deleted and renamed.
pub trait RenamableEndpoint: NestedEndpoint {
    type RenameRequest: Serialize + Sync;
    /// Path segment appended to the member path for a rename.
    const RENAME_ACTION: &'static str;
}

/// List and get operations on a top-level collection.
#[async_trait]
pub trait CollectionOperations<'c, T: Send> {
    type Id: ?Sized + Sync;

    /// Fetches every page and returns the items in API order.
    async fn list_all(&self, parameters: Option<ClientRequestParameters>) -> Result<Vec<T>, Error>;

    async fn list_page(
        &self,
        parameters: Option<ClientRequestParameters>,
    ) -> Result<Paginated<'c, T>, Error>;

    async fn get(&self, id: &Self::Id) -> Result<T, Error>;
}

/// List and get operations on a collection scoped under a parent.
#[async_trait]
pub trait NestedCollectionOperations<'c, T: Send> {
    type ParentId: ?Sized + Sync;
    type Id: ?Sized + Sync;

    async fn list_all(
        &self,
        parent: &Self::ParentId,
        parameters: Option<ClientRequestParameters>,
    ) -> Result<Vec<T>, Error>;

    async fn list_page(
        &self,
        parent: &Self::ParentId,
        parameters: Option<ClientRequestParameters>,
    ) -> Result<Paginated<'c, T>, Error>;

    async fn get(&self, parent: &Self::ParentId, id: &Self::Id) -> Result<T, Error>;
}

/// Delete and rename on members of a nested collection. Success carries no value.
#[async_trait]
pub trait NestedMutations {
    type ParentId: ?Sized + Sync;
    type Id: ?Sized + Sync;
    type RenameRequest: Sync;

    async fn delete(&self, parent: &Self::ParentId, id: &Self::Id) -> Result<(), Error>;

    async fn rename(
        &self,
        parent: &Self::ParentId,
        id: &Self::Id,
        request: &Self::RenameRequest,
    ) -> Result<(), Error>;
}

/// Facade over a top-level collection.
pub struct Collection<'c, E: ?Sized> {
    client: &'c Client,
    _endpoint: PhantomData<fn() -> E>,
}

impl<'c, E: Endpoint + ?Sized> Collection<'c, E> {
    pub fn new(client: &'c Client) -> Self {
        Self {
            client,
            _endpoint: PhantomData,
        }
    }

    fn member_path(id: &E::Id) -> Result<String, Error> {
        id.validate(E::LABEL)?;
        Ok(format!("{}/{}", E::PATH, id))
    }
}

impl<'c, E: ?Sized> Clone for Collection<'c, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'c, E: ?Sized> Copy for Collection<'c, E> {}

#[async_trait]
impl<'c, E> CollectionOperations<'c, E::Item> for Collection<'c, E>
where
    E: Endpoint + ?Sized,
{
    type Id = E::Id;

    async fn list_all(
        &self,
        parameters: Option<ClientRequestParameters>,
    ) -> Result<Vec<E::Item>, Error> {
        tracing::debug!("Listing all {} resources", E::LABEL);
        let client = self.client;
        client
            .get_all(
                move |p| client.get_paginated::<E::Item>(E::PATH, p),
                parameters,
            )
            .await
    }

    async fn list_page(
        &self,
        parameters: Option<ClientRequestParameters>,
    ) -> Result<Paginated<'c, E::Item>, Error> {
        let client: &'c Client = self.client;
        client.get_paginated(E::PATH, parameters).await
    }

    async fn get(&self, id: &E::Id) -> Result<E::Item, Error> {
        let path = Self::member_path(id)?;
        self.client.get(&path).await
    }
}

/// Facade over a collection scoped under a parent resource.
pub struct NestedCollection<'c, E: ?Sized> {
    client: &'c Client,
    _endpoint: PhantomData<fn() -> E>,
}

impl<'c, E: NestedEndpoint + ?Sized> NestedCollection<'c, E> {
    pub fn new(client: &'c Client) -> Self {
        Self {
            client,
            _endpoint: PhantomData,
        }
    }

    /// Validates the parent and expands the collection path.
    fn collection_path(parent: &E::ParentId) -> Result<String, Error> {
        expand_parent(E::PATH, parent, E::PARENT_LABEL)
    }

    fn member_path(parent: &E::ParentId, id: &E::Id) -> Result<String, Error> {
        let collection = Self::collection_path(parent)?;
        id.validate(E::LABEL)?;
        Ok(format!("{}/{}", collection, id))
    }
}

impl<'c, E: ?Sized> Clone for NestedCollection<'c, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'c, E: ?Sized> Copy for NestedCollection<'c, E> {}

#[async_trait]
impl<'c, E> NestedCollectionOperations<'c, E::Item> for NestedCollection<'c, E>
where
    E: NestedEndpoint + ?Sized,
{
    type ParentId = E::ParentId;
    type Id = E::Id;

    async fn list_all(
        &self,
        parent: &E::ParentId,
        parameters: Option<ClientRequestParameters>,
    ) -> Result<Vec<E::Item>, Error> {
        let path = Self::collection_path(parent)?;
        tracing::debug!("Listing all {} resources under {}", E::LABEL, path);
        let client = self.client;
        client
            .get_all(
                move |p| async move { client.get_paginated::<E::Item>(&path, p).await },
                parameters,
            )
            .await
    }

    async fn list_page(
        &self,
        parent: &E::ParentId,
        parameters: Option<ClientRequestParameters>,
    ) -> Result<Paginated<'c, E::Item>, Error> {
        let path = Self::collection_path(parent)?;
        let client: &'c Client = self.client;
        client.get_paginated(&path, parameters).await
    }

    async fn get(&self, parent: &E::ParentId, id: &E::Id) -> Result<E::Item, Error> {
        let path = Self::member_path(parent, id)?;
        self.client.get(&path).await
    }
}

#[async_trait]
impl<'c, E> NestedMutations for NestedCollection<'c, E>
where
    E: RenamableEndpoint + ?Sized,
{
    type ParentId = E::ParentId;
    type Id = E::Id;
    type RenameRequest = E::RenameRequest;

    async fn delete(&self, parent: &E::ParentId, id: &E::Id) -> Result<(), Error> {
        let path = Self::member_path(parent, id)?;
        self.client.delete(&path).await
    }

    async fn rename(
        &self,
        parent: &E::ParentId,
        id: &E::Id,
        request: &E::RenameRequest,
    ) -> Result<(), Error> {
        let path = format!("{}/{}", Self::member_path(parent, id)?, E::RENAME_ACTION);
        self.client
            .execute(Method::Post, &path, Some(request))
            .await
    }
}
