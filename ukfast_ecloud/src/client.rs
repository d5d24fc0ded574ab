//! Entry point handing out one facade per eCloud resource.

use ukfast_api::{Client, ClientConfig, Error};

use crate::endpoints::{
    ActiveDirectoryDomains, AvailabilityZones, Dhcps, Firewalls, Networks, Nics, PodTemplates,
    Pods, Regions, SolutionFirewalls, SolutionTemplates, Solutions, Vpcs,
};
use crate::operations::{Collection, Endpoint, NestedCollection, NestedEndpoint};

/// eCloud API client.
///
/// Facades borrow the client, so they are cheap to create per call:
///
/// ```no_run
/// # async fn run() -> Result<(), ukfast_api::Error> {
/// use ukfast_ecloud::{CollectionOperations, ECloudClient};
///
/// let ecloud = ECloudClient::from_env()?;
/// let vpcs = ecloud.vpcs().list_all(None).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ECloudClient {
    inner: Client,
}

impl ECloudClient {
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        Ok(Self {
            inner: Client::new(config)?,
        })
    }

    /// Builds a client from `UKF_API_KEY` and friends.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Wraps an existing dispatcher, e.g. one backed by a test transport.
    pub fn with_client(client: Client) -> Self {
        Self { inner: client }
    }

    pub fn client(&self) -> &Client {
        &self.inner
    }

    /// Facade for any top-level endpoint, including ones defined outside this crate.
    pub fn collection<E: Endpoint>(&self) -> Collection<'_, E> {
        Collection::new(&self.inner)
    }

    pub fn nested<E: NestedEndpoint>(&self) -> NestedCollection<'_, E> {
        NestedCollection::new(&self.inner)
    }

    pub fn availability_zones(&self) -> Collection<'_, AvailabilityZones> {
        self.collection()
    }

    pub fn dhcps(&self) -> Collection<'_, Dhcps> {
        self.collection()
    }

    pub fn networks(&self) -> Collection<'_, Networks> {
        self.collection()
    }

    pub fn nics(&self) -> Collection<'_, Nics> {
        self.collection()
    }

    pub fn regions(&self) -> Collection<'_, Regions> {
        self.collection()
    }

    pub fn vpcs(&self) -> Collection<'_, Vpcs> {
        self.collection()
    }

    pub fn firewalls(&self) -> Collection<'_, Firewalls> {
        self.collection()
    }

    pub fn active_directory_domains(&self) -> Collection<'_, ActiveDirectoryDomains> {
        self.collection()
    }

    pub fn solutions(&self) -> Collection<'_, Solutions> {
        self.collection()
    }

    pub fn pods(&self) -> Collection<'_, Pods> {
        self.collection()
    }

    pub fn solution_firewalls(&self) -> NestedCollection<'_, SolutionFirewalls> {
        self.nested()
    }

    pub fn solution_templates(&self) -> NestedCollection<'_, SolutionTemplates> {
        self.nested()
    }

    pub fn pod_templates(&self) -> NestedCollection<'_, PodTemplates> {
        self.nested()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::CollectionOperations;
    use ukfast_api::testing::{item_body, MockTransport};

    #[tokio::test]
    async fn facades_share_the_wrapped_client() {
        let transport = MockTransport::new().with_json(
            200,
            item_body(serde_json::json!({"id": "rgn-abcd1234", "name": "Manchester"})),
        );
        let ecloud = ECloudClient::with_client(Client::with_transport(transport));

        let region = ecloud.regions().get("rgn-abcd1234").await.unwrap();
        assert_eq!(region.name, "Manchester");
    }

    #[test]
    fn new_rejects_blank_api_key() {
        let err = ECloudClient::new(ClientConfig::new("  ")).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
