use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    AsyncOperation, Contact, DnsRecord, Domain, DomainAvailability, ListDomainsParams,
    OperationHandle,
};

/// Typed access to the registrar API.
///
/// Each method maps to exactly one HTTP round trip and fails with
/// [`UpstreamError`](crate::UpstreamError). Implementations never retry; callers
/// own any retry policy.
#[async_trait]
pub trait RegistryGateway: Send + Sync {
    /// List domains on the account (`GET /domains`).
    async fn list_domains(&self, params: &ListDomainsParams) -> Result<Vec<Domain>>;

    /// Check whether a domain can be registered.
    async fn check_availability(&self, domain: &str) -> Result<DomainAvailability>;

    /// Fetch one domain. A missing domain is a `Rejected` error with status 404.
    async fn get_domain_info(&self, domain: &str) -> Result<Domain>;

    /// Start a registration. The registrar completes it asynchronously; poll
    /// [`get_async_operation`](Self::get_async_operation) with the returned id.
    async fn register_domain(&self, domain: &str, contact_id: &str) -> Result<OperationHandle>;

    /// List DNS records of a domain.
    async fn get_dns_records(&self, domain: &str) -> Result<Vec<DnsRecord>>;

    /// Replace the whole record set of a domain with `records`.
    ///
    /// This is a full-set replace, not a patch; reconciliation happens upstream.
    async fn replace_dns_records(
        &self,
        domain: &str,
        records: &[DnsRecord],
    ) -> Result<OperationHandle>;

    /// Fetch a contact profile.
    async fn get_contact(&self, contact_id: &str) -> Result<Contact>;

    /// Fetch a single snapshot of an asynchronous operation.
    async fn get_async_operation(&self, operation_id: &str) -> Result<AsyncOperation>;
}
