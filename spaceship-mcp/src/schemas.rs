//! MCP tool parameter schemas
//!
//! Defines the input parameter structures for all MCP tools.
//! The JSON schema advertised in `tools/list` is generated from these structs, and the
//! same schema drives argument validation, so the two cannot drift apart.

use schemars::JsonSchema;
use serde::Deserialize;

/// Parameters for `get_domains` tool.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct GetDomainsParams {
    /// Number of domains to return (default: 10).
    #[schemars(description = "Number of domains to return (default: 10)")]
    pub take: Option<u32>,

    /// Number of domains to skip (default: 0).
    #[schemars(description = "Number of domains to skip (default: 0)")]
    pub skip: Option<u32>,
}

/// Parameters for `check_domain_availability` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CheckDomainAvailabilityParams {
    /// The domain name to check.
    #[schemars(description = "Domain name to check (e.g. example.com)")]
    pub domain: String,
}

/// Parameters for `get_domain_info` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetDomainInfoParams {
    #[schemars(description = "Domain name registered with the account")]
    pub domain: String,
}

/// Parameters for `register_domain` tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDomainParams {
    /// The domain name to register.
    #[schemars(description = "Domain name to register")]
    pub domain: String,

    /// Contact profile used as registrant.
    #[schemars(description = "ID of the contact profile to register the domain with")]
    pub contact_id: String,
}

/// Parameters for `get_dns_records` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetDnsRecordsParams {
    #[schemars(description = "Domain name whose DNS records to list")]
    pub domain: String,
}

/// Parameters for `get_contact` tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetContactParams {
    #[schemars(description = "Contact profile ID")]
    pub contact_id: String,
}

/// Parameters for `get_async_operation` tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetAsyncOperationParams {
    /// Returned by `register_domain`.
    #[schemars(description = "Operation ID returned by register_domain")]
    pub operation_id: String,
}
