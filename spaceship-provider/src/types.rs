use serde::{Deserialize, Serialize};

// ============ Pagination ============

/// Default number of domains per `list_domains` call.
pub const DEFAULT_TAKE: u32 = 10;

/// Pagination parameters for `GET /domains`.
///
/// Forwarded to the API as the `take` / `skip` query parameters without any
/// local bounds checking.
///
/// # Default
///
/// The default is `take = 10, skip = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDomainsParams {
    /// Maximum number of domains to return.
    pub take: u32,
    /// Number of domains to skip.
    pub skip: u32,
}

impl Default for ListDomainsParams {
    fn default() -> Self {
        Self {
            take: DEFAULT_TAKE,
            skip: 0,
        }
    }
}

impl ListDomainsParams {
    /// Build params from optional values, filling in the defaults.
    #[must_use]
    pub fn new(take: Option<u32>, skip: Option<u32>) -> Self {
        let defaults = Self::default();
        Self {
            take: take.unwrap_or(defaults.take),
            skip: skip.unwrap_or(defaults.skip),
        }
    }
}

// ============ Domain Types ============

/// Lifecycle status of a registered domain.
///
/// Serialized as lowercase strings. Values the registrar adds later decode to
/// [`Unknown`](Self::Unknown).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainStatus {
    /// Registered and in good standing.
    Active,
    /// Past its expiration date.
    Expired,
    /// Registration or transfer not yet complete.
    Pending,
    /// Suspended by the registrar.
    Suspended,
    /// Locked against changes.
    Locked,
    /// Status not recognised.
    #[serde(other)]
    Unknown,
}

impl DomainStatus {
    /// Lowercase label, as sent on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Pending => "pending",
            Self::Suspended => "suspended",
            Self::Locked => "locked",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for DomainStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A domain registered with the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    /// Registrar identifier.
    pub id: String,
    /// Fully qualified domain name (e.g., `"example.com"`).
    pub name: String,
    /// Current lifecycle status.
    pub status: DomainStatus,
    /// Expiration timestamp exactly as the registrar reports it.
    pub expires_at: String,
    /// Whether the registrar renews automatically.
    pub auto_renew: bool,
}

/// Result of an availability check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainAvailability {
    /// Whether the domain can be registered.
    pub available: bool,
    /// Registration price, when applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

// ============ DNS Record Types ============

/// A DNS resource record attached to a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Registrar identifier. Absent on records that have not been created yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Record type (`A`, `AAAA`, `CNAME`, `MX`, `TXT`, ...).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record name relative to the domain (`@` for the apex).
    pub name: String,
    /// Record value.
    pub content: String,
    /// Time to live, in seconds.
    pub ttl: u32,
}

// ============ Contact Types ============

/// Postal address of a contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    pub street: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub postal_code: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
}

/// A registrant / admin / tech contact profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
}

// ============ Async Operation Types ============

/// Progress of a long-running registrar operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
    /// Status not recognised.
    #[serde(other)]
    Unknown,
}

/// Point-in-time snapshot of an asynchronous operation.
///
/// Callers poll [`RegistryGateway::get_async_operation`](crate::RegistryGateway::get_async_operation)
/// themselves; nothing here waits for completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsyncOperation {
    pub id: String,
    pub status: OperationStatus,
    /// Operation-specific payload; its shape is defined by the registrar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
}

/// Handle returned by operations the registrar completes asynchronously.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationHandle {
    pub operation_id: String,
}

// ============ Wire Envelopes ============

/// List responses arrive either wrapped as `{"items": [...]}` or as a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListEnvelope<T> {
    Wrapped { items: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    pub(crate) fn into_items(self) -> Vec<T> {
        match self {
            Self::Wrapped { items } | Self::Bare(items) => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_domains_params_defaults() {
        assert_eq!(
            ListDomainsParams::new(None, None),
            ListDomainsParams { take: 10, skip: 0 }
        );
        assert_eq!(
            ListDomainsParams::new(Some(25), None),
            ListDomainsParams { take: 25, skip: 0 }
        );
    }

    #[test]
    fn domain_uses_camel_case_fields() {
        let json = serde_json::json!({
            "id": "d1",
            "name": "example.com",
            "status": "active",
            "expiresAt": "2026-01-01",
            "autoRenew": true
        });
        let domain: Domain = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(domain.status, DomainStatus::Active);
        assert!(domain.auto_renew);
        assert_eq!(serde_json::to_value(&domain).unwrap(), json);
    }

    #[test]
    fn unknown_domain_status_is_tolerated() {
        let status: DomainStatus = serde_json::from_str("\"redemption\"").unwrap();
        assert_eq!(status, DomainStatus::Unknown);
    }

    #[test]
    fn dns_record_type_field_is_renamed() {
        let record: DnsRecord = serde_json::from_value(serde_json::json!({
            "type": "MX",
            "name": "@",
            "content": "mail.example.com",
            "ttl": 3600
        }))
        .unwrap();
        assert_eq!(record.record_type, "MX");
        assert!(record.id.is_none());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "MX");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn availability_price_is_optional() {
        let taken: DomainAvailability =
            serde_json::from_value(serde_json::json!({ "available": false })).unwrap();
        assert!(taken.price.is_none());
        assert_eq!(
            serde_json::to_value(&taken).unwrap(),
            serde_json::json!({ "available": false })
        );
    }

    #[test]
    fn operation_status_snake_case() {
        let op: AsyncOperation = serde_json::from_value(serde_json::json!({
            "id": "op-1",
            "status": "in_progress"
        }))
        .unwrap();
        assert_eq!(op.status, OperationStatus::InProgress);
        assert!(op.result.is_none());
    }

    #[test]
    fn list_envelope_accepts_both_shapes() {
        let wrapped: ListEnvelope<u32> =
            serde_json::from_value(serde_json::json!({ "items": [1, 2], "total": 2 })).unwrap();
        let bare: ListEnvelope<u32> = serde_json::from_value(serde_json::json!([3])).unwrap();
        assert_eq!(wrapped.into_items(), vec![1, 2]);
        assert_eq!(bare.into_items(), vec![3]);
    }
}
