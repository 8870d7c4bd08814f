use super::*;

use async_trait::async_trait;
use spaceship_provider::{
    AsyncOperation, Contact, DnsRecord, Domain, DomainAvailability, DomainStatus,
    OperationHandle, OperationStatus, PostalAddress,
};
use tokio::sync::Mutex;

/// One recorded gateway invocation: operation name plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayCall {
    pub operation: &'static str,
    pub args: Vec<String>,
}

/// Scriptable in-memory registrar.
///
/// Records every call and fails all of them once `set_error` has been given an error.
#[derive(Default)]
pub struct MockRegistryGateway {
    calls: Mutex<Vec<GatewayCall>>,
    domains: Mutex<Vec<Domain>>,
    error: Mutex<Option<UpstreamError>>,
    operation_id: Mutex<Option<String>>,
}

impl MockRegistryGateway {
    pub fn with_domains(domains: Vec<Domain>) -> Self {
        Self {
            domains: Mutex::new(domains),
            ..Self::default()
        }
    }

    pub async fn set_error(&self, error: Option<UpstreamError>) {
        *self.error.lock().await = error;
    }

    pub async fn set_operation_id(&self, operation_id: &str) {
        *self.operation_id.lock().await = Some(operation_id.to_string());
    }

    pub async fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().await.clone()
    }

    async fn record(
        &self,
        operation: &'static str,
        args: &[&str],
    ) -> spaceship_provider::Result<()> {
        self.calls.lock().await.push(GatewayCall {
            operation,
            args: args.iter().map(|a| (*a).to_string()).collect(),
        });
        match self.error.lock().await.clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    async fn find_domain(&self, name: &str) -> spaceship_provider::Result<Domain> {
        self.domains
            .lock()
            .await
            .iter()
            .find(|d| d.name == name)
            .cloned()
            .ok_or_else(|| UpstreamError::Rejected {
                status: 404,
                message: format!("Domain {name} not found"),
            })
    }

    async fn next_operation(&self) -> OperationHandle {
        OperationHandle {
            operation_id: self
                .operation_id
                .lock()
                .await
                .clone()
                .unwrap_or_else(|| "op-1".to_string()),
        }
    }
}

#[async_trait]
impl RegistryGateway for MockRegistryGateway {
    async fn list_domains(
        &self,
        params: &ListDomainsParams,
    ) -> spaceship_provider::Result<Vec<Domain>> {
        self.record(
            "list_domains",
            &[&params.take.to_string(), &params.skip.to_string()],
        )
        .await?;
        Ok(self.domains.lock().await.clone())
    }

    async fn check_availability(
        &self,
        domain: &str,
    ) -> spaceship_provider::Result<DomainAvailability> {
        self.record("check_availability", &[domain]).await?;
        Ok(DomainAvailability {
            available: true,
            price: Some(9.98),
        })
    }

    async fn get_domain_info(&self, domain: &str) -> spaceship_provider::Result<Domain> {
        self.record("get_domain_info", &[domain]).await?;
        self.find_domain(domain).await
    }

    async fn register_domain(
        &self,
        domain: &str,
        contact_id: &str,
    ) -> spaceship_provider::Result<OperationHandle> {
        self.record("register_domain", &[domain, contact_id]).await?;
        Ok(self.next_operation().await)
    }

    async fn get_dns_records(&self, domain: &str) -> spaceship_provider::Result<Vec<DnsRecord>> {
        self.record("get_dns_records", &[domain]).await?;
        Ok(vec![dns_record()])
    }

    async fn replace_dns_records(
        &self,
        domain: &str,
        records: &[DnsRecord],
    ) -> spaceship_provider::Result<OperationHandle> {
        self.record("replace_dns_records", &[domain, &records.len().to_string()])
            .await?;
        Ok(self.next_operation().await)
    }

    async fn get_contact(&self, contact_id: &str) -> spaceship_provider::Result<Contact> {
        self.record("get_contact", &[contact_id]).await?;
        Ok(test_contact(contact_id))
    }

    async fn get_async_operation(
        &self,
        operation_id: &str,
    ) -> spaceship_provider::Result<AsyncOperation> {
        self.record("get_async_operation", &[operation_id]).await?;
        Ok(AsyncOperation {
            id: operation_id.to_string(),
            status: OperationStatus::Completed,
            result: Some(serde_json::json!({ "domain": "example.com" })),
        })
    }
}

pub fn test_domain(name: &str) -> Domain {
    Domain {
        id: "d1".to_string(),
        name: name.to_string(),
        status: DomainStatus::Active,
        expires_at: "2026-01-01".to_string(),
        auto_renew: true,
    }
}

pub fn dns_record() -> DnsRecord {
    DnsRecord {
        id: Some("rec-1".to_string()),
        record_type: "A".to_string(),
        name: "@".to_string(),
        content: "192.0.2.1".to_string(),
        ttl: 3600,
    }
}

pub fn test_contact(contact_id: &str) -> Contact {
    Contact {
        id: contact_id.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        organization: None,
        email: Some("ada@example.com".to_string()),
        phone: None,
        address: Some(PostalAddress {
            street: "1 Analytical Way".to_string(),
            city: "London".to_string(),
            state: None,
            postal_code: "N1 9GU".to_string(),
            country: "GB".to_string(),
        }),
    }
}

pub fn transport_error() -> UpstreamError {
    UpstreamError::Transport {
        message: "connection refused".to_string(),
    }
}

pub fn build_server(gateway: Arc<MockRegistryGateway>) -> SpaceshipMcp {
    SpaceshipMcp::new(gateway)
}
