//! `RegistryGateway` trait implementation

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::RegistryGateway;
use crate::types::{
    AsyncOperation, Contact, DnsRecord, Domain, DomainAvailability, ListDomainsParams,
    ListEnvelope, OperationHandle,
};

use super::SpaceshipClient;
use super::http::domain_path;

#[async_trait]
impl RegistryGateway for SpaceshipClient {
    async fn list_domains(&self, params: &ListDomainsParams) -> Result<Vec<Domain>> {
        let response =
            HttpUtils::execute(self.list_domains_request(params), "GET", "/domains").await?;
        let envelope: ListEnvelope<Domain> = response.json()?;
        Ok(envelope.into_items())
    }

    async fn check_availability(&self, domain: &str) -> Result<DomainAvailability> {
        let path = format!("/domains/availability/{}", urlencoding::encode(domain));
        self.get(&path).await?.json()
    }

    async fn get_domain_info(&self, domain: &str) -> Result<Domain> {
        self.get(&domain_path(domain)).await?.json()
    }

    async fn register_domain(&self, domain: &str, contact_id: &str) -> Result<OperationHandle> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct RegisterBody<'a> {
            contact_id: &'a str,
        }

        let response = self
            .send_json(Method::POST, &domain_path(domain), &RegisterBody { contact_id })
            .await?;
        let handle = response.operation_handle()?;
        log::info!(
            "[spaceship] Registration of {domain} accepted as operation {}",
            handle.operation_id
        );
        Ok(handle)
    }

    async fn get_dns_records(&self, domain: &str) -> Result<Vec<DnsRecord>> {
        let path = format!("{}/dns", domain_path(domain));
        let envelope: ListEnvelope<DnsRecord> = self.get(&path).await?.json()?;
        Ok(envelope.into_items())
    }

    async fn replace_dns_records(
        &self,
        domain: &str,
        records: &[DnsRecord],
    ) -> Result<OperationHandle> {
        #[derive(Serialize)]
        struct ReplaceBody<'a> {
            force: bool,
            items: &'a [DnsRecord],
        }

        let path = format!("{}/dns", domain_path(domain));
        let body = ReplaceBody {
            force: true,
            items: records,
        };
        self.send_json(Method::PUT, &path, &body)
            .await?
            .operation_handle()
    }

    async fn get_contact(&self, contact_id: &str) -> Result<Contact> {
        let path = format!("/contacts/{}", urlencoding::encode(contact_id));
        self.get(&path).await?.json()
    }

    async fn get_async_operation(&self, operation_id: &str) -> Result<AsyncOperation> {
        let path = format!("/operations/{}", urlencoding::encode(operation_id));
        self.get(&path).await?.json()
    }
}
