//! MCP Server implementation for the Spaceship registrar.
//!
//! Exposes registered domains as resources and 7 tools for AI agents.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::{
        CallToolRequestParams, CallToolResult, Content, Implementation, JsonObject,
        ListResourcesResult, ListToolsResult, PaginatedRequestParams, ProtocolVersion,
        ReadResourceRequestParams, ReadResourceResult, Resource, ResourceContents,
        ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
};
use serde::Serialize;
use spaceship_provider::{ListDomainsParams, RegistryGateway, UpstreamError};

use crate::resources::{CatalogErrorPolicy, JSON_MIME_TYPE, domain_resource, parse_domain_uri};
use crate::tools::{ToolCall, ToolName, tool_catalog};

/// Sanitize error messages to prevent sensitive information leakage.
///
/// Logs the full error to stderr but returns a generic message to the client.
fn sanitize_internal_error(error: impl std::fmt::Display, context: &str) -> McpError {
    tracing::error!("{context} error: {error}");
    McpError::internal_error(
        format!("{context} failed - check server logs for details"),
        None,
    )
}

/// Surface a registrar failure with its message intact.
///
/// The structured error (status code, kind) travels in the error data.
fn map_upstream_error(context: &str, error: &UpstreamError) -> McpError {
    if error.is_expected() {
        tracing::warn!("{context} error: {error}");
    } else {
        tracing::error!("{context} error: {error}");
    }
    McpError::internal_error(error.to_string(), serde_json::to_value(error).ok())
}

fn to_pretty_json<T: Serialize>(value: &T, context: &str) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| sanitize_internal_error(e, &format!("Serialize {context}")))
}

/// Await a gateway operation and wrap its result as a single JSON text block.
async fn run_gateway_tool<T: Serialize>(
    future: impl std::future::Future<Output = spaceship_provider::Result<T>>,
    tool: ToolName,
) -> Result<CallToolResult, McpError> {
    let result = future
        .await
        .map_err(|e| map_upstream_error(tool.as_str(), &e))?;

    let json = to_pretty_json(&result, &format!("{} result", tool.as_str()))?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// MCP Server for the Spaceship registrar.
///
/// Holds no mutable state: concurrent requests are independent.
#[derive(Clone)]
pub struct SpaceshipMcp {
    /// Registrar API access.
    gateway: Arc<dyn RegistryGateway>,
    /// Static tool catalog.
    tools: Arc<[Tool]>,
    /// Behaviour of `resources/list` when the registrar cannot be reached.
    catalog_policy: CatalogErrorPolicy,
}

impl SpaceshipMcp {
    /// Create a new MCP server instance.
    #[must_use]
    pub fn new(gateway: Arc<dyn RegistryGateway>) -> Self {
        Self::with_catalog_policy(gateway, CatalogErrorPolicy::default())
    }

    pub fn with_catalog_policy(
        gateway: Arc<dyn RegistryGateway>,
        catalog_policy: CatalogErrorPolicy,
    ) -> Self {
        Self {
            gateway,
            tools: tool_catalog(),
            catalog_policy,
        }
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Resources for the first page of registered domains.
    pub(crate) async fn list_domain_resources(&self) -> Result<Vec<Resource>, McpError> {
        match self.gateway.list_domains(&ListDomainsParams::default()).await {
            Ok(domains) => Ok(domains.iter().map(domain_resource).collect()),
            Err(e) => match self.catalog_policy {
                CatalogErrorPolicy::DegradeToEmpty => {
                    tracing::warn!("List resources failed, advertising none: {e}");
                    Ok(Vec::new())
                }
                CatalogErrorPolicy::Propagate => Err(map_upstream_error("List resources", &e)),
            },
        }
    }

    /// Read `spaceship://domains/<name>` as a JSON snapshot of the domain.
    pub(crate) async fn read_domain_resource(
        &self,
        uri: &str,
    ) -> Result<ReadResourceResult, McpError> {
        let name = parse_domain_uri(uri).ok_or_else(|| {
            tracing::warn!("Unsupported resource URI: {uri}");
            McpError::invalid_request(format!("Unsupported resource URI: {uri}"), None)
        })?;

        // Every failure reads as "not found" to the host, network trouble included.
        let domain = self.gateway.get_domain_info(&name).await.map_err(|e| {
            tracing::warn!("Read resource {uri} failed: {e}");
            McpError::invalid_request(format!("Domain not found: {name}"), None)
        })?;

        let json = to_pretty_json(&domain, "domain resource")?;
        let mut contents = ResourceContents::text(json, uri);
        if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
            *mime_type = Some(JSON_MIME_TYPE.to_string());
        }

        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }

    /// Validate a tool call and run it against the registrar.
    pub(crate) async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let call = ToolCall::parse(name, arguments).inspect_err(|e| {
            tracing::warn!("Rejected call to {name}: {}", e.message);
        })?;
        let tool = call.name();
        tracing::debug!("Calling tool {}", tool.as_str());

        let gateway = &self.gateway;
        match call {
            ToolCall::GetDomains(params) => {
                let params = ListDomainsParams::new(params.take, params.skip);
                run_gateway_tool(gateway.list_domains(&params), tool).await
            }
            ToolCall::CheckDomainAvailability(params) => {
                run_gateway_tool(gateway.check_availability(&params.domain), tool).await
            }
            ToolCall::GetDomainInfo(params) => {
                run_gateway_tool(gateway.get_domain_info(&params.domain), tool).await
            }
            ToolCall::RegisterDomain(params) => {
                run_gateway_tool(
                    gateway.register_domain(&params.domain, &params.contact_id),
                    tool,
                )
                .await
            }
            ToolCall::GetDnsRecords(params) => {
                run_gateway_tool(gateway.get_dns_records(&params.domain), tool).await
            }
            ToolCall::GetContact(params) => {
                run_gateway_tool(gateway.get_contact(&params.contact_id), tool).await
            }
            ToolCall::GetAsyncOperation(params) => {
                run_gateway_tool(gateway.get_async_operation(&params.operation_id), tool).await
            }
        }
    }
}

impl ServerHandler for SpaceshipMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Spaceship MCP Server - Manage domains registered with Spaceship. \
                 Each domain is readable as the resource spaceship://domains/<domain-name>. \
                 Use get_domains to list domains, check_domain_availability before register_domain, \
                 and get_async_operation to follow a registration until it completes. \
                 get_dns_records and get_contact return DNS records and contact profiles."
                    .into(),
            ),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        self.list_domain_resources()
            .await
            .map(ListResourcesResult::with_all_items)
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.read_domain_resource(&request.uri).await
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools.to_vec()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch(&request.name, request.arguments).await
    }
}

#[cfg(test)]
#[path = "test_mocks.rs"]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
pub(crate) mod test_mocks;

#[cfg(test)]
#[path = "server_tests.rs"]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests;

#[cfg(test)]
#[path = "client_integration_tests.rs"]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod client_integration_tests;
