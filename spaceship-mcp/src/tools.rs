//! Tool catalog and argument validation
//!
//! Each tool call is turned into a typed [`ToolCall`] before anything reaches the
//! registrar. Validation is driven by the generated input schema: required string
//! properties are coerced from scalars, then checked for presence and emptiness.

use std::sync::{Arc, LazyLock};

use rmcp::{
    ErrorData as McpError,
    model::{ErrorCode, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::schemas::{
    CheckDomainAvailabilityParams, GetAsyncOperationParams, GetContactParams,
    GetDnsRecordsParams, GetDomainInfoParams, GetDomainsParams, RegisterDomainParams,
};

/// Names of the advertised tools, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    GetDomains,
    CheckDomainAvailability,
    GetDomainInfo,
    RegisterDomain,
    GetDnsRecords,
    GetContact,
    GetAsyncOperation,
}

impl ToolName {
    pub const ALL: [Self; 7] = [
        Self::GetDomains,
        Self::CheckDomainAvailability,
        Self::GetDomainInfo,
        Self::RegisterDomain,
        Self::GetDnsRecords,
        Self::GetContact,
        Self::GetAsyncOperation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::GetDomains => "get_domains",
            Self::CheckDomainAvailability => "check_domain_availability",
            Self::GetDomainInfo => "get_domain_info",
            Self::RegisterDomain => "register_domain",
            Self::GetDnsRecords => "get_dns_records",
            Self::GetContact => "get_contact",
            Self::GetAsyncOperation => "get_async_operation",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }

    fn description(self) -> &'static str {
        match self {
            Self::GetDomains => "List domains registered with the Spaceship account (paginated)",
            Self::CheckDomainAvailability => {
                "Check whether a domain is available for registration and at what price"
            }
            Self::GetDomainInfo => {
                "Get status, expiration date and auto-renew setting of a registered domain"
            }
            Self::RegisterDomain => {
                "Register a domain. Registration is asynchronous: poll get_async_operation with the returned operationId"
            }
            Self::GetDnsRecords => "List DNS records (A, AAAA, CNAME, MX, TXT, ...) of a domain",
            Self::GetContact => "Get a contact profile (name, email, phone, postal address)",
            Self::GetAsyncOperation => {
                "Get the current status of an asynchronous operation such as a registration"
            }
        }
    }

    fn generate_schema(self) -> Arc<JsonObject> {
        match self {
            Self::GetDomains => schema_of::<GetDomainsParams>(),
            Self::CheckDomainAvailability => schema_of::<CheckDomainAvailabilityParams>(),
            Self::GetDomainInfo => schema_of::<GetDomainInfoParams>(),
            Self::RegisterDomain => schema_of::<RegisterDomainParams>(),
            Self::GetDnsRecords => schema_of::<GetDnsRecordsParams>(),
            Self::GetContact => schema_of::<GetContactParams>(),
            Self::GetAsyncOperation => schema_of::<GetAsyncOperationParams>(),
        }
    }

    /// Descriptor advertised in `tools/list`.
    pub fn descriptor(self) -> &'static Tool {
        &CATALOG[self as usize]
    }

    /// Input schema from the cached catalog; also drives argument validation.
    fn input_schema(self) -> &'static JsonObject {
        &self.descriptor().input_schema
    }
}

/// Generated once; indexed by `ToolName` discriminant, which follows `ToolName::ALL`.
static CATALOG: LazyLock<Arc<[Tool]>> = LazyLock::new(|| {
    ToolName::ALL
        .into_iter()
        .map(|tool| Tool::new(tool.as_str(), tool.description(), tool.generate_schema()))
        .collect()
});

/// The fixed tool catalog, shared by every server instance.
pub fn tool_catalog() -> Arc<[Tool]> {
    Arc::clone(&CATALOG)
}

/// A validated tool invocation, one variant per tool.
#[derive(Debug)]
pub enum ToolCall {
    GetDomains(GetDomainsParams),
    CheckDomainAvailability(CheckDomainAvailabilityParams),
    GetDomainInfo(GetDomainInfoParams),
    RegisterDomain(RegisterDomainParams),
    GetDnsRecords(GetDnsRecordsParams),
    GetContact(GetContactParams),
    GetAsyncOperation(GetAsyncOperationParams),
}

impl ToolCall {
    /// Resolve the tool and validate its arguments.
    ///
    /// Unknown names fail with `METHOD_NOT_FOUND`; missing, empty or mistyped
    /// arguments fail with `INVALID_PARAMS`.
    pub fn parse(name: &str, arguments: Option<JsonObject>) -> Result<Self, McpError> {
        let tool = ToolName::from_name(name).ok_or_else(|| {
            McpError::new(
                ErrorCode::METHOD_NOT_FOUND,
                format!("Unknown tool: {name}"),
                None,
            )
        })?;
        let args = arguments.unwrap_or_default();

        Ok(match tool {
            ToolName::GetDomains => Self::GetDomains(parse_args(tool, args)?),
            ToolName::CheckDomainAvailability => {
                Self::CheckDomainAvailability(parse_args(tool, args)?)
            }
            ToolName::GetDomainInfo => Self::GetDomainInfo(parse_args(tool, args)?),
            ToolName::RegisterDomain => Self::RegisterDomain(parse_args(tool, args)?),
            ToolName::GetDnsRecords => Self::GetDnsRecords(parse_args(tool, args)?),
            ToolName::GetContact => Self::GetContact(parse_args(tool, args)?),
            ToolName::GetAsyncOperation => Self::GetAsyncOperation(parse_args(tool, args)?),
        })
    }

    pub fn name(&self) -> ToolName {
        match self {
            Self::GetDomains(_) => ToolName::GetDomains,
            Self::CheckDomainAvailability(_) => ToolName::CheckDomainAvailability,
            Self::GetDomainInfo(_) => ToolName::GetDomainInfo,
            Self::RegisterDomain(_) => ToolName::RegisterDomain,
            Self::GetDnsRecords(_) => ToolName::GetDnsRecords,
            Self::GetContact(_) => ToolName::GetContact,
            Self::GetAsyncOperation(_) => ToolName::GetAsyncOperation,
        }
    }
}

/// Generate the JSON schema object for a parameter struct.
fn schema_of<T: JsonSchema>() -> Arc<JsonObject> {
    match serde_json::to_value(schemars::schema_for!(T)) {
        Ok(Value::Object(schema)) => Arc::new(schema),
        _ => Arc::new(JsonObject::new()),
    }
}

fn parse_args<P: DeserializeOwned>(tool: ToolName, mut args: JsonObject) -> Result<P, McpError> {
    let missing = normalize_required(tool.input_schema(), &mut args);
    if !missing.is_empty() {
        return Err(McpError::invalid_params(
            format!(
                "Missing required parameter(s) for {}: {}",
                tool.as_str(),
                missing.join(", ")
            ),
            None,
        ));
    }

    serde_json::from_value(Value::Object(args)).map_err(|e| {
        McpError::invalid_params(format!("Invalid arguments for {}: {e}", tool.as_str()), None)
    })
}

/// Coerce required string properties and report the ones that are missing or blank.
///
/// Numbers and booleans supplied for a string property are converted to their text form;
/// `null`, blank strings, arrays and objects count as missing.
fn normalize_required(schema: &JsonObject, args: &mut JsonObject) -> Vec<String> {
    let Some(required) = schema.get("required").and_then(Value::as_array) else {
        return Vec::new();
    };
    let properties = schema.get("properties").and_then(Value::as_object);

    let mut missing = Vec::new();
    for field in required.iter().filter_map(Value::as_str) {
        let expects_string = properties
            .and_then(|props| props.get(field))
            .and_then(|prop| prop.get("type"))
            .is_some_and(|ty| ty == "string");
        if !expects_string {
            if args.get(field).is_none_or(Value::is_null) {
                missing.push(field.to_string());
            }
            continue;
        }

        let coerced = match args.get(field) {
            Some(Value::String(s)) => Some(s.trim().to_string()),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            _ => None,
        };
        match coerced {
            Some(value) if !value.is_empty() => {
                args.insert(field.to_string(), Value::String(value));
            }
            _ => missing.push(field.to_string()),
        }
    }
    missing
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn args(value: Value) -> Option<JsonObject> {
        value.as_object().cloned()
    }

    #[test]
    fn catalog_has_seven_unique_tools_in_order() {
        let catalog = tool_catalog();
        let names: Vec<&str> = catalog.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(
            names,
            vec![
                "get_domains",
                "check_domain_availability",
                "get_domain_info",
                "register_domain",
                "get_dns_records",
                "get_contact",
                "get_async_operation",
            ]
        );
    }

    #[test]
    fn catalog_is_generated_once() {
        let first = tool_catalog();
        let second = tool_catalog();
        assert!(Arc::ptr_eq(&first, &second));
        for tool in ToolName::ALL {
            assert_eq!(tool.descriptor().name, tool.as_str());
            assert!(std::ptr::eq(tool.input_schema(), &*first[tool as usize].input_schema));
        }
    }

    #[test]
    fn every_schema_is_an_object() {
        for tool in ToolName::ALL {
            let schema = tool.input_schema();
            assert_eq!(
                schema.get("type").and_then(Value::as_str),
                Some("object"),
                "{} schema type",
                tool.as_str()
            );
            assert!(schema.contains_key("properties"), "{}", tool.as_str());
        }
    }

    #[test]
    fn unknown_tool_is_method_not_found() {
        let err = ToolCall::parse("delete_everything", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::METHOD_NOT_FOUND);
        assert!(err.message.contains("delete_everything"));
    }

    #[test]
    fn missing_required_lists_all_fields() {
        let err = ToolCall::parse("register_domain", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("domain"));
        assert!(err.message.contains("contactId"));
    }

    #[test]
    fn blank_string_counts_as_missing() {
        let err = ToolCall::parse("get_domain_info", args(serde_json::json!({ "domain": "  " })))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("domain"));
    }

    #[test]
    fn null_counts_as_missing() {
        let err = ToolCall::parse("get_contact", args(serde_json::json!({ "contactId": null })))
            .unwrap_err();
        assert!(err.message.contains("contactId"));
    }

    #[test]
    fn numeric_identifier_is_coerced_to_string() {
        let call =
            ToolCall::parse("get_contact", args(serde_json::json!({ "contactId": 42 }))).unwrap();
        let ToolCall::GetContact(params) = call else {
            panic!("expected GetContact");
        };
        assert_eq!(params.contact_id, "42");
    }

    #[test]
    fn identifiers_are_trimmed() {
        let call = ToolCall::parse(
            "get_domain_info",
            args(serde_json::json!({ "domain": " example.com " })),
        )
        .unwrap();
        let ToolCall::GetDomainInfo(params) = call else {
            panic!("expected GetDomainInfo");
        };
        assert_eq!(params.domain, "example.com");
    }

    #[test]
    fn get_domains_accepts_no_arguments() {
        let call = ToolCall::parse("get_domains", None).unwrap();
        assert_eq!(call.name(), ToolName::GetDomains);
    }

    #[test]
    fn mistyped_optional_is_invalid_params() {
        let err = ToolCall::parse("get_domains", args(serde_json::json!({ "take": "ten" })))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("get_domains"));
    }

    #[test]
    fn name_round_trips() {
        for tool in ToolName::ALL {
            assert_eq!(ToolName::from_name(tool.as_str()), Some(tool));
        }
        assert_eq!(ToolName::from_name("GET_DOMAINS"), None);
    }
}
