//! Domain resources
//!
//! Every registered domain is exposed as `spaceship://domains/<domain-name>`.

use chrono::{DateTime, NaiveDate};
use rmcp::model::{AnnotateAble, RawResource, Resource};
use spaceship_provider::Domain;
use url::Url;

pub const RESOURCE_SCHEME: &str = "spaceship";
const DOMAINS_HOST: &str = "domains";
pub const JSON_MIME_TYPE: &str = "application/json";

/// What to do when the domain listing behind `resources/list` fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CatalogErrorPolicy {
    /// Log the failure and advertise no resources; the host keeps working.
    #[default]
    DegradeToEmpty,
    /// Return the upstream failure to the host.
    Propagate,
}

/// URI of the resource representing `domain_name`.
pub fn domain_uri(domain_name: &str) -> String {
    format!("{RESOURCE_SCHEME}://{DOMAINS_HOST}/{domain_name}")
}

/// Extract the domain name from a `spaceship://domains/<name>` URI.
///
/// The segment is percent-decoded, so internationalized names advertised by
/// [`domain_uri`] read back unchanged. Returns `None` for any other scheme, host
/// or path shape, and for segments that do not decode to a single path component.
pub fn parse_domain_uri(uri: &str) -> Option<String> {
    let url = Url::parse(uri).ok()?;
    if url.scheme() != RESOURCE_SCHEME || url.host_str() != Some(DOMAINS_HOST) {
        return None;
    }
    if url.query().is_some() || url.fragment().is_some() {
        return None;
    }

    let mut segments = url.path_segments()?;
    let name = segments.next().filter(|s| !s.is_empty())?;
    if segments.next().is_some() {
        return None;
    }

    let name = urlencoding::decode(name).ok()?;
    if name.contains('/') {
        return None;
    }
    Some(name.into_owned())
}

/// Project a domain into its resource descriptor.
pub fn domain_resource(domain: &Domain) -> Resource {
    let mut raw = RawResource::new(domain_uri(&domain.name), domain.name.clone());
    raw.description = Some(describe(domain));
    raw.mime_type = Some(JSON_MIME_TYPE.to_string());
    raw.no_annotation()
}

fn describe(domain: &Domain) -> String {
    let renew = if domain.auto_renew {
        "auto-renew on"
    } else {
        "auto-renew off"
    };
    format!(
        "Status: {}, expires {} ({renew})",
        domain.status,
        format_expiry(&domain.expires_at)
    )
}

/// Render an expiry as `YYYY-MM-DD`, keeping the raw value when it is not a known format.
fn format_expiry(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.to_string();
    }
    raw.to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use spaceship_provider::DomainStatus;

    fn domain(expires_at: &str) -> Domain {
        Domain {
            id: "d1".to_string(),
            name: "example.com".to_string(),
            status: DomainStatus::Active,
            expires_at: expires_at.to_string(),
            auto_renew: true,
        }
    }

    #[test]
    fn uri_round_trips() {
        let uri = domain_uri("example.com");
        assert_eq!(uri, "spaceship://domains/example.com");
        assert_eq!(parse_domain_uri(&uri), Some("example.com".to_string()));
    }

    #[test]
    fn internationalized_name_round_trips() {
        let resource = domain_resource(&Domain {
            name: "münchen.de".to_string(),
            ..domain("2026-01-01")
        });
        assert_eq!(parse_domain_uri(&resource.uri), Some("münchen.de".to_string()));
    }

    #[test]
    fn escaped_segment_is_decoded() {
        assert_eq!(
            parse_domain_uri("spaceship://domains/ex%41mple.com"),
            Some("exAmple.com".to_string())
        );
        assert_eq!(parse_domain_uri("spaceship://domains/a%2Fb.com"), None);
        assert_eq!(parse_domain_uri("spaceship://domains/%FF.com"), None);
    }

    #[test]
    fn rejects_other_schemes_and_paths() {
        for uri in [
            "https://domains/example.com",
            "spaceship://contacts/c1",
            "spaceship://domains/",
            "spaceship://domains",
            "spaceship://domains/example.com/dns",
            "spaceship://domains/example.com?x=1",
            "spaceship:domains/example.com",
            "not a uri",
            "",
        ] {
            assert_eq!(parse_domain_uri(uri), None, "accepted {uri:?}");
        }
    }

    #[test]
    fn resource_describes_status_and_expiry() {
        let resource = domain_resource(&domain("2026-01-01T12:30:00Z"));
        assert_eq!(resource.uri, "spaceship://domains/example.com");
        assert_eq!(resource.name, "example.com");
        assert_eq!(resource.mime_type.as_deref(), Some(JSON_MIME_TYPE));
        let description = resource.description.clone().unwrap();
        assert!(description.contains("active"));
        assert!(description.contains("2026-01-01"));
        assert!(description.contains("auto-renew on"));
    }

    #[test]
    fn expiry_formats() {
        assert_eq!(format_expiry("2026-01-01"), "2026-01-01");
        assert_eq!(format_expiry("2026-03-04T05:06:07+00:00"), "2026-03-04");
        assert_eq!(format_expiry("next spring"), "next spring");
    }

    #[test]
    fn default_policy_degrades() {
        assert_eq!(CatalogErrorPolicy::default(), CatalogErrorPolicy::DegradeToEmpty);
    }
}
