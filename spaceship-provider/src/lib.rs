//! # spaceship-provider
//!
//! Typed, single-shot access to the [Spaceship](https://www.spaceship.com/) domain
//! registrar REST API.
//!
//! ## Operations
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | [`RegistryGateway::list_domains`] | `GET /domains?take=&skip=` |
//! | [`RegistryGateway::check_availability`] | `GET /domains/availability/{domain}` |
//! | [`RegistryGateway::get_domain_info`] | `GET /domains/{domain}` |
//! | [`RegistryGateway::register_domain`] | `POST /domains/{domain}` |
//! | [`RegistryGateway::get_dns_records`] | `GET /domains/{domain}/dns` |
//! | [`RegistryGateway::replace_dns_records`] | `PUT /domains/{domain}/dns` |
//! | [`RegistryGateway::get_contact`] | `GET /contacts/{id}` |
//! | [`RegistryGateway::get_async_operation`] | `GET /operations/{id}` |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for static and cross-compiled builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use spaceship_provider::{
//!     ListDomainsParams, RegistryGateway, SpaceshipClient, SpaceshipCredentials,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SpaceshipClient::new(SpaceshipCredentials::new("key", "secret"))?;
//!
//!     for domain in client.list_domains(&ListDomainsParams::default()).await? {
//!         println!("{} ({}) expires {}", domain.name, domain.status, domain.expires_at);
//!     }
//!
//!     let op = client.register_domain("example.com", "contact-1").await?;
//!     let snapshot = client.get_async_operation(&op.operation_id).await?;
//!     println!("registration is {:?}", snapshot.status);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, UpstreamError>`](UpstreamError):
//!
//! - [`UpstreamError::Rejected`]: the API answered with an error status; the message is the
//!   API's own diagnostic when it sent one
//! - [`UpstreamError::Transport`]: no response was obtained
//! - [`UpstreamError::Decode`]: a success response had an unexpected shape
//!
//! Nothing is retried.

mod error;
mod http_client;
mod spaceship;
mod traits;
mod types;
mod utils;

pub use error::{Result, UpstreamError};

pub use spaceship::{DEFAULT_BASE_URL, SpaceshipClient, SpaceshipCredentials};

pub use traits::RegistryGateway;

pub use types::{
    AsyncOperation, Contact, DEFAULT_TAKE, DnsRecord, Domain, DomainAvailability, DomainStatus,
    ListDomainsParams, OperationHandle, OperationStatus, PostalAddress,
};
