//! Infrastructure adapters - concrete implementations of the outbound ports.

pub mod http_client;
pub mod platform;
pub mod rest_identity;
pub mod rest_store;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use http_client::ApiAdapter;
pub use platform::HostPlatform;
pub use rest_identity::RestIdentity;
pub use rest_store::RestWorldStore;
