//! Outbound ports: identity provider, document store, HTTP, platform.

mod identity_port;
mod platform_port;
mod raw_api_port;
mod world_store_port;

pub use identity_port::{AuthError, AuthListener, AuthUser, IdentityPort};
pub use platform_port::PlatformPort;
pub use raw_api_port::{ApiError, RawApiPort};
pub use world_store_port::{StoreError, WorldStorePort};

#[cfg(any(test, feature = "testing"))]
pub use identity_port::MockIdentityPort;
#[cfg(any(test, feature = "testing"))]
pub use world_store_port::MockWorldStorePort;
