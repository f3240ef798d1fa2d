//! Phantasmagoria client - unified composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use phantasm_client::infrastructure::{ApiAdapter, HostPlatform, RestIdentity, RestWorldStore};
use phantasm_client::ports::outbound::{IdentityPort, PlatformPort, RawApiPort, WorldStorePort};
use phantasm_client::presentation::Services;
use url::Url;

const DEFAULT_API_URL: &str = "http://localhost:8080/api/";
const DEFAULT_AUTH_URL: &str = "http://localhost:8080/auth/";

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phantasm_client=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Phantasmagoria client");

    let api_base = parse_base(&config_var("PHANTASM_API_URL", DEFAULT_API_URL), DEFAULT_API_URL);
    let auth_base = parse_base(
        &config_var("PHANTASM_AUTH_URL", DEFAULT_AUTH_URL),
        DEFAULT_AUTH_URL,
    );

    let platform: Arc<dyn PlatformPort> = Arc::new(HostPlatform::new());
    let api: Arc<dyn RawApiPort> = Arc::new(ApiAdapter::new(api_base));
    let auth_api: Arc<dyn RawApiPort> = Arc::new(ApiAdapter::new(auth_base));

    let store: Arc<dyn WorldStorePort> = Arc::new(RestWorldStore::new(api.clone()));
    // The store client receives the session token once sign-in completes.
    let identity: Arc<dyn IdentityPort> = Arc::new(RestIdentity::new(auth_api, vec![api]));

    dioxus::LaunchBuilder::new()
        .with_context(platform.clone())
        .with_context(Services::new(identity, store, platform))
        .launch(phantasm_client::app);
}

/// Configuration value: environment variable on desktop, the compiled-in
/// default on the web (where the hosting setup bakes URLs in at build time).
fn config_var(name: &str, default: &str) -> String {
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::env::var(name).unwrap_or_else(|_| default.to_string())
    }
    #[cfg(target_arch = "wasm32")]
    {
        let _ = name;
        default.to_string()
    }
}

fn parse_base(raw: &str, default: &str) -> Url {
    match Url::parse(raw) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!("Invalid base URL {raw}: {e}; falling back to {default}");
            Url::parse(default).expect("default base URL parses")
        }
    }
}
