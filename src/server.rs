use anyhow::Context;
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::auth::{CachedIdentityResolver, IdentityResolver, JwtIdentityResolver};
use crate::cache::TokenCache;
use crate::config::Settings;
use crate::controller::CompanyController;
use crate::decoder::JsonPayloadDecoder;
use crate::handlers::companies::CompanyRequestHandler;
use crate::{create_app, AppState};

/// Install the global tracing subscriber, honouring `RUST_LOG`
pub fn init_tracing() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "account_service=info,tower_http=debug".into()),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

/// Build the identity resolver described by `settings`
pub fn identity_resolver(settings: &Settings) -> Arc<dyn IdentityResolver> {
    let jwt: Arc<dyn IdentityResolver> = Arc::new(
        JwtIdentityResolver::new(settings.auth.jwt_secret.clone())
            .with_leeway(settings.auth.jwt_leeway_seconds),
    );

    if !settings.token_cache.enabled {
        return jwt;
    }

    let cache = TokenCache::new(&settings.token_cache.cache_config());
    Arc::new(CachedIdentityResolver::new(jwt, cache))
}

/// Application state wiring the given controller to the JSON decoder and
/// the configured identity resolver
pub fn build_state(settings: &Settings, controller: Arc<dyn CompanyController>) -> AppState {
    let handler = CompanyRequestHandler::new(
        controller,
        identity_resolver(settings),
        Arc::new(JsonPayloadDecoder::new()),
    );

    AppState {
        companies: Arc::new(handler),
    }
}

/// Serve the company API until Ctrl+C or SIGTERM
pub async fn serve(settings: Settings, controller: Arc<dyn CompanyController>) -> anyhow::Result<()> {
    let addr = settings.server.socket_addr()?;
    let app = create_app(build_state(&settings, controller));

    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to server address")?;

    serve_on(listener, app, shutdown_signal()).await
}

/// Serve `app` on an already bound listener until `shutdown` resolves
pub async fn serve_on<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener
        .local_addr()
        .context("Failed to read listener address")?;
    info!("listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    info!("account service shutdown completed");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
