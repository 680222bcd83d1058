//! Server entry-point – Axum + Leptos SSR.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::path::PathBuf;

    use anyhow::Context;
    use axum::Router;
    use catalog_common::config;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::services::ServeDir;

    use catalog_web::app::{shell, App, AppState};
    use catalog_web::server::db;

    // ── Tracing ──────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_web=info,catalog_common=info,tower_http=info".into()),
        )
        .init();

    // ── Configuration ────────────────────────────────────────────────────
    let config_path = PathBuf::from(
        std::env::var("CATALOG_CONFIG").unwrap_or_else(|_| config::Config::default_path().into()),
    );
    let config = config::load_or_default(&config_path)?;

    let conf = get_configuration(None).context("Cannot read Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    db::ensure_catalog_schema(&config.db_path)?;
    tracing::info!("Database ready at {}", config.db_path.display());

    if config.seed_demo_data {
        if let Some(token) = db::seed_demo(&config.db_path, chrono::Utc::now())? {
            tracing::info!(
                "Seeded demo catalog; sign in by setting cookie {}={token}",
                config.session_cookie
            );
        }
    }

    let state = AppState {
        db_path: config.db_path.clone(),
        session_cookie: config.session_cookie.clone(),
        leptos_options: leptos_options.clone(),
    };

    // ── Routes ───────────────────────────────────────────────────────────
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let state = state.clone();
                move || provide_context(state.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        // Serve static assets (WASM bundle, CSS, images, etc.)
        .nest_service("/pkg", ServeDir::new(format!("{site_root}/pkg")))
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    tracing::info!("Catalog Web listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Cannot bind {addr}"))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // This binary is only built with the `ssr` feature.
    // The WASM entry point is `lib::hydrate()`.
}
