//! CryptoHub Insight Hub - Main Entry Point
//!
//! Configures the server with the bookmark store routes and the Dioxus
//! application. Uses the dioxus::serve() pattern for dx serve compatibility.

use crypto_insight_hub::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    // IMPORTANT: Use dioxus::server::axum, NOT axum directly
    use dioxus::server::axum::{
        routing::{get, put},
        Extension,
    };

    // Print a full backtrace for any panic that escapes a handler
    std::panic::set_hook(Box::new(|panic_info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        eprintln!("\n=== PANIC CAUGHT ===");
        eprintln!("Panic info: {}", panic_info);
        eprintln!("Backtrace:\n{}", backtrace);
        eprintln!("=== END PANIC ===\n");
    }));

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting CryptoHub insight hub...");

    use crypto_insight_hub::handlers::{
        get_bookmarks_handler, set_bookmark_handler, BookmarksState,
    };

    dioxus::serve(|| {
        async move {
            let config = crypto_insight_hub::config::get();

            if config.demo_user {
                if let Err(e) =
                    crypto_insight_hub::infrastructure::session_store::seed_demo_session(config)
                {
                    tracing::warn!("Failed to seed demo session: {e}");
                }
            }

            let mut router = dioxus::server::router(App);

            // Bookmark routes only exist when the store opened; the rest of
            // the app keeps working without them.
            match BookmarksState::new() {
                Ok(state) => {
                    tracing::info!(
                        "Bookmark store opened at {}",
                        config.data_dir.display()
                    );
                    router = router
                        .route("/api/bookmarks/{user_id}", get(get_bookmarks_handler))
                        .route(
                            "/api/bookmarks/{user_id}/{item_id}",
                            put(set_bookmark_handler),
                        )
                        .layer(Extension(state));
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to open bookmark store: {}. Saved insights disabled.",
                        e
                    );
                }
            }

            Ok(router.layer(tower_http::trace::TraceLayer::new_for_http()))
        }
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] CryptoHub insight hub initialized".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
