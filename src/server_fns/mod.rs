//! Server functions for Dioxus Fullstack
//! Identity provider surface: these run on the server and are callable from
//! the client.

use dioxus::prelude::*;

use crate::domain::models::Identity;

/// Resolve the current signed-in identity, if any. Signed-out sessions are
/// a normal outcome, not an error.
#[server]
pub async fn get_current_identity() -> Result<Option<Identity>, ServerFnError> {
    use crate::infrastructure::session_store;
    use crate::shared::logging;

    let identity = session_store::current_identity(crate::config::get());
    logging::log_session_read(identity.is_some());
    Ok(identity)
}

/// Terminate the current session. Failures surface to the client so it can
/// show a notice instead of silently staying signed in.
#[server]
pub async fn sign_out() -> Result<(), ServerFnError> {
    use crate::infrastructure::session_store;
    use crate::shared::logging;

    session_store::clear_session(crate::config::get()).map_err(|e| {
        logging::log_session_clear_error(&e.to_string());
        ServerFnError::new(e)
    })
}
