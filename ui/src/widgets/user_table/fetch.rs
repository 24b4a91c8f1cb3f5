//! Fetch trigger for the user table.
//!
//! The request runs off the UI thread; its outcome comes back as a
//! `UserTableAction` on the state's channel and a repaint is requested so the
//! next frame picks it up. Clicks are not de-duplicated: every click starts its
//! own request and the last one to finish wins.

use log::info;
use userdeck_business::{UserTableAction, fetch_users};

use crate::state::State;

/// Starts one users fetch against the configured endpoint.
pub fn start_fetch(state: &mut State, ctx: &egui::Context) {
    let users_url = state.config.users_url().to_owned();
    info!("Fetch Data clicked, requesting {users_url}");

    state.dispatch(UserTableAction::FetchStarted);

    let sender = state.action_sender();
    let ctx = ctx.clone();
    let task = async move {
        let action = match fetch_users(&users_url).await {
            Ok(users) => UserTableAction::FetchSucceeded(users),
            Err(err) => UserTableAction::FetchFailed(err.to_string()),
        };

        if sender.send(action).is_err() {
            log::warn!("UI closed before the users fetch finished");
        }
        ctx.request_repaint();
    };

    #[cfg(not(target_arch = "wasm32"))]
    {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(task);
            }
            Err(err) => {
                state.dispatch(UserTableAction::FetchFailed(format!(
                    "no async runtime available: {err}"
                )));
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(task);
    }
}
