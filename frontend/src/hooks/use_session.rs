use shared::UserProfile;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::auth::AuthClient;
use crate::services::logging::Logger;

/// Session-guard state. `loading` starts true so protected content never
/// flashes before the identity check resolves.
#[derive(Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<UserProfile>,
    pub loading: bool,
}

pub struct UseSessionResult {
    pub state: SessionState,
    pub actions: UseSessionActions,
}

#[derive(Clone, PartialEq)]
pub struct UseSessionActions {
    pub refresh: Callback<()>,
    pub sign_out: Callback<()>,
}

#[hook]
pub fn use_session(auth: &AuthClient) -> UseSessionResult {
    let user = use_state(|| Option::<UserProfile>::None);
    let loading = use_state(|| true);

    let refresh = {
        let auth = auth.clone();
        let user = user.clone();
        let loading = loading.clone();

        use_callback((), move |_, _| {
            let auth = auth.clone();
            let user = user.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match auth.current_user().await {
                    Ok(current) => {
                        user.set(current);
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "session",
                            &format!("Identity check failed: {}", e),
                        );
                        // An unreachable auth collaborator gates the same
                        // way as a missing identity.
                        user.set(None);
                    }
                }

                loading.set(false);
            });
        })
    };

    let sign_out = {
        let auth = auth.clone();
        let user = user.clone();

        use_callback((), move |_, _| {
            let auth = auth.clone();
            let user = user.clone();

            spawn_local(async move {
                if let Err(e) = auth.sign_out().await {
                    Logger::warn_with_component("session", &format!("Sign-out failed: {}", e));
                }
                user.set(None);
            });
        })
    };

    // Check the identity on mount.
    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    UseSessionResult {
        state: SessionState {
            user: (*user).clone(),
            loading: *loading,
        },
        actions: UseSessionActions { refresh, sign_out },
    }
}
