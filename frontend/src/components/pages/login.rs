use shared::UserProfile;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::auth::AuthClient;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub on_authenticated: Callback<UserProfile>,
}

/// Combined sign-in / sign-up view. Collaborator failures surface as a
/// single message string; the client never retries.
#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let is_login = use_state(|| true);
    let show_password = use_state(|| false);
    let loading = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let email = use_state(String::new);
    let password = use_state(String::new);
    let name = use_state(String::new);

    let on_submit = {
        let is_login = is_login.clone();
        let loading = loading.clone();
        let error = error.clone();
        let email = email.clone();
        let password = password.clone();
        let name = name.clone();
        let on_authenticated = props.on_authenticated.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let is_login = *is_login;
            let loading = loading.clone();
            let error = error.clone();
            let email = (*email).clone();
            let password = (*password).clone();
            let name = (*name).clone();
            let on_authenticated = on_authenticated.clone();

            spawn_local(async move {
                loading.set(true);
                error.set(None);

                let auth = AuthClient::new();
                let result = if is_login {
                    auth.sign_in(&email, &password).await
                } else {
                    auth.sign_up(&email, &password, &name).await
                };

                match result {
                    Ok(profile) => on_authenticated.emit(profile),
                    Err(message) => error.set(Some(message)),
                }

                loading.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let select_login = {
        let is_login = is_login.clone();
        Callback::from(move |_| is_login.set(true))
    };
    let select_signup = {
        let is_login = is_login.clone();
        Callback::from(move |_| is_login.set(false))
    };
    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_| show_password.set(!*show_password))
    };

    html! {
        <div class="auth-screen">
            <div class="auth-card-wrapper">
                <div class="auth-logo">
                    <h1>{"GTFit"}</h1>
                    <p>{"Your premium fitness partner"}</p>
                </div>

                <div class="card auth-card">
                    <div class="auth-tabs">
                        <button
                            type="button"
                            class={if *is_login { "btn tab active" } else { "btn tab" }}
                            onclick={select_login}
                        >
                            {"Login"}
                        </button>
                        <button
                            type="button"
                            class={if !*is_login { "btn tab active" } else { "btn tab" }}
                            onclick={select_signup}
                        >
                            {"Sign up"}
                        </button>
                    </div>

                    <form class="auth-form" onsubmit={on_submit}>
                        {if !*is_login {
                            html! {
                                <div class="form-group">
                                    <label for="name">{"Full name"}</label>
                                    <input
                                        type="text"
                                        id="name"
                                        placeholder="Your name"
                                        value={(*name).clone()}
                                        onchange={on_name_change}
                                        required=true
                                    />
                                </div>
                            }
                        } else { html! {} }}

                        <div class="form-group">
                            <label for="email">{"E-mail"}</label>
                            <input
                                type="email"
                                id="email"
                                placeholder="you@email.com"
                                value={(*email).clone()}
                                onchange={on_email_change}
                                required=true
                            />
                        </div>

                        <div class="form-group">
                            <label for="password">{"Password"}</label>
                            <div class="password-field">
                                <input
                                    type={if *show_password { "text" } else { "password" }}
                                    id="password"
                                    placeholder="••••••••"
                                    value={(*password).clone()}
                                    onchange={on_password_change}
                                    required=true
                                />
                                <button
                                    type="button"
                                    class="btn btn-ghost password-toggle"
                                    onclick={toggle_password}
                                >
                                    {if *show_password { "Hide" } else { "Show" }}
                                </button>
                            </div>
                        </div>

                        {if let Some(message) = (*error).as_ref() {
                            html! {
                                <div class="form-message error">
                                    {message}
                                </div>
                            }
                        } else { html! {} }}

                        <button type="submit" class="btn btn-primary" disabled={*loading}>
                            {if *loading {
                                "Processing..."
                            } else if *is_login {
                                "Sign in"
                            } else {
                                "Create account"
                            }}
                        </button>
                    </form>
                </div>

                <p class="auth-footnote">
                    {"By continuing, you agree to our Terms of Use"}
                </p>
            </div>
        </div>
    }
}
