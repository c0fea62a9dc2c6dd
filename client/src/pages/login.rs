//! Login page: email + password form against the authentication endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form logic lives in [`LoginForm`]; this page only binds it to signals,
//! performs the request on the browser task queue, and hands a granted token
//! to the [`Session`] collaborator. Leaving the screen after login is the
//! job of the session-driven redirect, not of the submit handler.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::SIGNUP_ROUTE;
#[cfg(feature = "hydrate")]
use crate::net::api::AuthApi;
use crate::net::api::HttpAuthApi;
#[cfg(feature = "hydrate")]
use crate::state::login_form::finish_submit;
use crate::state::login_form::LoginForm;
use crate::state::session::Session;
use crate::util::auth::install_signed_in_redirect;
use crate::util::liveness::MountGuard;

pub(crate) const EMAIL_LABEL: &str = "Email input";
pub(crate) const EMAIL_HINT: &str = "Enter your email address";
pub(crate) const PASSWORD_LABEL: &str = "Password input";
pub(crate) const PASSWORD_HINT: &str = "Enter your password";
pub(crate) const SUBMIT_LABEL: &str = "Login button";
pub(crate) const SIGNUP_LABEL: &str = "Sign up navigation";

/// What the submit control shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SubmitContent {
    Label,
    Progress,
}

pub(crate) fn submit_content(is_submitting: bool) -> SubmitContent {
    if is_submitting { SubmitContent::Progress } else { SubmitContent::Label }
}

/// Navigate to the signup screen, whatever the form holds.
pub(crate) fn request_signup(navigate: impl Fn(&str)) {
    navigate(SIGNUP_ROUTE);
}

#[component]
pub fn LoginPage() -> impl IntoView {
    // Collaborators are resolved at mount, never inside the async continuation.
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let api = HttpAuthApi::default();

    let form = RwSignal::new(LoginForm::default());
    let mounted = MountGuard::new();
    {
        let mounted = mounted.clone();
        on_cleanup(move || mounted.release());
    }

    install_signed_in_redirect(session, navigate.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match form.try_update(LoginForm::begin_submit) {
            Some(Ok(request)) => request,
            Some(Err(blocked)) => {
                log::debug!("login submit blocked: {blocked}");
                return;
            }
            None => return,
        };
        log::debug!("login submit started");

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let mounted = mounted.clone();
            leptos::task::spawn_local(async move {
                let outcome = api.login(&request).await;
                finish_submit(form, &mounted, outcome, &session);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &api, &mounted, session);
        }
    };

    let on_signup = move |_| request_signup(|route| navigate(route, NavigateOptions::default()));

    let submitting = move || form.with(LoginForm::is_submitting);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__title">"Welcome Back!"</h1>
                <form class="login-form" novalidate=true on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        inputmode="email"
                        autocapitalize="none"
                        autocomplete="email"
                        placeholder="Email Address"
                        aria-label=EMAIL_LABEL
                        aria-describedby="login-email-hint"
                        prop:value=move || form.with(|f| f.email().to_owned())
                        on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        aria-label=PASSWORD_LABEL
                        aria-describedby="login-password-hint"
                        prop:value=move || form.with(|f| f.password().to_owned())
                        on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                    />
                    <span id="login-email-hint" class="visually-hidden">{EMAIL_HINT}</span>
                    <span id="login-password-hint" class="visually-hidden">{PASSWORD_HINT}</span>
                    <Show when=move || form.with(|f| f.error_message().is_some())>
                        <p class="login-message login-message--error" role="alert">
                            {move || form.with(|f| f.error_message().unwrap_or_default().to_owned())}
                        </p>
                    </Show>
                    <button
                        class="login-button"
                        type="submit"
                        role="button"
                        aria-label=SUBMIT_LABEL
                        aria-busy=move || if submitting() { "true" } else { "false" }
                        disabled=submitting
                    >
                        {move || match submit_content(submitting()) {
                            SubmitContent::Label => view! { <span class="login-button__label">"Login"</span> }.into_any(),
                            SubmitContent::Progress => {
                                view! { <span class="spinner" role="progressbar" aria-label="Signing in"></span> }
                                    .into_any()
                            }
                        }}
                    </button>
                </form>
                <button
                    class="login-switch"
                    type="button"
                    role="button"
                    aria-label=SIGNUP_LABEL
                    on:click=on_signup
                >
                    "Don't have an account? Sign up"
                </button>
            </div>
        </div>
    }
}
