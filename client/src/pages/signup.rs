//! Signup route target.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::LOGIN_ROUTE;
use crate::state::session::Session;
use crate::util::auth::install_signed_in_redirect;

pub(crate) const LOGIN_LABEL: &str = "Log in navigation";

/// Navigate back to the login screen.
pub(crate) fn request_login(navigate: impl Fn(&str)) {
    navigate(LOGIN_ROUTE);
}

/// Placeholder screen reached from the login page's signup control.
#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    install_signed_in_redirect(session, navigate.clone());

    let on_login = move |_| request_login(|route| navigate(route, NavigateOptions::default()));

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__title">"Create Account"</h1>
                <p class="login-card__subtitle">"Account registration is not open yet."</p>
                <button class="login-switch" type="button" aria-label=LOGIN_LABEL on:click=on_login>
                    "Already have an account? Log in"
                </button>
            </div>
        </div>
    }
}
