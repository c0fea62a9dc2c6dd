//! Authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is where the session-driven redirect sends users after sign-in. It
//! bounces back to `/login` once restoration finished without a session.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<Session>();
    install_unauth_redirect(session, use_navigate());

    view! {
        <div class="home-page">
            <Show when=move || session.is_signed_in() fallback=|| view! { <p class="home-page__pending">"Loading..."</p> }>
                <h1>"You're signed in"</h1>
                <button
                    class="login-button"
                    type="button"
                    role="button"
                    aria-label="Sign out button"
                    on:click=move |_| session.sign_out()
                >
                    "Sign out"
                </button>
            </Show>
        </div>
    }
}
