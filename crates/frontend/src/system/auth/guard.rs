use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires a signed-in user
/// Shows a placeholder while identity is resolving
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    let fallback = move || {
        if auth.loading() {
            view! { <div class="auth-loading">"Loading..."</div> }.into_any()
        } else {
            view! { <div class="auth-message">"Not signed in."</div> }.into_any()
        }
    };

    view! {
        <Show
            when=move || !auth.loading() && auth.is_signed_in()
            fallback=fallback
        >
            {children()}
        </Show>
    }
}

/// Component that requires the permission checked by the auth service
/// Waits for both identity and permission before deciding
#[component]
pub fn RequirePermission(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    let fallback = move || {
        if auth.is_ready() {
            view! { <div class="auth-message">"Access denied. Permission required."</div> }
                .into_any()
        } else {
            view! { <div class="auth-loading">"Checking access..."</div> }.into_any()
        }
    };

    view! {
        <Show
            when=move || auth.is_ready() && auth.has_permission()
            fallback=fallback
        >
            {children()}
        </Show>
    }
}
