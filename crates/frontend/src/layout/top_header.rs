//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Application title
//! - Links to every route the user may open
//! - User info and the sign-out action

use contracts::enums::{paths, AppRoute};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::system::auth::use_auth;

/// Signs out, then returns to the home route whatever the server answered.
#[component]
fn SignOutButton() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let sign_out = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            if let Err(e) = auth.sign_out().await {
                leptos::logging::warn!("sign-out finished with error: {}", e);
            }
            navigate(paths::HOME, Default::default());
        });
    };

    view! {
        <button class="top-header__icon-btn" on:click=sign_out title="Sign out">
            "Sign out"
        </button>
    }
}

/// Route shown at `pathname`; a trailing `/` is ignored
pub fn active_route(pathname: &str) -> Option<AppRoute> {
    let trimmed = pathname.trim_end_matches('/');
    AppRoute::from_path(if trimmed.is_empty() { paths::HOME } else { trimmed })
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let current = Memo::new(move |_| location.pathname.with(|p| active_route(p)));

    // Routes behind a permission stay hidden until the check grants it
    let nav_links = move || {
        let has_permission = auth.has_permission();
        AppRoute::all()
            .into_iter()
            .filter(|route| !route.requires_permission() || has_permission)
            .map(|route| {
                view! {
                    <li
                        class="top-header__nav-item"
                        class:top-header__nav-item--active=move || current.get() == Some(route)
                    >
                        <A href=route.path()>{route.title()}</A>
                    </li>
                }
            })
            .collect_view()
    };

    let user_label = move || {
        auth.user()
            .map(|u| u.label().to_string())
            .unwrap_or_default()
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Workspace"</span>
            </div>

            <nav class="top-header__nav">
                <ul>{nav_links}</ul>
            </nav>

            <div class="top-header__actions">
                <Show
                    when=move || auth.is_signed_in()
                    fallback=move || {
                        view! {
                            <span class="top-header__user-name">
                                {move || if auth.loading() { "..." } else { "" }}
                            </span>
                        }
                    }
                >
                    <span class="top-header__user-name">{user_label}</span>
                    <SignOutButton />
                </Show>
            </div>
        </div>
    }
}
