use leptos::prelude::*;

use crate::system::auth::use_auth;

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = use_auth();
    let uid = move || auth.user().map(|u| u.uid).unwrap_or_default();

    view! {
        <section class="page page--admin">
            <h1>"Administration"</h1>
            <p>"Signed in as " <strong>{uid}</strong> " with administrative access."</p>
        </section>
    }
}
