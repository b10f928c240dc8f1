use contracts::enums::AppTab;
use leptos::prelude::*;

use super::sections::TabPanel;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::TabStrip;
use crate::system::auth::{use_auth, RequireAuth};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth = use_auth();

    // ?tab= is only meaningful on the home route
    ctx.init_router_integration();

    let greeting = move || {
        auth.user()
            .map(|u| format!("Welcome, {}", u.label()))
            .unwrap_or_else(|| "Welcome".to_string())
    };

    view! {
        <section class="page page--home">
            <h1>{greeting}</h1>
            <RequireAuth>
                <TabStrip />
                {move || {
                    let tab: AppTab = ctx.active_tab.get();
                    view! { <TabPanel tab=tab /> }
                }}
            </RequireAuth>
        </section>
    }
}
