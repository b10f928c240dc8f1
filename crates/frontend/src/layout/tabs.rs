use contracts::enums::AppTab;
use leptos::prelude::*;

use super::global_context::AppGlobalContext;

/// Tab strip for the home page. The active tab lives in `AppGlobalContext`.
#[component]
pub fn TabStrip() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="tabs" role="tablist">
            {AppTab::all()
                .into_iter()
                .map(|tab| {
                    let is_active = move || ctx.active_tab.get() == tab;
                    view! {
                        <button
                            class="tabs__item"
                            class:tabs__item--active=is_active
                            role="tab"
                            aria-selected=move || is_active().to_string()
                            on:click=move |_| ctx.activate_tab(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
