//! Content of the upload/explore/settings sections.
//!
//! Each one is reachable both as a home-page tab and as its own route.

use contracts::enums::AppTab;
use contracts::system::auth::AuthUser;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::system::auth::{use_auth, RequireAuth};

#[component]
pub fn TabPanel(tab: AppTab) -> impl IntoView {
    let body = match tab {
        AppTab::Upload => view! { <UploadSection /> }.into_any(),
        AppTab::Explore => view! { <ExploreSection /> }.into_any(),
        AppTab::Settings => view! { <SettingsSection /> }.into_any(),
    };

    view! {
        <div class="tab-panel" role="tabpanel" data-tab=tab.code()>
            {body}
            <A href=tab.route().path()>"Open as page"</A>
        </div>
    }
}

#[component]
fn UploadSection() -> impl IntoView {
    view! {
        <h2>{AppTab::Upload.label()}</h2>
        <p>"Choose files to add to your workspace."</p>
        <input type="file" multiple=true />
    }
}

#[component]
fn ExploreSection() -> impl IntoView {
    view! {
        <h2>{AppTab::Explore.label()}</h2>
        <p>"Browse everything uploaded to your workspace."</p>
    }
}

fn profile_rows(user: &AuthUser) -> Vec<(&'static str, String)> {
    let or_dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
    vec![
        ("User ID", user.uid.clone()),
        ("Email", or_dash(&user.email)),
        ("Name", or_dash(&user.display_name)),
        ("Photo", or_dash(&user.photo_url)),
    ]
}

#[component]
fn SettingsSection() -> impl IntoView {
    let auth = use_auth();

    let rows = move || {
        auth.user()
            .map(|user| {
                profile_rows(&user)
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <tr>
                                <th>{label}</th>
                                <td>{value}</td>
                            </tr>
                        }
                    })
                    .collect_view()
            })
    };

    view! {
        <h2>{AppTab::Settings.label()}</h2>
        <table class="profile-table">
            <tbody>{rows}</tbody>
        </table>
    }
}

#[component]
pub fn UploadPage() -> impl IntoView {
    view! {
        <section class="page">
            <RequireAuth>
                <UploadSection />
            </RequireAuth>
        </section>
    }
}

#[component]
pub fn ExplorePage() -> impl IntoView {
    view! {
        <section class="page">
            <RequireAuth>
                <ExploreSection />
            </RequireAuth>
        </section>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <section class="page">
            <RequireAuth>
                <SettingsSection />
            </RequireAuth>
        </section>
    }
}
