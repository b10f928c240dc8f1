use contracts::enums::AppRoute;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;

use crate::layout::Shell;
use crate::pages::{AdminPage, ExplorePage, HomePage, NotFoundPage, SettingsPage, UploadPage};
use crate::system::auth::RequirePermission;

#[component]
fn AdminRoute() -> impl IntoView {
    view! {
        <RequirePermission>
            <AdminPage />
        </RequirePermission>
    }
}

/// One route per `AppRoute`, matched on its path segment.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=StaticSegment(AppRoute::Home.segment()) view=HomePage />
                    <Route path=StaticSegment(AppRoute::Upload.segment()) view=UploadPage />
                    <Route path=StaticSegment(AppRoute::Explore.segment()) view=ExplorePage />
                    <Route path=StaticSegment(AppRoute::Settings.segment()) view=SettingsPage />
                    <Route path=StaticSegment(AppRoute::Admin.segment()) view=AdminRoute />
                </Routes>
            </Shell>
        </Router>
    }
}
