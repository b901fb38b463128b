//! Application shell: shared state providers, chrome, and routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal` per state concern is created here and provided via context
//! so every page and component shares the same instance. Preference
//! initialization runs before the first paint, so the stored theme and
//! language are already projected when the UI appears.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::header::Header;
use crate::components::notice_host::NoticeHost;
use crate::pages::compose::ComposePage;
use crate::state::compose::ComposeState;
use crate::state::notice::Notice;
use crate::state::prefs::PrefsState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(PrefsState::initialize()));
    provide_context(RwSignal::new(ComposeState::default()));
    provide_context(RwSignal::new(None::<Notice>));

    view! {
        <Title text="CrossDeck" />
        <Router>
            <Header />
            <Routes fallback=|| "Not found.">
                <Route path=path!("") view=ComposePage />
            </Routes>
            <NoticeHost />
        </Router>
    }
}
