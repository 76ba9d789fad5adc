use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::persistence::Persistence;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());

    // Creation dialogs log and discard until a store is wired in
    provide_context(Persistence::not_wired());

    view! {
        <ConfigProvider>
            <AppShell />
        </ConfigProvider>
    }
}
