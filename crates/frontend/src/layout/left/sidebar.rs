//! Sidebar with the top-level navigation of the console

use crate::layout::global_context::AppGlobalContext;
use crate::routes::location::{Location, DASHBOARD, DEFAULT_LOCATION, SETTINGS_ROOT};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
struct NavItem {
    label: &'static str,
    icon: &'static str,
    target: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Dashboard", icon: "dashboard", target: DASHBOARD },
    NavItem { label: "Sales", icon: "sales", target: "/sales" },
    NavItem { label: "Purchases", icon: "purchases", target: "/purchases" },
    NavItem { label: "Finances", icon: "finances", target: "/finances" },
    NavItem { label: "Items", icon: "items", target: "/items" },
    NavItem { label: "Loyalty", icon: "loyalty", target: "/loyalty" },
    NavItem { label: "Reports", icon: "reports", target: "/reports" },
    // The settings root doubles as the landing page
    NavItem { label: "Settings", icon: "settings", target: SETTINGS_ROOT },
];

/// Whether `item` is highlighted for the current location.
///
/// Settings stays active for the root and for anything under settings.
fn is_active(item: &NavItem, location: &str) -> bool {
    if item.target == location {
        return true;
    }
    item.target == SETTINGS_ROOT
        && (location.is_empty()
            || location.starts_with(DEFAULT_LOCATION)
            || location.contains("settings"))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__logo">{icon("settings")}</span>
                <span class="sidebar__title">"Modus"</span>
            </div>
            <nav class="sidebar__nav">
                {NAV_ITEMS.iter().map(|item| {
                    let item = *item;
                    let active = move || ctx.location.with(|l| is_active(&item, l.as_str()));
                    view! {
                        <a
                            href={Location::from_fragment(item.target).to_fragment()}
                            class="sidebar__item"
                            class:sidebar__item--active=active
                            on:click=move |ev| {
                                ev.prevent_default();
                                ctx.navigate(item.target);
                            }
                        >
                            {icon(item.icon)}
                            <span>{item.label}</span>
                        </a>
                    }
                }).collect_view()}
            </nav>
        </div>
    }
}
