//! TopHeader - breadcrumb trail (or page title), search box and user badge.

use crate::layout::global_context::AppGlobalContext;
use crate::routes::location::Breadcrumb;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let page = Memo::new(move |_| ctx.page());

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button class="top-header__menu-btn" on:click=move |_| ctx.toggle_mobile_menu()>
                    {icon("menu")}
                </button>
                {move || {
                    let page = page.get();
                    if page.breadcrumbs.is_empty() {
                        view! { <span class="top-header__title">{page.title}</span> }.into_any()
                    } else {
                        view! { <Breadcrumbs crumbs=page.breadcrumbs /> }.into_any()
                    }
                }}
            </div>

            <div class="top-header__actions">
                <div class="top-header__search">
                    {icon("search")}
                    <input type="text" class="top-header__search-input" placeholder="Search..." />
                </div>
                <button class="top-header__icon-btn" title="Notifications">
                    {icon("bell")}
                </button>
                <div class="top-header__user">
                    <span class="top-header__avatar">"UN"</span>
                    <span>"Username"</span>
                </div>
            </div>
        </header>
    }
}

#[component]
fn Breadcrumbs(crumbs: Vec<Breadcrumb>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <nav class="breadcrumbs">
            {crumbs.into_iter().enumerate().map(|(idx, crumb)| {
                let separator = (idx > 0).then(|| icon("chevron-right"));
                let body = match crumb.target {
                    Some(target) => view! {
                        <span
                            class="breadcrumbs__link"
                            on:click=move |_| ctx.navigate(&target)
                        >
                            {crumb.label}
                        </span>
                    }.into_any(),
                    None => view! {
                        <span class="breadcrumbs__current">{crumb.label}</span>
                    }.into_any(),
                };
                view! { <>{separator}{body}</> }
            }).collect_view()}
        </nav>
    }
}
