pub mod state;

use self::state::{row_cells, CustomerListState, COLUMNS};
use super::details::CustomerDetails;
use crate::domain::a003_customer::api::fetch_customers;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::components::ui::Button;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_customer::{customers_or_placeholder, distinct_groups, Customer, CustomerSource};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use thaw::Spinner;

fn log_source(source: &CustomerSource, count: usize) {
    match source {
        CustomerSource::Store => log::debug!("loaded {} customers", count),
        CustomerSource::PlaceholderEmpty => {
            log::info!("customer store is empty, showing placeholder rows")
        }
        CustomerSource::PlaceholderFailed(e) => {
            log::error!("failed to load customers, showing placeholder rows: {}", e)
        }
    }
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let rows = RwSignal::new(Vec::<Customer>::new());
    let loading = RwSignal::new(true);
    let state = RwSignal::new(CustomerListState::default());
    let dialog_open = RwSignal::new(false);

    spawn_local(async move {
        let read = fetch_customers().await;
        let (customers, source) = customers_or_placeholder(read);
        log_source(&source, customers.len());
        // The page may be gone by the time the read settles
        if rows.try_set(customers).is_some() {
            log::debug!("customer page unmounted before the read finished, result dropped");
            return;
        }
        loading.try_set(false);
    });

    let groups = Memo::new(move |_| rows.with(|r| distinct_groups(r)));
    let visible = Memo::new(move |_| rows.with(|r| state.with(|s| s.visible(r))));
    let all_selected = Signal::derive(move || visible.with(|v| state.with(|s| s.all_selected(v))));

    let group_tab = move |label: String, group: Option<String>| {
        let is_active = {
            let group = group.clone();
            move || state.with(|s| s.group == group)
        };
        view! {
            <button
                class="tabs__item"
                class:tabs__item--active=is_active
                on:click=move |_| {
                    let group = group.clone();
                    state.update(|s| s.group = group);
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <PageFrame page_id="a003_customer--list" category=PAGE_CAT_LIST>
            <PageHeader title="Customers">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search.clone()))
                    on_change=Callback::new(move |v| state.update(|s| s.search = v))
                />
                <Button icon="plus" on_click=Callback::new(move |_| dialog_open.set(true))>
                    "Add New"
                </Button>
            </PageHeader>

            <div class="tabs">
                {group_tab("All".to_string(), None)}
                {move || groups.get().into_iter()
                    .map(|g| group_tab(g.clone(), Some(g)))
                    .collect_view()}
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="page__loading"><Spinner /></div>
                }
            >
                <div class="table-wrapper">
                    <table class="table">
                        <thead>
                            <tr>
                                <TableCheckbox
                                    header=true
                                    checked=all_selected
                                    on_change=Callback::new(move |checked| {
                                        let rows = visible.get_untracked();
                                        state.update(|s| s.select_all(&rows, checked));
                                    })
                                />
                                {COLUMNS.iter().map(|title| view! {
                                    <th class="table__header-cell">{*title}</th>
                                }).collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || visible.get()
                                key=|c| c.id.clone()
                                children=move |c| {
                                    let id = c.id.clone();
                                    let checked = {
                                        let id = id.clone();
                                        Signal::derive(move || state.with(|s| s.selected.contains(&id)))
                                    };
                                    view! {
                                        <tr class="table__row" class:table__row--selected=checked>
                                            <TableCheckbox
                                                checked=checked
                                                on_change=Callback::new(move |on| state.update(|s| s.toggle(&id, on)))
                                            />
                                            {row_cells(&c).into_iter().map(|cell| view! {
                                                <td class="table__cell">{cell}</td>
                                            }).collect_view()}
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
                <div class="table-footer">
                    {move || format!("Showing {} entries", visible.with(Vec::len))}
                </div>
            </Show>

            <Show when=move || dialog_open.get()>
                <CustomerDetails on_close=Callback::new(move |_| dialog_open.set(false)) />
            </Show>
        </PageFrame>
    }
}
