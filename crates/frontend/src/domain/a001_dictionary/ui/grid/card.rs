use crate::shared::icons::icon;
use contracts::domain::a001_dictionary::DictionaryEntry;
use contracts::enums::dictionary_kind::{CardTemplate, DictionaryKind};
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor, Switch};

fn default_badge(entry: &DictionaryEntry, class: &'static str) -> Option<AnyView> {
    entry.is_default.then(|| {
        view! {
            <span class=class>
                <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Brand>"Default"</Badge>
            </span>
        }
        .into_any()
    })
}

/// Body of one grid card, laid out by the kind's [`CardTemplate`].
#[component]
pub fn DictionaryCard(entry: DictionaryEntry, kind: DictionaryKind) -> impl IntoView {
    match kind.template() {
        CardTemplate::LabelBadge => view! {
            <div class="dictionary-card dictionary-card--label">
                {default_badge(&entry, "dictionary-card__badge dictionary-card__badge--pinned")}
                <span class="dictionary-card__primary">{entry.primary_label.clone()}</span>
                <span class="dictionary-card__caption">{entry.secondary_label.clone()}</span>
            </div>
        }
        .into_any(),

        CardTemplate::Delivery => {
            // Display only; enabling is not wired to any store
            let enabled = RwSignal::new(true);
            view! {
                <div class="dictionary-card dictionary-card--delivery">
                    <div class="dictionary-card__toolbar">
                        <span class="dictionary-card__handle"></span>
                        <Switch checked=enabled />
                    </div>
                    <div class="dictionary-card__icon">{icon(kind.icon())}</div>
                    <span class="dictionary-card__label">{entry.primary_label.clone()}</span>
                    {default_badge(&entry, "dictionary-card__badge")}
                </div>
            }
            .into_any()
        }

        CardTemplate::Annotated { titled } => view! {
            <div class="dictionary-card dictionary-card--annotated">
                {titled.then(|| view! {
                    <div class="dictionary-card__title">
                        {icon(kind.icon())}
                        <span>{entry.primary_label.clone()}</span>
                    </div>
                })}
                <p class="dictionary-card__text">{entry.caption().to_string()}</p>
            </div>
        }
        .into_any(),

        CardTemplate::IconLabel => view! {
            <div class="dictionary-card dictionary-card--icon">
                <div class="dictionary-card__icon">{icon(kind.icon())}</div>
                <span class="dictionary-card__label">{entry.primary_label.clone()}</span>
            </div>
        }
        .into_any(),
    }
}
