//! Save hooks available to creation dialogs through context.

use contracts::domain::a001_dictionary::DictionaryDraft;
use contracts::domain::a002_unit::UnitDraft;
use contracts::domain::a003_customer::Customer;
use contracts::shared::persistence::{NotWired, SaveHook};
use leptos::prelude::*;
use std::sync::Arc;

#[derive(Clone)]
pub struct Persistence {
    pub dictionary: Arc<dyn SaveHook<DictionaryDraft>>,
    pub unit: Arc<dyn SaveHook<UnitDraft>>,
    pub customer: Arc<dyn SaveHook<Customer>>,
}

impl Persistence {
    /// Every hook logs and discards its record
    pub fn not_wired() -> Self {
        Self {
            dictionary: Arc::new(NotWired::new("dictionaries")),
            unit: Arc::new(NotWired::new("units")),
            customer: Arc::new(NotWired::new("customers")),
        }
    }
}

/// Hooks from context, or [`Persistence::not_wired`] when none were provided
pub fn use_persistence() -> Persistence {
    use_context::<Persistence>().unwrap_or_else(Persistence::not_wired)
}
