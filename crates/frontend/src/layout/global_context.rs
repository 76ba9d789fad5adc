use crate::routes::location::{Location, PageDescriptor};
use leptos::ev;
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::window;

/// Process-wide navigation state.
///
/// Created once by [`crate::app::App`] and provided through context. The
/// location changes only through [`AppGlobalContext::navigate`] (which goes
/// through the URL fragment) and the `hashchange` listener installed by
/// [`AppGlobalContext::init_router_integration`]; everything else reads it.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub location: RwSignal<Location>,
    pub mobile_menu_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            location: RwSignal::new(Location::default()),
            mobile_menu_open: RwSignal::new(false),
        }
    }

    /// Reads the current fragment and follows every later `hashchange`.
    pub fn init_router_integration(&self) {
        self.apply_fragment(&current_fragment());

        let this = *self;
        let handle = window_event_listener(ev::hashchange, move |_| {
            this.apply_fragment(&current_fragment());
        });
        on_cleanup(move || handle.remove());
    }

    /// Rewrites the URL fragment; the resulting `hashchange` republishes the
    /// location. Off the browser target, or when the write fails, the
    /// location is applied directly.
    pub fn navigate(&self, target: &str) {
        let next = Location::from_fragment(target);
        self.mobile_menu_open.set(false);

        if !write_fragment(&next) {
            self.apply_fragment(next.as_str());
        }
    }

    /// Normalizes a raw fragment and publishes it if it differs from the
    /// current location.
    pub fn apply_fragment(&self, raw: &str) {
        let next = Location::from_fragment(raw);
        let changed = self.location.with_untracked(|current| *current != next);
        if changed {
            log::debug!(
                "navigation: {} -> {}",
                self.location.get_untracked(),
                next
            );
            self.location.set(next);
        }
    }

    /// Descriptor of the current page (tracked)
    pub fn page(&self) -> PageDescriptor {
        self.location.with(|l| l.descriptor())
    }

    pub fn toggle_mobile_menu(&self) {
        self.mobile_menu_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
fn current_fragment() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn current_fragment() -> String {
    String::new()
}

/// Writes `next` into the browser URL; `false` when nothing was written.
#[cfg(target_arch = "wasm32")]
fn write_fragment(next: &Location) -> bool {
    let Some(w) = window() else {
        return false;
    };
    match w.location().set_hash(next.as_str()) {
        Ok(()) => true,
        Err(e) => {
            log::error!("failed to set location fragment '{}': {:?}", next, e);
            false
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_fragment(_next: &Location) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::location::{resolve, PageComponent};
    use contracts::enums::dictionary_kind::DictionaryKind;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_starts_on_settings() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new();
            assert_eq!(ctx.location.get_untracked().as_str(), "/settings");
            assert_eq!(ctx.page().component, PageComponent::SettingsLanding);
        });
    }

    #[test]
    fn test_fragment_is_normalized_and_published() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new();
            ctx.apply_fragment("#/settings/currencies");
            assert_eq!(ctx.location.get_untracked().as_str(), "/settings/currencies");
            assert_eq!(
                ctx.page().component,
                PageComponent::Dictionary(DictionaryKind::Currency)
            );

            ctx.apply_fragment("");
            assert_eq!(ctx.location.get_untracked().as_str(), "/settings");
        });
    }

    #[test]
    fn test_navigate_publishes_normalized_location() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new();
            ctx.mobile_menu_open.set(true);

            ctx.navigate("#/settings/taxes");
            assert_eq!(ctx.location.get_untracked().as_str(), "/settings/taxes");
            assert_eq!(ctx.page().component, PageComponent::Dictionary(DictionaryKind::Tax));
            assert!(!ctx.mobile_menu_open.get_untracked());

            ctx.navigate("");
            assert_eq!(ctx.location.get_untracked().as_str(), "/settings");
        });
    }

    #[test]
    fn test_navigate_then_resolve_twice() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new();
            ctx.navigate("/customers");
            let first = ctx.page();
            let second = ctx.page();
            assert_eq!(first, second);
            assert_eq!(first, resolve("/customers"));
            assert_eq!(first.component, PageComponent::Customers);
        });
    }

    #[test]
    fn test_reading_twice_gives_same_page() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new();
            ctx.apply_fragment("#/customers");
            let first = resolve(ctx.location.get_untracked().as_str());
            let second = resolve(ctx.location.get_untracked().as_str());
            assert_eq!(first, second);
            assert_eq!(ctx.page(), first);
        });
    }
}
