use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    config::{panel_config, PanelConfig},
    constant::SITE_NAME,
    i18n::I18n,
    model::toast::ToastQueue,
    router::Route,
};

#[component]
pub fn App() -> Element {
    let config = panel_config();
    use_context_provider(|| I18n::new(config.locale));
    use_context_provider(|| Signal::new(ToastQueue::default()));

    use_hook(|| log_startup(config));

    rsx! {
        Title { "{SITE_NAME}" }
        Router::<Route> {}
    }
}

fn log_startup(config: &PanelConfig) {
    tracing::info!(
        "Starting {} (locale: {}, admin routes under {})",
        SITE_NAME,
        config.locale,
        config.admin_path_prefix
    );
}
