use dioxus::prelude::*;
use store::KudosConfig;
use tracing::Level;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Bundled client settings.
const CONFIG_TOML: &str = include_str!("../kudos.toml");

fn main() {
    dioxus::logger::init(Level::INFO).expect("logger failed to init");
    dioxus::launch(App);
}

/// Parse the bundled settings, falling back to defaults if they are broken.
fn load_config() -> KudosConfig {
    let config = KudosConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::error!("Invalid {}: {e}", KudosConfig::filename());
        KudosConfig::default()
    });

    match option_env!("KUDOS_API_BASE_URL") {
        Some(url) => config.with_base_url(url),
        None => config,
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    tracing::debug!(base_url = %config.api.base_url, "Starting kudos client");

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ui::SessionProvider {
            config,
            ui::views::HomeView {}
        }
    }
}
