//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{make_client, use_client, Client, PlatformIdentityStore};

pub mod views;

pub const KUDOS_CSS: Asset = asset!("/assets/styling/kudos.css");

mod session;
pub use session::{use_config, use_session, Session, SessionProvider};

mod user_selector;
pub use user_selector::UserSelector;

mod user_info;
pub use user_info::UserInfo;

mod kudo_form;
pub use kudo_form::KudoForm;

mod kudos_list;
pub use kudos_list::KudosList;
