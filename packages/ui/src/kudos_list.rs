use api::kudos::load_received;
use api::models::received_count_label;
use api::{Kudo, ReceivedFeed, UserId};
use chrono::Utc;
use dioxus::prelude::*;

use crate::client::use_client;

/// Kudos received by `user_id`, refetched in full whenever the id changes.
#[component]
pub fn KudosList(user_id: UserId) -> Element {
    let client = use_client();

    let resource = use_resource(use_reactive!(|user_id| {
        let client = client.clone();
        async move {
            tracing::debug!(user_id, "Loading received kudos");
            load_received(&client).await
        }
    }));

    let feed = match &*resource.read() {
        Some(feed) => feed.clone(),
        None => ReceivedFeed::Loading,
    };

    match feed {
        ReceivedFeed::Loading => rsx! {
            div { class: "loading", "Loading your kudos..." }
        },
        ReceivedFeed::Failed(error) => rsx! {
            div { class: "error-message", "{error}" }
        },
        ReceivedFeed::Empty => rsx! {
            div {
                class: "no-kudos",
                p { "No kudos received yet!" }
                p { "When colleagues appreciate your work, their kudos will appear here." }
            }
        },
        ReceivedFeed::Loaded(kudos) => {
            let now = Utc::now();
            let count_label = received_count_label(kudos.len());
            rsx! {
                div {
                    class: "kudos-list",
                    div { class: "kudos-count", "{count_label}" }
                    div {
                        class: "kudos-items",
                        for kudo in kudos.iter() {
                            KudoItem { key: "{kudo.id}", kudo: kudo.clone(), time_ago: kudo.time_ago(now) }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn KudoItem(kudo: Kudo, time_ago: String) -> Element {
    rsx! {
        div {
            class: "kudo-item",
            div {
                class: "kudo-header",
                div {
                    class: "sender-info",
                    span { class: "sender-name", "From {kudo.sender_username}" }
                    span { class: "kudo-time", "{time_ago}" }
                }
            }
            div { class: "kudo-message", "\"{kudo.message}\"" }
            div {
                class: "kudo-footer",
                small { class: "kudo-date", "{kudo.formatted_date()}" }
            }
        }
    }
}
