use api::{KudosBackend, Organization, SelectorState, UserId};
use dioxus::prelude::*;

use crate::client::use_client;
use crate::icons::FaUser;
use crate::Icon;

/// Two-step picker: organization first, then one of its users.
///
/// Selecting a user only calls `on_user_select`; the caller decides what that
/// means for the session.
#[component]
pub fn UserSelector(organizations: Vec<Organization>, on_user_select: EventHandler<UserId>) -> Element {
    let client = use_client();
    let mut selector = use_signal(SelectorState::default);

    let on_org_change = move |evt: FormEvent| {
        let Some((org, ticket)) = selector.write().select_raw(&evt.value()) else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            let result = client.organization_users(org).await;
            selector.write().apply(ticket, result);
        });
    };

    let state = selector();
    let selected_org = state
        .organization
        .map(|org| org.to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "user-selector",
            div {
                class: "org-selection",
                label { r#for: "org-select", "Select Organization:" }
                select {
                    id: "org-select",
                    value: "{selected_org}",
                    onchange: on_org_change,
                    option { value: "", "-- Choose Organization --" }
                    for org in organizations.iter() {
                        option {
                            key: "{org.id}",
                            value: "{org.id}",
                            "{org.name}"
                        }
                    }
                }
            }

            if state.organization.is_some() {
                div {
                    class: "user-selection",
                    label { "Select User:" }
                    if state.loading {
                        div { class: "loading", "Loading users..." }
                    }
                    if let Some(ref error) = state.error {
                        div { class: "error", "{error}" }
                    }
                    if !state.users.is_empty() {
                        div {
                            class: "users-grid",
                            for user in state.users.iter() {
                                button {
                                    key: "{user.id}",
                                    class: "user-card",
                                    onclick: {
                                        let user_id = user.id;
                                        move |_| on_user_select.call(user_id)
                                    },
                                    Icon { icon: FaUser, width: 14, height: 14 }
                                    div { class: "username", "{user.username}" }
                                    div { class: "org-name", "{user.organization_name}" }
                                }
                            }
                        }
                    }
                    if state.is_empty() {
                        div { class: "no-users", "No users found in this organization." }
                    }
                }
            }
        }
    }
}
