use api::session::SessionState;
use api::{KudosBackend, UserId};
use dioxus::prelude::*;

use crate::icons::FaRightFromBracket;
use crate::{use_client, use_session, Icon, KudoForm, KudosList, UserInfo, UserSelector, KUDOS_CSS};

/// The single page: user picker when signed out, kudos dashboard when signed in.
#[component]
pub fn HomeView() -> Element {
    let client = use_client();
    let session = use_session();

    // Organizations are fetched once for the picker
    let organizations = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.organizations().await }
        }
    });

    let on_user_select = {
        let client = client.clone();
        move |user_id: UserId| session.select_user(&client, user_id)
    };
    let on_switch_user = {
        let client = client.clone();
        move |_: MouseEvent| session.switch_user(&client)
    };

    let state = session.state();
    let (organizations, initial_error) = match &*organizations.read() {
        Some(Ok(list)) => (list.clone(), None),
        Some(Err(e)) => (Vec::new(), Some(format!("Failed to load initial data: {e}"))),
        None => return loading_page(),
    };
    if state.is_loading() {
        return loading_page();
    }
    let error = session.error().or(initial_error);

    rsx! {
        document::Link { rel: "stylesheet", href: KUDOS_CSS }

        div {
            class: "App",
            header {
                class: "App-header",
                h1 { "Kudos App" }
                p { "Spread appreciation in your organization!" }
            }

            main {
                class: "App-main",

                if let Some(error) = error {
                    div { class: "error-message", "{error}" }
                }

                match state {
                    SessionState::Authenticated(auth) => rsx! {
                        div {
                            class: "app-content",
                            div {
                                class: "user-info-section",
                                UserInfo { user: auth.user.clone() }
                                button {
                                    class: "logout-btn",
                                    onclick: on_switch_user,
                                    Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                                    " Switch User"
                                }
                            }

                            div {
                                class: "main-sections",
                                div {
                                    class: "give-kudos-section",
                                    h2 { "Give Kudos" }
                                    if auth.user.can_send() {
                                        KudoForm {
                                            colleagues: auth.colleagues.clone(),
                                            user: auth.user.clone(),
                                            on_sent: move |_| session.refresh(),
                                        }
                                    } else {
                                        div {
                                            class: "no-kudos-message",
                                            p { "You have no remaining kudos for this week." }
                                            p { "Kudos reset every Monday!" }
                                        }
                                    }
                                }

                                div {
                                    class: "received-kudos-section",
                                    h2 { "Kudos You've Received" }
                                    KudosList { user_id: auth.user.id }
                                }
                            }
                        }
                    },
                    _ => rsx! {
                        div {
                            class: "user-selection",
                            h2 { "Select Your User Account" }
                            UserSelector {
                                organizations,
                                on_user_select,
                            }
                        }
                    },
                }
            }
        }
    }
}

fn loading_page() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: KUDOS_CSS }
        div { class: "App", div { class: "loading", "Loading..." } }
    }
}
