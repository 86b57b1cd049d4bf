use api::{KudoFormState, KudosBackend, UserRef, UserSummary, MAX_MESSAGE_LEN};
use dioxus::prelude::*;

use crate::client::use_client;
use crate::session::use_config;

/// Send-kudo form.
///
/// Calls `on_sent` after the backend accepted a kudo so the parent can refetch the
/// allowance; the form never adjusts the count itself.
#[component]
pub fn KudoForm(colleagues: Vec<UserRef>, user: UserSummary, on_sent: EventHandler<()>) -> Element {
    let client = use_client();
    #[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
    let banner_secs = use_config().ui.success_banner_secs;
    let mut form = use_signal(KudoFormState::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(submission) = form.write().begin() else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            let result = client.send_kudo(&submission).await;
            #[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
            let Some(banner) = form.write().finish(result) else {
                return;
            };
            on_sent.call(());

            #[cfg(target_arch = "wasm32")]
            if banner_secs > 0 {
                gloo_timers::future::sleep(std::time::Duration::from_secs(banner_secs as u64)).await;
                form.write().dismiss_success(banner);
            }
        });
    };

    let state = form();
    let receiver = state
        .draft
        .receiver()
        .map(|id| id.to_string())
        .unwrap_or_default();
    let message = state.draft.message().to_string();
    let char_count = state.draft.char_count();

    rsx! {
        div {
            class: "kudo-form",
            form {
                onsubmit: handle_submit,
                div {
                    class: "form-group",
                    label { r#for: "user-select", "Give kudos to:" }
                    select {
                        id: "user-select",
                        value: "{receiver}",
                        disabled: state.sending,
                        onchange: move |evt: FormEvent| form.write().draft.set_receiver_raw(&evt.value()),
                        option { value: "", "-- Select a colleague --" }
                        for colleague in colleagues.iter() {
                            option {
                                key: "{colleague.id}",
                                value: "{colleague.id}",
                                "{colleague.username}"
                            }
                        }
                    }
                }

                div {
                    class: "form-group",
                    label { r#for: "message", "Your message:" }
                    textarea {
                        id: "message",
                        value: "{message}",
                        placeholder: "Why are you giving this kudo? Share your appreciation...",
                        rows: "4",
                        maxlength: "{MAX_MESSAGE_LEN}",
                        disabled: state.sending,
                        oninput: move |evt: FormEvent| form.write().draft.set_message(&evt.value()),
                    }
                    small { class: "char-count", "{char_count}/{MAX_MESSAGE_LEN} characters" }
                }

                if let Some(ref error) = state.error {
                    div { class: "error-message", "{error}" }
                }
                if let Some(ref success) = state.success {
                    div { class: "success-message", "{success}" }
                }

                button {
                    r#type: "submit",
                    class: "send-kudo-btn",
                    disabled: !state.can_submit(),
                    if state.sending { "Sending..." } else { "Send Kudo" }
                }
            }

            div {
                class: "remaining-kudos-reminder",
                small {
                    "You have "
                    strong { "{user.remaining_kudos}" }
                    " {user.allowance_noun()} left this week."
                }
            }
        }
    }
}
