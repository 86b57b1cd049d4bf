use api::UserSummary;
use dioxus::prelude::*;

use crate::icons::FaStar;
use crate::Icon;

/// Identity and weekly allowance summary for the signed-in user.
#[component]
pub fn UserInfo(user: UserSummary) -> Element {
    rsx! {
        div {
            class: "user-info",
            div {
                class: "user-details",
                h3 { "Welcome, {user.username}!" }
                div {
                    class: "user-meta",
                    div {
                        class: "organization",
                        strong { "Organization:" }
                        " {user.organization_name}"
                    }
                    div {
                        class: "email",
                        strong { "Email:" }
                        " {user.email}"
                    }
                }
            }

            div {
                class: "kudos-info",
                div {
                    class: "remaining-kudos",
                    Icon { icon: FaStar, width: 16, height: 16 }
                    span { class: "kudos-count", "{user.remaining_kudos}" }
                    span { class: "kudos-label", "{user.allowance_noun()} remaining this week" }
                }
                div {
                    class: "kudos-help",
                    small {
                        "You get 3 kudos every week to appreciate your colleagues!"
                        if user.remaining_kudos == 0 {
                            " Kudos reset every Monday."
                        }
                    }
                }
            }
        }
    }
}
