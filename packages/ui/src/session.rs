//! Session context and hooks for the UI.

use api::session::{self as flow, SessionState};
use api::{KudosBackend, RefreshTrigger, SessionFlow, Ticket, UserId};
use dioxus::prelude::*;
use store::KudosConfig;

use crate::client::{make_client, Client};

/// Session signals shared through context.
///
/// `flow` owns the state and the run tickets; every bootstrap is started and
/// applied through it, so a slow response from a run the user already left can
/// neither resurrect that session nor clear the identity that replaced it.
#[derive(Clone, Copy)]
pub struct Session {
    flow: Signal<SessionFlow>,
    pub refresh: Signal<RefreshTrigger>,
}

impl Session {
    pub fn state(&self) -> SessionState {
        self.flow.read().state.clone()
    }

    /// Error from the last bootstrap, shown above the page content.
    pub fn error(&self) -> Option<String> {
        self.flow.read().error.clone()
    }

    fn run_bootstrap(mut self, client: Client, ticket: Ticket) {
        spawn(async move {
            let result = flow::bootstrap(&client).await;
            self.flow.write().apply(&client, ticket, result);
        });
    }

    /// Remember `user_id` and load their session.
    pub fn select_user(mut self, client: &Client, user_id: UserId) {
        let ticket = self.flow.write().select_user(client, user_id);
        self.run_bootstrap(client.clone(), ticket);
    }

    /// Forget the identity and return to the user picker.
    pub fn switch_user(mut self, client: &Client) {
        self.flow.write().switch_user(client);
    }

    /// Ask for a refetch of the current user after the server state changed.
    pub fn refresh(mut self) {
        self.refresh.write().bump();
    }
}

/// Get the session signals.
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Get the client configuration.
pub fn use_config() -> KudosConfig {
    use_context::<KudosConfig>()
}

/// Provider component that owns the client and the session state machine.
/// Wrap your app with this component to enable sessions.
#[component]
pub fn SessionProvider(config: KudosConfig, children: Element) -> Element {
    let client: Client = use_context_provider(|| make_client(&config));
    use_context_provider(|| config.clone());

    let flow = use_signal(|| SessionFlow::new(client.identity().as_ref()));
    let refresh = use_signal(RefreshTrigger::default);

    let mut session = use_context_provider(|| Session { flow, refresh });

    // Bootstrap on mount, then again each time the refresh trigger moves.
    // A refresh keeps showing the current session until the refetch lands.
    use_effect(move || {
        let trigger = refresh();
        tracing::debug!(refresh = trigger.value(), "Loading session");
        let ticket = session.flow.write().begin_bootstrap();
        session.run_bootstrap(client.clone(), ticket);
    });

    rsx! {
        {children}
    }
}
