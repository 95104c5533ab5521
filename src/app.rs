//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::types::ChannelEvent;
use crate::pages::{
    home::HomePage, login::LoginPage, playground::PlaygroundPage, project::ProjectPage,
    register::RegisterPage,
};
use crate::state::{
    ai::AiState, chat::ChatState, project::ProjectState, projects::ProjectsState,
    session::SessionState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Handle for publishing events onto the active project's channel.
///
/// Provided as a context at the root; the project page installs a live
/// sender when it spawns the channel and clears it on unmount. Sends while
/// no channel is attached return `false` and are dropped.
#[derive(Clone, Default)]
pub struct ChannelSender {
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl ChannelSender {
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn new(tx: futures::channel::mpsc::UnboundedSender<String>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Publish an event to the channel.
    ///
    /// Returns `false` if no channel is attached or the connection task has
    /// gone away.
    pub fn send(&self, event: &ChannelEvent) -> bool {
        #[cfg(feature = "hydrate")]
        {
            match (&self.tx, serde_json::to_string(event)) {
                (Some(tx), Ok(json)) => tx.unbounded_send(json).is_ok(),
                _ => false,
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = event;
            false
        }
    }
}

/// Root application component.
///
/// Provides all shared state contexts, restores the stored session, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let session = RwSignal::new(SessionState::default());
    let projects = RwSignal::new(ProjectsState::default());
    let project = RwSignal::new(ProjectState::default());
    let chat = RwSignal::new(ChatState::default());
    let ai = RwSignal::new(AiState::default());
    let sender = RwSignal::new(ChannelSender::default());

    provide_context(session);
    provide_context(projects);
    provide_context(project);
    provide_context(chat);
    provide_context(ai);
    provide_context(sender);

    // Restore the stored session once at application start.
    Effect::new(move || {
        if !session.get_untracked().loading {
            return;
        }
        match crate::util::storage::load_user() {
            Some(user) => session.update(|s| s.establish(user)),
            None => session.update(SessionState::clear),
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/searchifi.css"/>
        <Title text="Searchifi"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=(StaticSegment("project"), ParamSegment("id")) view=ProjectPage/>
                <Route path=StaticSegment("playground") view=PlaygroundPage/>
            </Routes>
        </Router>
    }
}
