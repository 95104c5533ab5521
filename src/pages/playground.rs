//! AI code playground page.

use leptos::prelude::*;

use crate::state::ai::AiState;

/// Playground page — a free-text prompt and an editable code area.
///
/// Asking the AI sends the prompt to the generation endpoint and replaces
/// the content with the result. A failed call logs a diagnostic and leaves
/// the prior content untouched. No streaming, no partial results.
#[component]
pub fn PlaygroundPage() -> impl IntoView {
    let ai = expect_context::<RwSignal<AiState>>();

    let prompt = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let ask = Callback::new(move |_| {
        let text = prompt.get();
        if text.trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let text = text.trim().to_owned();
            ai.update(|a| a.loading = true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::generate_code(&text).await {
                    Ok(result) => {
                        ai.update(|a| {
                            a.content = result;
                            a.loading = false;
                        });
                    }
                    Err(e) => {
                        leptos::logging::warn!("generation failed: {e}");
                        error.set(Some(e.to_string()));
                        ai.update(|a| a.loading = false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
        }
    });

    view! {
        <div class="playground-page">
            <div class="playground-page__prompt-row">
                <input
                    class="playground-page__prompt"
                    type="text"
                    placeholder="Ask the AI (e.g. hello world in Python)"
                    prop:value=move || prompt.get()
                    on:input=move |ev| prompt.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            ask.run(());
                        }
                    }
                />
                <button
                    class="btn btn--primary"
                    disabled=move || ai.get().loading
                    on:click=move |_| ask.run(())
                >
                    "Ask AI"
                </button>
            </div>

            {move || {
                error
                    .get()
                    .map(|msg| view! { <p class="playground-page__error">{msg}</p> })
            }}

            {move || {
                ai.get()
                    .loading
                    .then(|| view! { <p class="playground-page__loading">"Thinking..."</p> })
            }}

            <textarea
                class="playground-page__editor"
                prop:value=move || ai.get().content
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ai.update(|a| a.content = value);
                }
            ></textarea>
        </div>
    }
}
