//! Leptos converter page.

use leptos::*;

use toonmaker_core::{
    COPY_CONFIRMATION_WINDOW, ConverterState, CopyTicket, Language, is_submit_shortcut,
};

use crate::frontend::api;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let state = create_rw_signal(ConverterState::new());
    let copy_timer = store_value(None::<TimeoutHandle>);

    let cancel_copy_timer = move || {
        if let Some(handle) = copy_timer.get_value() {
            handle.clear();
        }
        copy_timer.set_value(None);
    };

    let arm_copy_timer = move |ticket: CopyTicket| {
        cancel_copy_timer();
        match set_timeout_with_handle(
            move || state.update(|s| {
                s.expire_copy(ticket);
            }),
            COPY_CONFIRMATION_WINDOW,
        ) {
            Ok(handle) => copy_timer.set_value(Some(handle)),
            Err(e) => logging::warn!("failed to arm copy timer: {:?}", e),
        }
    };

    let submit = move || {
        let Some(request) = state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };

        spawn_local(async move {
            let outcome = api::convert(&request).await;
            if let Err(e) = &outcome {
                logging::warn!("conversion failed: {e}");
            }
            state.update(|s| {
                s.finish_submit(outcome);
            });
        });
    };

    let clear = move |_: ev::MouseEvent| {
        if state.try_update(|s| s.clear()).unwrap_or(false) {
            cancel_copy_timer();
        }
    };

    let copy = move |_: ev::MouseEvent| {
        let text = state.with(|s| s.result().to_string());
        if text.is_empty() {
            return;
        }

        spawn_local(async move {
            if let Err(e) = api::write_clipboard(&text).await {
                logging::warn!("copy to clipboard failed: {e}");
                return;
            }
            if let Some(ticket) = state.try_update(|s| s.mark_copied()).flatten() {
                arm_copy_timer(ticket);
            }
        });
    };

    let loading = move || state.with(|s| s.is_loading());

    view! {
        <div class="App">
            <h1>"TOON-Maker Converter"</h1>

            <div class="input-section">
                <label class="input-label">"Your Prompt"</label>
                <textarea
                    rows="5"
                    placeholder="Enter your prompt here... (Ctrl+Enter to convert)"
                    prop:value=move || state.with(|s| s.prompt().to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.set_prompt(value));
                    }
                    on:keydown=move |ev: ev::KeyboardEvent| {
                        if is_submit_shortcut(&ev.key(), ev.ctrl_key()) {
                            ev.prevent_default();
                            submit();
                        }
                    }
                ></textarea>
            </div>

            <div class="language-selector">
                {Language::ALL
                    .into_iter()
                    .map(|lang| {
                        view! {
                            <label>
                                <input
                                    type="radio"
                                    name="lang"
                                    value=lang.as_str()
                                    prop:checked=move || state.with(|s| s.language() == lang)
                                    on:change=move |_| state.update(|s| s.set_language(lang))
                                />
                                {lang.label()}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="actions">
                <button
                    class=move || if loading() { "convert-btn loading" } else { "convert-btn" }
                    on:click=move |_| submit()
                    disabled=move || !state.with(|s| s.can_submit())
                >
                    <Show when=loading>
                        <span class="spinner"></span>
                    </Show>
                    {move || if loading() { "Converting..." } else { "Convert to TOON Format" }}
                </button>
                <button class="clear-btn" on:click=clear disabled=loading>
                    "Clear"
                </button>
            </div>

            <Show when=move || state.with(|s| !s.error().is_empty())>
                <div class="error-message">
                    "⚠️ " {move || state.with(|s| s.error().to_string())}
                </div>
            </Show>

            <Show when=move || state.with(|s| s.has_result())>
                <div class="result-section">
                    <div class="result-header">
                        <div class="result-title">"Result"</div>
                        <button
                            class=move || {
                                if state.with(|s| s.is_copied()) { "copy-btn copied" } else { "copy-btn" }
                            }
                            on:click=copy
                        >
                            {move || if state.with(|s| s.is_copied()) { "✓ Copied!" } else { "📋 Copy" }}
                        </button>
                    </div>
                    <div class="result-content">{move || state.with(|s| s.result().to_string())}</div>
                </div>
            </Show>

            <div class="footer">
                "Powered by TOON Format • Press " <strong>"Ctrl+Enter"</strong> " to convert"
            </div>
        </div>
    }
}
