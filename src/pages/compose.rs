//! Compose page: write a post once, publish it everywhere.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the dashboard's single route. It owns the submit flow and the
//! draft lifecycle; rendering of the platform grid, media field, and dialogs
//! is delegated to `components`.
//!
//! ARCHITECTURE
//! ============
//! Submission is strictly staged: pre-flight validation (platforms first,
//! then content) happens before any network work, and the publish request
//! only leaves when both checks pass. The draft is cleared only after the
//! server confirms success; a failed or unreachable publish keeps it, so the
//! text survives a reload and retry.

#[cfg(test)]
#[path = "compose_test.rs"]
mod compose_test;

use leptos::prelude::*;

use crate::components::media_field::MediaField;
use crate::components::platform_picker::PlatformPicker;
#[cfg(any(test, feature = "csr"))]
use crate::net::types::PostResponse;
use crate::state::compose::{self, ComposeState, SubmitBlock};
use crate::state::notice::{Notice, NoticeText};
use crate::state::prefs::PrefsState;
use crate::util::draft::{self, DraftAutosave};

fn blocked_notice(block: SubmitBlock) -> Notice {
    Notice::warning(
        NoticeText::Phrase(block.title_key()),
        NoticeText::Phrase(block.body_key()),
    )
}

#[cfg(any(test, feature = "csr"))]
fn publish_success_notice(resp: &PostResponse) -> Notice {
    Notice::success(
        NoticeText::Phrase("notice_posted_title"),
        NoticeText::Verbatim(resp.display_message().unwrap_or_default().to_owned()),
    )
    .with_outcomes(resp.outcomes())
}

#[cfg(any(test, feature = "csr"))]
fn publish_failure_notice(resp: &PostResponse) -> Notice {
    let body = match resp.display_message() {
        Some(message) => NoticeText::Verbatim(message.to_owned()),
        None => NoticeText::Phrase("notice_failed_fallback"),
    };
    Notice::error(NoticeText::Phrase("notice_failed_title"), body).with_outcomes(resp.outcomes())
}

#[cfg(any(test, feature = "csr"))]
fn network_failure_notice() -> Notice {
    Notice::error(
        NoticeText::Phrase("notice_network_title"),
        NoticeText::Phrase("notice_network_text"),
    )
}

/// Ctrl+Enter (or Cmd+Enter) publishes from anywhere inside the form.
fn is_submit_shortcut(ctrl_key: bool, meta_key: bool, key: &str) -> bool {
    (ctrl_key || meta_key) && key == "Enter"
}

/// The compose form with its intro, platform grid, media field, and submit
/// controls.
#[component]
pub fn ComposePage() -> impl IntoView {
    let compose = expect_context::<RwSignal<ComposeState>>();
    let prefs = expect_context::<RwSignal<PrefsState>>();
    let notice = expect_context::<RwSignal<Option<Notice>>>();

    let media_input_ref = NodeRef::<leptos::html::Input>::new();

    // Restore a stored draft once at load, only into an empty field.
    if let Some(restored) = draft::restore(&compose.get_untracked().content) {
        compose.update(|c| c.content = restored);
    }

    // The autosave slot lives in the input handler; dropping the view drops
    // the handler and cancels any armed timer with it.
    let autosave = DraftAutosave::new();
    let on_input = move |ev: leptos::ev::Event| {
        compose.update(|c| c.content = event_target_value(&ev));
        autosave.schedule(move || {
            compose
                .try_get_untracked()
                .map(|c| c.content)
                .unwrap_or_default()
        });
    };

    let do_submit = move || {
        let state = compose.get_untracked();
        if state.submitting {
            return;
        }
        if let Err(block) = compose::validate_submission(state.selected.len(), &state.content) {
            notice.set(Some(blocked_notice(block)));
            return;
        }
        compose.update(|c| c.submitting = true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let media_file = media_input_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));

            match crate::net::api::submit_post(&state.content, &state.selected, media_file).await {
                Ok(resp) if resp.success => {
                    notice.set(Some(publish_success_notice(&resp)));
                    // Staged media goes first so its preview URL is revoked
                    // before the reset drops the metadata.
                    crate::components::media_field::clear_staged(compose, media_input_ref);
                    compose.update(ComposeState::reset_after_publish);
                    draft::clear();
                }
                Ok(resp) => {
                    notice.set(Some(publish_failure_notice(&resp)));
                }
                Err(err) => {
                    log::error!("publish failed: {err}");
                    notice.set(Some(network_failure_notice()));
                }
            }
            compose.update(|c| c.submitting = false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = media_input_ref;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_submit();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_shortcut(ev.ctrl_key(), ev.meta_key(), &ev.key()) {
            ev.prevent_default();
            do_submit();
        }
    };

    view! {
        <main class="compose">
            <section class="compose__intro">
                <h1 class="compose__title">
                    {move || prefs.get().phrase("compose_title").to_owned()}
                </h1>
                <p class="compose__subtitle">
                    {move || prefs.get().phrase("compose_subtitle").to_owned()}
                </p>
            </section>

            <form id="postForm" class="compose__form" on:submit=on_submit on:keydown=on_keydown>
                <div class="compose__field">
                    <label class="compose__label" for="content">
                        {move || prefs.get().phrase("content_label").to_owned()}
                    </label>
                    <textarea
                        id="content"
                        name="content"
                        class="compose__content"
                        rows="5"
                        placeholder=move || prefs.get().phrase("content_placeholder").to_owned()
                        prop:value=move || compose.get().content
                        on:input=on_input
                    ></textarea>
                </div>

                <PlatformPicker />
                <MediaField input_ref=media_input_ref />

                <div class="compose__actions">
                    <button
                        id="submitBtn"
                        type="submit"
                        class="btn compose__submit"
                        disabled=move || compose.get().submitting
                    >
                        <i
                            class=move || {
                                if compose.get().submitting {
                                    "fas fa-spinner fa-spin compose__submit-icon"
                                } else {
                                    "fas fa-paper-plane compose__submit-icon"
                                }
                            }
                            aria-hidden="true"
                        ></i>
                        <span>
                            {move || {
                                let p = prefs.get();
                                let key = if compose.get().submitting {
                                    "publishing"
                                } else {
                                    "publish"
                                };
                                p.phrase(key).to_owned()
                            }}
                        </span>
                    </button>
                    <span class="compose__hint">
                        {move || prefs.get().phrase("shortcut_hint").to_owned()}
                    </span>
                </div>
            </form>
        </main>
    }
}
