//! Media attachment field: file input, validation, preview, clear.
//!
//! SYSTEM CONTEXT
//! ==============
//! The DOM input owns the file bytes; compose state only mirrors display
//! metadata. The page reads the file straight from the input at submit time
//! through the shared `input_ref`.
//!
//! ERROR HANDLING
//! ==============
//! A file that fails validation never reaches staged state: the input is
//! reset, the previous staging is dropped, and an error notice is raised.

#[cfg(test)]
#[path = "media_field_test.rs"]
mod media_field_test;

use leptos::prelude::*;

use crate::state::compose::ComposeState;
#[cfg(any(test, feature = "csr"))]
use crate::state::compose::MediaMeta;
use crate::state::notice::Notice;
#[cfg(feature = "csr")]
use crate::state::notice::NoticeText;
use crate::state::prefs::PrefsState;
#[cfg(any(test, feature = "csr"))]
use crate::util::media;
use crate::util::media::MediaKind;

/// Display metadata for an accepted file. The preview URL is attached
/// separately because it needs the live blob.
#[cfg(any(test, feature = "csr"))]
fn describe_file(name: &str, size: f64, mime: &str) -> MediaMeta {
    MediaMeta {
        name: name.to_owned(),
        size_label: media::format_file_size(size),
        kind: media::kind_of(mime),
        preview_url: None,
    }
}

/// Drop the staged attachment: revoke any preview URL, reset the DOM input,
/// and clear the metadata. Also used by the page after a successful publish.
pub fn clear_staged(compose: RwSignal<ComposeState>, input_ref: NodeRef<leptos::html::Input>) {
    #[cfg(feature = "csr")]
    {
        revoke_current_preview(compose);
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = input_ref;
    }
    compose.update(|c| c.media = None);
}

#[cfg(feature = "csr")]
fn revoke_current_preview(compose: RwSignal<ComposeState>) {
    if let Some(meta) = compose.get_untracked().media {
        if let Some(url) = &meta.preview_url {
            media::revoke_preview_url(url);
        }
    }
}

/// File input with validation and a staged-attachment preview card.
#[component]
pub fn MediaField(input_ref: NodeRef<leptos::html::Input>) -> impl IntoView {
    let compose = expect_context::<RwSignal<ComposeState>>();
    let prefs = expect_context::<RwSignal<PrefsState>>();
    let notice = expect_context::<RwSignal<Option<Notice>>>();

    let on_change = move |_| {
        #[cfg(feature = "csr")]
        {
            let Some(input) = input_ref.get_untracked() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                clear_staged(compose, input_ref);
                return;
            };

            match media::validate_file(&file) {
                Ok(()) => {
                    // Replacing a staged file releases the old preview URL.
                    revoke_current_preview(compose);
                    let mut meta = describe_file(&file.name(), file.size(), &file.type_());
                    if meta.kind == MediaKind::Image {
                        meta.preview_url = media::preview_url(&file);
                    }
                    compose.update(|c| c.media = Some(meta));
                }
                Err(err) => {
                    notice.set(Some(Notice::error(
                        NoticeText::Phrase("notice_invalid_file_title"),
                        NoticeText::Phrase(err.phrase_key()),
                    )));
                    clear_staged(compose, input_ref);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (input_ref, compose, notice);
        }
    };

    view! {
        <div class="media-field">
            <label class="media-field__label" for="media">
                {move || prefs.get().phrase("media_label").to_owned()}
            </label>
            <input
                id="media"
                name="media"
                type="file"
                class="media-field__input"
                accept="image/*,video/*"
                node_ref=input_ref
                on:change=on_change
            />
            <p class="media-field__hint">{move || prefs.get().phrase("media_hint").to_owned()}</p>

            <Show when=move || compose.get().media.is_some()>
                <div id="filePreview" class="media-field__preview">
                    {move || {
                        compose
                            .get()
                            .media
                            .map(|meta| {
                                let thumb = match (meta.kind, meta.preview_url.clone()) {
                                    (MediaKind::Image, Some(url)) => {
                                        view! {
                                            <img class="media-field__thumb" src=url alt="Preview" />
                                        }
                                            .into_any()
                                    }
                                    _ => {
                                        view! {
                                            <div class="media-field__thumb media-field__thumb--video">
                                                <i class="fas fa-video" aria-hidden="true"></i>
                                            </div>
                                        }
                                            .into_any()
                                    }
                                };
                                view! {
                                    <div class="media-field__file">
                                        {thumb}
                                        <div class="media-field__info">
                                            <p class="media-field__name">{meta.name.clone()}</p>
                                            <p class="media-field__size">{meta.size_label.clone()}</p>
                                        </div>
                                    </div>
                                }
                            })
                    }}
                    <button
                        type="button"
                        class="btn media-field__clear"
                        on:click=move |_| clear_staged(compose, input_ref)
                    >
                        {move || prefs.get().phrase("media_clear").to_owned()}
                    </button>
                </div>
            </Show>
        </div>
    }
}
