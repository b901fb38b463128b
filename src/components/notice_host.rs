//! Modal host rendering the active notice, if any.
//!
//! DESIGN
//! ======
//! The whole dialog re-renders when the notice or the preferences change, so
//! phrase-backed titles and bodies follow a language switch while the dialog
//! is open. Clicking the backdrop or the dismiss button closes it.

use leptos::prelude::*;

use crate::components::platform_badge::PlatformBadge;
use crate::state::notice::Notice;
use crate::state::prefs::PrefsState;

#[component]
pub fn NoticeHost() -> impl IntoView {
    let notice = expect_context::<RwSignal<Option<Notice>>>();
    let prefs = expect_context::<RwSignal<PrefsState>>();

    view! {
        <Show when=move || notice.get().is_some()>
            <div class="notice-overlay" on:click=move |_| notice.set(None)>
                {move || {
                    notice
                        .get()
                        .map(|n| {
                            let lang = prefs.get().language;
                            let title = n.title.resolve(lang).to_owned();
                            let body = n.body.resolve(lang).to_owned();
                            let outcomes = (!n.outcomes.is_empty())
                                .then(|| {
                                    view! {
                                        <ul class="notice__outcomes">
                                            {n
                                                .outcomes
                                                .iter()
                                                .map(|(tag, result)| {
                                                    let failed = !result.success;
                                                    view! {
                                                        <li
                                                            class="notice__outcome"
                                                            class:notice__outcome--failed=failed
                                                        >
                                                            <PlatformBadge tag=tag.clone() />
                                                            <span class="notice__outcome-message">
                                                                {result.message.clone()}
                                                            </span>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    }
                                });

                            view! {
                                <div
                                    class=format!("notice {}", n.kind.modifier_class())
                                    role="dialog"
                                    aria-modal="true"
                                    on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                                >
                                    <i
                                        class=format!("{} notice__icon", n.kind.icon_class())
                                        aria-hidden="true"
                                    ></i>
                                    <h2 class="notice__title">{title}</h2>
                                    <p class="notice__body">{body}</p>
                                    {outcomes}
                                    <button
                                        class="btn notice__dismiss"
                                        on:click=move |_| notice.set(None)
                                    >
                                        {prefs.get().phrase("notice_dismiss").to_owned()}
                                    </button>
                                </div>
                            }
                        })
                }}
            </div>
        </Show>
    }
}
