use crate::state::toast::{use_toasts, Toast, ToastKind};
use leptos::*;

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => {
            "bg-status-success-bg border border-status-success-border text-status-success-text"
        }
        ToastKind::Error => {
            "bg-status-error-bg border border-status-error-border text-status-error-text"
        }
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let items = toasts.items();

    view! {
        <div class="fixed top-4 right-4 z-[80] flex flex-col gap-2 w-80" aria-live="polite">
            <For
                each=move || items.get()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("px-4 py-3 rounded shadow flex items-start justify-between gap-3 {}", toast_class(toast.kind))
                            role="status"
                        >
                            <p class="text-sm">{toast.message}</p>
                            <button
                                type="button"
                                aria-label="Dismiss"
                                class="text-sm opacity-70 hover:opacity-100"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                {"✕"}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
