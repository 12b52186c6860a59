use crate::pages::vacations::view_model::VacationPage;
use leptos::*;

/// Previous and next page numbers around the requested page, if any.
fn neighbours(requested: u32, total_pages: u32) -> (Option<u32>, Option<u32>) {
    let previous = (requested > 1).then(|| requested - 1);
    let next = (requested < total_pages).then(|| requested + 1);
    (previous, next)
}

/// `current` is the page last requested, which may be ahead of `page`
/// while a fetch is in flight.
#[component]
pub fn VacationsPagination(
    page: Signal<Option<VacationPage>>,
    current: Signal<u32>,
    on_page: Callback<u32>,
) -> impl IntoView {
    let targets = move || {
        let total_pages = page.with(|page| page.as_ref().map(VacationPage::total_pages).unwrap_or(1));
        neighbours(current.get(), total_pages)
    };
    let summary = move || page.with(|page| page.as_ref().map(VacationPage::summary).unwrap_or_default());

    view! {
        <div class="flex items-center justify-end gap-4 px-4 py-3 text-sm text-fg-muted">
            <span>{summary}</span>
            <button
                type="button"
                aria-label="Previous page"
                class="px-2 py-1 rounded disabled:opacity-40"
                disabled=move || targets().0.is_none()
                on:click=move |_| {
                    if let Some(previous) = targets().0 {
                        on_page.call(previous);
                    }
                }
            >
                "‹"
            </button>
            <button
                type="button"
                aria-label="Next page"
                class="px-2 py-1 rounded disabled:opacity-40"
                disabled=move || targets().1.is_none()
                on:click=move |_| {
                    if let Some(next) = targets().1 {
                        on_page.call(next);
                    }
                }
            >
                "›"
            </button>
        </div>
    }
}
