use crate::api::{VacationStatus, VacationType};
use crate::pages::vacations::query::{FilterKey, ListQuery};
use leptos::*;

#[component]
pub fn VacationsFilter(
    query: Signal<ListQuery>,
    on_filter: Callback<(FilterKey, String)>,
) -> impl IntoView {
    let current = move |key: FilterKey| query.with(|query| query.filter(key).to_string());

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 grid grid-cols-1 gap-3 md:grid-cols-3">
            <label class="flex flex-col gap-1 text-sm text-fg-muted">
                "Collaborator"
                <input
                    type="text"
                    name=FilterKey::CollaboratorName.as_str()
                    class="border border-form-control-border rounded px-2 py-1 bg-form-control-bg text-fg"
                    prop:value=move || current(FilterKey::CollaboratorName)
                    on:input=move |ev| {
                        on_filter.call((FilterKey::CollaboratorName, event_target_value(&ev)))
                    }
                />
            </label>
            <label class="flex flex-col gap-1 text-sm text-fg-muted">
                "Type"
                <select
                    name=FilterKey::VacationType.as_str()
                    class="border border-form-control-border rounded px-2 py-1 bg-form-control-bg text-fg"
                    on:change=move |ev| on_filter.call((FilterKey::VacationType, event_target_value(&ev)))
                >
                    <option value="" selected=move || current(FilterKey::VacationType).is_empty()>"All"</option>
                    {VacationType::ALL
                        .into_iter()
                        .map(|kind| {
                            let value = kind.ordinal().to_string();
                            let selected_value = value.clone();
                            view! {
                                <option
                                    value=value
                                    selected=move || current(FilterKey::VacationType) == selected_value
                                >
                                    {kind.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <label class="flex flex-col gap-1 text-sm text-fg-muted">
                "Status"
                <select
                    name=FilterKey::Status.as_str()
                    class="border border-form-control-border rounded px-2 py-1 bg-form-control-bg text-fg"
                    on:change=move |ev| on_filter.call((FilterKey::Status, event_target_value(&ev)))
                >
                    <option value="" selected=move || current(FilterKey::Status).is_empty()>"All"</option>
                    {VacationStatus::ALL
                        .into_iter()
                        .map(|status| {
                            let value = status.ordinal().to_string();
                            let selected_value = value.clone();
                            view! {
                                <option
                                    value=value
                                    selected=move || current(FilterKey::Status) == selected_value
                                >
                                    {status.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
        </div>
    }
}
