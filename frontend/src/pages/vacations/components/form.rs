use crate::api::{Collaborator, VacationStatus, VacationType};
use crate::components::modal::Modal;
use crate::pages::vacations::form_state::{FormMode, VacationFormState};
use leptos::{ev::SubmitEvent, *};

const FIELD_CLASS: &str =
    "w-full border border-form-control-border rounded px-3 py-2 bg-form-control-bg text-fg sm:text-sm";
const LABEL_CLASS: &str = "flex flex-col gap-1 text-sm font-medium text-fg-muted";

#[component]
pub fn VacationFormDialog(
    mode: Signal<Option<FormMode>>,
    form: VacationFormState,
    collaborators: Signal<Vec<Collaborator>>,
    pending: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_open = Signal::derive(move || mode.with(Option::is_some));
    let title = Signal::derive(move || {
        mode.with(|mode| mode.as_ref().map(FormMode::title).unwrap_or_default())
            .to_string()
    });
    let submit_label =
        move || mode.with(|mode| mode.as_ref().map(FormMode::submit_label).unwrap_or_default());

    let collaborator = form.collaborator_signal();
    let start_date = form.start_signal();
    let end_date = form.end_signal();
    let vacation_type = form.type_signal();
    let status = form.status_signal();
    let reason = form.reason_signal();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <Modal is_open=is_open title=title on_close=on_close>
            <form class="space-y-4 pt-2" on:submit=handle_submit>
                <label class=LABEL_CLASS>
                    "Collaborator"
                    <select
                        name="collaborator_id"
                        required
                        class=FIELD_CLASS
                        on:change=move |ev| collaborator.set(event_target_value(&ev))
                    >
                        <option value="" selected=move || collaborator.get().is_empty()></option>
                        <For
                            each=move || collaborators.get()
                            key=|item: &Collaborator| item.id
                            children=move |item: Collaborator| {
                                let value = item.id.to_string();
                                let selected_value = value.clone();
                                view! {
                                    <option
                                        value=value
                                        selected=move || collaborator.get() == selected_value
                                    >
                                        {item.name}
                                    </option>
                                }
                            }
                        />
                    </select>
                </label>
                <label class=LABEL_CLASS>
                    "Start Date"
                    <input
                        type="date"
                        name="start_date"
                        required
                        class=FIELD_CLASS
                        prop:value=move || start_date.get()
                        on:input=move |ev| start_date.set(event_target_value(&ev))
                    />
                </label>
                <label class=LABEL_CLASS>
                    "End Date"
                    <input
                        type="date"
                        name="end_date"
                        required
                        class=FIELD_CLASS
                        prop:value=move || end_date.get()
                        on:input=move |ev| end_date.set(event_target_value(&ev))
                    />
                </label>
                <label class=LABEL_CLASS>
                    "Type"
                    <select
                        name="vacation_type"
                        required
                        class=FIELD_CLASS
                        on:change=move |ev| vacation_type.set(event_target_value(&ev))
                    >
                        <option value="" selected=move || vacation_type.get().is_empty()></option>
                        {VacationType::ALL
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <option
                                        value=kind.wire_name()
                                        selected=move || vacation_type.get() == kind.wire_name()
                                    >
                                        {kind.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label class=LABEL_CLASS>
                    "Status"
                    <select
                        name="status"
                        required
                        class=FIELD_CLASS
                        on:change=move |ev| status.set(event_target_value(&ev))
                    >
                        <option value="" selected=move || status.get().is_empty()></option>
                        {VacationStatus::ALL
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <option
                                        value=option.wire_name()
                                        selected=move || status.get() == option.wire_name()
                                    >
                                        {option.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label class=LABEL_CLASS>
                    "Reason"
                    <input
                        type="text"
                        name="reason"
                        class=FIELD_CLASS
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                    />
                </label>
                <div class="flex justify-end gap-2 pt-2">
                    <button
                        type="button"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                        on:click=move |_| on_close.call(())
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {submit_label}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
