use crate::api::VacationRecord;
use crate::pages::vacations::query::{SortDirection, SortField, SortSpec};
use leptos::*;

fn column_label(field: SortField) -> &'static str {
    match field {
        SortField::CreatedAt => "Created",
        SortField::VacationDays => "Vacation Days",
        SortField::StartDate => "Start Date",
        SortField::EndDate => "End Date",
    }
}

fn sort_indicator(sort: &SortSpec, field: SortField) -> &'static str {
    match sort.direction_for(field) {
        Some(SortDirection::Asc) => " ▲",
        Some(SortDirection::Desc) => " ▼",
        None => "",
    }
}

const HEADER_CLASS: &str =
    "px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const CELL_CLASS: &str = "px-6 py-4 whitespace-nowrap text-sm text-fg";

#[component]
fn SortHeader(field: SortField, sort: Signal<SortSpec>, on_sort: Callback<SortField>) -> impl IntoView {
    view! {
        <th class=HEADER_CLASS>
            <button
                type="button"
                class="uppercase tracking-wider hover:text-fg"
                on:click=move |_| on_sort.call(field)
            >
                {column_label(field)}
                {move || sort.with(|sort| sort_indicator(sort, field))}
            </button>
        </th>
    }
}

#[component]
pub fn VacationsTable(
    vacations: Signal<Vec<VacationRecord>>,
    sort: Signal<SortSpec>,
    on_sort: Callback<SortField>,
    on_edit: Callback<VacationRecord>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class=HEADER_CLASS>"Collaborator"</th>
                        <SortHeader field=SortField::VacationDays sort=sort on_sort=on_sort/>
                        <SortHeader field=SortField::StartDate sort=sort on_sort=on_sort/>
                        <SortHeader field=SortField::EndDate sort=sort on_sort=on_sort/>
                        <th class=HEADER_CLASS>"Type"</th>
                        <th class=HEADER_CLASS>"Status"</th>
                        <th class=HEADER_CLASS>"Reason"</th>
                        <th class=HEADER_CLASS>"Actions"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    <For
                        each=move || vacations.get()
                        key=|record| record.id
                        children=move |record: VacationRecord| {
                            let id = record.id;
                            let days = record
                                .vacation_days
                                .map(|days| days.to_string())
                                .unwrap_or_else(|| "-".into());
                            let collaborator = record.collaborator_name().to_string();
                            let reason = record.reason.clone().unwrap_or_default();
                            let record = store_value(record);
                            view! {
                                <tr data-vacation-id=id>
                                    <td class=CELL_CLASS>{collaborator}</td>
                                    <td class=CELL_CLASS>{days}</td>
                                    <td class=CELL_CLASS>{record.with_value(|r| r.start_date.to_string())}</td>
                                    <td class=CELL_CLASS>{record.with_value(|r| r.end_date.to_string())}</td>
                                    <td class=CELL_CLASS>{record.with_value(|r| r.vacation_type.label())}</td>
                                    <td class=CELL_CLASS>{record.with_value(|r| r.status.label())}</td>
                                    <td class=CELL_CLASS>{reason}</td>
                                    <td class=CELL_CLASS>
                                        <div class="flex gap-2">
                                            <button
                                                type="button"
                                                class="text-action-primary-bg hover:underline"
                                                on:click=move |_| on_edit.call(record.get_value())
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                type="button"
                                                class="text-action-danger-bg hover:underline"
                                                on:click=move |_| on_delete.call(id)
                                            >
                                                "Delete"
                                            </button>
                                        </div>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{CollaboratorRef, VacationStatus, VacationType};
    use crate::test_support::ssr::render_to_string;
    use chrono::NaiveDate;

    fn record(id: i64, name: &str) -> VacationRecord {
        VacationRecord {
            id,
            collaborator_id: 1,
            start_date: NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 2, 5).unwrap(),
            vacation_type: VacationType::SickLeave,
            status: VacationStatus::Rejected,
            reason: Some("checkup".into()),
            vacation_days: Some(3),
            collaborator: Some(CollaboratorRef { name: name.into() }),
        }
    }

    #[test]
    fn rows_render_in_returned_order() {
        let html = render_to_string(move || {
            let rows = vec![record(9, "Zoe"), record(2, "Ana")];
            view! {
                <VacationsTable
                    vacations=Signal::derive(move || rows.clone())
                    sort=Signal::derive(SortSpec::default)
                    on_sort=Callback::new(|_| {})
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        let zoe = html.find("Zoe").unwrap();
        let ana = html.find("Ana").unwrap();
        assert!(zoe < ana);
        assert!(html.contains("2025-02-03"));
        assert!(html.contains("Sick leave"));
        assert!(html.contains("Rejected"));
        assert!(html.contains("checkup"));
        assert!(html.contains("Vacation Days"));
    }
}
