use crate::components::layout::{ErrorMessage, LoadingSpinner};
use crate::pages::vacations::{
    components::{
        filter::VacationsFilter, form::VacationFormDialog, pagination::VacationsPagination,
        table::VacationsTable,
    },
    layout::VacationsLayout,
    query::{FilterKey, SortField},
    view_model::use_vacations_view_model,
};
use crate::api::VacationRecord;
use leptos::*;

pub const LIST_ERROR_MESSAGE: &str = "Error loading data";

#[component]
pub fn VacationsPage() -> impl IntoView {
    let vm = use_vacations_view_model();
    let listing = vm.listing;

    let has_error = Signal::derive(move || listing.with(|state| state.error.is_some()));
    let has_page = Signal::derive(move || listing.with(|state| state.page.is_some()));
    let current_page = Signal::derive(move || listing.with(|state| state.page.clone()));
    let rows = Signal::derive(move || {
        listing.with(|state| {
            state
                .page
                .as_ref()
                .map(|page| page.vacations.clone())
                .unwrap_or_default()
        })
    });
    let is_refreshing = Signal::derive(move || listing.with(|state| state.loading));
    let query = vm.query;
    let sort = Signal::derive(move || query.with(|query| query.sort));
    let requested_page = Signal::derive(move || query.with(|query| query.page));

    let on_add = Callback::new(move |_| vm.add_record());
    let on_filter = Callback::new(move |(key, value): (FilterKey, String)| vm.set_filter(key, value));
    let on_sort = Callback::new(move |field: SortField| vm.set_sort(field));
    let on_page = Callback::new(move |page: u32| vm.set_page(page));
    let on_edit = Callback::new(move |record: VacationRecord| vm.edit_record(record));
    let on_delete = Callback::new(move |id: i64| vm.delete_record(id));
    let on_submit = Callback::new(move |_| vm.submit_form());
    let on_close = Callback::new(move |_| vm.close_form());

    view! {
        <VacationsLayout on_add=on_add>
            <VacationsFilter query=query.into() on_filter=on_filter />
            <Show
                when=move || !has_error.get()
                fallback=|| view! { <ErrorMessage message=LIST_ERROR_MESSAGE /> }
            >
                <Show when=move || has_page.get() fallback=|| view! { <LoadingSpinner /> }>
                    <Show when=move || is_refreshing.get()>
                        <LoadingSpinner />
                    </Show>
                    <VacationsTable
                        vacations=rows
                        sort=sort
                        on_sort=on_sort
                        on_edit=on_edit
                        on_delete=on_delete
                    />
                    <VacationsPagination page=current_page current=requested_page on_page=on_page />
                </Show>
            </Show>
            <VacationFormDialog
                mode=vm.dialog.into()
                form=vm.form
                collaborators=vm.collaborators.into()
                pending=vm.save_action.pending().into()
                on_submit=on_submit
                on_close=on_close
            />
        </VacationsLayout>
    }
}
