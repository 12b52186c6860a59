use super::{
    form_state::{FormMode, SaveOutcome, SaveRequest, VacationFormState},
    query::{FilterKey, ListQuery, SortField},
    repository::VacationsRepository,
};
use crate::api::{
    use_api_client, ApiError, Collaborator, VacationListResponse, VacationRecord, PAGE_SIZE,
};
use crate::state::toast::{use_toasts, Toasts};
use leptos::*;
use std::{cell::Cell, rc::Rc};

pub const DELETE_SUCCESS_MESSAGE: &str = "Vacation deleted";
pub const DELETE_FAILURE_MESSAGE: &str = "Failed to delete vacation";
pub const SAVE_FAILURE_MESSAGE: &str = "Failed to save vacation";
pub const COLLABORATORS_FAILURE_MESSAGE: &str = "Failed to fetch collaborators";

/// One page of records as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacationPage {
    pub vacations: Vec<VacationRecord>,
    pub total_count: u64,
    pub page: u32,
}

impl VacationPage {
    pub fn total_pages(&self) -> u32 {
        let size = u64::from(PAGE_SIZE);
        let pages = self.total_count.div_ceil(size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn summary(&self) -> String {
        if self.vacations.is_empty() {
            return format!("0 of {}", self.total_count);
        }
        let first = u64::from(self.page.saturating_sub(1)) * u64::from(PAGE_SIZE) + 1;
        let last = first + self.vacations.len() as u64 - 1;
        format!("{}-{} of {}", first, last, self.total_count)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingState {
    pub page: Option<VacationPage>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            page: None,
            loading: true,
            error: None,
        }
    }
}

fn apply_list_result(
    state: &mut ListingState,
    page: u32,
    result: Result<VacationListResponse, ApiError>,
) {
    state.loading = false;
    match result {
        Ok(response) => {
            state.error = None;
            state.page = Some(VacationPage {
                vacations: response.vacations,
                total_count: response.meta.total_count,
                page,
            });
        }
        Err(err) => {
            log::error!("failed to load vacations: {}", err);
            state.error = Some(err);
        }
    }
}

/// Monotonic fetch counter. Only the response of the latest issued number
/// may touch the listing.
#[derive(Clone, Default)]
pub struct RequestGeneration {
    latest: Rc<Cell<u64>>,
}

impl RequestGeneration {
    pub fn issue(&self) -> u64 {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        next
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.latest.get() == generation
    }
}

fn bump(reload: RwSignal<u32>) {
    reload.update(|value| *value = value.wrapping_add(1));
}

fn apply_optional_delete_result(
    result: Option<Result<(), ApiError>>,
    toasts: Toasts,
    reload: RwSignal<u32>,
) {
    if let Some(result) = result {
        match result {
            Ok(()) => {
                toasts.success(DELETE_SUCCESS_MESSAGE);
                bump(reload);
            }
            Err(err) => {
                log::error!("failed to delete vacation: {}", err);
                toasts.error(DELETE_FAILURE_MESSAGE);
            }
        }
    }
}

fn apply_optional_save_result(
    result: Option<Result<SaveOutcome, ApiError>>,
    toasts: Toasts,
    dialog: RwSignal<Option<FormMode>>,
    form: VacationFormState,
    reload: RwSignal<u32>,
) {
    if let Some(result) = result {
        match result {
            Ok(outcome) => {
                toasts.success(outcome.message());
                dialog.set(None);
                form.reset();
                bump(reload);
            }
            Err(err) => {
                log::error!("failed to save vacation: {}", err);
                toasts.error(SAVE_FAILURE_MESSAGE);
            }
        }
    }
}

fn apply_optional_collaborators_result(
    result: Option<Result<Vec<Collaborator>, ApiError>>,
    collaborators: RwSignal<Vec<Collaborator>>,
    toasts: Toasts,
) {
    match result {
        Some(Ok(list)) => collaborators.set(list),
        Some(Err(err)) => {
            log::error!("failed to fetch collaborators: {}", err);
            collaborators.set(Vec::new());
            toasts.error(COLLABORATORS_FAILURE_MESSAGE);
        }
        None => {}
    }
}

#[derive(Clone, Copy)]
pub struct VacationsViewModel {
    pub query: RwSignal<ListQuery>,
    pub listing: RwSignal<ListingState>,
    pub dialog: RwSignal<Option<FormMode>>,
    pub form: VacationFormState,
    pub collaborators: RwSignal<Vec<Collaborator>>,
    pub delete_action: Action<i64, Result<(), ApiError>>,
    pub save_action: Action<SaveRequest, Result<SaveOutcome, ApiError>>,
    pub collaborators_action: Action<(), Result<Vec<Collaborator>, ApiError>>,
    /// Query plus reload counter; each new value is one list fetch.
    pub fetch_key: Memo<(ListQuery, u32)>,
    reload: RwSignal<u32>,
    generation: StoredValue<RequestGeneration>,
    repository: StoredValue<VacationsRepository>,
    toasts: Toasts,
}

impl VacationsViewModel {
    pub fn new() -> Self {
        let api = use_api_client();
        let repository = store_value(VacationsRepository::new(api));
        let toasts = use_toasts();

        let query = create_rw_signal(ListQuery::default());
        let listing = create_rw_signal(ListingState::default());
        let dialog = create_rw_signal(None::<FormMode>);
        let form = VacationFormState::default();
        let collaborators = create_rw_signal(Vec::<Collaborator>::new());
        let reload = create_rw_signal(0u32);
        let generation = store_value(RequestGeneration::default());
        let fetch_key = create_memo(move |_| (query.get(), reload.get()));

        let delete_action = create_action(move |id: &i64| {
            let repo = repository.get_value();
            let id = *id;
            async move { repo.delete(id).await }
        });

        let save_action = create_action(move |request: &SaveRequest| {
            let repo = repository.get_value();
            let request = request.clone();
            async move { repo.save(request).await }
        });

        let collaborators_action = create_action(move |_: &()| {
            let repo = repository.get_value();
            async move { repo.collaborators().await }
        });

        let vm = Self {
            query,
            listing,
            dialog,
            form,
            collaborators,
            delete_action,
            save_action,
            collaborators_action,
            fetch_key,
            reload,
            generation,
            repository,
            toasts,
        };

        // The only place list fetches are started.
        create_effect(move |_| {
            let (query, _) = fetch_key.get();
            spawn_local(vm.load(query));
        });

        create_effect(move |_| {
            apply_optional_delete_result(delete_action.value().get(), toasts, reload);
        });

        create_effect(move |_| {
            apply_optional_save_result(save_action.value().get(), toasts, dialog, form, reload);
        });

        create_effect(move |_| {
            apply_optional_collaborators_result(
                collaborators_action.value().get(),
                collaborators,
                toasts,
            );
        });

        vm
    }

    pub fn set_page(&self, page: u32) {
        self.change_query(|query| query.set_page(page));
    }

    pub fn set_filter(&self, key: FilterKey, value: String) {
        self.change_query(|query| query.set_filter(key, value));
    }

    pub fn set_sort(&self, field: SortField) {
        self.change_query(|query| query.toggle_sort(field));
    }

    pub fn reload(&self) {
        bump(self.reload);
    }

    /// Writes the query only when `change` actually alters it.
    fn change_query(&self, change: impl FnOnce(&mut ListQuery)) {
        let mut next = self.query.get_untracked();
        change(&mut next);
        if next != self.query.get_untracked() {
            self.query.set(next);
        }
    }

    pub fn add_record(&self) {
        self.open_form(FormMode::Create);
    }

    pub fn edit_record(&self, record: VacationRecord) {
        self.open_form(FormMode::Edit(record));
    }

    fn open_form(&self, mode: FormMode) {
        self.form.open(&mode);
        self.collaborators.set(Vec::new());
        self.dialog.set(Some(mode));
        self.collaborators_action.dispatch(());
    }

    pub fn close_form(&self) {
        self.dialog.set(None);
    }

    pub fn delete_record(&self, id: i64) {
        self.delete_action.dispatch(id);
    }

    pub fn submit_form(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        let Some(mode) = self.dialog.get_untracked() else {
            return;
        };
        match self.form.to_save_request(&mode) {
            Ok(request) => self.save_action.dispatch(request),
            Err(err) => {
                log::warn!("vacation form is incomplete: {}", err);
                self.toasts.error(SAVE_FAILURE_MESSAGE);
            }
        }
    }

    /// Fetches `query` and applies the answer unless a newer fetch was
    /// issued in the meantime.
    pub async fn load(self, query: ListQuery) {
        let generation = self.begin_fetch();
        let repo = self.repository.get_value();
        let result = repo.list(&query).await;
        self.finish_fetch(generation, query.page, result);
    }

    fn begin_fetch(&self) -> u64 {
        self.listing.update(|state| state.loading = true);
        self.generation.with_value(|generation| generation.issue())
    }

    fn finish_fetch(
        &self,
        generation: u64,
        page: u32,
        result: Result<VacationListResponse, ApiError>,
    ) -> bool {
        if !self
            .generation
            .with_value(|latest| latest.is_current(generation))
        {
            log::debug!("dropping stale vacation list response #{}", generation);
            return false;
        }
        self.listing
            .update(|state| apply_list_result(state, page, result));
        true
    }
}

pub fn use_vacations_view_model() -> VacationsViewModel {
    match use_context::<VacationsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = VacationsViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
