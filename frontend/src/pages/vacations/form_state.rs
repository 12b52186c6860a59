use crate::api::{ApiError, VacationPayload, VacationRecord, VacationStatus, VacationType};
use chrono::NaiveDate;
use leptos::*;

/// Whether the dialog creates a new record or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(VacationRecord),
}

impl FormMode {
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Add Vacation",
            FormMode::Edit(_) => "Edit Vacation",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Add",
            FormMode::Edit(_) => "Update",
        }
    }

    pub fn record_id(&self) -> Option<i64> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(record) => Some(record.id),
        }
    }
}

/// A validated submission: the target id (if any) plus the editable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub id: Option<i64>,
    pub payload: VacationPayload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

impl SaveOutcome {
    pub fn message(self) -> &'static str {
        match self {
            SaveOutcome::Created => "Vacation added successfully",
            SaveOutcome::Updated => "Vacation updated successfully",
        }
    }
}

#[derive(Clone, Copy)]
pub struct VacationFormState {
    collaborator_id: RwSignal<String>,
    start_date: RwSignal<String>,
    end_date: RwSignal<String>,
    vacation_type: RwSignal<String>,
    status: RwSignal<String>,
    reason: RwSignal<String>,
}

impl Default for VacationFormState {
    fn default() -> Self {
        Self {
            collaborator_id: create_rw_signal(String::new()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            vacation_type: create_rw_signal(String::new()),
            status: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
        }
    }
}

impl VacationFormState {
    pub fn collaborator_signal(&self) -> RwSignal<String> {
        self.collaborator_id
    }

    pub fn start_signal(&self) -> RwSignal<String> {
        self.start_date
    }

    pub fn end_signal(&self) -> RwSignal<String> {
        self.end_date
    }

    pub fn type_signal(&self) -> RwSignal<String> {
        self.vacation_type
    }

    pub fn status_signal(&self) -> RwSignal<String> {
        self.status
    }

    pub fn reason_signal(&self) -> RwSignal<String> {
        self.reason
    }

    pub fn reset(&self) {
        self.collaborator_id.set(String::new());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.vacation_type.set(String::new());
        self.status.set(String::new());
        self.reason.set(String::new());
    }

    pub fn load_from(&self, record: &VacationRecord) {
        self.collaborator_id.set(record.collaborator_id.to_string());
        self.start_date.set(record.start_date.to_string());
        self.end_date.set(record.end_date.to_string());
        self.vacation_type.set(record.vacation_type.wire_name().to_string());
        self.status.set(record.status.wire_name().to_string());
        self.reason.set(record.reason.clone().unwrap_or_default());
    }

    /// Prefills for an edit, blanks for a create.
    pub fn open(&self, mode: &FormMode) {
        match mode {
            FormMode::Create => self.reset(),
            FormMode::Edit(record) => self.load_from(record),
        }
    }

    pub fn to_payload(&self) -> Result<VacationPayload, ApiError> {
        let collaborator_id = self
            .collaborator_id
            .get_untracked()
            .trim()
            .parse::<i64>()
            .map_err(|_| ApiError::validation("Select a collaborator"))?;
        let start_date = parse_date(&self.start_date.get_untracked(), "Start date is invalid")?;
        let end_date = parse_date(&self.end_date.get_untracked(), "End date is invalid")?;
        let vacation_type = VacationType::from_wire(&self.vacation_type.get_untracked())
            .ok_or_else(|| ApiError::validation("Select a vacation type"))?;
        let status = VacationStatus::from_wire(&self.status.get_untracked())
            .ok_or_else(|| ApiError::validation("Select a status"))?;
        Ok(VacationPayload {
            collaborator_id,
            start_date,
            end_date,
            vacation_type,
            status,
            reason: self.reason.get_untracked(),
        })
    }

    pub fn to_save_request(&self, mode: &FormMode) -> Result<SaveRequest, ApiError> {
        Ok(SaveRequest {
            id: mode.record_id(),
            payload: self.to_payload()?,
        })
    }
}

fn parse_date(raw: &str, message: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| ApiError::validation(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CollaboratorRef;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    fn record() -> VacationRecord {
        VacationRecord {
            id: 7,
            collaborator_id: 2,
            start_date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
            vacation_type: VacationType::SickLeave,
            status: VacationStatus::Approved,
            reason: Some("flu".into()),
            vacation_days: Some(5),
            collaborator: Some(CollaboratorRef { name: "Luis".into() }),
        }
    }

    #[test]
    fn edit_mode_prefills_every_field_and_targets_the_record() {
        with_runtime(|| {
            let form = VacationFormState::default();
            let mode = FormMode::Edit(record());
            form.open(&mode);

            assert_eq!(form.start_signal().get(), "2025-03-03");
            assert_eq!(form.type_signal().get(), "incapacidad");
            assert_eq!(form.status_signal().get(), "aprobado");

            let request = form.to_save_request(&mode).unwrap();
            assert_eq!(request.id, Some(7));
            assert_eq!(request.payload.collaborator_id, 2);
            assert_eq!(request.payload.reason, "flu");
        });
    }

    #[test]
    fn create_mode_starts_blank_and_has_no_id() {
        with_runtime(|| {
            let form = VacationFormState::default();
            form.load_from(&record());
            form.open(&FormMode::Create);
            assert!(form.collaborator_signal().get().is_empty());
            assert!(form.reason_signal().get().is_empty());

            form.collaborator_signal().set("1".into());
            form.start_signal().set("2025-01-10".into());
            form.end_signal().set("2025-01-12".into());
            form.type_signal().set("vacaciones".into());
            form.status_signal().set("pendiente".into());
            let request = form.to_save_request(&FormMode::Create).unwrap();
            assert_eq!(request.id, None);
            let body = serde_json::to_value(&request.payload).unwrap();
            assert!(body.get("id").is_none());
        });
    }

    #[test]
    fn incomplete_form_is_rejected() {
        with_runtime(|| {
            let form = VacationFormState::default();
            let err = form.to_payload().unwrap_err();
            assert_eq!(err.code, "VALIDATION_ERROR");
        });
    }

    #[test]
    fn mode_labels() {
        assert_eq!(FormMode::Create.title(), "Add Vacation");
        assert_eq!(FormMode::Create.submit_label(), "Add");
        assert_eq!(FormMode::Edit(record()).title(), "Edit Vacation");
        assert_eq!(FormMode::Edit(record()).submit_label(), "Update");
        assert_eq!(SaveOutcome::Created.message(), "Vacation added successfully");
        assert_eq!(SaveOutcome::Updated.message(), "Vacation updated successfully");
    }
}
