use std::collections::BTreeMap;

use crate::api::PAGE_SIZE;

/// Filter parameters understood by the list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKey {
    CollaboratorName,
    VacationType,
    Status,
}

impl FilterKey {
    pub const ALL: [FilterKey; 3] = [
        FilterKey::CollaboratorName,
        FilterKey::VacationType,
        FilterKey::Status,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterKey::CollaboratorName => "collaborator_name_cont",
            FilterKey::VacationType => "vacation_type_eq",
            FilterKey::Status => "status_eq",
        }
    }

    fn query_param(self) -> String {
        format!("q[{}]", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    VacationDays,
    StartDate,
    EndDate,
}

impl SortField {
    /// Columns the table lets the user sort by.
    pub const SORTABLE: [SortField; 3] = [
        SortField::VacationDays,
        SortField::StartDate,
        SortField::EndDate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::VacationDays => "vacation_days",
            SortField::StartDate => "start_date",
            SortField::EndDate => "end_date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

impl SortSpec {
    /// Clicking the active ascending column flips it to descending; anything
    /// else sorts ascending by the clicked column.
    pub fn toggled(self, field: SortField) -> Self {
        let direction = if self.field == field && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Self { field, direction }
    }

    pub fn direction_for(&self, field: SortField) -> Option<SortDirection> {
        (self.field == field).then_some(self.direction)
    }
}

/// Everything that determines the next list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub filters: BTreeMap<FilterKey, String>,
    pub sort: SortSpec,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            filters: BTreeMap::new(),
            sort: SortSpec::default(),
        }
    }
}

impl ListQuery {
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn set_filter(&mut self, key: FilterKey, value: impl Into<String>) {
        self.filters.insert(key, value.into());
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort = self.sort.toggled(field);
    }

    pub fn filter(&self, key: FilterKey) -> &str {
        self.filters.get(&key).map(String::as_str).unwrap_or("")
    }

    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("per_page".to_string(), PAGE_SIZE.to_string()),
        ];
        params.extend(
            self.filters
                .iter()
                .filter(|(_, value)| !value.trim().is_empty())
                .map(|(key, value)| (key.query_param(), value.clone())),
        );
        params.push(("order[field]".to_string(), self.sort.field.as_str().to_string()));
        params.push((
            "order[direction]".to_string(),
            self.sort.direction.as_str().to_string(),
        ));
        params
    }
}
