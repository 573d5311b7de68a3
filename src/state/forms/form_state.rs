//! Project submission form state

use super::field::{FieldId, FormField};

const TIMELINE_OPTIONS: &[&str] = &[
    "ASAP (within 2 weeks)",
    "1 month",
    "2-3 months",
    "3-6 months",
    "Flexible",
];

const BUDGET_OPTIONS: &[&str] = &[
    "Under $5k",
    "$5k - $15k",
    "$15k - $50k",
    "$50k+",
    "Not sure yet",
];

const HOW_FOUND_OPTIONS: &[&str] = &[
    "Search engine",
    "Social media",
    "Referral",
    "Portfolio",
    "Other",
];

/// Mutually exclusive project type options offered on the first step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Website,
    MobileApp,
    Ecommerce,
    Branding,
    Marketing,
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 6] = [
        ProjectType::Website,
        ProjectType::MobileApp,
        ProjectType::Ecommerce,
        ProjectType::Branding,
        ProjectType::Marketing,
        ProjectType::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectType::Website => "Website",
            ProjectType::MobileApp => "Mobile App",
            ProjectType::Ecommerce => "E-commerce",
            ProjectType::Branding => "Branding",
            ProjectType::Marketing => "Digital Marketing",
            ProjectType::Other => "Something Else",
        }
    }

    /// Value sent in the payload's `projectType`
    pub fn value(self) -> &'static str {
        match self {
            ProjectType::Website => "website",
            ProjectType::MobileApp => "mobile-app",
            ProjectType::Ecommerce => "ecommerce",
            ProjectType::Branding => "branding",
            ProjectType::Marketing => "marketing",
            ProjectType::Other => "other",
        }
    }
}

/// Backing model for every input of the submission form.
///
/// Fields are stored in [`FieldId::ALL`] order so lookups are a position
/// search over ten entries.
#[derive(Debug, Clone)]
pub struct ProjectForm {
    pub project_type: Option<ProjectType>,
    fields: Vec<FormField>,
    pub agree_terms: bool,
}

impl ProjectForm {
    pub fn new() -> Self {
        let fields = FieldId::ALL
            .iter()
            .map(|&id| match id {
                FieldId::ProjectName | FieldId::ClientName | FieldId::ClientEmail => {
                    FormField::text(id, true, false)
                }
                FieldId::ProjectDescription => FormField::text(id, true, true),
                FieldId::CompanyName | FieldId::PhoneNumber => FormField::text(id, false, false),
                FieldId::AdditionalInfo => FormField::text(id, false, true),
                FieldId::Timeline => FormField::choice(id, TIMELINE_OPTIONS),
                FieldId::Budget => FormField::choice(id, BUDGET_OPTIONS),
                FieldId::HowFound => FormField::choice(id, HOW_FOUND_OPTIONS),
            })
            .collect();

        Self {
            project_type: None,
            fields,
            agree_terms: false,
        }
    }

    fn index_of(id: FieldId) -> usize {
        FieldId::ALL
            .iter()
            .position(|f| *f == id)
            .unwrap_or_default()
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        &self.fields[Self::index_of(id)]
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        &mut self.fields[Self::index_of(id)]
    }

    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter()
    }

    /// Raw value of a field
    pub fn value(&self, id: FieldId) -> &str {
        self.field(id).as_text()
    }

    pub fn select_project_type(&mut self, project_type: ProjectType) {
        self.project_type = Some(project_type);
    }

    pub fn toggle_terms(&mut self) {
        self.agree_terms = !self.agree_terms;
    }

    /// True when no field carries an inline error
    pub fn is_error_free(&self) -> bool {
        self.fields.iter().all(|f| !f.has_error())
    }
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod project_type {
        use super::*;

        #[test]
        fn test_values_are_kebab_case() {
            assert_eq!(ProjectType::MobileApp.value(), "mobile-app");
            assert_eq!(ProjectType::Marketing.value(), "marketing");
        }

        #[test]
        fn test_all_variants_have_labels() {
            for t in ProjectType::ALL {
                assert!(!t.label().is_empty());
            }
        }
    }

    mod project_form {
        use super::*;

        #[test]
        fn test_new_has_no_selection_and_no_errors() {
            let form = ProjectForm::new();
            assert!(form.project_type.is_none());
            assert!(!form.agree_terms);
            assert!(form.is_error_free());
            assert_eq!(form.fields().count(), FieldId::ALL.len());
        }

        #[test]
        fn test_required_flags() {
            let form = ProjectForm::new();
            let required: Vec<FieldId> = form
                .fields()
                .filter(|f| f.required)
                .map(|f| f.id)
                .collect();
            assert_eq!(
                required,
                vec![
                    FieldId::ProjectName,
                    FieldId::ClientName,
                    FieldId::ClientEmail,
                    FieldId::ProjectDescription,
                ]
            );
        }

        #[test]
        fn test_field_lookup_matches_id() {
            let form = ProjectForm::new();
            for id in FieldId::ALL {
                assert_eq!(form.field(id).id, id);
            }
        }

        #[test]
        fn test_choice_fields() {
            let form = ProjectForm::new();
            assert!(form.field(FieldId::Timeline).is_choice());
            assert!(form.field(FieldId::Budget).is_choice());
            assert!(form.field(FieldId::HowFound).is_choice());
            assert!(!form.field(FieldId::ClientEmail).is_choice());
        }

        #[test]
        fn test_selecting_type_replaces_previous() {
            let mut form = ProjectForm::new();
            form.select_project_type(ProjectType::Website);
            form.select_project_type(ProjectType::Branding);
            assert_eq!(form.project_type, Some(ProjectType::Branding));
        }

        #[test]
        fn test_toggle_terms() {
            let mut form = ProjectForm::new();
            form.toggle_terms();
            assert!(form.agree_terms);
            form.toggle_terms();
            assert!(!form.agree_terms);
        }
    }
}
