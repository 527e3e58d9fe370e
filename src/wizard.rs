/// Multi-step onboarding wizard: a fixed step sequence with a bounds-checked
/// cursor, per-step data, and pure per-field validation.
///
/// Validation is `validate(field, value) -> Option<message>`: run on every
/// edit and once at construction so empty required fields show their errors
/// from the start. Errors are display-only; Next always advances (matching
/// the product's form, which never gates navigation on validity).
use std::collections::HashMap;
use std::sync::OnceLock;

use chrono::{Local, NaiveDate};
use regex::Regex;

// ── Steps ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepId {
    Personal,
    Contact,
    Preferences,
    Review,
}

pub const STEPS: &[(StepId, &str)] = &[
    (StepId::Personal, "Personal Info"),
    (StepId::Contact, "Contact Details"),
    (StepId::Preferences, "Preferences"),
    (StepId::Review, "Review & Submit"),
];

// ── Fields ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    BirthDate,
    Email,
    Phone,
    Address,
}

impl FieldId {
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::FirstName => "First Name",
            FieldId::LastName => "Last Name",
            FieldId::BirthDate => "Birth Date",
            FieldId::Email => "Email",
            FieldId::Phone => "Phone",
            FieldId::Address => "Address",
        }
    }

    /// Text fields shown on a given step, in display order.
    pub fn for_step(step: StepId) -> &'static [FieldId] {
        match step {
            StepId::Personal => &[FieldId::FirstName, FieldId::LastName, FieldId::BirthDate],
            StepId::Contact => &[FieldId::Email, FieldId::Phone, FieldId::Address],
            StepId::Preferences | StepId::Review => &[],
        }
    }
}

// ── Step data ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light Mode",
            Theme::Dark => "Dark Mode",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
}

#[derive(Debug, Clone, Default)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone)]
pub struct Preferences {
    pub theme: Theme,
    pub notifications: bool,
    pub newsletter: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            notifications: true,
            newsletter: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormData {
    pub personal: PersonalInfo,
    pub contact: ContactDetails,
    pub preferences: Preferences,
}

impl FormData {
    pub fn field(&self, field: FieldId) -> &str {
        match field {
            FieldId::FirstName => &self.personal.first_name,
            FieldId::LastName => &self.personal.last_name,
            FieldId::BirthDate => &self.personal.birth_date,
            FieldId::Email => &self.contact.email,
            FieldId::Phone => &self.contact.phone,
            FieldId::Address => &self.contact.address,
        }
    }

    fn field_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::FirstName => &mut self.personal.first_name,
            FieldId::LastName => &mut self.personal.last_name,
            FieldId::BirthDate => &mut self.personal.birth_date,
            FieldId::Email => &mut self.contact.email,
            FieldId::Phone => &mut self.contact.phone,
            FieldId::Address => &mut self.contact.address,
        }
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[\d\s-]{10,}$").unwrap())
}

/// Validate a single field value against today's date (injected so tests are
/// not wall-clock dependent). Returns the error message to display, if any.
pub fn validate_at(field: FieldId, value: &str, today: NaiveDate) -> Option<String> {
    match field {
        FieldId::FirstName | FieldId::LastName => {
            if value.trim().is_empty() {
                Some("This field is required".to_string())
            } else if value.len() < 2 {
                Some("Must be at least 2 characters".to_string())
            } else {
                None
            }
        }
        FieldId::BirthDate => {
            if value.is_empty() {
                Some("This field is required".to_string())
            } else {
                match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
                    Err(_) => Some("Enter a valid date (YYYY-MM-DD)".to_string()),
                    Ok(date) if date > today => Some("Date cannot be in the future".to_string()),
                    Ok(_) => None,
                }
            }
        }
        FieldId::Email => {
            if value.trim().is_empty() {
                Some("Email is required".to_string())
            } else if !email_re().is_match(value) {
                Some("Please enter a valid email".to_string())
            } else {
                None
            }
        }
        FieldId::Phone => {
            if value.trim().is_empty() {
                Some("Phone number is required".to_string())
            } else if !phone_re().is_match(value) {
                Some("Please enter a valid phone number".to_string())
            } else {
                None
            }
        }
        FieldId::Address => {
            if value.trim().is_empty() {
                Some("Address is required".to_string())
            } else if value.len() < 10 {
                Some("Please enter a complete address".to_string())
            } else {
                None
            }
        }
    }
}

/// Validate against the current local date.
pub fn validate(field: FieldId, value: &str) -> Option<String> {
    validate_at(field, value, Local::now().date_naive())
}

// ── Wizard state ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct WizardState {
    /// Index into `STEPS`.
    pub current: usize,
    pub data: FormData,
    /// Field → message for every currently-invalid field.
    pub errors: HashMap<FieldId, String>,
    /// Index of the focused field within the current step.
    pub focused: usize,
    pub submitted: bool,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        let data = FormData::default();
        let mut state = Self {
            current: 0,
            data,
            errors: HashMap::new(),
            focused: 0,
            submitted: false,
        };
        state.seed_errors();
        state
    }

    /// Validate every text field once, seeding initial error state.
    fn seed_errors(&mut self) {
        for &(step, _) in STEPS {
            for &field in FieldId::for_step(step) {
                self.revalidate(field);
            }
        }
    }

    fn revalidate(&mut self, field: FieldId) {
        match validate(field, self.data.field(field)) {
            Some(msg) => {
                self.errors.insert(field, msg);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    pub fn step(&self) -> StepId {
        STEPS[self.current].0
    }

    pub fn step_title(&self) -> &'static str {
        STEPS[self.current].1
    }

    pub fn is_last_step(&self) -> bool {
        self.current == STEPS.len() - 1
    }

    /// Advance the cursor; on the last step, mark the form submitted instead.
    pub fn next(&mut self) {
        if self.current < STEPS.len() - 1 {
            self.current += 1;
            self.focused = 0;
        } else {
            self.submitted = true;
        }
    }

    pub fn prev(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.focused = 0;
        }
    }

    /// Fields on the current step, for focus cycling.
    pub fn current_fields(&self) -> &'static [FieldId] {
        FieldId::for_step(self.step())
    }

    pub fn focus_next(&mut self) {
        let n = self.current_fields().len();
        if n > 0 {
            self.focused = (self.focused + 1) % n;
        }
    }

    pub fn focus_prev(&mut self) {
        let n = self.current_fields().len();
        if n > 0 {
            self.focused = (self.focused + n - 1) % n;
        }
    }

    pub fn focused_field(&self) -> Option<FieldId> {
        self.current_fields().get(self.focused).copied()
    }

    /// Append a character to the focused field and revalidate it.
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.focused_field() {
            self.data.field_mut(field).push(c);
            self.revalidate(field);
        }
    }

    /// Delete the last character of the focused field and revalidate it.
    pub fn pop_char(&mut self) {
        if let Some(field) = self.focused_field() {
            self.data.field_mut(field).pop();
            self.revalidate(field);
        }
    }

    pub fn error(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// True when no field on the given step carries an error.
    pub fn step_valid(&self, step: StepId) -> bool {
        FieldId::for_step(step)
            .iter()
            .all(|f| !self.errors.contains_key(f))
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
    }

    // ── validate ────────────────────────────────────────────────────────────────

    #[test]
    fn test_name_required() {
        assert_eq!(
            validate_at(FieldId::FirstName, "", today()),
            Some("This field is required".to_string())
        );
        assert_eq!(
            validate_at(FieldId::LastName, "   ", today()),
            Some("This field is required".to_string())
        );
    }

    #[test]
    fn test_name_min_length() {
        assert_eq!(
            validate_at(FieldId::FirstName, "A", today()),
            Some("Must be at least 2 characters".to_string())
        );
        assert_eq!(validate_at(FieldId::FirstName, "Al", today()), None);
    }

    #[test]
    fn test_birth_date_required() {
        assert_eq!(
            validate_at(FieldId::BirthDate, "", today()),
            Some("This field is required".to_string())
        );
    }

    #[test]
    fn test_birth_date_future() {
        assert_eq!(
            validate_at(FieldId::BirthDate, "2030-01-01", today()),
            Some("Date cannot be in the future".to_string())
        );
        assert_eq!(validate_at(FieldId::BirthDate, "1990-06-15", today()), None);
        // Today itself is not "in the future".
        assert_eq!(validate_at(FieldId::BirthDate, "2026-08-23", today()), None);
    }

    #[test]
    fn test_birth_date_unparseable() {
        assert_eq!(
            validate_at(FieldId::BirthDate, "not-a-date", today()),
            Some("Enter a valid date (YYYY-MM-DD)".to_string())
        );
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(
            validate_at(FieldId::Email, "", today()),
            Some("Email is required".to_string())
        );
        assert_eq!(
            validate_at(FieldId::Email, "not-an-email", today()),
            Some("Please enter a valid email".to_string())
        );
        assert_eq!(
            validate_at(FieldId::Email, "a@b", today()),
            Some("Please enter a valid email".to_string())
        );
        assert_eq!(validate_at(FieldId::Email, "dev@example.com", today()), None);
    }

    #[test]
    fn test_phone_rules() {
        assert_eq!(
            validate_at(FieldId::Phone, "", today()),
            Some("Phone number is required".to_string())
        );
        assert_eq!(
            validate_at(FieldId::Phone, "12345", today()),
            Some("Please enter a valid phone number".to_string())
        );
        assert_eq!(validate_at(FieldId::Phone, "+1 555 000-0000", today()), None);
        assert_eq!(validate_at(FieldId::Phone, "0123456789", today()), None);
    }

    #[test]
    fn test_address_rules() {
        assert_eq!(
            validate_at(FieldId::Address, "", today()),
            Some("Address is required".to_string())
        );
        assert_eq!(
            validate_at(FieldId::Address, "short", today()),
            Some("Please enter a complete address".to_string())
        );
        assert_eq!(
            validate_at(FieldId::Address, "12 Long Street, Springfield", today()),
            None
        );
    }

    // ── wizard state ────────────────────────────────────────────────────────────

    #[test]
    fn test_initial_errors_seeded() {
        let state = WizardState::new();
        // All six text fields start empty, so all six carry errors.
        assert_eq!(state.errors.len(), 6);
        assert_eq!(state.error(FieldId::Email), Some("Email is required"));
        assert!(!state.step_valid(StepId::Personal));
        assert!(!state.step_valid(StepId::Contact));
        // Steps without text fields are always valid.
        assert!(state.step_valid(StepId::Preferences));
        assert!(state.step_valid(StepId::Review));
    }

    #[test]
    fn test_cursor_bounds() {
        let mut state = WizardState::new();
        assert_eq!(state.step(), StepId::Personal);
        state.prev();
        assert_eq!(state.current, 0); // saturates at the first step

        state.next();
        assert_eq!(state.step(), StepId::Contact);
        state.next();
        state.next();
        assert_eq!(state.step(), StepId::Review);
        assert!(state.is_last_step());
        assert!(!state.submitted);

        // Next on the last step submits instead of advancing.
        state.next();
        assert_eq!(state.step(), StepId::Review);
        assert!(state.submitted);
    }

    #[test]
    fn test_edit_revalidates() {
        let mut state = WizardState::new();
        assert_eq!(state.focused_field(), Some(FieldId::FirstName));
        assert!(state.error(FieldId::FirstName).is_some());

        state.push_char('J');
        assert_eq!(
            state.error(FieldId::FirstName),
            Some("Must be at least 2 characters")
        );
        state.push_char('o');
        assert_eq!(state.error(FieldId::FirstName), None);

        state.pop_char();
        state.pop_char();
        assert_eq!(state.error(FieldId::FirstName), Some("This field is required"));
    }

    #[test]
    fn test_focus_cycles_within_step() {
        let mut state = WizardState::new();
        state.focus_next();
        assert_eq!(state.focused_field(), Some(FieldId::LastName));
        state.focus_next();
        assert_eq!(state.focused_field(), Some(FieldId::BirthDate));
        state.focus_next();
        assert_eq!(state.focused_field(), Some(FieldId::FirstName));
        state.focus_prev();
        assert_eq!(state.focused_field(), Some(FieldId::BirthDate));
    }

    #[test]
    fn test_focus_resets_on_step_change() {
        let mut state = WizardState::new();
        state.focus_next();
        state.next();
        assert_eq!(state.focused, 0);
        assert_eq!(state.focused_field(), Some(FieldId::Email));
    }

    #[test]
    fn test_typing_on_fieldless_step_is_inert() {
        let mut state = WizardState::new();
        state.next();
        state.next(); // Preferences
        assert_eq!(state.focused_field(), None);
        state.push_char('x');
        state.pop_char();
        state.focus_next();
        assert_eq!(state.focused, 0);
    }

    #[test]
    fn test_preferences_defaults() {
        let state = WizardState::new();
        assert_eq!(state.data.preferences.theme, Theme::Light);
        assert!(state.data.preferences.notifications);
        assert!(!state.data.preferences.newsletter);
    }
}
