//! Add/edit remote form state.
//!
//! The visible fields come from the provider schema table. In add mode the
//! name and provider type are editable and switching the type reseeds the
//! parameters with that type's defaults. In edit mode both are read-only and
//! the parameters start from the record's raw values.

use rclonex_core::{
    default_parameters, resolve_schema, FieldDescriptor, FieldKind, Parameters, RemoteConfig,
    RemoteDraft, PROVIDER_SCHEMAS,
};

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Add,
    Edit { original: RemoteConfig },
}

/// Focusable element of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Name,
    ProviderType,
    /// Index into the schema field list
    Field(usize),
}

#[derive(Debug, Clone)]
pub struct RemoteFormState {
    pub mode: FormMode,
    pub name: String,
    /// Empty until a type is picked in add mode
    pub provider_type: String,
    pub parameters: Parameters,
    /// Index into [`Self::focus_targets`]
    focus: usize,
    /// Validation or daemon error shown under the fields
    pub error: Option<String>,
    /// A create/update call is in flight
    pub saving: bool,
}

impl RemoteFormState {
    pub fn new_add() -> Self {
        Self {
            mode: FormMode::Add,
            name: String::new(),
            provider_type: String::new(),
            parameters: Parameters::new(),
            focus: 0,
            error: None,
            saving: false,
        }
    }

    /// Edit form pre-filled from the record's raw parameters.
    pub fn new_edit(remote: &RemoteConfig) -> Self {
        Self {
            mode: FormMode::Edit {
                original: remote.clone(),
            },
            name: remote.name.clone(),
            provider_type: remote.provider_type.clone(),
            parameters: remote.editable_parameters(),
            focus: 0,
            error: None,
            saving: false,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn title(&self) -> String {
        match &self.mode {
            FormMode::Add => "Add remote".to_string(),
            FormMode::Edit { original } => format!("Edit remote '{}'", original.name),
        }
    }

    /// Schema fields for the current type (empty for unknown types)
    pub fn fields(&self) -> &'static [FieldDescriptor] {
        resolve_schema(&self.provider_type)
    }

    pub fn focus_targets(&self) -> Vec<FormFocus> {
        let identity = if self.is_edit() {
            vec![]
        } else {
            vec![FormFocus::Name, FormFocus::ProviderType]
        };
        identity
            .into_iter()
            .chain((0..self.fields().len()).map(FormFocus::Field))
            .collect()
    }

    pub fn focused(&self) -> Option<FormFocus> {
        self.focus_targets().get(self.focus).copied()
    }

    pub fn focus_next(&mut self) {
        let count = self.focus_targets().len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn focus_previous(&mut self) {
        let count = self.focus_targets().len();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    /// Current text of a parameter field
    pub fn value_of(&self, field: &FieldDescriptor) -> &str {
        self.parameters
            .get(field.key)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Replace the parameter map with exactly the new type's defaults.
    pub fn set_provider_type(&mut self, provider_type: &str) {
        if self.is_edit() {
            return;
        }
        self.provider_type = provider_type.to_string();
        self.parameters = default_parameters(provider_type);
        self.error = None;
    }

    pub fn input_char(&mut self, c: char) {
        match self.focused() {
            Some(FormFocus::Name) => self.name.push(c),
            Some(FormFocus::Field(index)) => {
                if let Some(field) = self.fields().get(index) {
                    if field.kind != FieldKind::Choice {
                        self.parameters
                            .entry(field.key.to_string())
                            .or_default()
                            .push(c);
                    }
                }
            }
            Some(FormFocus::ProviderType) | None => {}
        }
        self.error = None;
    }

    pub fn backspace(&mut self) {
        match self.focused() {
            Some(FormFocus::Name) => {
                self.name.pop();
            }
            Some(FormFocus::Field(index)) => {
                if let Some(field) = self.fields().get(index) {
                    if let Some(value) = self.parameters.get_mut(field.key) {
                        value.pop();
                    }
                }
            }
            Some(FormFocus::ProviderType) | None => {}
        }
    }

    /// ←/→ on the type selector or a choice field
    pub fn cycle_choice(&mut self, forward: bool) {
        match self.focused() {
            Some(FormFocus::ProviderType) => {
                let types: Vec<&str> = PROVIDER_SCHEMAS.iter().map(|s| s.provider_type).collect();
                let current = types.iter().position(|t| *t == self.provider_type);
                let next = step(current, types.len(), forward);
                if let Some(provider_type) = next.and_then(|i| types.get(i)) {
                    self.set_provider_type(provider_type);
                }
            }
            Some(FormFocus::Field(index)) => {
                let Some(field) = self.fields().get(index) else {
                    return;
                };
                if field.kind != FieldKind::Choice || field.options.is_empty() {
                    return;
                }
                let current = field
                    .options
                    .iter()
                    .position(|o| o.value == self.value_of(field));
                if let Some(option) = step(current, field.options.len(), forward)
                    .and_then(|i| field.options.get(i))
                {
                    self.parameters
                        .insert(field.key.to_string(), option.value.to_string());
                }
            }
            Some(FormFocus::Name) | None => {}
        }
    }

    /// Client-side checks, then the draft to submit.
    pub fn validate(&self) -> Result<RemoteDraft, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required".to_string());
        }
        if self.provider_type.trim().is_empty() {
            return Err("Select a provider type".to_string());
        }

        // Existing remotes may cover a required key another way (env_auth, bearer_token)
        let enforce_required = !self.is_edit();
        for field in self.fields() {
            let value = self.value_of(field).trim();
            if enforce_required && field.required && value.is_empty() {
                return Err(format!("{} is required", field.label));
            }
            if field.kind == FieldKind::Number && !value.is_empty() && value.parse::<u64>().is_err()
            {
                return Err(format!("{} must be a whole number", field.label));
            }
        }

        Ok(RemoteDraft {
            name: name.to_string(),
            provider_type: self.provider_type.clone(),
            parameters: self.parameters.clone(),
        })
    }
}

/// Wrapping step through `len` items; `None` current starts at an end.
fn step(current: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match (current, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rclonex_daemon::test_utils::sample_remote;

    fn add_form_with_type(provider_type: &str) -> RemoteFormState {
        let mut form = RemoteFormState::new_add();
        form.name = "r".to_string();
        form.set_provider_type(provider_type);
        form
    }

    #[test]
    fn test_add_form_focus_order() {
        let mut form = RemoteFormState::new_add();
        assert_eq!(form.focused(), Some(FormFocus::Name));
        form.focus_next();
        assert_eq!(form.focused(), Some(FormFocus::ProviderType));
        form.focus_next();
        // No type yet, so no fields: wraps around
        assert_eq!(form.focused(), Some(FormFocus::Name));
        form.focus_previous();
        assert_eq!(form.focused(), Some(FormFocus::ProviderType));
    }

    #[test]
    fn test_type_switch_resets_parameters_to_defaults() {
        let mut form = add_form_with_type("ftp");
        form.parameters.insert("host".into(), "ftp.example.com".into());

        form.set_provider_type("sftp");

        assert_eq!(form.parameters, default_parameters("sftp"));
        assert!(!form.parameters.contains_key("host"));
    }

    #[test]
    fn test_cycle_type_selector_seeds_defaults() {
        let mut form = RemoteFormState::new_add();
        form.focus_next();
        form.cycle_choice(true);
        let first = PROVIDER_SCHEMAS[0].provider_type;
        assert_eq!(form.provider_type, first);
        assert_eq!(form.parameters, default_parameters(first));

        form.cycle_choice(false);
        assert_eq!(
            form.provider_type,
            PROVIDER_SCHEMAS[PROVIDER_SCHEMAS.len() - 1].provider_type
        );
        form.cycle_choice(true);
        assert_eq!(form.provider_type, first);
    }

    #[test]
    fn test_cycle_choice_field_wraps() {
        let mut form = add_form_with_type("s3");
        let provider_index = form
            .fields()
            .iter()
            .position(|f| f.key == "provider")
            .unwrap();
        while form.focused() != Some(FormFocus::Field(provider_index)) {
            form.focus_next();
        }
        let options = form.fields()[provider_index].options;
        assert_eq!(form.parameters["provider"], options[0].value);

        form.cycle_choice(true);
        assert_eq!(form.parameters["provider"], options[1].value);
        form.cycle_choice(false);
        form.cycle_choice(false);
        assert_eq!(form.parameters["provider"], options[options.len() - 1].value);
    }

    #[test]
    fn test_typing_into_text_field() {
        let mut form = add_form_with_type("http");
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focused(), Some(FormFocus::Field(0)));
        for c in "https://x".chars() {
            form.input_char(c);
        }
        form.backspace();
        assert_eq!(form.parameters["url"], "https://");
    }

    #[test]
    fn test_validate_requires_name_and_type() {
        let form = RemoteFormState::new_add();
        assert_eq!(form.validate().unwrap_err(), "Name is required");

        let mut form = RemoteFormState::new_add();
        form.name = "  x ".into();
        assert_eq!(form.validate().unwrap_err(), "Select a provider type");
    }

    #[test]
    fn test_validate_required_and_number_fields() {
        let mut form = add_form_with_type("ftp");
        let err = form.validate().unwrap_err();
        assert!(err.contains("required"), "got {err}");

        form.parameters.insert("host".into(), "ftp.example.com".into());
        for bad in ["abc", "inf", "NaN", "1e3", "-21", "21.5"] {
            form.parameters.insert("port".into(), bad.into());
            let err = form.validate().unwrap_err();
            assert!(err.contains("must be a whole number"), "{bad}: got {err}");
        }

        form.parameters.insert("port".into(), "2121".into());
        let draft = form.validate().unwrap();
        assert_eq!(draft.name, "r");
        assert_eq!(draft.provider_type, "ftp");
        assert_eq!(draft.parameters["port"], "2121");
    }

    #[test]
    fn test_edit_form_prefills_and_locks_identity() {
        let remote = sample_remote("box1", "webdav", &[("url", "https://dav"), ("user", "u")]);
        let mut form = RemoteFormState::new_edit(&remote);

        assert!(form.is_edit());
        assert_eq!(form.parameters["url"], "https://dav");
        assert_eq!(form.focused(), Some(FormFocus::Field(0)));
        assert!(!form.focus_targets().contains(&FormFocus::Name));

        form.set_provider_type("ftp");
        assert_eq!(form.provider_type, "webdav");
    }

    #[test]
    fn test_edit_form_skips_required_fields_the_daemon_accepted() {
        let remote = sample_remote(
            "aws",
            "s3",
            &[("provider", "AWS"), ("env_auth", "true"), ("region", "eu-west-1")],
        );
        let form = RemoteFormState::new_edit(&remote);

        let draft = form.validate().unwrap();
        assert_eq!(draft.parameters["env_auth"], "true");
        assert!(!draft.parameters.contains_key("access_key_id"));
    }

    #[test]
    fn test_edit_form_still_checks_numbers() {
        let remote = sample_remote("f", "ftp", &[("host", "h"), ("port", "21")]);
        let mut form = RemoteFormState::new_edit(&remote);
        form.parameters.insert("port".into(), "-21".into());

        assert!(form.validate().unwrap_err().contains("whole number"));
    }

    #[test]
    fn test_edit_unknown_type_has_no_fields() {
        let remote = sample_remote("odd", "unknown", &[]);
        let form = RemoteFormState::new_edit(&remote);
        assert!(form.fields().is_empty());
        assert!(form.focused().is_none());
        assert!(form.validate().is_ok());
    }
}
