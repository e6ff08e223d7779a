//! Login form state

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Url,
    User,
    Password,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            LoginField::Url => LoginField::User,
            LoginField::User => LoginField::Password,
            LoginField::Password => LoginField::Url,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            LoginField::Url => LoginField::Password,
            LoginField::User => LoginField::Url,
            LoginField::Password => LoginField::User,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginFormState {
    pub url: String,
    pub user: String,
    pub password: String,
    pub focus: LoginField,
    /// Probe in flight
    pub submitting: bool,
    pub error: Option<String>,
}

impl LoginFormState {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Url => &mut self.url,
            LoginField::User => &mut self.user,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn input_char(&mut self, c: char) {
        self.focused_mut().push(c);
        self.error = None;
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    /// Forget the password, keep the URL and user for the next attempt.
    pub fn reset_secret(&mut self) {
        self.password.clear();
        self.submitting = false;
    }
}
