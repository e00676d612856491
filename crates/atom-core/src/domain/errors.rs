use std::fmt::{Display, Formatter};

pub type AtomResult<T> = Result<T, AtomError>;
pub type TableResult<T> = AtomResult<T>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomErrorCategory {
    Success,
    InputValidationError,
    IoSystemError,
    InternalError,
}

impl AtomErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::InternalError => 5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::InputValidationError => "InputValidationError",
            Self::IoSystemError => "IoSystemError",
            Self::InternalError => "InternalError",
        }
    }

    pub const fn is_fatal(self) -> bool {
        !matches!(self, Self::Success)
    }
}

impl Display for AtomErrorCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{category} [{placeholder}] {message}")]
pub struct AtomError {
    category: AtomErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl AtomError {
    pub fn new(
        category: AtomErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn input_validation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(
            AtomErrorCategory::InputValidationError,
            placeholder,
            message,
        )
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(AtomErrorCategory::IoSystemError, placeholder, message)
    }

    pub fn internal(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(AtomErrorCategory::InternalError, placeholder, message)
    }

    pub const fn category(&self) -> AtomErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        let severity = if self.category.is_fatal() {
            "ERROR"
        } else {
            "INFO"
        };
        format!("{}: [{}] {}", severity, self.placeholder, self.message)
    }

    pub fn fatal_exit_line(&self) -> Option<String> {
        self.category
            .is_fatal()
            .then(|| format!("FATAL EXIT CODE: {}", self.exit_code()))
    }
}

#[cfg(test)]
mod tests {
    use super::{AtomError, AtomErrorCategory};

    #[test]
    fn exit_mapping_is_stable() {
        let cases = [
            (AtomErrorCategory::Success, 0, "Success"),
            (
                AtomErrorCategory::InputValidationError,
                2,
                "InputValidationError",
            ),
            (AtomErrorCategory::IoSystemError, 3, "IoSystemError"),
            (AtomErrorCategory::InternalError, 5, "InternalError"),
        ];

        for (category, exit_code, name) in cases {
            assert_eq!(category.exit_code(), exit_code);
            assert_eq!(category.as_str(), name);
            assert_eq!(category.to_string(), name);
        }
    }

    #[test]
    fn display_and_diagnostics_include_placeholder() {
        let error = AtomError::input_validation("INPUT.TABLE_DUPLICATE", "duplicate symbol 'Ti'");

        assert_eq!(
            error.to_string(),
            "InputValidationError [INPUT.TABLE_DUPLICATE] duplicate symbol 'Ti'"
        );
        assert_eq!(
            error.diagnostic_line(),
            "ERROR: [INPUT.TABLE_DUPLICATE] duplicate symbol 'Ti'"
        );
        assert_eq!(
            error.fatal_exit_line().as_deref(),
            Some("FATAL EXIT CODE: 2")
        );
    }

    #[test]
    fn success_category_is_not_fatal() {
        let info = AtomError::new(AtomErrorCategory::Success, "RUN.DONE", "nothing to do");
        assert_eq!(info.diagnostic_line(), "INFO: [RUN.DONE] nothing to do");
        assert!(info.fatal_exit_line().is_none());
        assert_eq!(info.exit_code(), 0);
    }

    #[test]
    fn constructors_assign_categories() {
        assert_eq!(
            AtomError::io_system("IO.TABLE_READ", "missing").category(),
            AtomErrorCategory::IoSystemError
        );
        assert_eq!(
            AtomError::internal("SYS.BUNDLED_TABLE", "corrupt").exit_code(),
            5
        );
        assert_eq!(
            AtomError::input_validation("INPUT.X", "bad").message(),
            "bad"
        );
    }
}
