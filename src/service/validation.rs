//! Request constraint checks, applied before anything reaches the database.

use crate::error::AppError;
use crate::schemas::{
    ListQuery, WidgetACreate, WidgetAUpdate, WidgetBCreate, WidgetBListQuery, WidgetBUpdate,
};

pub const NAME_MAX_LEN: usize = 50;
pub const DESCRIPTION_MAX_LEN: usize = 200;
pub const PAGE_MIN: i64 = 1;
pub const LIMIT_MIN: i64 = 1;
pub const LIMIT_MAX: i64 = 100;

/// Shape constraints for one request input.
pub trait ValidateInput {
    fn validate(&self) -> Result<(), AppError>;
}

fn check_max_length(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

fn check_page_bounds(page: i64, limit: i64) -> Result<(), AppError> {
    if page < PAGE_MIN {
        return Err(AppError::Validation(format!(
            "page must be at least {}",
            PAGE_MIN
        )));
    }
    if !(LIMIT_MIN..=LIMIT_MAX).contains(&limit) {
        return Err(AppError::Validation(format!(
            "limit must be between {} and {}",
            LIMIT_MIN, LIMIT_MAX
        )));
    }
    Ok(())
}

fn check_widget_fields(name: Option<&str>, description: Option<&str>) -> Result<(), AppError> {
    if let Some(name) = name {
        check_max_length("name", name, NAME_MAX_LEN)?;
    }
    if let Some(description) = description {
        check_max_length("description", description, DESCRIPTION_MAX_LEN)?;
    }
    Ok(())
}

impl ValidateInput for WidgetACreate {
    fn validate(&self) -> Result<(), AppError> {
        check_widget_fields(Some(self.name.as_str()), self.description.as_deref())
    }
}

impl ValidateInput for WidgetAUpdate {
    fn validate(&self) -> Result<(), AppError> {
        check_widget_fields(self.name.as_deref(), self.description.as_deref())
    }
}

impl ValidateInput for WidgetBCreate {
    fn validate(&self) -> Result<(), AppError> {
        check_widget_fields(Some(self.name.as_str()), self.description.as_deref())
    }
}

impl ValidateInput for WidgetBUpdate {
    fn validate(&self) -> Result<(), AppError> {
        check_widget_fields(self.name.as_deref(), self.description.as_deref())
    }
}

impl ValidateInput for ListQuery {
    fn validate(&self) -> Result<(), AppError> {
        check_page_bounds(self.page, self.limit)
    }
}

impl ValidateInput for WidgetBListQuery {
    fn validate(&self) -> Result<(), AppError> {
        check_page_bounds(self.page, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_at_limit_passes() {
        let input = WidgetACreate {
            name: "x".repeat(NAME_MAX_LEN),
            description: None,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn name_over_limit_fails() {
        let input = WidgetACreate {
            name: "x".repeat(NAME_MAX_LEN + 1),
            description: None,
        };
        let err = input.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 50 multibyte characters are still within the limit.
        let input = WidgetACreate {
            name: "é".repeat(NAME_MAX_LEN),
            description: None,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn description_over_limit_fails() {
        let input = WidgetBCreate {
            name: "child".into(),
            description: Some("y".repeat(DESCRIPTION_MAX_LEN + 1)),
            widget_a_id: 1,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn partial_update_skips_absent_fields() {
        assert!(WidgetAUpdate::default().validate().is_ok());
        let patch = WidgetAUpdate {
            name: Some("z".repeat(NAME_MAX_LEN + 1)),
            description: None,
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn page_bounds() {
        assert!(ListQuery { page: 1, limit: 10 }.validate().is_ok());
        assert!(ListQuery { page: 0, limit: 10 }.validate().is_err());
        assert!(ListQuery { page: 1, limit: 0 }.validate().is_err());
        assert!(ListQuery { page: 1, limit: 100 }.validate().is_ok());
        assert!(ListQuery { page: 1, limit: 101 }.validate().is_err());
    }
}
