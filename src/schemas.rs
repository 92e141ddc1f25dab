//! Request shapes: create/update bodies and list query parameters.

use serde::Deserialize;

use crate::models::{WidgetA, WidgetB};

#[derive(Clone, Debug, Deserialize)]
pub struct WidgetACreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update: absent fields leave the stored value untouched.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct WidgetAUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl WidgetAUpdate {
    /// Merge only the provided fields into an existing row.
    pub fn apply_to(&self, row: &mut WidgetA) {
        if let Some(name) = &self.name {
            row.name = name.clone();
        }
        if let Some(description) = &self.description {
            row.description = Some(description.clone());
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct WidgetBCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub widget_a_id: i32,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct WidgetBUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub widget_a_id: Option<i32>,
}

impl WidgetBUpdate {
    /// Merge only the provided fields into an existing row.
    pub fn apply_to(&self, row: &mut WidgetB) {
        if let Some(name) = &self.name {
            row.name = name.clone();
        }
        if let Some(description) = &self.description {
            row.description = Some(description.clone());
        }
        if let Some(widget_a_id) = self.widget_a_id {
            row.widget_a_id = widget_a_id;
        }
    }
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

#[derive(Clone, Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct WidgetBListQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Restricts the page and the total count to children of this parent.
    #[serde(default)]
    pub widget_a_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn widget_a() -> WidgetA {
        WidgetA {
            id: 1,
            name: "Alpha".into(),
            description: Some("first".into()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn update_with_only_description_preserves_name() {
        let mut row = widget_a();
        let patch = WidgetAUpdate {
            description: Some("new".into()),
            ..Default::default()
        };
        patch.apply_to(&mut row);
        assert_eq!(row.name, "Alpha");
        assert_eq!(row.description.as_deref(), Some("new"));
    }

    #[test]
    fn empty_update_changes_nothing() {
        let mut row = widget_a();
        WidgetAUpdate::default().apply_to(&mut row);
        assert_eq!(row.name, "Alpha");
        assert_eq!(row.description.as_deref(), Some("first"));
    }

    #[test]
    fn widget_b_update_can_move_to_another_parent() {
        let mut row = WidgetB {
            id: 7,
            name: "child".into(),
            description: None,
            widget_a_id: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let patch = WidgetBUpdate {
            widget_a_id: Some(2),
            ..Default::default()
        };
        patch.apply_to(&mut row);
        assert_eq!(row.widget_a_id, 2);
        assert_eq!(row.name, "child");
    }

    #[test]
    fn list_query_defaults() {
        let query: ListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
    }

    #[test]
    fn widget_b_list_query_defaults_to_no_filter() {
        let query: WidgetBListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
        assert!(query.widget_a_id.is_none());
    }
}
