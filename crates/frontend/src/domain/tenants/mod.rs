pub mod api;
pub mod ui;

use contracts::tenant::Tenant;

use crate::shared::components::data_table::{FieldValue, TableRecord};

impl TableRecord for Tenant {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "slug" => Some(FieldValue::Text(self.slug.clone())),
            "name" => Some(FieldValue::Text(self.name.clone())),
            "plan" => Some(FieldValue::Text(self.plan.as_str().to_string())),
            "member_count" => self.member_count.map(|count| FieldValue::Number(count as f64)),
            "is_active" => Some(FieldValue::Bool(self.is_active)),
            "created_at" => Some(FieldValue::DateTime(self.created_at)),
            _ => None,
        }
    }
}
