pub mod api;
pub mod ui;

use contracts::identity::Identity;

use crate::shared::components::data_table::{FieldValue, TableRecord};

impl TableRecord for Identity {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "email" => Some(FieldValue::Text(self.email.clone())),
            "name" => self.name.clone().map(FieldValue::Text),
            "phone" => self.phone.clone().map(FieldValue::Text),
            "email_verified" => Some(FieldValue::Bool(self.email_verified)),
            "is_active" => Some(FieldValue::Bool(self.is_active)),
            "is_locked" => Some(FieldValue::Bool(self.is_locked)),
            "last_login_at" => self.last_login_at.map(FieldValue::DateTime),
            "created_at" => Some(FieldValue::DateTime(self.created_at)),
            _ => None,
        }
    }
}
