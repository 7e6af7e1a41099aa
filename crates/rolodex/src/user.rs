//! The user record and its search routing table.

use rolodex_seeker::{Accessor, Field, Searchable};
use serde::{Deserialize, Serialize};

/// One directory entry.
///
/// Serialized with the short keys used on the wire (`fname`, `phone`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(rename = "fname")]
    pub first_name: String,
    pub city: String,
    #[serde(rename = "phone")]
    pub phone_number: String,
    pub height: f32,
    pub married: bool,
}

impl User {
    /// Serialized keys in display order.
    pub const COLUMNS: &'static [&'static str] =
        &["id", "fname", "city", "phone", "height", "married"];
}

fn first_name(u: &User) -> &str {
    &u.first_name
}

fn city(u: &User) -> &str {
    &u.city
}

fn phone_number(u: &User) -> &str {
    &u.phone_number
}

fn height(u: &User) -> f32 {
    u.height
}

fn married(u: &User) -> bool {
    u.married
}

// `Married` keeps its capital M; clients already send it that way.
// Phone numbers are matched as text.
impl Searchable for User {
    const FIELDS: &'static [Field<Self>] = &[
        Field::new("fname", Accessor::Text(first_name)),
        Field::new("city", Accessor::Text(city)),
        Field::new("phone", Accessor::Text(phone_number)),
        Field::new("height", Accessor::Float32(height)),
        Field::new("Married", Accessor::Bool(married)),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex_seeker::{FieldKind, Number, Value};

    fn anna() -> User {
        User {
            id: 4,
            first_name: "Anna".to_string(),
            city: "Budapest".to_string(),
            phone_number: "+36 1 555 0100".to_string(),
            height: 5.67,
            married: true,
        }
    }

    #[test]
    fn routing_table() {
        let routes: Vec<(&str, FieldKind)> = User::FIELDS
            .iter()
            .map(|f| (f.name(), f.kind()))
            .collect();
        assert_eq!(
            routes,
            vec![
                ("fname", FieldKind::Text),
                ("city", FieldKind::Text),
                ("phone", FieldKind::Text),
                ("height", FieldKind::Float),
                ("Married", FieldKind::Boolean),
            ]
        );
        assert!(User::field("married").is_none());
        assert!(User::field("id").is_none());
    }

    #[test]
    fn accessors_read_the_right_columns() {
        let user = anna();
        let read = |key: &str| User::field(key).map(|f| f.read(&user));
        assert_eq!(read("fname"), Some(Value::Text("Anna")));
        assert_eq!(read("city"), Some(Value::Text("Budapest")));
        assert_eq!(read("phone"), Some(Value::Text("+36 1 555 0100")));
        assert_eq!(
            read("height"),
            Some(Value::Number(Number::F64(f64::from(5.67f32))))
        );
        assert_eq!(read("Married"), Some(Value::Bool(true)));
    }

    #[test]
    fn serde_uses_wire_keys() {
        let json = serde_json::to_value(anna()).unwrap();
        assert_eq!(json["fname"], "Anna");
        assert_eq!(json["phone"], "+36 1 555 0100");
        assert_eq!(json["married"], true);

        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        let mut columns = User::COLUMNS.to_vec();
        columns.sort_unstable();
        assert_eq!(keys, columns);

        let back: User = serde_json::from_value(json).unwrap();
        assert_eq!(back, anna());
    }
}
