//! Cafe Model

use serde::{Deserialize, Serialize};

/// Cafe entity
///
/// Serializes to a flat record with one key per column, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Cafe {
    pub id: i64,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    /// Seat-count descriptor, e.g. "20-30" or "50+"
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

/// Create cafe payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CafeCreate {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

impl CafeCreate {
    /// Materialize the row that an insert of this payload produces under `id`
    pub fn into_cafe(self, id: i64) -> Cafe {
        Cafe {
            id,
            name: self.name,
            map_url: self.map_url,
            img_url: self.img_url,
            location: self.location,
            seats: self.seats,
            has_toilet: self.has_toilet,
            has_wifi: self.has_wifi,
            has_sockets: self.has_sockets,
            can_take_calls: self.can_take_calls,
            coffee_price: self.coffee_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Cafe {
        CafeCreate {
            name: "Science Gallery London".to_string(),
            map_url: "https://g.page/scigallerylon".to_string(),
            img_url: "https://example.com/sgl.jpg".to_string(),
            location: "London Bridge".to_string(),
            seats: "50+".to_string(),
            has_toilet: true,
            has_wifi: false,
            has_sockets: true,
            can_take_calls: true,
            coffee_price: Some("£2.40".to_string()),
        }
        .into_cafe(1)
    }

    #[test]
    fn test_cafe_serializes_every_column() {
        let value = serde_json::to_value(sample()).unwrap();
        let obj = value.as_object().unwrap();
        let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        for column in [
            "id",
            "name",
            "map_url",
            "img_url",
            "location",
            "seats",
            "has_toilet",
            "has_wifi",
            "has_sockets",
            "can_take_calls",
            "coffee_price",
        ] {
            assert!(keys.contains(&column), "missing column {column}");
        }
        assert_eq!(obj.len(), 11);
        assert_eq!(obj["has_wifi"], serde_json::json!(false));
        assert_eq!(obj["coffee_price"], serde_json::json!("£2.40"));
    }

    #[test]
    fn test_missing_price_serializes_as_null() {
        let mut cafe = sample();
        cafe.coffee_price = None;
        let value = serde_json::to_value(cafe).unwrap();
        assert!(value["coffee_price"].is_null());
    }
}
