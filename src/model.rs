use serde::{Deserialize, Serialize};

/// Structured result of extracting one recipe page.
///
/// `duration` is in seconds; `0` means the page gave no usable duration,
/// which callers cannot tell apart from a genuinely instant recipe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub url: String,
    pub title: String,
    #[serde(rename = "duration")]
    pub duration_seconds: u64,
    pub photo: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    /// Category name, only set when the record came from a category crawl
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl RecipeRecord {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// An empty title is treated as a failed extraction for the whole page.
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }
}

/// Fixed measurement-unit enumeration of the recipe database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureUnit {
    Gram,
    Milliliter,
    Piece,
    Tablespoon,
    Teaspoon,
}

impl MeasureUnit {
    /// Foreign key into the `measureunit` table
    pub fn id(self) -> i32 {
        match self {
            MeasureUnit::Gram => 1,
            MeasureUnit::Milliliter => 2,
            MeasureUnit::Piece => 3,
            MeasureUnit::Tablespoon => 4,
            MeasureUnit::Teaspoon => 5,
        }
    }

    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(MeasureUnit::Gram),
            2 => Some(MeasureUnit::Milliliter),
            3 => Some(MeasureUnit::Piece),
            4 => Some(MeasureUnit::Tablespoon),
            5 => Some(MeasureUnit::Teaspoon),
            _ => None,
        }
    }
}

impl Serialize for MeasureUnit {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.id())
    }
}

impl<'de> Deserialize<'de> for MeasureUnit {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = i32::deserialize(deserializer)?;
        MeasureUnit::from_id(id)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown measure unit id {id}")))
    }
}

/// Normalized form of one ingredient line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientTriple {
    pub name: String,
    pub amount: f64,
    #[serde(rename = "unit_id")]
    pub unit: Option<MeasureUnit>,
}

impl IngredientTriple {
    pub fn unit_id(&self) -> Option<i32> {
        self.unit.map(MeasureUnit::id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_short_field_names() {
        let mut record = RecipeRecord::new("https://blog-food.ru/recipes/salatyi/olivie");
        record.title = "Оливье".to_string();
        record.duration_seconds = 1500;

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["url"], "https://blog-food.ru/recipes/salatyi/olivie");
        assert_eq!(json["title"], "Оливье");
        assert_eq!(json["duration"], 1500);
        assert_eq!(json["photo"], "");
        assert!(json["ingredients"].as_array().unwrap().is_empty());
        assert!(json["steps"].as_array().unwrap().is_empty());
        assert!(json.get("category").is_none());
    }

    #[test]
    fn test_triple_serializes_unit_as_id() {
        let triple = IngredientTriple {
            name: "Молоко".to_string(),
            amount: 200.0,
            unit: Some(MeasureUnit::Milliliter),
        };
        let json = serde_json::to_value(&triple).unwrap();
        assert_eq!(json["unit_id"], 2);

        let no_unit = IngredientTriple {
            name: "Соль".to_string(),
            amount: 1.0,
            unit: None,
        };
        let json = serde_json::to_value(&no_unit).unwrap();
        assert!(json["unit_id"].is_null());
    }

    #[test]
    fn test_unit_ids_are_stable() {
        for id in 1..=5 {
            assert_eq!(MeasureUnit::from_id(id).unwrap().id(), id);
        }
        assert!(MeasureUnit::from_id(0).is_none());
        assert!(MeasureUnit::from_id(6).is_none());
    }
}
