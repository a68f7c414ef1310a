use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

/// Integer id that the frontend may send either as a JSON number or as a numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(try_from = "RawId")]
pub struct FlexibleId(pub i64);

impl TryFrom<RawId> for FlexibleId {
    type Error = String;

    fn try_from(value: RawId) -> Result<Self, Self::Error> {
        match value {
            RawId::Number(v) => Ok(FlexibleId(v)),
            RawId::Text(text) => text
                .trim()
                .parse::<i64>()
                .map(FlexibleId)
                .map_err(|_| format!("Wrong value {text}, can not parse to integer id")),
        }
    }
}

impl FlexibleId {
    /// Textual form used by `Question.category`.
    pub fn as_reference(&self) -> String {
        self.0.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_number_and_string() {
        let n: FlexibleId = serde_json::from_str("3").unwrap();
        let s: FlexibleId = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(n, FlexibleId(3));
        assert_eq!(s, FlexibleId(3));
        assert_eq!(s.as_reference(), "3");
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(serde_json::from_str::<FlexibleId>("\"Science\"").is_err());
        assert!(serde_json::from_str::<FlexibleId>("true").is_err());
        assert!(serde_json::from_str::<FlexibleId>("1.5").is_err());
    }
}
