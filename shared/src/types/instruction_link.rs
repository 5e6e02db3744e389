use serde::{Deserialize, Serialize};

/// One help/instruction link shown on the home screen.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InstructionLink {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub subtitle: String,
}

/// Payload for `PUT /admin/instruction-links/{id}`. The backend expects
/// all three fields present; absent inputs are normalized here — empty
/// title/subtitle, `"#"` for a missing link target.
#[derive(Debug, Clone, Serialize)]
pub struct InstructionLinkUpdate {
    pub title: String,
    pub link: String,
    pub subtitle: String,
}

impl InstructionLinkUpdate {
    pub fn new(title: Option<String>, link: Option<String>, subtitle: Option<String>) -> Self {
        Self {
            title: title.unwrap_or_default(),
            link: link.filter(|l| !l.is_empty()).unwrap_or_else(|| "#".to_string()),
            subtitle: subtitle.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_normalizes_missing_fields() {
        let u = InstructionLinkUpdate::new(None, None, None);
        assert_eq!(u.title, "");
        assert_eq!(u.link, "#");
        assert_eq!(u.subtitle, "");
    }

    #[test]
    fn update_keeps_provided_fields() {
        let u = InstructionLinkUpdate::new(
            Some("How to order".to_string()),
            Some("https://example.com/howto".to_string()),
            Some("Step by step".to_string()),
        );
        assert_eq!(u.link, "https://example.com/howto");
        assert_eq!(u.title, "How to order");
    }

    #[test]
    fn empty_link_becomes_placeholder() {
        let u = InstructionLinkUpdate::new(Some("t".into()), Some(String::new()), None);
        assert_eq!(u.link, "#");
    }
}
