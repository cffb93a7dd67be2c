use serde_derive::{Deserialize, Serialize};

/// A single named code from a gecko code list
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeckoCode {
    pub name: String,
    pub creator: Option<String>,
    pub notes: Vec<String>,
    pub code_lines: Vec<String>,
    pub enabled: bool,
    pub default_enabled: bool,
    pub user_defined: bool,
}

impl GeckoCode {
    pub fn new(name: String, creator: Option<String>, user_defined: bool) -> Self {
        Self {
            name,
            creator,
            user_defined,
            ..Default::default()
        }
    }

    pub fn title(&self) -> String {
        make_gecko_code_title(self)
    }
}

/// Composes the `$name [creator]` header line for a code, leaving off the creator if there isn't one
pub fn make_gecko_code_title(code: &GeckoCode) -> String {
    match code.creator.as_deref() {
        Some(creator) if !creator.is_empty() => format!("${} [{}]", code.name, creator),
        _ => format!("${}", code.name),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_without_creator() {
        let code = GeckoCode::new("Skip Intro".to_string(), None, false);
        assert_eq!(code.title(), "$Skip Intro");
    }

    #[test]
    fn title_with_creator() {
        let code = GeckoCode::new("Skip Intro".to_string(), Some("Someone".to_string()), false);
        assert_eq!(code.title(), "$Skip Intro [Someone]");
    }

    #[test]
    fn title_with_empty_creator() {
        let code = GeckoCode::new("Skip Intro".to_string(), Some("".to_string()), false);
        assert_eq!(make_gecko_code_title(&code), "$Skip Intro");
    }
}
