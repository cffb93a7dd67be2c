use crate::code::GeckoCode;
use crate::loader::{GECKO_SECTION, GECKO_ENABLED_SECTION, GECKO_DISABLED_SECTION};
use crate::traits::SectionWriter;

/// Writes the user defined codes and the enabled state of all codes into a local settings file
///
/// Codes from the global source aren't written out in full, since they will be loaded again
/// from the global source.  A code is only listed as disabled if it was enabled by default.
pub fn save_gecko_codes(writer: &mut dyn SectionWriter, codes: &[GeckoCode]) {
    let mut lines = vec![];
    let mut enabled = vec![];
    let mut disabled = vec![];

    for code in codes {
        if code.enabled {
            enabled.push(format!("${}", code.name));
        } else if code.default_enabled {
            disabled.push(format!("${}", code.name));
        }

        if code.user_defined {
            lines.push(code.title());
            lines.extend(code.notes.iter().map(|note| format!("*{}", note)));
            lines.extend(code.code_lines.iter().cloned());
        }
    }

    log::debug!(
        "gecko: saving {} lines of user codes, {} enabled, {} disabled",
        lines.len(),
        enabled.len(),
        disabled.len()
    );
    writer.set_section_lines(GECKO_SECTION, lines);
    writer.set_section_lines(GECKO_ENABLED_SECTION, enabled);
    writer.set_section_lines(GECKO_DISABLED_SECTION, disabled);
}


#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[derive(Default)]
    struct Sections(BTreeMap<String, Vec<String>>);

    impl SectionWriter for Sections {
        fn set_section_lines(&mut self, section: &str, lines: Vec<String>) {
            self.0.insert(section.to_string(), lines);
        }
    }

    #[test]
    fn writes_user_codes_and_flags() {
        let mut global = GeckoCode::new("Skip Intro".to_string(), Some("Someone".to_string()), false);
        global.default_enabled = true;

        let mut user = GeckoCode::new("Widescreen".to_string(), None, true);
        user.notes.push("16:9".to_string());
        user.code_lines.push("04000000 00000000".to_string());
        user.enabled = true;

        let mut sections = Sections::default();
        save_gecko_codes(&mut sections, &[global, user]);

        assert_eq!(sections.0["Gecko"], vec!["$Widescreen", "*16:9", "04000000 00000000"]);
        assert_eq!(sections.0["Gecko_Enabled"], vec!["$Widescreen"]);
        assert_eq!(sections.0["Gecko_Disabled"], vec!["$Skip Intro"]);
    }

    #[test]
    fn clears_sections_when_there_are_no_codes() {
        let mut sections = Sections::default();
        sections.set_section_lines("Gecko", vec!["$Stale".to_string()]);
        save_gecko_codes(&mut sections, &[]);

        assert!(sections.0["Gecko"].is_empty());
        assert!(sections.0["Gecko_Enabled"].is_empty());
    }
}
