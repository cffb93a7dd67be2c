use std::fmt;
use std::fs;
use std::path::Path;

use launcher_gecko::{SectionLines, SectionWriter};

use crate::error::IniError;

/// A named block of an ini file
///
/// Sections hold two kinds of content: `key = value` pairs, and raw lines that are kept verbatim
/// and in order.  Game settings files store their code lists as raw lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub values: Vec<(String, String)>,
    pub lines: Vec<String>,
}

impl Section {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            values: vec![],
            lines: vec![],
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }

    pub fn set(&mut self, key: &str, value: &str) {
        match self.values.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(key)) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.values.push((key.to_string(), value.to_string())),
        }
    }

    fn is_named(&self, name: &str, case_sensitive: bool) -> bool {
        if case_sensitive {
            self.name == name
        } else {
            self.name.eq_ignore_ascii_case(name)
        }
    }
}


#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IniFile {
    sections: Vec<Section>,
}

impl IniFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(text: &str) -> Self {
        let mut ini = IniFile::new();
        let mut current: Option<usize> = None;

        for (lineno, line) in text.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);

            if let Some(name) = parse_section_header(line) {
                current = Some(ini.section_index_or_insert(name, true));
                continue;
            }

            let section = match current {
                Some(index) => &mut ini.sections[index],
                None => {
                    if !line.trim().is_empty() {
                        log::trace!("ini: ignoring line {} outside of any section: {:?}", lineno + 1, line);
                    }
                    continue;
                },
            };

            match parse_key_value(line) {
                Some((key, value)) => section.set(key, value),
                None => section.lines.push(line.to_string()),
            }
        }

        ini
    }

    pub fn load<P>(path: P) -> Result<Self, IniError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| IniError::io(path, err))?;
        log::debug!("ini: loaded {:?}", path);
        Ok(Self::parse(&text))
    }

    pub fn save<P>(&self, path: P) -> Result<(), IniError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        fs::write(path, self.to_string()).map_err(|err| IniError::io(path, err))?;
        log::debug!("ini: saved {:?}", path);
        Ok(())
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.section(name, false).is_some()
    }

    pub fn section(&self, name: &str, case_sensitive: bool) -> Option<&Section> {
        self.sections.iter().find(|section| section.is_named(name, case_sensitive))
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|section| section.name.as_str())
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section, false)?.get(key)
    }

    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        let index = self.section_index_or_insert(section, false);
        self.sections[index].set(key, value);
    }

    /// Returns the raw lines of a section, or an empty list if the section doesn't exist
    pub fn lines(&self, section: &str, case_sensitive: bool) -> &[String] {
        self.section(section, case_sensitive)
            .map(|section| section.lines.as_slice())
            .unwrap_or(&[])
    }

    pub fn set_lines(&mut self, section: &str, lines: Vec<String>) {
        let index = self.section_index_or_insert(section, false);
        self.sections[index].lines = lines;
    }

    fn section_index_or_insert(&mut self, name: &str, case_sensitive: bool) -> usize {
        match self.sections.iter().position(|section| section.is_named(name, case_sensitive)) {
            Some(index) => index,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            },
        }
    }
}

impl fmt::Display for IniFile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for section in self.sections.iter() {
            writeln!(f, "[{}]", section.name)?;
            for (key, value) in section.values.iter() {
                writeln!(f, "{} = {}", key, value)?;
            }
            for line in section.lines.iter() {
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

impl SectionLines for IniFile {
    fn section_lines(&self, section: &str, case_sensitive: bool) -> Vec<String> {
        self.lines(section, case_sensitive).to_vec()
    }
}

impl SectionWriter for IniFile {
    fn set_section_lines(&mut self, section: &str, lines: Vec<String>) {
        self.set_lines(section, lines);
    }
}

fn parse_section_header(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('[')?;
    let end = rest.find(']')?;
    Some(&rest[..end])
}

/// Splits a `key = value` line, or returns None if the line is meant to be kept verbatim
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    match line.chars().next() {
        None | Some('$') | Some('*') | Some('+') | Some('#') | Some(';') => return None,
        _ => {},
    }

    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}


#[cfg(test)]
mod tests {
    use super::*;

    const SETTINGS: &str = "\
; leading comment is outside of any section
[Core]
CPUThread = True
GFXBackend=Vulkan
[Gecko]
$Skip Intro [Someone]
*Boots straight into the menu
C2000000 00000001

#commented out line
[Gecko_Enabled]
$Skip Intro
";

    #[test]
    fn parses_values_and_raw_lines() {
        let ini = IniFile::parse(SETTINGS);

        assert_eq!(ini.section_names().collect::<Vec<_>>(), vec!["Core", "Gecko", "Gecko_Enabled"]);
        assert_eq!(ini.get("Core", "CPUThread"), Some("True"));
        assert_eq!(ini.get("core", "gfxbackend"), Some("Vulkan"));
        assert!(ini.lines("Core", false).is_empty());
        assert_eq!(
            ini.lines("Gecko", false),
            &[
                "$Skip Intro [Someone]",
                "*Boots straight into the menu",
                "C2000000 00000001",
                "",
                "#commented out line",
            ]
        );
    }

    #[test]
    fn section_lookup_respects_case_sensitivity() {
        let ini = IniFile::parse(SETTINGS);

        assert_eq!(ini.lines("gecko", false).len(), 5);
        assert!(ini.lines("gecko", true).is_empty());
        assert_eq!(ini.lines("Gecko", true).len(), 5);
        assert!(ini.lines("Missing", false).is_empty());
    }

    #[test]
    fn strips_carriage_returns() {
        let ini = IniFile::parse("[Gecko]\r\n$Code\r\n*note\r\n");
        assert_eq!(ini.lines("Gecko", false), &["$Code", "*note"]);
    }

    #[test]
    fn semicolon_comments_stay_raw_lines() {
        let ini = IniFile::parse("[Gecko]\n; old = value\n;plain comment\nkey = value\n");

        assert_eq!(ini.lines("Gecko", false), &["; old = value", ";plain comment"]);
        assert_eq!(ini.get("Gecko", "key"), Some("value"));
        assert_eq!(ini.get("Gecko", "; old"), None);
    }

    #[test]
    fn set_replaces_existing_values() {
        let mut ini = IniFile::new();
        ini.set("Core", "EnableCheats", "False");
        ini.set("core", "enablecheats", "True");

        assert_eq!(ini.section_names().count(), 1);
        assert_eq!(ini.get("Core", "EnableCheats"), Some("True"));
    }

    #[test]
    fn rendered_text_parses_back_the_same() {
        let ini = IniFile::parse(SETTINGS);
        let reparsed = IniFile::parse(&ini.to_string());
        assert_eq!(ini, reparsed);
    }

    #[test]
    fn set_lines_creates_missing_sections() {
        let mut ini = IniFile::parse(SETTINGS);
        ini.set_lines("Gecko_Disabled", vec!["$Skip Intro".to_string()]);
        ini.set_lines("GECKO", vec![]);

        assert!(ini.has_section("gecko_disabled"));
        assert_eq!(ini.lines("Gecko_Disabled", true), &["$Skip Intro"]);
        assert!(ini.lines("Gecko", false).is_empty());
    }

    #[test]
    fn load_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.ini");
        match IniFile::load(&path) {
            Err(IniError::Io { path: err_path, .. }) => assert_eq!(err_path, path),
            Ok(_) => panic!("expected an error loading {:?}", path),
        }
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("GALE01.ini");
        let ini = IniFile::parse(SETTINGS);
        ini.save(&path).unwrap();
        let loaded = IniFile::load(&path).unwrap();

        assert_eq!(ini, loaded);
    }
}
