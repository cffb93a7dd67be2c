use crate::code::GeckoCode;
use crate::parser::GeckoCodeParser;
use crate::traits::SectionLines;

pub const GECKO_SECTION: &str = "Gecko";
pub const GECKO_ENABLED_SECTION: &str = "Gecko_Enabled";
pub const GECKO_DISABLED_SECTION: &str = "Gecko_Disabled";

/// The default filter applied to the raw lines of the `Gecko` section, which only passes empty
/// lines and lines starting with `#`
pub fn is_catalog_line(line: &str) -> bool {
    line.is_empty() || line.starts_with('#')
}

/// Loads the gecko code list from a global settings source, and an optional local (user) source
///
/// The global codes always come first in the output, followed by the local codes.  After the
/// global source is loaded, each code's `default_enabled` is set to its current `enabled` state.
pub struct GeckoCodeLoader<'a> {
    global: &'a dyn SectionLines,
    local: Option<&'a dyn SectionLines>,
    line_filter: fn(&str) -> bool,
    enabled_flags: bool,
}

impl<'a> GeckoCodeLoader<'a> {
    pub fn new(global: &'a dyn SectionLines) -> Self {
        Self {
            global,
            local: None,
            line_filter: is_catalog_line,
            enabled_flags: false,
        }
    }

    pub fn with_local(mut self, local: Option<&'a dyn SectionLines>) -> Self {
        self.local = local;
        self
    }

    /// Replaces the filter that selects which raw `Gecko` lines are parsed
    pub fn with_line_filter(mut self, line_filter: fn(&str) -> bool) -> Self {
        self.line_filter = line_filter;
        self
    }

    /// Also read the `Gecko_Enabled` and `Gecko_Disabled` sections of each source
    pub fn with_enabled_flags(mut self, enabled_flags: bool) -> Self {
        self.enabled_flags = enabled_flags;
        self
    }

    pub fn load(&self) -> Vec<GeckoCode> {
        let mut codes = vec![];

        self.load_source(self.global, false, &mut codes);
        for code in codes.iter_mut() {
            code.default_enabled = code.enabled;
        }

        if let Some(local) = self.local {
            self.load_source(local, true, &mut codes);
        }

        codes
    }

    fn load_source(&self, source: &dyn SectionLines, user_defined: bool, codes: &mut Vec<GeckoCode>) {
        let mut parser = GeckoCodeParser::new(user_defined);
        for line in source.section_lines(GECKO_SECTION, false) {
            if (self.line_filter)(&line) {
                parser.feed_line(&line);
            }
        }

        let parsed = parser.finish();
        log::debug!(
            "gecko: loaded {} codes from the {} source",
            parsed.len(),
            if user_defined { "local" } else { "global" }
        );
        codes.extend(parsed);

        if self.enabled_flags {
            read_enabled_flags(source, codes);
        }
    }
}

/// Loads the codes using the default line filter, without reading any enabled flags
pub fn load_gecko_codes(global: &dyn SectionLines, local: Option<&dyn SectionLines>) -> Vec<GeckoCode> {
    GeckoCodeLoader::new(global).with_local(local).load()
}

fn read_enabled_flags(source: &dyn SectionLines, codes: &mut [GeckoCode]) {
    for (section, enabled) in [(GECKO_ENABLED_SECTION, true), (GECKO_DISABLED_SECTION, false)] {
        for line in source.section_lines(section, false) {
            let name = match line.strip_prefix('$') {
                Some(name) => name,
                None => continue,
            };

            let mut found = false;
            for code in codes.iter_mut().filter(|code| code.name == name) {
                code.enabled = enabled;
                found = true;
            }
            if !found {
                log::debug!("gecko: {} lists an unknown code {:?}", section, name);
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_line_filter() {
        assert!(is_catalog_line(""));
        assert!(is_catalog_line("#$Commented Out"));
        assert!(is_catalog_line("# note"));
        assert!(!is_catalog_line("$Foo"));
        assert!(!is_catalog_line("*note"));
        assert!(!is_catalog_line("C0000000 00000000"));
        assert!(!is_catalog_line(" #indented"));
    }
}
