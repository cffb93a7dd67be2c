
/// A source of raw section lines, such as a game settings ini file
pub trait SectionLines {
    /// Returns the raw lines under the given section header, in order.  A missing section has no lines.
    fn section_lines(&self, section: &str, case_sensitive: bool) -> Vec<String>;
}

pub trait SectionWriter {
    /// Replaces all the raw lines of the given section, creating it if necessary
    fn set_section_lines(&mut self, section: &str, lines: Vec<String>);
}

