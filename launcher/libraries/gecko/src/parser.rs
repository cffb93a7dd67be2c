use crate::code::GeckoCode;

/// Builds gecko codes one line at a time
///
/// The code under construction is only moved into the output list once the next `$` header
/// starts or the input is finished, and only if it has a name.  Any lines that appear before
/// the first header have no code to belong to, and are dropped.
pub struct GeckoCodeParser {
    user_defined: bool,
    current: Option<GeckoCode>,
    codes: Vec<GeckoCode>,
}

impl GeckoCodeParser {
    pub fn new(user_defined: bool) -> Self {
        Self {
            user_defined,
            current: None,
            codes: vec![],
        }
    }

    pub fn feed_line(&mut self, line: &str) {
        match line.chars().next() {
            // code name
            Some('$') => {
                self.seal();
                let (name, creator) = parse_gecko_header(line);
                self.current = Some(GeckoCode::new(name, creator, self.user_defined));
            },
            // comments
            Some('*') => match self.current.as_mut() {
                Some(code) => code.notes.push(line[1..].to_string()),
                None => log::trace!("gecko: dropping note before any code header: {:?}", line),
            },
            _ => match self.current.as_mut() {
                Some(code) => code.code_lines.push(line.to_string()),
                None => log::trace!("gecko: dropping line before any code header: {:?}", line),
            },
        }
    }

    pub fn finish(mut self) -> Vec<GeckoCode> {
        self.seal();
        self.codes
    }

    fn seal(&mut self) {
        if let Some(code) = self.current.take() {
            if !code.name.is_empty() {
                self.codes.push(code);
            } else {
                log::trace!("gecko: discarding code with an empty name");
            }
        }
    }
}

/// Parses every line in order, returning the completed codes
pub fn parse_gecko_lines<I, S>(lines: I, user_defined: bool) -> Vec<GeckoCode>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = GeckoCodeParser::new(user_defined);
    for line in lines {
        parser.feed_line(line.as_ref());
    }
    parser.finish()
}

/// Splits a `$name [creator]` header into its name and creator
///
/// The creator is the text between the first `[` and the next `]`, and the name is whatever
/// comes before the `[`, less any trailing spaces.  If there are no brackets, the whole header
/// is the name, exactly as written.  An empty pair of brackets still counts as a (blank) creator,
/// but is left as part of the name.
pub fn parse_gecko_header(line: &str) -> (String, Option<String>) {
    let header = line.strip_prefix('$').unwrap_or(line);

    let bracketed = header.find('[').and_then(|start| {
        let rest = &header[start + 1..];
        rest.find(']').map(|end| (start, &rest[..end]))
    });

    match bracketed {
        Some((start, creator)) if !creator.is_empty() => {
            (header[..start].trim_end().to_string(), Some(creator.to_string()))
        },
        Some((_, creator)) => (header.to_string(), Some(creator.to_string())),
        None => (header.to_string(), None),
    }
}
