mod code;
mod loader;
mod parser;
mod save;
mod traits;

pub use crate::code::{GeckoCode, make_gecko_code_title};
pub use crate::loader::{GeckoCodeLoader, load_gecko_codes, is_catalog_line, GECKO_SECTION, GECKO_ENABLED_SECTION, GECKO_DISABLED_SECTION};
pub use crate::parser::{GeckoCodeParser, parse_gecko_header, parse_gecko_lines};
pub use crate::save::save_gecko_codes;
pub use crate::traits::{SectionLines, SectionWriter};
