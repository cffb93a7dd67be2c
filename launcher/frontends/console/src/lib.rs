use std::path::Path;

use clap::{Command, Arg, ArgAction, ArgMatches};

use launcher_gecko::{GeckoCode, GeckoCodeLoader, SectionLines, save_gecko_codes};
use launcher_ini::{IniFile, IniError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Ini(#[from] IniError),
    #[error("error encoding codes as json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("error starting logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),
}

pub struct ConsoleFrontend;

impl Default for ConsoleFrontend {
    fn default() -> Self {
        Self
    }
}

impl ConsoleFrontend {
    pub fn args(application_name: &'static str) -> Command {
        Command::new(application_name)
            .about("List the gecko codes in a game's settings files")
            .arg(
                Arg::new("global")
                    .required(true)
                    .help("Global game settings ini file that comes with the emulator"),
            )
            .arg(
                Arg::new("local")
                    .long("local")
                    .help("User game settings ini file, whose codes are added after the global codes"),
            )
            .arg(
                Arg::new("enabled")
                    .short('e')
                    .long("enabled")
                    .action(ArgAction::SetTrue)
                    .help("Read which codes are enabled from the Gecko_Enabled and Gecko_Disabled sections"),
            )
            .arg(
                Arg::new("all-lines")
                    .short('a')
                    .long("all-lines")
                    .action(ArgAction::SetTrue)
                    .help("Parse every line of the Gecko section instead of only empty and commented lines"),
            )
            .arg(
                Arg::new("json")
                    .long("json")
                    .action(ArgAction::SetTrue)
                    .help("Print the codes as json"),
            )
            .arg(
                Arg::new("export")
                    .long("export")
                    .help("Write the user codes and enabled flags to a new ini file"),
            )
            .arg(
                Arg::new("log-level")
                    .short('l')
                    .long("log-level")
                    .help("Set the type of log messages to print"),
            )
    }

    pub fn init_logger(matches: &ArgMatches) -> Result<(), Error> {
        let log_level = match matches.get_one("log-level").map(|s: &String| s.as_str()) {
            Some("trace") => log::Level::Trace,
            Some("debug") => log::Level::Debug,
            Some("info") => log::Level::Info,
            Some("warn") => log::Level::Warn,
            Some("error") => log::Level::Error,
            _ => log::Level::Info,
        };

        simple_logger::SimpleLogger::new()
            .with_level(log_level.to_level_filter())
            .without_timestamps()
            .init()?;
        Ok(())
    }

    pub fn start(&self, matches: &ArgMatches) -> Result<(), Error> {
        let global_path = matches.get_one::<String>("global").ok_or(Error::MissingArgument("global"))?;
        let global = IniFile::load(global_path)?;
        let local = matches.get_one::<String>("local").map(IniFile::load).transpose()?;

        let mut loader = GeckoCodeLoader::new(&global)
            .with_local(local.as_ref().map(|ini| ini as &dyn SectionLines))
            .with_enabled_flags(matches.get_flag("enabled"));
        if matches.get_flag("all-lines") {
            loader = loader.with_line_filter(|_| true);
        }
        let codes = loader.load();
        log::info!("found {} codes", codes.len());

        if matches.get_flag("json") {
            println!("{}", serde_json::to_string_pretty(&codes)?);
        } else {
            for code in codes.iter() {
                println!("{}", describe_code(code));
            }
        }

        if let Some(path) = matches.get_one::<String>("export") {
            export_codes(path, &codes)?;
        }
        Ok(())
    }
}

fn export_codes<P>(path: P, codes: &[GeckoCode]) -> Result<(), Error>
where
    P: AsRef<Path>,
{
    let mut ini = IniFile::new();
    save_gecko_codes(&mut ini, codes);
    ini.save(path)?;
    Ok(())
}

/// Formats a one line summary of a code
pub fn describe_code(code: &GeckoCode) -> String {
    format!(
        "{} {}{} ({} notes, {} lines)",
        if code.enabled { "[x]" } else { "[ ]" },
        code.title(),
        if code.user_defined { " (user)" } else { "" },
        code.notes.len(),
        code.code_lines.len(),
    )
}
