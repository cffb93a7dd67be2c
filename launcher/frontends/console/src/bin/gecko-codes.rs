
use launcher_console::ConsoleFrontend;

fn main() {
    let matches = ConsoleFrontend::args("gecko-codes").get_matches();
    if let Err(err) = ConsoleFrontend::init_logger(&matches) {
        eprintln!("{}", err);
    }

    if let Err(err) = ConsoleFrontend.start(&matches) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
