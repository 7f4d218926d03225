use std::io;

fn main() {
    pokerbots_cli::logging::init_logging();
    let code = pokerbots_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
