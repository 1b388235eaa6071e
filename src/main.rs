fn main() {
    if let Err(err) = derivata::cli::run() {
        eprintln!("Error: {:#}", err);
        #[allow(clippy::exit)]
        std::process::exit(1);
    }
}
