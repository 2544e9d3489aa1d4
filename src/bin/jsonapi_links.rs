fn main() {
    if let Err(e) = jsonapi_links::cli::run_cli() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
