fn main() {
    if let Err(e) = tx_untangling::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
