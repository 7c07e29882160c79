use cidr_hcmask::cli::{run, Args};
use cidr_hcmask::config::{init_logging, Settings};
use cidr_hcmask::output::format_error;
use clap::Parser;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let settings = Settings::from_env();
    if let Err(e) = init_logging(&settings.log_config) {
        eprintln!("{}", format_error(&e));
    }
    let args = Args::parse();
    log::debug!("#Start main() {args:?}");

    if let Err(e) = run(&args, &settings) {
        log::error!("{e}");
        eprintln!("{}", format_error(&e));
        std::process::exit(1);
    }
}
