//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    pretty_env_logger::init();
    if let Err(err) = cityscore_cli::run() {
        eprintln!("cityscore: {err}");
        std::process::exit(1);
    }
}
