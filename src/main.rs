use clap::Parser;
use hexdecode::App;

fn main() {
    if let Err(e) = App::parse().run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
