use clap::Parser;
use cli::Args;

fn main() {
    let args = Args::parse();

    if let Err(e) = args.run() {
        eprintln!("error: {e:?}");
        std::process::exit(1);
    }
}
