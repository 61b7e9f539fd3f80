mod cli;
mod extract;

use clap::Parser;
use clap::error::ErrorKind;
use cli::Cli;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            // Argument errors exit 1, not clap's default 2.
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };

    if let Err(code) = extract::run(&cli.file) {
        std::process::exit(code);
    }
}
