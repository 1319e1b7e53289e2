pub mod cli;
pub mod convert;
pub mod edit;
pub mod emit;
pub mod error;
pub mod node;
pub mod path;

use colored::Colorize;

fn main() {
    let command_line_interface = cli::CommandLineInterface::load();
    if let Err(error) = command_line_interface.run() {
        eprintln!("{} {error:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
