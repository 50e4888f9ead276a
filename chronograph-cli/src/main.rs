mod cli;
mod log;
mod runner;
use cli::Cli;
use log::init_tracing;
use tracing::{debug, error};

fn main() {
    init_tracing();

    debug!("Starting Chronograph");

    let cli = match Cli::load() {
        Ok(cli) => cli,
        Err(cli::Error::Arguments(err)) => err.exit(),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(2);
        }
    };

    let run = match runner::execute(&cli) {
        Ok(run) => run,
        Err(err) => {
            error!("Chronograph run failed: {:?}", err);
            std::process::exit(1);
        }
    };

    match runner::render(&run, cli.json) {
        Ok(text) => println!("{}", text),
        Err(err) => {
            error!("Error printing timing data: {:?}", err);
            std::process::exit(1);
        }
    }

    std::process::exit(run.exit_code);
}
