use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use course_table::logger::initialize_logger;
use course_table::{Config, Session};

fn main() -> ExitCode {
    initialize_logger();
    let config = Config::parse();

    let stdin = io::stdin();
    let mut session = Session::new(config, stdin.lock(), io::stdout());
    match session.preload().and_then(|_| session.run()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("course-table: {}", e);
            ExitCode::FAILURE
        }
    }
}
