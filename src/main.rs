use std::process;

use log::error;
use structopt::StructOpt;

use rom2mem::config::{Config, Opt};
use rom2mem::converter;
use rom2mem::error::ImageError;
use rom2mem::util::logger::{self, Logger};

fn main() {
    let opt = Opt::from_args();

    if let Err(err) = logger::init(Logger { log_layout: opt.log_layout }) {
        eprintln!("Failed to initialize logger: {err}");
    }

    let config = match Config::new(&opt) {
        Ok(config) => config,
        Err(err @ ImageError::InsufficientArguments) => {
            println!("{err}");
            process::exit(1);
        }
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    };

    if let Err(err) = converter::convert(&config) {
        error!("{err}");
        process::exit(1);
    }
}
