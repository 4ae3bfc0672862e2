extern crate pretty_env_logger;

use std::{env, process};

use propositional_kb::client;

fn main() {
    pretty_env_logger::init();

    let path = env::args().nth(1).unwrap_or_else(|| client::CONFIG_FILE_PATH.to_string());
    if let Err(why) = client::start(&path) {
        eprintln!("{}", why);
        process::exit(1);
    }
}
