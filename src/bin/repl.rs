use std::io::{self, BufRead, Write};

use chainmap::{
    DEFAULT_CAPACITY, HashMap,
    hash_functions::{hash_function_1, hash_function_2},
    protocol::{handle_request, parse_request},
};
use log::{debug, info, warn};

/// Usage: `repl [capacity] [hash-function: 1|2]`
fn main() -> io::Result<()> {
    env_logger::builder().init();

    let mut map = build_map(std::env::args().skip(1).collect());
    info!(
        "started with {} buckets, type commands (put/get/remove/contains/clear/resize/load/empty/keys/size/capacity/dump)",
        map.capacity()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        match parse_request(&line) {
            Ok(cmd) => {
                let reply = handle_request(&mut map, cmd);
                writeln!(stdout, "{reply}")?;
            }
            Err(e) => {
                debug!(target: "parse_request", "rejected {line:?}");
                writeln!(stdout, "ERR {e}")?;
            }
        }
        stdout.flush()?;
    }

    Ok(())
}

fn build_map(args: Vec<String>) -> HashMap<String> {
    let capacity = match args.first().map(|s| s.parse::<usize>()) {
        None => DEFAULT_CAPACITY,
        Some(Ok(cap)) if cap >= 1 => cap,
        Some(_) => {
            warn!("invalid capacity {:?}, using {DEFAULT_CAPACITY}", args[0]);
            DEFAULT_CAPACITY
        }
    };

    match args.get(1).map(String::as_str) {
        None | Some("1") => HashMap::new(capacity, hash_function_1),
        Some("2") => HashMap::new(capacity, hash_function_2),
        Some(other) => {
            warn!("unknown hash function {other:?}, using 1");
            HashMap::new(capacity, hash_function_1)
        }
    }
}
