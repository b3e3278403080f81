mod zoo;

use std::io::{BufRead, Write};

use anyhow::{bail, Context};
use log::info;

use crate::zoo::messages::format_lines;

const SAMPLE_REQUESTS: [(&str, i64); 5] = [
    ("MACACO", 5),
    ("HIPOPOTAMO", 3),
    ("LEOPARDO", 1),
    ("CROCODILO", 2),
    ("LEAO", 10),
];

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log_panics::init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let evaluator = zoo::default_evaluator().context("loading zoo tables")?;

    match &args[..] {
        [] => {
            for (species, quantity) in SAMPLE_REQUESTS {
                println!("{quantity} {species}:");
                for line in format_lines(&evaluator.evaluate(species, quantity)) {
                    println!("  {line}");
                }
            }
        }
        [flag] if flag == "--json" => {
            info!("reading requests from stdin");
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout().lock();

            for line in stdin.lock().lines() {
                let line = line.context("reading request")?;
                let response = zoo::handle_line(&evaluator, &line);
                writeln!(stdout, "{response}").context("writing response")?;
            }
        }
        [species, quantity] => {
            for line in format_lines(&evaluator.evaluate_text(species, quantity)) {
                println!("{line}");
            }
        }
        _ => bail!("usage: zoo-enclosures [--json | <SPECIES> <QUANTITY>]"),
    }

    Ok(())
}
