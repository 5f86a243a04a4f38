// @file main.rs

mod drain;
mod params;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ColorChoice};
use std::fs::File;
use std::io::Read;

use drain::{DiscardDrain, LogReport};
use params::BLOCK_SIZE;

static USAGE: &str = "rd [options] <input.bin>...";

static HELP_TEMPLATE: &str = "
  {name} {version} -- {about}

USAGE:

  {usage}

OPTIONS:

    -b, --block N           read unit in bytes [65536]

    -h, --help              print help (this) message
    -V, --version           print version information

  Diagnostics go to stderr through the logger; set RUST_LOG=debug to see
  per-read progress and megabyte milestones.
";

fn main() {
    env_logger::init();

    let m = clap::Command::new("rd")
        .version("0.1.0")
        .about("streamed byte drain")
        .help_template(HELP_TEMPLATE)
        .override_usage(USAGE)
        .color(ColorChoice::Never)
        .infer_long_args(true)
        .args([
            Arg::new("inputs")
                .help("input files")
                .value_name("input.bin")
                .action(ArgAction::Append)
                .default_value("-"),
            Arg::new("block")
                .short('b')
                .long("block")
                .help("read unit in bytes [65536]")
                .value_name("N")
                .value_parser(clap::value_parser!(u64).range(1..)),
        ])
        .get_matches();

    let inputs: Vec<&String> = m.get_many::<String>("inputs").unwrap().collect();
    let block = m.get_one::<u64>("block").map_or(BLOCK_SIZE, |x| *x as usize);

    let mut code = 0;
    for input in inputs {
        let src = match create_source(input) {
            Ok(src) => src,
            Err(err) => {
                log::error!("{:#}", err);
                code = 1;
                continue;
            }
        };

        // one drain per input; the counters are local to each run
        DiscardDrain::new(src, LogReport::new(input))
            .with_block_size(block)
            .run();
    }

    std::process::exit(code);
}

fn create_source(name: &str) -> Result<Box<dyn Read>> {
    if name == "-" {
        if atty::is(atty::Stream::Stdin) {
            log::warn!("draining a terminal; this only ends on ctrl-D");
        }
        return Ok(Box::new(std::io::stdin()));
    }

    let path = std::path::Path::new(name);
    let file = File::open(path).with_context(|| format!("failed to open {:?}", path))?;
    Ok(Box::new(file))
}

// end of main.rs
