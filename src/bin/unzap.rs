// src/bin/unzap.rs

//! Decompresses a file: `unzap <zapfile> <outputfile>`.

use std::env;
use std::fs::File;
use std::process::ExitCode;
use zap_codec::utils::log;

fn main() -> ExitCode {
    log::init_subscriber(log::Level::WARN);

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <zapfile> <outputfile>", args[0]);
        return ExitCode::FAILURE;
    }

    match run(&args[1], &args[2]) {
        Ok(()) => {
            println!(
                "Decompressed zap file {} into output file {}",
                args[1], args[2]
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}: {}", args[0], err);
            ExitCode::FAILURE
        }
    }
}

fn run(input: &str, output: &str) -> zap_codec::Result<()> {
    let mut ifs = File::open(input)?;
    let mut ofs = File::create(output)?;
    zap_codec::decompress(&mut ifs, &mut ofs)
}
