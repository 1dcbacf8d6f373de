use clap::Parser;
use general::reset_sigpipe;
use std::error::Error;
use std::io;

mod digest;
use crate::digest::DigestSet;

mod report;
use crate::report::{print_report, terminal_width};

fn main() -> Result<(), Box<dyn Error>> {
    // behave like a typical unix utility
    reset_sigpipe()?;
    let mut stdout = io::stdout().lock();

    #[derive(Parser, Debug)]
    #[clap(author, version, about, long_about=None)]
    struct Args {
        /// File to hash
        file: std::path::PathBuf,
    }
    let args = Args::parse();

    let digests = DigestSet::for_file(&args.file)?;
    print_report(&mut stdout, &digests, terminal_width())?;
    Ok(())
}
