use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use minievm::run_bytecode;
use std::io::{self, BufRead, Write};

const DISCLAIMER: &str = "\nDisclaimer (for Windows users only):\n\
	Windows CMD or Powershell may limit input to 255 characters.\n\
	Consider using WSL or the Git Bash emulator to run this program.";

#[derive(Parser)]
#[clap(
	name = "minievm-cli",
	about = "Executes hex-encoded bytecode and prints the hash of the final memory plus the gas used",
	version
)]
struct Opts {
	/// Log at info level instead of warn.
	#[clap(long)]
	verbose: bool,
}

fn init_logging(verbose: bool) -> Result<()> {
	let stdout = ConsoleAppender::builder().build();
	let level = if verbose {
		LevelFilter::Info
	} else {
		LevelFilter::Warn
	};
	let config = Config::builder()
		.appender(Appender::builder().build("stdout", Box::new(stdout)))
		.build(Root::builder().appender("stdout").build(level))?;
	log4rs::init_config(config)?;
	Ok(())
}

fn main() -> Result<()> {
	let opts = Opts::parse();
	init_logging(opts.verbose)?;

	println!("{DISCLAIMER}");

	// Keep reading until stdin closes; a failed run never poisons the
	// next one, every line gets a fresh context.
	let stdin = io::stdin();
	let mut lines = stdin.lock().lines();
	loop {
		println!("\nEnter bytecode to be executed:");
		io::stdout().flush()?;

		let line = match lines.next() {
			Some(line) => line?,
			None => break,
		};
		let input = line.trim();
		if input.is_empty() {
			continue;
		}

		match run_bytecode(input) {
			Ok(execution) => {
				println!("Hash of the memory: {}", execution.digest_hex());
				println!("Total gas used: {}", execution.used_gas);
			}
			Err(err) => {
				println!("\nError encountered: {err}\nPlease try again.");
			}
		}
	}

	Ok(())
}
