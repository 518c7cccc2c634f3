pub mod entry;
pub mod error;
pub mod fstools;
pub mod lister;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use rustop::opts;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use entry::EntryRecord;
use lister::list_directory;

fn main() -> ExitCode {
    let (args, _rest) = opts! {
        synopsis "Show name, extension, type and parent directory of each entry in a directory";
        opt json:bool=false, desc:"Print one JSON object per entry.";
        opt verbose:bool=false, desc:"Log debug output to stderr.";
        param directory_path:String, desc:"Directory to list";
    }.parse_or_exit();

    init_logging(args.verbose);

    let path = PathBuf::from(&args.directory_path);
    match list_directory(&path) {
        Ok(records) => match print_records(&records, args.json) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("dirinfo: {}", err);
                ExitCode::FAILURE
            },
        },
        Err(err) => {
            debug!(path = %err.path().display(), "listing failed");
            eprintln!("dirinfo: {}", err);
            ExitCode::FAILURE
        },
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_records(records: &[EntryRecord], json: bool) -> io::Result<()> {
    write_records(&mut io::stdout().lock(), records, json)
}

fn write_records<W: Write>(out: &mut W, records: &[EntryRecord], json: bool) -> io::Result<()> {
    for record in records {
        if json {
            writeln!(out, "{}", record.to_json_line()?)?;
        } else {
            writeln!(out, "{}", record)?;
        }
    }
    out.flush()
}
