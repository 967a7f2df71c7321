use clap::Parser;

/// The session is driven entirely through stdin; there are no options beyond
/// `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(name = "todoz", version)]
#[command(about = "Interactive TODO list stored as one file per task in ./todos", long_about = None)]
pub struct Cli {}
