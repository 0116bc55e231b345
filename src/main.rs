//! nullblk-scale CLI entry point

use anyhow::Result;
use nullblk_scale::command::SystemRunner;
use nullblk_scale::config::cli::Cli;
use nullblk_scale::config::Mode;
use nullblk_scale::sweep;
use std::io;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    cli.validate()?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut diag = stderr.lock();

    match cli.into_mode() {
        Mode::Replay(dir) => sweep::replay(&dir, &mut out, &mut diag),
        Mode::Live(config) => {
            sweep::run(&config, &SystemRunner, Path::new("."), &mut out, &mut diag)
        }
    }
}
