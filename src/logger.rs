use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Installs a compact `g LEVEL - message` logger at `level`.
/// Returns `false` if a logger was already installed.
pub fn build_logger_for_level(level: LevelFilter) -> bool {
    let mut builder = Builder::from_default_env();
    builder
        .format(|buf, record| writeln!(buf, "g {} - {}", record.level(), record.args()))
        .filter(None, level)
        .try_init()
        .is_ok()
}

/// Same as [`build_logger_for_level`], level taken from `RUST_LOG`.
pub fn build_logger() -> bool {
    let mut builder = Builder::from_default_env();
    builder
        .format(|buf, record| writeln!(buf, "g {} - {}", record.level(), record.args()))
        .try_init()
        .is_ok()
}
