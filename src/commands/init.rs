//! Interactive configuration setup.
//!
//! Walks through the server, storage and sample-data sections and writes the
//! result to `config.json` in the data directory. With `--reset` the saved
//! file is replaced by defaults without prompting.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite the saved configuration with defaults
    #[arg(short, long)]
    reset: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let config = if init_args.reset { Config::default() } else { Config::init()? };
    config.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
