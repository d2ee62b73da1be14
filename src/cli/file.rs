//! `do-what-it-says`: load the next command from the command file.

use tracing::{info, instrument};

use super::Command;
use crate::{
    config::Settings,
    data::command_file,
    error::{LiriError, Result},
};

/// Read the command file and return the argument list to dispatch.
#[instrument(skip(settings), fields(path = %settings.command_file.display()))]
pub async fn run(settings: &Settings) -> Result<Vec<String>> {
    let args = command_file::read_command_file(&settings.command_file).await?;
    if args[0] == Command::DO_WHAT_IT_SAYS {
        return Err(LiriError::NestedFileDispatch);
    }
    info!(command = %args[0], "running command from file");
    Ok(args)
}
