pub mod command;
pub mod parse;

use crate::{
    cli::{command::execute_command, parse::{build_cli, parse_command}},
    debug_log, image,
};

pub fn run() -> image::Result<()> {
    let matches = build_cli().get_matches();
    let cmd = parse_command(&matches);
    debug_log!("command: {:?}", cmd);

    execute_command(&cmd)
}
