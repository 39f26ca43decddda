use std::env;
use std::io;
use std::process::exit;

use anyhow::Result;
use splat_gen::{run, Sharp};

fn main() -> Result<()> {
    let code = run(env::args_os(), &Sharp, &mut io::stdout())?;
    exit(code)
}
