use crate::args::Cli;
use anyhow::{Context, Result};
use bytelens_codecs::select;
use bytelens_types::RunConfig;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};

pub fn run(cli: Cli) -> Result<()> {
    let codecs = select(&cli.enabled_codecs());
    let config = RunConfig::new(codecs, cli.width, cli.lines)?;

    let source: Box<dyn Read> = match &cli.file {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("cannot open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    bytelens_engine::run(&config, source, &mut out)?;
    out.flush()?;
    Ok(())
}
