use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use log::error;
use mpifilter_engine::FilterSet;
use mpifilter_record::{CachedIdentity, SystemIdentity};
use mpifilter_stream::{Source, filter_stream};

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// mpistat data, gzip-compressed. Uncompressed stdin when omitted or `-`.
    #[arg(value_name = "MPISTAT_DATA")]
    pub mpistat: Option<PathBuf>,

    /// Keep records at or below DIR.
    ///
    /// Example:
    ///   mpifilter data.gz --directory /lustre/scratch118 /nfs/users
    #[arg(long, value_name = "DIR", num_args = 1..)]
    pub directory: Vec<String>,

    /// Keep records owned by USER, GROUP, or both; ids or names.
    ///
    /// Example:
    ///   mpifilter data.gz --owner alice: :hgi 1000:1000
    #[arg(long, value_name = "USER:GROUP", num_args = 1..)]
    pub owner: Vec<String>,
}

pub fn run(args: FilterArgs) -> ExitCode {
    match execute(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The logger always lets errors through, whatever the level.
            error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

fn execute(args: FilterArgs) -> Result<()> {
    let ids = CachedIdentity::new(SystemIdentity);
    let filters = FilterSet::from_args(&args.directory, &args.owner, ids)
        .context("invalid filter arguments")?;

    let source = Source::from_arg(args.mpistat.as_deref());
    let reader = source.open()?;

    filter_stream(reader, io::stdout().lock(), &filters)
        .with_context(|| format!("failed to filter {source}"))?;

    Ok(())
}
