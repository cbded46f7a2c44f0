use std::io::{BufRead, BufWriter, Write};

use log::{info, warn};
use mpifilter_engine::FilterSet;
use mpifilter_record::{IdentityResolver, Record};
use mpifilter_runtime::READ_REPORT_BYTES;

use crate::StreamError;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StreamStats {
    pub lines_read: u64,
    pub lines_matched: u64,
    pub bytes_read: u64,
}

/// Copy every line of `reader` accepted by `filters` to `writer`,
/// byte for byte and in order.
pub fn filter_stream<B, W, R>(
    reader: B,
    writer: W,
    filters: &FilterSet<R>,
) -> Result<StreamStats, StreamError>
where
    B: BufRead,
    W: Write,
    R: IdentityResolver,
{
    filter_stream_with_report(reader, writer, filters, READ_REPORT_BYTES)
}

/// As [`filter_stream`], logging progress after each `report_every` bytes
/// of input (0 disables progress lines).
pub fn filter_stream_with_report<B, W, R>(
    mut reader: B,
    writer: W,
    filters: &FilterSet<R>,
    report_every: u64,
) -> Result<StreamStats, StreamError>
where
    B: BufRead,
    W: Write,
    R: IdentityResolver,
{
    if filters.is_empty() {
        warn!("no filters given; every record will be rejected");
    }

    let mut out = BufWriter::new(writer);
    let mut line = Vec::with_capacity(4096);
    let mut stats = StreamStats::default();
    let mut unreported = 0u64;

    loop {
        line.clear();
        let n = reader.read_until(b'\n', &mut line)? as u64;
        if n == 0 {
            break;
        }

        stats.lines_read += 1;
        stats.bytes_read += n;
        unreported += n;
        if report_every > 0 && unreported > report_every {
            unreported %= report_every;
            info!("Read {} lines of data", stats.lines_read);
        }

        let record = Record::decode(&line).map_err(|source| StreamError::Decode {
            line: stats.lines_read,
            source,
        })?;

        let keep = filters
            .matches(&record)
            .map_err(|source| StreamError::Filter {
                line: stats.lines_read,
                source,
            })?;

        if keep {
            out.write_all(&line)?;
            stats.lines_matched += 1;
        }
    }

    out.flush()?;
    info!(
        "Finished; read {} lines of data, {} matched",
        stats.lines_read, stats.lines_matched
    );

    Ok(stats)
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
