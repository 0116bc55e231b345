//! Result table output
//!
//! Tab-separated rows, one per job count. The header goes to the
//! diagnostic stream and the data rows to the primary stream, so
//! `nullblk-scale > results.tsv` captures clean data while progress stays
//! on the terminal. Every line is flushed as soon as it is written to
//! support live monitoring through a pipe.

use crate::stats::AggregateStats;
use std::io::{self, Write};

/// Write the column header
pub fn write_header<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "JOBS\tTOTAL IOPS\tMIN IOPS\tMAX IOPS\tMEAN IOPS\tIOPS STDEV\tMERGES"
    )?;
    writer.flush()
}

/// Write one data row
pub fn write_row<W: Write>(writer: &mut W, stats: &AggregateStats) -> io::Result<()> {
    writeln!(
        writer,
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        stats.num_jobs,
        stats.total_iops,
        stats.min_iops,
        stats.max_iops,
        stats.mean_iops,
        stats.iops_stdev,
        stats.merges
    )?;
    writer.flush()
}
