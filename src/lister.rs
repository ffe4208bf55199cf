use std::io::Write;

use async_trait::async_trait;

use crate::error::Result;
use crate::instance::Reservation;

/// Where instance records come from. The AWS implementation is
/// [`Ec2InstanceSource`](crate::ec2::Ec2InstanceSource).
#[async_trait]
pub trait InstanceSource: Send + Sync {
    async fn describe_instances(&self) -> Result<Vec<Reservation>>;
}

/// Fetch once, then write one line per instance in response order.
///
/// Nothing is written unless the fetch succeeds. Returns the number of lines written.
pub async fn list_instances<W: Write>(
    source: &dyn InstanceSource,
    out: &mut W,
) -> Result<usize> {
    let reservations = source.describe_instances().await?;
    tracing::debug!(reservations = reservations.len(), "received reservations");

    let mut written = 0;
    for instance in reservations.iter().flat_map(|r| &r.instances) {
        writeln!(out, "{instance}")?;
        written += 1;
    }
    out.flush()?;

    Ok(written)
}
