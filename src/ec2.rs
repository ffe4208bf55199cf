use async_trait::async_trait;
use aws_sdk_ec2::operation::describe_instances::DescribeInstancesOutput;
use aws_sdk_ec2::types;
use aws_sdk_ec2::Client as Ec2Client;

use crate::error::{map_sdk_error, Error, Result};
use crate::instance::{Instance, Reservation};
use crate::lister::InstanceSource;

const DESCRIBE_INSTANCES: &str = "DescribeInstances";

pub struct Ec2InstanceSource {
    client: Ec2Client,
}

impl Ec2InstanceSource {
    pub fn new(client: Ec2Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InstanceSource for Ec2InstanceSource {
    async fn describe_instances(&self) -> Result<Vec<Reservation>> {
        tracing::debug!("sending DescribeInstances");
        let resp = self
            .client
            .describe_instances()
            .send()
            .await
            .map_err(|error| map_sdk_error(DESCRIBE_INSTANCES, error))?;

        // Only the first page is listed.
        if resp.next_token().is_some() {
            tracing::warn!(
                "DescribeInstances returned a continuation token; later pages are not listed"
            );
        }

        reservations_from_output(&resp)
    }
}

/// Convert a whole response page, failing on the first instance missing a required field.
pub fn reservations_from_output(output: &DescribeInstancesOutput) -> Result<Vec<Reservation>> {
    output
        .reservations()
        .iter()
        .map(|reservation| {
            let instances = reservation
                .instances()
                .iter()
                .map(instance_from_sdk)
                .collect::<Result<Vec<_>>>()?;
            Ok(Reservation { instances })
        })
        .collect()
}

fn instance_from_sdk(inst: &types::Instance) -> Result<Instance> {
    let instance_id = inst
        .instance_id()
        .ok_or(Error::MalformedResponse { field: "InstanceId" })?
        .to_string();

    let state = inst
        .state()
        .and_then(|s| s.name())
        .map(|name| name.as_str().to_string())
        .ok_or(Error::MalformedResponse { field: "State.Name" })?;

    Ok(Instance {
        instance_id,
        state,
        public_ip: inst.public_ip_address().map(str::to_string),
    })
}
