use clap::Parser;
use ec2ls::config::configure_aws;
use ec2ls::ec2::Ec2InstanceSource;
use ec2ls::list_instances;
use ec2ls::logging::init_logging;

#[derive(Parser)]
#[command(name = "ec2ls", version)]
#[command(about = "List EC2 instances with their state and public IP", long_about = None)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let _cli = Cli::parse();

    let config = configure_aws().await;
    tracing::debug!(region = ?config.region(), "loaded AWS config");

    let source = Ec2InstanceSource::new(aws_sdk_ec2::Client::new(&config));
    let mut stdout = std::io::stdout().lock();
    let count = list_instances(&source, &mut stdout).await?;
    tracing::debug!(count, "listed instances");

    Ok(())
}
