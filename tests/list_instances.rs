use async_trait::async_trait;
use ec2ls::{list_instances, Error, Instance, InstanceSource, Reservation, Result};

struct FakeSource(Vec<Reservation>);

#[async_trait]
impl InstanceSource for FakeSource {
    async fn describe_instances(&self) -> Result<Vec<Reservation>> {
        Ok(self.0.clone())
    }
}

struct DeniedSource;

#[async_trait]
impl InstanceSource for DeniedSource {
    async fn describe_instances(&self) -> Result<Vec<Reservation>> {
        Err(Error::Authorization {
            operation: "DescribeInstances".to_string(),
            detail: "You are not authorized to perform this operation.".to_string(),
        })
    }
}

fn instance(id: &str, state: &str, ip: Option<&str>) -> Instance {
    Instance {
        instance_id: id.to_string(),
        state: state.to_string(),
        public_ip: ip.map(str::to_string),
    }
}

async fn render(source: &dyn InstanceSource) -> (Result<usize>, String) {
    let mut out = Vec::new();
    let result = list_instances(source, &mut out).await;
    (result, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_fixture_output() {
    let source = FakeSource(vec![Reservation {
        instances: vec![
            instance("i-1", "running", Some("1.2.3.4")),
            instance("i-2", "stopped", None),
        ],
    }]);

    let (result, text) = render(&source).await;

    assert_eq!(result.unwrap(), 2);
    assert_eq!(
        text,
        "Instance ID: i-1, State: running, Public IP: 1.2.3.4\n\
         Instance ID: i-2, State: stopped, Public IP: N/A\n"
    );
}

#[tokio::test]
async fn test_line_count_matches_total_instances() {
    let source = FakeSource(vec![
        Reservation {
            instances: vec![instance("i-a", "running", Some("203.0.113.5"))],
        },
        Reservation {
            instances: vec![
                instance("i-b", "pending", None),
                instance("i-c", "terminated", None),
            ],
        },
        Reservation::default(),
    ]);

    let (result, text) = render(&source).await;

    assert_eq!(result.unwrap(), 3);
    assert_eq!(text.lines().count(), 3);
    assert!(text.lines().nth(1).unwrap().starts_with("Instance ID: i-b,"));
    assert!(text.lines().nth(2).unwrap().starts_with("Instance ID: i-c,"));
}

#[tokio::test]
async fn test_empty_response_prints_nothing() {
    let (result, text) = render(&FakeSource(Vec::new())).await;

    assert_eq!(result.unwrap(), 0);
    assert!(text.is_empty());
}

#[tokio::test]
async fn test_provider_error_is_surfaced() {
    let (result, text) = render(&DeniedSource).await;

    let error = result.unwrap_err();
    assert!(matches!(error, Error::Authorization { .. }));
    assert!(error.to_string().starts_with("authorization denied for DescribeInstances"));
    assert!(text.is_empty());
}
