use protocol::messages::{TopologyRequest, TopologyResponse};

operation! {
    /// Queries the brokers and partition layout known to the gateway.
    Topology, TopologyCommand => topology(TopologyRequest) -> TopologyResponse
}

#[cfg(test)]
mod tests {
    use protocol::{
        messages::{TopologyRequest, TopologyResponse},
        BrokerInfo, Partition, PartitionBrokerRole,
    };
    use test_support::{eq_request, predicate, MockGatewayClient};

    use super::TopologyCommand;

    #[tokio::test]
    async fn topology_is_forwarded_unchanged() {
        let stub = TopologyResponse {
            brokers: vec![BrokerInfo {
                node_id: 0,
                host: "broker-0".to_string(),
                port: 26501,
                partitions: vec![Partition {
                    partition_id: 1,
                    role: PartitionBrokerRole::Leader,
                }],
            }],
            cluster_size: 1,
            partitions_count: 1,
            replication_factor: 1,
        };
        let expected = stub.clone();

        let mut client = MockGatewayClient::new();
        client
            .expect_topology()
            .with(predicate::always(), eq_request(TopologyRequest::default()))
            .times(1)
            .returning(move |_, _| Ok(stub.clone()));

        let response = TopologyCommand::new(&client).send().await.unwrap();
        assert_eq!(response, expected);
    }
}
