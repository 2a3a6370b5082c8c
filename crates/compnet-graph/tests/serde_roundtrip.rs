use compnet_graph::NetworkConfig;

#[test]
fn network_config_round_trip_json() {
    let config = NetworkConfig {
        min_group_size: 3,
        ..NetworkConfig::permissive()
    };
    let json = serde_json::to_string_pretty(&config).expect("serialize");
    let decoded: NetworkConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, config);
}

#[test]
fn default_config_reads_from_json() {
    let json = r#"{"min_group_size":2,"allow_negative_weights":false,"allow_duplicate_members":true}"#;
    let decoded: NetworkConfig = serde_json::from_str(json).expect("deserialize");
    assert_eq!(decoded, NetworkConfig::default());
}
