mod common;

use std::sync::Arc;
use std::sync::atomic::Ordering;
use backend_connectors::common::enums::connector_error::ConnectorError;
use backend_connectors::relational::enums::query_param::QueryParam;

#[tokio::test]
async fn test_relational_new_does_not_connect() {
    let (connector, probe) = common::relational_connector();
    assert!(!connector.is_connected());
    assert!(connector.pool().is_none());
    assert_eq!(probe.creates.load(Ordering::SeqCst), 0, "Construction must not dial");
}

#[tokio::test]
async fn test_relational_connect_twice_reuses_pool() {
    let (connector, probe) = common::relational_connector();
    let first = connector.connect().await.expect("first connect");
    let second = connector.connect().await.expect("second connect");

    assert!(Arc::ptr_eq(&first, &second), "Pool should be reused");
    assert_eq!(probe.creates.load(Ordering::SeqCst), 1);
    assert!(connector.is_connected());
}

#[tokio::test]
async fn test_relational_racing_first_connects_keep_one_pool() {
    let (connector, probe) = common::relational_connector();
    let (first, second) = tokio::join!(connector.connect(), connector.connect());
    let first = first.expect("first connect");
    let second = second.expect("second connect");

    assert!(Arc::ptr_eq(&first, &second), "Both callers should end up with the stored pool");
    assert_eq!(probe.creates.load(Ordering::SeqCst), 2);
    assert_eq!(probe.closes.load(Ordering::SeqCst), 1, "The losing pool is closed");
    assert!(!first.closed.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_relational_query_connects_on_demand() {
    let (connector, probe) = common::relational_connector();
    let rows = connector
        .query("SELECT * FROM hits WHERE path = $1 AND status = $2", &[QueryParam::from("/health"), QueryParam::from(200)])
        .await
        .expect("query");

    assert_eq!(rows, vec![String::from("pool-1:SELECT * FROM hits WHERE path = $1 AND status = $2")]);
    assert!(connector.is_connected());
    let executed = probe.executed.lock();
    assert_eq!(executed.len(), 1);
    assert_eq!(executed[0].1, vec![QueryParam::Text(String::from("/health")), QueryParam::Int(200)]);
}

#[tokio::test]
async fn test_relational_query_error_keeps_pool() {
    let (connector, probe) = common::relational_connector();
    connector.connect().await.expect("connect");
    probe.fail_query.store(true, Ordering::SeqCst);

    let result = connector.query("SELEC 1", &[]).await;
    assert!(matches!(result, Err(ConnectorError::QueryError(_))), "got {:?}", result);
    assert!(connector.is_connected(), "A failing statement must not drop the pool");
    assert_eq!(probe.creates.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_relational_failed_handshake_retries_next_call() {
    let (connector, probe) = common::relational_connector();
    probe.fail_connect.store(true, Ordering::SeqCst);

    let result = connector.connect().await;
    assert!(matches!(result, Err(ConnectorError::ConnectionError(_))));
    assert!(!connector.is_connected());

    let result = connector.query("SELECT 1", &[]).await;
    assert!(matches!(result, Err(ConnectorError::ConnectionError(_))), "Query surfaces the connect failure");
    assert!(probe.executed.lock().is_empty());

    probe.fail_connect.store(false, Ordering::SeqCst);
    connector.connect().await.expect("retry");
    assert_eq!(probe.creates.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_relational_disconnect() {
    let (connector, probe) = common::relational_connector();
    assert_eq!(connector.disconnect().await, Ok(()), "Disconnect while idle is a no-op");
    assert_eq!(probe.closes.load(Ordering::SeqCst), 0);

    let pool = connector.connect().await.expect("connect");
    connector.disconnect().await.expect("disconnect");
    assert!(pool.closed.load(Ordering::SeqCst));
    assert!(!connector.is_connected());
    assert_eq!(connector.disconnect().await, Ok(()));
    assert_eq!(probe.closes.load(Ordering::SeqCst), 1);

    connector.connect().await.expect("reconnect");
    assert_eq!(probe.creates.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_relational_disconnect_failure_clears_pool() {
    let (connector, probe) = common::relational_connector();
    connector.connect().await.expect("connect");
    probe.fail_close.store(true, Ordering::SeqCst);

    let result = connector.disconnect().await;
    assert!(matches!(result, Err(ConnectorError::DisconnectionError(_))));
    assert!(!connector.is_connected());
}

#[tokio::test]
async fn test_relational_test_connection() {
    let (connector, probe) = common::relational_connector();
    let now = connector.test_connection().await.expect("test connection");
    assert_eq!(now, "2026-10-18 12:00:00+00");
    assert!(connector.is_connected());

    probe.fail_ping.store(true, Ordering::SeqCst);
    assert!(connector.test_connection().await.is_err());
    assert!(connector.is_connected(), "A failed liveness check does not drop the pool");
}
