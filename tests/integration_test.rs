//! 需要本地后端的集成测试
//!
//! 默认忽略，需要手动运行：`ELEARNING_TOKEN=... ELEARNING_TEST_ID=... cargo test -- --ignored`

use std::sync::Arc;
use toeic_admin::models::{ItemId, PartKey};
use toeic_admin::services::TracingNotifier;
use toeic_admin::utils::logging;
use toeic_admin::workflow::{ReorderOutcome, TestBoard};
use toeic_admin::{Config, ElearningClient};

fn live_test_id() -> ItemId {
    std::env::var("ELEARNING_TEST_ID")
        .unwrap_or_else(|_| "1".to_string())
        .parse()
        .unwrap_or_else(|never| match never {})
}

#[tokio::test]
#[ignore]
async fn test_list_tests() {
    logging::init(true);

    let config = Config::from_env();
    let client = ElearningClient::new(&config).expect("创建客户端失败");

    let page = client.list_tests(0, 5, "").await.expect("获取试卷列表失败");
    assert!(page.items.len() <= 5);
}

#[tokio::test]
#[ignore]
async fn test_load_board() {
    logging::init(true);

    let config = Config::from_env();
    let client = Arc::new(ElearningClient::new(&config).expect("创建客户端失败"));
    let board = TestBoard::load(client, Arc::new(TracingNotifier::new()), live_test_id()).await;

    assert!(board.is_loaded(), "试卷应该能够成功加载: {:?}", board.load_error());
    logging::log_board(&board, &config.storage_base_url);
}

#[tokio::test]
#[ignore]
async fn test_move_and_move_back() {
    logging::init(true);

    let config = Config::from_env();
    let client = Arc::new(ElearningClient::new(&config).expect("创建客户端失败"));
    let mut board = TestBoard::load(client, Arc::new(TracingNotifier::new()), live_test_id()).await;

    let part = PartKey::Five;
    let before: Vec<ItemId> = board.list(part).ids().cloned().collect();
    if before.len() < 2 {
        return;
    }

    let last = before.len() - 1;
    assert!(matches!(board.reorder(part, 0, last).await, ReorderOutcome::Applied { .. }));
    assert!(matches!(board.reorder(part, last, 0).await, ReorderOutcome::Applied { .. }));

    let after: Vec<ItemId> = board.list(part).ids().cloned().collect();
    assert_eq!(before, after, "来回移动后顺序应该复原");
}
