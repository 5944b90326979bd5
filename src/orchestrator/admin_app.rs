//! 管理后台应用 - 编排层
//!
//! 负责初始化客户端、通知器和会话日志，并把每条子命令分派到
//! `TestBoard`（七个 Part 的编辑）或直接分派到客户端接口（试卷、用户、词汇、提交记录）。

use crate::cli::{Command, TestsCommand, UsersCommand, VocabCommand};
use crate::clients::ElearningClient;
use crate::config::Config;
use crate::models::{ItemId, PartKey};
use crate::services::{Notifier, PartBackend, TracingNotifier};
use crate::utils::logging::{init_log_file, log_board, log_part, log_startup, truncate_text};
use crate::utils::load_json_payload;
use crate::workflow::{BulkDeleteOutcome, MutationOutcome, ReorderOutcome, TestBoard};
use anyhow::{bail, Context, Result};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    client: Arc<ElearningClient>,
    notifier: Arc<dyn Notifier>,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        let notifier: Arc<dyn Notifier> = match &config.output_log_file {
            Some(path) => {
                init_log_file(path).with_context(|| format!("无法创建日志文件: {}", path))?;
                Arc::new(TracingNotifier::with_log_file(path.clone()))
            }
            None => Arc::new(TracingNotifier::new()),
        };

        log_startup(&config);

        let client = Arc::new(ElearningClient::new(&config).context("无法创建 HTTP 客户端")?);

        Ok(Self {
            config,
            client,
            notifier,
        })
    }

    /// 执行一条子命令
    pub async fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Show { test } => {
                let board = self.open_board(test).await?;
                log_board(&board, &self.config.storage_base_url);
            }
            Command::Move {
                test,
                part,
                from,
                to,
            } => self.move_item(test, part, from, to).await?,
            Command::Delete { test, part, ids } => self.delete_items(test, part, &ids).await?,
            Command::Clear { test, part } => {
                let mut board = self.open_board(test).await?;
                board.select_all(part);
                self.finish_delete(&mut board, part).await?;
            }
            Command::Add { test, part, file } => self.add_item(test, part, &file).await?,
            Command::Update {
                test,
                part,
                id,
                file,
            } => {
                let body = load_json_payload(&file).await?;
                let mut board = self.open_board(test).await?;
                let outcome = board.update_item(part, &id, &body).await;
                self.finish_mutation(&board, part, outcome)?;
            }
            Command::Template { test, part } => {
                let board = self.open_board(test).await?;
                println!("{}", serde_json::to_string_pretty(&board.blank_form(part))?);
            }
            Command::Tests(cmd) => self.run_tests(cmd).await?,
            Command::Users(cmd) => self.run_users(cmd).await?,
            Command::Vocab(cmd) => self.run_vocab(cmd).await?,
            Command::Submissions { page, size } => {
                let page_data = self.client.list_submissions(page, size).await?;
                info!("📄 提交记录 {} 条（共 {} 条）", page_data.items.len(), page_data.total);
                for attempt in &page_data.items {
                    info!(
                        "  #{} {} | {} | 分数 {}",
                        attempt.id,
                        attempt.username.as_deref().unwrap_or("-"),
                        attempt.test_name.as_deref().unwrap_or("-"),
                        attempt
                            .score
                            .map(|s| s.to_string())
                            .unwrap_or_else(|| "-".to_string())
                    );
                }
            }
            Command::Attempt { id } => {
                let details = self.client.attempt_details(&id).await?;
                println!("{}", serde_json::to_string_pretty(&details)?);
            }
            Command::Stats => {
                let stats = self.client.dashboard_stats().await?;
                println!("{}", serde_json::to_string_pretty(&stats)?);
            }
        }
        Ok(())
    }

    // ========== 试卷看板 ==========

    /// 拉取试卷；加载失败直接返回错误
    async fn open_board(&self, test_id: ItemId) -> Result<TestBoard> {
        let backend: Arc<dyn PartBackend> = self.client.clone();
        let board = TestBoard::load(backend, self.notifier.clone(), test_id).await;
        if let Some(reason) = board.load_error() {
            bail!("试卷 {} 加载失败: {}", board.test_id(), reason);
        }
        Ok(board)
    }

    async fn move_item(&self, test: ItemId, part: PartKey, from: usize, to: usize) -> Result<()> {
        let mut board = self.open_board(test).await?;
        match board.reorder(part, from, to).await {
            ReorderOutcome::Unchanged => info!("位置未变，无需交换"),
            ReorderOutcome::Applied { swaps } => {
                info!("✓ 排序完成，共 {} 次交换", swaps);
                log_part(&board, part, &self.config.storage_base_url);
            }
            ReorderOutcome::Reverted { completed, total } => {
                log_part(&board, part, &self.config.storage_base_url);
                bail!("排序未完成：{}/{} 次交换成功，已显示服务器当前顺序", completed, total);
            }
            ReorderOutcome::Rejected(e) => bail!(e),
        }
        Ok(())
    }

    async fn delete_items(&self, test: ItemId, part: PartKey, ids: &[ItemId]) -> Result<()> {
        let mut board = self.open_board(test).await?;
        for id in ids {
            if !board.select_item(part, id) {
                warn!("⚠️ [{}] 中没有条目 {}，已跳过", part.route(), id);
            }
        }
        self.finish_delete(&mut board, part).await
    }

    async fn finish_delete(&self, board: &mut TestBoard, part: PartKey) -> Result<()> {
        match board.bulk_delete(part).await {
            BulkDeleteOutcome::NothingSelected => warn!("⚠️ 没有选中任何条目"),
            BulkDeleteOutcome::Deleted { count } => {
                info!("✓ 已删除 {} 个条目", count);
                log_part(board, part, &self.config.storage_base_url);
            }
            BulkDeleteOutcome::Failed { deleted, failed } => {
                log_part(board, part, &self.config.storage_base_url);
                bail!("批量删除失败：成功 {}，失败 {}", deleted, failed);
            }
            BulkDeleteOutcome::Rejected(e) => bail!(e),
        }
        Ok(())
    }

    /// 新增题目；表单里没有题号时填入建议题号
    async fn add_item(&self, test: ItemId, part: PartKey, file: &Path) -> Result<()> {
        let mut body = load_json_payload(file).await?;
        let mut board = self.open_board(test).await?;

        let has_number = body
            .get("questionNo")
            .and_then(Value::as_i64)
            .map_or(false, |n| n > 0);
        if !has_number {
            let suggested = board.suggested_question_no(part);
            info!("📝 未指定题号，使用建议题号 {}", suggested);
            body["questionNo"] = json!(suggested);
        }

        let outcome = board.add_item(part, &body).await;
        self.finish_mutation(&board, part, outcome)
    }

    fn finish_mutation(&self, board: &TestBoard, part: PartKey, outcome: MutationOutcome) -> Result<()> {
        match outcome {
            MutationOutcome::Saved => {
                log_part(board, part, &self.config.storage_base_url);
                Ok(())
            }
            MutationOutcome::Failed => bail!("[{}] 保存失败", part.route()),
            MutationOutcome::Rejected(e) => bail!(e),
        }
    }

    // ========== 试卷 / 用户 / 词汇 ==========

    async fn run_tests(&self, cmd: TestsCommand) -> Result<()> {
        match cmd {
            TestsCommand::List {
                page,
                size,
                keyword,
            } => {
                let page_data = self.client.list_tests(page, size, &keyword).await?;
                info!("📄 试卷 {} 份（共 {} 份）", page_data.items.len(), page_data.total);
                for test in &page_data.items {
                    let id = test
                        .id
                        .as_ref()
                        .map(ToString::to_string)
                        .unwrap_or_else(|| "?".to_string());
                    info!(
                        "  #{} {} | {} 分钟 | {} 人参加",
                        id,
                        test.test_name,
                        test.timer_in_minutes.unwrap_or_default(),
                        test.num_of_participants.unwrap_or_default()
                    );
                }
            }
            TestsCommand::Create { file } => {
                let body = load_json_payload(&file).await?;
                let created = self.client.create_test(&body).await?;
                self.notifier.success("已创建试卷");
                if let Some(created) = created {
                    println!("{}", serde_json::to_string_pretty(&created)?);
                }
            }
            TestsCommand::Update { id, file } => {
                let body = load_json_payload(&file).await?;
                self.client.update_test(&id, &body).await?;
                self.notifier.success(&format!("已更新试卷 {}", id));
            }
            TestsCommand::Delete { id } => {
                self.client.delete_test(&id).await?;
                self.notifier.success(&format!("已删除试卷 {}", id));
            }
        }
        Ok(())
    }

    async fn run_users(&self, cmd: UsersCommand) -> Result<()> {
        match cmd {
            UsersCommand::List {
                page,
                size,
                keyword,
            } => {
                let page_data = self.client.list_users(page, size, &keyword).await?;
                info!("👥 用户 {} 个（共 {} 个）", page_data.items.len(), page_data.total);
                for user in &page_data.items {
                    info!(
                        "  #{} {} | {} | {}",
                        user.id,
                        user.display_name(),
                        user.roles.as_deref().unwrap_or("-"),
                        if user.is_enabled() { "启用" } else { "禁用" }
                    );
                }
            }
            UsersCommand::Enable { id } => {
                self.client.set_user_enabled(&id, true).await?;
                self.notifier.success(&format!("已启用用户 {}", id));
            }
            UsersCommand::Disable { id } => {
                self.client.set_user_enabled(&id, false).await?;
                self.notifier.success(&format!("已禁用用户 {}", id));
            }
            UsersCommand::Role { id, role } => {
                self.client.set_user_role(&id, &role).await?;
                self.notifier.success(&format!("用户 {} 角色已改为 {}", id, role));
            }
        }
        Ok(())
    }

    async fn run_vocab(&self, cmd: VocabCommand) -> Result<()> {
        match cmd {
            VocabCommand::List => {
                let categories = self.client.list_categories().await?;
                info!("📚 词汇分类 {} 个", categories.len());
                for category in &categories {
                    info!(
                        "  #{} {} | {}",
                        category.id,
                        category.name,
                        truncate_text(category.description.as_deref().unwrap_or(""), 40)
                    );
                }
            }
            VocabCommand::Show { id } => {
                let category = self.client.category_details(&id).await?;
                info!("📚 {}（{} 个单词）", category.name, category.words.len());
                for word in &category.words {
                    info!(
                        "  #{} {} - {}",
                        word.id,
                        word.word,
                        word.meaning.as_deref().unwrap_or("")
                    );
                }
            }
            VocabCommand::Create { file } => {
                let body = load_json_payload(&file).await?;
                self.client.create_category(&body).await?;
                self.notifier.success("已创建词汇分类");
            }
            VocabCommand::Update { id, file } => {
                let body = load_json_payload(&file).await?;
                self.client.update_category(&id, &body).await?;
                self.notifier.success(&format!("已更新词汇分类 {}", id));
            }
            VocabCommand::Delete { id } => {
                self.client.delete_category(&id).await?;
                self.notifier.success(&format!("已删除词汇分类 {}", id));
            }
            VocabCommand::AddWord { category, file } => {
                let body = load_json_payload(&file).await?;
                self.client.add_word(&category, &body).await?;
                self.notifier.success(&format!("已向分类 {} 添加单词", category));
            }
            VocabCommand::UpdateWord { id, file } => {
                let body = load_json_payload(&file).await?;
                self.client.update_word(&id, &body).await?;
                self.notifier.success(&format!("已更新单词 {}", id));
            }
            VocabCommand::DeleteWord { id } => {
                self.client.delete_word(&id).await?;
                self.notifier.success(&format!("已删除单词 {}", id));
            }
        }
        Ok(())
    }
}
