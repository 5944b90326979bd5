//! 测试用内存后端与提示记录器

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Mutex;
use toeic_admin::error::{AppError, AppResult};
use toeic_admin::models::{ItemId, PartItem, PartKey, TestDetail};
use toeic_admin::services::{Notifier, PartBackend};

/// 后端收到的调用
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Fetch,
    Swap(PartKey, ItemId, ItemId),
    Delete(PartKey, ItemId),
    Create(PartKey, Value),
    Update(PartKey, ItemId, Value),
}

#[derive(Default)]
struct FakeState {
    test: TestDetail,
    calls: Vec<Call>,
    fail_fetch: bool,
    /// 第 N 次交换（从 0 开始）返回错误
    fail_swap_at: Option<usize>,
    hang_swaps: bool,
    fail_delete: HashSet<ItemId>,
    fail_mutations: bool,
    swaps_seen: usize,
    next_id: i64,
}

/// 内存中的有序集合后端
///
/// 交换会同时交换位置和题号，使题号始终按位置递增
pub struct FakeBackend {
    state: Mutex<FakeState>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeState {
                next_id: 1000,
                ..FakeState::default()
            }),
        }
    }

    /// 某个 Part 中放入编号为 `ids` 的题目，题号从官方起始题号开始
    pub fn with_part(self, part: PartKey, ids: &[i64]) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let first = *part.question_range().start();
            *state.test.part_mut(part) = ids
                .iter()
                .enumerate()
                .map(|(i, &id)| PartItem::new(id, Some(first + i as i64)))
                .collect();
        }
        self
    }

    /// 直接使用后端原始 JSON 作为某个 Part 的条目
    pub fn with_raw_part(self, part: PartKey, raw: Value) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            *state.test.part_mut(part) = serde_json::from_value(raw).unwrap();
        }
        self
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        self.state.lock().unwrap().fail_fetch = fail;
    }

    pub fn fail_swap_at(&self, step: usize) {
        self.state.lock().unwrap().fail_swap_at = Some(step);
    }

    pub fn set_hang_swaps(&self, hang: bool) {
        self.state.lock().unwrap().hang_swaps = hang;
    }

    pub fn fail_delete_of(&self, id: impl Into<ItemId>) {
        self.state.lock().unwrap().fail_delete.insert(id.into());
    }

    pub fn set_fail_mutations(&self, fail: bool) {
        self.state.lock().unwrap().fail_mutations = fail;
    }

    /// 服务端当前顺序
    pub fn order(&self, part: PartKey) -> Vec<ItemId> {
        let state = self.state.lock().unwrap();
        state.test.part(part).iter().map(|item| item.id.clone()).collect()
    }

    pub fn question_numbers(&self, part: PartKey) -> Vec<Option<i64>> {
        let state = self.state.lock().unwrap();
        state.test.part(part).iter().map(|item| item.question_no).collect()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.count(|c| matches!(c, Call::Fetch))
    }

    pub fn swap_calls(&self) -> Vec<(ItemId, ItemId)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Swap(_, a, b) => Some((a, b)),
                _ => None,
            })
            .collect()
    }

    pub fn delete_count(&self) -> usize {
        self.count(|c| matches!(c, Call::Delete(..)))
    }

    /// 除拉取以外的调用数
    pub fn mutation_count(&self) -> usize {
        self.count(|c| !matches!(c, Call::Fetch))
    }

    fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.state.lock().unwrap().calls.iter().filter(|c| pred(c)).count()
    }
}

fn rejected(what: &str) -> AppError {
    AppError::Other(format!("{} rejected by fake backend", what))
}

#[async_trait]
impl PartBackend for FakeBackend {
    async fn fetch_test(&self, _test_id: &ItemId) -> AppResult<TestDetail> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Fetch);
        if state.fail_fetch {
            return Err(rejected("fetch"));
        }
        Ok(state.test.clone())
    }

    async fn swap_adjacent(&self, part: PartKey, first: &ItemId, second: &ItemId) -> AppResult<()> {
        let hang = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(Call::Swap(part, first.clone(), second.clone()));
            let step = state.swaps_seen;
            state.swaps_seen += 1;

            if state.fail_swap_at == Some(step) {
                return Err(rejected("swap"));
            }
            if !state.hang_swaps {
                let items = state.test.part_mut(part);
                let a = items.iter().position(|x| &x.id == first);
                let b = items.iter().position(|x| &x.id == second);
                match (a, b) {
                    (Some(a), Some(b)) => {
                        items.swap(a, b);
                        let qa = items[a].question_no;
                        items[a].question_no = items[b].question_no;
                        items[b].question_no = qa;
                    }
                    _ => return Err(rejected("swap of unknown item")),
                }
            }
            state.hang_swaps
        };

        if hang {
            std::future::pending::<()>().await;
        }
        Ok(())
    }

    async fn delete_item(&self, part: PartKey, id: &ItemId) -> AppResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Delete(part, id.clone()));
        if state.fail_delete.contains(id) {
            return Err(rejected("delete"));
        }
        state.test.part_mut(part).retain(|x| &x.id != id);
        Ok(())
    }

    async fn create_item(&self, _test_id: &ItemId, part: PartKey, body: &Value) -> AppResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Create(part, body.clone()));
        if state.fail_mutations {
            return Err(rejected("create"));
        }
        let id = state.next_id;
        state.next_id += 1;
        let question_no = body.get("questionNo").and_then(Value::as_i64);
        state.test.part_mut(part).push(PartItem::new(id, question_no));
        Ok(())
    }

    async fn update_item(&self, part: PartKey, id: &ItemId, body: &Value) -> AppResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Update(part, id.clone(), body.clone()));
        if state.fail_mutations {
            return Err(rejected("update"));
        }
        Ok(())
    }
}

/// 记录所有提示
#[derive(Default)]
pub struct RecordingNotifier {
    successes: Mutex<Vec<String>>,
    failures: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }

    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn failure(&self, message: &str) {
        self.failures.lock().unwrap().push(message.to_string());
    }
}

pub fn ids(raw: &[i64]) -> Vec<ItemId> {
    raw.iter().map(|&n| ItemId::Number(n)).collect()
}
