//! 多选状态（每个 Part 一份）

use crate::models::{DisplayList, ItemId};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<ItemId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 切换单个条目的选中状态，返回切换后是否选中
    pub fn toggle(&mut self, id: &ItemId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    /// 选中单个条目（已选中时保持不变），返回是否新加入
    pub fn select(&mut self, id: &ItemId) -> bool {
        self.ids.insert(id.clone())
    }

    /// 全选 / 全不选
    ///
    /// 已经全选时清空，否则选中列表中的全部条目
    pub fn select_all(&mut self, list: &DisplayList) {
        if self.is_all_selected(list) {
            self.ids.clear();
        } else {
            self.ids = list.ids().cloned().collect();
        }
    }

    pub fn is_all_selected(&self, list: &DisplayList) -> bool {
        self.ids.len() == list.len() && list.ids().all(|id| self.ids.contains(id))
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.ids.iter().cloned().collect()
    }

    /// 只保留仍然存在于列表中的条目（重新拉取后调用）
    pub fn retain_present(&mut self, list: &DisplayList) {
        self.ids.retain(|id| list.contains(id));
    }
}
