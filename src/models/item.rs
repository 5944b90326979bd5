//! 有序集合中的条目

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// 条目 ID
///
/// 后端可能返回数字或字符串；纯数字的字符串（例如 `"42"`）统一规范为 `Number`，
/// 保证服务端返回的 ID 与命令行输入的 ID 比较结果一致
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl ItemId {
    /// 规范化字符串形式的 ID
    ///
    /// 只有能原样往返的整数才按数字处理，`"007"` 这类仍保留为字符串
    pub fn canonical(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(n) if n.to_string() == trimmed => ItemId::Number(n),
            _ => ItemId::Text(trimmed.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => ItemId::Number(n),
            RawId::Text(s) => ItemId::canonical(&s),
        })
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        ItemId::Number(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::canonical(s)
    }
}

impl FromStr for ItemId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ItemId::canonical(s))
    }
}

/// 有稳定 ID 的条目，排序算法只依赖这一点
pub trait OrderedItem {
    fn item_id(&self) -> &ItemId;
}

impl OrderedItem for ItemId {
    fn item_id(&self) -> &ItemId {
        self
    }
}

/// Part 中的一道题（或一个题组）
///
/// 只解析排序和题号相关的字段，其余字段保留在 `extra` 中
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartItem {
    pub id: ItemId,
    /// 服务端分配的题号，交换后由服务端重新计算
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_no: Option<i64>,
    /// 题组下的小题（Part 3/4/6/7）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub question_list: Vec<PartItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OrderedItem for PartItem {
    fn item_id(&self) -> &ItemId {
        &self.id
    }
}

impl PartItem {
    pub fn new(id: impl Into<ItemId>, question_no: Option<i64>) -> Self {
        Self {
            id: id.into(),
            question_no,
            question_list: Vec::new(),
            extra: Map::new(),
        }
    }

    /// 本条目（含小题）中最大的题号
    pub fn max_question_no(&self) -> Option<i64> {
        self.question_list
            .iter()
            .filter_map(PartItem::max_question_no)
            .chain(self.question_no)
            .max()
    }

    /// 题号标签：单题为 `Q5`，题组为 `Q32-34`
    pub fn label(&self) -> String {
        let first = self.question_list.first().and_then(|q| q.question_no);
        let last = self.question_list.last().and_then(|q| q.question_no);
        match (first, last, self.question_no) {
            (Some(a), Some(b), _) if a != b => format!("Q{}-{}", a, b),
            (Some(a), _, _) => format!("Q{}", a),
            (None, _, Some(n)) => format!("Q{}", n),
            _ => "Q?".to_string(),
        }
    }

    /// 取一段可读文本用于预览
    pub fn preview_text(&self) -> Option<&str> {
        ["questionText", "paragraph", "passageText", "transcript"]
            .iter()
            .filter_map(|key| self.extra.get(*key).and_then(Value::as_str))
            .find(|s| !s.trim().is_empty())
    }

    /// 媒体字段（image / audio）的原始路径
    pub fn media_path(&self, key: &str) -> Option<&str> {
        self.extra
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}
