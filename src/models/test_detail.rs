use crate::models::item::{ItemId, PartItem};
use crate::models::part::PartKey;
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// 试卷详情
///
/// 列表接口返回的试卷没有七个 Part，对应字段为空
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestDetail {
    #[serde(default)]
    pub id: Option<ItemId>,
    #[serde(default)]
    pub test_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub timer_in_minutes: Option<u32>,
    #[serde(default)]
    pub num_of_participants: Option<u64>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub part_one: Vec<PartItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub part_two: Vec<PartItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub part_three: Vec<PartItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub part_four: Vec<PartItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub part_five: Vec<PartItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub part_six: Vec<PartItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub part_seven: Vec<PartItem>,
}

impl TestDetail {
    pub fn part(&self, key: PartKey) -> &[PartItem] {
        match key {
            PartKey::One => &self.part_one,
            PartKey::Two => &self.part_two,
            PartKey::Three => &self.part_three,
            PartKey::Four => &self.part_four,
            PartKey::Five => &self.part_five,
            PartKey::Six => &self.part_six,
            PartKey::Seven => &self.part_seven,
        }
    }

    pub fn part_mut(&mut self, key: PartKey) -> &mut Vec<PartItem> {
        match key {
            PartKey::One => &mut self.part_one,
            PartKey::Two => &mut self.part_two,
            PartKey::Three => &mut self.part_three,
            PartKey::Four => &mut self.part_four,
            PartKey::Five => &mut self.part_five,
            PartKey::Six => &mut self.part_six,
            PartKey::Seven => &mut self.part_seven,
        }
    }

    /// 取走某个 Part 的条目，原位置留空
    pub fn take_part(&mut self, key: PartKey) -> Vec<PartItem> {
        std::mem::take(self.part_mut(key))
    }

    /// 开始时间的可读形式，无法解析时原样返回
    pub fn start_time_display(&self) -> Option<String> {
        let raw = self.start_time.as_deref()?;
        let formatted = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string());
        Some(formatted.unwrap_or_else(|| raw.to_string()))
    }
}

// 后端对空 Part 可能返回 null
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<PartItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<PartItem>>::deserialize(deserializer)?.unwrap_or_default())
}
