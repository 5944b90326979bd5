//! 试卷的七个 Part
//!
//! 每个 Part 在后端是一个独立的有序集合，路由片段、JSON 字段名、
//! 题号区间等差异全部收敛到 [`PartDescriptor`]。

use crate::error::BoardError;
use phf::phf_map;
use serde_json::{json, Value};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Part 枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartKey {
    /// Photographs
    One = 0,
    /// Question-Response
    Two = 1,
    /// Conversations
    Three = 2,
    /// Talks
    Four = 3,
    /// Incomplete Sentences
    Five = 4,
    /// Text Completion
    Six = 5,
    /// Reading Comprehension
    Seven = 6,
}

/// 单个 Part 的静态描述
#[derive(Debug)]
pub struct PartDescriptor {
    /// 路由片段，例如 `part-one`
    pub route: &'static str,
    /// 试卷详情 JSON 中的字段名，例如 `partOne`
    pub field: &'static str,
    /// 显示名称
    pub title: &'static str,
    /// 是否为题组（带 questionList）
    pub grouped: bool,
    /// 官方题号起止
    pub first_question_no: i64,
    pub last_question_no: i64,
    /// 新建题组时默认的小题数量
    pub default_group_size: usize,
}

static DESCRIPTORS: [PartDescriptor; 7] = [
    PartDescriptor {
        route: "part-one",
        field: "partOne",
        title: "Photographs",
        grouped: false,
        first_question_no: 1,
        last_question_no: 6,
        default_group_size: 0,
    },
    PartDescriptor {
        route: "part-two",
        field: "partTwo",
        title: "Question-Response",
        grouped: false,
        first_question_no: 7,
        last_question_no: 31,
        default_group_size: 0,
    },
    PartDescriptor {
        route: "part-three",
        field: "partThree",
        title: "Conversations",
        grouped: true,
        first_question_no: 32,
        last_question_no: 70,
        default_group_size: 3,
    },
    PartDescriptor {
        route: "part-four",
        field: "partFour",
        title: "Talks",
        grouped: true,
        first_question_no: 71,
        last_question_no: 100,
        default_group_size: 3,
    },
    PartDescriptor {
        route: "part-five",
        field: "partFive",
        title: "Incomplete Sentences",
        grouped: false,
        first_question_no: 101,
        last_question_no: 130,
        default_group_size: 0,
    },
    PartDescriptor {
        route: "part-six",
        field: "partSix",
        title: "Text Completion",
        grouped: true,
        first_question_no: 131,
        last_question_no: 146,
        default_group_size: 4,
    },
    PartDescriptor {
        route: "part-seven",
        field: "partSeven",
        title: "Reading Comprehension",
        grouped: true,
        first_question_no: 147,
        last_question_no: 200,
        default_group_size: 2,
    },
];

/// 输入别名（已转小写）
static PART_ALIASES: phf::Map<&'static str, PartKey> = phf_map! {
    "part-one" => PartKey::One, "partone" => PartKey::One, "part-1" => PartKey::One,
    "part1" => PartKey::One, "one" => PartKey::One, "p1" => PartKey::One, "1" => PartKey::One,
    "part-two" => PartKey::Two, "parttwo" => PartKey::Two, "part-2" => PartKey::Two,
    "part2" => PartKey::Two, "two" => PartKey::Two, "p2" => PartKey::Two, "2" => PartKey::Two,
    "part-three" => PartKey::Three, "partthree" => PartKey::Three, "part-3" => PartKey::Three,
    "part3" => PartKey::Three, "three" => PartKey::Three, "p3" => PartKey::Three, "3" => PartKey::Three,
    "part-four" => PartKey::Four, "partfour" => PartKey::Four, "part-4" => PartKey::Four,
    "part4" => PartKey::Four, "four" => PartKey::Four, "p4" => PartKey::Four, "4" => PartKey::Four,
    "part-five" => PartKey::Five, "partfive" => PartKey::Five, "part-5" => PartKey::Five,
    "part5" => PartKey::Five, "five" => PartKey::Five, "p5" => PartKey::Five, "5" => PartKey::Five,
    "part-six" => PartKey::Six, "partsix" => PartKey::Six, "part-6" => PartKey::Six,
    "part6" => PartKey::Six, "six" => PartKey::Six, "p6" => PartKey::Six, "6" => PartKey::Six,
    "part-seven" => PartKey::Seven, "partseven" => PartKey::Seven, "part-7" => PartKey::Seven,
    "part7" => PartKey::Seven, "seven" => PartKey::Seven, "p7" => PartKey::Seven, "7" => PartKey::Seven,
};

impl PartKey {
    /// 全部 Part，按试卷顺序
    pub const ALL: [PartKey; 7] = [
        PartKey::One,
        PartKey::Two,
        PartKey::Three,
        PartKey::Four,
        PartKey::Five,
        PartKey::Six,
        PartKey::Seven,
    ];

    /// 数组下标（0..7）
    pub fn index(self) -> usize {
        self as usize
    }

    /// Part 编号（1..=7）
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn descriptor(self) -> &'static PartDescriptor {
        &DESCRIPTORS[self.index()]
    }

    pub fn route(self) -> &'static str {
        self.descriptor().route
    }

    pub fn field(self) -> &'static str {
        self.descriptor().field
    }

    pub fn title(self) -> &'static str {
        self.descriptor().title
    }

    pub fn is_grouped(self) -> bool {
        self.descriptor().grouped
    }

    /// 官方题号区间
    pub fn question_range(self) -> RangeInclusive<i64> {
        let d = self.descriptor();
        d.first_question_no..=d.last_question_no
    }

    /// 解析用户输入，支持 `part-one` / `partOne` / `one` / `1` / `p1` 等写法
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = input.trim().to_lowercase().replace('_', "-");
        PART_ALIASES.get(normalized.as_str()).copied()
    }

    /// 新建题目时的空白表单
    ///
    /// # 参数
    /// - `question_no`: 建议题号
    pub fn blank_form(self, question_no: i64) -> Value {
        let empty_question = || {
            json!({
                "questionText": "",
                "option1": "",
                "option2": "",
                "option3": "",
                "option4": "",
                "correctAnswer": 1,
                "explanationAnswer": "",
                "difficultyLevel": "INTERMEDIATE",
                "audioDuration": 0
            })
        };
        let questions: Vec<Value> = (0..self.descriptor().default_group_size)
            .map(|_| empty_question())
            .collect();

        match self {
            PartKey::One | PartKey::Two => json!({
                "questionNo": question_no,
                "correctAnswer": 1,
                "explanationAnswer": "",
                "difficultyLevel": "INTERMEDIATE"
            }),
            PartKey::Five => json!({
                "questionNo": question_no,
                "correctAnswer": 1,
                "explanationAnswer": "",
                "difficultyLevel": "INTERMEDIATE",
                "questionText": "",
                "option1": "",
                "option2": "",
                "option3": "",
                "option4": ""
            }),
            PartKey::Three | PartKey::Four => json!({
                "questionNo": question_no,
                "transcript": "",
                "vietnameseTranscript": "",
                "questionsList": questions
            }),
            PartKey::Six => json!({
                "questionNo": question_no,
                "passageText": "",
                "inVietnamese": "",
                "passageType": "Text",
                "questionsList": questions
            }),
            PartKey::Seven => json!({
                "questionNo": question_no,
                "numOfPassages": 1,
                "passageText": "",
                "inVietnamese": "",
                "passageType": "Single Passage",
                "questionsList": questions
            }),
        }
    }
}

impl fmt::Display for PartKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Part {}: {}", self.number(), self.title())
    }
}

impl FromStr for PartKey {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| BoardError::UnknownPart {
            input: s.to_string(),
        })
    }
}
