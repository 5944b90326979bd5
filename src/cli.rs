//! 命令行参数定义

use crate::models::{ItemId, PartKey};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "toeic-admin", version, about = "TOEIC 试卷管理后台")]
pub struct Cli {
    /// TOML 配置文件
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// 覆盖后端地址
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// 覆盖 Bearer token
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// 显示详细日志
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 显示试卷的七个 Part
    Show {
        #[arg(value_parser = parse_item_id)]
        test: ItemId,
    },
    /// 拖拽排序：把位置 FROM 的条目移到位置 TO（从 0 开始）
    Move {
        #[arg(value_parser = parse_item_id)]
        test: ItemId,
        #[arg(value_parser = parse_part)]
        part: PartKey,
        from: usize,
        to: usize,
    },
    /// 选中若干条目并批量删除
    Delete {
        #[arg(value_parser = parse_item_id)]
        test: ItemId,
        #[arg(value_parser = parse_part)]
        part: PartKey,
        #[arg(required = true, value_parser = parse_item_id)]
        ids: Vec<ItemId>,
    },
    /// 全选并删除某个 Part 的全部条目
    Clear {
        #[arg(value_parser = parse_item_id)]
        test: ItemId,
        #[arg(value_parser = parse_part)]
        part: PartKey,
    },
    /// 从 JSON 文件新增题目（questionNo 缺省时自动填入建议题号）
    Add {
        #[arg(value_parser = parse_item_id)]
        test: ItemId,
        #[arg(value_parser = parse_part)]
        part: PartKey,
        file: PathBuf,
    },
    /// 从 JSON 文件修改题目
    Update {
        #[arg(value_parser = parse_item_id)]
        test: ItemId,
        #[arg(value_parser = parse_part)]
        part: PartKey,
        #[arg(value_parser = parse_item_id)]
        id: ItemId,
        file: PathBuf,
    },
    /// 输出新增题目的空白表单
    Template {
        #[arg(value_parser = parse_item_id)]
        test: ItemId,
        #[arg(value_parser = parse_part)]
        part: PartKey,
    },
    /// 试卷管理
    #[command(subcommand)]
    Tests(TestsCommand),
    /// 用户管理
    #[command(subcommand)]
    Users(UsersCommand),
    /// 词汇管理
    #[command(subcommand)]
    Vocab(VocabCommand),
    /// 提交记录
    Submissions {
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        size: u32,
    },
    /// 单次作答详情
    Attempt {
        #[arg(value_parser = parse_item_id)]
        id: ItemId,
    },
    /// 仪表盘统计
    Stats,
}

#[derive(Debug, Subcommand)]
pub enum TestsCommand {
    List {
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        size: u32,
        #[arg(long, default_value = "")]
        keyword: String,
    },
    Create {
        file: PathBuf,
    },
    Update {
        #[arg(value_parser = parse_item_id)]
        id: ItemId,
        file: PathBuf,
    },
    Delete {
        #[arg(value_parser = parse_item_id)]
        id: ItemId,
    },
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    List {
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        size: u32,
        #[arg(long, default_value = "")]
        keyword: String,
    },
    Enable {
        #[arg(value_parser = parse_item_id)]
        id: ItemId,
    },
    Disable {
        #[arg(value_parser = parse_item_id)]
        id: ItemId,
    },
    Role {
        #[arg(value_parser = parse_item_id)]
        id: ItemId,
        role: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum VocabCommand {
    List,
    Show {
        #[arg(value_parser = parse_item_id)]
        id: ItemId,
    },
    Create {
        file: PathBuf,
    },
    Update {
        #[arg(value_parser = parse_item_id)]
        id: ItemId,
        file: PathBuf,
    },
    Delete {
        #[arg(value_parser = parse_item_id)]
        id: ItemId,
    },
    AddWord {
        #[arg(value_parser = parse_item_id)]
        category: ItemId,
        file: PathBuf,
    },
    UpdateWord {
        #[arg(value_parser = parse_item_id)]
        id: ItemId,
        file: PathBuf,
    },
    DeleteWord {
        #[arg(value_parser = parse_item_id)]
        id: ItemId,
    },
}

fn parse_item_id(s: &str) -> Result<ItemId, String> {
    s.parse::<ItemId>().map_err(|e| e.to_string())
}

fn parse_part(s: &str) -> Result<PartKey, String> {
    s.parse::<PartKey>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        let cli = Cli::try_parse_from(["toeic-admin", "move", "12", "part-five", "3", "0"]).unwrap();
        match cli.command {
            Command::Move { test, part, from, to } => {
                assert_eq!(test, ItemId::Number(12));
                assert_eq!(part, PartKey::Five);
                assert_eq!((from, to), (3, 0));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_delete_requires_ids() {
        assert!(Cli::try_parse_from(["toeic-admin", "delete", "12", "p1"]).is_err());
        let cli =
            Cli::try_parse_from(["toeic-admin", "delete", "12", "p1", "4", "abc"]).unwrap();
        match cli.command {
            Command::Delete { ids, .. } => {
                assert_eq!(ids, vec![ItemId::Number(4), ItemId::from("abc")])
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_part_is_rejected() {
        assert!(Cli::try_parse_from(["toeic-admin", "show", "1", "--verbose"]).is_ok());
        assert!(Cli::try_parse_from(["toeic-admin", "clear", "1", "part-nine"]).is_err());
    }
}
