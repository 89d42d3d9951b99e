//! 交互层入口。
//!
//! 目前只有无 UI 的命令行实现，图形宿主通过 `RangeJob` 的事件接口接入。

pub mod noui;
