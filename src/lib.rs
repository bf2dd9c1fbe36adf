//! 가스 레이트(열입력) 계산 엔진과 요금 추정기.
//!
//! 계산 로직은 라이브러리에 두고 CLI는 얇게 유지한다. 다른 화면(GUI 등)도
//! 같은 엔진을 그대로 쓸 수 있다.

pub mod app;
pub mod assistant;
pub mod config;
pub mod conversion;
pub mod cost;
pub mod gas;
pub mod i18n;
pub mod stopwatch;
pub mod ui_cli;
pub mod units;
