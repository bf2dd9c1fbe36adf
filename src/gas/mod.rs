//! 가스 물성, 열입력 엔진, 기기 참고 자료.

pub mod appliance;
pub mod heat_input;
pub mod properties;

pub use heat_input::{compute_heat_input, measure, HeatInputResult, MeasurementSample};
pub use properties::{GasKind, GasProperties, GasTable, LpgKind};
