// ==========================================
// 스쿼드 플래닝 대시보드 - 도메인 계층
// ==========================================
// 책임: 엔티티/값 타입 정의, 비즈니스 규칙은 엔진 계층에
// ==========================================

pub mod resource;
pub mod squad;
pub mod status;
pub mod table;
pub mod task;

pub use resource::{ResourceRecord, UtilizationMetric, WeightRecord, WeightTable, WorkloadSummary};
pub use squad::SquadOrder;
pub use status::StatusDomain;
pub use table::RawTable;
pub use task::{IssuePriority, IssueRecord, TaskDataset, TaskRecord};
