// ==========================================
// 스쿼드 플래닝 대시보드 - API 계층
// ==========================================

pub mod planning_api;

pub use planning_api::{AnalysisReport, PlanningApi};
