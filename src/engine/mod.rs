// ==========================================
// 스쿼드 플래닝 대시보드 - 엔진 계층
// ==========================================
// 원본 시트 → 정규화 → 정렬/필터 → 분석 지표의 파이프라인 단계들.
// 엔진은 전부 무상태이고 &PlannerConfig 만 주입받는다.
// ==========================================

pub mod columns;
pub mod filter;
pub mod importer;
pub mod issues;
pub mod normalizer;
pub mod ordering;
pub mod predictor;
pub mod roster;
pub mod squad_order;
pub mod utilization;
pub mod workload;

pub use filter::{FilterEngine, TaskFilter};
pub use importer::UploadImporter;
pub use issues::IssueClassifier;
pub use normalizer::SchemaNormalizer;
pub use ordering::OrderingEngine;
pub use predictor::StartDatePredictor;
pub use squad_order::{SquadOrderProvider, SquadOrderResolution};
pub use utilization::UtilizationEngine;
pub use workload::WorkloadEngine;
