// ==========================================
// 스쿼드 플래닝 대시보드 - 코어 라이브러리
// ==========================================
// 기술 스택: Rust + 외부 스프레드시트 백엔드
// 시스템 정의: 로드맵/리소스 분석용 데이터 엔진
// ==========================================

// ==========================================
// 모듈 선언
// ==========================================

// 도메인 계층 - 엔티티/타입
pub mod domain;

// 엔진 계층 - 비즈니스 규칙
pub mod engine;

// 시트 계층 - 외부 스프레드시트 경계
pub mod sheet;

// 설정 계층
pub mod config;

// API 계층 - 파이프라인 파사드
pub mod api;

// 에러 타입
pub mod error;

// 로그 시스템
pub mod logging;

// ==========================================
// 핵심 타입 재노출
// ==========================================

// 도메인 타입
pub use domain::{
    IssuePriority, IssueRecord, RawTable, ResourceRecord, SquadOrder, StatusDomain, TaskDataset,
    TaskRecord, UtilizationMetric, WeightRecord, WeightTable, WorkloadSummary,
};

// 엔진
pub use engine::{
    FilterEngine, IssueClassifier, OrderingEngine, SchemaNormalizer, SquadOrderProvider,
    StartDatePredictor, TaskFilter, UploadImporter, UtilizationEngine, WorkloadEngine,
};

// 시트 경계
pub use sheet::{InMemorySheetStore, SheetStore, WorksheetRef};

// 설정/에러
pub use config::PlannerConfig;
pub use error::{PlannerError, PlannerResult};

// API
pub use api::PlanningApi;

// ==========================================
// 상수 정의
// ==========================================

// 시스템 버전
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 시스템 이름
pub const APP_NAME: &str = "스쿼드 플래닝 대시보드";
