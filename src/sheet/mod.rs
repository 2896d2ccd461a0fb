// ==========================================
// 스쿼드 플래닝 대시보드 - 시트 계층
// ==========================================

pub mod export;
pub mod store;

pub use export::{dataset_to_table, snapshot_name};
pub use store::{InMemorySheetStore, SheetStore, WorksheetRef};
