// ==========================================
// 스쿼드 플래닝 대시보드 - 시트 저장소 추상화
// ==========================================
// 책임: 워크시트 읽기/쓰기 경계를 트레이트로 분리
// 운영에서는 스프레드시트 백엔드, 테스트에서는 인메모리 구현을 쓴다.
// ==========================================

use crate::domain::RawTable;
use crate::error::{PlannerError, PlannerResult};
use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

// ==========================================
// WorksheetRef - 워크시트 지정자
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WorksheetRef {
    /// 시트 이름으로 지정
    Name(String),
    /// 0 기반 위치로 지정
    Index(usize),
    /// 백엔드 고유 id (gid) 로 지정
    Gid(u64),
}

impl WorksheetRef {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}

impl fmt::Display for WorksheetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name}"),
            Self::Index(idx) => write!(f, "#{idx}"),
            Self::Gid(gid) => write!(f, "gid={gid}"),
        }
    }
}

// ==========================================
// SheetStore 트레이트
// ==========================================
pub trait SheetStore {
    /// 워크시트 한 장을 표로 읽기
    fn read(&self, doc_id: &str, worksheet: &WorksheetRef) -> PlannerResult<RawTable>;

    /// 워크시트에 표 전체 덮어쓰기 (없으면 생성)
    fn write(
        &self,
        doc_id: &str,
        worksheet: &WorksheetRef,
        table: &RawTable,
    ) -> PlannerResult<()>;

    /// 문서의 워크시트 이름 목록
    fn worksheets(&self, doc_id: &str) -> PlannerResult<Vec<String>>;
}

// ==========================================
// InMemorySheetStore - 테스트/로컬용 구현
// ==========================================
#[derive(Default)]
pub struct InMemorySheetStore {
    // (doc_id, sheet_name) → 표. 삽입 순서 보존용 이름 목록 별도 유지
    tables: Mutex<HashMap<(String, String), RawTable>>,
    names: Mutex<Vec<(String, String)>>,
}

impl InMemorySheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn resolve_name(&self, doc_id: &str, worksheet: &WorksheetRef) -> Option<String> {
        match worksheet {
            WorksheetRef::Name(name) => Some(name.clone()),
            WorksheetRef::Index(idx) => {
                let names = self.names.lock().unwrap_or_else(|e| e.into_inner());
                names
                    .iter()
                    .filter(|(doc, _)| doc == doc_id)
                    .nth(*idx)
                    .map(|(_, name)| name.clone())
            }
            // 인메모리 구현은 gid 를 삽입 순서로 해석한다
            WorksheetRef::Gid(gid) => {
                self.resolve_name(doc_id, &WorksheetRef::Index(*gid as usize))
            }
        }
    }
}

impl SheetStore for InMemorySheetStore {
    fn read(&self, doc_id: &str, worksheet: &WorksheetRef) -> PlannerResult<RawTable> {
        let name = self.resolve_name(doc_id, worksheet).ok_or_else(|| {
            PlannerError::WorksheetNotFound {
                doc_id: doc_id.to_string(),
                worksheet: worksheet.to_string(),
            }
        })?;
        let tables = self.tables.lock().unwrap_or_else(|e| e.into_inner());
        tables
            .get(&(doc_id.to_string(), name))
            .cloned()
            .ok_or_else(|| PlannerError::WorksheetNotFound {
                doc_id: doc_id.to_string(),
                worksheet: worksheet.to_string(),
            })
    }

    fn write(
        &self,
        doc_id: &str,
        worksheet: &WorksheetRef,
        table: &RawTable,
    ) -> PlannerResult<()> {
        let name = match worksheet {
            WorksheetRef::Name(name) => name.clone(),
            other => self.resolve_name(doc_id, other).ok_or_else(|| {
                PlannerError::WorksheetNotFound {
                    doc_id: doc_id.to_string(),
                    worksheet: other.to_string(),
                }
            })?,
        };
        let key = (doc_id.to_string(), name);
        {
            let mut names = self.names.lock().unwrap_or_else(|e| e.into_inner());
            if !names.contains(&key) {
                names.push(key.clone());
            }
        }
        let mut tables = self.tables.lock().unwrap_or_else(|e| e.into_inner());
        tables.insert(key, table.clone());
        Ok(())
    }

    fn worksheets(&self, doc_id: &str) -> PlannerResult<Vec<String>> {
        let names = self.names.lock().unwrap_or_else(|e| e.into_inner());
        Ok(names
            .iter()
            .filter(|(doc, _)| doc == doc_id)
            .map(|(_, name)| name.clone())
            .collect())
    }
}
