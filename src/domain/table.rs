// ==========================================
// 스쿼드 플래닝 대시보드 - 원시 표 타입
// ==========================================
// 외부 스프레드시트/업로드 파일에서 읽어온 직사각형 스냅샷.
// 셀은 전부 문자열 스칼라 - 타입 해석은 정규화 엔진의 몫이다.
// ==========================================

use crate::error::{PlannerError, PlannerResult};
use serde::{Deserialize, Serialize};

/// 헤더 행 + 데이터 행으로 구성된 직사각형 표
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// 빈 표 (읽기 실패 시 폴백 값으로도 사용)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 모든 데이터 행이 헤더 폭과 일치하는지 검증
    ///
    /// 폭이 모자란 행은 허용하지 않는다 - 시트 스냅샷은 직사각형이어야
    /// 하며, 어긋난 입력은 도메인 결손이 아니라 구조 오류다.
    pub fn validate(&self) -> PlannerResult<()> {
        let expected = self.headers.len();
        for (idx, row) in self.rows.iter().enumerate() {
            if row.len() != expected {
                return Err(PlannerError::RaggedRow {
                    // 헤더가 1행이므로 데이터는 2행부터
                    row_number: idx + 2,
                    expected,
                    actual: row.len(),
                });
            }
        }
        Ok(())
    }

    /// 헤더 이름(공백 제거 후 정확 일치)으로 컬럼 인덱스 조회
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }

    /// 셀 조회 - 범위를 벗어나면 빈 문자열로 간주
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|s| s.as_str())
            .unwrap_or("")
    }
}
