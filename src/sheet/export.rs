// ==========================================
// 스쿼드 플래닝 대시보드 - 내보내기 직렬화
// ==========================================
// 책임: 정규화된 데이터셋 → 쓰기용 RawTable 변환
// 헤더는 정식 컬럼 + 통과 컬럼. 날짜는 ISO, 결손은 빈 문자열이라
// 내보낸 표를 다시 정규화해도 같은 데이터셋이 나온다.
// ==========================================

use crate::domain::task::CANONICAL_COLUMNS;
use crate::domain::{RawTable, TaskDataset};
use chrono::NaiveDateTime;

/// 데이터셋을 표로 직렬화
pub fn dataset_to_table(dataset: &TaskDataset) -> RawTable {
    let mut headers: Vec<String> =
        CANONICAL_COLUMNS.iter().map(|c| c.to_string()).collect();
    headers.extend(dataset.extra_headers.iter().cloned());

    let rows = dataset
        .rows
        .iter()
        .map(|record| {
            let mut row: Vec<String> = CANONICAL_COLUMNS
                .iter()
                .map(|col| record.canonical_value(col).unwrap_or_default())
                .collect();
            for idx in 0..dataset.extra_headers.len() {
                row.push(record.extras.get(idx).cloned().unwrap_or_default());
            }
            row
        })
        .collect();

    RawTable::new(headers, rows)
}

/// 스냅샷 워크시트 이름 (분 단위 해상도)
pub fn snapshot_name(now: NaiveDateTime) -> String {
    now.format("%Y-%m-%d_%H%M").to_string()
}
