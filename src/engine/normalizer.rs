// ==========================================
// 스쿼드 플래닝 대시보드 - 스키마 정규화 엔진
// ==========================================
// 책임: 이질적인 소스 컬럼을 정식 스키마로 변환
//       + 타입 강제(날짜/수치) + 상태 도메인 계산
// 원칙: 도메인 값 결손은 기본값으로 흡수하고 절대 에러로 올리지 않는다.
//       구조 오류(비직사각형 표)만 에러.
// 멱등성: 정규화 결과를 다시 정규화해도 동일해야 한다
//         (프레젠테이션 계층이 캐시 상황에서 재호출할 수 있음)
// ==========================================

use crate::config::PlannerConfig;
use crate::domain::status::StatusDomain;
use crate::domain::task::{
    COL_BIZ_IMPACT, COL_COMMENT, COL_END, COL_GOAL, COL_MAIN_GOAL, COL_ORDER, COL_PROJECT,
    COL_SQUAD, COL_START, COL_STATUS, COL_SUB_GOAL, COL_TASK, COL_TYPE,
};
use crate::domain::{RawTable, TaskDataset, TaskRecord};
use crate::engine::columns::{map_columns, nfc_trim, ColumnMap};
use chrono::{NaiveDate, NaiveDateTime};

// ==========================================
// SchemaNormalizer - 정규화 엔진
// ==========================================
/// 스키마 정규화 엔진
///
/// # 책임
/// 1. 별칭 표 기반 컬럼 이름 변환 (미매핑 컬럼은 통과)
/// 2. Goal 폴백 해석 (Goal 결손 시 Sub_Goal 사용)
/// 3. 문자열 정리 (공백 제거 + NFC)
/// 4. 날짜 관용 파싱 (실패는 결손, 에러 아님)
/// 5. Status 기본값 부여 + 공유 상태 도메인 계산
///
/// # 변형
/// - `normalize`: 시트 스냅샷용 (행을 버리지 않음)
/// - `normalize_strict`: 수동 업로드용 (Task/Squad 결손 행 드롭)
pub struct SchemaNormalizer {
    config: PlannerConfig,
}

impl SchemaNormalizer {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// 시트 스냅샷 정규화 (관대한 모드)
    pub fn normalize(&self, table: &RawTable) -> crate::error::PlannerResult<TaskDataset> {
        self.run(table, false)
    }

    /// 수동 업로드 정규화 (엄격 모드)
    ///
    /// Task/Squad 가 빈 값/공백/리터럴 "nan" 인 행을 드롭한다.
    pub fn normalize_strict(&self, table: &RawTable) -> crate::error::PlannerResult<TaskDataset> {
        self.run(table, true)
    }

    fn run(&self, table: &RawTable, strict: bool) -> crate::error::PlannerResult<TaskDataset> {
        // 구조 검증 - 비직사각형 표만 에러
        table.validate()?;

        if table.headers.is_empty() {
            tracing::debug!("헤더 없는 입력 - 빈 데이터셋 반환");
            return Ok(TaskDataset::default());
        }

        let column_map = map_columns(&table.headers);
        let extra_headers: Vec<String> = column_map
            .passthrough
            .iter()
            .map(|(h, _)| h.clone())
            .collect();

        let mut rows: Vec<TaskRecord> = Vec::with_capacity(table.row_count());
        let mut dropped = 0usize;

        for raw_row in &table.rows {
            let mut record = self.build_record(raw_row, &column_map);

            if strict && !has_identity(&record) {
                dropped += 1;
                continue;
            }

            // Status 결손 → 기본 상태
            if record.status.is_empty() {
                record.status = self.config.default_status.clone();
            }

            // Goal 폴백 체인: Goal → Sub_Goal
            if record.goal.is_none() {
                record.goal = record.sub_goal.clone();
            }

            rows.push(record);
        }

        if dropped > 0 {
            tracing::warn!(dropped, "엄격 모드에서 Task/Squad 결손 행 드롭");
        }

        // 상태 도메인: 정식 순서 ∪ 관측 상태 (패스당 1회 계산, 전 행 공유)
        let status_domain = StatusDomain::from_observed(
            &self.config.status_order,
            rows.iter().map(|r| r.status.as_str()),
        );
        for record in &mut rows {
            record.status_rank = status_domain.rank(&record.status);
        }

        tracing::debug!(
            rows = rows.len(),
            statuses = status_domain.len(),
            extras = extra_headers.len(),
            "정규화 완료"
        );

        Ok(TaskDataset {
            rows,
            status_domain,
            extra_headers,
        })
    }

    fn build_record(&self, raw_row: &[String], column_map: &ColumnMap) -> TaskRecord {
        let text = |canonical: &str| -> String {
            column_map
                .index_of(canonical)
                .map(|idx| nfc_trim(&raw_row[idx]))
                .unwrap_or_default()
        };
        let opt_text = |canonical: &str| -> Option<String> {
            let value = text(canonical);
            (!value.is_empty()).then_some(value)
        };

        let extras = column_map
            .passthrough
            .iter()
            .map(|(_, idx)| nfc_trim(&raw_row[*idx]))
            .collect();

        TaskRecord {
            squad: text(COL_SQUAD),
            task: text(COL_TASK),
            start: parse_date_permissive(&text(COL_START)),
            end: parse_date_permissive(&text(COL_END)),
            status: text(COL_STATUS),
            goal: opt_text(COL_GOAL),
            main_goal: opt_text(COL_MAIN_GOAL),
            sub_goal: opt_text(COL_SUB_GOAL),
            project: opt_text(COL_PROJECT),
            order: parse_order(&text(COL_ORDER)),
            task_type: opt_text(COL_TYPE),
            biz_impact: opt_text(COL_BIZ_IMPACT),
            comment: opt_text(COL_COMMENT),
            extras,
            status_rank: 0, // 도메인 계산 후 일괄 부여
        }
    }
}

impl Default for SchemaNormalizer {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

/// Task/Squad 식별 필드 존재 여부 (엄격 모드 드롭 기준)
fn has_identity(record: &TaskRecord) -> bool {
    !is_missing_text(&record.task) && !is_missing_text(&record.squad)
}

/// 빈 값/공백/리터럴 "nan" 을 결손으로 취급
fn is_missing_text(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan")
}

/// 날짜 관용 파싱
///
/// 파싱 불가는 결손(None)이다 - 하류 로직은 "모름"으로 다루며
/// 파싱 실패로 취급해서는 안 된다.
pub fn parse_date_permissive(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%Y%m%d"];
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    const DATETIME_FORMATS: [&str; 3] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.date());
        }
    }

    tracing::trace!(value = trimmed, "날짜 파싱 불가 - 결손 처리");
    None
}

/// Order 수치 파싱 - 비수치는 None (정렬 시 센티널로 강제됨)
pub fn parse_order(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
