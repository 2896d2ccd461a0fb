// ==========================================
// 스쿼드 플래닝 대시보드 - 조회 필터
// ==========================================
// 책임: AND 결합 필터로 데이터셋 부분집합 추출
// 각 기준은 비어 있으면 전체 통과. 원본은 변경하지 않는다.
// ==========================================

use crate::config::PlannerConfig;
use crate::domain::{TaskDataset, TaskRecord};
use crate::engine::columns::nfc_trim;
use chrono::NaiveDate;

// ==========================================
// TaskFilter - 필터 기준 모음
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// 상태 포함 목록 (비면 전체)
    pub statuses: Vec<String>,
    /// 스쿼드 포함 목록 (비면 전체)
    pub squads: Vec<String>,
    /// Goal 포함 목록 (비면 전체)
    pub goals: Vec<String>,
    /// 기간 겹침 필터: [시작, 끝] 폐구간
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    /// 과제명 부분 검색 (대소문자 무시)
    pub search: Option<String>,
}

impl TaskFilter {
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
            && self.squads.is_empty()
            && self.goals.is_empty()
            && self.date_range.is_none()
            && self.search.is_none()
    }
}

// ==========================================
// FilterEngine
// ==========================================
pub struct FilterEngine {
    config: PlannerConfig,
}

impl FilterEngine {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// 필터 적용 - 행 순서 유지
    pub fn apply(&self, dataset: &TaskDataset, filter: &TaskFilter) -> TaskDataset {
        let rows = dataset
            .rows
            .iter()
            .filter(|record| self.matches(record, filter))
            .cloned()
            .collect();
        TaskDataset {
            rows,
            status_domain: dataset.status_domain.clone(),
            extra_headers: dataset.extra_headers.clone(),
        }
    }

    /// 진행 중 과제만
    pub fn running(&self, dataset: &TaskDataset) -> TaskDataset {
        self.apply(
            dataset,
            &TaskFilter {
                statuses: vec![self.config.in_progress_status.clone()],
                ..Default::default()
            },
        )
    }

    /// 진행 예정 과제만
    pub fn pending(&self, dataset: &TaskDataset) -> TaskDataset {
        self.apply(
            dataset,
            &TaskFilter {
                statuses: vec![self.config.default_status.clone()],
                ..Default::default()
            },
        )
    }

    fn matches(&self, record: &TaskRecord, filter: &TaskFilter) -> bool {
        if !filter.statuses.is_empty()
            && !filter.statuses.iter().any(|s| s == &record.status)
        {
            return false;
        }
        if !filter.squads.is_empty() && !filter.squads.iter().any(|s| s == &record.squad) {
            return false;
        }
        if !filter.goals.is_empty() {
            let goal = record.goal.as_deref().unwrap_or("");
            if !filter.goals.iter().any(|g| g == goal) {
                return false;
            }
        }
        if let Some((from, to)) = filter.date_range {
            if !overlaps(record, from, to) {
                return false;
            }
        }
        if let Some(search) = &filter.search {
            let needle = nfc_trim(search).to_lowercase();
            if !needle.is_empty()
                && !nfc_trim(&record.task).to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        true
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

/// 기간 겹침 판정: Start ≤ 끝 AND End ≥ 시작
///
/// 어느 한쪽 날짜가 결손이면 겹침으로 치지 않는다.
fn overlaps(record: &TaskRecord, from: NaiveDate, to: NaiveDate) -> bool {
    match (record.start, record.end) {
        (Some(start), Some(end)) => start <= to && end >= from,
        _ => false,
    }
}
