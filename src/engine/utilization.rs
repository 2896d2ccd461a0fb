// ==========================================
// 스쿼드 플래닝 대시보드 - 가동률 산출 엔진
// ==========================================
// 책임: 스쿼드별 용량/부하/부족분 지표 산출
// 지표는 저장되지 않고 요청마다 현재 데이터로 재산출한다.
//
// 산식:
//   Capacity_Score = (Headcount / Min_Personnel) × 5.0 × 0.8
//   Unit_Score     = 4.0 / Min_Personnel
//   Shortage       = round((Load − Capacity) / Unit_Score, 1)
// ==========================================

use crate::config::PlannerConfig;
use crate::domain::{ResourceRecord, TaskDataset, TaskRecord, UtilizationMetric, WeightTable};
use crate::engine::columns::nfc_trim;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::debug;

// ==========================================
// UtilizationEngine
// ==========================================
pub struct UtilizationEngine {
    config: PlannerConfig,
}

impl UtilizationEngine {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// 스쿼드별 가동률 지표 산출
    ///
    /// # 인자
    /// - `roster`: 인원 로스터 (비면 용량 0으로 계산은 계속한다)
    /// - `weights`: 과제 유형 가중치 (미등록 유형은 1.0)
    /// - `today`: 활성 판정 기준일
    ///
    /// 스쿼드 이름에 제외 마커(미정/공통 풀)가 포함된 행은
    /// 집계 후 결과에서 제외한다.
    pub fn compute(
        &self,
        dataset: &TaskDataset,
        roster: &[ResourceRecord],
        weights: &WeightTable,
        today: NaiveDate,
    ) -> Vec<UtilizationMetric> {
        let roster_by_squad: HashMap<String, &ResourceRecord> = roster
            .iter()
            .map(|r| (nfc_trim(&r.squad), r))
            .collect();

        // 스쿼드별 집계 (첫 등장 순서 유지)
        let mut squads: Vec<String> = Vec::new();
        let mut totals: HashMap<String, usize> = HashMap::new();
        let mut actives: HashMap<String, usize> = HashMap::new();
        let mut scores: HashMap<String, f64> = HashMap::new();

        for record in &dataset.rows {
            let squad = nfc_trim(&record.squad);
            if !squads.iter().any(|s| s == &squad) {
                squads.push(squad.clone());
            }
            *totals.entry(squad.clone()).or_insert(0) += 1;
            if self.is_active(record, today) {
                *actives.entry(squad.clone()).or_insert(0) += 1;
                *scores.entry(squad).or_insert(0.0) +=
                    weights.weight_for(record.task_type.as_deref());
            }
        }

        let metrics: Vec<UtilizationMetric> = squads
            .into_iter()
            .filter(|squad| !self.is_excluded(squad))
            .map(|squad| {
                let (headcount, min_personnel) = match roster_by_squad.get(&squad) {
                    Some(r) => (r.headcount, r.min_personnel),
                    // 로스터 결손: 용량 0, 분모 하한 1
                    None => (0.0, 1.0),
                };
                let capacity_score = headcount / min_personnel
                    * self.config.capacity_multiplier
                    * self.config.focus_factor;
                let unit_score = self.config.unit_score_numerator / min_personnel;
                let total_load_score = *scores.get(&squad).unwrap_or(&0.0);
                let shortage = if unit_score > 0.0 {
                    round1((total_load_score - capacity_score) / unit_score)
                } else {
                    0.0
                };

                UtilizationMetric {
                    total_tasks: *totals.get(&squad).unwrap_or(&0),
                    active_tasks: *actives.get(&squad).unwrap_or(&0),
                    active_tasks_score: total_load_score,
                    headcount,
                    min_personnel,
                    capacity_score,
                    total_load_score,
                    shortage,
                    squad,
                }
            })
            .collect();

        debug!(squads = metrics.len(), "가동률 산출 완료");
        metrics
    }

    /// 활성 판정: 상태가 진행 중이거나 오늘이 [Start, End] 폐구간 안
    fn is_active(&self, record: &TaskRecord, today: NaiveDate) -> bool {
        if record.status == self.config.in_progress_status {
            return true;
        }
        match (record.start, record.end) {
            (Some(start), Some(end)) => start <= today && today <= end,
            _ => false,
        }
    }

    fn is_excluded(&self, squad: &str) -> bool {
        self.config
            .utilization_excluded_markers
            .iter()
            .any(|marker| squad.contains(marker.as_str()))
    }
}

impl Default for UtilizationEngine {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

/// 소수 첫째 자리 반올림
fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StatusDomain, WeightRecord};

    fn record(squad: &str, status: &str, task_type: Option<&str>) -> TaskRecord {
        TaskRecord {
            squad: squad.to_string(),
            task: "T".to_string(),
            status: status.to_string(),
            task_type: task_type.map(|s| s.to_string()),
            ..Default::default()
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dataset(rows: Vec<TaskRecord>) -> TaskDataset {
        TaskDataset {
            rows,
            status_domain: StatusDomain::default(),
            extra_headers: vec![],
        }
    }

    #[test]
    fn test_capacity_formula() {
        let engine = UtilizationEngine::default();
        let roster = vec![ResourceRecord::new("회원", 10.0, 2.0)];
        let metrics = engine.compute(
            &dataset(vec![record("회원", "진행 중", None)]),
            &roster,
            &WeightTable::default(),
            date(2023, 6, 1),
        );
        // 10 / 2 × 5.0 × 0.8 = 20.0
        assert_eq!(metrics[0].capacity_score, 20.0);
        assert_eq!(metrics[0].headcount, 10.0);
        assert_eq!(metrics[0].min_personnel, 2.0);
    }

    #[test]
    fn test_shortage_formula() {
        let engine = UtilizationEngine::default();
        let roster = vec![ResourceRecord::new("회원", 10.0, 2.0)];
        let weights = WeightTable::new(vec![WeightRecord {
            task_type: "대형".to_string(),
            weight: 24.0,
        }]);
        let metrics = engine.compute(
            &dataset(vec![record("회원", "진행 중", Some("대형"))]),
            &roster,
            &weights,
            date(2023, 6, 1),
        );
        // Load 24, Capacity 20, Unit 4/2=2 → (24−20)/2 = 2.0
        assert_eq!(metrics[0].total_load_score, 24.0);
        assert_eq!(metrics[0].shortage, 2.0);
    }

    #[test]
    fn test_active_by_status_or_date_window() {
        let engine = UtilizationEngine::default();
        let today = date(2023, 6, 15);

        let by_status = record("회원", "진행 중", None);
        let mut by_window = record("회원", "진행 예정", None);
        by_window.start = Some(date(2023, 6, 1));
        by_window.end = Some(date(2023, 6, 30));
        let mut outside = record("회원", "진행 예정", None);
        outside.start = Some(date(2023, 7, 1));
        outside.end = Some(date(2023, 7, 31));
        let missing_dates = record("회원", "진행 예정", None);

        let metrics = engine.compute(
            &dataset(vec![by_status, by_window, outside, missing_dates]),
            &[],
            &WeightTable::default(),
            today,
        );
        assert_eq!(metrics[0].total_tasks, 4);
        assert_eq!(metrics[0].active_tasks, 2);
    }

    #[test]
    fn test_missing_roster_zero_capacity_still_computes() {
        let engine = UtilizationEngine::default();
        let metrics = engine.compute(
            &dataset(vec![record("회원", "진행 중", None)]),
            &[],
            &WeightTable::default(),
            date(2023, 6, 1),
        );
        assert_eq!(metrics[0].capacity_score, 0.0);
        assert_eq!(metrics[0].min_personnel, 1.0);
        // Load 1.0, Unit 4.0 → (1−0)/4 = 0.3 (반올림)
        assert_eq!(metrics[0].shortage, 0.3);
    }

    #[test]
    fn test_excluded_markers_dropped_from_result() {
        let engine = UtilizationEngine::default();
        let metrics = engine.compute(
            &dataset(vec![
                record("회원", "진행 중", None),
                record("전사공통", "진행 중", None),
                record("미정", "진행 중", None),
            ]),
            &[],
            &WeightTable::default(),
            date(2023, 6, 1),
        );
        let squads: Vec<&str> = metrics.iter().map(|m| m.squad.as_str()).collect();
        assert_eq!(squads, vec!["회원"]);
    }

    #[test]
    fn test_weight_default_for_unknown_type() {
        let engine = UtilizationEngine::default();
        let weights = WeightTable::new(vec![WeightRecord {
            task_type: "대형".to_string(),
            weight: 3.0,
        }]);
        let metrics = engine.compute(
            &dataset(vec![
                record("회원", "진행 중", Some("대형")),
                record("회원", "진행 중", Some("미등록유형")),
                record("회원", "진행 중", None),
            ]),
            &[],
            &weights,
            date(2023, 6, 1),
        );
        // 3.0 + 1.0 + 1.0
        assert_eq!(metrics[0].active_tasks_score, 5.0);
    }

    #[test]
    fn test_nfc_join_between_roster_and_tasks() {
        let engine = UtilizationEngine::default();
        // NFD 자소 분리된 "회원" 로스터가 NFC 과제와 조인돼야 한다
        let decomposed = "\u{1112}\u{116c}\u{110b}\u{116f}\u{11ab}";
        let roster = vec![ResourceRecord::new(decomposed, 4.0, 1.0)];
        let metrics = engine.compute(
            &dataset(vec![record("회원", "진행 중", None)]),
            &roster,
            &WeightTable::default(),
            date(2023, 6, 1),
        );
        assert_eq!(metrics[0].headcount, 4.0);
    }
}
