// ==========================================
// 스쿼드 플래닝 대시보드 - 워크로드 요약
// ==========================================
// 책임: 스쿼드별 전체/활성 과제 수의 상태 기준 요약
// 가동률 엔진과 달리 날짜 창/가중치를 보지 않는다.
// 활성 = 상태가 진행 중 또는 진행 예정
// ==========================================

use crate::config::PlannerConfig;
use crate::domain::{TaskDataset, WorkloadSummary};
use crate::engine::columns::nfc_trim;
use std::collections::HashMap;

pub struct WorkloadEngine {
    config: PlannerConfig,
}

impl WorkloadEngine {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// 스쿼드별 요약 (첫 등장 순서)
    pub fn summarize(&self, dataset: &TaskDataset) -> Vec<WorkloadSummary> {
        let mut squads: Vec<String> = Vec::new();
        let mut totals: HashMap<String, usize> = HashMap::new();
        let mut actives: HashMap<String, usize> = HashMap::new();

        for record in &dataset.rows {
            let squad = nfc_trim(&record.squad);
            if !squads.iter().any(|s| s == &squad) {
                squads.push(squad.clone());
            }
            *totals.entry(squad.clone()).or_insert(0) += 1;
            if self
                .config
                .workload_active_statuses
                .iter()
                .any(|s| s == &record.status)
            {
                *actives.entry(squad).or_insert(0) += 1;
            }
        }

        squads
            .into_iter()
            .map(|squad| WorkloadSummary {
                total_tasks: *totals.get(&squad).unwrap_or(&0),
                active_tasks: *actives.get(&squad).unwrap_or(&0),
                squad,
            })
            .collect()
    }
}

impl Default for WorkloadEngine {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StatusDomain, TaskRecord};

    fn record(squad: &str, status: &str) -> TaskRecord {
        TaskRecord {
            squad: squad.to_string(),
            task: "T".to_string(),
            status: status.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_summary_counts_by_status_only() {
        let engine = WorkloadEngine::default();
        let dataset = TaskDataset {
            rows: vec![
                record("회원", "진행 중"),
                record("회원", "진행 예정"),
                record("회원", "진행 완료"),
                record("커머스", "DROP"),
            ],
            status_domain: StatusDomain::default(),
            extra_headers: vec![],
        };
        let summary = engine.summarize(&dataset);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].squad, "회원");
        assert_eq!(summary[0].total_tasks, 3);
        assert_eq!(summary[0].active_tasks, 2);
        assert_eq!(summary[1].squad, "커머스");
        assert_eq!(summary[1].active_tasks, 0);
    }
}
