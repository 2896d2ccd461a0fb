// ==========================================
// 스쿼드 플래닝 대시보드 - 리소스/가중치/지표 타입
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// ResourceRecord - 스쿼드 인원 로스터 한 행
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub squad: String,
    /// 보유 인원 (결손 시 0)
    pub headcount: f64,
    /// 과제당 최소 투입 인원 (결손 시 1, 0 나눗셈 방지를 위해 하한 1)
    pub min_personnel: f64,
}

impl ResourceRecord {
    pub fn new(squad: impl Into<String>, headcount: f64, min_personnel: f64) -> Self {
        Self {
            squad: squad.into(),
            headcount,
            // 하한 1 - Min_Personnel 이 분모로 쓰인다
            min_personnel: min_personnel.max(1.0),
        }
    }
}

// ==========================================
// WeightRecord / WeightTable - 과제 유형 가중치
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    pub task_type: String,
    pub weight: f64,
}

/// Type → 가중치 조회 표. 미등록/결손 유형은 1.0
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    weights: HashMap<String, f64>,
}

impl WeightTable {
    pub const DEFAULT_WEIGHT: f64 = 1.0;

    pub fn new(records: Vec<WeightRecord>) -> Self {
        let mut weights = HashMap::new();
        for record in records {
            // 중복 유형은 첫 등장 유지
            weights
                .entry(record.task_type)
                .or_insert(record.weight);
        }
        Self { weights }
    }

    /// 유형별 가중치 조회 (저장된 표기 그대로 정확 일치, 공백만 제거)
    pub fn weight_for(&self, task_type: Option<&str>) -> f64 {
        match task_type {
            Some(t) if !t.trim().is_empty() => self
                .weights
                .get(t.trim())
                .copied()
                .unwrap_or(Self::DEFAULT_WEIGHT),
            _ => Self::DEFAULT_WEIGHT,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

// ==========================================
// UtilizationMetric - 스쿼드별 가동률 지표 (요청마다 재산출)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilizationMetric {
    pub squad: String,
    pub total_tasks: usize,
    pub active_tasks: usize,
    /// 활성 과제 가중치 합
    pub active_tasks_score: f64,
    pub headcount: f64,
    pub min_personnel: f64,
    /// (Headcount / Min_Personnel) × 5.0 × 0.8
    pub capacity_score: f64,
    /// = Active_Tasks_Score
    pub total_load_score: f64,
    /// round((Load − Capacity) / (4.0 / Min_Personnel), 1)
    pub shortage: f64,
}

// ==========================================
// WorkloadSummary - 상태 기준 단순 워크로드 요약
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadSummary {
    pub squad: String,
    pub total_tasks: usize,
    /// 상태가 진행 중/진행 예정인 과제 수
    pub active_tasks: usize,
}
