// ==========================================
// 스쿼드 플래닝 대시보드 - 설정 계층
// ==========================================
// 책임: 상태 도메인/마커 문자열/산출 계수의 단일 출처
// 전역 상태 없음 - 모든 엔진은 &PlannerConfig 를 주입받는다
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// 정식 상태 순서 (분류/정렬 공용)
// ==========================================
// 순서: 진행 중 > 진행 예정 > 보류/이슈 > 단순 인입 > 진행 완료 > DROP
pub const CANONICAL_STATUS_ORDER: [&str; 6] = [
    "진행 중",
    "진행 예정",
    "보류/이슈",
    "단순 인입",
    "진행 완료",
    "DROP",
];

/// 코어 엔진 설정
///
/// serde_json 으로 외부 설정 파일에서 로드할 수 있고,
/// 기본값은 운영 중인 대시보드의 정책을 그대로 담는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// 정식 상태 순서 (데이터에서 관측된 그 외 상태는 뒤에 가나다순 추가)
    pub status_order: Vec<String>,

    /// Status 결손 시 기본값
    pub default_status: String,

    /// 이슈로 분류되는 상태 (분류기 우선순위 0)
    pub issue_status: String,

    /// 전략과제 후보 상태 (분류기 우선순위 1)
    pub backlog_status: String,

    /// Biz_impact 안에서 전략과제를 나타내는 마커 부분 문자열
    pub strategic_marker: String,

    /// 지연 판정에서 제외되는 상태 목록
    pub overdue_exempt_statuses: Vec<String>,

    /// 진행 중으로 간주되는 상태 (가동률 active 판정)
    pub in_progress_status: String,

    /// 워크로드 요약에서 active 로 세는 상태 목록 (상태 기준만 사용)
    pub workload_active_statuses: Vec<String>,

    /// 공통/전사 스쿼드 마커 - 포함 시 항상 최상단 정렬
    pub common_squad_marker: String,

    /// 가동률 산출에서 제외할 스쿼드 마커 목록 (미정/공통 풀 등)
    pub utilization_excluded_markers: Vec<String>,

    /// Order 컬럼이 비수치일 때 쓰는 정렬 센티널 (사실상 맨 뒤)
    pub order_sentinel: f64,

    /// Capacity_Score = Headcount / Min_Personnel × capacity_multiplier × focus_factor
    pub capacity_multiplier: f64,
    pub focus_factor: f64,

    /// Unit_Score = unit_score_numerator / Min_Personnel
    pub unit_score_numerator: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            status_order: CANONICAL_STATUS_ORDER
                .iter()
                .map(|s| s.to_string())
                .collect(),
            default_status: "진행 예정".to_string(),
            issue_status: "보류/이슈".to_string(),
            backlog_status: "단순 인입".to_string(),
            strategic_marker: "전략과제".to_string(),
            overdue_exempt_statuses: vec![
                "진행 완료".to_string(),
                "DROP".to_string(),
                "보류/이슈".to_string(),
            ],
            in_progress_status: "진행 중".to_string(),
            workload_active_statuses: vec!["진행 중".to_string(), "진행 예정".to_string()],
            common_squad_marker: "공통".to_string(),
            utilization_excluded_markers: vec!["미정".to_string(), "공통".to_string()],
            order_sentinel: 9999.0,
            capacity_multiplier: 5.0,
            focus_factor: 0.8,
            unit_score_numerator: 4.0,
        }
    }
}

impl PlannerConfig {
    /// JSON 문자열에서 설정 로드
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlannerConfig::default();
        assert_eq!(config.status_order.len(), 6);
        assert_eq!(config.status_order[0], "진행 중");
        assert_eq!(config.default_status, "진행 예정");
        assert_eq!(config.order_sentinel, 9999.0);
    }

    #[test]
    fn test_from_json_roundtrip() {
        let config = PlannerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let loaded = PlannerConfig::from_json(&json).unwrap();
        assert_eq!(loaded.issue_status, config.issue_status);
        assert_eq!(loaded.capacity_multiplier, config.capacity_multiplier);
    }
}
