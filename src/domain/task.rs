// ==========================================
// 스쿼드 플래닝 대시보드 - 과제 엔티티
// ==========================================
// 정규화가 끝난 과제 레코드와 데이터셋.
// 데이터셋은 파이프라인을 값으로 흐르는 단일 출처이며
// 각 단계는 공유 상태를 변경하지 않고 새 파생물을 만든다.
// ==========================================

use crate::domain::status::StatusDomain;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// 정식 컬럼 이름 (매핑 목적지)
// ==========================================
pub const COL_SQUAD: &str = "Squad";
pub const COL_TASK: &str = "Task";
pub const COL_START: &str = "Start";
pub const COL_END: &str = "End";
pub const COL_STATUS: &str = "Status";
pub const COL_GOAL: &str = "Goal";
pub const COL_MAIN_GOAL: &str = "Main_Goal";
pub const COL_SUB_GOAL: &str = "Sub_Goal";
pub const COL_PROJECT: &str = "Project";
pub const COL_ORDER: &str = "Order";
pub const COL_TYPE: &str = "Type";
pub const COL_BIZ_IMPACT: &str = "Biz_impact";
pub const COL_COMMENT: &str = "Comment";

/// 고정 정식 컬럼의 내보내기 순서
pub const CANONICAL_COLUMNS: [&str; 13] = [
    COL_SQUAD,
    COL_TASK,
    COL_START,
    COL_END,
    COL_STATUS,
    COL_GOAL,
    COL_MAIN_GOAL,
    COL_SUB_GOAL,
    COL_PROJECT,
    COL_ORDER,
    COL_TYPE,
    COL_BIZ_IMPACT,
    COL_COMMENT,
];

// ==========================================
// TaskRecord - 플래닝 데이터 한 행
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub squad: String,
    pub task: String,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub status: String,
    pub goal: Option<String>,
    pub main_goal: Option<String>,
    pub sub_goal: Option<String>,
    pub project: Option<String>,
    /// 수동 정렬 힌트 - 비수치 원본은 None (정렬 시 센티널 취급)
    pub order: Option<f64>,
    /// 가중치 표 조회 키
    pub task_type: Option<String>,
    /// 전략과제 마커가 들어올 수 있는 자유 텍스트
    pub biz_impact: Option<String>,
    pub comment: Option<String>,
    /// 매핑되지 않은 통과 컬럼 값 (TaskDataset::extra_headers 와 정렬)
    pub extras: Vec<String>,
    /// 정규화 시 부여되는 상태 순위 (공유 상태 도메인 기준)
    pub status_rank: usize,
}

impl TaskRecord {
    /// 정식 컬럼 이름으로 문자열 값 조회 (내보내기/사용자 정렬용)
    ///
    /// 날짜는 ISO(`%Y-%m-%d`), 결손은 빈 문자열.
    pub fn canonical_value(&self, column: &str) -> Option<String> {
        let opt = |v: &Option<String>| Some(v.clone().unwrap_or_default());
        match column {
            COL_SQUAD => Some(self.squad.clone()),
            COL_TASK => Some(self.task.clone()),
            COL_START => Some(format_date(self.start)),
            COL_END => Some(format_date(self.end)),
            COL_STATUS => Some(self.status.clone()),
            COL_GOAL => opt(&self.goal),
            COL_MAIN_GOAL => opt(&self.main_goal),
            COL_SUB_GOAL => opt(&self.sub_goal),
            COL_PROJECT => opt(&self.project),
            COL_ORDER => Some(format_order(self.order)),
            COL_TYPE => opt(&self.task_type),
            COL_BIZ_IMPACT => opt(&self.biz_impact),
            COL_COMMENT => opt(&self.comment),
            _ => None,
        }
    }
}

/// 날짜 직렬화 - 결손은 빈 문자열 (NaN/None 센티널 금지)
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Order 직렬화 - 정수 값은 소수점 없이
pub fn format_order(order: Option<f64>) -> String {
    match order {
        None => String::new(),
        Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) => format!("{v}"),
    }
}

// ==========================================
// TaskDataset - 정규화된 데이터셋
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDataset {
    pub rows: Vec<TaskRecord>,
    /// 정규화 패스당 한 번 계산되는 공유 상태 전순서
    pub status_domain: StatusDomain,
    /// 매핑되지 않은 통과 컬럼 헤더 (원본 등장 순서 유지)
    pub extra_headers: Vec<String>,
}

impl TaskDataset {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 데이터에 등장하는 스쿼드 목록 (첫 등장 순서)
    pub fn squads(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for row in &self.rows {
            if !seen.iter().any(|s| s == &row.squad) {
                seen.push(row.squad.clone());
            }
        }
        seen
    }

    /// 정식 컬럼 또는 통과 컬럼의 문자열 값 조회
    pub fn field_value(&self, record: &TaskRecord, column: &str) -> Option<String> {
        if let Some(v) = record.canonical_value(column) {
            return Some(v);
        }
        self.extra_headers
            .iter()
            .position(|h| h == column)
            .map(|idx| record.extras.get(idx).cloned().unwrap_or_default())
    }
}

// ==========================================
// 이슈 뷰 타입
// ==========================================

/// 이슈 분류 우선순위 (낮을수록 먼저)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum IssuePriority {
    /// 상태가 이슈인 과제
    StatusIssue,
    /// 단순 인입 + 전략과제 마커
    Strategic,
    /// 별도 패스: 종료일 경과 과제
    Overdue,
}

/// 이슈 뷰 한 행 - 원본 레코드 + 분류 라벨
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueRecord {
    pub record: TaskRecord,
    /// 라벨 정책: 상태 이슈는 상태 문자열, 전략과제는 Biz_impact 원문,
    /// 지연은 "Overdue" 리터럴
    pub issue_type: String,
    pub priority: IssuePriority,
}
