// ==========================================
// 스쿼드 플래닝 대시보드 - 이슈 분류기
// ==========================================
// 책임: 두 갈래 독립 분류
// 1) issues()  - 상태 이슈 + 전략과제 (우선순위 결합 뷰)
// 2) overdue() - 종료일 경과 과제 (별도 패스)
// 둘은 합쳐지지 않는다. 같은 과제가 양쪽에 모두 나올 수 있다.
// ==========================================

use crate::config::PlannerConfig;
use crate::domain::{IssuePriority, IssueRecord, TaskDataset, TaskRecord};
use chrono::NaiveDate;

/// 지연 과제 라벨
pub const OVERDUE_LABEL: &str = "Overdue";

// ==========================================
// IssueClassifier
// ==========================================
pub struct IssueClassifier {
    config: PlannerConfig,
}

impl IssueClassifier {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// 상태 이슈 + 전략과제 분류
    ///
    /// - 상태 이슈: 상태가 이슈 상태와 일치. 라벨은 상태 문자열 그대로
    /// - 전략과제: 상태가 단순 인입이고 Biz_impact 에 전략과제 마커 포함.
    ///   라벨은 Biz_impact 원문
    /// - 정렬: (우선순위, 종료일 오름차순). 종료일 결손은 맨 뒤,
    ///   그 외 동률은 입력 순서 유지
    pub fn issues(&self, dataset: &TaskDataset) -> Vec<IssueRecord> {
        let mut found: Vec<IssueRecord> = Vec::new();
        for record in &dataset.rows {
            if record.status == self.config.issue_status {
                found.push(IssueRecord {
                    record: record.clone(),
                    issue_type: record.status.clone(),
                    priority: IssuePriority::StatusIssue,
                });
            } else if self.is_strategic(record) {
                found.push(IssueRecord {
                    record: record.clone(),
                    issue_type: record
                        .biz_impact
                        .clone()
                        .unwrap_or_else(|| self.config.strategic_marker.clone()),
                    priority: IssuePriority::Strategic,
                });
            }
        }
        found.sort_by_key(|issue| {
            (
                issue.priority,
                issue.record.end.is_none(),
                issue.record.end,
            )
        });
        found
    }

    /// 종료일 경과 과제 (별도 패스)
    ///
    /// End < today 이고 상태가 지연 제외 목록에 없는 과제.
    /// End 결손은 지연 아님.
    pub fn overdue(&self, dataset: &TaskDataset, today: NaiveDate) -> Vec<IssueRecord> {
        dataset
            .rows
            .iter()
            .filter(|record| self.is_overdue(record, today))
            .map(|record| IssueRecord {
                record: record.clone(),
                issue_type: OVERDUE_LABEL.to_string(),
                priority: IssuePriority::Overdue,
            })
            .collect()
    }

    fn is_strategic(&self, record: &TaskRecord) -> bool {
        record.status == self.config.backlog_status
            && record
                .biz_impact
                .as_deref()
                .is_some_and(|v| v.contains(&self.config.strategic_marker))
    }

    fn is_overdue(&self, record: &TaskRecord, today: NaiveDate) -> bool {
        if self
            .config
            .overdue_exempt_statuses
            .iter()
            .any(|s| s == &record.status)
        {
            return false;
        }
        record.end.is_some_and(|end| end < today)
    }
}

impl Default for IssueClassifier {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}
