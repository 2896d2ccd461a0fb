// ==========================================
// 스쿼드 플래닝 대시보드 - 정렬 엔진
// ==========================================
// 책임: 결정적 전순서 구성
// 정렬 키 (우선순위 순):
// 1) 사용자 지정 컬럼 (있을 때만, 오름차순)
// 2) Squad - 해석된 스쿼드 순서 기반 카테고리 순위
// 3) Order 수치 필드 - 비수치/결손은 센티널(9999)로 맨 뒤
// 모든 비교는 안정 정렬 (같은 키는 입력 순서 유지)
// ==========================================

use crate::config::PlannerConfig;
use crate::domain::task::{COL_END, COL_ORDER, COL_SQUAD, COL_START, COL_STATUS};
use crate::domain::{SquadOrder, TaskDataset, TaskRecord};
use crate::engine::columns::nfc_trim;
use chrono::NaiveDate;
use std::cmp::Ordering;

// ==========================================
// OrderingEngine - 정렬 엔진
// ==========================================
pub struct OrderingEngine {
    config: PlannerConfig,
}

impl OrderingEngine {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// 데이터셋 정렬
    ///
    /// # 인자
    /// - `dataset`: 정규화된 데이터셋 (값으로 받아 새 정렬본 반환)
    /// - `user_column`: 사용자 지정 최우선 정렬 컬럼 (없으면 생략)
    /// - `squad_order`: 해석된 스쿼드 순서 (비어 있으면 가나다순 폴백)
    pub fn sort(
        &self,
        mut dataset: TaskDataset,
        user_column: Option<&str>,
        squad_order: &SquadOrder,
    ) -> TaskDataset {
        // 지정 컬럼이 실제로 존재할 때만 사용자 키 적용
        let user_column = user_column.filter(|col| {
            TaskRecord::default().canonical_value(col).is_some()
                || dataset.extra_headers.iter().any(|h| h == *col)
        });

        // 불변 차용과 가변 정렬이 겹치지 않도록 키를 먼저 계산한다
        let keys: Vec<RowKey> = dataset
            .rows
            .iter()
            .map(|record| RowKey {
                user: user_column.map(|col| self.user_key(&dataset, record, col)),
                squad: self.squad_key(record, squad_order),
                order: record.order.unwrap_or(self.config.order_sentinel),
            })
            .collect();

        let mut indices: Vec<usize> = (0..dataset.rows.len()).collect();
        indices.sort_by(|&a, &b| keys[a].compare(&keys[b]));

        let mut rows: Vec<Option<TaskRecord>> =
            dataset.rows.into_iter().map(Some).collect();
        dataset.rows = indices
            .into_iter()
            .map(|i| rows[i].take().expect("index used once"))
            .collect();
        dataset
    }

    /// 사용자 지정 컬럼의 비교 키 (컬럼 종류별 타입 비교)
    fn user_key(&self, dataset: &TaskDataset, record: &TaskRecord, column: &str) -> UserKey {
        match column {
            COL_START => UserKey::Date(record.start),
            COL_END => UserKey::Date(record.end),
            COL_ORDER => {
                UserKey::Number(record.order.unwrap_or(self.config.order_sentinel))
            }
            COL_STATUS => UserKey::Rank(record.status_rank),
            COL_SQUAD => UserKey::Text(record.squad.clone()),
            _ => UserKey::Text(dataset.field_value(record, column).unwrap_or_default()),
        }
    }

    /// Squad 카테고리 키
    ///
    /// (0) 공통 마커 포함 스쿼드 - 항상 최상단
    /// (1) 해석된 순서에 있는 스쿼드 - 순위 오름차순
    /// (2) 그 외 - 가나다순 (순서가 비면 전원 여기로 → 가나다순 폴백)
    fn squad_key(&self, record: &TaskRecord, squad_order: &SquadOrder) -> SquadKey {
        let name = nfc_trim(&record.squad);
        if name.contains(&self.config.common_squad_marker) {
            return SquadKey {
                tier: 0,
                rank: 0,
                name: String::new(),
            };
        }
        match squad_order.rank(&name) {
            Some(rank) => SquadKey {
                tier: 1,
                rank,
                name: String::new(),
            },
            None => SquadKey {
                tier: 2,
                rank: 0,
                name,
            },
        }
    }
}

impl Default for OrderingEngine {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

// ==========================================
// 비교 키 타입
// ==========================================

struct RowKey {
    user: Option<UserKey>,
    squad: SquadKey,
    order: f64,
}

impl RowKey {
    fn compare(&self, other: &Self) -> Ordering {
        if let (Some(a), Some(b)) = (&self.user, &other.user) {
            match a.compare(b) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        match self.squad.compare(&other.squad) {
            Ordering::Equal => {}
            ord => return ord,
        }
        self.order.partial_cmp(&other.order).unwrap_or(Ordering::Equal)
    }
}

enum UserKey {
    /// 결손 날짜는 맨 뒤
    Date(Option<NaiveDate>),
    Number(f64),
    Rank(usize),
    Text(String),
}

impl UserKey {
    fn compare(&self, other: &Self) -> Ordering {
        use UserKey::*;
        match (self, other) {
            (Date(a), Date(b)) => match (a, b) {
                (Some(a), Some(b)) => a.cmp(b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            (Number(a), Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Rank(a), Rank(b)) => a.cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            // 같은 컬럼에서 나온 키라 종류 불일치는 발생하지 않는다
            _ => Ordering::Equal,
        }
    }
}

struct SquadKey {
    tier: u8,
    rank: usize,
    name: String,
}

impl SquadKey {
    fn compare(&self, other: &Self) -> Ordering {
        self.tier
            .cmp(&other.tier)
            .then_with(|| self.rank.cmp(&other.rank))
            .then_with(|| self.name.cmp(&other.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatusDomain;

    fn record(squad: &str, task: &str, order: Option<f64>) -> TaskRecord {
        TaskRecord {
            squad: squad.to_string(),
            task: task.to_string(),
            order,
            status: "진행 예정".to_string(),
            ..Default::default()
        }
    }

    fn dataset(rows: Vec<TaskRecord>) -> TaskDataset {
        TaskDataset {
            rows,
            status_domain: StatusDomain::default(),
            extra_headers: vec![],
        }
    }

    #[test]
    fn test_squad_rank_dominates_order_field() {
        let engine = OrderingEngine::default();
        let squad_order =
            SquadOrder::new(vec!["커머스".to_string(), "회원".to_string()]);
        let sorted = engine.sort(
            dataset(vec![
                record("회원", "T1", Some(1.0)),
                record("커머스", "T2", Some(2.0)),
            ]),
            None,
            &squad_order,
        );
        let tasks: Vec<&str> = sorted.rows.iter().map(|r| r.task.as_str()).collect();
        assert_eq!(tasks, vec!["T2", "T1"]);
    }

    #[test]
    fn test_unranked_squads_after_ranked_alphabetical() {
        let engine = OrderingEngine::default();
        let squad_order = SquadOrder::new(vec!["회원".to_string()]);
        let sorted = engine.sort(
            dataset(vec![
                record("나중", "T1", None),
                record("가나", "T2", None),
                record("회원", "T3", None),
            ]),
            None,
            &squad_order,
        );
        let tasks: Vec<&str> = sorted.rows.iter().map(|r| r.task.as_str()).collect();
        assert_eq!(tasks, vec!["T3", "T2", "T1"]);
    }

    #[test]
    fn test_empty_order_falls_back_alphabetical() {
        let engine = OrderingEngine::default();
        let sorted = engine.sort(
            dataset(vec![
                record("C", "T1", None),
                record("A", "T2", None),
                record("B", "T3", None),
            ]),
            None,
            &SquadOrder::unranked(),
        );
        let squads: Vec<&str> = sorted.rows.iter().map(|r| r.squad.as_str()).collect();
        assert_eq!(squads, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_common_squad_always_first() {
        let engine = OrderingEngine::default();
        // 해석된 순서에서 뒤에 있어도 공통 마커가 이긴다
        let squad_order =
            SquadOrder::new(vec!["회원".to_string(), "전사공통".to_string()]);
        let sorted = engine.sort(
            dataset(vec![
                record("회원", "T1", None),
                record("전사공통", "T2", None),
            ]),
            None,
            &squad_order,
        );
        assert_eq!(sorted.rows[0].task, "T2");

        // 순서가 비어도 동일
        let sorted = engine.sort(
            dataset(vec![
                record("APP", "T1", None),
                record("전사공통", "T2", None),
            ]),
            None,
            &SquadOrder::unranked(),
        );
        assert_eq!(sorted.rows[0].task, "T2");
    }

    #[test]
    fn test_order_sentinel_sorts_last() {
        let engine = OrderingEngine::default();
        let sorted = engine.sort(
            dataset(vec![
                record("회원", "T1", None),
                record("회원", "T2", Some(2.0)),
                record("회원", "T3", Some(1.0)),
            ]),
            None,
            &SquadOrder::unranked(),
        );
        let tasks: Vec<&str> = sorted.rows.iter().map(|r| r.task.as_str()).collect();
        assert_eq!(tasks, vec!["T3", "T2", "T1"]);
    }

    #[test]
    fn test_stable_for_equal_keys() {
        let engine = OrderingEngine::default();
        let sorted = engine.sort(
            dataset(vec![
                record("회원", "첫째", Some(1.0)),
                record("회원", "둘째", Some(1.0)),
                record("회원", "셋째", Some(1.0)),
            ]),
            None,
            &SquadOrder::unranked(),
        );
        let tasks: Vec<&str> = sorted.rows.iter().map(|r| r.task.as_str()).collect();
        assert_eq!(tasks, vec!["첫째", "둘째", "셋째"]);
    }

    #[test]
    fn test_user_column_takes_priority() {
        let engine = OrderingEngine::default();
        let mut row_a = record("회원", "T1", Some(1.0));
        row_a.end = NaiveDate::from_ymd_opt(2023, 3, 1);
        let mut row_b = record("회원", "T2", Some(2.0));
        row_b.end = NaiveDate::from_ymd_opt(2023, 1, 1);
        let mut row_c = record("회원", "T3", Some(3.0));
        row_c.end = None; // 결손 날짜는 맨 뒤

        let sorted = engine.sort(
            dataset(vec![row_c, row_a, row_b]),
            Some("End"),
            &SquadOrder::unranked(),
        );
        let tasks: Vec<&str> = sorted.rows.iter().map(|r| r.task.as_str()).collect();
        assert_eq!(tasks, vec!["T2", "T1", "T3"]);
    }

    #[test]
    fn test_unknown_user_column_ignored() {
        let engine = OrderingEngine::default();
        let sorted = engine.sort(
            dataset(vec![
                record("B", "T1", None),
                record("A", "T2", None),
            ]),
            Some("없는컬럼"),
            &SquadOrder::unranked(),
        );
        // 사용자 키는 무시되고 Squad 가나다순만 적용
        assert_eq!(sorted.rows[0].task, "T2");
    }

    #[test]
    fn test_sort_idempotent() {
        let engine = OrderingEngine::default();
        let squad_order = SquadOrder::new(vec!["커머스".to_string()]);
        let input = dataset(vec![
            record("회원", "T1", Some(2.0)),
            record("커머스", "T2", None),
            record("회원", "T3", Some(1.0)),
        ]);
        let once = engine.sort(input, None, &squad_order);
        let twice = engine.sort(once.clone(), None, &squad_order);
        assert_eq!(once, twice);
    }
}
