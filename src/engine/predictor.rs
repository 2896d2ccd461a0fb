// ==========================================
// 스쿼드 플래닝 대시보드 - 착수일 예측기
// ==========================================
// 책임: 신규 과제의 착수 가능일 추정
// 규칙: 해당 스쿼드 과제들의 가장 늦은 종료일 + 1일.
// 스쿼드 과제가 없거나 종료일이 하나도 없으면 오늘.
// 상태 기계 없음 - 현재 스냅샷의 순수 함수다.
// ==========================================

use crate::domain::TaskDataset;
use crate::engine::columns::nfc_trim;
use chrono::{Days, NaiveDate};

#[derive(Default)]
pub struct StartDatePredictor;

impl StartDatePredictor {
    pub fn new() -> Self {
        Self
    }

    /// 스쿼드의 다음 착수 가능일
    pub fn predict(
        &self,
        dataset: &TaskDataset,
        squad: &str,
        today: NaiveDate,
    ) -> NaiveDate {
        let squad = nfc_trim(squad);
        let latest_end = dataset
            .rows
            .iter()
            .filter(|r| nfc_trim(&r.squad) == squad)
            .filter_map(|r| r.end)
            .max();

        match latest_end {
            Some(end) => end.checked_add_days(Days::new(1)).unwrap_or(end),
            None => today,
        }
    }
}
