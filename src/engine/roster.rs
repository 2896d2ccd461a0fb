// ==========================================
// 스쿼드 플래닝 대시보드 - 로스터/가중치 시트 파서
// ==========================================
// 책임: 보조 시트(인원 로스터, 유형 가중치)를 도메인 타입으로 변환
// 헤더는 키워드 매칭으로 찾는다. 헤더 불일치는 빈 결과 + 경고이며
// 파이프라인을 멈추지 않는다.
// ==========================================

use crate::domain::{RawTable, ResourceRecord, WeightRecord, WeightTable};
use crate::engine::columns::{find_column_with_any_keywords, find_column_with_keywords, nfc_trim};
use tracing::warn;

/// 로스터 파싱 결과
#[derive(Debug, Clone, Default)]
pub struct RosterParse {
    pub records: Vec<ResourceRecord>,
    pub warnings: Vec<String>,
}

/// 인원 로스터 시트 파싱
///
/// - 스쿼드 컬럼: "squad"/"스쿼드" 키워드
/// - 보유 인원 컬럼: "보유"+"인원" 키워드 (결손/비수치는 0)
/// - 최소 투입 컬럼: "최소"+"투입" 키워드 (결손/비수치는 1, 하한 1)
pub fn parse_roster(table: &RawTable) -> RosterParse {
    let mut parse = RosterParse::default();

    let squad_idx =
        match find_column_with_any_keywords(&table.headers, &[&["squad"], &["스쿼드"]]) {
            Some(idx) => idx,
            None => {
                warn!("로스터 시트에서 스쿼드 컬럼을 찾지 못했습니다");
                parse
                    .warnings
                    .push("로스터 시트에서 스쿼드 컬럼을 찾지 못해 용량 0으로 계산합니다".to_string());
                return parse;
            }
        };
    let headcount_idx = find_column_with_keywords(&table.headers, &["보유", "인원"]);
    let min_idx = find_column_with_keywords(&table.headers, &["최소", "투입"]);

    if headcount_idx.is_none() {
        parse
            .warnings
            .push("로스터 시트에 보유 인원 컬럼이 없어 0으로 간주합니다".to_string());
    }
    if min_idx.is_none() {
        parse
            .warnings
            .push("로스터 시트에 최소 투입 인원 컬럼이 없어 1로 간주합니다".to_string());
    }

    for (i, _) in table.rows.iter().enumerate() {
        let squad = nfc_trim(&table.cell(i, squad_idx));
        if squad.is_empty() {
            continue;
        }
        let headcount = headcount_idx
            .and_then(|col| parse_number(&table.cell(i, col)))
            .unwrap_or(0.0);
        let min_personnel = min_idx
            .and_then(|col| parse_number(&table.cell(i, col)))
            .unwrap_or(1.0);
        parse
            .records
            .push(ResourceRecord::new(squad, headcount, min_personnel));
    }
    parse
}

/// 유형 가중치 시트 파싱
///
/// - 유형 컬럼: "type"/"유형" 키워드
/// - 가중치 컬럼: "weight"/"가중치" 키워드
/// 어느 한 컬럼이라도 없으면 빈 표 (모든 유형 가중치 1.0)
pub fn parse_weights(table: &RawTable) -> WeightTable {
    let type_idx = find_column_with_any_keywords(&table.headers, &[&["type"], &["유형"]]);
    let weight_idx =
        find_column_with_any_keywords(&table.headers, &[&["weight"], &["가중치"]]);

    let (type_idx, weight_idx) = match (type_idx, weight_idx) {
        (Some(t), Some(w)) => (t, w),
        _ => {
            warn!("가중치 시트 헤더를 찾지 못해 기본 가중치 1.0 을 사용합니다");
            return WeightTable::default();
        }
    };

    let mut records = Vec::new();
    for (i, _) in table.rows.iter().enumerate() {
        let task_type = nfc_trim(&table.cell(i, type_idx));
        if task_type.is_empty() {
            continue;
        }
        if let Some(weight) = parse_number(&table.cell(i, weight_idx)) {
            records.push(WeightRecord { task_type, weight });
        }
    }
    WeightTable::new(records)
}

fn parse_number(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}
