// ==========================================
// 스쿼드 플래닝 대시보드 - 컬럼 매핑 규칙
// ==========================================
// 책임: 소스 헤더 → 정식 필드 이름의 명시적 별칭 표 + 키워드 폴백
// 원칙: 퍼지 매칭 대신 선언 순서대로 첫 일치 우선(first-match-wins)
// ==========================================

use crate::domain::task::{
    COL_BIZ_IMPACT, COL_COMMENT, COL_END, COL_GOAL, COL_MAIN_GOAL, COL_ORDER, COL_PROJECT,
    COL_SQUAD, COL_START, COL_STATUS, COL_SUB_GOAL, COL_TASK, COL_TYPE,
};
use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;

// ==========================================
// 별칭 표 (소스 헤더, 정식 이름)
// ==========================================
// 선언 순서가 곧 우선순위다. 정식 이름 자신이 맨 앞에 오므로
// 이미 정규화된 표를 다시 정규화해도 동일한 매핑이 나온다.
// 같은 정식 이름에 여러 소스 컬럼이 걸리면 먼저 선언된 쪽만 매핑되고
// 나머지는 통과 컬럼으로 남는다.
pub const ALIAS_TABLE: &[(&str, &str)] = &[
    // 정식 이름 (자기 자신)
    ("Squad", COL_SQUAD),
    ("Task", COL_TASK),
    ("Start", COL_START),
    ("End", COL_END),
    ("Status", COL_STATUS),
    ("Goal", COL_GOAL),
    ("Main_Goal", COL_MAIN_GOAL),
    ("Sub_Goal", COL_SUB_GOAL),
    ("Project", COL_PROJECT),
    ("Order", COL_ORDER),
    ("Type", COL_TYPE),
    ("Biz_impact", COL_BIZ_IMPACT),
    ("Comment", COL_COMMENT),
    // 한글 라벨 헤더
    ("Squad (대분류)", COL_SQUAD),
    ("Subproject_Name (소분류)", COL_TASK),
    ("시작일 (Start)", COL_START),
    ("종료일 (End)", COL_END),
    ("상태 (Status)", COL_STATUS),
    ("Goal (목표)", COL_GOAL),
    ("정렬 순서", COL_ORDER),
    ("Type (유형)", COL_TYPE),
    ("코멘트 (Comment)", COL_COMMENT),
    ("1depth_name (중분류)", COL_PROJECT),
    ("비고", COL_COMMENT),
    ("설명", COL_COMMENT),
    ("사업 임팩트", COL_BIZ_IMPACT),
    // snake_case 헤더
    ("squad", COL_SQUAD),
    ("subproject_name", COL_TASK),
    ("start_date", COL_START),
    ("end_date", COL_END),
    ("status", COL_STATUS),
    ("goal", COL_GOAL),
    ("main_goal", COL_MAIN_GOAL),
    ("sub_goal", COL_SUB_GOAL),
    ("project_name", COL_PROJECT),
    ("Project_Name", COL_PROJECT),
    ("1depth_name", COL_PROJECT),
    ("order", COL_ORDER),
    ("type", COL_TYPE),
    ("biz_impact", COL_BIZ_IMPACT),
    ("comment", COL_COMMENT),
];

/// 공백 제거 + 유니코드 NFC 정규화
///
/// 한글 자소 분리(NFD) 표기가 섞여 들어오면 같은 값이 다른
/// 카테고리로 갈라지므로 비교/조인 전에 반드시 통일한다.
pub fn nfc_trim(s: &str) -> String {
    s.trim().nfc().collect::<String>()
}

/// 헤더 목록에 별칭 표를 적용한 결과
#[derive(Debug, Clone)]
pub struct ColumnMap {
    /// 정식 이름 → 소스 컬럼 인덱스
    pub mapped: HashMap<&'static str, usize>,
    /// 매핑되지 않은 통과 컬럼 (원본 순서 유지): (정리된 헤더, 인덱스)
    pub passthrough: Vec<(String, usize)>,
}

impl ColumnMap {
    pub fn index_of(&self, canonical: &str) -> Option<usize> {
        self.mapped.get(canonical).copied()
    }
}

/// 별칭 표를 first-match-wins 로 적용
pub fn map_columns(headers: &[String]) -> ColumnMap {
    let cleaned: Vec<String> = headers.iter().map(|h| nfc_trim(h)).collect();
    let mut mapped: HashMap<&'static str, usize> = HashMap::new();
    let mut used: Vec<bool> = vec![false; cleaned.len()];

    for (source, canonical) in ALIAS_TABLE {
        if mapped.contains_key(canonical) {
            continue;
        }
        let source_clean = nfc_trim(source);
        if let Some(idx) = (0..cleaned.len()).find(|&i| !used[i] && cleaned[i] == source_clean) {
            mapped.insert(canonical, idx);
            used[idx] = true;
        }
    }

    let passthrough = cleaned
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !used[*i])
        .map(|(i, h)| (h, i))
        .collect();

    ColumnMap {
        mapped,
        passthrough,
    }
}

/// 키워드 폴백 매칭: 주어진 키워드가 전부 포함된 첫 헤더를 찾는다
///
/// 대소문자 무시 + NFC 정규화 후 부분 문자열 포함 검사.
/// 별칭 표로 못 잡는 외부 보조 시트(랭킹/로스터/가중치)의
/// 헤더를 찾을 때만 쓴다.
pub fn find_column_with_keywords(headers: &[String], keywords: &[&str]) -> Option<usize> {
    headers.iter().position(|h| {
        let cleaned = nfc_trim(h).to_lowercase();
        keywords
            .iter()
            .all(|k| cleaned.contains(&nfc_trim(k).to_lowercase()))
    })
}

/// 여러 키워드 집합 중 하나라도 맞는 첫 헤더 (선언 순서가 우선순위)
pub fn find_column_with_any_keywords(
    headers: &[String],
    keyword_sets: &[&[&str]],
) -> Option<usize> {
    for keywords in keyword_sets {
        if let Some(idx) = find_column_with_keywords(headers, keywords) {
            return Some(idx);
        }
    }
    None
}
