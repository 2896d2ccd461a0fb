// ==========================================
// 스쿼드 플래닝 대시보드 - 스쿼드 순서 해석기
// ==========================================
// 책임: 외부 랭킹 시트(기본/폴백)에서 스쿼드 전순서 해석
// 실패 정책: 어떤 경우에도 에러를 내지 않는다.
// 시트 결손/헤더 불일치는 경고 목록으로 수집하고 빈 순서를 돌려준다.
// ==========================================

use crate::config::PlannerConfig;
use crate::domain::{RawTable, SquadOrder};
use crate::engine::columns::{find_column_with_any_keywords, nfc_trim};
use tracing::debug;

/// 비수치 순위 값의 센티널 (숫자 순위 전체 뒤로)
const RANK_SENTINEL: f64 = 999.0;

// ==========================================
// SquadOrderProvider - 순서 해석기
// ==========================================
pub struct SquadOrderProvider {
    config: PlannerConfig,
}

/// 해석 결과 - 순서와 함께 경고를 올려보낸다
#[derive(Debug, Clone, Default)]
pub struct SquadOrderResolution {
    pub order: SquadOrder,
    pub warnings: Vec<String>,
}

impl SquadOrderProvider {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// 기본 시트 → 폴백 시트 순으로 순서 해석
    ///
    /// 둘 다 실패하면 빈 순서 (호출자는 가나다순 폴백)
    pub fn resolve(
        &self,
        primary: Option<&RawTable>,
        fallback: Option<&RawTable>,
    ) -> SquadOrderResolution {
        let mut warnings = Vec::new();

        if let Some(table) = primary {
            match self.parse_table(table) {
                Some(order) => {
                    return SquadOrderResolution { order, warnings };
                }
                None => warnings.push(
                    "스쿼드 랭킹 시트에서 스쿼드 컬럼을 찾지 못해 폴백 시트를 사용합니다"
                        .to_string(),
                ),
            }
        } else {
            warnings.push("스쿼드 랭킹 시트를 읽지 못해 폴백 시트를 사용합니다".to_string());
        }

        if let Some(table) = fallback {
            if let Some(order) = self.parse_table(table) {
                return SquadOrderResolution { order, warnings };
            }
            warnings.push(
                "폴백 시트에서도 스쿼드 컬럼을 찾지 못했습니다. 가나다순으로 정렬합니다"
                    .to_string(),
            );
        } else {
            warnings
                .push("폴백 시트도 읽지 못했습니다. 가나다순으로 정렬합니다".to_string());
        }

        SquadOrderResolution {
            order: SquadOrder::unranked(),
            warnings,
        }
    }

    /// 랭킹 표 한 장 파싱
    ///
    /// - 스쿼드 컬럼: "squad"/"스쿼드" 키워드 (필수, 없으면 None)
    /// - 순위 컬럼: "order"/"정렬"/"순서"/"순위" 키워드 (없으면 등장 순서 사용)
    /// - 비수치 순위는 센티널(999)로 뒤로 보내되 행 자체는 유지
    fn parse_table(&self, table: &RawTable) -> Option<SquadOrder> {
        let squad_idx =
            find_column_with_any_keywords(&table.headers, &[&["squad"], &["스쿼드"]])?;
        let rank_idx = find_column_with_any_keywords(
            &table.headers,
            &[&["order"], &["정렬"], &["순서"], &["순위"]],
        );

        // (순위, 등장 인덱스, 이름) - 순위 동률은 등장 순서 유지
        let mut entries: Vec<(f64, usize, String)> = Vec::new();
        for (i, _) in table.rows.iter().enumerate() {
            let name = nfc_trim(&table.cell(i, squad_idx));
            if name.is_empty() {
                continue;
            }
            let rank = match rank_idx {
                Some(col) => table
                    .cell(i, col)
                    .trim()
                    .parse::<f64>()
                    .unwrap_or(RANK_SENTINEL),
                None => i as f64,
            };
            entries.push((rank, i, name));
        }

        if entries.is_empty() {
            return None;
        }

        entries.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.1.cmp(&b.1))
        });

        let mut order =
            SquadOrder::new(entries.into_iter().map(|(_, _, name)| name).collect());

        // 공통 스쿼드는 순위와 무관하게 맨 앞으로
        let common: Vec<String> = order
            .ordered()
            .iter()
            .filter(|n| n.contains(&self.config.common_squad_marker))
            .cloned()
            .collect();
        for name in common.into_iter().rev() {
            order.promote_to_front(&name);
        }

        debug!(count = order.ordered().len(), "스쿼드 순서 해석 완료");
        Some(order)
    }
}

impl Default for SquadOrderProvider {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}
