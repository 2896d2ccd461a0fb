// ==========================================
// 스쿼드 플래닝 대시보드 - 스쿼드 순서
// ==========================================
// 외부 랭킹 시트에서 해석된 스쿼드 전순서.
// 비어 있으면 호출자는 가나다순으로 폴백한다.
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 해석이 끝난 스쿼드 정렬 순서
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SquadOrder {
    ordered: Vec<String>,
    #[serde(skip)]
    ranks: HashMap<String, usize>,
}

impl SquadOrder {
    /// NFC 정규화가 끝난 이름 목록으로 구성 (중복은 첫 등장 유지)
    pub fn new(names: Vec<String>) -> Self {
        let mut ordered: Vec<String> = Vec::new();
        for name in names {
            if !ordered.iter().any(|n| n == &name) {
                ordered.push(name);
            }
        }
        let ranks = ordered
            .iter()
            .enumerate()
            .map(|(i, s)| (s.clone(), i))
            .collect();
        Self { ordered, ranks }
    }

    /// 순서 정보 없음 - 호출자는 가나다순 폴백
    pub fn unranked() -> Self {
        Self::default()
    }

    /// 스쿼드의 순위. 목록에 없으면 None (랭크된 전체 뒤로 정렬됨)
    pub fn rank(&self, squad: &str) -> Option<usize> {
        self.ranks.get(squad).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn ordered(&self) -> &[String] {
        &self.ordered
    }

    /// 특정 스쿼드를 맨 앞으로 이동 (공통 스쿼드 최상단 규칙)
    pub fn promote_to_front(&mut self, squad: &str) {
        if let Some(pos) = self.ordered.iter().position(|n| n == squad) {
            let name = self.ordered.remove(pos);
            self.ordered.insert(0, name);
            self.ranks = self
                .ordered
                .iter()
                .enumerate()
                .map(|(i, s)| (s.clone(), i))
                .collect();
        }
    }
}
