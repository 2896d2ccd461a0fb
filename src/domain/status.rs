// ==========================================
// 스쿼드 플래닝 대시보드 - 상태 도메인
// ==========================================
// 상태는 닫힌 enum 이 아니라 열린 문자열 집합이다.
// 정식 순서 + 데이터에서 관측된 미지 상태(가나다순 뒤 배치)를
// 정규화 패스당 한 번 계산해 데이터셋 전체가 공유한다.
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 데이터셋 전체가 공유하는 상태 전순서
///
/// # 구성 규칙
/// 1. 설정된 정식 상태 순서가 앞에 온다 (관측 여부와 무관하게 전부 유지)
/// 2. 정식 목록에 없는 관측 상태는 가나다순으로 뒤에 붙는다
///
/// 정렬 키와 시각 스타일링이 같은 순서를 쓰도록 단일 출처를 보장한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusDomain {
    ordered: Vec<String>,
    #[serde(skip)]
    ranks: HashMap<String, usize>,
}

impl StatusDomain {
    /// 정식 순서 + 관측 상태의 합집합으로 도메인 구성
    pub fn from_observed<'a, I>(canonical: &[String], observed: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut ordered: Vec<String> = canonical.to_vec();

        let mut unknown: Vec<String> = Vec::new();
        for status in observed {
            if !canonical.iter().any(|c| c == status) && !unknown.iter().any(|u| u == status) {
                unknown.push(status.to_string());
            }
        }
        unknown.sort();
        ordered.extend(unknown);

        Self::from_ordered(ordered)
    }

    fn from_ordered(ordered: Vec<String>) -> Self {
        let ranks = ordered
            .iter()
            .enumerate()
            .map(|(i, s)| (s.clone(), i))
            .collect();
        Self { ordered, ranks }
    }

    /// 상태의 순위 조회 - 도메인 밖 상태는 맨 뒤 취급
    pub fn rank(&self, status: &str) -> usize {
        self.ranks.get(status).copied().unwrap_or(self.ordered.len())
    }

    pub fn contains(&self, status: &str) -> bool {
        self.ranks.contains_key(status)
    }

    pub fn ordered(&self) -> &[String] {
        &self.ordered
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// 역직렬화 이후 순위 맵 재구축 (serde 가 skip 하는 필드)
    pub fn rebuild_ranks(&mut self) {
        self.ranks = self
            .ordered
            .iter()
            .enumerate()
            .map(|(i, s)| (s.clone(), i))
            .collect();
    }
}
