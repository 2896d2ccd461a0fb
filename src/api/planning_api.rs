// ==========================================
// 스쿼드 플래닝 대시보드 - 파이프라인 파사드
// ==========================================
// 책임: 시트 읽기 → 정규화 → 정렬/필터 → 분석 → 쓰기의 조립
// 엔진은 모두 무상태이며 여기서 같은 설정으로 묶인다.
// 보조 시트 결손은 경고로 수집하고 파이프라인은 계속 간다.
// ==========================================

use crate::config::PlannerConfig;
use crate::domain::{
    IssueRecord, RawTable, SquadOrder, TaskDataset, UtilizationMetric, WorkloadSummary,
};
use crate::engine::{
    FilterEngine, IssueClassifier, OrderingEngine, SchemaNormalizer, SquadOrderProvider,
    StartDatePredictor, TaskFilter, UtilizationEngine, WorkloadEngine,
};
use crate::engine::roster::{parse_roster, parse_weights};
use crate::error::PlannerResult;
use crate::sheet::{dataset_to_table, snapshot_name, SheetStore, WorksheetRef};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::{info, warn};

// ==========================================
// 분석 리포트 (요청마다 재산출, 저장하지 않음)
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub workload: Vec<WorkloadSummary>,
    pub utilization: Vec<UtilizationMetric>,
    pub issues: Vec<IssueRecord>,
    pub overdue: Vec<IssueRecord>,
    /// 보조 시트 결손 등 비차단 경고
    pub warnings: Vec<String>,
}

// ==========================================
// PlanningApi
// ==========================================
pub struct PlanningApi<S: SheetStore> {
    store: S,
    config: PlannerConfig,
}

impl<S: SheetStore> PlanningApi<S> {
    pub fn new(store: S, config: PlannerConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 마스터 워크시트 읽기 + 정규화
    ///
    /// `strict` 면 식별자(Squad/Task) 결손 행을 버린다.
    pub fn load_dataset(
        &self,
        doc_id: &str,
        worksheet: &WorksheetRef,
        strict: bool,
    ) -> PlannerResult<TaskDataset> {
        let table = self.store.read(doc_id, worksheet)?;
        let normalizer = SchemaNormalizer::new(self.config.clone());
        let dataset = if strict {
            normalizer.normalize_strict(&table)?
        } else {
            normalizer.normalize(&table)?
        };
        info!(doc_id, worksheet = %worksheet, rows = dataset.len(), "데이터셋 로드 완료");
        Ok(dataset)
    }

    /// 스쿼드 순서 해석 (기본 → 폴백, 실패는 경고)
    pub fn resolve_squad_order(
        &self,
        doc_id: &str,
        primary: &WorksheetRef,
        fallback: &WorksheetRef,
    ) -> (SquadOrder, Vec<String>) {
        let primary_table = self.read_optional(doc_id, primary);
        let fallback_table = self.read_optional(doc_id, fallback);
        let provider = SquadOrderProvider::new(self.config.clone());
        let resolution =
            provider.resolve(primary_table.as_ref(), fallback_table.as_ref());
        for warning in &resolution.warnings {
            warn!("{warning}");
        }
        (resolution.order, resolution.warnings)
    }

    /// 조회 뷰 구성: 필터 → 정렬
    pub fn build_view(
        &self,
        dataset: &TaskDataset,
        filter: &TaskFilter,
        user_column: Option<&str>,
        squad_order: &SquadOrder,
    ) -> TaskDataset {
        let filtered = FilterEngine::new(self.config.clone()).apply(dataset, filter);
        OrderingEngine::new(self.config.clone()).sort(filtered, user_column, squad_order)
    }

    /// 분석 리포트 산출
    ///
    /// 로스터/가중치 시트는 없어도 되고, 없으면 용량 0/가중치 1.0 으로
    /// 계산을 계속하며 경고에 남긴다.
    pub fn analysis_report(
        &self,
        dataset: &TaskDataset,
        doc_id: &str,
        roster_sheet: &WorksheetRef,
        weight_sheet: &WorksheetRef,
        today: NaiveDate,
    ) -> AnalysisReport {
        let mut warnings = Vec::new();

        let roster = match self.read_optional(doc_id, roster_sheet) {
            Some(table) => {
                let parse = parse_roster(&table);
                warnings.extend(parse.warnings);
                parse.records
            }
            None => {
                warnings.push(
                    "인원 로스터 시트를 읽지 못해 용량 0으로 계산합니다".to_string(),
                );
                Vec::new()
            }
        };
        let weights = match self.read_optional(doc_id, weight_sheet) {
            Some(table) => parse_weights(&table),
            None => {
                warnings.push(
                    "유형 가중치 시트를 읽지 못해 기본 가중치 1.0 을 사용합니다".to_string(),
                );
                Default::default()
            }
        };

        let classifier = IssueClassifier::new(self.config.clone());
        AnalysisReport {
            workload: WorkloadEngine::new(self.config.clone()).summarize(dataset),
            utilization: UtilizationEngine::new(self.config.clone())
                .compute(dataset, &roster, &weights, today),
            issues: classifier.issues(dataset),
            overdue: classifier.overdue(dataset, today),
            warnings,
        }
    }

    /// 스쿼드의 다음 착수 가능일
    pub fn predict_start(
        &self,
        dataset: &TaskDataset,
        squad: &str,
        today: NaiveDate,
    ) -> NaiveDate {
        StartDatePredictor::new().predict(dataset, squad, today)
    }

    /// 마스터 덮어쓰기 + 스냅샷 생성. 스냅샷 워크시트 이름을 돌려준다.
    pub fn save_snapshot(
        &self,
        dataset: &TaskDataset,
        doc_id: &str,
        master: &WorksheetRef,
        now: NaiveDateTime,
    ) -> PlannerResult<String> {
        let table = dataset_to_table(dataset);
        self.store.write(doc_id, master, &table)?;

        let snapshot = snapshot_name(now);
        self.store
            .write(doc_id, &WorksheetRef::name(snapshot.clone()), &table)?;
        info!(doc_id, snapshot = %snapshot, rows = table.row_count(), "스냅샷 저장 완료");
        Ok(snapshot)
    }

    /// 보조 시트는 읽기 실패를 에러로 올리지 않는다
    fn read_optional(&self, doc_id: &str, worksheet: &WorksheetRef) -> Option<RawTable> {
        match self.store.read(doc_id, worksheet) {
            Ok(table) => Some(table),
            Err(e) => {
                warn!(doc_id, worksheet = %worksheet, error = %e, "보조 시트 읽기 실패");
                None
            }
        }
    }
}
