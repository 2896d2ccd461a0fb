// ==========================================
// 전체 플로우 엔드투엔드 테스트
// ==========================================
// 시나리오: 문서 시드 → 로드 → 순서 해석 → 뷰 구성 → 분석 → 스냅샷
// 저장소는 인메모리 구현을 쓰고 산출 수치는 운영 산식으로 고정한다
// ==========================================

use chrono::NaiveDate;
use squad_planner::{
    InMemorySheetStore, PlannerConfig, PlanningApi, RawTable, SheetStore, TaskFilter,
    WorksheetRef,
};

const DOC: &str = "planning-doc";

// ==========================================
// 테스트 헬퍼
// ==========================================

fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
    RawTable::new(
        headers.iter().map(|s| s.to_string()).collect(),
        rows.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect(),
    )
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 마스터 + 랭킹 + 로스터 + 가중치 시트가 갖춰진 문서
fn seeded_api() -> PlanningApi<InMemorySheetStore> {
    let store = InMemorySheetStore::new();

    store
        .write(
            DOC,
            &WorksheetRef::name("master"),
            &table(
                &["Squad (대분류)", "Subproject_Name (소분류)", "시작일 (Start)", "종료일 (End)", "상태 (Status)", "Type (유형)", "정렬 순서"],
                &[
                    &["회원", "로그인 개편", "2023-05-01", "2023-05-20", "진행 중", "대형", "2"],
                    &["회원", "약관 정비", "", "", "진행 중", "", "1"],
                    &["커머스", "결제 연동", "2023-06-01", "2023-07-31", "진행 예정", "", ""],
                    &["전사공통", "사내 행사", "", "", "진행 중", "", ""],
                ],
            ),
        )
        .unwrap();

    store
        .write(
            DOC,
            &WorksheetRef::name("squad_ranking"),
            &table(
                &["Squad", "정렬 순서"],
                &[&["커머스", "1"], &["회원", "2"]],
            ),
        )
        .unwrap();

    store
        .write(
            DOC,
            &WorksheetRef::name("roster"),
            &table(
                &["Squad", "보유 인원 (명)", "과제당 최소 투입 인원"],
                &[&["회원", "10", "2"]],
            ),
        )
        .unwrap();

    store
        .write(
            DOC,
            &WorksheetRef::name("weights"),
            &table(&["Type", "가중치"], &[&["대형", "22"]]),
        )
        .unwrap();

    PlanningApi::new(store, PlannerConfig::default())
}

#[test]
fn test_full_pipeline() {
    let api = seeded_api();
    let today = date(2023, 6, 15);

    // 로드 + 정규화
    let dataset = api
        .load_dataset(DOC, &WorksheetRef::name("master"), false)
        .unwrap();
    assert_eq!(dataset.len(), 4);

    // 순서 해석 (기본 시트 성공, 경고 없음)
    let (squad_order, warnings) = api.resolve_squad_order(
        DOC,
        &WorksheetRef::name("squad_ranking"),
        &WorksheetRef::name("fallback"),
    );
    assert!(warnings.is_empty());
    assert_eq!(squad_order.ordered(), &["커머스", "회원"]);

    // 뷰 구성: 공통 최상단 → 커머스 → 회원(Order 오름차순)
    let view = api.build_view(&dataset, &TaskFilter::default(), None, &squad_order);
    let tasks: Vec<&str> = view.rows.iter().map(|r| r.task.as_str()).collect();
    assert_eq!(tasks, vec!["사내 행사", "결제 연동", "약관 정비", "로그인 개편"]);

    // 상태 필터 결합
    let running_only = api.build_view(
        &dataset,
        &TaskFilter {
            statuses: vec!["진행 중".to_string()],
            squads: vec!["회원".to_string()],
            ..Default::default()
        },
        None,
        &squad_order,
    );
    assert_eq!(running_only.len(), 2);

    // 분석 리포트
    let report = api.analysis_report(
        &dataset,
        DOC,
        &WorksheetRef::name("roster"),
        &WorksheetRef::name("weights"),
        today,
    );
    assert!(report.warnings.is_empty());

    // 가동률: 공통 풀 제외, 회원 부하 23 (22 + 1)
    let member = report
        .utilization
        .iter()
        .find(|m| m.squad == "회원")
        .unwrap();
    assert_eq!(member.capacity_score, 20.0);
    assert_eq!(member.total_load_score, 23.0);
    // (23 − 20) / 2 = 1.5
    assert_eq!(member.shortage, 1.5);
    assert!(!report.utilization.iter().any(|m| m.squad == "전사공통"));

    // 지연: 로그인 개편 1건
    assert_eq!(report.overdue.len(), 1);
    assert_eq!(report.overdue[0].record.task, "로그인 개편");

    // 착수일 예측: 커머스 마지막 종료일 + 1일
    assert_eq!(
        api.predict_start(&dataset, "커머스", today),
        date(2023, 8, 1)
    );
}

#[test]
fn test_snapshot_roundtrip() {
    let api = seeded_api();
    let dataset = api
        .load_dataset(DOC, &WorksheetRef::name("master"), false)
        .unwrap();

    let now = date(2023, 6, 15).and_hms_opt(18, 45, 11).unwrap();
    let snapshot = api
        .save_snapshot(&dataset, DOC, &WorksheetRef::name("master"), now)
        .unwrap();
    assert_eq!(snapshot, "2023-06-15_1845");

    // 마스터를 다시 읽어도 같은 데이터셋 (쓰기 → 읽기 멱등)
    let reloaded = api
        .load_dataset(DOC, &WorksheetRef::name("master"), false)
        .unwrap();
    assert_eq!(dataset, reloaded);

    // 스냅샷 시트도 같은 내용
    let from_snapshot = api
        .load_dataset(DOC, &WorksheetRef::name(snapshot), false)
        .unwrap();
    assert_eq!(dataset, from_snapshot);
}

#[test]
fn test_missing_aux_sheets_degrade_gracefully() {
    let api = seeded_api();
    let dataset = api
        .load_dataset(DOC, &WorksheetRef::name("master"), false)
        .unwrap();

    let report = api.analysis_report(
        &dataset,
        DOC,
        &WorksheetRef::name("없는로스터"),
        &WorksheetRef::name("없는가중치"),
        date(2023, 6, 15),
    );
    // 경고 2건, 용량 0 이어도 산출은 계속
    assert_eq!(report.warnings.len(), 2);
    let member = report
        .utilization
        .iter()
        .find(|m| m.squad == "회원")
        .unwrap();
    assert_eq!(member.capacity_score, 0.0);
    assert_eq!(member.total_load_score, 2.0);
}
