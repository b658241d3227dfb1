//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 과정(설정 로드, 저장소 연결, 시드 적재)을 터미널에 단계별로 표시합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// 텍스트는 49칸 안에서 중앙 정렬됩니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                Persons Directory                 ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Connecting storage backend
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 처리된 항목 수와 함께 표시합니다
///
/// ```text
/// ✓ Step 2: Seed data applied (12 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 하위 작업의 상태를 트리 형태로 표시합니다
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 시드 데이터 적재 결과를 출력합니다
///
/// ```text
///    ├─ Countries: 5 records loaded
/// ```
pub fn print_seed_loaded(collection: &str, count: usize) {
    println!("   ├─ {}: {} records loaded", collection, count);
}

/// 기동 완료 요약을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║           🎉 PERSONS DIRECTORY READY             ║
/// ╚══════════════════════════════════════════════════╝
///    💾 Storage: memory
///    🌍 Countries: 5
///    👤 Persons: 8
/// ```
pub fn print_final_summary(storage: &str, countries: u64, persons: u64) {
    println!();
    print_boxed_title("🎉 PERSONS DIRECTORY READY");
    println!("   💾 Storage: {}", storage);
    println!("   🌍 Countries: {}", countries);
    println!("   👤 Persons: {}", persons);
    println!();
}
