//! 터미널 출력 포맷팅 유틸리티
//!
//! 시작 과정에서 조립 결과를 사람이 읽기 좋은 형태로 출력합니다.

use crate::pipeline::dispatcher::Dispatcher;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  System Started                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(50);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

/// ```text
/// → Step 1: Connecting database
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// ```text
/// ✓ Step 2: Handlers registered (9 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// ```text
///    ├─ CreateExpense: OK
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 디스패처 구성 요약
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║             🎉 REQUEST PIPELINE READY            ║
/// ╚══════════════════════════════════════════════════╝
///    🔗 Behaviors: validation
///    📨 Request types: 9
/// ```
pub fn print_pipeline_summary(dispatcher: &Dispatcher) {
    println!();
    print_boxed_title("🎉 REQUEST PIPELINE READY");
    println!("   🔗 Behaviors: {}", dispatcher.behavior_names().join(" → "));
    println!("   📨 Request types: {}", dispatcher.request_types().len());
    for request_type in dispatcher.request_types() {
        print_sub_task(request_type, "OK");
    }
    println!();
}
