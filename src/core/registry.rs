//! # Type Registry - 요청 타입별 등록 테이블
//!
//! 요청 메시지의 런타임 타입(`TypeId`)을 키로 하여 핸들러와 검증기를 보관하는
//! 등록 테이블입니다. 디스패처의 핸들러 테이블과 검증기 레지스트리가 모두
//! 이 구조를 공유합니다.
//!
//! ## 동작 원리
//!
//! ```text
//! 1. 시작 시점 (Composition Root)
//!    ├─ registry.register::<CreateExpense>(entry)
//!    ├─ registry.register::<CreateExpense>(another_entry)   ← 같은 타입에 여러 개 허용
//!    └─ registry.register::<GetExpense>(entry)
//!
//! 2. 요청 처리 시점 (읽기 전용)
//!    ├─ TypeId::of::<R>() → 등록 항목 슬라이스 조회 (O(1))
//!    └─ 등록이 없으면 빈 슬라이스
//! ```
//!
//! 런타임 리플렉션이나 전역 상태 없이 명시적으로 채워지며, 시작 이후에는
//! 변경되지 않으므로 잠금 없이 여러 요청이 동시에 읽을 수 있습니다.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

/// 하나의 요청 타입에 대한 등록 정보
pub struct Registration<T: ?Sized> {
    /// 진단 메시지에 쓰이는 짧은 타입 이름 (예: `CreateExpense`)
    pub type_name: &'static str,
    /// 등록 순서대로 보관된 항목들
    pub entries: Vec<Arc<T>>,
}

/// `TypeId` → 등록 항목 목록 매핑
///
/// 항목은 `Arc<T>`로 보관되며 `T`는 보통 `dyn Trait` 객체입니다.
pub struct TypeRegistry<T: ?Sized> {
    registrations: HashMap<TypeId, Registration<T>>,
}

impl<T: ?Sized> TypeRegistry<T> {
    pub fn new() -> Self {
        Self {
            registrations: HashMap::new(),
        }
    }

    /// 키 타입 `K`에 항목을 추가합니다.
    ///
    /// 같은 키로 여러 번 호출하면 항목이 누적됩니다. 중복 여부 판단은
    /// 호출자(디스패처의 `verify`, 검증기 레지스트리)가 결정합니다.
    pub fn register<K: 'static>(&mut self, entry: Arc<T>) {
        let type_name = short_type_name(std::any::type_name::<K>());

        log::debug!("📦 Registering {} entry", type_name);

        self.registrations
            .entry(TypeId::of::<K>())
            .or_insert_with(|| Registration {
                type_name,
                entries: Vec::new(),
            })
            .entries
            .push(entry);
    }

    /// 등록된 항목을 조회합니다. 등록이 없으면 빈 슬라이스를 반환합니다.
    pub fn lookup(&self, type_id: TypeId) -> &[Arc<T>] {
        self.registrations
            .get(&type_id)
            .map(|registration| registration.entries.as_slice())
            .unwrap_or(&[])
    }

    /// 등록된 타입 수
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// 모든 항목 수 (타입별 항목 수의 합)
    pub fn entry_count(&self) -> usize {
        self.registrations.values().map(|r| r.entries.len()).sum()
    }

    /// 타입 이름 순으로 정렬된 등록 정보
    pub fn registrations(&self) -> Vec<&Registration<T>> {
        let mut registrations: Vec<_> = self.registrations.values().collect();
        registrations.sort_by_key(|r| r.type_name);
        registrations
    }
}

impl<T: ?Sized> Default for TypeRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// 타입 이름에서 모듈 경로를 제거합니다.
///
/// `std::any::type_name::<T>()`는 전체 경로를 포함하므로
/// (예: `expense_tracker_api::services::expenses::CreateExpense`)
/// 마지막 세그먼트만 남깁니다. 제네릭 인자가 있으면 바깥 타입 기준으로 자릅니다.
pub fn short_type_name(type_name: &'static str) -> &'static str {
    let outer = match type_name.find('<') {
        Some(pos) => &type_name[..pos],
        None => type_name,
    };

    match outer.rfind("::") {
        Some(pos) => &type_name[pos + 2..],
        None => type_name,
    }
}
