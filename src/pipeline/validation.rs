//! 검증기, 검증기 레지스트리, 검증 비헤이비어
//!
//! 요청 타입마다 0개 이상의 검증기를 등록하고, 검증 비헤이비어가 모든 디스패치를
//! 가로채서 해당 타입의 검증기를 전부 실행합니다. 결과가 하나라도 있으면
//! 핸들러를 호출하지 않고 `AppError::ValidationFailed`로 디스패치 전체를 실패시킵니다.
//!
//! 검증기는 두 종류가 있습니다:
//!
//! - [`DeclarativeRules`]: `validator` 크레이트의 `#[derive(Validate)]` 규칙을
//!   필드/메시지 쌍으로 변환하는 어댑터
//! - 직접 작성한 [`Validator<R>`] 구현체 (여러 필드를 함께 보는 규칙 등)
//!
//! ```rust,ignore
//! let mut validators = ValidatorRegistry::new();
//! validators.register::<CreateExpense, _>(DeclarativeRules);
//! validators.register::<CreateExpense, _>(MonetaryAmountRule);
//!
//! let dispatcher = Dispatcher::builder()
//!     .behavior(ValidationBehavior::new(Arc::new(validators)))
//!     .handler::<CreateExpense, _>(CreateExpenseHandler)
//!     .build();
//! ```

use std::any::{Any, TypeId};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::TypeRegistry;
use crate::pipeline::behavior::{Behavior, Next};
use crate::pipeline::context::RequestContext;
use crate::pipeline::request::{Envelope, Erased, Request};

/// 필드 하나에 대한 규칙 위반
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// 위반이 발생한 필드 이름 (구조체 수준 규칙은 `__all__`)
    pub field: String,
    /// 사용자에게 보여줄 메시지
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 검증 결과. 비어 있으면 유효합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// 다른 검증기의 결과를 뒤에 이어 붙입니다.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

impl From<Vec<FieldError>> for ValidationResult {
    fn from(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// 요청 타입 `R`에 대한 검증 규칙
///
/// 입력에 대한 순수 함수여야 합니다. 같은 요청은 항상 같은 결과를 냅니다.
pub trait Validator<R>: Send + Sync + 'static {
    fn validate(&self, request: &R) -> ValidationResult;
}

/// `#[derive(Validate)]` 규칙을 [`Validator`]로 사용하는 어댑터
///
/// 필드 이름 순으로 정렬하여 결과가 항상 같은 순서가 되도록 합니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclarativeRules;

impl<R> Validator<R> for DeclarativeRules
where
    R: Validate,
{
    fn validate(&self, request: &R) -> ValidationResult {
        match request.validate() {
            Ok(()) => ValidationResult::valid(),
            Err(errors) => {
                let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
                fields.sort_by(|a, b| a.0.cmp(&b.0));

                let mut result = ValidationResult::valid();
                for (field, field_errors) in fields {
                    for error in field_errors.iter() {
                        let message = error
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| error.code.to_string());
                        result.push(field.to_string(), message);
                    }
                }
                result
            }
        }
    }
}

/// 레지스트리에 보관되는 타입이 지워진 검증기
pub trait ErasedValidator: Send + Sync {
    fn validate(&self, message: &(dyn Any + Send)) -> ValidationResult;
}

struct TypedValidator<R, V> {
    validator: V,
    _request: PhantomData<fn(&R)>,
}

impl<R, V> ErasedValidator for TypedValidator<R, V>
where
    R: Request,
    V: Validator<R>,
{
    fn validate(&self, message: &(dyn Any + Send)) -> ValidationResult {
        match message.downcast_ref::<R>() {
            Some(request) => self.validator.validate(request),
            None => {
                log::error!(
                    "검증기 타입 불일치: {}",
                    std::any::type_name::<R>()
                );
                ValidationResult::valid()
            }
        }
    }
}

/// 요청 타입별 검증기 목록
///
/// 시작 시점에 채워진 뒤 `Arc`로 공유되며 이후에는 읽기만 합니다.
#[derive(Default)]
pub struct ValidatorRegistry {
    validators: TypeRegistry<dyn ErasedValidator>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 요청 타입 `R`에 검증기를 추가합니다. 같은 타입에 여러 개를 등록할 수 있습니다.
    pub fn register<R, V>(&mut self, validator: V) -> &mut Self
    where
        R: Request,
        V: Validator<R>,
    {
        self.validators.register::<R>(Arc::new(TypedValidator {
            validator,
            _request: PhantomData,
        }));
        self
    }

    pub fn lookup(&self, type_id: TypeId) -> &[Arc<dyn ErasedValidator>] {
        self.validators.lookup(type_id)
    }

    pub fn lookup_for<R: Request>(&self) -> &[Arc<dyn ErasedValidator>] {
        self.lookup(TypeId::of::<R>())
    }

    /// 검증기가 등록된 요청 타입 수
    pub fn type_count(&self) -> usize {
        self.validators.len()
    }

    /// 등록된 검증기 총 수
    pub fn validator_count(&self) -> usize {
        self.validators.entry_count()
    }

    /// 봉투 안의 메시지에 대해 등록된 검증기를 모두 실행하고 결과를 합칩니다.
    pub fn validate(&self, envelope: &Envelope) -> ValidationResult {
        let mut result = ValidationResult::valid();
        for validator in self.lookup(envelope.type_id()) {
            result.merge(validator.validate(envelope.message()));
        }
        result
    }
}

/// 모든 디스패치에 검증을 강제하는 비헤이비어
pub struct ValidationBehavior {
    validators: Arc<ValidatorRegistry>,
}

impl ValidationBehavior {
    pub fn new(validators: Arc<ValidatorRegistry>) -> Self {
        Self { validators }
    }
}

#[async_trait]
impl Behavior for ValidationBehavior {
    fn name(&self) -> &'static str {
        "validation"
    }

    async fn handle(
        &self,
        envelope: Envelope,
        ctx: &RequestContext,
        next: Next<'_>,
    ) -> AppResult<Erased> {
        if self.validators.lookup(envelope.type_id()).is_empty() {
            return next.run(envelope, ctx).await;
        }

        let result = self.validators.validate(&envelope);
        if !result.is_valid() {
            log::debug!(
                "{} 검증 실패: {} 개 필드 에러",
                envelope.type_name(),
                result.errors().len()
            );
            return Err(AppError::ValidationFailed(result));
        }

        next.run(envelope, ctx).await
    }
}
