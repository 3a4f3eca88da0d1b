//! # Service Registry
//!
//! 타입 기반 싱글톤 레지스트리와 `inventory` 기반 컴포넌트 자동 등록을 제공합니다.
//!
//! ## 동작 방식
//!
//! 1. `main`에서 외부 자원(예: [`Database`](crate::db::Database))을 [`ServiceLocator::set`]으로 등록
//! 2. 각 리포지토리/서비스 모듈은 [`service_singleton!`](crate::service_singleton) /
//!    [`repository_singleton!`](crate::repository_singleton)으로 싱글톤과 생성자를 등록
//! 3. [`ServiceLocator::initialize_all`]이 리포지토리 → 서비스 순서로 인스턴스를 만들고
//!    리포지토리의 [`Repository::init`]을 호출 (인덱스 생성)
//!
//! ```text
//! ServiceLocator::set(Arc<Database>)
//!          │
//!          ▼
//! initialize_all()
//!   ├─ RepositoryRegistration × N → Repository::init()
//!   └─ ServiceRegistration × M    → 싱글톤 생성
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::core::errors::{AppResult, ErrorContext};
use crate::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
};

/// 리포지토리 컴포넌트 trait
///
/// MongoDB 컬렉션을 소유하는 컴포넌트가 구현합니다.
#[async_trait]
pub trait Repository: Send + Sync {
    /// 로그에 표시할 이름
    fn name(&self) -> &str;

    /// 이 리포지토리가 다루는 컬렉션 이름들
    fn collection_names(&self) -> Vec<&str>;

    /// 시작 시 한 번 호출됩니다. 인덱스 생성 등을 수행합니다.
    async fn init(&self) -> AppResult<()>;
}

/// 서비스 등록 정보
pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보
pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Arc<dyn Repository>,
}

/// 서비스 싱글톤을 정의하고 `initialize_all` 대상으로 등록합니다.
///
/// 대상 타입은 인자 없는 `fn new() -> Self`를 제공해야 합니다.
///
/// ```rust,ignore
/// crate::service_singleton!(ManagerService, "manager_service");
///
/// let service = ManagerService::instance();
/// ```
#[macro_export]
macro_rules! service_singleton {
    ($ty:ident, $name:literal) => {
        impl $ty {
            /// 싱글톤 인스턴스를 가져옵니다.
            pub fn instance() -> ::std::sync::Arc<Self> {
                static INSTANCE: ::once_cell::sync::OnceCell<::std::sync::Arc<$ty>> =
                    ::once_cell::sync::OnceCell::new();

                INSTANCE
                    .get_or_init(|| ::std::sync::Arc::new(Self::new()))
                    .clone()
            }
        }

        fn singleton_constructor() -> Box<dyn ::std::any::Any + Send + Sync> {
            Box::new($ty::instance())
        }

        ::inventory::submit! {
            $crate::core::registry::ServiceRegistration {
                name: $name,
                constructor: singleton_constructor,
            }
        }
    };
}

/// 리포지토리 싱글톤을 정의하고 `initialize_all` 대상으로 등록합니다.
///
/// 대상 타입은 `fn new() -> Self`와 [`Repository`] 구현을 제공해야 합니다.
#[macro_export]
macro_rules! repository_singleton {
    ($ty:ident, $name:literal) => {
        impl $ty {
            /// 싱글톤 인스턴스를 가져옵니다.
            pub fn instance() -> ::std::sync::Arc<Self> {
                static INSTANCE: ::once_cell::sync::OnceCell<::std::sync::Arc<$ty>> =
                    ::once_cell::sync::OnceCell::new();

                INSTANCE
                    .get_or_init(|| ::std::sync::Arc::new(Self::new()))
                    .clone()
            }
        }

        fn singleton_constructor() -> ::std::sync::Arc<dyn $crate::core::registry::Repository> {
            $ty::instance()
        }

        ::inventory::submit! {
            $crate::core::registry::RepositoryRegistration {
                name: $name,
                constructor: singleton_constructor,
            }
        }
    };
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 타입 기반 싱글톤 레지스트리
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 등록된 인스턴스를 조회합니다.
    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR
            .instances
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        instances
            .get(&TypeId::of::<T>())
            .and_then(|instance| instance.clone().downcast::<T>().ok())
    }

    /// 등록된 인스턴스를 조회합니다.
    ///
    /// # Panics
    ///
    /// `set`으로 등록되지 않은 타입을 요청하면 패닉합니다. 시작 순서가 잘못된
    /// 경우에만 발생하며 요청 처리 중에는 발생하지 않습니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        Self::try_get::<T>().unwrap_or_else(|| {
            panic!(
                "Service not found: {}. Register it with ServiceLocator::set() before use",
                std::any::type_name::<T>()
            )
        })
    }

    /// 인스턴스를 등록합니다. 같은 타입이 이미 있으면 교체합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = std::any::type_name::<T>();
        let clean_name = type_name.rsplit("::").next().unwrap_or(type_name);
        log::info!("📦 Registering: {}", clean_name);

        let mut instances = LOCATOR
            .instances
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 모든 리포지토리와 서비스를 생성하고 초기화합니다.
    pub async fn initialize_all() -> AppResult<()> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");

            for registration in repo_registrations {
                let repository = (registration.constructor)();
                print_sub_task(
                    registration.name,
                    &format!("Created ({})", repository.collection_names().join(", ")),
                );

                repository
                    .init()
                    .await
                    .with_context(|| format!("{} 초기화 실패", repository.name()))?;
                print_sub_task(registration.name, "✓ Indexes ready");
            }

            print_step_complete(1, "Repository instances created", repo_count);
        }

        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        if service_count > 0 {
            print_step_start(2, "Creating Service instances");

            for registration in service_registrations {
                let _instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);
        Ok(())
    }
}
