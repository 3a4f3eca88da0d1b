//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결 풀링은 드라이버가 담당하며, 이 모듈은 연결 생성과 상태 확인을 제공합니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="ticket_system"
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::DatabaseConfig;
//! use crate::core::registry::ServiceLocator;
//! use crate::db::Database;
//!
//! let database = Database::new(&DatabaseConfig::from_env()).await?;
//! ServiceLocator::set(Arc::new(database));
//! ```

use log::info;
use mongodb::{bson::doc, options::ClientOptions, Client};

use crate::config::DatabaseConfig;
use crate::core::errors::{AppError, AppResult};

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 클라이언트를 만든 뒤 `ping` 명령으로 연결 상태를 검증합니다.
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB URI 파싱 실패: {}", e)))?;

        client_options.app_name = Some(config.app_name.clone());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let database = Self {
            client,
            database_name: config.database_name.clone(),
        };
        database.ping().await?;

        info!("✅ MongoDB 연결 성공: {}", database.database_name);

        Ok(database)
    }

    /// 연결 상태를 확인합니다.
    pub async fn ping(&self) -> AppResult<()> {
        self.get_database()
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB ping 실패: {}", e)))?;

        Ok(())
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    ///
    /// ```rust,ignore
    /// let managers = database.get_database().collection::<Document>("managers");
    /// ```
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
