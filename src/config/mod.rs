//! # Configuration Module
//!
//! 계정 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값을 시작 시점에 읽어 명시적인 컨텍스트 객체를 구성합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 비밀번호 해싱 설정
//! - [`auth_config`] - 세션 토큰 서명 키, 메일 발송 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 필수
//! export JWT_SECRET="your-super-secret-key"
//!
//! # 선택
//! export PORT="5000"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="account_service"
//! export ACCOUNT_STORE="mongo"        # mongo | memory
//! export BCRYPT_COST="12"             # 12-31 범위로 보정
//! export PUBLIC_BASE_URL="http://localhost:5000"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
