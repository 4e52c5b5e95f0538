//! # Account HTTP Handlers
//!
//! 계정 API 엔드포인트입니다. 요청 파싱과 응답 직렬화만 담당하고
//! 모든 판단은 [`AccountService`]에 위임합니다.
//!
//! | 메서드 | 경로 | 성공 응답 |
//! |--------|------|-----------|
//! | `POST` | `/api/signup` | 201 `{message}` |
//! | `GET` | `/api/confirm/{token}` | 200 `{message}` |
//! | `POST` | `/api/login` | 200 `{token}` |
//! | `GET` | `/api/profile` | 200 `AccountProfile` |
//!
//! 실패 응답은 `AppError`의 `ResponseError` 구현이 만듭니다.

use actix_web::http::header;
use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::accounts::{LoginRequest, MessageResponse, SignupRequest, TokenResponse};
use crate::services::accounts::AccountService;
use crate::utils::string_utils::extract_bearer_token;

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /api/signup`
#[post("/signup")]
pub async fn signup(
    service: web::Data<AccountService>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    service.signup(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(MessageResponse::new(
        "User registered successfully. Please check your email to confirm your account.",
    )))
}

/// 이메일 확인 핸들러
///
/// # Endpoint
/// `GET /api/confirm/{token}`
#[get("/confirm/{token}")]
pub async fn confirm_email(
    service: web::Data<AccountService>,
    token: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.confirm_email(&token).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Email confirmed successfully")))
}

/// 로그인 핸들러
///
/// # Endpoint
/// `POST /api/login`
#[post("/login")]
pub async fn login(
    service: web::Data<AccountService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let token = service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

/// 프로필 조회 핸들러
///
/// `Authorization: Bearer <token>` 헤더의 세션 토큰을 사용합니다.
///
/// # Endpoint
/// `GET /api/profile`
#[get("/profile")]
pub async fn profile(
    service: web::Data<AccountService>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(extract_bearer_token);

    let profile = service.get_profile(token).await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// JSON 본문 추출 설정
///
/// 파싱할 수 없는 본문은 400 `{message}`로 응답합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("JSON 본문 파싱 실패: {}", err);
        AppError::ValidationError(format!("Invalid request body: {}", err)).into()
    })
}
