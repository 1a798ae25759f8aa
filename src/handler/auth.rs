use std::sync::Arc;

use axum::{
    middleware,
    response::IntoResponse,
    routing::post,
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::{
        orgdb::OrganizationExt, partnerdb::PartnerExt, userdb::UserExt, workerdb::WorkerExt,
    },
    dtos::{
        parse_skills, AuthResponseDto, AuthUserDto, CreateProfileDto, LoginUserDto,
        ProfileData, ProfileResponseDto, RegisterPartnerDto, RegisterUserDto, UpdateProfileDto,
    },
    error::{ErrorMessage, HttpError},
    middleware::{auth, AuthSubject},
    models::usermodel::{SubjectRole, UserRole},
    utils::{password, token},
    AppState,
};

pub fn auth_handler() -> Router {
    let public = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/partner/register", post(register_partner))
        .route("/partner/login", post(login_partner));

    let protected = Router::new()
        .route(
            "/profile",
            post(create_profile).get(get_profile).put(update_profile),
        )
        .layer(middleware::from_fn(auth));

    public.merge(protected)
}

fn issue_token(app_state: &AppState, subject_id: &str, role: &str) -> Result<String, HttpError> {
    token::create_token(
        subject_id,
        role,
        app_state.env.jwt_secret.as_bytes(),
        app_state.env.jwt_maxage,
    )
    .map_err(|e| HttpError::server_error(e.to_string()))
}

pub async fn register(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let existing = app_state
        .db_client
        .get_user(None, Some(&body.phone), None)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if existing.is_some() {
        return Err(HttpError::bad_request(ErrorMessage::PhoneExist.to_string()));
    }

    let hashed_password =
        password::hash(&body.password).map_err(|e| HttpError::server_error(e.to_string()))?;

    let user = app_state
        .db_client
        .save_user(body.email, body.phone, hashed_password)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                HttpError::bad_request(ErrorMessage::PhoneExist.to_string())
            }
            _ => HttpError::server_error(e.to_string()),
        })?;

    let token = issue_token(&app_state, &user.id.to_string(), SubjectRole::None.to_str())?;

    Ok(Json(AuthResponseDto {
        success: true,
        message: "Account created successfully".to_string(),
        token,
        user: AuthUserDto {
            id: user.id.to_string(),
            phone: user.phone,
            role: SubjectRole::None.to_str().to_string(),
            is_profile_complete: None,
        },
    }))
}

pub async fn login(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<LoginUserDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    // The identifier is an email when it carries '@', a phone number otherwise.
    let result = if body.identifier.contains('@') {
        app_state
            .db_client
            .get_user(None, None, Some(&body.identifier))
            .await
    } else {
        app_state
            .db_client
            .get_user(None, Some(&body.identifier), None)
            .await
    }
    .map_err(|e| HttpError::server_error(e.to_string()))?;

    let user =
        result.ok_or(HttpError::bad_request(ErrorMessage::WrongCredentials.to_string()))?;

    let password_matched = password::compare(&body.password, &user.password)
        .map_err(|_| HttpError::bad_request(ErrorMessage::WrongCredentials.to_string()))?;

    if !password_matched {
        return Err(HttpError::bad_request(
            ErrorMessage::WrongCredentials.to_string(),
        ));
    }

    // Once a profile is attached the token subject becomes the profile id, so every
    // downstream reference (jobs, applications, referrals) is a profile reference.
    let subject_id = user.profile_id.unwrap_or(user.id);
    let role = SubjectRole::from(user.role);

    let token = issue_token(&app_state, &subject_id.to_string(), role.to_str())?;

    Ok(Json(AuthResponseDto {
        success: true,
        message: "Login successful".to_string(),
        token,
        user: AuthUserDto {
            id: subject_id.to_string(),
            phone: user.phone,
            role: role.to_str().to_string(),
            is_profile_complete: Some(user.role != UserRole::None),
        },
    }))
}

pub async fn create_profile(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(subject): Extension<AuthSubject>,
    Json(body): Json<CreateProfileDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    if subject.role != SubjectRole::None {
        return Err(HttpError::bad_request(ErrorMessage::ProfileExist.to_string()));
    }

    let user = app_state
        .db_client
        .get_user(Some(subject.id), None, None)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::unauthorized(ErrorMessage::UserNoLongerExist.to_string()))?;

    if user.role != UserRole::None {
        return Err(HttpError::bad_request(ErrorMessage::ProfileExist.to_string()));
    }

    let (role, profile_id) = match body.role.as_str() {
        "worker" => {
            let skills = parse_skills(body.skills.as_ref());
            let worker = app_state
                .db_client
                .save_worker(
                    body.name,
                    body.age,
                    skills,
                    body.experience,
                    body.location,
                    user.phone.clone(),
                    body.email,
                    body.expected_salary,
                    body.availability,
                    user.password.clone(),
                    None,
                )
                .await
                .map_err(|e| HttpError::server_error(e.to_string()))?;
            (UserRole::Worker, worker.id)
        }
        "organization" => {
            let organization = app_state
                .db_client
                .save_organization(
                    body.name,
                    body.location,
                    user.phone.clone(),
                    user.email.clone().or(body.email),
                    user.password.clone(),
                )
                .await
                .map_err(|e| HttpError::server_error(e.to_string()))?;
            (UserRole::Organization, organization.id)
        }
        _ => return Err(HttpError::bad_request("Invalid role")),
    };

    let user = app_state
        .db_client
        .attach_profile(user.id, role, profile_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let role = SubjectRole::from(role);
    let token = issue_token(&app_state, &profile_id.to_string(), role.to_str())?;

    Ok(Json(AuthResponseDto {
        success: true,
        message: "Profile created successfully".to_string(),
        token,
        user: AuthUserDto {
            id: profile_id.to_string(),
            phone: user.phone,
            role: role.to_str().to_string(),
            is_profile_complete: Some(true),
        },
    }))
}

pub async fn get_profile(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(subject): Extension<AuthSubject>,
) -> Result<impl IntoResponse, HttpError> {
    match subject.role {
        SubjectRole::None => Ok(Json(ProfileResponseDto::none())),
        SubjectRole::Worker => {
            let worker = app_state
                .db_client
                .get_worker(Some(subject.id), None, None)
                .await
                .map_err(|e| HttpError::server_error(e.to_string()))?
                .ok_or_else(|| HttpError::not_found("User not found"))?;

            Ok(Json(ProfileResponseDto {
                success: true,
                role: subject.role.to_str().to_string(),
                profile: Some(ProfileData::Worker(worker)),
            }))
        }
        SubjectRole::Organization => {
            let organization = app_state
                .db_client
                .get_organization(Some(subject.id), None, None)
                .await
                .map_err(|e| HttpError::server_error(e.to_string()))?
                .ok_or_else(|| HttpError::not_found("User not found"))?;

            Ok(Json(ProfileResponseDto {
                success: true,
                role: subject.role.to_str().to_string(),
                profile: Some(ProfileData::Organization(organization)),
            }))
        }
        SubjectRole::ReferralPartner => Err(HttpError::bad_request(
            "Partner accounts do not carry a worker/organization profile",
        )),
    }
}

pub async fn update_profile(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(subject): Extension<AuthSubject>,
    Json(body): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    match subject.role {
        SubjectRole::Worker => {
            let skills = body.skills.as_ref().map(|value| parse_skills(Some(value)));
            let worker = app_state
                .db_client
                .update_worker_profile(
                    subject.id,
                    body.name,
                    body.age,
                    skills,
                    body.experience,
                    body.location,
                    body.expected_salary,
                    body.availability,
                )
                .await
                .map_err(|e| HttpError::server_error(e.to_string()))?;

            Ok(Json(ProfileResponseDto {
                success: true,
                role: subject.role.to_str().to_string(),
                profile: Some(ProfileData::Worker(worker)),
            }))
        }
        SubjectRole::Organization => {
            let organization = app_state
                .db_client
                .update_organization_profile(subject.id, body.name, body.location, body.email)
                .await
                .map_err(|e| HttpError::server_error(e.to_string()))?;

            Ok(Json(ProfileResponseDto {
                success: true,
                role: subject.role.to_str().to_string(),
                profile: Some(ProfileData::Organization(organization)),
            }))
        }
        _ => Err(HttpError::bad_request("No profile to update")),
    }
}

pub async fn register_partner(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<RegisterPartnerDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let existing = app_state
        .db_client
        .get_partner(None, None, Some(&body.email))
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if existing.is_some() {
        return Err(HttpError::unique_constraint_violation(
            "Email already registered",
        ));
    }

    let existing = app_state
        .db_client
        .get_partner(None, Some(&body.phone), None)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if existing.is_some() {
        return Err(HttpError::unique_constraint_violation(
            ErrorMessage::PhoneExist.to_string(),
        ));
    }

    let hashed_password =
        password::hash(&body.password).map_err(|e| HttpError::server_error(e.to_string()))?;

    let partner = app_state
        .db_client
        .save_partner(body.name, body.email, body.phone, hashed_password)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                HttpError::unique_constraint_violation("Email or phone already registered")
            }
            _ => HttpError::server_error(e.to_string()),
        })?;

    let token = issue_token(
        &app_state,
        &partner.id.to_string(),
        SubjectRole::ReferralPartner.to_str(),
    )?;

    Ok(Json(AuthResponseDto {
        success: true,
        message: "Partner account created successfully".to_string(),
        token,
        user: AuthUserDto {
            id: partner.id.to_string(),
            phone: partner.phone,
            role: SubjectRole::ReferralPartner.to_str().to_string(),
            is_profile_complete: None,
        },
    }))
}

pub async fn login_partner(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<LoginUserDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let result = if body.identifier.contains('@') {
        app_state
            .db_client
            .get_partner(None, None, Some(&body.identifier))
            .await
    } else {
        app_state
            .db_client
            .get_partner(None, Some(&body.identifier), None)
            .await
    }
    .map_err(|e| HttpError::server_error(e.to_string()))?;

    let partner =
        result.ok_or(HttpError::bad_request(ErrorMessage::WrongCredentials.to_string()))?;

    let password_matched = password::compare(&body.password, &partner.password)
        .map_err(|_| HttpError::bad_request(ErrorMessage::WrongCredentials.to_string()))?;

    if !password_matched {
        return Err(HttpError::bad_request(
            ErrorMessage::WrongCredentials.to_string(),
        ));
    }

    let token = issue_token(
        &app_state,
        &partner.id.to_string(),
        SubjectRole::ReferralPartner.to_str(),
    )?;

    Ok(Json(AuthResponseDto {
        success: true,
        message: "Login successful".to_string(),
        token,
        user: AuthUserDto {
            id: partner.id.to_string(),
            phone: partner.phone,
            role: SubjectRole::ReferralPartner.to_str().to_string(),
            is_profile_complete: None,
        },
    }))
}
