//! Dashboard CRUD under `/api/clinic`.
//!
//! Every route runs behind the bearer-token middleware; handlers load the
//! target clinic and compare its `owner` subject against the caller
//! before mutating. Photo uploads arrive as multipart form data with a
//! `file` part and an optional `caption` part.

use axum::extract::{Extension, Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use medvoy_auth::AuthenticatedUser;
use medvoy_store::{Clinic, ClinicDraft, ClinicPhoto, Doctor, DoctorDraft};

use crate::error::{Error, Result};
use crate::state::{AppState, MAX_UPLOAD_BYTES};

/// Load a clinic and enforce that the caller owns it.
async fn owned_clinic(state: &AppState, user: &AuthenticatedUser, id: Uuid) -> Result<Clinic> {
    let clinic = state.clinics.clinic(id).await?;
    if !user.owns(&clinic.owner) {
        return Err(Error::Forbidden);
    }
    Ok(clinic)
}

/// `POST /api/clinic` — create a profile owned by the caller.
pub async fn create_clinic(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(draft): Json<ClinicDraft>,
) -> Result<(StatusCode, Json<Clinic>)> {
    if draft.name.trim().is_empty() {
        return Err(Error::BadRequest("clinic name must not be empty".into()));
    }
    let clinic = state.clinics.create_clinic(&user.subject, draft).await?;
    Ok((StatusCode::CREATED, Json(clinic)))
}

/// `PUT /api/clinic/{id}` — replace profile fields.
pub async fn update_clinic(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(draft): Json<ClinicDraft>,
) -> Result<Json<Clinic>> {
    owned_clinic(&state, &user, id).await?;
    if draft.name.trim().is_empty() {
        return Err(Error::BadRequest("clinic name must not be empty".into()));
    }
    Ok(Json(state.clinics.update_clinic(id, draft).await?))
}

/// `DELETE /api/clinic/{id}` — delete the profile and its media.
pub async fn delete_clinic(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    owned_clinic(&state, &user, id).await?;
    state.clinics.delete_clinic(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/clinic/{id}/doctors` — add a doctor.
pub async fn add_doctor(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(draft): Json<DoctorDraft>,
) -> Result<(StatusCode, Json<Doctor>)> {
    owned_clinic(&state, &user, id).await?;
    let doctor = state.clinics.add_doctor(id, draft).await?;
    Ok((StatusCode::CREATED, Json(doctor)))
}

/// `PUT /api/clinic/{id}/doctors/{doctor_id}` — replace a doctor's fields.
pub async fn update_doctor(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path((id, doctor_id)): Path<(Uuid, Uuid)>,
    Json(draft): Json<DoctorDraft>,
) -> Result<Json<Doctor>> {
    owned_clinic(&state, &user, id).await?;
    Ok(Json(state.clinics.update_doctor(id, doctor_id, draft).await?))
}

/// `DELETE /api/clinic/{id}/doctors/{doctor_id}` — remove a doctor.
pub async fn remove_doctor(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path((id, doctor_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode> {
    owned_clinic(&state, &user, id).await?;
    state.clinics.remove_doctor(id, doctor_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/clinic/{id}/photos` — multipart photo upload.
///
/// Accepts `image/jpeg`, `image/png`, and `image/webp` up to 5 MB.
pub async fn upload_photo(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ClinicPhoto>)> {
    owned_clinic(&state, &user, id).await?;

    let mut file: Option<(Vec<u8>, String)> = None;
    let mut caption: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let content_type = field
                    .content_type()
                    .ok_or_else(|| Error::BadRequest("file part needs a content type".into()))?
                    .to_string();
                let bytes = field.bytes().await?;
                if bytes.len() > MAX_UPLOAD_BYTES {
                    return Err(Error::PayloadTooLarge {
                        limit_bytes: MAX_UPLOAD_BYTES,
                    });
                }
                file = Some((bytes.to_vec(), content_type));
            }
            Some("caption") => {
                caption = Some(field.text().await?);
            }
            _ => {}
        }
    }

    let (bytes, content_type) = file.ok_or_else(|| {
        Error::BadRequest("multipart upload needs a 'file' part".into())
    })?;

    let photo = state
        .clinics
        .add_photo(id, bytes, &content_type, caption)
        .await?;
    Ok((StatusCode::CREATED, Json(photo)))
}

/// `DELETE /api/clinic/{id}/photos/{photo_id}` — remove a photo.
pub async fn remove_photo(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path((id, photo_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode> {
    owned_clinic(&state, &user, id).await?;
    state.clinics.remove_photo(id, photo_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
