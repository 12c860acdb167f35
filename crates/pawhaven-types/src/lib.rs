//! Shared entity model for the Pawhaven admin front end.
//!
//! All types mirror the JSON shapes served by the platform's REST API:
//! camelCase field names, nested summary objects for cross-entity
//! references, and upper-case string enums for roles and statuses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role, as carried in the session and on user records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
	User,
	Admin,
	Shelter,
	Veterinarian,
}

impl Role {
	/// Wire representation, matching the API's enum strings.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::User => "USER",
			Self::Admin => "ADMIN",
			Self::Shelter => "SHELTER",
			Self::Veterinarian => "VETERINARIAN",
		}
	}
}

impl std::fmt::Display for Role {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl std::str::FromStr for Role {
	type Err = ParseEnumError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"USER" => Ok(Self::User),
			"ADMIN" => Ok(Self::Admin),
			"SHELTER" => Ok(Self::Shelter),
			"VETERINARIAN" => Ok(Self::Veterinarian),
			_ => Err(ParseEnumError {
				kind: "role",
				value: s.to_string(),
			}),
		}
	}
}

/// Pet gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
	Male,
	Female,
}

impl Gender {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Male => "MALE",
			Self::Female => "FEMALE",
		}
	}
}

impl std::fmt::Display for Gender {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl std::str::FromStr for Gender {
	type Err = ParseEnumError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"MALE" => Ok(Self::Male),
			"FEMALE" => Ok(Self::Female),
			_ => Err(ParseEnumError {
				kind: "gender",
				value: s.to_string(),
			}),
		}
	}
}

/// Adoption availability of a pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PetStatus {
	Active,
	Adopted,
	Unavailable,
}

impl PetStatus {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Active => "ACTIVE",
			Self::Adopted => "ADOPTED",
			Self::Unavailable => "UNAVAILABLE",
		}
	}
}

impl std::fmt::Display for PetStatus {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl std::str::FromStr for PetStatus {
	type Err = ParseEnumError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"ACTIVE" => Ok(Self::Active),
			"ADOPTED" => Ok(Self::Adopted),
			"UNAVAILABLE" => Ok(Self::Unavailable),
			_ => Err(ParseEnumError {
				kind: "pet status",
				value: s.to_string(),
			}),
		}
	}
}

/// Lifecycle state of an adoption request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdoptionStatus {
	Pending,
	Approved,
	Completed,
	Cancelled,
}

impl AdoptionStatus {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Pending => "PENDING",
			Self::Approved => "APPROVED",
			Self::Completed => "COMPLETED",
			Self::Cancelled => "CANCELLED",
		}
	}
}

impl std::fmt::Display for AdoptionStatus {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl std::str::FromStr for AdoptionStatus {
	type Err = ParseEnumError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"PENDING" => Ok(Self::Pending),
			"APPROVED" => Ok(Self::Approved),
			"COMPLETED" => Ok(Self::Completed),
			"CANCELLED" => Ok(Self::Cancelled),
			_ => Err(ParseEnumError {
				kind: "adoption status",
				value: s.to_string(),
			}),
		}
	}
}

/// Failure to parse a wire enum string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
	kind: &'static str,
	value: String,
}

impl std::fmt::Display for ParseEnumError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "unknown {}: {:?}", self.kind, self.value)
	}
}

impl std::error::Error for ParseEnumError {}

/// A platform account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
	pub id: i64,
	pub username: String,
	pub email: String,
	pub full_name: String,
	pub role: Role,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

/// Abbreviated user reference nested inside other entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
	pub id: i64,
	pub username: String,
	pub full_name: String,
}

/// A pet category (species grouping).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
	pub id: i64,
	pub name: String,
	pub created_at: DateTime<Utc>,
}

/// Abbreviated category reference nested inside pets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
	pub id: i64,
	pub name: String,
}

/// A breed within a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breed {
	pub id: i64,
	pub name: String,
	#[serde(default)]
	pub description: Option<String>,
	pub category_id: i64,
	pub category_name: String,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

/// Abbreviated breed reference nested inside pets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedSummary {
	pub id: i64,
	pub name: String,
}

/// A pet listed on the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
	pub id: i64,
	pub name: String,
	#[serde(default)]
	pub breed: Option<BreedSummary>,
	#[serde(default)]
	pub category: Option<CategorySummary>,
	pub age: i32,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub image: Option<String>,
	pub gender: Gender,
	pub status: PetStatus,
	#[serde(default)]
	pub owner: Option<UserSummary>,
	#[serde(default)]
	pub shelter: Option<UserSummary>,
	#[serde(default)]
	pub veterinarian: Option<UserSummary>,
	#[serde(default)]
	pub adopted_by: Option<UserSummary>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

/// Flattened pet reference nested inside adoptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetSummary {
	pub id: i64,
	pub name: String,
	pub breed: String,
	pub category: String,
	pub age: i32,
	pub gender: String,
	pub status: String,
	#[serde(default)]
	pub image: Option<String>,
}

/// An adoption request and its lifecycle state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adoption {
	pub id: i64,
	pub pet: PetSummary,
	pub adopter: UserSummary,
	pub adoption_date: DateTime<Utc>,
	#[serde(default)]
	pub notes: Option<String>,
	pub status: AdoptionStatus,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

/// A shelter organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shelter {
	pub id: i64,
	pub name: String,
	pub address: String,
	pub email: String,
	pub phone: String,
	pub created_at: DateTime<Utc>,
}

/// Aggregate counters for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
	pub total_pets: u64,
	pub total_adoptions: u64,
	pub total_shelters: u64,
	pub total_users: u64,
	pub total_categories: u64,
	pub total_breeds: u64,
	pub available_pets: u64,
	pub adopted_pets: u64,
	pub pending_adoptions: u64,
}

/// Credentials for `POST /auth/signin`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
	pub username: String,
	pub password: String,
}

/// Payload for `POST /auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
	pub username: String,
	pub email: String,
	pub password: String,
	pub full_name: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub role: Option<Role>,
}

/// Payload for `POST /auth/forgot-password`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
	pub email: String,
}

/// Payload for `POST /auth/reset-password`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
	pub token: String,
	pub password: String,
	pub confirm_password: String,
}

/// Payload for `POST /auth/verify-2fa`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwoFactorRequest {
	pub code: String,
	pub token: String,
}

/// Successful sign-in response.
///
/// When `requires_two_factor` is set the token is temporary and must be
/// exchanged through the 2FA verification endpoint before a session is
/// established.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
	pub token: String,
	#[serde(rename = "type")]
	pub token_type: String,
	pub id: i64,
	pub username: String,
	pub email: String,
	pub role: Role,
	#[serde(default, rename = "requires2FA")]
	pub requires_two_factor: bool,
}

/// Payload for `POST /pets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePetRequest {
	pub name: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub breed_id: Option<i64>,
	pub category_id: i64,
	pub age: i32,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub image: Option<String>,
	pub gender: Gender,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub owner_id: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub shelter_id: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub veterinarian_id: Option<i64>,
}

/// Payload for `PUT /pets/{id}`; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePetRequest {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub breed_id: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub category_id: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub age: Option<i32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub image: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub gender: Option<Gender>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<PetStatus>,
}

/// Payload for creating or renaming a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
	pub name: String,
}

/// Payload for creating or updating a breed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBreedRequest {
	pub name: String,
	pub category_id: i64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

/// Payload for `POST /shelters`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShelterRequest {
	pub name: String,
	pub address: String,
	pub email: String,
	pub phone: String,
}

/// Payload for `PUT /shelters/{id}`; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateShelterRequest {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub address: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub phone: Option<String>,
}

/// Payload for `POST /veterinarians`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVeterinarianRequest {
	pub username: String,
	pub email: String,
	pub password: String,
	pub full_name: String,
}

/// Payload for `PUT /veterinarians/{id}`; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVeterinarianRequest {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub full_name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub password: Option<String>,
}

/// Payload for `POST /adoptions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdoptionRequest {
	pub pet_id: i64,
	pub adopter_id: i64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
}

/// Payload for `PUT /adoptions/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAdoptionStatusRequest {
	pub status: AdoptionStatus,
}

/// Payload for `PUT /adoptions/{id}`; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdoptionRequest {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub adoption_date: Option<DateTime<Utc>>,
}

/// Plain acknowledgement body returned by several auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
	pub message: String,
}

/// Error body shape produced by the API for non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
	#[serde(default)]
	pub timestamp: Option<String>,
	pub message: String,
	#[serde(default)]
	pub details: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Role::User, "\"USER\"")]
	#[case(Role::Admin, "\"ADMIN\"")]
	#[case(Role::Shelter, "\"SHELTER\"")]
	#[case(Role::Veterinarian, "\"VETERINARIAN\"")]
	fn test_role_wire_format(#[case] role: Role, #[case] wire: &str) {
		assert_eq!(serde_json::to_string(&role).unwrap(), wire);
		assert_eq!(serde_json::from_str::<Role>(wire).unwrap(), role);
	}

	#[test]
	fn test_pet_decodes_nested_summaries() {
		let json = r#"{
			"id": 7,
			"name": "Biscuit",
			"breed": {"id": 2, "name": "Beagle"},
			"category": {"id": 1, "name": "Dog"},
			"age": 3,
			"gender": "MALE",
			"status": "ACTIVE",
			"shelter": {"id": 9, "username": "happy-paws", "fullName": "Happy Paws"},
			"createdAt": "2024-05-01T10:00:00Z",
			"updatedAt": "2024-05-02T10:00:00Z"
		}"#;

		let pet: Pet = serde_json::from_str(json).unwrap();
		assert_eq!(pet.breed.as_ref().unwrap().name, "Beagle");
		assert_eq!(pet.category.as_ref().unwrap().id, 1);
		assert_eq!(pet.shelter.as_ref().unwrap().full_name, "Happy Paws");
		assert_eq!(pet.status, PetStatus::Active);
		assert!(pet.owner.is_none());
		assert!(pet.description.is_none());
	}

	#[test]
	fn test_update_payload_omits_unset_fields() {
		let req = UpdatePetRequest {
			status: Some(PetStatus::Adopted),
			..Default::default()
		};
		assert_eq!(
			serde_json::to_string(&req).unwrap(),
			r#"{"status":"ADOPTED"}"#
		);
	}

	#[test]
	fn test_auth_response_two_factor_defaults_off() {
		let json = r#"{
			"token": "abc",
			"type": "Bearer",
			"id": 1,
			"username": "admin",
			"email": "admin@pawhaven.io",
			"role": "ADMIN"
		}"#;
		let auth: AuthResponse = serde_json::from_str(json).unwrap();
		assert!(!auth.requires_two_factor);
		assert_eq!(auth.token_type, "Bearer");
	}

	#[test]
	fn test_stats_round_trip_uses_camel_case() {
		let stats = DashboardStats {
			total_pets: 12,
			pending_adoptions: 3,
			..Default::default()
		};
		let json = serde_json::to_value(&stats).unwrap();
		assert_eq!(json["totalPets"], 12);
		assert_eq!(json["pendingAdoptions"], 3);
	}
}
