//! Doctor profile models.

use serde::{Deserialize, Serialize};

/// The signed-in doctor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorProfile {
    pub id: String,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub qualification: String,
    pub specialization: String,
    pub registration_number: String,
    pub clinic_name: String,
    pub clinic_address: String,
    /// Years of practice
    pub experience: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_url: Option<String>,
}

/// Partial profile edit. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorProfileUpdate {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub qualification: Option<String>,
    pub specialization: Option<String>,
    pub registration_number: Option<String>,
    pub clinic_name: Option<String>,
    pub clinic_address: Option<String>,
    pub experience: Option<u32>,
}

impl DoctorProfile {
    /// Apply a partial edit in place.
    pub fn apply(&mut self, update: DoctorProfileUpdate) {
        let DoctorProfileUpdate {
            full_name,
            phone,
            email,
            qualification,
            specialization,
            registration_number,
            clinic_name,
            clinic_address,
            experience,
        } = update;

        if let Some(v) = full_name {
            self.full_name = v;
        }
        if let Some(v) = phone {
            self.phone = v;
        }
        if let Some(v) = email {
            self.email = v;
        }
        if let Some(v) = qualification {
            self.qualification = v;
        }
        if let Some(v) = specialization {
            self.specialization = v;
        }
        if let Some(v) = registration_number {
            self.registration_number = v;
        }
        if let Some(v) = clinic_name {
            self.clinic_name = v;
        }
        if let Some(v) = clinic_address {
            self.clinic_address = v;
        }
        if let Some(v) = experience {
            self.experience = v;
        }
    }
}

/// Clinic letterhead details printed on every prescription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicDetails {
    pub name: String,
    pub address: String,
    /// Phone and email line, e.g. "+91-80-4567-8901 | care@doz3.health"
    pub contact: String,
}

impl Default for ClinicDetails {
    fn default() -> Self {
        Self {
            name: "DOZ3 Digital Health Clinic".to_string(),
            address: "42, 1st Cross, Indiranagar, Bengaluru - 560038".to_string(),
            contact: "+91-80-4567-8901 | care@doz3.health".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;

    #[test]
    fn test_apply_update_only_touches_given_fields() {
        let mut doctor = demo::default_doctor();
        doctor.apply(DoctorProfileUpdate {
            specialization: Some("Endocrinology".into()),
            experience: Some(13),
            ..Default::default()
        });

        assert_eq!(doctor.specialization, "Endocrinology");
        assert_eq!(doctor.experience, 13);
        assert_eq!(doctor.full_name, "Dr. Priya Sharma");
    }

    #[test]
    fn test_profile_json_uses_camel_case() {
        let json = serde_json::to_value(demo::default_doctor()).unwrap();
        assert_eq!(json["fullName"], "Dr. Priya Sharma");
        assert_eq!(json["registrationNumber"], "MCI-12345678");
        assert!(json.get("avatarUrl").is_none());
    }
}
