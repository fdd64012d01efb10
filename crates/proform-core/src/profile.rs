use serde::{Deserialize, Serialize};

/// The editable profile entity, mirroring the remote service's JSON shape.
///
/// Fields absent in the remote payload deserialize to empty strings so the
/// form always has a value to bind to. The avatar is either a remote
/// reference or an inline `data:` URL produced by the avatar encoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub about: String,
    pub job_title: String,
    pub avatar: Option<String>,
}

impl ProfileForm {
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::JobTitle => &self.job_title,
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Email => &self.email,
            ProfileField::PhoneNumber => &self.phone_number,
            ProfileField::About => &self.about,
        }
    }

    pub fn field_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::JobTitle => &mut self.job_title,
            ProfileField::FirstName => &mut self.first_name,
            ProfileField::LastName => &mut self.last_name,
            ProfileField::Email => &mut self.email,
            ProfileField::PhoneNumber => &mut self.phone_number,
            ProfileField::About => &mut self.about,
        }
    }
}

/// The six editable fields, in the order the screen presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum ProfileField {
    #[default]
    JobTitle,
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    About,
}

impl ProfileField {
    pub const ALL: [ProfileField; 6] = [
        Self::JobTitle,
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::PhoneNumber,
        Self::About,
    ];

    /// Required fields must be non-empty after trimming at submit time.
    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Email | Self::PhoneNumber)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::JobTitle => "Job Title",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::PhoneNumber => "Phone Number",
            Self::About => "About",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::JobTitle => Self::FirstName,
            Self::FirstName => Self::LastName,
            Self::LastName => Self::Email,
            Self::Email => Self::PhoneNumber,
            Self::PhoneNumber => Self::About,
            Self::About => Self::JobTitle, // Loop back to the top
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::JobTitle => Self::About, // Loop back to the bottom
            Self::FirstName => Self::JobTitle,
            Self::LastName => Self::FirstName,
            Self::Email => Self::LastName,
            Self::PhoneNumber => Self::Email,
            Self::About => Self::PhoneNumber,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty_strings() {
        let form: ProfileForm =
            serde_json::from_str(r#"{"firstName":"Ada","lastName":"Lovelace"}"#).unwrap();
        assert_eq!(form.first_name, "Ada");
        assert_eq!(form.last_name, "Lovelace");
        assert_eq!(form.email, "");
        assert_eq!(form.job_title, "");
        assert_eq!(form.avatar, None);
    }

    #[test]
    fn serializes_with_wire_names() {
        let form = ProfileForm {
            first_name: "Ada".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["phoneNumber"], "");
    }

    #[test]
    fn field_selection_cycles_through_all_fields() {
        let mut field = ProfileField::default();
        for expected in ProfileField::ALL {
            assert_eq!(field, expected);
            field = field.next();
        }
        assert_eq!(field, ProfileField::JobTitle);
        assert_eq!(ProfileField::JobTitle.previous(), ProfileField::About);
    }
}
