use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const TRIAL_DAYS: i64 = 7;
const MIN_MOBILE_DIGITS: usize = 10;
const MAX_MOBILE_DIGITS: usize = 15;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    pub interests: Option<String>,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
    pub approved: bool,
    pub approved_at: Option<DateTime<Utc>>,
    pub approved_by: Option<Uuid>,
    pub rejected_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FreeTrialRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub mobile_number: String,
    pub trial_started_at: DateTime<Utc>,
    pub trial_expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl FreeTrialRow {
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        now >= self.trial_started_at && now < self.trial_expires_at
    }
}

/// `[start, start + TRIAL_DAYS)`.
pub fn trial_window(start: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    (start, start + Duration::days(TRIAL_DAYS))
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileInput {
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    pub interests: Option<String>,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
}

/// A profile form after trimming and checks, ready to store.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanProfile {
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    pub interests: Option<String>,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Strips spaces, dashes and parentheses; keeps a leading `+`.
/// Returns `None` unless 10–15 digits remain.
pub fn normalize_mobile(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let (plus, rest) = match trimmed.strip_prefix('+') {
        Some(rest) => ("+", rest),
        None => ("", trimmed),
    };
    let mut digits = String::with_capacity(rest.len());
    for c in rest.chars() {
        match c {
            '0'..='9' => digits.push(c),
            ' ' | '-' | '(' | ')' => {}
            _ => return None,
        }
    }
    (MIN_MOBILE_DIGITS..=MAX_MOBILE_DIGITS)
        .contains(&digits.len())
        .then(|| format!("{plus}{digits}"))
}

impl ProfileInput {
    /// `is_known_role` decides which career titles are selectable.
    pub fn clean(self, is_known_role: impl Fn(&str) -> bool) -> Result<CleanProfile, String> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err("Please enter your name".to_string());
        }
        let role = self.role.trim().to_string();
        if role.is_empty() {
            return Err("Please select your current role".to_string());
        }
        if !is_known_role(&role) {
            return Err(format!("'{role}' is not a recognised career"));
        }

        let email = optional(self.email);
        if let Some(e) = &email {
            let valid = e
                .split_once('@')
                .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'));
            if !valid {
                return Err(format!("'{e}' is not a valid email address"));
            }
        }

        let mobile_number = match optional(self.mobile_number) {
            Some(raw) => Some(
                normalize_mobile(&raw).ok_or_else(|| format!("'{raw}' is not a valid mobile number"))?,
            ),
            None => None,
        };

        Ok(CleanProfile {
            name,
            role,
            bio: optional(self.bio),
            interests: optional(self.interests),
            email,
            mobile_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ProfileInput {
        ProfileInput {
            name: "  Asha ".to_string(),
            role: "Data Analyst".to_string(),
            bio: Some("   ".to_string()),
            interests: Some("SQL, dashboards".to_string()),
            email: None,
            mobile_number: Some("+91 98765-43210".to_string()),
        }
    }

    fn known(role: &str) -> bool {
        role == "Data Analyst"
    }

    #[test]
    fn test_clean_trims_and_normalizes() {
        let p = input().clean(known).unwrap();
        assert_eq!(p.name, "Asha");
        assert_eq!(p.bio, None);
        assert_eq!(p.mobile_number.as_deref(), Some("+919876543210"));
    }

    #[test]
    fn test_clean_requires_name_and_known_role() {
        let mut i = input();
        i.name = " ".to_string();
        assert!(i.clean(known).is_err());

        let mut i = input();
        i.role = "Astronaut".to_string();
        assert!(i.clean(known).is_err());
    }

    #[test]
    fn test_clean_rejects_bad_email() {
        let mut i = input();
        i.email = Some("not-an-email".to_string());
        assert!(i.clean(known).is_err());

        let mut i = input();
        i.email = Some("asha@example.com".to_string());
        assert!(i.clean(known).is_ok());
    }

    #[test]
    fn test_normalize_mobile() {
        assert_eq!(normalize_mobile("(987) 654-3210").as_deref(), Some("9876543210"));
        assert_eq!(normalize_mobile("12345"), None);
        assert_eq!(normalize_mobile("98765abc10"), None);
        assert_eq!(normalize_mobile("+1234567890123456"), None);
    }

    #[test]
    fn test_trial_window_is_seven_days() {
        let start = Utc::now();
        let (from, until) = trial_window(start);
        assert_eq!(from, start);
        assert_eq!((until - from).num_days(), TRIAL_DAYS);

        let row = FreeTrialRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            mobile_number: "9876543210".to_string(),
            trial_started_at: from,
            trial_expires_at: until,
            created_at: from,
        };
        assert!(row.is_active(start + Duration::days(6)));
        assert!(!row.is_active(until));
    }
}
