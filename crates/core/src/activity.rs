//! Work and employment payloads synthesised per request, and put-code allocation.

use crate::config::CoreConfig;
use crate::constants::{
    GENERIC_DEPARTMENT, GENERIC_EMPLOYMENT_START_YEAR, GENERIC_ORGANIZATION, GENERIC_ROLE,
    GENERIC_WORK_TITLE, GENERIC_WORK_TYPE, GENERIC_WORK_YEAR, PUT_CODE_MAX, PUT_CODE_MIN,
    UPDATED_STATUS,
};
use orcid::{Employment, FuzzyDate, Organization, PutCodeEcho, Title, Work};
use orcid_types::PutCode;
use rand::Rng;
use std::fmt;

/// Activity section addressed by a registry path segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActivityKind {
    Work,
    Employment,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 2] = [ActivityKind::Work, ActivityKind::Employment];

    /// Path segment, e.g. `work` in `/v3.0/{id}/work/{put-code}`.
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityKind::Work => "work",
            ActivityKind::Employment => "employment",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of put-codes for newly created activities.
pub trait PutCodeSource: Send + Sync {
    fn next_put_code(&self) -> PutCode;
}

/// Uniformly random put-codes in `[100000, 999099]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPutCodes;

impl PutCodeSource for RandomPutCodes {
    fn next_put_code(&self) -> PutCode {
        PutCode::new(rand::thread_rng().gen_range(PUT_CODE_MIN..=PUT_CODE_MAX))
    }
}

/// Always hands out the same put-code. Useful for deterministic tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedPutCode(pub PutCode);

impl PutCodeSource for FixedPutCode {
    fn next_put_code(&self) -> PutCode {
        self.0
    }
}

/// Put-code named by a path segment. Segments that are not base-10 integers read as 0.
pub fn put_code_from_segment(raw: &str) -> PutCode {
    raw.parse::<PutCode>().unwrap_or_else(|e| {
        tracing::debug!(segment = raw, error = %e, "non-integer put-code segment, using 0");
        PutCode::new(0)
    })
}

/// Work returned for any `GET /v3.0/{id}/work/{put-code}`.
pub fn generic_work(put_code: PutCode) -> Work {
    Work {
        put_code,
        visibility: None,
        title: Title::new(GENERIC_WORK_TITLE),
        work_type: GENERIC_WORK_TYPE.to_owned(),
        publication_date: Some(FuzzyDate::year(GENERIC_WORK_YEAR)),
    }
}

/// Employment returned for any `GET /v3.0/{id}/employment/{put-code}`.
pub fn generic_employment(put_code: PutCode) -> Employment {
    Employment {
        put_code,
        visibility: None,
        department_name: Some(GENERIC_DEPARTMENT.to_owned()),
        role_title: Some(GENERIC_ROLE.to_owned()),
        start_date: Some(FuzzyDate::year(GENERIC_EMPLOYMENT_START_YEAR)),
        organization: Organization {
            name: GENERIC_ORGANIZATION.to_owned(),
        },
    }
}

pub fn created_echo(put_code: PutCode) -> PutCodeEcho {
    PutCodeEcho {
        put_code,
        status: None,
    }
}

pub fn updated_echo(put_code: PutCode) -> PutCodeEcho {
    PutCodeEcho {
        put_code,
        status: Some(UPDATED_STATUS.to_owned()),
    }
}

/// Absolute URL of one activity, as sent in the `Location` header.
pub fn location(config: &CoreConfig, orcid: &str, kind: ActivityKind, put_code: PutCode) -> String {
    format!(
        "https://{}/v3.0/{}/{}/{}",
        config.public_host(),
        orcid,
        kind,
        put_code
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_put_codes_stay_in_range() {
        let source = RandomPutCodes;
        for _ in 0..10_000 {
            let code = source.next_put_code().get();
            assert!((PUT_CODE_MIN..=PUT_CODE_MAX).contains(&code), "{code} out of range");
        }
    }

    #[test]
    fn non_integer_put_code_segments_read_as_zero() {
        assert_eq!(put_code_from_segment("123"), PutCode::new(123));
        assert_eq!(put_code_from_segment("-4"), PutCode::new(-4));
        assert_eq!(put_code_from_segment("abc"), PutCode::new(0));
        assert_eq!(put_code_from_segment("12.5"), PutCode::new(0));
        assert_eq!(put_code_from_segment(""), PutCode::new(0));
    }

    #[test]
    fn generic_payloads_echo_the_put_code() {
        let work = generic_work(PutCode::new(77));
        assert_eq!(work.put_code, PutCode::new(77));
        assert_eq!(work.title.title.value, "Retrieved Mock Work");
        assert_eq!(work.work_type, "work");
        assert_eq!(work.publication_date, Some(FuzzyDate::year("2023")));

        let employment = generic_employment(PutCode::new(88));
        assert_eq!(employment.put_code, PutCode::new(88));
        assert_eq!(employment.organization.name, "Mock Org");
        assert_eq!(employment.start_date, Some(FuzzyDate::year("2020")));
    }

    #[test]
    fn echoes() {
        assert_eq!(created_echo(PutCode::new(5)).status, None);
        assert_eq!(
            updated_echo(PutCode::new(5)).status.as_deref(),
            Some("updated")
        );
    }

    #[test]
    fn location_uses_public_host() {
        let cfg = CoreConfig::new(":8080", "sandbox.orcid.org").expect("config");
        assert_eq!(
            location(&cfg, "0000-0001-2345-6789", ActivityKind::Employment, PutCode::new(42)),
            "https://sandbox.orcid.org/v3.0/0000-0001-2345-6789/employment/42"
        );
    }
}
