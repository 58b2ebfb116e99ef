use std::collections::HashSet;

use common::misc::Role;
use serde_json::Value;

/// One page of the wizard and the payload keys it insists on.
#[derive(Debug)]
pub struct StepSpec {
    pub id: &'static str,
    pub required_fields: &'static [&'static str],
}

const TENANT_STEPS: &[StepSpec] = &[
    StepSpec {
        id: "basics",
        required_fields: &["age", "budget"],
    },
    StepSpec {
        id: "preferences",
        required_fields: &["noise_level", "interests"],
    },
    StepSpec {
        id: "lifestyle",
        required_fields: &["lifestyle_tags"],
    },
    StepSpec {
        id: "photo",
        required_fields: &["photo_path"],
    },
];

const HOST_STEPS: &[StepSpec] = &[
    StepSpec {
        id: "basics",
        required_fields: &["age"],
    },
    StepSpec {
        id: "listing",
        required_fields: &["title", "city", "monthly_price"],
    },
    StepSpec {
        id: "photo",
        required_fields: &["photo_path"],
    },
];

/// Fixed, ordered step catalog per role. Admins have nothing to onboard.
pub fn catalog_for(role: Role) -> &'static [StepSpec] {
    match role {
        Role::Tenant => TENANT_STEPS,
        Role::Owner | Role::Host => HOST_STEPS,
        Role::Admin => &[],
    }
}

pub fn find_step(role: Role, step_id: &str) -> Option<&'static StepSpec> {
    catalog_for(role).iter().find(|s| s.id == step_id)
}

/// Required keys the payload leaves absent, null or blank. A step with a
/// non-empty result must not advance.
pub fn missing_fields(spec: &StepSpec, payload: &Value) -> Vec<&'static str> {
    spec.required_fields
        .iter()
        .filter(|field| !field_present(payload.get(**field)))
        .copied()
        .collect()
}

fn field_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(_) => true,
    }
}

/// The first catalog step not yet completed, in catalog order.
pub fn next_step(role: Role, completed: &HashSet<String>) -> Option<&'static str> {
    catalog_for(role)
        .iter()
        .map(|s| s.id)
        .find(|id| !completed.contains(*id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tenant_catalog_is_linear_and_stable() {
        let ids: Vec<&str> = catalog_for(Role::Tenant).iter().map(|s| s.id).collect();
        assert_eq!(ids, ["basics", "preferences", "lifestyle", "photo"]);
    }

    #[test]
    fn blank_required_fields_are_reported_missing() {
        let spec = find_step(Role::Tenant, "preferences").unwrap();

        let missing = missing_fields(spec, &json!({ "noise_level": "  ", "interests": [] }));
        assert_eq!(missing, ["noise_level", "interests"]);

        let missing = missing_fields(
            spec,
            &json!({ "noise_level": "bajo", "interests": ["cocina"] }),
        );
        assert!(missing.is_empty());
    }

    #[test]
    fn null_and_absent_are_equivalent() {
        let spec = find_step(Role::Tenant, "basics").unwrap();
        let missing = missing_fields(spec, &json!({ "age": null }));
        assert_eq!(missing, ["age", "budget"]);
    }

    #[test]
    fn numeric_zero_counts_as_present() {
        let spec = find_step(Role::Host, "listing").unwrap();
        let missing = missing_fields(
            spec,
            &json!({ "title": "Habitación luminosa", "city": "Valencia", "monthly_price": 0 }),
        );
        assert!(missing.is_empty());
    }

    #[test]
    fn next_step_walks_the_catalog_in_order() {
        let mut completed = HashSet::new();
        assert_eq!(next_step(Role::Tenant, &completed), Some("basics"));

        completed.insert("basics".to_string());
        assert_eq!(next_step(Role::Tenant, &completed), Some("preferences"));

        // finishing out of order still resumes at the first gap
        completed.insert("lifestyle".to_string());
        assert_eq!(next_step(Role::Tenant, &completed), Some("preferences"));

        completed.insert("preferences".to_string());
        completed.insert("photo".to_string());
        assert_eq!(next_step(Role::Tenant, &completed), None);
    }

    #[test]
    fn unknown_steps_are_not_in_the_catalog() {
        assert!(find_step(Role::Tenant, "listing").is_none());
        assert!(find_step(Role::Host, "lifestyle").is_none());
    }
}
