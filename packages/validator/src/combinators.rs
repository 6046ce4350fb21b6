use crate::validator::Validator;

/// Passes when every validator passes; the first failure is reported
pub fn every(validators: impl IntoIterator<Item = Validator>) -> Validator {
    Validator::Every(validators.into_iter().collect())
}

/// Passes when at least one validator passes
pub fn some(validators: impl IntoIterator<Item = Validator>) -> Validator {
    Validator::SomeOf(validators.into_iter().collect())
}

/// Mutual exclusion: fails when the property and any of `names` are both present
pub fn disallow<I, S>(names: I) -> Validator
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Validator::Disallow(names.into_iter().map(Into::into).collect())
}

/// Fails when the property is present but any of `names` is not
pub fn demand<I, S>(names: I) -> Validator
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Validator::Demand(names.into_iter().map(Into::into).collect())
}

/// Conditional requirement: `then` applies only when every condition holds.
///
/// A condition holds when its property is present and satisfies the
/// condition's validator. Use [`Validator::equals`] to match a literal value.
pub fn given_props<I, S>(conditions: I, then: Validator) -> Validator
where
    I: IntoIterator<Item = (S, Validator)>,
    S: Into<String>,
{
    Validator::GivenProps {
        conditions: conditions
            .into_iter()
            .map(|(name, validator)| (name.into(), validator))
            .collect(),
        then: Box::new(then),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::PropCheck;
    use stencil_common::{props, PropValue, Props};

    fn check(validator: &Validator, prop: &str, props: &Props) -> Result<(), String> {
        validator.check(&PropCheck::new("Breadcrumb", prop, props))
    }

    #[test]
    fn test_disallow_fails_when_other_prop_present() {
        let validator = disallow(["icon"]);

        let both = props! { "divider" => "/", "icon" => "right angle" };
        let reason = check(&validator, "divider", &both).unwrap_err();
        assert!(reason.contains("`icon`"), "{}", reason);

        // the divider's own value does not matter
        let flag = props! { "divider" => false, "icon" => "right angle" };
        assert!(check(&validator, "divider", &flag).is_err());

        let alone = props! { "divider" => "/" };
        assert!(check(&validator, "divider", &alone).is_ok());

        let null_icon = props! { "divider" => "/", "icon" => PropValue::Null };
        assert!(check(&validator, "divider", &null_icon).is_ok());
    }

    #[test]
    fn test_every_surfaces_first_failure() {
        let validator = every([disallow(["children"]), Validator::String]);
        let props = props! { "content" => 3, "children" => "x" };
        let reason = check(&validator, "content", &props).unwrap_err();
        assert!(reason.contains("conflicts"), "{}", reason);

        let props = props! { "content" => 3 };
        let reason = check(&validator, "content", &props).unwrap_err();
        assert!(reason.contains("expected string"), "{}", reason);
    }

    #[test]
    fn test_mutual_exclusion_round_trip() {
        let validator = every([disallow(["children"]), Validator::String]);

        assert!(check(&validator, "content", &props! { "content" => "Save", "children" => "Save" }).is_err());
        assert!(check(&validator, "content", &props! { "content" => "Save" }).is_ok());
        assert!(check(&validator, "content", &props! { "children" => "Save" }).is_ok());
    }

    #[test]
    fn test_some_concatenates_reasons_when_all_fail() {
        let validator = some([Validator::Bool, Validator::String]);
        assert!(check(&validator, "icon", &props! { "icon" => true }).is_ok());
        assert!(check(&validator, "icon", &props! { "icon" => "cloud" }).is_ok());

        let reason = check(&validator, "icon", &props! { "icon" => 4 }).unwrap_err();
        assert!(reason.contains("expected bool"), "{}", reason);
        assert!(reason.contains("expected string"), "{}", reason);
    }

    #[test]
    fn test_given_props_applies_only_when_conditions_match() {
        let validator = given_props([("icon", Validator::String)], disallow(["icon"]));

        let with_icon = props! { "children" => "Save", "icon" => "save" };
        assert!(check(&validator, "children", &with_icon).is_err());

        let icon_flag = props! { "children" => "Save", "icon" => true };
        assert!(check(&validator, "children", &icon_flag).is_ok());

        let without_icon = props! { "children" => "Save" };
        assert!(check(&validator, "children", &without_icon).is_ok());
    }

    #[test]
    fn test_given_props_literal_condition() {
        let validator = given_props(
            [("labelPosition", Validator::equals("left"))],
            demand(["label"]),
        );

        let props = props! { "icon" => "pause", "labelPosition" => "left" };
        assert!(check(&validator, "icon", &props).is_err());

        let props = props! { "icon" => "pause", "labelPosition" => "right" };
        assert!(check(&validator, "icon", &props).is_ok());
    }

    #[test]
    fn test_demand_requires_companions() {
        let validator = demand(["label"]);
        assert!(check(&validator, "labelPosition", &props! { "labelPosition" => "left" }).is_err());
        assert!(check(&validator, "labelPosition", &props! { "labelPosition" => "left", "label" => "x" }).is_ok());
        assert!(check(&validator, "labelPosition", &Props::new()).is_ok());
    }
}
