//! Struct validation through `record!`, embedded fields and self-validation.

use pretty_assertions::assert_eq;
use regex::Regex;
use ruleset_validator::prelude::*;

// ============================================================================
// FIXTURES
// ============================================================================

struct Base {
    id: u64,
}

record!(Base { "ID" => id });

struct Address {
    street: String,
    city: String,
    zip: String,
}

record!(validated Address { "Street" => street, "City" => city, "Zip" => zip });

impl Validatable for Address {
    fn validate(&self) -> Result<(), Error> {
        let zip = Regex::new(r"^[0-9]{5}$").map_err(|e| Error::usage(e.to_string()))?;
        validate_struct(
            self,
            [
                field("Street", (required(), length(5, 50))),
                field("City", required()),
                field("Zip", matches_regex(zip)),
            ],
        )
    }
}

struct Customer {
    base: Base,
    name: String,
    email: String,
    address: Address,
    tags: Vec<String>,
}

record!(validated Customer {
    embed base,
    "Name" => name,
    "Email" => email,
    "Address" => address,
    "Tags" => tags,
});

impl Validatable for Customer {
    fn validate(&self) -> Result<(), Error> {
        validate_struct(
            self,
            [
                field("ID", required()),
                field("Name", (required(), rune_length(2, 40))),
                field(
                    "Email",
                    (
                        required(),
                        string_rule(|s| s.contains('@'), "must be a valid email address"),
                    ),
                ),
                field("Address", ()),
                field("Tags", each(length(1, 10))),
            ],
        )
    }
}

fn good_address() -> Address {
    Address {
        street: "Main Street 1".into(),
        city: "Oslo".into(),
        zip: "12345".into(),
    }
}

fn good_customer() -> Customer {
    Customer {
        base: Base { id: 7 },
        name: "Qiang".into(),
        email: "q@example.com".into(),
        address: good_address(),
        tags: vec!["vip".into()],
    }
}

fn bad_customer() -> Customer {
    Customer {
        base: Base { id: 0 },
        name: String::new(),
        email: "nope".into(),
        address: Address {
            street: "Main".into(),
            city: String::new(),
            zip: "abc".into(),
        },
        tags: vec!["ok".into(), "way-too-long-tag".into()],
    }
}

// ============================================================================
// SELF-VALIDATION
// ============================================================================

#[test]
fn valid_customer_passes() {
    assert_eq!(validate(&good_customer(), ()), Ok(()));
}

#[test]
fn every_failing_field_is_reported() {
    let err = validate(&bad_customer(), ()).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"Address: (City: cannot be blank; Street: the length must be between 5 and 50; Zip: must be in a valid format.); Email: must be a valid email address; ID: cannot be blank; Name: cannot be blank; Tags: (1: the length must be between 1 and 10.)."
    );
}

#[test]
fn nested_errors_are_addressable() {
    let err = validate(&bad_customer(), ()).unwrap_err();
    let fields = err.as_fields().unwrap();
    let address = fields.get("Address").and_then(Error::as_fields).unwrap();

    assert_eq!(address.len(), 3);
    assert_eq!(address.get("City").and_then(Error::code), Some("validation_required"));
    assert_eq!(
        fields.get("Tags").and_then(Error::as_fields).map(|t| t.contains("1")),
        Some(true)
    );
}

#[test]
fn explicit_rules_skip_self_validation() {
    let mut customer = good_customer();
    customer.address.city.clear();

    assert!(validate(&customer.address, not_nil()).is_ok());
    assert!(validate(&customer.address, ()).is_err());
}

#[test]
fn collections_of_structs_are_keyed_by_index() {
    let customers = vec![good_customer(), bad_customer(), good_customer()];
    let err = validate(&customers, ()).unwrap_err();
    let fields = err.as_fields().unwrap();

    assert_eq!(fields.len(), 1);
    assert!(fields.contains("1"));
}

#[test]
fn optional_struct_field() {
    let none: Option<Address> = None;
    assert!(validate(&none, ()).is_ok());
    assert!(validate(&none, required()).is_err());
    assert!(validate_struct(&none, [field("City", required())]).is_ok());
}

// ============================================================================
// EMBEDDED FIELDS
// ============================================================================

struct Audit {
    created_by: String,
}

record!(validated Audit { "CreatedBy" => created_by });

impl Validatable for Audit {
    fn validate(&self) -> Result<(), Error> {
        validate_struct(self, [field("CreatedBy", required())])
    }
}

struct Document {
    audit: Audit,
    title: String,
}

record!(Document { embed audit, "Title" => title });

#[test]
fn embedded_errors_merge_into_parent() {
    let doc = Document {
        audit: Audit {
            created_by: String::new(),
        },
        title: String::new(),
    };
    let err = validate_struct(&doc, [field("audit", ()), field("Title", required())]).unwrap_err();
    assert_eq!(err.to_string(), "CreatedBy: cannot be blank; Title: cannot be blank.");
}

#[test]
fn promoted_fields_resolve_by_simple_name() {
    let doc = Document {
        audit: Audit {
            created_by: "ops".into(),
        },
        title: "Q3".into(),
    };
    let err = validate_struct(&doc, [field("CreatedBy", length(5, 10))]).unwrap_err();
    assert_eq!(err.to_string(), "CreatedBy: the length must be between 5 and 10.");
}

#[test]
fn embedded_field_with_rules_is_nested() {
    let doc = Document {
        audit: Audit {
            created_by: String::new(),
        },
        title: "Q3".into(),
    };
    let rule = by(|value: &Value<'_>| match value.as_record() {
        Some(_) => Err(ValidationError::new("audit", "audit rejected").into()),
        None => Ok(()),
    });
    let err = validate_struct(&doc, [field("audit", rule)]).unwrap_err();
    assert_eq!(err.to_string(), "audit: audit rejected.");
}

struct Stamp {
    name: String,
    created_by: String,
}

record!(validated Stamp { "Name" => name, "CreatedBy" => created_by });

impl Validatable for Stamp {
    fn validate(&self) -> Result<(), Error> {
        validate_struct(
            self,
            [
                field("Name", required().error("inner name blank")),
                field("CreatedBy", required()),
            ],
        )
    }
}

struct Note {
    stamp: Stamp,
    name: String,
}

record!(Note { embed stamp, "Name" => name });

fn note(outer_name: &str) -> Note {
    Note {
        stamp: Stamp {
            name: String::new(),
            created_by: String::new(),
        },
        name: outer_name.into(),
    }
}

#[test]
fn listed_field_keeps_its_entry_over_promoted_one() {
    let expected = "CreatedBy: cannot be blank; Name: the length must be between 5 and 10.";

    let err = validate_struct(&note("x"), [field("stamp", ()), field("Name", length(5, 10))])
        .unwrap_err();
    assert_eq!(err.to_string(), expected);

    let err = validate_struct(&note("x"), [field("Name", length(5, 10)), field("stamp", ())])
        .unwrap_err();
    assert_eq!(err.to_string(), expected);
}

#[test]
fn passing_listed_field_hides_promoted_failure() {
    let err = validate_struct(&note("Henrik"), [field("stamp", ()), field("Name", length(5, 10))])
        .unwrap_err();
    assert_eq!(err.to_string(), "CreatedBy: cannot be blank.");
}

#[test]
fn field_listed_twice_is_usage_error() {
    let err = validate_struct(
        &note("x"),
        [field("Name", length(5, 10)), field("Name", not_in(["x"]))],
    )
    .unwrap_err();
    assert!(err.is_usage());
    assert_eq!(err.to_string(), "field \"Name\" is listed more than once");
}

struct Left {
    name: String,
}
struct Right {
    name: String,
}
struct Both {
    left: Left,
    right: Right,
}
struct Shadowed {
    left: Left,
    name: String,
}

record!(Left { "Name" => name });
record!(Right { "Name" => name });
record!(Both { embed left, embed right });
record!(Shadowed { embed left, "Name" => name });

#[test]
fn duplicate_promoted_name_is_ambiguous() {
    let both = Both {
        left: Left { name: "l".into() },
        right: Right { name: "r".into() },
    };
    let err = validate_struct(&both, [field("Name", required())]).unwrap_err();
    assert!(err.is_usage());
    assert_eq!(err.to_string(), "field \"Name\" is ambiguous");
}

#[test]
fn shallowest_field_wins() {
    let shadowed = Shadowed {
        left: Left {
            name: String::new(),
        },
        name: "outer".into(),
    };
    assert!(validate_struct(&shadowed, [field("Name", required())]).is_ok());
}

// ============================================================================
// USAGE ERRORS
// ============================================================================

#[test]
fn usage_error_aborts_struct_validation() {
    let customer = good_customer();
    let err = validate_struct(
        &customer,
        [field("Name", required()), field("Email", min(3))],
    )
    .unwrap_err();
    assert!(err.is_usage());
    assert_eq!(err.to_string(), "type not supported: string");
}

#[test]
fn unknown_field_names_the_field() {
    let err = validate_struct(&good_customer(), [field("Phone", required())]).unwrap_err();
    assert_eq!(err.to_string(), "field \"Phone\" cannot be found in the struct");
}

#[test]
fn manual_aggregation_with_filter() {
    let name = "";
    let zip = "1234";
    let result = ValidationErrors::filter([
        ("name", validate(name, (required(), length(5, 20)))),
        ("zip", validate(zip, length(5, 5))),
        ("ok", validate("fine", required())),
    ]);
    assert_eq!(
        result.unwrap_err().to_string(),
        "name: cannot be blank; zip: the length must be exactly 5."
    );
}
