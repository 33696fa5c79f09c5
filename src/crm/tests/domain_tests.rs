//! Domain-focused tests for CRM entities and tag sets.

use crate::crm::domain::{
    Company, CompanyName, CompanyPatch, CompanyStatus, Contact, ContactId, ContactPatch,
    ContactStatus, CrmDomainError, InteractionType, NewCompany, NewContact, ParseVariantError,
    TagSet,
};
use crate::normalize::{EmailAddress, PhoneNumber};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn acme() -> CompanyName {
    CompanyName::new("Acme").expect("valid company name")
}

#[rstest]
fn company_name_is_trimmed_and_required() {
    let name = CompanyName::new("  Acme Ltda ").expect("valid company name");
    assert_eq!(name.as_str(), "Acme Ltda");
    assert!(name.matches(" Acme Ltda"));
    assert_eq!(
        CompanyName::new("   "),
        Err(CrmDomainError::EmptyField { field: "company" })
    );
}

#[rstest]
#[case("active", CompanyStatus::Active)]
#[case(" Prospect ", CompanyStatus::Prospect)]
#[case("INACTIVE", CompanyStatus::Inactive)]
fn company_status_parses_case_insensitively(#[case] raw: &str, #[case] expected: CompanyStatus) {
    assert_eq!(CompanyStatus::try_from(raw), Ok(expected));
}

#[rstest]
fn unknown_variants_report_kind_and_value() {
    let err = ContactStatus::try_from("vip").expect_err("vip is not a status");
    assert_eq!(
        err,
        ParseVariantError {
            kind: "contact status",
            value: "vip".to_owned(),
        }
    );
    assert_eq!(err.to_string(), "unknown contact status: vip");
    assert!(InteractionType::try_from("fax").is_err());
}

#[rstest]
fn company_new_assigns_identity_and_keeps_canonical_fields(clock: DefaultClock) {
    let data = NewCompany::new(acme(), " Retail ")
        .with_email(EmailAddress::from_input(" Sales@Acme.COM "))
        .with_phone(PhoneNumber::from_input("(11) 3333-4444"));
    let company = Company::new(data, &clock);

    assert_eq!(company.email().map(EmailAddress::as_str), Some("sales@acme.com"));
    assert_eq!(company.phone().map(PhoneNumber::as_str), Some("1133334444"));
    assert_eq!(company.industry(), "Retail");
    assert_eq!(company.status(), CompanyStatus::Active);
    assert!(company.contacts().is_empty());
}

#[rstest]
fn company_apply_preserves_identity_and_creation_time(clock: DefaultClock) {
    let mut company = Company::new(NewCompany::new(acme(), "Retail"), &clock);
    let id = company.id();
    let created_at = company.created_at();

    company.apply(CompanyPatch {
        name: Some(CompanyName::new("Acme Global").expect("valid company name")),
        website: Some("https://acme.example".to_owned()),
        status: Some(CompanyStatus::Prospect),
        ..CompanyPatch::default()
    });

    assert_eq!(company.id(), id);
    assert_eq!(company.created_at(), created_at);
    assert_eq!(company.name().as_str(), "Acme Global");
    assert_eq!(company.website(), Some("https://acme.example"));
    assert_eq!(company.industry(), "Retail");
    assert_eq!(company.status(), CompanyStatus::Prospect);

    company.apply(CompanyPatch {
        website: Some("  ".to_owned()),
        ..CompanyPatch::default()
    });
    assert_eq!(company.website(), None);
}

#[rstest]
fn company_contact_grouping_is_ordered_and_unique(clock: DefaultClock) {
    let mut company = Company::new(NewCompany::new(acme(), "Retail"), &clock);
    let first = ContactId::new();
    let second = ContactId::new();
    let third = ContactId::new();

    assert!(company.attach_contact(first));
    assert!(company.attach_contact(second));
    assert!(!company.attach_contact(first));
    assert!(company.attach_contact(third));
    assert!(company.detach_contact(second));
    assert!(!company.detach_contact(second));

    assert_eq!(company.contacts(), [first, third]);
}

#[rstest]
fn contact_status_transitions_are_unconstrained(clock: DefaultClock) {
    let mut contact = Contact::new(
        NewContact::new("Ana", acme(), "Buyer").with_status(ContactStatus::Customer),
        &clock,
    );

    contact.set_status(ContactStatus::Lead);
    assert_eq!(contact.status(), ContactStatus::Lead);
    contact.set_status(ContactStatus::Inactive);
    contact.set_status(ContactStatus::Customer);
    assert_eq!(contact.status(), ContactStatus::Customer);
}

#[rstest]
fn contact_apply_replaces_only_patched_fields(clock: DefaultClock) {
    let mut contact = Contact::new(
        NewContact::new("Ana", acme(), "Buyer").with_tags(["vip"]),
        &clock,
    );
    let created_at = contact.created_at();

    contact.apply(ContactPatch {
        position: Some(" Head of Purchasing ".to_owned()),
        source: Some("referral".to_owned()),
        ..ContactPatch::default()
    });

    assert_eq!(contact.name(), "Ana");
    assert_eq!(contact.position(), "Head of Purchasing");
    assert_eq!(contact.source(), Some("referral"));
    assert!(contact.tags().contains("vip"));
    assert_eq!(contact.created_at(), created_at);
}

#[rstest]
fn tag_add_is_idempotent() {
    let mut tags = TagSet::new();
    assert!(tags.add("vip"));
    assert!(!tags.add("vip"));
    assert!(!tags.add(" vip "));
    assert!(!tags.add("   "));
    assert_eq!(tags.len(), 1);
}

#[rstest]
fn tag_matching_is_case_sensitive() {
    let mut tags = TagSet::new();
    tags.add("VIP");
    assert!(tags.add("vip"));
    assert_eq!(tags.len(), 2);
}

#[rstest]
fn tag_remove_preserves_order_of_remaining_tags() {
    let mut tags: TagSet = ["a", "b", "c", "d"].into_iter().collect();

    assert!(tags.remove("b"));
    assert!(!tags.remove("missing"));

    assert_eq!(tags.iter().collect::<Vec<_>>(), ["a", "c", "d"]);
}

#[rstest]
fn tag_remove_and_contains_match_exact_string() {
    let mut tags: TagSet = ["vip", "q3"].into_iter().collect();

    assert!(!tags.contains(" vip"));
    assert!(!tags.remove(" vip"));
    assert_eq!(tags.as_slice(), ["vip", "q3"]);
    assert!(tags.remove("vip"));
    assert_eq!(tags.as_slice(), ["q3"]);
}

#[rstest]
fn tag_set_deduplicates_when_deserialized() {
    let tags: TagSet =
        serde_json::from_str(r#"["x", "y", "x"]"#).expect("tag array should deserialize");
    assert_eq!(tags.as_slice(), ["x", "y"]);
    assert_eq!(
        serde_json::to_string(&tags).expect("tags should serialize"),
        r#"["x","y"]"#
    );
}
