//! Email normalization, validation and suggestion tests.

use crate::normalize::email::{
    EmailAddress, EmailSuggester, domain_of, is_valid, normalize, suggest_correction,
};
use rstest::rstest;

#[rstest]
fn normalize_trims_and_lowercases() {
    assert_eq!(normalize(" Foo@BAR.com "), "foo@bar.com");
}

#[rstest]
#[case("a@b.co", true)]
#[case("first.last+crm@empresa.com.br", true)]
#[case("user_1%x@sub-domain.example.org", true)]
#[case("foo@bar", false)]
#[case("foo@bar.c", false)]
#[case("foo@bar.c0m", false)]
#[case("@bar.com", false)]
#[case("foo bar@baz.com", false)]
#[case("", false)]
fn is_valid_matches_local_domain_tld(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_valid(input), expected);
}

#[rstest]
fn domain_of_requires_valid_address() {
    assert_eq!(domain_of("ana@empresa.com.br"), "empresa.com.br");
    assert_eq!(domain_of("ana@empresa"), "");
    assert_eq!(domain_of("not an email"), "");
}

#[rstest]
#[case("ana@gmial.com", Some("ana@gmail.com"))]
#[case("ana@gmail.co", Some("ana@gmail.com"))]
#[case("ana@hotmial.com", Some("ana@hotmail.com"))]
#[case("ana@gmail.com", None)]
#[case("ana@empresa.com.br", None)]
#[case("no-at-sign", None)]
#[case("@gmial.com", None)]
fn suggest_correction_proposes_close_common_domain(
    #[case] input: &str,
    #[case] expected: Option<&str>,
) {
    assert_eq!(suggest_correction(input).as_deref(), expected);
}

#[rstest]
fn suggest_correction_prefers_first_listed_domain() {
    let suggester = EmailSuggester::new(["mail.com", "mall.com"]);
    assert_eq!(
        suggester.suggest("bia@maxl.com").as_deref(),
        Some("bia@mail.com")
    );
}

#[rstest]
fn suggest_correction_skips_large_length_gaps() {
    let suggester = EmailSuggester::new(["gmail.com"]);
    assert_eq!(suggester.suggest("bia@gmail.com.br.xx"), None);
}

#[rstest]
fn email_address_is_stored_normalized() {
    let email = EmailAddress::from_input("  Ana.Souza@Empresa.COM ");

    assert_eq!(email.as_str(), "ana.souza@empresa.com");
    assert!(email.is_valid());
    assert_eq!(email.domain(), "empresa.com");
}
