//! Form-driven CRM workflows against the in-memory session store.

use super::helpers::{TestCrmService, crm};
use chrono::{TimeZone, Utc};
use crmboard::crm::domain::{CompanyName, ContactStatus};
use crmboard::crm::validation::{CompanyForm, ContactForm, InteractionForm};
use crmboard::form::{FormError, FormSession, FormState};
use crmboard::normalize::{EmailAddress, PhoneNumber};
use rstest::rstest;

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
#[tokio::test(flavor = "multi_thread")]
async fn company_form_submits_normalized_record(crm: TestCrmService) -> eyre::Result<()> {
    let mut form = FormSession::new(CompanyForm {
        name: " Acme Ltda ".to_owned(),
        email: " Contato@Acme.COM.BR ".to_owned(),
        phone: "(11) 3333-4444".to_owned(),
        industry: "Retail".to_owned(),
        ..CompanyForm::default()
    });
    assert_eq!(form.draft().phone_display(), "(11) 3333-4444");

    let data = form.submit()?;
    let company = crm.create_company(data).await?;
    form.complete()?;

    assert_eq!(form.state(), FormState::Closed);
    assert_eq!(company.name().as_str(), "Acme Ltda");
    assert_eq!(
        company.email().map(EmailAddress::as_str),
        Some("contato@acme.com.br")
    );
    assert_eq!(
        company.phone().map(PhoneNumber::as_str),
        Some("1133334444")
    );
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_contact_form_writes_nothing(crm: TestCrmService) -> eyre::Result<()> {
    let mut form = FormSession::new(ContactForm {
        name: "Ana".to_owned(),
        email: "ana@".to_owned(),
        ..ContactForm::default()
    });

    let result = form.submit();

    let Err(FormError::Invalid(errors)) = result else {
        eyre::bail!("expected field errors, got {result:?}");
    };
    assert_eq!(errors.get("email"), Some("Invalid email"));
    assert!(errors.contains("phone"));
    assert!(errors.contains("company"));
    assert!(errors.contains("position"));
    form.cancel()?;
    assert!(crm.list_contacts().await?.is_empty());
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
#[tokio::test(flavor = "multi_thread")]
async fn contact_and_interaction_flow(crm: TestCrmService) -> eyre::Result<()> {
    let company = crm
        .create_company(
            FormSession::new(CompanyForm {
                name: "Acme".to_owned(),
                email: "sales@acme.com".to_owned(),
                phone: "11987654321".to_owned(),
                industry: "Retail".to_owned(),
                ..CompanyForm::default()
            })
            .submit()?,
        )
        .await?;

    let mut contact_form = FormSession::new(ContactForm::default());
    contact_form.edit("name", |draft| draft.name = "Ana Souza".to_owned())?;
    contact_form.edit("email", |draft| draft.email = "ANA@ACME.COM".to_owned())?;
    contact_form.edit("phone", |draft| draft.phone = "(11) 98765-4321".to_owned())?;
    contact_form.edit("company", |draft| draft.company = "Acme".to_owned())?;
    contact_form.edit("position", |draft| draft.position = "Buyer".to_owned())?;
    contact_form.edit("tags", |draft| {
        draft.tags = vec!["vip".to_owned(), "vip".to_owned(), "q3".to_owned()];
    })?;
    contact_form.validate()?;
    let contact = crm.create_contact(contact_form.submit()?).await?;
    contact_form.complete()?;

    assert_eq!(contact.status(), ContactStatus::Lead);
    assert_eq!(contact.tags().as_slice(), ["vip", "q3"]);
    let grouped = crm
        .find_company(company.id())
        .await?
        .ok_or_else(|| eyre::eyre!("company missing"))?;
    assert_eq!(grouped.contacts(), [contact.id()]);

    let interaction = crm
        .create_interaction(
            FormSession::new(InteractionForm {
                contact_id: Some(contact.id()),
                subject: "Kickoff".to_owned(),
                description: "Intro call".to_owned(),
                date: Utc.with_ymd_and_hms(2024, 3, 1, 14, 0, 0).single(),
                duration_minutes: Some(30),
                ..InteractionForm::default()
            })
            .submit()?,
        )
        .await?;
    assert_eq!(interaction.contact_name(), "Ana Souza");

    let acme = CompanyName::new("Acme")?;
    assert_eq!(crm.contacts_for_company(&acme).await?.len(), 1);

    crm.delete_contact(contact.id()).await?;
    assert!(crm.interactions_for_contact(contact.id()).await?.is_empty());
    let emptied = crm
        .find_company(company.id())
        .await?
        .ok_or_else(|| eyre::eyre!("company missing"))?;
    assert!(emptied.contacts().is_empty());
    Ok(())
}
