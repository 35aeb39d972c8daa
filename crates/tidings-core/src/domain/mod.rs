// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Tidings.
//!
//! This module contains the notification template rules with no I/O. Client
//! and channel lookups are reached through the traits in [`registry`]; the
//! active client is an explicit [`ActiveClientContext`] value.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Rich domain model**: Lookups and normalization live on the template
//!
pub mod context;
pub mod entities;
pub mod error;
pub mod registry;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use context::ActiveClientContext;
pub use entities::{
    channel::NotificationChannel,
    client::NotificationClient,
    template::{
        AllowedClient, ChannelSender, LangTemplate, NotificationTemplate, TemplateBuilder,
        TemplateRecord,
    },
};
pub use error::{DomainError, ErrorCategory};
pub use registry::{ChannelRegistry, ClientRegistry};
pub use validation::TemplateValidator;
pub use value_objects::{ChannelId, ClientId, LangCode, TemplateId};

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(code: &str) -> LangCode {
        LangCode::new(code)
    }

    // ========================================================================
    // Language Template Tests
    // ========================================================================

    #[test]
    fn lang_templates_drop_default_lang_empty_subject_and_duplicates() {
        const PREDEFINED_ROW_COUNT: usize = 1;

        let mut template = NotificationTemplate::builder()
            .title("Ada")
            .lang(lang("en"))
            .lang_template(lang("ar"), "A", "B")
            .build()
            .unwrap();

        // A row for the default language belongs on the template itself.
        template.append_lang_template(LangTemplate::new(
            template.lang.clone(),
            Some("Grace".into()),
            None,
        ));
        template.validate_language_templates();
        assert_eq!(template.lang_templates.len(), PREDEFINED_ROW_COUNT);

        template.append_lang_template(LangTemplate::new(lang("en-US"), None, None));
        template.validate_language_templates();
        assert_eq!(template.lang_templates.len(), PREDEFINED_ROW_COUNT);

        let existing = template.lang_templates[0].lang.clone();
        template.append_lang_template(LangTemplate::new(existing, Some("A".into()), None));
        template.validate_language_templates();
        assert_eq!(template.lang_templates.len(), PREDEFINED_ROW_COUNT);
    }

    #[test]
    fn lang_templates_keep_first_row_per_language() {
        let mut template = NotificationTemplate::builder()
            .title("Ada")
            .lang_template(lang("ar"), "first", "1")
            .lang_template(lang("es"), "hola", "mundo")
            .lang_template(lang("ar"), "second", "2")
            .build()
            .unwrap();

        template.validate_language_templates();

        let langs: Vec<_> = template.lang_templates.iter().map(|r| r.lang.as_str()).collect();
        assert_eq!(langs, ["ar", "es"]);
        assert_eq!(template.lang_templates[0].subject.as_deref(), Some("first"));
    }

    #[test]
    fn empty_subject_row_does_not_shadow_a_later_row() {
        let mut template = NotificationTemplate::builder()
            .title("Ada")
            .lang_template_row(LangTemplate::new(lang("ar"), Some(String::new()), None))
            .lang_template(lang("ar"), "kept", "body")
            .build()
            .unwrap();

        template.validate_language_templates();

        assert_eq!(template.lang_templates.len(), 1);
        assert_eq!(template.lang_templates[0].subject.as_deref(), Some("kept"));
    }

    #[test]
    fn normalizing_twice_is_a_no_op() {
        let mut template = NotificationTemplate::builder()
            .title("Ada")
            .lang_template(lang("en"), "dropped", "")
            .lang_template(lang("ar"), "A", "B")
            .lang_template(lang("fr"), "C", "D")
            .build()
            .unwrap();

        template.validate_language_templates();
        let once = template.lang_templates.clone();
        template.validate_language_templates();

        assert_eq!(template.lang_templates, once);
    }

    #[test]
    fn get_lang_templates_falls_back_to_default() {
        let template = NotificationTemplate::builder()
            .title("Ada")
            .lang(lang("en"))
            .subject("en-subject!")
            .content("en-content!")
            .lang_template(lang("ar"), "ar-subject", "ar-content")
            .lang_template(lang("es"), "es-subject", "es-content")
            .build()
            .unwrap();

        assert_eq!(
            template.get_lang_templates(&lang("en")),
            ("en-subject!", "en-content!")
        );
        assert_eq!(
            template.get_lang_templates(&lang("ar")),
            ("ar-subject", "ar-content")
        );
        assert_eq!(
            template.get_lang_templates(&lang("es")),
            ("es-subject", "es-content")
        );

        // No template defined for this language
        assert_eq!(
            template.get_lang_templates(&lang("pr")),
            ("en-subject!", "en-content!")
        );
    }

    #[test]
    fn get_lang_templates_ignores_row_for_default_lang() {
        let template = NotificationTemplate::builder()
            .title("Ada")
            .subject("top")
            .content("level")
            .lang_template(lang("en"), "row", "ignored")
            .build()
            .unwrap();

        assert_eq!(template.get_lang_templates(&lang("en")), ("top", "level"));
    }

    // ========================================================================
    // Channel Sender Tests
    // ========================================================================

    #[test]
    fn get_channel_sender_matches_by_channel() {
        let template = NotificationTemplate::builder()
            .title("Ada")
            .channel_sender(ChannelId::new("sms"), "C", "D")
            .channel_sender(ChannelId::new("email"), "A", "B")
            .build()
            .unwrap();

        assert_eq!(
            template.get_channel_sender(&ChannelId::new("email")).unwrap(),
            ("A", "B")
        );
    }

    #[test]
    fn get_channel_sender_picks_first_duplicate() {
        let template = NotificationTemplate::builder()
            .title("Ada")
            .channel_sender(ChannelId::new("email"), "A", "first")
            .channel_sender(ChannelId::new("email"), "A", "second")
            .build()
            .unwrap();

        assert_eq!(
            TemplateValidator::get_channel_sender(&template, &ChannelId::new("email")).unwrap(),
            ("A", "first")
        );
    }

    #[test]
    fn get_channel_sender_reports_missing_channel() {
        let template = NotificationTemplate::builder().title("Ada").build().unwrap();

        assert_eq!(
            template.get_channel_sender(&ChannelId::new("push")),
            Err(DomainError::ChannelSenderNotFound {
                channel: "push".into()
            })
        );
    }

    // ========================================================================
    // Template Builder Tests
    // ========================================================================

    #[test]
    fn builder_requires_title() {
        assert_eq!(
            NotificationTemplate::builder().build(),
            Err(DomainError::MissingRequiredField { field: "title" })
        );
        assert!(NotificationTemplate::builder().title("  ").build().is_err());
    }

    #[test]
    fn builder_defaults_to_english() {
        let template = NotificationTemplate::builder().title("Ada").build().unwrap();
        assert_eq!(template.lang, "en");
        assert!(template.created_by().is_none());
    }

    #[test]
    fn availability_covers_creator_and_shared_clients() {
        let mut template = NotificationTemplate::builder()
            .title("OTP")
            .allowed_client(ClientId::new("client-a"))
            .build()
            .unwrap();
        template.set_created_by(ClientId::new("manager-1"));

        assert!(template.is_available_to(&ClientId::new("manager-1")));
        assert!(template.is_available_to(&ClientId::new("client-a")));
        assert!(!template.is_available_to(&ClientId::new("client-z")));
    }

    #[test]
    fn client_management_relationship() {
        let client = NotificationClient::new(ClientId::new("client-a"), "A")
            .managed_by(ClientId::new("manager-1"));

        assert!(client.is_managed_by(&ClientId::new("manager-1")));
        assert!(!client.is_client_manager);
        assert!(NotificationClient::manager(ClientId::new("m"), "M").is_client_manager);
    }
}
