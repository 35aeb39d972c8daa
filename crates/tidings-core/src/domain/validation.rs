use crate::domain::{
    context::ActiveClientContext,
    entities::NotificationTemplate,
    error::DomainError,
    registry::{ChannelRegistry, ClientRegistry},
    value_objects::{ChannelId, ClientId, LangCode},
};

/// Centralized template rules.
///
/// Every rule that needs something outside the template (the active client,
/// the client registry, the channel registry) receives it as an argument.
pub struct TemplateValidator;

impl TemplateValidator {
    /// The client a new template belongs to.
    pub fn resolve_created_by(ctx: &ActiveClientContext) -> Result<ClientId, DomainError> {
        ctx.get()
            .cloned()
            .ok_or(DomainError::NotificationClientNotFound)
    }

    /// Only manager clients may share a template.
    pub fn validate_sharing(
        template: &NotificationTemplate,
        registry: &(impl ClientRegistry + ?Sized),
    ) -> Result<(), DomainError> {
        if !template.is_shared() {
            return Ok(());
        }

        match template.created_by() {
            Some(owner) if registry.is_manager(owner) => Ok(()),
            owner => Err(DomainError::OnlyManagerTemplatesCanBeShared {
                created_by: owner.map(ToString::to_string).unwrap_or_default(),
            }),
        }
    }

    /// A manager may only share with the clients it manages.
    pub fn validate_allowed_clients(
        template: &NotificationTemplate,
        registry: &(impl ClientRegistry + ?Sized),
    ) -> Result<(), DomainError> {
        let Some(manager) = template.created_by() else {
            return match template.allowed_clients.first() {
                Some(allowed) => Err(DomainError::AllowedClientNotManagedByManager {
                    client: allowed.client.to_string(),
                    manager: String::new(),
                }),
                None => Ok(()),
            };
        };

        for allowed in &template.allowed_clients {
            if registry.managed_by(&allowed.client).as_ref() != Some(manager) {
                return Err(DomainError::AllowedClientNotManagedByManager {
                    client: allowed.client.to_string(),
                    manager: manager.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Every sender must point at a configured channel.
    pub fn validate_channel_senders(
        template: &NotificationTemplate,
        channels: &(impl ChannelRegistry + ?Sized),
    ) -> Result<(), DomainError> {
        match template
            .channel_senders
            .iter()
            .find(|s| !channels.channel_exists(&s.channel))
        {
            Some(sender) => Err(DomainError::UnknownChannel {
                channel: sender.channel.to_string(),
            }),
            None => Ok(()),
        }
    }

    pub fn validate_language_templates(template: &mut NotificationTemplate) {
        template.validate_language_templates();
    }

    pub fn get_channel_sender<'t>(
        template: &'t NotificationTemplate,
        channel: &ChannelId,
    ) -> Result<(&'t str, &'t str), DomainError> {
        template.get_channel_sender(channel)
    }

    pub fn get_lang_templates<'t>(
        template: &'t NotificationTemplate,
        lang: &LangCode,
    ) -> (&'t str, &'t str) {
        template.get_lang_templates(lang)
    }
}
