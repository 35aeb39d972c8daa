use crate::domain::value_objects::ClientId;

/// The client on whose behalf an operation runs.
///
/// Callers set it before an operation and clear it afterwards; the domain only
/// reads it. It is passed explicitly to every operation that needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveClientContext {
    client: Option<ClientId>,
}

impl ActiveClientContext {
    /// A context with no active client.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_client(client: ClientId) -> Self {
        Self {
            client: Some(client),
        }
    }

    pub fn set(&mut self, client: Option<ClientId>) {
        self.client = client;
    }

    pub fn clear(&mut self) {
        self.client = None;
    }

    pub fn get(&self) -> Option<&ClientId> {
        self.client.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_clear() {
        let mut ctx = ActiveClientContext::new();
        assert!(ctx.get().is_none());

        ctx.set(Some(ClientId::new("client-a")));
        assert_eq!(ctx.get(), Some(&ClientId::new("client-a")));

        ctx.clear();
        assert!(ctx.get().is_none());
    }
}
